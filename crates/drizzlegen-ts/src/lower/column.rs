use super::column_override::ColumnOverride;
use super::Lower;

use crate::dialect::{ColumnType, TypeOptions, TypeRef};
use crate::stmt::{Arg, ColumnDecl, Expr, Modifier};
use crate::Literal;

use drizzlegen_core::schema::ast::FieldAst;
use drizzlegen_core::schema::dmmf::{DefaultValue, Field, FieldKind, Model};
use drizzlegen_core::schema::Directives;
use drizzlegen_core::{err, BigIntMode, Result};

impl Lower<'_> {
    /// Lowers a scalar or enum field to a column.
    ///
    /// Returns `Ok(None)` when the field's type is not known to the dialect.
    pub(super) fn column(
        &mut self,
        model: &Model,
        field: &Field,
        field_ast: Option<&FieldAst>,
        directives: &Directives,
    ) -> Result<Option<ColumnDecl>> {
        let column_override = if self.dialect.supports_column_override() {
            ColumnOverride::from_field(model, field)?
        } else {
            None
        };

        let column_type = match &column_override {
            Some(column_override) => Some(column_override.column_type(self.cx)),
            None => self
                .column_type(field, field_ast, directives)
                .map_err(|err| err.context(err!("field `{}.{}`", model.name, field.name)))?,
        };

        let Some(column_type) = column_type else {
            tracing::warn!(
                model = %model.name,
                field = %field.name,
                ty = %field.ty,
                "unrecognized column type; skipping column"
            );
            return Ok(None);
        };

        tracing::trace!(
            model = %model.name,
            field = %field.name,
            ctor = %column_type.ctor,
            "resolved column type"
        );

        let ColumnType {
            ctor,
            args,
            mut modifiers,
        } = column_type;

        if !directives.modifiers.is_empty() {
            self.cx.import_drizzle("sql");
            modifiers.extend(directives.modifiers.iter().cloned().map(Modifier::Raw));
        }

        if let Some(ty) = &directives.ts_type {
            modifiers.push(Modifier::TsType {
                ty: ty.clone(),
                nullable: !field.is_required,
            });
        }

        if field.is_list && self.dialect.supports_arrays() {
            modifiers.push(Modifier::Array);
        }

        if field.is_required {
            modifiers.push(Modifier::NotNull);
        }

        if field.is_id {
            modifiers.push(Modifier::PrimaryKey {
                auto_increment: self.dialect.auto_increment_primary_key()
                    && is_auto_increment(field),
            });
        }

        if field.is_unique {
            modifiers.push(Modifier::Unique);
        }

        match column_override.as_ref().map(|column_override| &column_override.default) {
            Some(default) => {
                modifiers.extend(default.clone().map(|default| Modifier::Default(default.into())))
            }
            None => modifiers.extend(self.default(field)),
        }

        let updated_at = field.is_updated_at
            || field_ast.is_some_and(|ast| ast.has_attribute(None, "updatedAt"));

        if updated_at {
            modifiers.extend(self.dialect.updated_at(field.default.is_some()));
        }

        if self.dialect.inline_references() {
            modifiers.extend(self.references(model, field)?);
        }

        if modifiers.iter().any(uses_sql) {
            self.cx.import_drizzle("sql");
        }

        Ok(Some(ColumnDecl {
            key: field.name.clone(),
            ctor,
            db_name: field.db_name().to_string(),
            args,
            modifiers,
        }))
    }

    /// Resolves the column type: `@type` first, then a native type attribute,
    /// then the field's scalar type.
    fn column_type(
        &mut self,
        field: &Field,
        field_ast: Option<&FieldAst>,
        directives: &Directives,
    ) -> Result<Option<ColumnType>> {
        let schema = self.schema;

        match field.kind {
            FieldKind::Enum => {
                let Some(schema_enum) = schema.datamodel.schema_enum(&field.ty) else {
                    return Ok(None);
                };
                return Ok(Some(self.dialect.enum_column(self.cx, schema_enum)));
            }
            FieldKind::Unsupported | FieldKind::Object => return Ok(None),
            FieldKind::Scalar => {}
        }

        let ty = match &directives.type_override {
            Some(type_override) => {
                let ty = TypeRef::new(&type_override.ty);
                match &type_override.config {
                    Some(config) => ty.with_config(Arg::Raw(config.clone())),
                    None => ty,
                }
            }
            None => field_ast
                .and_then(|field_ast| self.dialect.native_type(field_ast))
                .unwrap_or_else(|| TypeRef::new(&field.ty)),
        };

        if directives.imported_type().is_some() {
            return Ok(Some(ColumnType::new(&ty.name).config(&ty)));
        }

        let options = TypeOptions {
            auto_increment: is_auto_increment(field),
            bigint_mode: self.options.bigint_mode,
        };

        self.dialect.column_type(self.cx, &ty, options)
    }

    fn default(&self, field: &Field) -> Option<Modifier> {
        let default: Expr = match field.default.as_ref()? {
            DefaultValue::Scalar(value) => {
                let bigint = self.options.bigint_mode == BigIntMode::Bigint
                    && field.ty.eq_ignore_ascii_case("bigint");

                let literal = match value {
                    serde_json::Value::Number(n) if bigint => Literal::Number(format!("{n}n")),
                    value => Literal::from_json(value),
                };
                literal.into()
            }
            DefaultValue::List(values) => {
                Literal::Array(values.iter().map(Literal::from_json).collect()).into()
            }
            DefaultValue::Function(function) => match function.name.as_str() {
                "now" => return Some(self.dialect.now_default()),
                "autoincrement" => return None,
                "dbgenerated" => Expr::Sql(function.first_arg().unwrap_or_default()),
                _ if function.is_uuid() => Expr::Sql(self.dialect.uuid_default().to_string()),
                _ => Expr::Sql(function.to_call_expr()),
            },
        };

        Some(Modifier::Default(default))
    }

    /// The inline reference of a column used as a foreign key by a relation
    /// of the same model.
    fn references(&mut self, model: &Model, field: &Field) -> Result<Option<Modifier>> {
        let Some(relation) = model.foreign_key_for(&field.name) else {
            return Ok(None);
        };

        let Some(column) = relation.referenced_field_for(&field.name) else {
            return Ok(None);
        };

        let column_ty = self.dialect.any_column();
        self.cx.import_core(column_ty);

        Ok(Some(Modifier::References {
            column_ty,
            table: self.symbol(&relation.ty),
            column: column.to_string(),
            on_delete: relation.on_delete()?,
        }))
    }
}

fn is_auto_increment(field: &Field) -> bool {
    field
        .default
        .as_ref()
        .is_some_and(|default| default.is_function("autoincrement"))
}

fn uses_sql(modifier: &Modifier) -> bool {
    matches!(
        modifier,
        Modifier::Default(Expr::Sql(_)) | Modifier::OnUpdate(Expr::Sql(_))
    )
}
