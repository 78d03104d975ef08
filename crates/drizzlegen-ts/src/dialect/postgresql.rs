use super::{binary_unsupported, decimal_config, mode, ColumnType, Dialect, TypeOptions, TypeRef};
use crate::stmt::{EnumDecl, Expr, IndexMethod, Modifier};
use crate::{EmitContext, Literal};

use drizzlegen_core::schema::ast::FieldAst;
use drizzlegen_core::schema::dmmf::Enum;
use drizzlegen_core::Result;

const TSVECTOR: &str = "\
const tsvector = customType<{ data: string }>({
\tdataType() {
\t\treturn 'tsvector';
\t},
});";

#[derive(Debug, Default, Clone, Copy)]
pub struct Postgresql;

impl Dialect for Postgresql {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn core_module(&self) -> &'static str {
        "drizzle-orm/pg-core"
    }

    fn table_fn(&self) -> &'static str {
        "pgTable"
    }

    fn any_column(&self) -> &'static str {
        "AnyPgColumn"
    }

    fn enum_decl(&self, cx: &mut EmitContext, schema_enum: &Enum) -> Option<EnumDecl> {
        if schema_enum.values.is_empty() {
            return None;
        }

        cx.import_core("pgEnum");

        Some(EnumDecl {
            symbol: schema_enum.name.clone(),
            ctor: "pgEnum",
            db_name: schema_enum.db_name().to_string(),
            values: schema_enum.value_names().map(str::to_string).collect(),
        })
    }

    fn enum_column(&self, _cx: &mut EmitContext, schema_enum: &Enum) -> ColumnType {
        ColumnType::new(&schema_enum.name)
    }

    fn native_type(&self, field: &FieldAst) -> Option<TypeRef> {
        field.attributes.iter().find_map(|attribute| {
            if attribute.group.as_deref() != Some("db") {
                return None;
            }

            match attribute.name.as_str() {
                "Uuid" => Some(TypeRef::new("uuid")),
                "SmallInt" => Some(TypeRef::new("smallint")),
                "Real" => Some(TypeRef::new("real")),
                "Timestamptz" => {
                    let precision = attribute.first_number().unwrap_or(6);
                    Some(TypeRef::new("timestamp").with_config(Literal::object([
                        ("mode", Literal::string("date")),
                        ("withTimezone", Literal::Bool(true)),
                        ("precision", Literal::number(precision)),
                    ])))
                }
                "VarChar" => {
                    let ty = TypeRef::new("varchar");
                    Some(match attribute.first_number() {
                        Some(length) => {
                            ty.with_config(Literal::object([("length", Literal::number(length))]))
                        }
                        None => ty,
                    })
                }
                _ => None,
            }
        })
    }

    fn column_type(
        &self,
        cx: &mut EmitContext,
        ty: &TypeRef,
        options: TypeOptions,
    ) -> Result<Option<ColumnType>> {
        let auto = options.auto_increment;

        let column = match ty.name.to_lowercase().as_str() {
            "real" => ColumnType::core(cx, "real").config(ty),
            "varchar" => ColumnType::core(cx, "varchar").config(ty),
            "uuid" => ColumnType::core(cx, "uuid").config(ty),
            "tsvector" => {
                cx.import_core("customType");
                cx.constant("tsvector", || TSVECTOR.to_string());
                ColumnType::new("tsvector").config(ty)
            }
            "geometry" => ColumnType::core(cx, "geometry").config(ty),
            "smallint" if auto => ColumnType::core(cx, "smallserial").config(ty),
            "smallint" => ColumnType::core(cx, "smallint").config(ty),
            "bigint" => {
                let ctor = if auto { "bigserial" } else { "bigint" };
                ColumnType::core(cx, ctor).config_or(ty, mode(options.bigint_mode.as_str()))
            }
            "boolean" => ColumnType::core(cx, "boolean").config(ty),
            "bytes" => return Err(binary_unsupported(self)),
            "datetime" | "timestamp" => ColumnType::core(cx, "timestamp").config_or(
                ty,
                Literal::object([
                    ("mode", Literal::string("date")),
                    ("precision", Literal::number(3)),
                ]),
            ),
            "decimal" => ColumnType::core(cx, "decimal").config_or(ty, decimal_config()),
            "float" | "doubleprecision" => ColumnType::core(cx, "doublePrecision").config(ty),
            "json" | "jsonb" => ColumnType::core(cx, "jsonb").config(ty),
            "int" | "integer" if auto => ColumnType::core(cx, "serial").config(ty),
            "int" | "integer" => ColumnType::core(cx, "integer").config(ty),
            "string" | "text" => ColumnType::core(cx, "text").config(ty),
            _ => return Ok(None),
        };

        Ok(Some(column))
    }

    fn now_default(&self) -> Modifier {
        Modifier::DefaultNow
    }

    fn uuid_default(&self) -> &'static str {
        "gen_random_uuid()"
    }

    fn updated_at(&self, has_default: bool) -> Vec<Modifier> {
        let mut modifiers = vec![];
        if !has_default {
            modifiers.push(Modifier::DefaultNow);
        }
        modifiers.push(Modifier::OnUpdate(Expr::Sql("now()".to_string())));
        modifiers
    }

    fn supports_arrays(&self) -> bool {
        true
    }

    fn index_method(&self, algorithm: Option<&str>) -> IndexMethod {
        match algorithm {
            Some(algorithm) => IndexMethod::Using(algorithm.to_lowercase()),
            None => IndexMethod::Default,
        }
    }

    fn supports_operator_classes(&self) -> bool {
        true
    }
}
