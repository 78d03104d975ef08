use super::{
    binary_unsupported, decimal_config, enum_values, mode, ColumnType, Dialect, TypeOptions,
    TypeRef,
};
use crate::stmt::{Expr, IndexMethod, Modifier};
use crate::{EmitContext, Literal};

use drizzlegen_core::schema::ast::FieldAst;
use drizzlegen_core::schema::dmmf::Enum;
use drizzlegen_core::Result;

/// Longest indexable `varchar` under the default utf8mb4 collation.
const DEFAULT_VARCHAR_LENGTH: u64 = 191;

#[derive(Debug, Default, Clone, Copy)]
pub struct Mysql;

impl Dialect for Mysql {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn core_module(&self) -> &'static str {
        "drizzle-orm/mysql-core"
    }

    fn table_fn(&self) -> &'static str {
        "mysqlTable"
    }

    fn any_column(&self) -> &'static str {
        "AnyMySqlColumn"
    }

    fn enum_column(&self, cx: &mut EmitContext, schema_enum: &Enum) -> ColumnType {
        ColumnType::core(cx, "mysqlEnum").arg(enum_values(schema_enum))
    }

    fn native_type(&self, field: &FieldAst) -> Option<TypeRef> {
        field.attributes.iter().find_map(|attribute| {
            if attribute.group.as_deref() != Some("db") {
                return None;
            }

            let length = || {
                attribute
                    .first_number()
                    .map(|length| Literal::object([("length", Literal::number(length))]))
            };

            match attribute.name.as_str() {
                "VarChar" => Some(match length() {
                    Some(config) => TypeRef::new("varchar").with_config(config),
                    None => TypeRef::new("varchar"),
                }),
                "Char" => Some(match length() {
                    Some(config) => TypeRef::new("char").with_config(config),
                    None => TypeRef::new("char"),
                }),
                "Text" => Some(TypeRef::new("text")),
                "TinyInt" => Some(TypeRef::new("tinyint")),
                "SmallInt" => Some(TypeRef::new("smallint")),
                "Timestamp" => {
                    let mut config = vec![("mode", Literal::string("date"))];
                    if let Some(fsp) = attribute.first_number() {
                        config.push(("fsp", Literal::number(fsp)));
                    }
                    Some(TypeRef::new("timestamp").with_config(Literal::object(config)))
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
        let datetime = || {
            Literal::object([
                ("mode", Literal::string("date")),
                ("fsp", Literal::number(3)),
            ])
        };

        let column = match ty.name.to_lowercase().as_str() {
            "string" | "varchar" => ColumnType::core(cx, "varchar").config_or(
                ty,
                Literal::object([("length", Literal::number(DEFAULT_VARCHAR_LENGTH))]),
            ),
            "char" => ColumnType::core(cx, "char").config(ty),
            "text" => ColumnType::core(cx, "text").config(ty),
            "int" | "integer" => ColumnType::core(cx, "int").config(ty),
            "smallint" => ColumnType::core(cx, "smallint").config(ty),
            "tinyint" => ColumnType::core(cx, "tinyint").config(ty),
            "bigint" => {
                ColumnType::core(cx, "bigint").config_or(ty, mode(options.bigint_mode.as_str()))
            }
            "boolean" => ColumnType::core(cx, "boolean").config(ty),
            "bytes" => return Err(binary_unsupported(self)),
            "datetime" => ColumnType::core(cx, "datetime").config_or(ty, datetime()),
            "timestamp" => ColumnType::core(cx, "timestamp").config_or(ty, datetime()),
            "decimal" => ColumnType::core(cx, "decimal").config_or(ty, decimal_config()),
            "float" | "double" => ColumnType::core(cx, "double").config(ty),
            "real" => ColumnType::core(cx, "float").config(ty),
            "json" => ColumnType::core(cx, "json").config(ty),
            _ => return Ok(None),
        };

        let auto_increments = matches!(column.ctor.as_str(), "int" | "smallint" | "tinyint" | "bigint");
        if options.auto_increment && auto_increments {
            return Ok(Some(column.modifier(Modifier::Raw(".autoincrement()".to_string()))));
        }

        Ok(Some(column))
    }

    fn now_default(&self) -> Modifier {
        Modifier::DefaultNow
    }

    fn uuid_default(&self) -> &'static str {
        "(uuid())"
    }

    fn updated_at(&self, has_default: bool) -> Vec<Modifier> {
        let mut modifiers = vec![];
        if !has_default {
            modifiers.push(Modifier::DefaultNow);
        }
        modifiers.push(Modifier::OnUpdate(Expr::Verbatim("new Date()".to_string())));
        modifiers
    }

    fn inline_references(&self) -> bool {
        false
    }

    fn index_method(&self, algorithm: Option<&str>) -> IndexMethod {
        match algorithm.map(str::to_lowercase).as_deref() {
            Some(algorithm @ ("btree" | "hash")) => IndexMethod::Chained(algorithm.to_string()),
            _ => IndexMethod::Default,
        }
    }
}
