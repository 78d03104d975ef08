use super::{enum_values, mode, ColumnType, Dialect, TypeOptions, TypeRef};
use crate::stmt::{Expr, Modifier};
use crate::{EmitContext, Literal};

use drizzlegen_core::schema::ast::FieldAst;
use drizzlegen_core::schema::dmmf::Enum;
use drizzlegen_core::{BigIntMode, Result};

const UNIX_EPOCH: &str = "(unixepoch())";

#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "SQLite"
    }

    fn core_module(&self) -> &'static str {
        "drizzle-orm/sqlite-core"
    }

    fn table_fn(&self) -> &'static str {
        "sqliteTable"
    }

    fn any_column(&self) -> &'static str {
        "AnySQLiteColumn"
    }

    fn enum_column(&self, cx: &mut EmitContext, schema_enum: &Enum) -> ColumnType {
        ColumnType::core(cx, "text").arg(Literal::object([("enum", enum_values(schema_enum))]))
    }

    fn native_type(&self, _field: &FieldAst) -> Option<TypeRef> {
        None
    }

    fn column_type(
        &self,
        cx: &mut EmitContext,
        ty: &TypeRef,
        options: TypeOptions,
    ) -> Result<Option<ColumnType>> {
        let column = match ty.name.to_lowercase().as_str() {
            "string" | "text" => ColumnType::core(cx, "text").config(ty),
            "int" | "integer" => ColumnType::core(cx, "integer").config_or(ty, mode("number")),
            "bigint" => match options.bigint_mode {
                BigIntMode::Number => ColumnType::core(cx, "integer").config_or(ty, mode("number")),
                BigIntMode::Bigint => ColumnType::core(cx, "blob").config_or(ty, mode("bigint")),
            },
            "boolean" => ColumnType::core(cx, "integer").config_or(ty, mode("boolean")),
            "datetime" | "timestamp" => {
                ColumnType::core(cx, "integer").config_or(ty, mode("timestamp"))
            }
            "decimal" | "numeric" => ColumnType::core(cx, "numeric").config(ty),
            "float" | "real" => ColumnType::core(cx, "real").config(ty),
            "json" => ColumnType::core(cx, "text").config_or(ty, mode("json")),
            "bytes" | "blob" => ColumnType::core(cx, "blob").config_or(ty, mode("buffer")),
            _ => return Ok(None),
        };

        Ok(Some(column))
    }

    fn now_default(&self) -> Modifier {
        Modifier::Default(Expr::Sql(UNIX_EPOCH.to_string()))
    }

    fn uuid_default(&self) -> &'static str {
        "(lower(hex(randomblob(16))))"
    }

    fn updated_at(&self, has_default: bool) -> Vec<Modifier> {
        let mut modifiers = vec![];
        if !has_default {
            modifiers.push(self.now_default());
        }
        modifiers.push(Modifier::OnUpdate(Expr::Verbatim("new Date()".to_string())));
        modifiers
    }

    fn auto_increment_primary_key(&self) -> bool {
        true
    }

    fn supports_column_override(&self) -> bool {
        true
    }
}
