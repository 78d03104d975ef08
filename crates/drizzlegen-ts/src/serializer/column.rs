use super::{Formatter, Quoted, SqlTemplate, ToTs};

use crate::stmt::{Arg, ColumnDecl, Expr, Modifier};

impl ToTs for &ColumnDecl {
    fn to_ts(self, f: &mut Formatter<'_>) {
        fmt!(f, "\t" self.key.as_str() ": " self.ctor.as_str() "(" Quoted(&self.db_name));

        for arg in &self.args {
            fmt!(f, ", " arg);
        }

        fmt!(f, ")");

        for modifier in &self.modifiers {
            fmt!(f, modifier);
        }
    }
}

impl ToTs for &Arg {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Arg::Literal(literal) => fmt!(f, literal),
            Arg::Raw(raw) => fmt!(f, raw),
        }
    }
}

impl ToTs for &Modifier {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Modifier::Raw(raw) => fmt!(f, raw),
            Modifier::TsType { ty, nullable } => {
                let widen = nullable.then_some(" | null | undefined");
                fmt!(f, ".$type<" ty widen ">()");
            }
            Modifier::Array => fmt!(f, ".array()"),
            Modifier::NotNull => fmt!(f, ".notNull()"),
            Modifier::PrimaryKey { auto_increment: false } => fmt!(f, ".primaryKey()"),
            Modifier::PrimaryKey { auto_increment: true } => {
                fmt!(f, ".primaryKey({ autoIncrement: true })")
            }
            Modifier::Unique => fmt!(f, ".unique()"),
            Modifier::Default(expr) => fmt!(f, ".default(" expr ")"),
            Modifier::DefaultNow => fmt!(f, ".defaultNow()"),
            Modifier::OnUpdate(expr) => fmt!(f, ".$onUpdate(() => " expr ")"),
            Modifier::References {
                column_ty,
                table,
                column,
                on_delete,
            } => {
                let column_ty: &str = column_ty;
                fmt!(
                    f, ".references((): " column_ty " => " table "." column
                    ", { onDelete: " Quoted(on_delete.as_str()) " })"
                );
            }
        }
    }
}

impl ToTs for &Expr {
    fn to_ts(self, f: &mut Formatter<'_>) {
        match self {
            Expr::Literal(literal) => fmt!(f, literal),
            Expr::Sql(sql) => fmt!(f, SqlTemplate(sql)),
            Expr::Verbatim(source) => fmt!(f, source),
        }
    }
}
