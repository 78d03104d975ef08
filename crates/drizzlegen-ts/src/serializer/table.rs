use super::{Comma, Delimited, Formatter, Period, Quoted, SqlTemplate, ToTs};

use crate::stmt::{IndexColumn, IndexMethod, TableDecl, TableExtra};

/// A table extra, qualified by the symbol of its table.
struct Extra<'a> {
    table: &'a String,
    extra: &'a TableExtra,
}

/// A column key qualified by its table symbol.
fn column<'a>(table: &'a String, key: &'a String) -> Period<[&'a String; 2]> {
    Period([table, key])
}

fn columns<'a>(table: &'a String, keys: &'a [String]) -> Vec<Period<[&'a String; 2]>> {
    keys.iter().map(|key| column(table, key)).collect()
}

impl ToTs for &TableDecl {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let columns = Delimited(&self.columns, ",\n");

        fmt!(
            f, "export const " self.symbol.as_str() " = " self.table_fn "(" Quoted(&self.db_name)
            ", {\n" columns "\n}"
        );

        if !self.extras.is_empty() {
            let extras = Delimited(
                self.extras.iter().map(|extra| Extra {
                    table: &self.symbol,
                    extra,
                }),
                ",\n",
            );

            fmt!(f, ", (" self.symbol.as_str() ") => ({\n" extras "\n})");
        }

        fmt!(f, ");");
    }
}

impl ToTs for Extra<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let table = self.table;

        match self.extra {
            TableExtra::Index(index) => {
                let index_columns = Comma(index.columns.iter().map(|c| IndexColumnRef { table, column: c }));

                fmt!(f, "\t" Quoted(&index.name) ": index(" Quoted(&index.name) ")");

                match &index.method {
                    IndexMethod::Default => fmt!(f, ".on(" index_columns ")"),
                    IndexMethod::Using(algorithm) => {
                        fmt!(f, ".using(" Quoted(algorithm) ", " index_columns ")")
                    }
                    IndexMethod::Chained(algorithm) => {
                        fmt!(f, ".on(" index_columns ").using(" Quoted(algorithm) ")")
                    }
                }
            }
            TableExtra::Check { name, expr } => {
                fmt!(f, "\t" Quoted(name) ": check(" Quoted(name) ", " SqlTemplate(expr) ")");
            }
            TableExtra::UniqueIndex {
                key,
                name,
                columns: keys,
                modifiers,
            } => {
                fmt!(
                    f, "\t" Quoted(key) ": uniqueIndex(" Quoted(name) ")\n\t\t.on("
                    Comma(columns(table, keys)) ")" Delimited(modifiers, "")
                );
            }
            TableExtra::PrimaryKey {
                name,
                columns: keys,
            } => {
                fmt!(
                    f, "\t" Quoted(name) ": primaryKey({\n\t\tname: " Quoted(name)
                    ",\n\t\tcolumns: [" Comma(columns(table, keys)) "]\n\t})"
                );
            }
            TableExtra::ForeignKey {
                name,
                columns: keys,
                foreign_table,
                foreign_columns,
                on_delete,
            } => {
                let foreign_columns = columns(foreign_table, foreign_columns);

                fmt!(
                    f, "\t" Quoted(name) ": foreignKey({\n\t\tname: " Quoted(name)
                    ",\n\t\tcolumns: [" Comma(columns(table, keys))
                    "],\n\t\tforeignColumns: [" Comma(foreign_columns)
                    "]\n\t}).onDelete(" Quoted(on_delete.as_str()) ").onUpdate('cascade')"
                );
            }
        }
    }
}

struct IndexColumnRef<'a> {
    table: &'a String,
    column: &'a IndexColumn,
}

impl ToTs for IndexColumnRef<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        fmt!(f, column(self.table, &self.column.key));

        if let Some(operator_class) = &self.column.operator_class {
            fmt!(f, ".op(" Quoted(operator_class) ")");
        }
    }
}
