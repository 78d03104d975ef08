use super::{Comma, Delimited, Formatter, Period, Quoted, ToTs};

use crate::stmt::{Relation, RelationsDecl};

struct RelationRef<'a> {
    table: &'a String,
    relation: &'a Relation,
}

impl ToTs for &RelationsDecl {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let export = if self.exported { "export " } else { "" };
        let relations = Delimited(
            self.relations.iter().map(|relation| RelationRef {
                table: &self.table,
                relation,
            }),
            ",\n",
        );

        fmt!(
            f, export "const " self.symbol() " = relations(" self.table.as_str() ", ({ "
            Comma(self.helpers()) " }) => ({\n" relations "\n}));"
        );
    }
}

impl ToTs for RelationRef<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let relation = self.relation;

        fmt!(
            f, "\t" relation.key.as_str() ": " relation.kind.helper() "(" relation.target.as_str()
            ", {\n\t\trelationName: " Quoted(&relation.relation_name)
        );

        if !relation.fields.is_empty() {
            let fields = relation.fields.iter().map(|key| Period([self.table, key]));
            let references = relation
                .references
                .iter()
                .map(|key| Period([&relation.target, key]));

            fmt!(
                f, ",\n\t\tfields: [" Comma(fields) "],\n\t\treferences: ["
                Comma(references) "]"
            );
        }

        fmt!(f, "\n\t})");
    }
}
