use super::Lower;

use crate::stmt::{Relation, RelationKind, RelationsDecl};

use drizzlegen_core::schema::dmmf::Model;

impl Lower<'_> {
    /// The relations declaration of `model`, if it has relation fields.
    pub(super) fn relations(&mut self, model: &Model) -> Option<RelationsDecl> {
        let relations: Vec<_> = model
            .relation_fields()
            .map(|field| {
                let owning = !field.from_fields().is_empty();
                let kind = if owning || !field.is_list {
                    RelationKind::One
                } else {
                    RelationKind::Many
                };

                Relation {
                    key: field.name.clone(),
                    kind,
                    target: self.symbol(&field.ty),
                    relation_name: field.relation_name.clone().unwrap_or_default(),
                    fields: field.from_fields().to_vec(),
                    references: if owning {
                        field.to_fields().to_vec()
                    } else {
                        vec![]
                    },
                }
            })
            .collect();

        if relations.is_empty() {
            return None;
        }

        tracing::debug!(model = %model.name, relations = relations.len(), "lowering relations");
        self.cx.import_drizzle("relations");

        Some(RelationsDecl {
            table: self.symbol(&model.name),
            exported: self.options.relations_export,
            relations,
        })
    }
}
