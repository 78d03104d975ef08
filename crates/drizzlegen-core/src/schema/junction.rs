use super::dmmf::{Field, FieldKind, Model, PrimaryKey};

use heck::ToLowerCamelCase;
use indexmap::IndexMap;

/// One side of an implicit many-to-many relation.
#[derive(Debug, Clone, Copy)]
struct Endpoint {
    model: usize,
    field: usize,
}

/// Synthesizes a junction model for every implicit many-to-many relation.
///
/// An implicit many-to-many relation is a pair of list relation fields sharing
/// a relation name, neither of which lists foreign-key columns. The junction
/// model follows the layout of the join table created for such a relation:
/// columns `A` and `B` referencing the primary keys of the two models, ordered
/// by model name, and a composite primary key over both.
///
/// Both endpoint fields are rewritten in place to point at the junction model,
/// so the relation graph goes through it. Junction models are returned in the
/// order their relations are first seen.
pub fn extract_many_to_many_models(models: &mut [Model]) -> Vec<Model> {
    let mut relations: IndexMap<String, Vec<Endpoint>> = IndexMap::new();

    for (model_index, model) in models.iter().enumerate() {
        for (field_index, field) in model.fields.iter().enumerate() {
            if !is_implicit_many_to_many(field) {
                continue;
            }

            let Some(relation_name) = &field.relation_name else {
                continue;
            };

            relations
                .entry(relation_name.clone())
                .or_default()
                .push(Endpoint {
                    model: model_index,
                    field: field_index,
                });
        }
    }

    let mut junctions = vec![];

    for (relation_name, mut endpoints) in relations {
        if endpoints.len() != 2 {
            tracing::debug!(
                relation = %relation_name,
                endpoints = endpoints.len(),
                "not an implicit many-to-many relation; skipping"
            );
            continue;
        }

        endpoints.sort_by(|lhs, rhs| {
            let lhs = (&models[lhs.model].name, &models[lhs.model].fields[lhs.field].name);
            let rhs = (&models[rhs.model].name, &models[rhs.model].fields[rhs.field].name);
            lhs.cmp(&rhs)
        });

        let (a, b) = (endpoints[0], endpoints[1]);

        let Some(junction) = build_junction(&relation_name, &models[a.model], &models[b.model])
        else {
            continue;
        };

        for (endpoint, side) in [(a, "A"), (b, "B")] {
            let field = &mut models[endpoint.model].fields[endpoint.field];
            field.ty = junction.name.clone();
            field.relation_name = Some(format!("{relation_name}_{side}"));
            field.relation_from_fields = Some(vec![]);
            field.relation_to_fields = Some(vec![]);
        }

        tracing::debug!(junction = %junction.name, "synthesized many-to-many junction model");
        junctions.push(junction);
    }

    junctions
}

fn is_implicit_many_to_many(field: &Field) -> bool {
    field.kind == FieldKind::Object
        && field.is_list
        && field.relation_name.is_some()
        && field.from_fields().is_empty()
        && field.to_fields().is_empty()
}

fn build_junction(relation_name: &str, a: &Model, b: &Model) -> Option<Model> {
    let (Some(a_id), Some(b_id)) = (a.id_field(), b.id_field()) else {
        tracing::warn!(
            relation = %relation_name,
            "many-to-many relation between models without a single-field id; skipping"
        );
        return None;
    };

    let self_relation = a.name == b.name;
    let relation_field_name = |model: &Model, side: &str| {
        let name = model.name.to_lower_camel_case();
        if self_relation {
            format!("{name}{side}")
        } else {
            name
        }
    };

    let column = |side: &str, id: &Field| Field {
        name: side.to_string(),
        kind: FieldKind::Scalar,
        ty: id.ty.clone(),
        is_required: true,
        ..Field::default()
    };

    let relation = |side: &str, model: &Model, id: &Field| Field {
        name: relation_field_name(model, side),
        kind: FieldKind::Object,
        ty: model.name.clone(),
        is_required: true,
        relation_name: Some(format!("{relation_name}_{side}")),
        relation_from_fields: Some(vec![side.to_string()]),
        relation_to_fields: Some(vec![id.name.clone()]),
        relation_on_delete: Some("Cascade".to_string()),
        ..Field::default()
    };

    Some(Model {
        name: relation_name.to_string(),
        db_name: Some(format!("_{relation_name}")),
        fields: vec![
            column("A", a_id),
            column("B", b_id),
            relation("A", a, a_id),
            relation("B", b, b_id),
        ],
        primary_key: Some(PrimaryKey {
            name: None,
            fields: vec!["A".to_string(), "B".to_string()],
        }),
        unique_indexes: vec![],
        documentation: None,
        is_generated: true,
    })
}
