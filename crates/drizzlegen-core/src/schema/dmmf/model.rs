use super::Field;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// Table name, when it differs from the model name
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Composite primary key (`@@id`)
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,

    /// Multi-field unique constraints (`@@unique`)
    #[serde(default)]
    pub unique_indexes: Vec<UniqueIndex>,

    #[serde(default)]
    pub documentation: Option<String>,

    /// True for junction models synthesized from implicit many-to-many
    /// relations. These have no counterpart in the schema syntax tree.
    #[serde(skip)]
    pub is_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrimaryKey {
    #[serde(default)]
    pub name: Option<String>,

    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UniqueIndex {
    #[serde(default)]
    pub name: Option<String>,

    pub fields: Vec<String>,
}

impl Model {
    pub fn db_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The single-field primary key, if the model has one.
    pub fn id_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_id)
    }

    /// The relation field using `field` as (part of) its foreign key.
    pub fn foreign_key_for(&self, field: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|candidate| {
                candidate.name != field && candidate.from_fields().iter().any(|from| from == field)
            })
    }

    /// Fields taking part in the relation graph, in declaration order.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.has_relation_links())
    }
}
