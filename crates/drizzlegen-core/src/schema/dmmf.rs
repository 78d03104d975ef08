//! The data model meta format: the resolved description of models, fields,
//! enums and indexes handed over by the schema tool.
//!
//! Only the properties the generator reads are modelled; anything else in the
//! input document is ignored during deserialization.

mod default_value;
pub use default_value::{DefaultFunction, DefaultValue};

mod field;
pub use field::{Field, FieldKind, ReferentialAction};

mod index;
pub use index::{Index, IndexField, IndexKind};

mod model;
pub use model::{Model, PrimaryKey, UniqueIndex};

mod schema_enum;
pub use schema_enum::{Enum, EnumValue};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,

    #[serde(default)]
    pub enums: Vec<Enum>,

    /// Free-form index declarations of every model
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Datamodel {
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn schema_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|schema_enum| schema_enum.name == name)
    }

    /// Free-form (`normal`) indexes declared on `model`, in declaration order.
    pub fn normal_indexes<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a Index> + 'a {
        self.indexes
            .iter()
            .filter(move |index| index.model == model && index.kind == IndexKind::Normal)
    }
}
