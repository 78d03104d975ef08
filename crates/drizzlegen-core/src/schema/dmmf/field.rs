use super::DefaultValue;
use crate::{Error, Result};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The field name, also the key of the emitted column
    pub name: String,

    /// Database column name, when it differs from the field name
    #[serde(default)]
    pub db_name: Option<String>,

    /// Scalar, enum, relation, ...
    pub kind: FieldKind,

    /// Scalar type name, enum name or related model name depending on `kind`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_unique: bool,

    #[serde(default)]
    pub is_id: bool,

    /// True if the field carries `@updatedAt`
    #[serde(default)]
    pub is_updated_at: bool,

    #[serde(default)]
    pub default: Option<DefaultValue>,

    #[serde(default)]
    pub relation_name: Option<String>,

    /// Local columns forming the foreign key
    #[serde(default)]
    pub relation_from_fields: Option<Vec<String>>,

    /// Columns of the related model referenced by the foreign key
    #[serde(default)]
    pub relation_to_fields: Option<Vec<String>>,

    #[serde(default)]
    pub relation_on_delete: Option<String>,

    /// Free-text documentation, possibly carrying directives
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Scalar,
    Object,
    Enum,
    Unsupported,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Object => "object",
            FieldKind::Enum => "enum",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl Field {
    pub fn db_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// True if this is the owning side of a relation: it lists both the local
    /// foreign-key columns and the referenced columns.
    ///
    /// Such a field never becomes a column itself; its local columns do.
    pub fn is_relation_scalar(&self) -> bool {
        matches!(
            (&self.relation_from_fields, &self.relation_to_fields),
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty()
        )
    }

    /// True if the field takes part in the relation graph, from either side.
    pub fn has_relation_links(&self) -> bool {
        self.relation_from_fields.is_some() && self.relation_to_fields.is_some()
    }

    pub fn from_fields(&self) -> &[String] {
        self.relation_from_fields.as_deref().unwrap_or_default()
    }

    pub fn to_fields(&self) -> &[String] {
        self.relation_to_fields.as_deref().unwrap_or_default()
    }

    /// The referenced column paired with the local column `name`, if this
    /// relation uses `name` as part of its foreign key.
    pub fn referenced_field_for(&self, name: &str) -> Option<&str> {
        let position = self.from_fields().iter().position(|from| from == name)?;
        let to = self.to_fields();
        to.get(position).or_else(|| to.first()).map(String::as_str)
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// The on-delete policy of the relation. Unspecified means cascade.
    pub fn on_delete(&self) -> Result<ReferentialAction> {
        match self.relation_on_delete.as_deref() {
            None | Some("Cascade") => Ok(ReferentialAction::Cascade),
            Some("SetNull") => Ok(ReferentialAction::SetNull),
            Some("SetDefault") => Ok(ReferentialAction::SetDefault),
            Some("Restrict") => Ok(ReferentialAction::Restrict),
            Some("NoAction") => Ok(ReferentialAction::NoAction),
            Some(other) => Err(Error::unknown_delete_action(
                self.relation_name.as_deref().unwrap_or(&self.name),
                other,
            )),
        }
    }
}

impl ReferentialAction {
    /// The policy as written in a referential clause.
    pub fn as_str(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "cascade",
            ReferentialAction::SetNull => "set null",
            ReferentialAction::SetDefault => "set default",
            ReferentialAction::Restrict => "restrict",
            ReferentialAction::NoAction => "no action",
        }
    }
}
