use super::Error;

/// Error when a model or field of the data model has no counterpart in the
/// schema syntax tree.
///
/// The two views are produced from the same schema text, so a mismatch means
/// the inputs are out of sync.
#[derive(Debug)]
pub(super) struct MissingSchemaNode {
    model: Box<str>,
    field: Option<Box<str>>,
}

impl std::error::Error for MissingSchemaNode {}

impl core::fmt::Display for MissingSchemaNode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.field {
            None => write!(f, "model `{}` not found in schema", self.model),
            Some(field) => write!(f, "field `{}.{}` not found in schema", self.model, field),
        }
    }
}

impl Error {
    /// Creates an error for a model missing from the syntax tree.
    pub fn missing_model(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingSchemaNode(MissingSchemaNode {
            model: model.into().into(),
            field: None,
        }))
    }

    /// Creates an error for a field missing from its model in the syntax tree.
    pub fn missing_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingSchemaNode(MissingSchemaNode {
            model: model.into().into(),
            field: Some(field.into().into()),
        }))
    }

    /// Returns `true` if this error is a missing model or field error.
    pub fn is_missing_schema_node(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::MissingSchemaNode(_))
    }
}
