use super::Error;

/// Error when a `@@unique` block attribute does not name any field.
#[derive(Debug)]
pub(super) struct InvalidUniqueIndex {
    model: Box<str>,
}

impl std::error::Error for InvalidUniqueIndex {}

impl core::fmt::Display for InvalidUniqueIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no fields on unique index of model `{}`", self.model)
    }
}

impl Error {
    /// Creates an invalid unique index error.
    pub fn invalid_unique_index(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidUniqueIndex(InvalidUniqueIndex {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid unique index error.
    pub fn is_invalid_unique_index(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::InvalidUniqueIndex(_))
    }
}
