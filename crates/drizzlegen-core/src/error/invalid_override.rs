use super::Error;

/// Error when a programmable column override fails to parse.
///
/// The schema author explicitly opted into the override, so a broken one is
/// reported instead of falling back to the regular type mapping.
#[derive(Debug)]
pub(super) struct InvalidOverride {
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidOverride {}

impl core::fmt::Display for InvalidOverride {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid column override on `{}`: {}",
            self.field, self.message
        )
    }
}

impl Error {
    /// Creates an invalid override error. `field` is the qualified
    /// `Model.field` name.
    pub fn invalid_override(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidOverride(InvalidOverride {
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid override error.
    pub fn is_invalid_override(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::InvalidOverride(_))
    }
}
