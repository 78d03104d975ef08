use super::Error;

/// Error when a scalar type cannot be represented by the active dialect.
///
/// Dropping the column instead would silently change the shape of the
/// generated schema, so this always aborts generation.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    message: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::UnsupportedType(_))
    }
}
