use super::Error;

/// Error when the generator options are malformed.
///
/// This covers file-generation keys without an index and option values
/// outside their allowed set.
#[derive(Debug)]
pub(super) struct InvalidGeneratorConfig {
    message: Box<str>,
}

impl std::error::Error for InvalidGeneratorConfig {}

impl core::fmt::Display for InvalidGeneratorConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid generator config: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid generator config error.
    pub fn invalid_generator_config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidGeneratorConfig(
            InvalidGeneratorConfig {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid generator config error.
    pub fn is_invalid_generator_config(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::InvalidGeneratorConfig(_))
    }
}
