use super::Error;

/// Error when the datasource provider does not map to a supported dialect.
#[derive(Debug)]
pub(super) struct UnsupportedProvider {
    provider: Option<Box<str>>,
}

impl std::error::Error for UnsupportedProvider {}

impl core::fmt::Display for UnsupportedProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.provider {
            None => f.write_str(
                "unable to determine database type; make sure datasource.provider is specified",
            ),
            Some(provider) => write!(
                f,
                "invalid database type for Drizzle schema generation: {provider}; \
                 supported database types: PostgreSQL, MySQL, SQLite"
            ),
        }
    }
}

impl Error {
    /// Creates an unsupported provider error.
    ///
    /// `None` means no datasource declared a provider at all.
    pub fn unsupported_provider(provider: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnsupportedProvider(UnsupportedProvider {
            provider: provider.map(Into::into),
        }))
    }

    /// Returns `true` if this error is an unsupported provider error.
    pub fn is_unsupported_provider(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::UnsupportedProvider(_))
    }
}
