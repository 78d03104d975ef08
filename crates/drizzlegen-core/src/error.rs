mod adhoc;
mod invalid_generator_config;
mod invalid_override;
mod invalid_unique_index;
mod missing_schema_node;
mod unknown_delete_action;
mod unsupported_provider;
mod unsupported_type;

use adhoc::AdhocError;
use invalid_generator_config::InvalidGeneratorConfig;
use invalid_override::InvalidOverride;
use invalid_unique_index::InvalidUniqueIndex;
use missing_schema_node::MissingSchemaNode;
use std::sync::Arc;
use unknown_delete_action::UnknownDeleteAction;
use unsupported_provider::UnsupportedProvider;
use unsupported_type::UnsupportedType;

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// The fatal error raised while generating a schema.
///
/// Any error aborts the whole generation run. The error is reported once,
/// verbatim, to the invoking caller.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            if inner.cause.is_none() {
                inner.cause = Some(self);
                return err;
            }
        }

        // The consequent is shared or already has a cause of its own.
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                cause: Some(self),
            })),
        }
    }

    /// Creates an ad-hoc error from pre-formatted arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// The innermost error of the context chain. Kind predicates look here,
    /// so added context never hides what went wrong.
    fn root_cause(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnsupportedProvider(UnsupportedProvider),
    MissingSchemaNode(MissingSchemaNode),
    UnsupportedType(UnsupportedType),
    UnknownDeleteAction(UnknownDeleteAction),
    InvalidUniqueIndex(InvalidUniqueIndex),
    InvalidOverride(InvalidOverride),
    InvalidGeneratorConfig(InvalidGeneratorConfig),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnsupportedProvider(err) => core::fmt::Display::fmt(err, f),
            MissingSchemaNode(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            UnknownDeleteAction(err) => core::fmt::Display::fmt(err, f),
            InvalidUniqueIndex(err) => core::fmt::Display::fmt(err, f),
            InvalidOverride(err) => core::fmt::Display::fmt(err, f),
            InvalidGeneratorConfig(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown drizzlegen error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
