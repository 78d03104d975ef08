pub mod config;
pub use config::{BigIntMode, GeneratorConfig, GeneratorOptions, Provider};

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses drizzlegen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
