mod files;
pub use files::GeneratedFile;

mod generate;
pub use generate::{generate, generate_schema, Generated};

pub mod path;

pub mod template;

pub use drizzlegen_core::{Error, GeneratorConfig, GeneratorOptions, Provider, Result, Schema};
