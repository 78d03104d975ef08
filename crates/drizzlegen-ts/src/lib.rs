mod context;
pub use context::EmitContext;

pub mod dialect;
pub use dialect::Dialect;

pub mod literal;
pub use literal::Literal;

mod lower;

pub mod serializer;
pub use serializer::{Options, Serializer};

pub mod stmt;
pub use stmt::{Declaration, SchemaFile};
