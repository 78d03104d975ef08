//! Per-dialect capabilities.
//!
//! Lowering is shared by every dialect. It asks the [`Dialect`] for the parts
//! that differ: the type table, native type attributes, default expressions
//! and which constraint forms are available.

mod mysql;
pub use mysql::Mysql;

mod postgresql;
pub use postgresql::Postgresql;

mod sqlite;
pub use sqlite::Sqlite;

use crate::stmt::{Arg, EnumDecl, IndexMethod, Modifier};
use crate::{EmitContext, Literal};

use drizzlegen_core::schema::ast::FieldAst;
use drizzlegen_core::schema::dmmf::Enum;
use drizzlegen_core::{BigIntMode, Error, Result};

/// A type to resolve against a dialect's type table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    /// Scalar type, native type or `@type` name as written
    pub name: String,

    /// Constructor configuration replacing the dialect's default
    pub config: Option<Arg>,
}

/// How a column is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub ctor: String,

    /// Arguments following the column name
    pub args: Vec<Arg>,

    /// Calls that are part of the type itself, emitted right after the
    /// constructor
    pub modifiers: Vec<Modifier>,
}

/// Type resolution settings shared by every column of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeOptions {
    /// The field's default is `autoincrement()`
    pub auto_increment: bool,

    pub bigint_mode: BigIntMode,
}

pub trait Dialect {
    /// Name used in error messages
    fn name(&self) -> &'static str;

    /// Module the column constructors are imported from
    fn core_module(&self) -> &'static str;

    /// Table constructor
    fn table_fn(&self) -> &'static str;

    /// Column type annotating deferred references
    fn any_column(&self) -> &'static str;

    /// A standalone declaration for `schema_enum`, if the dialect declares
    /// enums separately from columns.
    fn enum_decl(&self, cx: &mut EmitContext, schema_enum: &Enum) -> Option<EnumDecl> {
        let _ = (cx, schema_enum);
        None
    }

    /// The column type of a field holding a value of `schema_enum`.
    fn enum_column(&self, cx: &mut EmitContext, schema_enum: &Enum) -> ColumnType;

    /// The type selected by a native type attribute such as `@db.VarChar(10)`.
    fn native_type(&self, field: &FieldAst) -> Option<TypeRef>;

    /// Looks `ty` up in the type table.
    ///
    /// Returns `Ok(None)` if the dialect does not know the type; the column is
    /// then dropped. Types the dialect knows but cannot represent are errors.
    fn column_type(
        &self,
        cx: &mut EmitContext,
        ty: &TypeRef,
        options: TypeOptions,
    ) -> Result<Option<ColumnType>>;

    /// The modifier for a `now()` default.
    fn now_default(&self) -> Modifier;

    /// SQL generating a random UUID.
    fn uuid_default(&self) -> &'static str;

    /// Modifiers for an `@updatedAt` column. `has_default` is set when the
    /// field declares its own default.
    fn updated_at(&self, has_default: bool) -> Vec<Modifier>;

    /// True if scalar lists are supported as column arrays.
    fn supports_arrays(&self) -> bool {
        false
    }

    /// True if auto-increment is declared on the primary key rather than on
    /// the column type.
    fn auto_increment_primary_key(&self) -> bool {
        false
    }

    /// True if foreign keys are written inline on the referencing column.
    /// Otherwise they are declared in the table's extra configuration.
    fn inline_references(&self) -> bool {
        true
    }

    fn index_method(&self, algorithm: Option<&str>) -> IndexMethod {
        let _ = algorithm;
        IndexMethod::Default
    }

    fn supports_operator_classes(&self) -> bool {
        false
    }

    /// True if `Bytes` columns accept an override object in their
    /// `dbgenerated(..)` default.
    fn supports_column_override(&self) -> bool {
        false
    }
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> TypeRef {
        TypeRef {
            name: name.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: impl Into<Arg>) -> TypeRef {
        self.config = Some(config.into());
        self
    }
}

impl ColumnType {
    pub fn new(ctor: impl Into<String>) -> ColumnType {
        ColumnType {
            ctor: ctor.into(),
            args: vec![],
            modifiers: vec![],
        }
    }

    /// A constructor imported from the dialect's core module.
    pub fn core(cx: &mut EmitContext, ctor: &str) -> ColumnType {
        cx.import_core(ctor);
        ColumnType::new(ctor)
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> ColumnType {
        self.args.push(arg.into());
        self
    }

    /// Passes the explicit configuration of `ty`, if any.
    pub fn config(mut self, ty: &TypeRef) -> ColumnType {
        self.args.extend(ty.config.clone());
        self
    }

    /// Passes the explicit configuration of `ty`, or `default` without one.
    pub fn config_or(mut self, ty: &TypeRef, default: Literal) -> ColumnType {
        self.args
            .push(ty.config.clone().unwrap_or(Arg::Literal(default)));
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> ColumnType {
        self.modifiers.push(modifier);
        self
    }
}

/// `{ mode: '<mode>' }`
pub(crate) fn mode(mode: &str) -> Literal {
    Literal::object([("mode", Literal::string(mode))])
}

/// `{ precision: 65, scale: 30 }`, the widest decimal the schema tool uses.
pub(crate) fn decimal_config() -> Literal {
    Literal::object([
        ("precision", Literal::number(65)),
        ("scale", Literal::number(30)),
    ])
}

pub(crate) fn enum_values(schema_enum: &Enum) -> Literal {
    Literal::Array(schema_enum.value_names().map(Literal::string).collect())
}

pub(crate) fn binary_unsupported(dialect: &dyn Dialect) -> Error {
    Error::unsupported_type(format!(
        "Drizzle ORM doesn't support binary data type for {}",
        dialect.name()
    ))
}
