use crate::Literal;

use drizzlegen_core::schema::dmmf::ReferentialAction;

/// One column of a table declaration.
///
/// Rendered as `key: ctor('db_name', args..)` followed by the modifiers.
#[derive(Debug, Clone)]
pub struct ColumnDecl {
    /// Property name of the column in the table object
    pub key: String,

    /// Column constructor, e.g. `text`, `serial` or a user type
    pub ctor: String,

    /// Database column name
    pub db_name: String,

    /// Constructor arguments following the column name
    pub args: Vec<Arg>,

    /// Chained modifier calls, in emission order
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(Literal),

    /// Text written by the schema author, emitted verbatim
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// A `.method(..)` call written by the schema author
    Raw(String),

    /// `.$type<T>()`
    TsType { ty: String, nullable: bool },

    /// `.array()`
    Array,

    /// `.notNull()`
    NotNull,

    /// `.primaryKey()`
    PrimaryKey { auto_increment: bool },

    /// `.unique()`
    Unique,

    /// `.default(..)`
    Default(Expr),

    /// `.defaultNow()`
    DefaultNow,

    /// `.$onUpdate(() => ..)`
    OnUpdate(Expr),

    /// `.references((): AnyColumn => table.column, { onDelete })`
    References {
        /// Type annotation of the deferred accessor
        column_ty: &'static str,
        table: String,
        column: String,
        on_delete: ReferentialAction,
    },
}

/// A value expression inside a modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),

    /// Raw SQL, rendered as a `sql` tagged template
    Sql(String),

    /// TypeScript source, emitted verbatim
    Verbatim(String),
}

impl ColumnDecl {
    pub fn new(key: impl Into<String>, ctor: impl Into<String>, db_name: impl Into<String>) -> ColumnDecl {
        ColumnDecl {
            key: key.into(),
            ctor: ctor.into(),
            db_name: db_name.into(),
            args: vec![],
            modifiers: vec![],
        }
    }
}

impl From<Literal> for Arg {
    fn from(value: Literal) -> Self {
        Arg::Literal(value)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}
