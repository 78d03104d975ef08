use drizzlegen_core::schema::dmmf::ReferentialAction;

/// An entry of a table's extra configuration: indexes and constraints that
/// span columns.
///
/// Column lists hold column keys; they are qualified with the table symbol
/// when rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum TableExtra {
    Index(IndexDecl),

    /// `check('name', sql`..`)`
    Check { name: String, expr: String },

    /// `uniqueIndex('name').on(..)`
    UniqueIndex {
        /// Property name of the entry
        key: String,
        name: String,
        columns: Vec<String>,

        /// `.method(..)` calls written above the index
        modifiers: Vec<String>,
    },

    /// `primaryKey({ name, columns })`
    PrimaryKey { name: String, columns: Vec<String> },

    /// `foreignKey({ name, columns, foreignColumns })`
    ForeignKey {
        name: String,
        columns: Vec<String>,
        foreign_table: String,
        foreign_columns: Vec<String>,
        on_delete: ReferentialAction,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDecl {
    pub name: String,
    pub columns: Vec<IndexColumn>,
    pub method: IndexMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexColumn {
    pub key: String,

    /// Operator class, e.g. `jsonb_path_ops`
    pub operator_class: Option<String>,
}

/// How an index algorithm is written.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexMethod {
    /// `.on(cols)`
    Default,

    /// `.using('alg', cols)`
    Using(String),

    /// `.on(cols).using('alg')`
    Chained(String),
}
