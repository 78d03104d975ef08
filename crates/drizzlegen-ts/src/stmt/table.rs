use super::{ColumnDecl, TableExtra};

#[derive(Debug, Clone)]
pub struct TableDecl {
    /// Name of the exported constant
    pub symbol: String,

    /// Table constructor, e.g. `pgTable`
    pub table_fn: &'static str,

    /// Database table name
    pub db_name: String,

    /// Columns in field declaration order
    pub columns: Vec<ColumnDecl>,

    /// Indexes and constraints, rendered in the table's extra configuration
    pub extras: Vec<TableExtra>,
}
