/// A standalone enum type, for dialects that declare enums separately from
/// the columns using them.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    /// Name of the exported constant
    pub symbol: String,

    /// Enum constructor, e.g. `pgEnum`
    pub ctor: &'static str,

    /// Database type name
    pub db_name: String,

    /// Value names in declaration order
    pub values: Vec<String>,
}
