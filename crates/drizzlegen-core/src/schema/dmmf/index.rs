use serde::Deserialize;

/// An index declaration from the data model's side list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// Name of the owning model
    pub model: String,

    #[serde(rename = "type")]
    pub kind: IndexKind,

    #[serde(default)]
    pub db_name: Option<String>,

    /// Index method, e.g. `BTree` or `Gin`
    #[serde(default)]
    pub algorithm: Option<String>,

    #[serde(default)]
    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Id,
    Normal,
    Unique,
    Fulltext,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub name: String,

    #[serde(default)]
    pub operator_class: Option<String>,
}
