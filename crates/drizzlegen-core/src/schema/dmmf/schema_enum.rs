use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub db_name: Option<String>,

    /// Values in declaration order. The order is carried into the emitted
    /// enum type.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,

    #[serde(default)]
    pub db_name: Option<String>,
}

impl Enum {
    pub fn db_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    /// Database names of the values, in declaration order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(EnumValue::db_name)
    }
}

impl EnumValue {
    pub fn db_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}
