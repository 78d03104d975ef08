//! A syntax-tree view of the schema text.
//!
//! The tree is produced by an external parser and deserialized from its JSON
//! form. Nodes carry a `type` tag: model blocks hold `field`, `attribute`
//! (block attribute) and `comment` properties.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaAst {
    #[serde(default)]
    pub models: Vec<ModelAst>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelAst {
    pub name: String,

    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Property {
    Field(FieldAst),
    Attribute(Attribute),
    Comment(Comment),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldAst {
    pub name: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A field attribute (`@db.VarChar(10)`) or block attribute (`@@unique(..)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    pub name: String,

    /// Namespace of the attribute, `db` for native type attributes
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub args: Vec<AttributeArgument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeArgument {
    pub value: AttributeValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Node(AttributeNode),
    Literal(Literal),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttributeNode {
    /// `key: value`
    KeyValue {
        key: String,
        value: Box<AttributeValue>,
    },

    /// `[a, b]`
    Array {
        #[serde(default)]
        args: Vec<AttributeValue>,
    },

    /// `name(params)`
    Function {
        name: String,
        #[serde(default)]
        params: Vec<AttributeValue>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// A `@@unique` block attribute with the comments written directly above it.
#[derive(Debug, Clone, Copy)]
pub struct UniqueAttribute<'a> {
    pub attribute: &'a Attribute,
    pub comments: &'a [Property],
}

impl SchemaAst {
    pub fn model(&self, name: &str) -> Option<&ModelAst> {
        self.models.iter().find(|model| model.name == name)
    }
}

impl ModelAst {
    pub fn field(&self, name: &str) -> Option<&FieldAst> {
        self.properties.iter().find_map(|property| match property {
            Property::Field(field) if field.name == name => Some(field),
            _ => None,
        })
    }

    /// `@@unique` block attributes in declaration order, each paired with the
    /// run of comments immediately preceding it.
    pub fn unique_attributes(&self) -> Vec<UniqueAttribute<'_>> {
        let mut uniques = vec![];
        let mut comments_start = 0;

        for (i, property) in self.properties.iter().enumerate() {
            match property {
                Property::Comment(_) => continue,
                Property::Attribute(attribute) if attribute.name == "unique" => {
                    uniques.push(UniqueAttribute {
                        attribute,
                        comments: &self.properties[comments_start..i],
                    });
                }
                _ => {}
            }
            comments_start = i + 1;
        }

        uniques
    }
}

impl UniqueAttribute<'_> {
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().filter_map(|property| match property {
            Property::Comment(comment) => Some(comment.text.as_str()),
            _ => None,
        })
    }
}

impl FieldAst {
    /// True if the field carries an attribute with the given group and name.
    pub fn has_attribute(&self, group: Option<&str>, name: &str) -> bool {
        self.attribute(group, name).is_some()
    }

    pub fn attribute(&self, group: Option<&str>, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.group.as_deref() == group && attribute.name == name)
    }
}

impl Attribute {
    /// The first argument, whatever its shape.
    pub fn first_arg(&self) -> Option<&AttributeValue> {
        self.args.first().map(|arg| &arg.value)
    }

    /// The first argument read as a number, e.g. the `6` of `@db.Timestamptz(6)`.
    pub fn first_number(&self) -> Option<u64> {
        match self.first_arg()? {
            AttributeValue::Literal(Literal::Number(n)) => n.as_u64(),
            AttributeValue::Literal(Literal::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The field list of a `@@unique` attribute: the positional array or the
    /// `fields:` argument, whichever comes first.
    pub fn fields_arg(&self) -> Option<Vec<String>> {
        self.args.iter().find_map(|arg| match &arg.value {
            AttributeValue::Node(AttributeNode::Array { args }) => Some(identifiers(args)),
            AttributeValue::Node(AttributeNode::KeyValue { key, value }) if key == "fields" => {
                match value.as_ref() {
                    AttributeValue::Node(AttributeNode::Array { args }) => Some(identifiers(args)),
                    _ => None,
                }
            }
            _ => None,
        })
    }

    /// The `name:` argument with surrounding quotes removed.
    pub fn name_arg(&self) -> Option<String> {
        self.args.iter().find_map(|arg| match &arg.value {
            AttributeValue::Node(AttributeNode::KeyValue { key, value }) if key == "name" => {
                value.as_literal_str().map(str::to_string)
            }
            _ => None,
        })
    }
}

impl AttributeValue {
    /// A string literal without its quotes.
    pub fn as_literal_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Literal(Literal::String(s)) => Some(unquote(s)),
            _ => None,
        }
    }
}

fn identifiers(args: &[AttributeValue]) -> Vec<String> {
    args.iter()
        .filter_map(|arg| match arg {
            AttributeValue::Literal(Literal::String(s)) => Some(unquote(s).to_string()),
            // `fields: [title(sort: Desc)]`
            AttributeValue::Node(AttributeNode::Function { name, .. }) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> ModelAst {
        serde_json::from_value(json!({
            "name": "Post",
            "properties": [
                { "type": "field", "name": "id", "attributes": [ { "name": "id" } ] },
                { "type": "comment", "text": "/// unrelated" },
                { "type": "field", "name": "slug", "attributes": [
                    { "name": "VarChar", "group": "db", "args": [ { "type": "attributeArgument", "value": "64" } ] }
                ] },
                { "type": "comment", "text": "/// @.where(sql`deleted_at is null`)" },
                { "type": "attribute", "kind": "object", "name": "unique", "args": [
                    { "type": "attributeArgument", "value": { "type": "array", "args": ["authorId", "slug"] } },
                    { "type": "attributeArgument", "value": { "type": "keyValue", "key": "name", "value": "\"post_slug\"" } }
                ] },
                { "type": "break" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn find_field_attributes() {
        let model = model();
        let slug = model.field("slug").unwrap();
        let varchar = slug.attribute(Some("db"), "VarChar").unwrap();

        assert_eq!(varchar.first_number(), Some(64));
        assert!(model.field("id").unwrap().has_attribute(None, "id"));
        assert!(model.field("title").is_none());
    }

    #[test]
    fn unique_attribute_with_comments() {
        let model = model();
        let uniques = model.unique_attributes();

        assert_eq!(uniques.len(), 1);
        let unique = uniques[0];
        assert_eq!(
            unique.attribute.fields_arg(),
            Some(vec!["authorId".to_string(), "slug".to_string()])
        );
        assert_eq!(unique.attribute.name_arg().as_deref(), Some("post_slug"));
        assert_eq!(
            unique.comments().collect::<Vec<_>>(),
            vec!["/// @.where(sql`deleted_at is null`)"]
        );
    }

    #[test]
    fn fields_key_value_argument() {
        let attribute: Attribute = serde_json::from_value(json!({
            "name": "unique",
            "args": [
                { "value": { "type": "keyValue", "key": "fields", "value": { "type": "array", "args": ["a", "b"] } } }
            ]
        }))
        .unwrap();

        assert_eq!(
            attribute.fields_arg(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(attribute.name_arg(), None);
    }
}
