//! TypeScript literal values.
//!
//! Literals appear in two places: as constructor configuration and defaults
//! produced by the generator, and in column overrides written by schema
//! authors inside `dbgenerated("...")`. The parser accepts the object-literal
//! subset of TypeScript: objects, arrays, quoted strings (single, double or
//! back quotes), numbers, `true`, `false`, `null` and bare identifiers. It
//! never evaluates anything.

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),

    /// A number, kept as written
    Number(String),

    String(String),

    /// A back-quoted template string, kept as written
    Template(String),

    /// A bare identifier such as `sql` or `undefined`
    Ident(String),

    Array(Vec<Literal>),

    Object(IndexMap<String, Literal>),
}

/// Why a literal failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}

impl Literal {
    /// Parses `src` as a single literal. Trailing input is an error.
    pub fn parse(src: &str) -> Result<Literal, ParseError> {
        let mut parser = Parser { src, pos: 0 };
        let literal = parser.value()?;
        parser.skip_whitespace();

        if parser.pos != src.len() {
            return Err(parser.error("unexpected trailing input"));
        }

        Ok(literal)
    }

    pub fn string(value: impl Into<String>) -> Literal {
        Literal::String(value.into())
    }

    pub fn number(value: impl ToString) -> Literal {
        Literal::Number(value.to_string())
    }

    /// Builds an object literal from `(key, value)` pairs, keeping their order.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Literal)>) -> Literal {
        Literal::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn from_json(value: &serde_json::Value) -> Literal {
        use serde_json::Value;

        match value {
            Value::Null => Literal::Null,
            Value::Bool(value) => Literal::Bool(*value),
            Value::Number(value) => Literal::Number(value.to_string()),
            Value::String(value) => Literal::String(value.clone()),
            Value::Array(values) => Literal::Array(values.iter().map(Literal::from_json).collect()),
            Value::Object(entries) => Literal::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Literal::from_json(value)))
                    .collect(),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(value) => Some(value),
            _ => None,
        }
    }
}

impl core::fmt::Display for Literal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Number(value) | Literal::Ident(value) => f.write_str(value),
            Literal::String(value) => write_quoted(f, value),
            Literal::Template(value) => write!(f, "`{value}`"),
            Literal::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Literal::Object(entries) if entries.is_empty() => f.write_str("{}"),
            Literal::Object(entries) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if is_identifier(key) {
                        f.write_str(key)?;
                    } else {
                        write_quoted(f, key)?;
                    }
                    write!(f, ": {value}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// Writes `value` as a single-quoted string literal.
pub(crate) fn write_quoted(f: &mut impl core::fmt::Write, value: &str) -> core::fmt::Result {
    f.write_char('\'')?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn value(&mut self) -> Result<Literal, ParseError> {
        self.skip_whitespace();

        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some(quote @ ('\'' | '"')) => self.string(quote).map(Literal::String),
            Some('`') => self.template(),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                Ok(match self.identifier() {
                    "null" => Literal::Null,
                    "true" => Literal::Bool(true),
                    "false" => Literal::Bool(false),
                    ident => Literal::Ident(ident.to_string()),
                })
            }
            Some(c) => Err(self.error(format!("unexpected `{c}`"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn object(&mut self) -> Result<Literal, ParseError> {
        self.expect('{')?;
        let mut entries = IndexMap::new();

        loop {
            self.skip_whitespace();

            let key = match self.peek() {
                Some('}') => break,
                Some(quote @ ('\'' | '"')) => self.string(quote)?,
                Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                    self.identifier().to_string()
                }
                _ => return Err(self.error("expected property name")),
            };

            self.skip_whitespace();
            self.expect(':')?;
            let value = self.value()?;

            if entries.insert(key.clone(), value).is_some() {
                return Err(self.error(format!("duplicate key `{key}`")));
            }

            self.skip_whitespace();
            if !self.eat(',') {
                break;
            }
        }

        self.skip_whitespace();
        self.expect('}')?;
        Ok(Literal::Object(entries))
    }

    fn array(&mut self) -> Result<Literal, ParseError> {
        self.expect('[')?;
        let mut values = vec![];

        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                break;
            }

            values.push(self.value()?);

            self.skip_whitespace();
            if !self.eat(',') {
                break;
            }
        }

        self.skip_whitespace();
        self.expect(']')?;
        Ok(Literal::Array(values))
    }

    fn string(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.pos;
        self.expect(quote)?;
        let mut value = String::new();

        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) if c == quote => return Ok(value),
                Some(c) => value.push(c),
                None => break,
            }
        }

        Err(ParseError {
            message: "unterminated string".to_string(),
            offset: start,
        })
    }

    fn template(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        self.expect('`')?;
        let body_start = self.pos;

        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('`') => {
                    let body = &self.src[body_start..self.pos - 1];
                    return Ok(Literal::Template(body.to_string()));
                }
                Some(_) => {}
                None => {
                    return Err(ParseError {
                        message: "unterminated template string".to_string(),
                        offset: start,
                    })
                }
            }
        }
    }

    fn number(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        self.eat('-');
        self.eat('+');

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }

        let number = &self.src[start..self.pos];
        let digits = number.trim_start_matches(['-', '+']).replace('_', "");
        let valid = digits.parse::<f64>().is_ok()
            || digits
                .strip_suffix('n')
                .is_some_and(|int| !int.is_empty() && int.chars().all(|c| c.is_ascii_digit()));

        if !valid {
            return Err(ParseError {
                message: format!("invalid number `{number}`"),
                offset: start,
            });
        }

        Ok(Literal::Number(number.to_string()))
    }

    fn identifier(&mut self) -> &str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{expected}`")))
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            offset: self.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_object() {
        let literal = Literal::parse(
            "{ type: 'blob', args: [{ mode: \"json\" }], mods: ['.$type<Foo>()'], with: ['sql'], default: `x`, }",
        )
        .unwrap();

        let Literal::Object(entries) = &literal else {
            panic!("expected object, got {literal:?}");
        };
        assert_eq!(entries["type"], Literal::string("blob"));
        assert_eq!(
            entries["args"],
            Literal::Array(vec![Literal::object([("mode", Literal::string("json"))])])
        );
        assert_eq!(entries["default"], Literal::Template("x".to_string()));
    }

    #[test]
    fn parse_scalars() {
        assert_eq!(Literal::parse("null").unwrap(), Literal::Null);
        assert_eq!(Literal::parse(" true ").unwrap(), Literal::Bool(true));
        assert_eq!(Literal::parse("-1.5").unwrap(), Literal::number("-1.5"));
        assert_eq!(Literal::parse("10n").unwrap(), Literal::number("10n"));
        assert_eq!(
            Literal::parse("'it\\'s'").unwrap(),
            Literal::string("it's")
        );
        assert_eq!(
            Literal::parse("imports.Point").unwrap(),
            Literal::Ident("imports.Point".to_string())
        );
    }

    #[test]
    fn parse_errors() {
        let err = Literal::parse("{ type: 'blob'").unwrap_err();
        assert_eq!(err.to_string(), "expected `}` at offset 14");

        let err = Literal::parse("{ type: 'blob' } x").unwrap_err();
        assert_eq!(err.to_string(), "unexpected trailing input at offset 17");

        let err = Literal::parse("{ a: 1, a: 2 }").unwrap_err();
        assert_eq!(err.message, "duplicate key `a`");

        let err = Literal::parse("['open").unwrap_err();
        assert_eq!(err.to_string(), "unterminated string at offset 1");

        let err = Literal::parse("12abc").unwrap_err();
        assert_eq!(err.message, "invalid number `12abc`");
    }

    #[test]
    fn render() {
        let literal = Literal::object([
            ("mode", Literal::string("date")),
            ("precision", Literal::number(3)),
            ("with-dash", Literal::Bool(false)),
        ]);
        assert_eq!(
            literal.to_string(),
            "{ mode: 'date', precision: 3, 'with-dash': false }"
        );

        let array = Literal::Array(vec![Literal::string("a'b"), Literal::Null]);
        assert_eq!(array.to_string(), "['a\\'b', null]");

        assert_eq!(Literal::object::<String>([]).to_string(), "{}");
    }

    #[test]
    fn from_json() {
        let value = serde_json::json!(["a", 1, true]);
        assert_eq!(Literal::from_json(&value).to_string(), "['a', 1, true]");
    }
}
