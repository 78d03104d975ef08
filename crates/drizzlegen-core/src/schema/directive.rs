//! Directives embedded in field documentation.
//!
//! Schema authors attach per-field configuration by writing directives into
//! `///` comments. The recognised forms are:
//!
//! * `@type(T[, CONFIG])`: map the field as `T`, passing `CONFIG` verbatim to
//!   the column constructor.
//! * `@tsType(EXPR)`: cast the column's static type to `EXPR`.
//! * `@.method(ARGS)`: append `.method(ARGS)` to the column expression. May
//!   appear any number of times.
//! * `@check(NAME, EXPR)`: add a named check constraint to the table.
//!
//! Documentation is parsed once, when a field is lowered. Text that does not
//! match a directive is ignored.

use regex::Regex;
use std::sync::LazyLock;

static TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@type\((.*?)(,\s*(.*))?\)").unwrap());

static TS_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@tsType\((.*)\)").unwrap());

static MODIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\.[^(]+\(.*\))").unwrap());

static CHECK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@check\(\s*['"]?([A-Za-z0-9_]+)['"]?\s*,\s*(.*)\)"#).unwrap()
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directives {
    /// `@type(..)`
    pub type_override: Option<TypeOverride>,

    /// `@tsType(..)`
    pub ts_type: Option<String>,

    /// Raw `.method(..)` fragments in the order they were written
    pub modifiers: Vec<String>,

    /// `@check(..)`
    pub checks: Vec<CheckConstraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeOverride {
    /// The type name, e.g. `varchar` or `imports.Point`
    pub ty: String,

    /// Constructor configuration, forwarded as written
    pub config: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConstraint {
    pub name: String,

    /// SQL boolean expression
    pub expr: String,
}

impl Directives {
    pub fn parse(documentation: Option<&str>) -> Directives {
        let Some(docs) = documentation else {
            return Directives::default();
        };

        Directives {
            type_override: parse_type_override(docs),
            ts_type: TS_TYPE
                .captures(docs)
                .and_then(|captures| captures.get(1))
                .map(|ts_type| ts_type.as_str().to_string()),
            modifiers: parse_modifiers(docs),
            checks: CHECK
                .captures_iter(docs)
                .filter_map(|captures| {
                    Some(CheckConstraint {
                        name: captures.get(1)?.as_str().to_string(),
                        expr: captures.get(2)?.as_str().trim().to_string(),
                    })
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Directives::default()
    }

    /// The type name of a user type referenced as `imports.<T>`.
    pub fn imported_type(&self) -> Option<&str> {
        self.type_override.as_ref()?.ty.strip_prefix("imports.")
    }
}

/// Extracts every `@.method(..)` fragment from `text`, without the `@`.
pub fn parse_modifiers(text: &str) -> Vec<String> {
    MODIFIER
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|modifier| modifier.as_str().to_string())
        .collect()
}

fn parse_type_override(docs: &str) -> Option<TypeOverride> {
    let captures = TYPE.captures(docs)?;
    let ty = captures.get(1)?.as_str();

    if ty.is_empty() {
        return None;
    }

    Some(TypeOverride {
        ty: ty.to_string(),
        config: captures.get(3).map(|config| config.as_str().to_string()),
    })
}
