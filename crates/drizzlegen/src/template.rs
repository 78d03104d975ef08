//! String templates used by auxiliary file jobs.
//!
//! A template is plain text with `{{key}}` placeholders. A placeholder may
//! name a transform after a pipe:
//!
//! * `{{key|camelCase}}` renders the value in lower camel case.
//! * `{{key|if(cond)?then:else}}` renders the value followed by `then` when
//!   `cond` is a truthy key of the data, and the value followed by `else`
//!   otherwise. Without a `?then:else` part the value is kept when `cond` is
//!   truthy and dropped otherwise.
//!
//! Missing keys render as the empty string. Unknown transforms leave the
//! value unchanged.

use heck::ToLowerCamelCase;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^}|]*)(\|(([a-zA-Z0-9_]+)[^}]*))?\}\}").unwrap()
});

static CONDITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"if\(([^)]+)\)(\?([^:]*):(.*))?$").unwrap());

/// Values a template is rendered against.
pub type Data = IndexMap<String, String>;

/// Renders `template` against `data`.
pub fn interpolate(template: &str, data: &Data) -> String {
    PLACEHOLDER
        .replace_all(template, |captures: &Captures| {
            let value = captures
                .get(1)
                .and_then(|key| data.get(key.as_str()))
                .map(String::as_str)
                .unwrap_or_default();

            match (captures.get(4), captures.get(3)) {
                (Some(transform), Some(option)) => {
                    apply(transform.as_str(), option.as_str(), value, data)
                }
                _ => value.to_string(),
            }
        })
        .into_owned()
}

/// A value counts as set unless it is empty or `false`.
pub fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some(value) if !value.is_empty() && value != "false")
}

fn apply(transform: &str, option: &str, value: &str, data: &Data) -> String {
    match transform {
        "camelCase" => value.to_lower_camel_case(),
        "if" => condition(option, value, data),
        _ => value.to_string(),
    }
}

fn condition(option: &str, value: &str, data: &Data) -> String {
    let Some(captures) = CONDITION.captures(option) else {
        return value.to_string();
    };

    let cond = captures.get(1).map(|cond| cond.as_str()).unwrap_or_default();
    let branch = |index| captures.get(index).map(|m| m.as_str()).unwrap_or_default();
    let has_branches = captures.get(2).is_some();

    match (is_truthy(data.get(cond).map(String::as_str)), has_branches) {
        (true, true) => format!("{value}{}", branch(3)),
        (true, false) => value.to_string(),
        (false, true) => format!("{value}{}", branch(4)),
        (false, false) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(entries: &[(&str, &str)]) -> Data {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn plain_keys() {
        let data = data(&[("modelName", "User"), ("tableName", "users")]);
        assert_eq!(
            interpolate("{{modelName}} -> {{tableName}}", &data),
            "User -> users"
        );
    }

    #[test]
    fn missing_key_renders_empty() {
        assert_eq!(interpolate("a{{nope}}b", &Data::new()), "ab");
    }

    #[test]
    fn camel_case() {
        let data = data(&[("modelName", "UserProfile")]);
        assert_eq!(interpolate("{{modelName|camelCase}}", &data), "userProfile");
    }

    #[test]
    fn camel_case_splits_on_word_boundaries() {
        let cases = [
            ("USER", "user"),
            ("user_profile", "userProfile"),
            ("HTTPRequest", "httpRequest"),
        ];

        for (input, expected) in cases {
            let data = data(&[("modelName", input)]);
            assert_eq!(interpolate("{{modelName|camelCase}}", &data), expected);
        }
    }

    #[test]
    fn conditional_with_branches() {
        let template = "{{type|if(isList)?[]:}}";

        let list = data(&[("type", "Point"), ("isList", "true")]);
        assert_eq!(interpolate(template, &list), "Point[]");

        let single = data(&[("type", "Point"), ("isList", "false")]);
        assert_eq!(interpolate(template, &single), "Point");
    }

    #[test]
    fn conditional_without_branches() {
        let template = "{{name|if(isRequired)}}";

        let required = data(&[("name", "location"), ("isRequired", "true")]);
        assert_eq!(interpolate(template, &required), "location");

        let optional = data(&[("name", "location"), ("isRequired", "")]);
        assert_eq!(interpolate(template, &optional), "");
    }

    #[test]
    fn unknown_transform_keeps_value() {
        let data = data(&[("name", "id")]);
        assert_eq!(interpolate("{{name|upper}}", &data), "id");
        assert_eq!(interpolate("{{name|if}}", &data), "id");
    }
}
