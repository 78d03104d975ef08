use serde::Deserialize;
use serde_json::Value;

/// The default value descriptor attached to a field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A function call such as `now()`, `autoincrement()` or `dbgenerated("..")`
    Function(DefaultFunction),

    /// A list literal
    List(Vec<Value>),

    /// A scalar literal: string, number or boolean
    Scalar(Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefaultFunction {
    pub name: String,

    #[serde(default)]
    pub args: Vec<Value>,
}

impl DefaultValue {
    pub fn function(name: impl Into<String>, args: Vec<Value>) -> DefaultValue {
        DefaultValue::Function(DefaultFunction {
            name: name.into(),
            args,
        })
    }

    pub fn as_function(&self) -> Option<&DefaultFunction> {
        match self {
            DefaultValue::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns `true` if this is a call to the function `name`.
    pub fn is_function(&self, name: &str) -> bool {
        self.as_function()
            .is_some_and(|function| function.name == name)
    }
}

impl DefaultFunction {
    /// Returns `true` for the UUID generator, written either `uuid` or with a
    /// version suffix such as `uuid(4)`.
    pub fn is_uuid(&self) -> bool {
        match self.name.strip_prefix("uuid") {
            Some("") => true,
            Some(rest) => rest
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .is_some_and(|version| version.chars().all(|c| c.is_ascii_digit())),
            None => false,
        }
    }

    /// The first argument as text. Strings are returned without quotes.
    pub fn first_arg(&self) -> Option<String> {
        self.args.first().map(arg_to_string)
    }

    /// Reconstructs a call expression from the function name and arguments.
    pub fn to_call_expr(&self) -> String {
        if !self.args.is_empty() {
            let args: Vec<_> = self.args.iter().map(arg_to_string).collect();
            format!("{}({})", self.name, args.join(", "))
        } else if self.name.ends_with(')') {
            self.name.clone()
        } else {
            format!("{}()", self.name)
        }
    }
}

fn arg_to_string(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
