//! Column overrides written inside `dbgenerated(..)` on `Bytes` fields.
//!
//! ```prisma
//! data Bytes @default(dbgenerated("{ type: 'text', args: [{ mode: 'json' }], mods: ['.$type<Settings>()'] }"))
//! ```
//!
//! The argument is read with the literal parser, never evaluated. Only an
//! argument written as an object literal is an override; any other
//! `dbgenerated` argument is a plain SQL default.

use crate::dialect::ColumnType;
use crate::stmt::{Arg, Modifier};
use crate::{EmitContext, Literal};

use drizzlegen_core::schema::dmmf::{Field, Model};
use drizzlegen_core::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub(super) struct ColumnOverride {
    /// `type`: the column constructor
    pub(super) ty: String,

    /// `args`: constructor arguments following the column name
    pub(super) args: Vec<Literal>,

    /// `mods`: `.method(..)` calls appended after the constructor
    pub(super) mods: Vec<String>,

    /// `with`: additional symbols to import
    pub(super) with: Vec<String>,

    /// `default`: value of the column's `.default(..)`
    pub(super) default: Option<Literal>,
}

impl ColumnOverride {
    pub(super) fn from_field(model: &Model, field: &Field) -> Result<Option<ColumnOverride>> {
        if field.ty != "Bytes" {
            return Ok(None);
        }

        let Some(src) = field
            .default
            .as_ref()
            .and_then(|default| default.as_function())
            .filter(|function| function.name == "dbgenerated")
            .and_then(|function| function.first_arg())
        else {
            return Ok(None);
        };

        let src = src.trim();
        if !src.starts_with('{') {
            return Ok(None);
        }

        let path = format!("{}.{}", model.name, field.name);

        let literal =
            Literal::parse(src).map_err(|err| Error::invalid_override(&path, err.to_string()))?;

        let column_override = ColumnOverride::from_literal(literal)
            .map_err(|message| Error::invalid_override(&path, message))?;

        tracing::debug!(field = %path, ty = %column_override.ty, "using column override");
        Ok(Some(column_override))
    }

    fn from_literal(literal: Literal) -> core::result::Result<ColumnOverride, String> {
        let Literal::Object(entries) = literal else {
            return Err("expected an object".to_string());
        };

        let mut ty = None;
        let mut column_override = ColumnOverride {
            ty: String::new(),
            args: vec![],
            mods: vec![],
            with: vec![],
            default: None,
        };

        for (key, value) in entries {
            match key.as_str() {
                "type" => match value {
                    Literal::String(value) if !value.is_empty() => ty = Some(value),
                    _ => return Err("`type` must be a non-empty string".to_string()),
                },
                "args" => match value {
                    Literal::Array(values) => column_override.args = values,
                    _ => return Err("`args` must be an array".to_string()),
                },
                "mods" => column_override.mods = strings(&key, value)?,
                "with" => column_override.with = strings(&key, value)?,
                "default" => column_override.default = Some(value),
                _ => return Err(format!("unknown key `{key}`")),
            }
        }

        column_override.ty = ty.ok_or_else(|| "missing `type`".to_string())?;
        Ok(column_override)
    }

    /// The column type the override stands for. Registers the constructor and
    /// every `with` symbol as imports.
    pub(super) fn column_type(&self, cx: &mut EmitContext) -> ColumnType {
        if is_identifier(&self.ty) {
            cx.import_core(&self.ty);
        }

        for symbol in &self.with {
            // `sql` is the only helper imported from `drizzle-orm` itself.
            if symbol == "sql" {
                cx.import_drizzle(symbol);
            } else {
                cx.import_core(symbol);
            }
        }

        ColumnType {
            ctor: self.ty.clone(),
            args: self.args.iter().cloned().map(Arg::Literal).collect(),
            modifiers: self.mods.iter().cloned().map(Modifier::Raw).collect(),
        }
    }
}

fn strings(key: &str, value: Literal) -> core::result::Result<Vec<String>, String> {
    let Literal::Array(values) = value else {
        return Err(format!("`{key}` must be an array of strings"));
    };

    values
        .into_iter()
        .map(|value| match value {
            Literal::String(value) => Ok(value),
            _ => Err(format!("`{key}` must be an array of strings")),
        })
        .collect()
}

fn is_identifier(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
