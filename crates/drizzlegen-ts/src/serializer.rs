#[macro_use]
mod fmt;
use fmt::ToTs;

mod column;

mod delim;
use delim::{Comma, Delimited, Period};

mod enum_decl;

mod flavor;
use flavor::Flavor;

mod quote;
use quote::{Quoted, SqlTemplate};

mod relations;
mod table;

use crate::dialect::Dialect;
use crate::lower;
use crate::stmt::{Declaration, SchemaFile};
use crate::EmitContext;

use drizzlegen_core::{BigIntMode, Result, Schema};

/// Settings of one generation run that are not part of the schema.
#[derive(Debug, Clone)]
pub struct Options {
    /// Suffix appended to every table symbol
    pub model_suffix: String,

    /// Export each relations declaration on its own. Otherwise they are
    /// collected in a single exported `schemaRelations` object.
    pub relations_export: bool,

    pub bigint_mode: BigIntMode,

    /// Module specifier of the user type module, relative to the schema file
    pub type_imports: Option<String>,
}

/// Serialize a schema to a Drizzle schema file
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema to serialize
    schema: &'a Schema,

    /// The flavor selects the dialect the schema is written for.
    flavor: Flavor,

    options: Options,
}

struct Formatter<'a> {
    /// Where to write the serialized TypeScript
    dst: &'a mut String,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            model_suffix: String::new(),
            relations_export: true,
            bigint_mode: BigIntMode::default(),
            type_imports: None,
        }
    }
}

impl<'a> Serializer<'a> {
    pub fn options(mut self, options: Options) -> Serializer<'a> {
        self.options = options;
        self
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.flavor.dialect()
    }

    /// Serializes the schema as the text of one TypeScript module.
    pub fn serialize(&self) -> Result<String> {
        let mut cx = EmitContext::new();
        let file = lower::lower(self.schema, self.dialect(), &self.options, &mut cx)?;

        let mut sections = vec![];
        sections.extend(self.imports(&cx));
        sections.extend(self.type_imports());

        let constants: Vec<_> = cx.constants().collect();
        if !constants.is_empty() {
            sections.push(constants.join("\n\n"));
        }

        for declaration in &file.declarations {
            sections.push(self.render(declaration));
        }

        sections.extend(self.schema_relations(&file));

        Ok(sections.join("\n\n"))
    }

    fn render(&self, declaration: &Declaration) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter { dst: &mut ret };

        match declaration {
            Declaration::Enum(decl) => decl.to_ts(&mut fmt),
            Declaration::Table(decl) => decl.to_ts(&mut fmt),
            Declaration::Relations(decl) => decl.to_ts(&mut fmt),
        }

        ret
    }

    /// The import preamble: `drizzle-orm` first, then the dialect's module.
    fn imports(&self, cx: &EmitContext) -> Option<String> {
        let lines: Vec<_> = [
            ("drizzle-orm", cx.drizzle_imports()),
            (self.dialect().core_module(), cx.core_imports()),
        ]
        .into_iter()
        .filter(|(_, symbols)| !symbols.is_empty())
        .map(|(module, symbols)| {
            let mut ret = String::new();
            let mut fmt = Formatter { dst: &mut ret };
            fmt!(&mut fmt, "import { " Comma(symbols) " } from " Quoted(module));
            ret
        })
        .collect();

        (!lines.is_empty()).then(|| lines.join("\n"))
    }

    fn type_imports(&self) -> Option<String> {
        let path = self.options.type_imports.as_ref()?;

        let mut ret = String::new();
        let mut fmt = Formatter { dst: &mut ret };
        fmt!(&mut fmt, "import * as imports from " Quoted(path));
        Some(ret)
    }

    /// The aggregated relations object, when relations are not exported one
    /// by one.
    fn schema_relations(&self, file: &SchemaFile) -> Option<String> {
        if self.options.relations_export {
            return None;
        }

        let symbols: Vec<_> = file.relations().map(|relations| relations.symbol()).collect();
        if symbols.is_empty() {
            return None;
        }

        let mut ret = String::new();
        let mut fmt = Formatter { dst: &mut ret };
        let entries = Delimited(symbols.iter().map(|symbol| Period(["\t", symbol.as_str()])), ",\n");
        fmt!(&mut fmt, "export const schemaRelations = {\n" entries "\n};");
        Some(ret)
    }
}
