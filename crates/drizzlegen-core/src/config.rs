use crate::schema::{ast::SchemaAst, dmmf::Datamodel};
use crate::{Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Where output goes when the generator block does not say.
pub const DEFAULT_OUTPUT: &str = "./drizzle";

/// File name of the schema when the output path names a directory.
const SCHEMA_FILE_NAME: &str = "schema.ts";

/// The document handed to the generator by the schema tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub datamodel: Datamodel,

    /// Syntax tree of the schema text
    pub ast: SchemaAst,

    #[serde(default)]
    pub datasources: Vec<Datasource>,

    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datasource {
    #[serde(default)]
    pub provider: Option<String>,
}

/// The generator block of the schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub output: Option<OutputPath>,

    /// Free-form options, in declaration order
    #[serde(default)]
    pub config: IndexMap<String, ConfigValue>,
}

/// The output path, either as a plain string or wrapped as `{ "value": .. }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutputPath {
    Path(String),
    Value { value: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    One(String),
    Many(Vec<String>),
}

/// The database family targeted by the generated schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Postgresql,
    Mysql,
    Sqlite,
}

/// How 64-bit integer columns are typed on the TypeScript side.
///
/// `Number` is convenient but loses precision above 2^53; `Bigint` keeps the
/// full range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BigIntMode {
    #[default]
    Number,
    Bigint,
}

/// Generator configuration, resolved from [`GeneratorOptions`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub provider: Provider,

    /// Path of the generated schema file
    pub schema_path: PathBuf,

    /// Module exporting user types referenced as `imports.<T>`
    pub imports: Option<String>,

    /// Suffix appended to every table symbol
    pub model_suffix: String,

    /// Export each relations declaration individually
    pub relations_export: bool,

    pub bigint_mode: BigIntMode,

    /// Auxiliary file jobs, in declaration order
    pub files: Vec<FileJob>,
}

/// A `file<N>` job: one auxiliary file rendered from templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileJob {
    pub index: u32,

    /// `file<N>`: output path
    pub file: Option<String>,

    /// `template<N>`: body template
    pub template: Option<String>,

    /// `template<N>_content*`: per-model templates
    pub content: IndexMap<String, String>,

    /// `template<N>_typeMapImports*`: per imported type templates
    pub type_map_imports: IndexMap<String, String>,

    /// `template<N>_importedTypesContent*`
    pub imported_types_content: IndexMap<String, String>,

    /// `template<N>_importedTypesMap*`: per field templates
    pub imported_types_map: IndexMap<String, String>,
}

impl GeneratorOptions {
    pub fn from_json(json: &str) -> Result<GeneratorOptions> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GeneratorSettings {
    pub fn output(&self) -> &str {
        match &self.output {
            Some(OutputPath::Path(path)) | Some(OutputPath::Value { value: path }) => path,
            None => DEFAULT_OUTPUT,
        }
    }

    /// The first value of option `key`, if set and not empty.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(ConfigValue::first)
    }
}

impl ConfigValue {
    pub fn first(&self) -> Option<&str> {
        let value = match self {
            ConfigValue::One(value) => value.as_str(),
            ConfigValue::Many(values) => values.first()?.as_str(),
        };

        (!value.is_empty()).then_some(value)
    }
}

impl Provider {
    /// Resolves the provider of the first datasource.
    pub fn from_datasources(datasources: &[Datasource]) -> Result<Provider> {
        let provider = datasources
            .first()
            .and_then(|datasource| datasource.provider.as_deref());

        match provider {
            Some("postgres" | "postgresql") => Ok(Provider::Postgresql),
            Some("mysql") => Ok(Provider::Mysql),
            Some("sqlite") => Ok(Provider::Sqlite),
            other => Err(Error::unsupported_provider(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Postgresql => "postgresql",
            Provider::Mysql => "mysql",
            Provider::Sqlite => "sqlite",
        }
    }
}

impl core::fmt::Display for Provider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BigIntMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BigIntMode::Number => "number",
            BigIntMode::Bigint => "bigint",
        }
    }
}

impl core::str::FromStr for BigIntMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigIntMode> {
        match s {
            "number" => Ok(BigIntMode::Number),
            "bigint" => Ok(BigIntMode::Bigint),
            _ => Err(Error::invalid_generator_config(format!(
                "bigintMode must be `number` or `bigint`, got `{s}`"
            ))),
        }
    }
}

impl GeneratorConfig {
    pub fn from_options(options: &GeneratorOptions) -> Result<GeneratorConfig> {
        let settings = &options.generator;
        let provider = Provider::from_datasources(&options.datasources)?;

        let relations_export = match settings.value("relationsExport") {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(Error::invalid_generator_config(format!(
                    "relationsExport must be `true` or `false`, got `{other}`"
                )))
            }
        };

        let bigint_mode = settings
            .value("bigintMode")
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(GeneratorConfig {
            provider,
            schema_path: schema_path(settings.output()),
            imports: settings.value("imports").map(str::to_string),
            model_suffix: settings.value("modelSuffix").unwrap_or_default().to_string(),
            relations_export,
            bigint_mode,
            files: file_jobs(settings)?,
        })
    }
}

fn schema_path(output: &str) -> PathBuf {
    if output.ends_with(".ts") {
        PathBuf::from(output)
    } else {
        PathBuf::from(output).join(SCHEMA_FILE_NAME)
    }
}

fn file_jobs(settings: &GeneratorSettings) -> Result<Vec<FileJob>> {
    let mut jobs = vec![];

    for key in settings.config.keys() {
        let Some(index) = key.strip_prefix("file") else {
            continue;
        };

        let index: u32 = index.parse().map_err(|_| {
            Error::invalid_generator_config(format!("missing file index in option `{key}`"))
        })?;

        let template_key = format!("template{index}");

        jobs.push(FileJob {
            index,
            file: settings.value(key).map(str::to_string),
            template: settings.value(&template_key).map(str::to_string),
            content: templates(settings, &format!("{template_key}_content"), "content"),
            type_map_imports: templates(
                settings,
                &format!("{template_key}_typeMapImports"),
                "typeMapImports",
            ),
            imported_types_content: templates(
                settings,
                &format!("{template_key}_importedTypesContent"),
                "importedTypesContent",
            ),
            imported_types_map: templates(
                settings,
                &format!("{template_key}_importedTypesMap"),
                "importedTypesMap",
            ),
        });
    }

    Ok(jobs)
}

/// Collects every option starting with `search`, keyed by `prefix` followed
/// by the rest of the option name.
fn templates(settings: &GeneratorSettings, search: &str, prefix: &str) -> IndexMap<String, String> {
    settings
        .config
        .iter()
        .filter_map(|(key, value)| {
            let rest = key.strip_prefix(search)?;
            Some((format!("{prefix}{rest}"), value.first()?.to_string()))
        })
        .collect()
}
