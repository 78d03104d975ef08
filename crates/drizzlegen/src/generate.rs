use crate::{files, path, GeneratedFile};

use drizzlegen_core::{GeneratorConfig, GeneratorOptions, Result, Schema};
use drizzlegen_ts::{Options, Serializer};

use std::path::{Path, PathBuf};

/// Everything one generation run produces. Nothing is written yet.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Where the schema file goes
    pub schema_path: PathBuf,

    /// Text of the schema file
    pub schema: String,

    /// Auxiliary files rendered from templates
    pub files: Vec<GeneratedFile>,
}

/// Runs a generation for the document handed over by the schema tool.
pub fn generate(options: &GeneratorOptions) -> Result<Generated> {
    let config = GeneratorConfig::from_options(options)?;
    let schema = Schema::new(options.datamodel.clone(), options.ast.clone());

    generate_schema(&schema, &config)
}

/// Runs a generation for an already resolved schema and configuration.
pub fn generate_schema(schema: &Schema, config: &GeneratorConfig) -> Result<Generated> {
    tracing::debug!(
        provider = %config.provider,
        models = schema.datamodel.models.len(),
        path = %config.schema_path.display(),
        "generating schema"
    );

    // Relative paths in the options are relative to the working directory.
    let base = std::env::current_dir()?;

    let options = Options {
        model_suffix: config.model_suffix.clone(),
        relations_export: config.relations_export,
        bigint_mode: config.bigint_mode,
        type_imports: config
            .imports
            .as_deref()
            .map(|imports| path::relative_import(&base, &config.schema_path, Path::new(imports))),
    };

    let output = Serializer::for_provider(config.provider, schema)
        .options(options)
        .serialize()?;

    Ok(Generated {
        schema_path: config.schema_path.clone(),
        schema: output,
        files: files::render(schema, config, &base),
    })
}
