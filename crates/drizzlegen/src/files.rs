use crate::path::relative_import;
use crate::template::{interpolate, Data};

use drizzlegen_core::config::FileJob;
use drizzlegen_core::schema::dmmf::Field;
use drizzlegen_core::schema::Directives;
use drizzlegen_core::{GeneratorConfig, Schema};

use indexmap::{IndexMap, IndexSet};
use std::path::{Path, PathBuf};

/// First line of every auxiliary file.
const HEADER: &str = "// generated by drizzlegen";

/// An auxiliary file rendered from a `file<N>` job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

pub(crate) fn render(schema: &Schema, config: &GeneratorConfig, base: &Path) -> Vec<GeneratedFile> {
    config
        .files
        .iter()
        .filter_map(|job| render_job(job, schema, config, base))
        .collect()
}

fn render_job(
    job: &FileJob,
    schema: &Schema,
    config: &GeneratorConfig,
    base: &Path,
) -> Option<GeneratedFile> {
    let (Some(file), Some(body)) = (&job.file, &job.template) else {
        tracing::debug!(index = job.index, "file job without a file or template; skipping");
        return None;
    };

    if job.content.is_empty() {
        tracing::debug!(index = job.index, "file job without content templates; skipping");
        return None;
    }

    let path = PathBuf::from(file);
    let mut symbols = vec![];
    let mut imported_types = IndexSet::new();
    let mut content: IndexMap<&str, Vec<String>> = job
        .content
        .keys()
        .map(|key| (key.as_str(), vec![]))
        .collect();

    for model in &schema.datamodel.models {
        let symbol = format!("{}{}", model.name, config.model_suffix);
        let fields: Vec<Data> = model.fields.iter().filter_map(imported_field).collect();

        for field in &fields {
            imported_types.insert(field["type"].clone());
        }

        let mut data = imported_types_content(job, &fields);
        data.insert("modelName".to_string(), model.name.clone());
        data.insert("tableName".to_string(), model.db_name().to_string());
        data.insert("tableSymbol".to_string(), symbol.clone());

        for (key, template) in &job.content {
            if let Some(rendered) = content.get_mut(key.as_str()) {
                rendered.push(interpolate(template, &data));
            }
        }

        symbols.push(symbol);
    }

    let mut data: Data = content
        .into_iter()
        .map(|(key, rendered)| (key.to_string(), rendered.join("\n")))
        .collect();

    for (key, template) in &job.type_map_imports {
        let rendered: String = imported_types
            .iter()
            .map(|ty: &String| {
                let data = Data::from([("fieldType".to_string(), ty.clone())]);
                interpolate(template, &data)
            })
            .collect();
        data.insert(key.clone(), rendered);
    }

    let schema_module = relative_import(base, &path, &config.schema_path);
    data.insert("imports".to_string(), import_statement(&symbols, &schema_module));

    tracing::debug!(path = %path.display(), models = symbols.len(), "rendered auxiliary file");

    Some(GeneratedFile {
        content: format!("{HEADER}\n{}", interpolate(body, &data)),
        path,
    })
}

/// Template data for a field mapped to a user type, `None` for other fields.
fn imported_field(field: &Field) -> Option<Data> {
    let directives = Directives::parse(field.documentation());
    let ty = directives.imported_type()?;

    let data = [
        ("name", field.name.clone()),
        ("dbName", field.db_name.clone().unwrap_or_default()),
        ("type", ty.to_string()),
        ("kind", field.kind.as_str().to_string()),
        ("isList", field.is_list.to_string()),
        ("isRequired", field.is_required.to_string()),
        ("isUnique", field.is_unique.to_string()),
        ("isId", field.is_id.to_string()),
        ("documentation", field.documentation.clone().unwrap_or_default()),
    ];

    Some(
        data.into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

/// Renders the imported-types content templates of one model. Map templates
/// run once per imported field; content templates then run against the
/// non-empty maps.
fn imported_types_content(job: &FileJob, fields: &[Data]) -> Data {
    let map: Data = job
        .imported_types_map
        .iter()
        .filter_map(|(key, template)| {
            let rendered: String = fields.iter().map(|field| interpolate(template, field)).collect();
            (!rendered.is_empty()).then(|| (key.clone(), rendered))
        })
        .collect();

    if map.is_empty() {
        return Data::new();
    }

    job.imported_types_content
        .iter()
        .map(|(key, template)| (key.clone(), interpolate(template, &map)))
        .collect()
}

fn import_statement(symbols: &[String], module: &str) -> String {
    let mut statement = "import {\n".to_string();
    for symbol in symbols {
        statement.push_str("  ");
        statement.push_str(symbol);
        statement.push_str(",\n");
    }
    statement.push_str("} from '");
    statement.push_str(module);
    statement.push('\'');
    statement
}
