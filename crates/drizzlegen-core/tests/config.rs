use drizzlegen_core::config::{FileJob, GeneratorOptions};
use drizzlegen_core::{BigIntMode, GeneratorConfig, Provider};

use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn make_options(provider: &str, generator: &str) -> GeneratorOptions {
    let json = format!(
        r#"{{
            "datamodel": {{ "models": [], "enums": [] }},
            "ast": {{ "models": [] }},
            "datasources": [ {{ "provider": "{provider}" }} ],
            "generator": {generator}
        }}"#
    );
    GeneratorOptions::from_json(&json).unwrap()
}

#[test]
fn defaults() {
    let config = GeneratorConfig::from_options(&make_options("postgresql", "{}")).unwrap();

    assert_eq!(config.provider, Provider::Postgresql);
    assert_eq!(config.schema_path, PathBuf::from("./drizzle/schema.ts"));
    assert_eq!(config.imports, None);
    assert_eq!(config.model_suffix, "");
    assert!(config.relations_export);
    assert_eq!(config.bigint_mode, BigIntMode::Number);
    assert!(config.files.is_empty());
}

#[test]
fn providers() {
    let cases = [
        ("postgres", Provider::Postgresql),
        ("postgresql", Provider::Postgresql),
        ("mysql", Provider::Mysql),
        ("sqlite", Provider::Sqlite),
    ];

    for (name, expected) in cases {
        let config = GeneratorConfig::from_options(&make_options(name, "{}")).unwrap();
        assert_eq!(config.provider, expected);
    }
}

#[test]
fn unknown_provider() {
    let err = GeneratorConfig::from_options(&make_options("mongodb", "{}")).unwrap_err();
    assert!(err.is_unsupported_provider());
    assert_eq!(
        err.to_string(),
        "invalid database type for Drizzle schema generation: mongodb; \
         supported database types: PostgreSQL, MySQL, SQLite"
    );
}

#[test]
fn missing_provider() {
    let options = GeneratorOptions::from_json(
        r#"{ "datamodel": {}, "ast": {}, "datasources": [] }"#,
    )
    .unwrap();
    let err = GeneratorConfig::from_options(&options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to determine database type; make sure datasource.provider is specified"
    );
}

#[test]
fn output_path() {
    let file = make_options("sqlite", r#"{ "output": "src/db/schema.ts" }"#);
    assert_eq!(
        GeneratorConfig::from_options(&file).unwrap().schema_path,
        PathBuf::from("src/db/schema.ts")
    );

    let dir = make_options("sqlite", r#"{ "output": { "value": "src/db" } }"#);
    assert_eq!(
        GeneratorConfig::from_options(&dir).unwrap().schema_path,
        PathBuf::from("src/db/schema.ts")
    );
}

#[test]
fn options() {
    let options = make_options(
        "mysql",
        r#"{
            "config": {
                "imports": ["./types.ts", "ignored"],
                "modelSuffix": "Table",
                "relationsExport": "false",
                "bigintMode": "bigint"
            }
        }"#,
    );
    let config = GeneratorConfig::from_options(&options).unwrap();

    assert_eq!(config.imports.as_deref(), Some("./types.ts"));
    assert_eq!(config.model_suffix, "Table");
    assert!(!config.relations_export);
    assert_eq!(config.bigint_mode, BigIntMode::Bigint);
}

#[test]
fn invalid_bigint_mode() {
    let options = make_options("mysql", r#"{ "config": { "bigintMode": "string" } }"#);
    let err = GeneratorConfig::from_options(&options).unwrap_err();

    assert!(err.is_invalid_generator_config());
    assert_eq!(
        err.to_string(),
        "invalid generator config: bigintMode must be `number` or `bigint`, got `string`"
    );
}

#[test]
fn file_jobs() {
    let options = make_options(
        "postgresql",
        r#"{
            "config": {
                "file1": "./models.ts",
                "template1": "{{imports}}\n{{content}}",
                "template1_content": "export type {{modelName}} = typeof {{modelName}}",
                "template1_contentEnum": "",
                "template1_typeMapImports": "import {{fieldType}}",
                "template1_importedTypesMap": "{{name}}: {{type}}",
                "template1_importedTypesContent": "{ {{importedTypesMap}} }"
            }
        }"#,
    );
    let config = GeneratorConfig::from_options(&options).unwrap();

    assert_eq!(
        config.files,
        vec![FileJob {
            index: 1,
            file: Some("./models.ts".to_string()),
            template: Some("{{imports}}\n{{content}}".to_string()),
            content: [(
                "content".to_string(),
                "export type {{modelName}} = typeof {{modelName}}".to_string()
            )]
            .into_iter()
            .collect(),
            type_map_imports: [(
                "typeMapImports".to_string(),
                "import {{fieldType}}".to_string()
            )]
            .into_iter()
            .collect(),
            imported_types_content: [(
                "importedTypesContent".to_string(),
                "{ {{importedTypesMap}} }".to_string()
            )]
            .into_iter()
            .collect(),
            imported_types_map: [(
                "importedTypesMap".to_string(),
                "{{name}}: {{type}}".to_string()
            )]
            .into_iter()
            .collect(),
        }]
    );
}

#[test]
fn file_without_index() {
    let options = make_options("postgresql", r#"{ "config": { "fileName": "x.ts" } }"#);
    let err = GeneratorConfig::from_options(&options).unwrap_err();

    assert!(err.is_invalid_generator_config());
    assert_eq!(
        err.to_string(),
        "invalid generator config: missing file index in option `fileName`"
    );
}
