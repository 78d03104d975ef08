use drizzlegen::{generate, GeneratorOptions};
use drizzlegen_core::config::OutputPath;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::PathBuf;

fn make_id_field() -> Value {
    json!({
        "name": "id",
        "kind": "scalar",
        "type": "Int",
        "isRequired": true,
        "isId": true,
        "default": { "name": "autoincrement", "args": [] }
    })
}

fn make_field(name: &str, ty: &str) -> Value {
    json!({ "name": name, "kind": "scalar", "type": ty, "isRequired": true })
}

fn make_ast_model(name: &str, fields: &[&str]) -> Value {
    let properties: Vec<_> = fields
        .iter()
        .map(|field| json!({ "type": "field", "name": field, "attributes": [] }))
        .collect();

    json!({ "name": name, "properties": properties })
}

fn make_options(provider: &str, config: Value) -> GeneratorOptions {
    let location = json!({
        "name": "location",
        "dbName": "loc",
        "kind": "scalar",
        "type": "String",
        "isRequired": true,
        "documentation": "@type(imports.Point)"
    });

    serde_json::from_value(json!({
        "datamodel": {
            "models": [
                { "name": "User", "fields": [make_id_field(), location] },
                { "name": "Post", "fields": [make_id_field(), make_field("title", "String")] }
            ],
            "enums": []
        },
        "ast": {
            "models": [
                make_ast_model("User", &["id", "location"]),
                make_ast_model("Post", &["id", "title"])
            ]
        },
        "datasources": [ { "provider": provider } ],
        "generator": { "output": "./drizzle", "config": config }
    }))
    .unwrap()
}

#[test]
fn schema_with_type_imports() {
    let generated = generate(&make_options(
        "postgresql",
        json!({ "imports": "./src/types.ts" }),
    ))
    .unwrap();

    assert_eq!(generated.schema_path, PathBuf::from("./drizzle/schema.ts"));
    assert!(generated.files.is_empty());
    assert_eq!(
        generated.schema,
        "\
import { pgTable, serial, text } from 'drizzle-orm/pg-core'

import * as imports from '../src/types'

export const User = pgTable('User', {
\tid: serial('id').notNull().primaryKey(),
\tlocation: imports.Point('loc').notNull()
});

export const Post = pgTable('Post', {
\tid: serial('id').notNull().primaryKey(),
\ttitle: text('title').notNull()
});"
    );
}

#[test]
fn absolute_output_with_relative_imports() {
    let output = std::env::current_dir().unwrap().join("drizzle");

    let mut options = make_options(
        "postgresql",
        json!({
            "imports": "./src/types.ts",
            "file1": "./drizzle/models.ts",
            "template1": "{{imports}}",
            "template1_content": "{{modelName}}"
        }),
    );
    options.generator.output = Some(OutputPath::Path(output.display().to_string()));

    let generated = generate(&options).unwrap();

    assert_eq!(generated.schema_path, output.join("schema.ts"));
    assert!(generated
        .schema
        .contains("import * as imports from '../src/types'"));
    assert_eq!(
        generated.files[0].content,
        "// generated by drizzlegen\nimport {\n  User,\n  Post,\n} from './schema'"
    );
}

#[test]
fn auxiliary_file() {
    let generated = generate(&make_options(
        "postgresql",
        json!({
            "file1": "./drizzle/types.ts",
            "template1": "{{imports}}\n{{typeMapImports}}{{content}}",
            "template1_content": "// {{modelName}} ({{tableName}}){{importedTypesContent}}",
            "template1_importedTypesMap": "\n//   {{name}}: {{type|if(isList)?[]:}}",
            "template1_importedTypesContent": "{{importedTypesMap}}",
            "template1_typeMapImports": "import type { {{fieldType}} } from '../src/types'\n"
        }),
    ))
    .unwrap();

    assert_eq!(generated.files.len(), 1);

    let file = &generated.files[0];
    assert_eq!(file.path, PathBuf::from("./drizzle/types.ts"));
    assert_eq!(
        file.content,
        "\
// generated by drizzlegen
import {
  User,
  Post,
} from './schema'
import type { Point } from '../src/types'
// User (User)
//   location: Point
// Post (Post)"
    );
}

#[test]
fn auxiliary_file_uses_model_suffix() {
    let generated = generate(&make_options(
        "sqlite",
        json!({
            "modelSuffix": "Table",
            "file1": "./out/models.ts",
            "template1": "{{imports}}\n{{content}}",
            "template1_content": "export const {{modelName|camelCase}} = {{tableSymbol}};"
        }),
    ))
    .unwrap();

    assert!(generated.schema.contains("export const UserTable = sqliteTable('User', {"));
    assert_eq!(
        generated.files[0].content,
        "\
// generated by drizzlegen
import {
  UserTable,
  PostTable,
} from '../drizzle/schema'
export const user = UserTable;
export const post = PostTable;"
    );
}

#[test]
fn incomplete_file_jobs_are_skipped() {
    let generated = generate(&make_options(
        "mysql",
        json!({
            "file1": "./drizzle/a.ts",
            "file2": "./drizzle/b.ts",
            "template2": "{{content}}",
            "file3": "./drizzle/c.ts",
            "template3": "{{content}}",
            "template3_content": "{{modelName}}"
        }),
    ))
    .unwrap();

    assert_eq!(generated.files.len(), 1);
    assert_eq!(generated.files[0].path, PathBuf::from("./drizzle/c.ts"));
    assert_eq!(
        generated.files[0].content,
        "// generated by drizzlegen\nUser\nPost"
    );
}

#[test]
fn configuration_errors_are_fatal() {
    let err = generate(&make_options("mongodb", json!({}))).unwrap_err();
    assert!(err.is_unsupported_provider());

    let err = generate(&make_options("sqlite", json!({ "bigintMode": "string" }))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid generator config: bigintMode must be `number` or `bigint`, got `string`"
    );
}
