use drizzlegen_core::schema::ast::{
    Attribute, AttributeArgument, AttributeNode, AttributeValue, Comment, FieldAst, Literal,
    ModelAst, Property, SchemaAst,
};
use drizzlegen_core::schema::dmmf::{
    Datamodel, DefaultValue, Enum, EnumValue, Field, FieldKind, Index, IndexField, IndexKind,
    Model, PrimaryKey,
};
use drizzlegen_core::Schema;
use drizzlegen_ts::{Options, Serializer};

use pretty_assertions::assert_eq;

fn make_field(name: &str, ty: &str) -> Field {
    Field {
        name: name.to_string(),
        kind: FieldKind::Scalar,
        ty: ty.to_string(),
        is_required: true,
        ..Field::default()
    }
}

fn make_id_field() -> Field {
    Field {
        is_id: true,
        default: Some(DefaultValue::function("autoincrement", vec![])),
        ..make_field("id", "Int")
    }
}

fn make_documented_field(name: &str, ty: &str, documentation: &str) -> Field {
    Field {
        documentation: Some(documentation.to_string()),
        ..make_field(name, ty)
    }
}

fn make_model(name: &str, fields: Vec<Field>) -> Model {
    Model {
        name: name.to_string(),
        fields,
        ..Model::default()
    }
}

/// Builds a schema whose syntax tree mirrors the data model, without any
/// attributes.
fn make_schema(models: Vec<Model>) -> Schema {
    let ast = SchemaAst {
        models: models
            .iter()
            .map(|model| ModelAst {
                name: model.name.clone(),
                properties: model
                    .fields
                    .iter()
                    .map(|field| {
                        Property::Field(FieldAst {
                            name: field.name.clone(),
                            attributes: vec![],
                        })
                    })
                    .collect(),
            })
            .collect(),
    };

    Schema::new(
        Datamodel {
            models,
            ..Datamodel::default()
        },
        ast,
    )
}

fn make_db_attribute(name: &str, arg: Option<&str>) -> Attribute {
    Attribute {
        name: name.to_string(),
        group: Some("db".to_string()),
        args: arg
            .map(|arg| AttributeArgument {
                value: AttributeValue::Literal(Literal::String(arg.to_string())),
            })
            .into_iter()
            .collect(),
    }
}

fn field_ast_mut<'a>(schema: &'a mut Schema, model: &str, field: &str) -> &'a mut FieldAst {
    let model = schema
        .ast
        .models
        .iter_mut()
        .find(|m| m.name == model)
        .unwrap();

    model
        .properties
        .iter_mut()
        .find_map(|property| match property {
            Property::Field(ast) if ast.name == field => Some(ast),
            _ => None,
        })
        .unwrap()
}

fn serialize(schema: &Schema) -> String {
    Serializer::postgresql(schema).serialize().unwrap()
}

#[test]
fn serial_primary_key_and_unique_email() {
    let schema = make_schema(vec![make_model(
        "User",
        vec![
            make_id_field(),
            Field {
                is_unique: true,
                ..make_field("email", "String")
            },
        ],
    )]);

    assert_eq!(
        serialize(&schema),
        "\
import { pgTable, serial, text } from 'drizzle-orm/pg-core'

export const User = pgTable('User', {
\tid: serial('id').notNull().primaryKey(),
\temail: text('email').notNull().unique()
});"
    );
}

#[test]
fn type_directive_overrides_scalar_type() {
    let schema = make_schema(vec![make_model(
        "User",
        vec![make_documented_field(
            "name",
            "String",
            "@type(varchar, {length:10})",
        )],
    )]);

    assert_eq!(
        serialize(&schema),
        "\
import { pgTable, varchar } from 'drizzle-orm/pg-core'

export const User = pgTable('User', {
\tname: varchar('name', {length:10}).notNull()
});"
    );
}

#[test]
fn bytes_are_not_supported() {
    let schema = make_schema(vec![make_model(
        "File",
        vec![make_field("data", "Bytes")],
    )]);

    let err = Serializer::postgresql(&schema).serialize().unwrap_err();
    assert!(err.is_unsupported_type());
    assert_eq!(
        err.to_string(),
        "field `File.data`: Drizzle ORM doesn't support binary data type for PostgreSQL"
    );
}

#[test]
fn list_modifier_order() {
    let schema = make_schema(vec![make_model(
        "Post",
        vec![Field {
            is_list: true,
            is_unique: true,
            ..make_field("tags", "String")
        }],
    )]);

    assert!(serialize(&schema).contains("\ttags: text('tags').array().notNull().unique()"));
}

#[test]
fn db_generated_default_imports_sql() {
    let schema = make_schema(vec![make_model(
        "Post",
        vec![Field {
            default: Some(DefaultValue::function(
                "dbgenerated",
                vec![serde_json::json!("now()")],
            )),
            ..make_field("createdAt", "DateTime")
        }],
    )]);

    assert_eq!(
        serialize(&schema),
        "\
import { sql } from 'drizzle-orm'
import { pgTable, timestamp } from 'drizzle-orm/pg-core'

export const Post = pgTable('Post', {
\tcreatedAt: timestamp('createdAt', { mode: 'date', precision: 3 }).notNull().default(sql`now()`)
});"
    );
}

#[test]
fn defaults() {
    let schema = make_schema(vec![make_model(
        "Post",
        vec![
            Field {
                default: Some(DefaultValue::function("now", vec![])),
                ..make_field("createdAt", "DateTime")
            },
            Field {
                default: Some(DefaultValue::function("uuid", vec![])),
                ..make_field("token", "String")
            },
            Field {
                default: Some(DefaultValue::function("cuid", vec![])),
                ..make_field("slug", "String")
            },
            Field {
                default: Some(DefaultValue::Scalar(serde_json::json!(false))),
                ..make_field("published", "Boolean")
            },
            Field {
                is_list: true,
                default: Some(DefaultValue::List(vec![
                    serde_json::json!("a"),
                    serde_json::json!("b"),
                ])),
                ..make_field("tags", "String")
            },
        ],
    )]);

    let output = serialize(&schema);

    for column in [
        "\tcreatedAt: timestamp('createdAt', { mode: 'date', precision: 3 }).notNull().defaultNow()",
        "\ttoken: text('token').notNull().default(sql`gen_random_uuid()`)",
        "\tslug: text('slug').notNull().default(sql`cuid()`)",
        "\tpublished: boolean('published').notNull().default(false)",
        "\ttags: text('tags').array().notNull().default(['a', 'b'])",
    ] {
        assert!(output.contains(column), "missing `{column}` in\n{output}");
    }

    assert!(output.starts_with("import { sql } from 'drizzle-orm'\n"));
}

#[test]
fn updated_at() {
    let schema = make_schema(vec![make_model(
        "Post",
        vec![Field {
            is_updated_at: true,
            ..make_field("updatedAt", "DateTime")
        }],
    )]);

    assert!(serialize(&schema).contains(
        "\tupdatedAt: timestamp('updatedAt', { mode: 'date', precision: 3 }).notNull().defaultNow().$onUpdate(() => sql`now()`)"
    ));
}

#[test]
fn enums() {
    let mut schema = make_schema(vec![make_model(
        "User",
        vec![
            make_id_field(),
            Field {
                kind: FieldKind::Enum,
                default: Some(DefaultValue::Scalar(serde_json::json!("USER"))),
                ..make_field("role", "Role")
            },
        ],
    )]);

    schema.datamodel.enums = vec![
        Enum {
            name: "Role".to_string(),
            db_name: Some("role".to_string()),
            values: vec![
                EnumValue {
                    name: "USER".to_string(),
                    db_name: None,
                },
                EnumValue {
                    name: "ADMIN".to_string(),
                    db_name: Some("admin".to_string()),
                },
            ],
        },
        Enum {
            name: "Empty".to_string(),
            ..Enum::default()
        },
    ];

    assert_eq!(
        serialize(&schema),
        "\
import { pgEnum, pgTable, serial } from 'drizzle-orm/pg-core'

export const Role = pgEnum('role', ['USER', 'admin'])

export const User = pgTable('User', {
\tid: serial('id').notNull().primaryKey(),
\trole: Role('role').notNull().default('USER')
});"
    );
}

#[test]
fn field_directives() {
    let schema = make_schema(vec![make_model(
        "User",
        vec![Field {
            is_required: false,
            ..make_documented_field(
                "slug",
                "String",
                "Public handle\n@.$defaultFn(() => createId())\n@tsType(Brand<string>)",
            )
        }],
    )]);

    assert_eq!(
        serialize(&schema),
        "\
import { sql } from 'drizzle-orm'
import { pgTable, text } from 'drizzle-orm/pg-core'

export const User = pgTable('User', {
\tslug: text('slug').$defaultFn(() => createId()).$type<Brand<string> | null | undefined>()
});"
    );
}

#[test]
fn native_types() {
    let mut schema = make_schema(vec![make_model(
        "Event",
        vec![
            make_field("title", "String"),
            make_field("at", "DateTime"),
            make_field("key", "String"),
        ],
    )]);

    field_ast_mut(&mut schema, "Event", "title")
        .attributes
        .push(make_db_attribute("VarChar", Some("255")));
    field_ast_mut(&mut schema, "Event", "at")
        .attributes
        .push(make_db_attribute("Timestamptz", None));
    field_ast_mut(&mut schema, "Event", "key")
        .attributes
        .push(make_db_attribute("Uuid", None));

    assert_eq!(
        serialize(&schema),
        "\
import { pgTable, timestamp, uuid, varchar } from 'drizzle-orm/pg-core'

export const Event = pgTable('Event', {
\ttitle: varchar('title', { length: 255 }).notNull(),
\tat: timestamp('at', { mode: 'date', withTimezone: true, precision: 6 }).notNull(),
\tkey: uuid('key').notNull()
});"
    );
}

#[test]
fn user_types_and_support_constants() {
    let schema = make_schema(vec![make_model(
        "Place",
        vec![
            make_id_field(),
            make_documented_field("location", "String", "@type(imports.Point)"),
            make_documented_field("search", "String", "@type(tsvector)"),
            make_documented_field("body", "String", "@type(tsvector)"),
        ],
    )]);

    let output = Serializer::postgresql(&schema)
        .options(Options {
            type_imports: Some("./types".to_string()),
            ..Options::default()
        })
        .serialize()
        .unwrap();

    assert_eq!(
        output,
        "\
import { customType, pgTable, serial } from 'drizzle-orm/pg-core'

import * as imports from './types'

const tsvector = customType<{ data: string }>({
\tdataType() {
\t\treturn 'tsvector';
\t},
});

export const Place = pgTable('Place', {
\tid: serial('id').notNull().primaryKey(),
\tlocation: imports.Point('location').notNull(),
\tsearch: tsvector('search').notNull(),
\tbody: tsvector('body').notNull()
});"
    );
}

#[test]
fn unsupported_fields_are_dropped() {
    let schema = make_schema(vec![make_model(
        "Shape",
        vec![
            make_id_field(),
            Field {
                kind: FieldKind::Unsupported,
                ..make_field("outline", "Unsupported(\"circle\")")
            },
            make_field("kind", "Xml"),
        ],
    )]);

    assert_eq!(
        serialize(&schema),
        "\
import { pgTable, serial } from 'drizzle-orm/pg-core'

export const Shape = pgTable('Shape', {
\tid: serial('id').notNull().primaryKey()
});"
    );
}

#[test]
fn table_extras() {
    let mut schema = make_schema(vec![make_model(
        "Post",
        vec![
            make_id_field(),
            make_field("title", "String"),
            make_field("slug", "String"),
            make_documented_field("price", "Int", "@check(price_positive, price > 0)"),
        ],
    )]);

    schema.datamodel.indexes = vec![Index {
        model: "Post".to_string(),
        kind: IndexKind::Normal,
        db_name: None,
        algorithm: Some("Gin".to_string()),
        fields: vec![IndexField {
            name: "title".to_string(),
            operator_class: Some("gin_trgm_ops".to_string()),
        }],
    }];

    let post = &mut schema.ast.models[0];
    post.properties.push(Property::Comment(Comment {
        text: "/// @.nullsNotDistinct()".to_string(),
    }));
    post.properties.push(Property::Attribute(Attribute {
        name: "unique".to_string(),
        group: None,
        args: vec![AttributeArgument {
            value: AttributeValue::Node(AttributeNode::Array {
                args: vec![
                    AttributeValue::Literal(Literal::String("title".to_string())),
                    AttributeValue::Literal(Literal::String("slug".to_string())),
                ],
            }),
        }],
    }));

    assert_eq!(
        serialize(&schema),
        "\
import { sql } from 'drizzle-orm'
import { check, index, integer, pgTable, serial, text, uniqueIndex } from 'drizzle-orm/pg-core'

export const Post = pgTable('Post', {
\tid: serial('id').notNull().primaryKey(),
\ttitle: text('title').notNull(),
\tslug: text('slug').notNull(),
\tprice: integer('price').notNull()
}, (Post) => ({
\t'Post_title_idx': index('Post_title_idx').using('gin', Post.title.op('gin_trgm_ops')),
\t'price_positive': check('price_positive', sql`price > 0`),
\t'Post_title_slug_unique_idx': uniqueIndex('Post_title_slug_key')
\t\t.on(Post.title, Post.slug).nullsNotDistinct()
}));"
    );
}

#[test]
fn unique_index_without_fields() {
    let mut schema = make_schema(vec![make_model("Post", vec![make_id_field()])]);
    schema.ast.models[0]
        .properties
        .push(Property::Attribute(Attribute {
            name: "unique".to_string(),
            group: None,
            args: vec![],
        }));

    let err = Serializer::postgresql(&schema).serialize().unwrap_err();
    assert!(err.is_invalid_unique_index());
}

#[test]
fn composite_primary_key() {
    let schema = make_schema(vec![Model {
        primary_key: Some(PrimaryKey {
            name: None,
            fields: vec!["postId".to_string(), "tagId".to_string()],
        }),
        ..make_model(
            "PostTag",
            vec![make_field("postId", "Int"), make_field("tagId", "Int")],
        )
    }]);

    assert_eq!(
        serialize(&schema),
        "\
import { integer, pgTable, primaryKey } from 'drizzle-orm/pg-core'

export const PostTag = pgTable('PostTag', {
\tpostId: integer('postId').notNull(),
\ttagId: integer('tagId').notNull()
}, (PostTag) => ({
\t'PostTag_cpk': primaryKey({
\t\tname: 'PostTag_cpk',
\t\tcolumns: [PostTag.postId, PostTag.tagId]
\t})
}));"
    );
}

#[test]
fn bigint_mode() {
    let schema = make_schema(vec![make_model(
        "Counter",
        vec![Field {
            default: Some(DefaultValue::Scalar(serde_json::json!(0))),
            ..make_field("hits", "BigInt")
        }],
    )]);

    assert!(serialize(&schema).contains("\thits: bigint('hits', { mode: 'number' }).notNull().default(0)"));

    let output = Serializer::postgresql(&schema)
        .options(Options {
            bigint_mode: drizzlegen_core::BigIntMode::Bigint,
            ..Options::default()
        })
        .serialize()
        .unwrap();

    assert!(output.contains("\thits: bigint('hits', { mode: 'bigint' }).notNull().default(0n)"));
}

#[test]
fn missing_field_in_syntax_tree() {
    let mut schema = make_schema(vec![make_model("User", vec![make_id_field()])]);
    schema.ast.models[0].properties.clear();

    let err = Serializer::postgresql(&schema).serialize().unwrap_err();
    assert!(err.is_missing_schema_node());
}

#[test]
fn repeated_runs_are_independent() {
    let users = make_schema(vec![make_model("User", vec![make_field("email", "String")])]);
    let flags = make_schema(vec![make_model("Flag", vec![make_field("on", "Boolean")])]);

    let serializer = Serializer::postgresql(&users);
    let first = serializer.serialize().unwrap();
    Serializer::postgresql(&flags).serialize().unwrap();

    assert_eq!(serializer.serialize().unwrap(), first);
    assert!(!first.contains("boolean"));
}
