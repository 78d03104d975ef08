//! Lowering of the data model into schema file declarations.
//!
//! One [`Lower`] value visits every model of a run. Type resolution and
//! constraint forms are delegated to the run's [`Dialect`]; every symbol a
//! declaration refers to is recorded in the run's [`EmitContext`].

mod column;
mod column_override;
mod extras;
mod relations;

use crate::dialect::Dialect;
use crate::stmt::{SchemaFile, TableDecl};
use crate::{EmitContext, Options};

use drizzlegen_core::schema::ast::ModelAst;
use drizzlegen_core::schema::dmmf::Model;
use drizzlegen_core::schema::{extract_many_to_many_models, Directives};
use drizzlegen_core::{Result, Schema};

struct Lower<'a> {
    schema: &'a Schema,
    dialect: &'static dyn Dialect,
    options: &'a Options,
    cx: &'a mut EmitContext,
}

pub(crate) fn lower(
    schema: &Schema,
    dialect: &'static dyn Dialect,
    options: &Options,
    cx: &mut EmitContext,
) -> Result<SchemaFile> {
    let mut models = schema.datamodel.models.clone();
    let junctions = extract_many_to_many_models(&mut models);
    models.extend(junctions);

    let mut lower = Lower {
        schema,
        dialect,
        options,
        cx,
    };

    let enums = schema
        .datamodel
        .enums
        .iter()
        .filter_map(|schema_enum| dialect.enum_decl(lower.cx, schema_enum))
        .collect();

    let mut tables = vec![];
    let mut relations = vec![];

    for model in &models {
        let model_ast = schema.model_ast(model)?;

        tables.push(lower.table(model, model_ast)?);
        relations.extend(lower.relations(model));
    }

    Ok(SchemaFile::new(enums, tables, relations))
}

impl Lower<'_> {
    /// The exported symbol of the table declared for `model`.
    fn symbol(&self, model: &str) -> String {
        format!("{model}{}", self.options.model_suffix)
    }

    fn table(&mut self, model: &Model, model_ast: Option<&ModelAst>) -> Result<TableDecl> {
        tracing::debug!(model = %model.name, generated = model.is_generated, "lowering model");

        let schema = self.schema;
        let table_fn = self.dialect.table_fn();
        self.cx.import_core(table_fn);

        let mut columns = vec![];
        let mut checks = vec![];

        for field in &model.fields {
            if field.is_relation() {
                continue;
            }

            let field_ast = schema.column_ast(model, model_ast, field)?;
            let directives = Directives::parse(field.documentation());

            checks.extend(directives.checks.iter().cloned());
            columns.extend(self.column(model, field, field_ast, &directives)?);
        }

        let symbol = self.symbol(&model.name);
        let extras = self.extras(model, model_ast, checks)?;

        Ok(TableDecl {
            symbol,
            table_fn,
            db_name: model.db_name().to_string(),
            columns,
            extras,
        })
    }
}
