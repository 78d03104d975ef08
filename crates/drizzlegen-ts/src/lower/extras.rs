use super::Lower;

use crate::stmt::{IndexColumn, IndexDecl, TableExtra};

use drizzlegen_core::schema::ast::ModelAst;
use drizzlegen_core::schema::directive::{parse_modifiers, CheckConstraint};
use drizzlegen_core::schema::dmmf::Model;
use drizzlegen_core::{Error, Result};

impl Lower<'_> {
    /// The table's extra configuration: indexes, checks, unique indexes, the
    /// composite primary key and, for dialects without inline references,
    /// foreign keys.
    pub(super) fn extras(
        &mut self,
        model: &Model,
        model_ast: Option<&ModelAst>,
        checks: Vec<CheckConstraint>,
    ) -> Result<Vec<TableExtra>> {
        let mut extras = self.indexes(model);

        for CheckConstraint { name, expr } in checks {
            self.cx.import_core("check");
            self.cx.import_drizzle("sql");
            extras.push(TableExtra::Check { name, expr });
        }

        extras.extend(self.unique_indexes(model, model_ast)?);

        if let Some(primary_key) = &model.primary_key {
            self.cx.import_core("primaryKey");
            extras.push(TableExtra::PrimaryKey {
                name: primary_key
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("{}_cpk", model.name)),
                columns: primary_key.fields.clone(),
            });
        }

        if !self.dialect.inline_references() {
            extras.extend(self.foreign_keys(model)?);
        }

        Ok(extras)
    }

    fn indexes(&mut self, model: &Model) -> Vec<TableExtra> {
        let schema = self.schema;
        let mut extras = vec![];

        for index in schema.datamodel.normal_indexes(&model.name) {
            let name = match (&index.db_name, index.fields.first()) {
                (Some(name), _) => name.clone(),
                (None, Some(field)) => format!("{}_{}_idx", model.db_name(), field.name),
                (None, None) => continue,
            };

            let operator_classes = self.dialect.supports_operator_classes();

            self.cx.import_core("index");
            extras.push(TableExtra::Index(IndexDecl {
                name,
                columns: index
                    .fields
                    .iter()
                    .map(|field| IndexColumn {
                        key: field.name.clone(),
                        operator_class: field
                            .operator_class
                            .clone()
                            .filter(|_| operator_classes),
                    })
                    .collect(),
                method: self.dialect.index_method(index.algorithm.as_deref()),
            }));
        }

        extras
    }

    /// Unique indexes from the `@@unique` attributes of the model. Junction
    /// models have no syntax tree and use the data model's list instead.
    fn unique_indexes(
        &mut self,
        model: &Model,
        model_ast: Option<&ModelAst>,
    ) -> Result<Vec<TableExtra>> {
        let mut uniques = vec![];

        match model_ast {
            Some(model_ast) => {
                for unique in model_ast.unique_attributes() {
                    let fields = unique.attribute.fields_arg().unwrap_or_default();
                    let modifiers = unique.comments().flat_map(parse_modifiers).collect();
                    uniques.push(unique_index(
                        model,
                        unique.attribute.name_arg(),
                        fields,
                        modifiers,
                    )?);
                }
            }
            None => {
                for unique in &model.unique_indexes {
                    uniques.push(unique_index(
                        model,
                        unique.name.clone(),
                        unique.fields.clone(),
                        vec![],
                    )?);
                }
            }
        }

        for unique in &uniques {
            self.cx.import_core("uniqueIndex");

            if let TableExtra::UniqueIndex { modifiers, .. } = unique {
                if !modifiers.is_empty() {
                    self.cx.import_drizzle("sql");
                }
            }
        }

        Ok(uniques)
    }

    fn foreign_keys(&mut self, model: &Model) -> Result<Vec<TableExtra>> {
        let mut foreign_keys = vec![];

        for field in model.fields.iter().filter(|field| field.is_relation_scalar()) {
            self.cx.import_core("foreignKey");

            foreign_keys.push(TableExtra::ForeignKey {
                name: format!("{}_{}_fkey", model.db_name(), field.from_fields().join("_")),
                columns: field.from_fields().to_vec(),
                foreign_table: self.symbol(&field.ty),
                foreign_columns: field.to_fields().to_vec(),
                on_delete: field.on_delete()?,
            });
        }

        Ok(foreign_keys)
    }
}

/// Without an explicit name, the index is named `<Model>_<fields>_key` and
/// keyed by the same name ending in `_unique_idx`.
fn unique_index(
    model: &Model,
    name: Option<String>,
    fields: Vec<String>,
    modifiers: Vec<String>,
) -> Result<TableExtra> {
    if fields.is_empty() {
        return Err(Error::invalid_unique_index(&model.name));
    }

    let (key, name) = match name {
        Some(name) => (name.clone(), name),
        None => {
            let name = format!("{}_{}_key", model.name, fields.join("_"));
            let key = format!("{}_unique_idx", name.strip_suffix("_key").unwrap_or(&name));
            (key, name)
        }
    };

    Ok(TableExtra::UniqueIndex {
        key,
        name,
        columns: fields,
        modifiers,
    })
}
