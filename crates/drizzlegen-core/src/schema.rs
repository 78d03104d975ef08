pub mod ast;

pub mod directive;
pub use directive::Directives;

pub mod dmmf;

mod junction;
pub use junction::extract_many_to_many_models;

use ast::{FieldAst, ModelAst, SchemaAst};
use dmmf::{Datamodel, Field, Model};

use crate::{Error, Result};

/// The two parallel views of one schema snapshot.
///
/// The data model carries the resolved structure (models, fields, enums,
/// indexes). The syntax tree is only consulted for attributes the data model
/// does not expose, such as native database types or comments preceding a
/// block attribute.
#[derive(Debug, Default)]
pub struct Schema {
    /// Resolved data model
    pub datamodel: Datamodel,

    /// Syntax tree of the schema text the data model was produced from
    pub ast: SchemaAst,
}

impl Schema {
    pub fn new(datamodel: Datamodel, ast: SchemaAst) -> Schema {
        Schema { datamodel, ast }
    }

    /// Returns the syntax tree node of a declared model.
    ///
    /// Junction models synthesized by [`extract_many_to_many_models`] have no
    /// node and resolve to `Ok(None)`.
    pub fn model_ast(&self, model: &Model) -> Result<Option<&ModelAst>> {
        if model.is_generated {
            return Ok(None);
        }

        self.ast
            .model(&model.name)
            .map(Some)
            .ok_or_else(|| Error::missing_model(&model.name))
    }

    /// Returns the syntax tree node of `field`, when its model has one.
    pub fn field_ast<'a>(
        &self,
        model: &Model,
        model_ast: Option<&'a ModelAst>,
        field: &Field,
    ) -> Result<Option<&'a FieldAst>> {
        let Some(model_ast) = model_ast else {
            return Ok(None);
        };

        model_ast
            .field(&field.name)
            .map(Some)
            .ok_or_else(|| Error::missing_field(&model.name, &field.name))
    }

    /// Returns the syntax tree node that describes the column of `field`.
    ///
    /// Declared models resolve to the field's own node. Columns of a junction
    /// model have no node of their own and resolve to the node of the id they
    /// reference, so both ends of the foreign key share one native type.
    pub fn column_ast<'a>(
        &'a self,
        model: &Model,
        model_ast: Option<&'a ModelAst>,
        field: &Field,
    ) -> Result<Option<&'a FieldAst>> {
        if !model.is_generated {
            return self.field_ast(model, model_ast, field);
        }

        let Some(relation) = model.foreign_key_for(&field.name) else {
            return Ok(None);
        };

        let Some(target) = self.datamodel.model(&relation.ty) else {
            return Ok(None);
        };

        let Some(referenced) = relation
            .referenced_field_for(&field.name)
            .and_then(|name| target.field(name))
        else {
            return Ok(None);
        };

        self.field_ast(target, self.model_ast(target)?, referenced)
    }
}
