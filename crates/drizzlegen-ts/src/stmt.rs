//! Declarations of the generated schema file.
//!
//! Lowering turns the data model into these declarations; the serializer
//! renders them as TypeScript.

mod column;
pub use column::{Arg, ColumnDecl, Expr, Modifier};

mod enum_decl;
pub use enum_decl::EnumDecl;

mod extra;
pub use extra::{IndexColumn, IndexDecl, IndexMethod, TableExtra};

mod relations;
pub use relations::{Relation, RelationKind, RelationsDecl};

mod table;
pub use table::TableDecl;

#[derive(Debug, Clone)]
pub enum Declaration {
    Enum(EnumDecl),
    Table(TableDecl),
    Relations(RelationsDecl),
}

/// Everything declared by a generated schema file, in emission order:
/// enums, then tables, then relations.
#[derive(Debug, Clone, Default)]
pub struct SchemaFile {
    pub declarations: Vec<Declaration>,
}

impl SchemaFile {
    pub fn new(
        enums: Vec<EnumDecl>,
        tables: Vec<TableDecl>,
        relations: Vec<RelationsDecl>,
    ) -> SchemaFile {
        let enums = enums.into_iter().map(Declaration::from);
        let tables = tables.into_iter().map(Declaration::from);
        let relations = relations.into_iter().map(Declaration::from);

        SchemaFile {
            declarations: enums.chain(tables).chain(relations).collect(),
        }
    }

    pub fn relations(&self) -> impl Iterator<Item = &RelationsDecl> {
        self.declarations.iter().filter_map(|declaration| match declaration {
            Declaration::Relations(relations) => Some(relations),
            _ => None,
        })
    }
}

impl From<EnumDecl> for Declaration {
    fn from(value: EnumDecl) -> Self {
        Self::Enum(value)
    }
}

impl From<TableDecl> for Declaration {
    fn from(value: TableDecl) -> Self {
        Self::Table(value)
    }
}

impl From<RelationsDecl> for Declaration {
    fn from(value: RelationsDecl) -> Self {
        Self::Relations(value)
    }
}
