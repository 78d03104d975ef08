/// The relational query declaration of one table.
#[derive(Debug, Clone)]
pub struct RelationsDecl {
    /// Symbol of the table the relations belong to
    pub table: String,

    /// Whether the declaration is exported on its own
    pub exported: bool,

    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub key: String,
    pub kind: RelationKind,

    /// Symbol of the related table
    pub target: String,

    pub relation_name: String,

    /// Local columns, set on the owning side only
    pub fields: Vec<String>,

    /// Referenced columns of the target, set on the owning side only
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    One,
    Many,
}

impl RelationsDecl {
    /// Symbol of the relations declaration.
    pub fn symbol(&self) -> String {
        format!("{}Relations", self.table)
    }

    /// The relation helpers used, in order of first use.
    pub fn helpers(&self) -> Vec<&'static str> {
        let mut helpers = vec![];
        for relation in &self.relations {
            let helper = relation.kind.helper();
            if !helpers.contains(&helper) {
                helpers.push(helper);
            }
        }
        helpers
    }
}

impl RelationKind {
    pub fn helper(self) -> &'static str {
        match self {
            RelationKind::One => "one",
            RelationKind::Many => "many",
        }
    }
}
