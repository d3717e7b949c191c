use super::{Condition, Direction, Statement};
use crate::Name;

/// `CREATE [UNIQUE] INDEX [IF NOT EXISTS] name ON table (cols) [WHERE ..]`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The columns to index, with an optional sort order
    pub columns: Vec<(Name, Option<Direction>)>,

    /// When true, the index is unique
    pub unique: bool,

    /// Partial index predicate
    pub filter: Option<Condition>,

    pub if_not_exists: bool,
}

impl CreateIndex {
    pub fn new(name: impl Into<Name>, on: impl Into<Name>) -> CreateIndex {
        CreateIndex {
            name: name.into(),
            on: on.into(),
            columns: vec![],
            unique: false,
            filter: None,
            if_not_exists: false,
        }
    }

    pub fn column(mut self, column: &str) -> CreateIndex {
        self.columns.push((Name::from(column), None));
        self
    }

    pub fn column_sorted(mut self, column: &str, direction: Direction) -> CreateIndex {
        self.columns.push((Name::from(column), Some(direction)));
        self
    }

    pub fn unique(mut self) -> CreateIndex {
        self.unique = true;
        self
    }

    pub fn filter(mut self, filter: impl Into<Condition>) -> CreateIndex {
        self.filter = Some(filter.into());
        self
    }

    pub fn if_not_exists(mut self) -> CreateIndex {
        self.if_not_exists = true;
        self
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Statement::CreateIndex(value)
    }
}
