use super::Statement;
use crate::Name;

/// A statement to drop an index.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    /// Name of the index.
    pub name: Name,

    /// Table the index belongs to. Some dialects require it.
    pub on: Option<Name>,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl DropIndex {
    pub fn new(name: impl Into<Name>) -> DropIndex {
        DropIndex {
            name: name.into(),
            on: None,
            if_exists: false,
        }
    }

    pub fn on(mut self, table: impl Into<Name>) -> DropIndex {
        self.on = Some(table.into());
        self
    }

    pub fn if_exists(mut self) -> DropIndex {
        self.if_exists = true;
        self
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Statement::DropIndex(value)
    }
}
