use super::Statement;
use crate::Name;

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,

    pub cascade: bool,
}

impl DropTable {
    pub fn new(name: impl Into<Name>) -> DropTable {
        DropTable {
            name: name.into(),
            if_exists: false,
            cascade: false,
        }
    }

    pub fn if_exists(mut self) -> DropTable {
        self.if_exists = true;
        self
    }

    pub fn cascade(mut self) -> DropTable {
        self.cascade = true;
        self
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Statement::DropTable(value)
    }
}
