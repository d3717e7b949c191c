use super::Statement;
use crate::Name;

#[derive(Debug, Clone, PartialEq)]
pub struct DropSequence {
    pub name: Name,
    pub if_exists: bool,
}

impl DropSequence {
    pub fn new(name: impl Into<Name>) -> DropSequence {
        DropSequence {
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn if_exists(mut self) -> DropSequence {
        self.if_exists = true;
        self
    }
}

impl From<DropSequence> for Statement {
    fn from(value: DropSequence) -> Self {
        Statement::DropSequence(value)
    }
}
