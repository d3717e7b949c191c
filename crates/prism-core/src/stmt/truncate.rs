use super::Statement;
use crate::Name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Restart,
    Continue,
}

/// `TRUNCATE TABLE name [RESTART | CONTINUE IDENTITY] [CASCADE]`
#[derive(Debug, Clone, PartialEq)]
pub struct Truncate {
    pub table: Name,
    pub identity: Option<Identity>,
    pub cascade: bool,
}

impl Truncate {
    pub fn new(table: impl Into<Name>) -> Truncate {
        Truncate {
            table: table.into(),
            identity: None,
            cascade: false,
        }
    }

    pub fn restart_identity(mut self) -> Truncate {
        self.identity = Some(Identity::Restart);
        self
    }

    pub fn continue_identity(mut self) -> Truncate {
        self.identity = Some(Identity::Continue);
        self
    }

    pub fn cascade(mut self) -> Truncate {
        self.cascade = true;
        self
    }
}

impl From<Truncate> for Statement {
    fn from(value: Truncate) -> Self {
        Statement::Truncate(value)
    }
}
