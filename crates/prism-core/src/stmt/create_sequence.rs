use super::Statement;
use crate::Name;

/// `CREATE SEQUENCE [IF NOT EXISTS] name ..`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateSequence {
    pub name: Name,
    pub start_with: Option<i64>,
    pub increment_by: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub cycle: bool,
    pub cache: Option<u64>,
    pub if_not_exists: bool,
}

impl CreateSequence {
    pub fn new(name: impl Into<Name>) -> CreateSequence {
        CreateSequence {
            name: name.into(),
            ..CreateSequence::default()
        }
    }

    pub fn start_with(mut self, value: i64) -> CreateSequence {
        self.start_with = Some(value);
        self
    }

    pub fn increment_by(mut self, value: i64) -> CreateSequence {
        self.increment_by = Some(value);
        self
    }

    pub fn min_value(mut self, value: i64) -> CreateSequence {
        self.min_value = Some(value);
        self
    }

    pub fn max_value(mut self, value: i64) -> CreateSequence {
        self.max_value = Some(value);
        self
    }

    pub fn cycle(mut self) -> CreateSequence {
        self.cycle = true;
        self
    }

    pub fn cache(mut self, value: u64) -> CreateSequence {
        self.cache = Some(value);
        self
    }

    pub fn if_not_exists(mut self) -> CreateSequence {
        self.if_not_exists = true;
        self
    }
}

impl From<CreateSequence> for Statement {
    fn from(value: CreateSequence) -> Self {
        Statement::CreateSequence(value)
    }
}
