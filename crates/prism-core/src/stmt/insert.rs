use super::{Expr, Row, Select, Statement};
use crate::{Error, Name, Result};

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: Name,

    /// Target columns; empty means all columns in table order
    pub columns: Vec<Name>,

    pub source: InsertSource,

    /// `ON CONFLICT DO NOTHING`
    pub on_conflict_do_nothing: bool,

    pub returning: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    Values(Vec<Row>),
    Select(Box<Select>),
    DefaultValues,
}

impl Insert {
    pub fn new(table: impl Into<Name>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            source: InsertSource::DefaultValues,
            on_conflict_do_nothing: false,
            returning: vec![],
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Insert
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(|c| Name::new([c])).collect();
        self
    }

    /// Appends a row to the VALUES list.
    pub fn values(mut self, row: impl Into<Row>) -> Insert {
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row.into()),
            source => *source = InsertSource::Values(vec![row.into()]),
        }
        self
    }

    pub fn select(mut self, select: Select) -> Insert {
        self.source = InsertSource::Select(Box::new(select));
        self
    }

    pub fn default_values(mut self) -> Insert {
        self.source = InsertSource::DefaultValues;
        self
    }

    pub fn on_conflict_do_nothing(mut self) -> Insert {
        self.on_conflict_do_nothing = true;
        self
    }

    pub fn returning(mut self, expr: impl Into<Expr>) -> Insert {
        self.returning.push(expr.into());
        self
    }

    /// Checks that every row has one value per target column.
    pub fn validate(&self) -> Result<()> {
        let InsertSource::Values(rows) = &self.source else {
            return Ok(());
        };

        let expected = match (self.columns.len(), rows.first()) {
            (0, Some(first)) => first.len(),
            (n, _) => n,
        };

        for row in rows {
            if row.len() != expected {
                return Err(Error::invalid_statement(format!(
                    "row has {} values, expected {expected}",
                    row.len()
                )));
            }
        }

        Ok(())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
