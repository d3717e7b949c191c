use super::{Condition, Expr, OrderByExpr, Row, Select, SelectField, Statement, Table};
use crate::{Error, Name, Result};

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: Table,
    pub assignments: Vec<Assignment>,
    pub from: Vec<Table>,
    pub filter: Option<Condition>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<u64>,
    pub returning: Vec<Expr>,
}

/// A SET item.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// `column = value`
    Column { column: Name, value: Expr },

    /// `(a, b) = (x, y)` or `(a, b) = (SELECT ..)`
    Row {
        columns: Vec<Name>,
        value: RowSource,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowSource {
    Row(Row),
    Select(Box<Select>),
}

impl Update {
    pub fn new(table: impl Into<Table>) -> Update {
        Update {
            table: table.into(),
            assignments: vec![],
            from: vec![],
            filter: None,
            order_by: vec![],
            limit: None,
            returning: vec![],
        }
    }

    pub fn set(mut self, column: &str, value: impl Into<Expr>) -> Update {
        self.assignments.push(Assignment::Column {
            column: Name::from(column),
            value: value.into(),
        });
        self
    }

    pub fn set_row(mut self, columns: &[&str], value: RowSource) -> Update {
        self.assignments.push(Assignment::Row {
            columns: columns.iter().map(|c| Name::from(*c)).collect(),
            value,
        });
        self
    }

    pub fn from(mut self, table: impl Into<Table>) -> Update {
        self.from.push(table.into());
        self
    }

    pub fn filter(mut self, condition: impl Into<Condition>) -> Update {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Condition::and(filter, condition),
            None => condition.into(),
        });
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Update {
        self.order_by.push(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Update {
        self.limit = Some(limit);
        self
    }

    pub fn returning(mut self, expr: impl Into<Expr>) -> Update {
        self.returning.push(expr.into());
        self
    }
}

impl Assignment {
    /// One `(column, value)` pair per target column.
    ///
    /// A row assigned from a subquery becomes one scalar subquery per column,
    /// each selecting the matching output column.
    pub fn expand(&self) -> Result<Vec<(Name, Expr)>> {
        match self {
            Assignment::Column { column, value } => Ok(vec![(column.clone(), value.clone())]),
            Assignment::Row {
                columns,
                value: RowSource::Row(row),
            } => {
                if row.len() != columns.len() {
                    return Err(Error::invalid_statement(format!(
                        "row has {} values, expected {}",
                        row.len(),
                        columns.len()
                    )));
                }
                Ok(columns.iter().cloned().zip(row.fields.iter().cloned()).collect())
            }
            Assignment::Row {
                columns,
                value: RowSource::Select(select),
            } => {
                if select.fields.len() != columns.len() {
                    return Err(Error::invalid_statement(format!(
                        "subquery has {} columns, expected {}",
                        select.fields.len(),
                        columns.len()
                    )));
                }

                Ok(columns
                    .iter()
                    .zip(&select.fields)
                    .map(|(column, field)| {
                        let scalar = Select {
                            fields: vec![SelectField {
                                expr: field.expr.clone(),
                                alias: None,
                            }],
                            ..(**select).clone()
                        };
                        (column.clone(), Expr::subquery(scalar))
                    })
                    .collect())
            }
        }
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
