use super::{Condition, Expr, OrderByExpr, Statement, Table};

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: Table,
    pub using: Vec<Table>,
    pub filter: Option<Condition>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<u64>,
    pub returning: Vec<Expr>,
}

impl Delete {
    pub fn new(table: impl Into<Table>) -> Delete {
        Delete {
            table: table.into(),
            using: vec![],
            filter: None,
            order_by: vec![],
            limit: None,
            returning: vec![],
        }
    }

    pub fn using(mut self, table: impl Into<Table>) -> Delete {
        self.using.push(table.into());
        self
    }

    pub fn filter(mut self, condition: impl Into<Condition>) -> Delete {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Condition::and(filter, condition),
            None => condition.into(),
        });
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Delete {
        self.order_by.push(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Delete {
        self.limit = Some(limit);
        self
    }

    pub fn returning(mut self, expr: impl Into<Expr>) -> Delete {
        self.returning.push(expr.into());
        self
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
