use super::{Condition, Expr, OrderByExpr, Table};
use crate::Name;

/// A SELECT query, possibly combined with others through set operations.
///
/// `order_by` and `limit` apply to the whole compound query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    pub with: Option<With>,
    pub distinct: Option<Distinct>,
    pub fields: Vec<SelectField>,
    pub from: Vec<Table>,
    pub filter: Option<Condition>,
    pub group_by: Vec<Expr>,
    pub having: Option<Condition>,
    pub set_ops: Vec<SetOperation>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Limit>,
    pub for_update: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Distinct {
    /// `DISTINCT`
    All,

    /// `DISTINCT ON (..)`
    On(Vec<Expr>),
}

/// `expr [AS alias]`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    pub expr: Expr,
    pub alias: Option<Name>,
}

/// `WITH [RECURSIVE] name(cols) AS (select), ..`
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub recursive: bool,
    pub ctes: Vec<Cte>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub name: Name,
    pub columns: Vec<Name>,
    pub select: Box<Select>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Intersect,
    Except,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetOperation {
    pub op: SetOp,
    pub all: bool,
    pub select: Select,
}

/// Row limit and offset. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Select {
    pub fn new() -> Select {
        Select::default()
    }

    pub fn field(mut self, expr: impl Into<Expr>) -> Select {
        self.fields.push(SelectField {
            expr: expr.into(),
            alias: None,
        });
        self
    }

    pub fn field_as(mut self, expr: impl Into<Expr>, alias: impl Into<Name>) -> Select {
        self.fields.push(SelectField {
            expr: expr.into(),
            alias: Some(alias.into()),
        });
        self
    }

    pub fn fields<I, E>(mut self, fields: I) -> Select
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        for expr in fields {
            self = self.field(expr);
        }
        self
    }

    pub fn distinct(mut self) -> Select {
        self.distinct = Some(Distinct::All);
        self
    }

    pub fn distinct_on<I, E>(mut self, exprs: I) -> Select
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.distinct = Some(Distinct::On(exprs.into_iter().map(Into::into).collect()));
        self
    }

    pub fn from(mut self, table: impl Into<Table>) -> Select {
        self.from.push(table.into());
        self
    }

    /// Adds a WHERE predicate, AND-ed with any existing one.
    pub fn filter(mut self, condition: impl Into<Condition>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Condition::and(filter, condition),
            None => condition.into(),
        });
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Select {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, condition: impl Into<Condition>) -> Select {
        self.having = Some(match self.having.take() {
            Some(having) => Condition::and(having, condition),
            None => condition.into(),
        });
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Select {
        self.order_by.push(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit.get_or_insert_with(Limit::default).limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.limit.get_or_insert_with(Limit::default).offset = Some(offset);
        self
    }

    pub fn for_update(mut self) -> Select {
        self.for_update = true;
        self
    }

    pub fn with(mut self, cte: Cte) -> Select {
        self.with
            .get_or_insert_with(|| With {
                recursive: false,
                ctes: vec![],
            })
            .ctes
            .push(cte);
        self
    }

    pub fn with_recursive(mut self, cte: Cte) -> Select {
        self = self.with(cte);
        if let Some(with) = &mut self.with {
            with.recursive = true;
        }
        self
    }

    fn set_op(mut self, op: SetOp, all: bool, select: Select) -> Select {
        self.set_ops.push(SetOperation { op, all, select });
        self
    }

    pub fn union(self, select: Select) -> Select {
        self.set_op(SetOp::Union, false, select)
    }

    pub fn union_all(self, select: Select) -> Select {
        self.set_op(SetOp::Union, true, select)
    }

    pub fn intersect(self, select: Select) -> Select {
        self.set_op(SetOp::Intersect, false, select)
    }

    pub fn intersect_all(self, select: Select) -> Select {
        self.set_op(SetOp::Intersect, true, select)
    }

    pub fn except(self, select: Select) -> Select {
        self.set_op(SetOp::Except, false, select)
    }

    pub fn except_all(self, select: Select) -> Select {
        self.set_op(SetOp::Except, true, select)
    }

    /// Output column names: the alias, else the column name of a plain field
    /// reference. Unnamed expressions are skipped.
    pub fn field_names(&self) -> Vec<Name> {
        self.fields
            .iter()
            .filter_map(|field| match (&field.alias, &field.expr) {
                (Some(alias), _) => Some(alias.clone()),
                (None, Expr::Field(expr)) => Some(expr.name.unqualified()),
                _ => None,
            })
            .collect()
    }
}

impl Cte {
    pub fn new(name: impl Into<Name>, select: Select) -> Cte {
        Cte {
            name: name.into(),
            columns: vec![],
            select: Box::new(select),
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Cte
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(|c| Name::new([c])).collect();
        self
    }
}

impl Limit {
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}
