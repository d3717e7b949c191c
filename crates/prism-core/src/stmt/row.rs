use super::{
    CompareOp, CondRowBetween, CondRowCompare, CondRowInList, CondRowInSelect, CondRowIsNull,
    Condition, Expr, Select,
};

/// A row value constructor, `(a, b, c)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub fields: Vec<Expr>,
}

impl Row {
    pub fn new<I, E>(fields: I) -> Row
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Row {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn compare(self, op: CompareOp, rhs: impl Into<Row>) -> Condition {
        CondRowCompare {
            lhs: self,
            op,
            rhs: rhs.into(),
        }
        .into()
    }

    pub fn eq(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Ne, rhs)
    }

    pub fn lt(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Le, rhs)
    }

    pub fn gt(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Row>) -> Condition {
        self.compare(CompareOp::Ge, rhs)
    }

    pub fn in_list(self, list: impl IntoIterator<Item = Row>) -> Condition {
        CondRowInList {
            row: self,
            list: list.into_iter().collect(),
            negate: false,
        }
        .into()
    }

    pub fn not_in_list(self, list: impl IntoIterator<Item = Row>) -> Condition {
        CondRowInList {
            row: self,
            list: list.into_iter().collect(),
            negate: true,
        }
        .into()
    }

    pub fn in_select(self, select: Select) -> Condition {
        CondRowInSelect {
            row: self,
            select: Box::new(select),
            negate: false,
        }
        .into()
    }

    pub fn not_in_select(self, select: Select) -> Condition {
        CondRowInSelect {
            row: self,
            select: Box::new(select),
            negate: true,
        }
        .into()
    }

    pub fn is_null(self) -> Condition {
        CondRowIsNull {
            row: self,
            negate: false,
        }
        .into()
    }

    pub fn is_not_null(self) -> Condition {
        CondRowIsNull {
            row: self,
            negate: true,
        }
        .into()
    }

    pub fn between(self, low: impl Into<Row>, high: impl Into<Row>) -> Condition {
        CondRowBetween {
            row: self,
            low: low.into(),
            high: high.into(),
            negate: false,
            symmetric: false,
        }
        .into()
    }
}

impl<E: Into<Expr>, const N: usize> From<[E; N]> for Row {
    fn from(fields: [E; N]) -> Self {
        Row::new(fields)
    }
}

impl From<Vec<Expr>> for Row {
    fn from(fields: Vec<Expr>) -> Self {
        Row { fields }
    }
}
