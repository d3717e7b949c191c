use super::{Condition, Expr, Select};

/// `expr [NOT] IN (a, b, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondInList {
    pub expr: Expr,
    pub list: Vec<Expr>,
    pub negate: bool,
}

/// `expr [NOT] IN (select)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondInSelect {
    pub expr: Expr,
    pub select: Box<Select>,
    pub negate: bool,
}

impl From<CondInList> for Condition {
    fn from(value: CondInList) -> Self {
        Condition::InList(value)
    }
}

impl From<CondInSelect> for Condition {
    fn from(value: CondInSelect) -> Self {
        Condition::InSelect(value)
    }
}
