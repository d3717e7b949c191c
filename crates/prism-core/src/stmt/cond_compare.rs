use super::{Condition, Expr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// `lhs <op> rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct CondCompare {
    pub lhs: Expr,
    pub op: CompareOp,
    pub rhs: Expr,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// The strict form of an ordering operator: `<=` becomes `<` and `>=`
    /// becomes `>`.
    pub fn strict(self) -> CompareOp {
        match self {
            CompareOp::Le => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Gt,
            op => op,
        }
    }

    pub fn is_ordering(self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::Ne)
    }
}

impl Condition {
    pub fn compare(lhs: impl Into<Expr>, op: CompareOp, rhs: impl Into<Expr>) -> Condition {
        CondCompare {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
        .into()
    }
}

impl From<CondCompare> for Condition {
    fn from(value: CondCompare) -> Self {
        Condition::Compare(value)
    }
}
