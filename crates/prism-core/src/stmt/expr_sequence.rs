use super::Expr;
use crate::Name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOp {
    NextVal,
    CurrVal,
}

/// Access to a sequence's next or current value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprSequence {
    pub name: Name,
    pub op: SequenceOp,
}

impl Expr {
    pub fn nextval(sequence: impl Into<Name>) -> Self {
        ExprSequence {
            name: sequence.into(),
            op: SequenceOp::NextVal,
        }
        .into()
    }

    pub fn currval(sequence: impl Into<Name>) -> Self {
        ExprSequence {
            name: sequence.into(),
            op: SequenceOp::CurrVal,
        }
        .into()
    }
}

impl From<ExprSequence> for Expr {
    fn from(value: ExprSequence) -> Self {
        Expr::Sequence(value)
    }
}
