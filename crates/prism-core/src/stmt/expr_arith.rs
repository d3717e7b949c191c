use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// `lhs <op> rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprArith {
    pub lhs: Box<Expr>,
    pub op: ArithOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn arith(lhs: impl Into<Self>, op: ArithOp, rhs: impl Into<Self>) -> Self {
        ExprArith {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn add(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::arith(lhs, ArithOp::Add, rhs)
    }

    pub fn sub(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::arith(lhs, ArithOp::Sub, rhs)
    }

    pub fn mul(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::arith(lhs, ArithOp::Mul, rhs)
    }

    pub fn div(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::arith(lhs, ArithOp::Div, rhs)
    }

    pub fn rem(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::arith(lhs, ArithOp::Mod, rhs)
    }

    pub fn neg(expr: impl Into<Self>) -> Self {
        Expr::Neg(Box::new(expr.into()))
    }
}

impl ArithOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

impl From<ExprArith> for Expr {
    fn from(value: ExprArith) -> Self {
        Expr::Arith(value)
    }
}
