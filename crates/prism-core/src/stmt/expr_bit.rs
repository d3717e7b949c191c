use super::{ArithOp, Expr, Func};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
    Xor,
    Not,
    Nand,
    Nor,
    Xnor,
    Shl,
    Shr,
}

/// A bitwise operation. `rhs` is `None` only for [`BitOp::Not`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBit {
    pub op: BitOp,
    pub lhs: Box<Expr>,
    pub rhs: Option<Box<Expr>>,
}

impl Expr {
    pub fn bit(lhs: impl Into<Self>, op: BitOp, rhs: impl Into<Self>) -> Self {
        ExprBit {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Some(Box::new(rhs.into())),
        }
        .into()
    }

    pub fn bit_not(expr: impl Into<Self>) -> Self {
        ExprBit {
            op: BitOp::Not,
            lhs: Box::new(expr.into()),
            rhs: None,
        }
        .into()
    }
}

impl ExprBit {
    /// Rewrites derived operators in terms of `&`, `|` and arithmetic.
    ///
    /// Returns `None` for `&` and `|`, which have no simpler form.
    ///
    /// * `a ^ b` is `(a | b) - (a & b)`
    /// * `~a` is `-a - 1`
    /// * `a << n` is `a * power(2, n)` and `a >> n` is `a / power(2, n)`
    pub fn expand(&self) -> Option<Expr> {
        let lhs = || (*self.lhs).clone();
        let rhs = || {
            self.rhs
                .as_deref()
                .cloned()
                .unwrap_or_else(Expr::null)
        };

        let xor = || {
            Expr::sub(
                Expr::bit(lhs(), BitOp::Or, rhs()),
                Expr::bit(lhs(), BitOp::And, rhs()),
            )
        };
        let not = |expr: Expr| Expr::sub(Expr::neg(expr), Expr::inline(1));
        let pow2 = || Expr::func(Func::Power, [Expr::inline(2), rhs()]);

        match self.op {
            BitOp::And | BitOp::Or => None,
            BitOp::Xor => Some(xor()),
            BitOp::Not => Some(not(lhs())),
            BitOp::Nand => Some(not(Expr::bit(lhs(), BitOp::And, rhs()))),
            BitOp::Nor => Some(not(Expr::bit(lhs(), BitOp::Or, rhs()))),
            BitOp::Xnor => Some(not(xor())),
            BitOp::Shl => Some(Expr::arith(lhs(), ArithOp::Mul, pow2())),
            BitOp::Shr => Some(Expr::arith(lhs(), ArithOp::Div, pow2())),
        }
    }
}

impl From<ExprBit> for Expr {
    fn from(value: ExprBit) -> Self {
        Expr::Bit(value)
    }
}
