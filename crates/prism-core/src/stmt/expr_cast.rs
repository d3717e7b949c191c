use super::{DataType, Expr};

/// `CAST(expr AS ty)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,
    pub ty: DataType,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: DataType) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty,
        }
        .into()
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Expr::Cast(value)
    }
}
