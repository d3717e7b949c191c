use super::{CaseBuilder, Condition, Expr};

/// `expr IS [NOT] NULL`
#[derive(Debug, Clone, PartialEq)]
pub struct CondIsNull {
    pub expr: Expr,
    pub negate: bool,
}

/// `lhs IS [NOT] DISTINCT FROM rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct CondIsDistinctFrom {
    pub lhs: Expr,
    pub rhs: Expr,
    pub negate: bool,
}

impl CondIsDistinctFrom {
    /// Rewrites the predicate without `IS DISTINCT FROM`:
    ///
    /// ```text
    /// CASE WHEN lhs IS NULL AND rhs IS NULL THEN 0
    ///      WHEN lhs IS NULL OR rhs IS NULL THEN 1
    ///      WHEN lhs = rhs THEN 0
    ///      ELSE 1 END = 1
    /// ```
    ///
    /// The `CASE` never yields NULL, so the result is never unknown. The
    /// negated form compares with `0`.
    pub fn expand(&self) -> Condition {
        let lhs = || self.lhs.clone();
        let rhs = || self.rhs.clone();

        let case = CaseBuilder::new()
            .when(
                Condition::And(vec![lhs().is_null(), rhs().is_null()]),
                Expr::inline(0),
            )
            .when(
                Condition::Or(vec![lhs().is_null(), rhs().is_null()]),
                Expr::inline(1),
            )
            .when(lhs().eq(rhs()), Expr::inline(0))
            .otherwise(Expr::inline(1));

        case.eq(Expr::inline(if self.negate { 0 } else { 1 }))
    }
}

impl From<CondIsNull> for Condition {
    fn from(value: CondIsNull) -> Self {
        Condition::IsNull(value)
    }
}

impl From<CondIsDistinctFrom> for Condition {
    fn from(value: CondIsDistinctFrom) -> Self {
        Condition::IsDistinctFrom(value)
    }
}
