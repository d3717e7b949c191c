use super::{Condition, Expr};

/// `expr [NOT] BETWEEN [SYMMETRIC] low AND high`
#[derive(Debug, Clone, PartialEq)]
pub struct CondBetween {
    pub expr: Expr,
    pub low: Expr,
    pub high: Expr,
    pub negate: bool,
    pub symmetric: bool,
}

/// First phase of building a BETWEEN predicate; [`BetweenBuilder::and`]
/// supplies the upper bound and completes it.
#[derive(Debug)]
pub struct BetweenBuilder {
    expr: Expr,
    low: Expr,
    negate: bool,
    symmetric: bool,
}

impl BetweenBuilder {
    pub fn and(self, high: impl Into<Expr>) -> Condition {
        CondBetween {
            expr: self.expr,
            low: self.low,
            high: high.into(),
            negate: self.negate,
            symmetric: self.symmetric,
        }
        .into()
    }
}

impl Expr {
    pub fn between(self, low: impl Into<Expr>) -> BetweenBuilder {
        self.between_builder(low.into(), false, false)
    }

    pub fn not_between(self, low: impl Into<Expr>) -> BetweenBuilder {
        self.between_builder(low.into(), true, false)
    }

    pub fn between_symmetric(self, low: impl Into<Expr>) -> BetweenBuilder {
        self.between_builder(low.into(), false, true)
    }

    pub fn not_between_symmetric(self, low: impl Into<Expr>) -> BetweenBuilder {
        self.between_builder(low.into(), true, true)
    }

    fn between_builder(self, low: Expr, negate: bool, symmetric: bool) -> BetweenBuilder {
        BetweenBuilder {
            expr: self,
            low,
            negate,
            symmetric,
        }
    }
}

impl CondBetween {
    /// Rewrites `SYMMETRIC` as two asymmetric predicates:
    ///
    /// * `x BETWEEN SYMMETRIC a AND b` is
    ///   `(x BETWEEN a AND b) OR (x BETWEEN b AND a)`
    /// * `x NOT BETWEEN SYMMETRIC a AND b` is
    ///   `(x NOT BETWEEN a AND b) AND (x NOT BETWEEN b AND a)`
    pub fn expand_symmetric(&self) -> Option<Condition> {
        if !self.symmetric {
            return None;
        }

        let asymmetric = |low: &Expr, high: &Expr| {
            Condition::from(CondBetween {
                expr: self.expr.clone(),
                low: low.clone(),
                high: high.clone(),
                negate: self.negate,
                symmetric: false,
            })
        };

        let forward = asymmetric(&self.low, &self.high);
        let backward = asymmetric(&self.high, &self.low);

        Some(if self.negate {
            Condition::And(vec![forward, backward])
        } else {
            Condition::Or(vec![forward, backward])
        })
    }
}

impl From<CondBetween> for Condition {
    fn from(value: CondBetween) -> Self {
        Condition::Between(value)
    }
}
