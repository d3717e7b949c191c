use super::*;

/// A boolean-valued SQL predicate.
///
/// Conditions follow SQL three-valued logic: every node may evaluate to
/// TRUE, FALSE or UNKNOWN, and every rewrite preserves all three.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    True,
    False,
    Compare(CondCompare),
    Like(CondLike),
    Between(CondBetween),
    InList(CondInList),
    InSelect(CondInSelect),
    IsNull(CondIsNull),
    IsDistinctFrom(CondIsDistinctFrom),
    RowCompare(CondRowCompare),
    RowInList(CondRowInList),
    RowInSelect(CondRowInSelect),
    RowIsNull(CondRowIsNull),
    RowBetween(CondRowBetween),
    Exists(CondExists),
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
    Xor(Box<Condition>, Box<Condition>),

    /// A boolean field or expression used as a predicate
    Field(Expr),
}

/// `[NOT] EXISTS (select)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondExists {
    pub select: Box<Select>,
    pub negate: bool,
}

impl Condition {
    pub fn is_true(&self) -> bool {
        matches!(self, Condition::True)
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Condition::False)
    }

    /// Conjunction. `TRUE` operands are dropped and nested conjunctions are
    /// flattened.
    pub fn and(lhs: impl Into<Condition>, rhs: impl Into<Condition>) -> Condition {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match (lhs, rhs) {
            (Condition::True, rhs) => rhs,
            (lhs, Condition::True) => lhs,
            (Condition::And(mut lhs), Condition::And(rhs)) => {
                lhs.extend(rhs);
                Condition::And(lhs)
            }
            (Condition::And(mut lhs), rhs) => {
                lhs.push(rhs);
                Condition::And(lhs)
            }
            (lhs, Condition::And(mut rhs)) => {
                rhs.insert(0, lhs);
                Condition::And(rhs)
            }
            (lhs, rhs) => Condition::And(vec![lhs, rhs]),
        }
    }

    /// Disjunction. `FALSE` operands are dropped and nested disjunctions are
    /// flattened.
    pub fn or(lhs: impl Into<Condition>, rhs: impl Into<Condition>) -> Condition {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match (lhs, rhs) {
            (Condition::False, rhs) => rhs,
            (lhs, Condition::False) => lhs,
            (Condition::Or(mut lhs), Condition::Or(rhs)) => {
                lhs.extend(rhs);
                Condition::Or(lhs)
            }
            (Condition::Or(mut lhs), rhs) => {
                lhs.push(rhs);
                Condition::Or(lhs)
            }
            (lhs, Condition::Or(mut rhs)) => {
                rhs.insert(0, lhs);
                Condition::Or(rhs)
            }
            (lhs, rhs) => Condition::Or(vec![lhs, rhs]),
        }
    }

    /// Conjunction of all operands; `TRUE` when there are none.
    pub fn and_all<I>(operands: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        operands
            .into_iter()
            .fold(Condition::True, |acc, operand| Condition::and(acc, operand))
    }

    /// Disjunction of all operands; `FALSE` when there are none.
    pub fn or_any<I>(operands: I) -> Condition
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        operands
            .into_iter()
            .fold(Condition::False, |acc, operand| Condition::or(acc, operand))
    }

    pub fn not(condition: impl Into<Condition>) -> Condition {
        Condition::Not(Box::new(condition.into()))
    }

    pub fn xor(lhs: impl Into<Condition>, rhs: impl Into<Condition>) -> Condition {
        Condition::Xor(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn exists(select: Select) -> Condition {
        Condition::Exists(CondExists {
            select: Box::new(select),
            negate: false,
        })
    }

    pub fn not_exists(select: Select) -> Condition {
        Condition::Exists(CondExists {
            select: Box::new(select),
            negate: true,
        })
    }

    /// `a XOR b` as `(a OR b) AND NOT (a AND b)`.
    pub fn expand_xor(lhs: &Condition, rhs: &Condition) -> Condition {
        Condition::And(vec![
            Condition::Or(vec![lhs.clone(), rhs.clone()]),
            Condition::not(Condition::And(vec![lhs.clone(), rhs.clone()])),
        ])
    }

    /// The condition as a value:
    /// `CASE WHEN c THEN on_true WHEN NOT c THEN on_false END`.
    ///
    /// When `c` is unknown neither branch matches and the result is NULL.
    pub fn to_case_expr(&self, on_true: Expr, on_false: Expr) -> Expr {
        CaseBuilder::new()
            .when(self.clone(), on_true)
            .when(Condition::not(self.clone()), on_false)
            .end()
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        if value {
            Condition::True
        } else {
            Condition::False
        }
    }
}

impl From<Expr> for Condition {
    fn from(value: Expr) -> Self {
        match value {
            Expr::Condition(condition) => *condition,
            expr => Condition::Field(expr),
        }
    }
}

impl From<&Condition> for Condition {
    fn from(value: &Condition) -> Self {
        value.clone()
    }
}

impl From<CondExists> for Condition {
    fn from(value: CondExists) -> Self {
        Condition::Exists(value)
    }
}
