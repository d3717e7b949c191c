use super::{Condition, Expr};

/// `expr [NOT] LIKE pattern [ESCAPE c]`, optionally case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct CondLike {
    pub expr: Expr,
    pub pattern: Expr,
    pub negate: bool,
    pub ignore_case: bool,
    pub escape: Option<char>,
}

impl CondLike {
    pub fn new(expr: Expr, pattern: Expr) -> CondLike {
        CondLike {
            expr,
            pattern,
            negate: false,
            ignore_case: false,
            escape: None,
        }
    }

    pub fn negate(mut self) -> CondLike {
        self.negate = !self.negate;
        self
    }

    pub fn ignore_case(mut self) -> CondLike {
        self.ignore_case = true;
        self
    }

    pub fn escape(mut self, escape: char) -> CondLike {
        self.escape = Some(escape);
        self
    }

    /// Case-insensitive matching as `LOWER(expr) LIKE LOWER(pattern)`.
    pub fn expand_ignore_case(&self) -> CondLike {
        CondLike {
            expr: Expr::lower(self.expr.clone()),
            pattern: Expr::lower(self.pattern.clone()),
            negate: self.negate,
            ignore_case: false,
            escape: self.escape,
        }
    }
}

impl From<CondLike> for Condition {
    fn from(value: CondLike) -> Self {
        Condition::Like(value)
    }
}
