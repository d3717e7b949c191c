use super::{Condition, DataType, Expr};

/// A `CASE` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprCase {
    /// `CASE WHEN cond THEN value ... [ELSE value] END`
    Searched {
        branches: Vec<(Condition, Expr)>,
        otherwise: Option<Box<Expr>>,
    },

    /// `CASE operand WHEN value THEN value ... [ELSE value] END`
    Simple {
        operand: Box<Expr>,
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Box<Expr>>,
    },
}

/// Builds a searched `CASE` expression.
#[derive(Debug, Default)]
pub struct CaseBuilder {
    branches: Vec<(Condition, Expr)>,
}

/// Builds a simple `CASE` expression.
#[derive(Debug)]
pub struct SimpleCaseBuilder {
    operand: Expr,
    branches: Vec<(Expr, Expr)>,
}

impl CaseBuilder {
    pub fn new() -> CaseBuilder {
        CaseBuilder::default()
    }

    pub fn when(mut self, condition: impl Into<Condition>, then: impl Into<Expr>) -> CaseBuilder {
        self.branches.push((condition.into(), then.into()));
        self
    }

    pub fn otherwise(self, otherwise: impl Into<Expr>) -> Expr {
        ExprCase::Searched {
            branches: self.branches,
            otherwise: Some(Box::new(otherwise.into())),
        }
        .into()
    }

    /// Finishes the expression without an `ELSE` branch.
    pub fn end(self) -> Expr {
        ExprCase::Searched {
            branches: self.branches,
            otherwise: None,
        }
        .into()
    }
}

impl SimpleCaseBuilder {
    pub fn when(mut self, value: impl Into<Expr>, then: impl Into<Expr>) -> SimpleCaseBuilder {
        self.branches.push((value.into(), then.into()));
        self
    }

    pub fn otherwise(self, otherwise: impl Into<Expr>) -> Expr {
        ExprCase::Simple {
            operand: Box::new(self.operand),
            branches: self.branches,
            otherwise: Some(Box::new(otherwise.into())),
        }
        .into()
    }

    pub fn end(self) -> Expr {
        ExprCase::Simple {
            operand: Box::new(self.operand),
            branches: self.branches,
            otherwise: None,
        }
        .into()
    }
}

impl Expr {
    pub fn case() -> CaseBuilder {
        CaseBuilder::new()
    }

    pub fn case_of(operand: impl Into<Expr>) -> SimpleCaseBuilder {
        SimpleCaseBuilder {
            operand: operand.into(),
            branches: vec![],
        }
    }
}

impl ExprCase {
    pub fn ty(&self) -> DataType {
        let (thens, otherwise): (Vec<&Expr>, _) = match self {
            ExprCase::Searched {
                branches,
                otherwise,
            } => (branches.iter().map(|(_, then)| then).collect(), otherwise),
            ExprCase::Simple {
                branches,
                otherwise,
                ..
            } => (branches.iter().map(|(_, then)| then).collect(), otherwise),
        };

        thens
            .into_iter()
            .chain(otherwise.as_deref())
            .map(Expr::ty)
            .find(|ty| !ty.is_unknown())
            .unwrap_or_default()
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Expr::Case(value)
    }
}
