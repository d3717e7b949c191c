use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

/// An ORDER BY item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<Direction>,
    pub nulls: Option<Nulls>,
}

impl OrderByExpr {
    pub fn nulls_first(mut self) -> OrderByExpr {
        self.nulls = Some(Nulls::First);
        self
    }

    pub fn nulls_last(mut self) -> OrderByExpr {
        self.nulls = Some(Nulls::Last);
        self
    }
}

impl Expr {
    pub fn asc(self) -> OrderByExpr {
        OrderByExpr {
            expr: self,
            direction: Some(Direction::Asc),
            nulls: None,
        }
    }

    pub fn desc(self) -> OrderByExpr {
        OrderByExpr {
            expr: self,
            direction: Some(Direction::Desc),
            nulls: None,
        }
    }
}

impl From<Expr> for OrderByExpr {
    fn from(expr: Expr) -> Self {
        OrderByExpr {
            expr,
            direction: None,
            nulls: None,
        }
    }
}
