use super::*;
use crate::Name;

/// A value-producing SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bind value or inline literal
    Value(ExprValue),

    /// A column reference
    Field(ExprField),

    /// `*` or `t.*`
    Asterisk(Option<Name>),

    /// Arithmetic: `+ - * / %`
    Arith(ExprArith),

    /// Arithmetic negation
    Neg(Box<Expr>),

    /// Bitwise operation
    Bit(ExprBit),

    /// Built-in, aggregate or user function call
    Func(ExprFunc),

    /// `CASE` expression, simple or searched
    Case(ExprCase),

    Cast(ExprCast),

    /// A boolean condition used in value position
    Condition(Box<Condition>),

    /// Scalar subquery
    Subquery(Box<Select>),

    /// `NEXTVAL` / `CURRVAL` on a sequence
    Sequence(ExprSequence),

    /// The `DEFAULT` keyword, as an INSERT or UPDATE value
    Default,
}

impl Expr {
    pub fn null() -> Self {
        Expr::Value(ExprValue::new(Value::Null))
    }

    pub fn is_null_literal(&self) -> bool {
        matches!(self, Expr::Value(value) if value.value.is_null())
    }

    pub fn asterisk() -> Self {
        Expr::Asterisk(None)
    }

    pub fn qualified_asterisk(table: impl Into<Name>) -> Self {
        Expr::Asterisk(Some(table.into()))
    }

    pub fn subquery(select: Select) -> Self {
        Expr::Subquery(Box::new(select))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Expr::Value(value) => Some(&value.value),
            _ => None,
        }
    }

    /// Best-effort static type of the expression, used to pick cast and
    /// emulation paths.
    pub fn ty(&self) -> DataType {
        match self {
            Expr::Value(value) => value.ty.clone(),
            Expr::Field(field) => field.ty.clone(),
            Expr::Arith(arith) => {
                let lhs = arith.lhs.ty();
                if lhs.is_unknown() {
                    arith.rhs.ty()
                } else {
                    lhs
                }
            }
            Expr::Neg(expr) => expr.ty(),
            Expr::Bit(bit) => bit.lhs.ty(),
            Expr::Func(func) => func.ty(),
            Expr::Case(case) => case.ty(),
            Expr::Cast(cast) => cast.ty.clone(),
            Expr::Condition(_) => DataType::Boolean,
            Expr::Subquery(select) => select
                .fields
                .first()
                .map(|field| field.expr.ty())
                .unwrap_or_default(),
            Expr::Sequence(_) => DataType::BigInt,
            Expr::Asterisk(_) | Expr::Default => DataType::Unknown,
        }
    }

    // Comparison shorthands producing conditions

    pub fn eq(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Ne, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Le, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Condition {
        Condition::compare(self, CompareOp::Ge, rhs)
    }

    pub fn is_null(self) -> Condition {
        CondIsNull {
            expr: self,
            negate: false,
        }
        .into()
    }

    pub fn is_not_null(self) -> Condition {
        CondIsNull {
            expr: self,
            negate: true,
        }
        .into()
    }

    pub fn is_distinct_from(self, rhs: impl Into<Expr>) -> Condition {
        CondIsDistinctFrom {
            lhs: self,
            rhs: rhs.into(),
            negate: false,
        }
        .into()
    }

    pub fn is_not_distinct_from(self, rhs: impl Into<Expr>) -> Condition {
        CondIsDistinctFrom {
            lhs: self,
            rhs: rhs.into(),
            negate: true,
        }
        .into()
    }

    pub fn in_list<I, E>(self, list: I) -> Condition
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        CondInList {
            expr: self,
            list: list.into_iter().map(Into::into).collect(),
            negate: false,
        }
        .into()
    }

    pub fn not_in_list<I, E>(self, list: I) -> Condition
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        CondInList {
            expr: self,
            list: list.into_iter().map(Into::into).collect(),
            negate: true,
        }
        .into()
    }

    pub fn in_select(self, select: Select) -> Condition {
        CondInSelect {
            expr: self,
            select: Box::new(select),
            negate: false,
        }
        .into()
    }

    pub fn not_in_select(self, select: Select) -> Condition {
        CondInSelect {
            expr: self,
            select: Box::new(select),
            negate: true,
        }
        .into()
    }

    pub fn like(self, pattern: impl Into<Expr>) -> CondLike {
        CondLike::new(self, pattern.into())
    }
}

impl From<ExprValue> for Expr {
    fn from(value: ExprValue) -> Self {
        Expr::Value(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(ExprValue::new(value))
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}

impl From<Condition> for Expr {
    fn from(value: Condition) -> Self {
        Expr::Condition(Box::new(value))
    }
}

impl From<Select> for Expr {
    fn from(value: Select) -> Self {
        Expr::Subquery(Box::new(value))
    }
}

macro_rules! impl_from_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Expr::from(Value::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(
    bool,
    i32,
    i64,
    f64,
    rust_decimal::Decimal,
    String,
    &str,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    uuid::Uuid
);
