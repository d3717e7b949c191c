use super::{CaseBuilder, CompareOp, Condition, DataType, Expr};
use crate::Name;

/// A function known to the renderer, or a user function by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Func {
    Abs,
    Ceil,
    Floor,
    Round,
    Sqrt,
    Exp,
    Ln,
    /// `LOG(base, x)`
    Log,
    Power,
    Sign,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Least,
    Greatest,
    Upper,
    Lower,
    Trim,
    Ltrim,
    Rtrim,
    CharLength,
    Concat,
    /// `SUBSTRING(s, from [, length])`
    Substring,
    Replace,
    Repeat,
    Lpad,
    Rpad,
    Left,
    Right,
    /// `POSITION(search IN s)`, arguments in that order
    Position,
    Coalesce,
    Nvl,
    Nvl2,
    NullIf,
    CurrentDate,
    CurrentTimestamp,
    Random,
    Count,
    Sum,
    Avg,
    Min,
    Max,
    Custom(Name),
}

/// A function call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub func: Func,
    pub args: Vec<Expr>,

    /// `DISTINCT` inside an aggregate call
    pub distinct: bool,

    /// Aggregate `FILTER (WHERE ...)`
    pub filter: Option<Box<Condition>>,
}

impl Func {
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Func::Count | Func::Sum | Func::Avg | Func::Min | Func::Max
        )
    }

    /// Standard SQL spelling, used when a dialect has no override.
    pub fn sql_name(&self) -> &str {
        match self {
            Func::Abs => "abs",
            Func::Ceil => "ceil",
            Func::Floor => "floor",
            Func::Round => "round",
            Func::Sqrt => "sqrt",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Power => "power",
            Func::Sign => "sign",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Coth => "coth",
            Func::Least => "least",
            Func::Greatest => "greatest",
            Func::Upper => "upper",
            Func::Lower => "lower",
            Func::Trim => "trim",
            Func::Ltrim => "ltrim",
            Func::Rtrim => "rtrim",
            Func::CharLength => "char_length",
            Func::Concat => "concat",
            Func::Substring => "substring",
            Func::Replace => "replace",
            Func::Repeat => "repeat",
            Func::Lpad => "lpad",
            Func::Rpad => "rpad",
            Func::Left => "left",
            Func::Right => "right",
            Func::Position => "position",
            Func::Coalesce => "coalesce",
            Func::Nvl => "nvl",
            Func::Nvl2 => "nvl2",
            Func::NullIf => "nullif",
            Func::CurrentDate => "current_date",
            Func::CurrentTimestamp => "current_timestamp",
            Func::Random => "random",
            Func::Count => "count",
            Func::Sum => "sum",
            Func::Avg => "avg",
            Func::Min => "min",
            Func::Max => "max",
            Func::Custom(name) => name.last().unwrap_or_default(),
        }
    }
}

impl ExprFunc {
    pub fn new<I, E>(func: Func, args: I) -> ExprFunc
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        ExprFunc {
            func,
            args: args.into_iter().map(Into::into).collect(),
            distinct: false,
            filter: None,
        }
    }

    pub fn distinct(mut self) -> ExprFunc {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, filter: impl Into<Condition>) -> ExprFunc {
        self.filter = Some(Box::new(filter.into()));
        self
    }

    /// `COUNT(*)` is an aggregate whose only argument is an unqualified
    /// asterisk.
    pub fn is_count_star(&self) -> bool {
        self.func == Func::Count && matches!(&self.args[..], [Expr::Asterisk(None)])
    }

    pub fn ty(&self) -> DataType {
        match &self.func {
            Func::Count => DataType::BigInt,
            Func::CharLength | Func::Position | Func::Sign => DataType::Integer,
            Func::Upper
            | Func::Lower
            | Func::Trim
            | Func::Ltrim
            | Func::Rtrim
            | Func::Concat
            | Func::Substring
            | Func::Replace
            | Func::Repeat
            | Func::Lpad
            | Func::Rpad
            | Func::Left
            | Func::Right => DataType::VarChar(None),
            Func::CurrentDate => DataType::Date,
            Func::CurrentTimestamp => DataType::Timestamp,
            Func::Sqrt
            | Func::Exp
            | Func::Ln
            | Func::Log
            | Func::Power
            | Func::Sin
            | Func::Cos
            | Func::Tan
            | Func::Sinh
            | Func::Cosh
            | Func::Tanh
            | Func::Coth
            | Func::Random => DataType::Double,
            _ => self
                .args
                .iter()
                .map(Expr::ty)
                .find(|ty| !ty.is_unknown())
                .unwrap_or_default(),
        }
    }

    /// `LEAST`/`GREATEST` as nested `CASE` expressions:
    /// `CASE WHEN a < b THEN least(a, rest) ELSE least(b, rest) END`.
    ///
    /// The result grows exponentially with the argument count. Returns
    /// `None` for any other function.
    pub fn expand_least_greatest(&self) -> Option<Expr> {
        let op = match self.func {
            Func::Least => CompareOp::Lt,
            Func::Greatest => CompareOp::Gt,
            _ => return None,
        };

        fn expand(args: &[Expr], op: CompareOp) -> Expr {
            match args {
                [] => Expr::null(),
                [only] => only.clone(),
                [first, second, rest @ ..] => {
                    let with = |pick: &Expr| {
                        let mut args = Vec::with_capacity(rest.len() + 1);
                        args.push(pick.clone());
                        args.extend_from_slice(rest);
                        expand(&args, op)
                    };

                    CaseBuilder::new()
                        .when(
                            Condition::compare(first.clone(), op, second.clone()),
                            with(first),
                        )
                        .otherwise(with(second))
                }
            }
        }

        Some(expand(&self.args, op))
    }

    /// Hyperbolic functions in terms of `exp`, e.g.
    /// `tanh(x) = (exp(2x) - 1) / (exp(2x) + 1)`.
    pub fn expand_hyperbolic(&self) -> Option<Expr> {
        let x = self.args.first()?.clone();
        let exp = |arg: Expr| Expr::func(Func::Exp, [arg]);
        let exp2x = || exp(Expr::mul(Expr::inline(2), x.clone()));

        Some(match self.func {
            Func::Sinh => Expr::div(
                Expr::sub(exp(x.clone()), exp(Expr::neg(x.clone()))),
                Expr::inline(2),
            ),
            Func::Cosh => Expr::div(
                Expr::add(exp(x.clone()), exp(Expr::neg(x.clone()))),
                Expr::inline(2),
            ),
            Func::Tanh => Expr::div(
                Expr::sub(exp2x(), Expr::inline(1)),
                Expr::add(exp2x(), Expr::inline(1)),
            ),
            Func::Coth => Expr::div(
                Expr::add(exp2x(), Expr::inline(1)),
                Expr::sub(exp2x(), Expr::inline(1)),
            ),
            _ => return None,
        })
    }

    /// `power(a, b)` as `exp(ln(a) * b)`.
    pub fn expand_power(&self) -> Option<Expr> {
        match (&self.func, &self.args[..]) {
            (Func::Power, [base, exponent]) => Some(Expr::func(
                Func::Exp,
                [Expr::mul(
                    Expr::func(Func::Ln, [base.clone()]),
                    exponent.clone(),
                )],
            )),
            _ => None,
        }
    }

    /// `log(base, x)` as `ln(x) / ln(base)`.
    pub fn expand_log(&self) -> Option<Expr> {
        match (&self.func, &self.args[..]) {
            (Func::Log, [base, x]) => Some(Expr::div(
                Expr::func(Func::Ln, [x.clone()]),
                Expr::func(Func::Ln, [base.clone()]),
            )),
            _ => None,
        }
    }

    /// Moves an aggregate `FILTER` into the argument:
    /// `AGG(CASE WHEN filter THEN arg END)`, and for `COUNT(*)`
    /// `COUNT(CASE WHEN filter THEN 1 END)`.
    pub fn expand_filter(&self) -> Option<ExprFunc> {
        let filter = self.filter.as_deref()?;

        let arg = if self.is_count_star() {
            Expr::inline(1)
        } else {
            self.args.first().cloned().unwrap_or_else(Expr::null)
        };

        Some(ExprFunc {
            func: self.func.clone(),
            args: vec![CaseBuilder::new().when(filter.clone(), arg).end()],
            distinct: self.distinct,
            filter: None,
        })
    }
}

impl Expr {
    pub fn func<I, E>(func: Func, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        ExprFunc::new(func, args).into()
    }

    pub fn count_star() -> Self {
        Expr::func(Func::Count, [Expr::asterisk()])
    }

    pub fn count(expr: impl Into<Expr>) -> Self {
        Expr::func(Func::Count, [expr])
    }

    pub fn sum(expr: impl Into<Expr>) -> Self {
        Expr::func(Func::Sum, [expr])
    }

    pub fn least<I, E>(args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::func(Func::Least, args)
    }

    pub fn greatest<I, E>(args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::func(Func::Greatest, args)
    }

    pub fn upper(expr: impl Into<Expr>) -> Self {
        Expr::func(Func::Upper, [expr])
    }

    pub fn lower(expr: impl Into<Expr>) -> Self {
        Expr::func(Func::Lower, [expr])
    }

    pub fn coalesce<I, E>(args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::func(Func::Coalesce, args)
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Expr::Func(value)
    }
}
