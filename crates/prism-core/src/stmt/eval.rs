use super::{
    ArithOp, BitOp, CompareOp, CondLike, Condition, ConstInput, DataType, Expr, ExprCase,
    ExprFunc, Func, Input, Value,
};
use crate::{Error, Result};

use rust_decimal::Decimal;
use std::cmp::Ordering;

fn failed(msg: impl Into<String>) -> Error {
    Error::expression_evaluation_failed(msg)
}

impl Expr {
    /// Evaluates the expression against `input`.
    ///
    /// Only expressions that need no database are supported: subqueries,
    /// sequences, aggregates and non-deterministic functions fail.
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(ConstInput::new())
    }

    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::Value(value) => Ok(value.value.clone()),
            Expr::Field(field) => input
                .resolve_field(&field.name)
                .ok_or_else(|| failed(format!("no value for field `{}`", field.name))),
            Expr::Arith(expr) => {
                let lhs = expr.lhs.eval_ref(input)?;
                let rhs = expr.rhs.eval_ref(input)?;
                arith(expr.op, &lhs, &rhs)
            }
            Expr::Neg(expr) => arith(ArithOp::Sub, &Value::I32(0), &expr.eval_ref(input)?),
            Expr::Bit(expr) => match expr.op {
                BitOp::And | BitOp::Or => {
                    let lhs = expr.lhs.eval_ref(input)?;
                    let rhs = match &expr.rhs {
                        Some(rhs) => rhs.eval_ref(input)?,
                        None => Value::Null,
                    };
                    if lhs.is_null() || rhs.is_null() {
                        return Ok(Value::Null);
                    }
                    let (Some(lhs), Some(rhs)) = (lhs.as_i64(), rhs.as_i64()) else {
                        return Err(failed("bitwise operands must be integers"));
                    };
                    Ok(Value::I64(if expr.op == BitOp::And {
                        lhs & rhs
                    } else {
                        lhs | rhs
                    }))
                }
                _ => match expr.expand() {
                    Some(expanded) => expanded.eval_ref(input),
                    None => Err(failed("unsupported bitwise operator")),
                },
            },
            Expr::Func(func) => func.eval_ref(input),
            Expr::Case(case) => case.eval_ref(input),
            Expr::Cast(cast) => cast_value(cast.expr.eval_ref(input)?, &cast.ty),
            Expr::Condition(condition) => Ok(match condition.eval_ref(input)? {
                Some(value) => Value::Bool(value),
                None => Value::Null,
            }),
            Expr::Asterisk(_) => Err(failed("cannot evaluate `*`")),
            Expr::Subquery(_) => Err(failed("cannot evaluate a subquery")),
            Expr::Sequence(_) => Err(failed("cannot evaluate a sequence")),
            Expr::Default => Err(failed("cannot evaluate DEFAULT")),
        }
    }
}

impl Condition {
    /// Evaluates the condition with SQL three-valued logic. `None` is
    /// UNKNOWN.
    pub fn eval(&self, mut input: impl Input) -> Result<Option<bool>> {
        self.eval_ref(&mut input)
    }

    pub fn eval_const(&self) -> Result<Option<bool>> {
        self.eval(ConstInput::new())
    }

    pub(super) fn eval_ref(&self, input: &mut impl Input) -> Result<Option<bool>> {
        match self {
            Condition::True => Ok(Some(true)),
            Condition::False => Ok(Some(false)),
            Condition::Compare(cond) => {
                let lhs = cond.lhs.eval_ref(input)?;
                let rhs = cond.rhs.eval_ref(input)?;
                Ok(compare(&lhs, cond.op, &rhs))
            }
            Condition::Like(cond) => cond.eval_ref(input),
            Condition::Between(cond) => {
                if let Some(expanded) = cond.expand_symmetric() {
                    return expanded.eval_ref(input);
                }

                let value = cond.expr.eval_ref(input)?;
                let low = cond.low.eval_ref(input)?;
                let high = cond.high.eval_ref(input)?;
                let between = and([
                    compare(&value, CompareOp::Ge, &low),
                    compare(&value, CompareOp::Le, &high),
                ]);
                Ok(negate_if(between, cond.negate))
            }
            Condition::InList(cond) => {
                let value = cond.expr.eval_ref(input)?;
                let mut matches = Vec::with_capacity(cond.list.len());
                for item in &cond.list {
                    matches.push(compare(&value, CompareOp::Eq, &item.eval_ref(input)?));
                }
                Ok(negate_if(or(matches), cond.negate))
            }
            Condition::IsNull(cond) => {
                let is_null = cond.expr.eval_ref(input)?.is_null();
                Ok(Some(is_null != cond.negate))
            }
            Condition::IsDistinctFrom(cond) => {
                let lhs = cond.lhs.eval_ref(input)?;
                let rhs = cond.rhs.eval_ref(input)?;
                let distinct = !lhs.not_distinct(&rhs);
                Ok(Some(distinct != cond.negate))
            }
            Condition::RowCompare(cond) => cond.expand()?.eval_ref(input),
            Condition::RowInList(cond) => cond.expand()?.eval_ref(input),
            Condition::RowIsNull(cond) => cond.expand().eval_ref(input),
            Condition::RowBetween(cond) => cond.expand()?.eval_ref(input),
            Condition::InSelect(_) | Condition::RowInSelect(_) | Condition::Exists(_) => {
                Err(failed("cannot evaluate a subquery"))
            }
            Condition::Not(cond) => Ok(cond.eval_ref(input)?.map(|value| !value)),
            Condition::And(operands) => {
                let mut values = Vec::with_capacity(operands.len());
                for operand in operands {
                    values.push(operand.eval_ref(input)?);
                }
                Ok(and(values))
            }
            Condition::Or(operands) => {
                let mut values = Vec::with_capacity(operands.len());
                for operand in operands {
                    values.push(operand.eval_ref(input)?);
                }
                Ok(or(values))
            }
            Condition::Xor(lhs, rhs) => {
                let lhs = lhs.eval_ref(input)?;
                let rhs = rhs.eval_ref(input)?;
                Ok(lhs.zip(rhs).map(|(lhs, rhs)| lhs != rhs))
            }
            Condition::Field(expr) => match expr.eval_ref(input)? {
                Value::Null => Ok(None),
                Value::Bool(value) => Ok(Some(value)),
                value => match value.as_i64() {
                    Some(number) => Ok(Some(number != 0)),
                    None => Err(failed("predicate is not a boolean")),
                },
            },
        }
    }
}

fn and(values: impl IntoIterator<Item = Option<bool>>) -> Option<bool> {
    let mut unknown = false;
    for value in values {
        match value {
            Some(false) => return Some(false),
            None => unknown = true,
            Some(true) => {}
        }
    }
    if unknown {
        None
    } else {
        Some(true)
    }
}

fn or(values: impl IntoIterator<Item = Option<bool>>) -> Option<bool> {
    let mut unknown = false;
    for value in values {
        match value {
            Some(true) => return Some(true),
            None => unknown = true,
            Some(false) => {}
        }
    }
    if unknown {
        None
    } else {
        Some(false)
    }
}

fn negate_if(value: Option<bool>, negate: bool) -> Option<bool> {
    value.map(|value| value != negate)
}

fn compare(lhs: &Value, op: CompareOp, rhs: &Value) -> Option<bool> {
    let ordering = lhs.sql_cmp(rhs)?;
    Some(match op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Ne => ordering != Ordering::Equal,
        CompareOp::Lt => ordering == Ordering::Less,
        CompareOp::Le => ordering != Ordering::Greater,
        CompareOp::Gt => ordering == Ordering::Greater,
        CompareOp::Ge => ordering != Ordering::Less,
    })
}

fn arith(op: ArithOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    if lhs.is_null() || rhs.is_null() {
        return Ok(Value::Null);
    }

    if !lhs.is_numeric() || !rhs.is_numeric() {
        return Err(failed(format!(
            "arithmetic `{}` requires numeric operands",
            op.as_str()
        )));
    }

    match (lhs, rhs) {
        (Value::F64(_), _) | (_, Value::F64(_)) => {
            let (Some(lhs), Some(rhs)) = (lhs.as_f64(), rhs.as_f64()) else {
                return Err(failed("numeric overflow"));
            };
            Ok(Value::F64(match op {
                ArithOp::Add => lhs + rhs,
                ArithOp::Sub => lhs - rhs,
                ArithOp::Mul => lhs * rhs,
                ArithOp::Div => lhs / rhs,
                ArithOp::Mod => lhs % rhs,
            }))
        }
        (Value::Decimal(_), _) | (_, Value::Decimal(_)) => {
            let (Some(lhs), Some(rhs)) = (lhs.as_decimal(), rhs.as_decimal()) else {
                return Err(failed("numeric overflow"));
            };
            let result: Option<Decimal> = match op {
                ArithOp::Add => lhs.checked_add(rhs),
                ArithOp::Sub => lhs.checked_sub(rhs),
                ArithOp::Mul => lhs.checked_mul(rhs),
                ArithOp::Div => lhs.checked_div(rhs),
                ArithOp::Mod => lhs.checked_rem(rhs),
            };
            result
                .map(Value::Decimal)
                .ok_or_else(|| failed("decimal overflow or division by zero"))
        }
        _ => {
            let (Some(l), Some(r)) = (lhs.as_i64(), rhs.as_i64()) else {
                return Err(failed("numeric overflow"));
            };
            let result = match op {
                ArithOp::Add => l.checked_add(r),
                ArithOp::Sub => l.checked_sub(r),
                ArithOp::Mul => l.checked_mul(r),
                ArithOp::Div => l.checked_div(r),
                ArithOp::Mod => l.checked_rem(r),
            }
            .ok_or_else(|| failed("integer overflow or division by zero"))?;

            // Keep 32-bit results 32-bit when both operands were.
            Ok(match (lhs, rhs, i32::try_from(result)) {
                (Value::I32(_), Value::I32(_), Ok(result)) => Value::I32(result),
                _ => Value::I64(result),
            })
        }
    }
}

fn cast_value(value: Value, ty: &DataType) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    let unsupported = || failed(format!("cannot cast {value:?} to {ty:?}"));

    match ty {
        ty if ty.is_string() => Ok(Value::String(match &value {
            Value::String(value) => value.clone(),
            Value::Bool(value) => value.to_string(),
            Value::I32(value) => value.to_string(),
            Value::I64(value) => value.to_string(),
            Value::F64(value) => value.to_string(),
            Value::Decimal(value) => value.to_string(),
            _ => return Err(unsupported()),
        })),
        ty if ty.is_float() => match &value {
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .map(Value::F64)
                .map_err(|_| unsupported()),
            _ => value.as_f64().map(Value::F64).ok_or_else(unsupported),
        },
        ty if ty.is_integer() => match &value {
            Value::String(text) => text
                .trim()
                .parse::<i64>()
                .map(Value::I64)
                .map_err(|_| unsupported()),
            Value::F64(number) => Ok(Value::I64(number.trunc() as i64)),
            _ => value.as_i64().map(Value::I64).ok_or_else(unsupported),
        },
        DataType::Boolean => match &value {
            Value::Bool(_) => Ok(value.clone()),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "y" | "yes" | "true" | "on" | "enabled" => Ok(Value::Bool(true)),
                "0" | "n" | "no" | "false" | "off" | "disabled" => Ok(Value::Bool(false)),
                _ => Ok(Value::Null),
            },
            _ => value
                .as_f64()
                .map(|number| Value::Bool(number != 0.0))
                .ok_or_else(unsupported),
        },
        _ => Err(unsupported()),
    }
}

impl ExprCase {
    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        let otherwise = match self {
            ExprCase::Searched {
                branches,
                otherwise,
            } => {
                for (when, then) in branches {
                    if when.eval_ref(input)? == Some(true) {
                        return then.eval_ref(input);
                    }
                }
                otherwise
            }
            ExprCase::Simple {
                operand,
                branches,
                otherwise,
            } => {
                let operand = operand.eval_ref(input)?;
                for (when, then) in branches {
                    if operand.sql_eq(&when.eval_ref(input)?) == Some(true) {
                        return then.eval_ref(input);
                    }
                }
                otherwise
            }
        };

        match otherwise {
            Some(otherwise) => otherwise.eval_ref(input),
            None => Ok(Value::Null),
        }
    }
}

impl CondLike {
    fn eval_ref(&self, input: &mut impl Input) -> Result<Option<bool>> {
        let value = self.expr.eval_ref(input)?;
        let pattern = self.pattern.eval_ref(input)?;

        if value.is_null() || pattern.is_null() {
            return Ok(None);
        }

        let (Some(value), Some(pattern)) = (value.as_str(), pattern.as_str()) else {
            return Err(failed("LIKE requires string operands"));
        };

        let matched = if self.ignore_case {
            like(&value.to_lowercase(), &pattern.to_lowercase(), self.escape)
        } else {
            like(value, pattern, self.escape)
        };

        Ok(Some(matched != self.negate))
    }
}

/// Matches `%` and `_` wildcards, honouring an optional escape character.
fn like(value: &str, pattern: &str, escape: Option<char>) -> bool {
    enum Token {
        Any,
        One,
        Char(char),
    }

    let mut tokens = vec![];
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            c if Some(c) == escape => match chars.next() {
                Some(escaped) => Token::Char(escaped),
                None => Token::Char(c),
            },
            '%' => Token::Any,
            '_' => Token::One,
            c => Token::Char(c),
        });
    }

    fn matches(value: &[char], tokens: &[Token]) -> bool {
        match tokens.split_first() {
            None => value.is_empty(),
            Some((Token::Any, rest)) => (0..=value.len()).any(|i| matches(&value[i..], rest)),
            Some((Token::One, rest)) => !value.is_empty() && matches(&value[1..], rest),
            Some((Token::Char(c), rest)) => value.first() == Some(c) && matches(&value[1..], rest),
        }
    }

    let value: Vec<char> = value.chars().collect();
    matches(&value, &tokens)
}

impl ExprFunc {
    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        if self.func.is_aggregate() {
            return Err(failed(format!(
                "cannot evaluate aggregate `{}`",
                self.func.sql_name()
            )));
        }

        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            args.push(arg.eval_ref(input)?);
        }

        match self.func {
            Func::Coalesce | Func::Nvl => {
                return Ok(args.into_iter().find(|arg| !arg.is_null()).unwrap_or_default())
            }
            Func::Nvl2 => {
                let [value, if_not_null, if_null] = &args[..] else {
                    return Err(failed("NVL2 takes three arguments"));
                };
                return Ok(if value.is_null() {
                    if_null.clone()
                } else {
                    if_not_null.clone()
                });
            }
            Func::NullIf => {
                let [lhs, rhs] = &args[..] else {
                    return Err(failed("NULLIF takes two arguments"));
                };
                return Ok(if lhs.sql_eq(rhs) == Some(true) {
                    Value::Null
                } else {
                    lhs.clone()
                });
            }
            _ => {}
        }

        if args.iter().any(Value::is_null) {
            return Ok(Value::Null);
        }

        let number = |i: usize| {
            args.get(i)
                .and_then(Value::as_f64)
                .ok_or_else(|| failed(format!("`{}` expects a number", self.func.sql_name())))
        };
        let string = |i: usize| {
            args.get(i)
                .and_then(Value::as_str)
                .ok_or_else(|| failed(format!("`{}` expects a string", self.func.sql_name())))
        };
        let count = |i: usize| number(i).map(|n| n.max(0.0) as usize);

        Ok(match &self.func {
            Func::Abs => match &args[..] {
                [Value::I32(n)] => Value::I32(n.abs()),
                [Value::I64(n)] => Value::I64(n.abs()),
                [Value::Decimal(n)] => Value::Decimal(n.abs()),
                _ => Value::F64(number(0)?.abs()),
            },
            Func::Ceil => match &args[..] {
                [Value::I32(_) | Value::I64(_)] => args[0].clone(),
                _ => Value::F64(number(0)?.ceil()),
            },
            Func::Floor => match &args[..] {
                [Value::I32(_) | Value::I64(_)] => args[0].clone(),
                _ => Value::F64(number(0)?.floor()),
            },
            Func::Round => {
                let scale = if args.len() > 1 { number(1)? } else { 0.0 };
                let factor = 10f64.powf(scale);
                Value::F64((number(0)? * factor).round() / factor)
            }
            Func::Sqrt => Value::F64(number(0)?.sqrt()),
            Func::Exp => Value::F64(number(0)?.exp()),
            Func::Ln => Value::F64(number(0)?.ln()),
            Func::Log => Value::F64(number(1)?.ln() / number(0)?.ln()),
            Func::Power => Value::F64(number(0)?.powf(number(1)?)),
            Func::Sign => Value::I32(match number(0)? {
                n if n > 0.0 => 1,
                n if n < 0.0 => -1,
                _ => 0,
            }),
            Func::Sin => Value::F64(number(0)?.sin()),
            Func::Cos => Value::F64(number(0)?.cos()),
            Func::Tan => Value::F64(number(0)?.tan()),
            Func::Sinh => Value::F64(number(0)?.sinh()),
            Func::Cosh => Value::F64(number(0)?.cosh()),
            Func::Tanh => Value::F64(number(0)?.tanh()),
            Func::Coth => Value::F64(1.0 / number(0)?.tanh()),
            Func::Least | Func::Greatest => {
                let mut best: Option<&Value> = None;
                for arg in &args {
                    let ordering = match best {
                        Some(best) => arg
                            .sql_cmp(best)
                            .ok_or_else(|| failed("arguments are not comparable"))?,
                        None => Ordering::Equal,
                    };
                    let better = match self.func {
                        Func::Least => ordering == Ordering::Less,
                        _ => ordering == Ordering::Greater,
                    };
                    if best.is_none() || better {
                        best = Some(arg);
                    }
                }
                best.cloned().unwrap_or_default()
            }
            Func::Upper => Value::String(string(0)?.to_uppercase()),
            Func::Lower => Value::String(string(0)?.to_lowercase()),
            Func::Trim => Value::String(string(0)?.trim().to_string()),
            Func::Ltrim => Value::String(string(0)?.trim_start().to_string()),
            Func::Rtrim => Value::String(string(0)?.trim_end().to_string()),
            Func::CharLength => Value::I32(string(0)?.chars().count() as i32),
            Func::Concat => {
                let mut out = String::new();
                for i in 0..args.len() {
                    out.push_str(string(i)?);
                }
                Value::String(out)
            }
            Func::Substring => {
                let chars: Vec<char> = string(0)?.chars().collect();
                let from = (number(1)? as i64 - 1).max(0) as usize;
                let len = if args.len() > 2 {
                    count(2)?
                } else {
                    chars.len()
                };
                Value::String(chars.iter().skip(from).take(len).collect())
            }
            Func::Replace => Value::String(string(0)?.replace(string(1)?, string(2)?)),
            Func::Repeat => Value::String(string(0)?.repeat(count(1)?)),
            Func::Lpad | Func::Rpad => {
                let value: Vec<char> = string(0)?.chars().collect();
                let len = count(1)?;
                let fill: Vec<char> = if args.len() > 2 {
                    string(2)?.chars().collect()
                } else {
                    vec![' ']
                };
                Value::String(pad(&value, len, &fill, self.func == Func::Lpad))
            }
            Func::Left => Value::String(string(0)?.chars().take(count(1)?).collect()),
            Func::Right => {
                let chars: Vec<char> = string(0)?.chars().collect();
                let len = count(1)?.min(chars.len());
                Value::String(chars[chars.len() - len..].iter().collect())
            }
            Func::Position => {
                let search = string(0)?;
                let value = string(1)?;
                Value::I32(match value.find(search) {
                    Some(byte) => value[..byte].chars().count() as i32 + 1,
                    None => 0,
                })
            }
            _ => {
                return Err(failed(format!(
                    "cannot evaluate `{}`",
                    self.func.sql_name()
                )))
            }
        })
    }
}

fn pad(value: &[char], len: usize, fill: &[char], left: bool) -> String {
    if value.len() >= len {
        return value[..len].iter().collect();
    }
    if fill.is_empty() {
        return value.iter().collect();
    }

    let padding: String = fill.iter().cycle().take(len - value.len()).collect();
    let value: String = value.iter().collect();

    if left {
        padding + &value
    } else {
        value + &padding
    }
}
