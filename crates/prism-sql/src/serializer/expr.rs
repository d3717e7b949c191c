use super::{flavor, Comma, Formatter, Ident, Params, Qualified, ToSql};

use prism_core::{
    stmt::{ArithOp, BitOp, Expr, ExprArith, ExprBit, ExprCase, ExprSequence, SequenceOp},
    Dialect, Family, Result,
};

/// An operand of an arithmetic or bitwise operator, parenthesized when it is
/// itself a binary operation.
#[derive(Clone, Copy)]
struct Operand<'a>(&'a Expr);

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Expr::Value(value) => value.to_sql(f)?,
            Expr::Field(field) => fmt!(f, Ident(&field.name)),
            Expr::Asterisk(None) => fmt!(f, "*"),
            Expr::Asterisk(Some(table)) => fmt!(f, Ident(table) ".*"),
            Expr::Arith(expr) => expr.to_sql(f)?,
            Expr::Neg(expr) => match &**expr {
                Expr::Field(_) => fmt!(f, "-" expr),
                _ => fmt!(f, "-(" expr ")"),
            },
            Expr::Bit(expr) => expr.to_sql(f)?,
            Expr::Func(expr) => expr.to_sql(f)?,
            Expr::Case(expr) => expr.to_sql(f)?,
            Expr::Cast(expr) => expr.to_sql(f)?,
            Expr::Condition(condition) => {
                if f.supports(flavor::BOOLEAN_TYPE) {
                    fmt!(f, "(" condition ")");
                } else {
                    condition
                        .to_case_expr(Expr::inline(true), Expr::inline(false))
                        .to_sql(f)?;
                }
            }
            Expr::Subquery(select) => {
                fmt!(f, "(");
                f.subquery(|f| select.to_sql(f))?;
                fmt!(f, ")");
            }
            Expr::Sequence(expr) => expr.to_sql(f)?,
            Expr::Default => fmt!(f, "DEFAULT"),
        }

        Ok(())
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let compound = match self.0 {
            Expr::Arith(_) => true,
            Expr::Bit(bit) => bit.rhs.is_some(),
            _ => false,
        };

        if compound {
            fmt!(f, "(" self.0 ")");
        } else {
            self.0.to_sql(f)?;
        }

        Ok(())
    }
}

impl ToSql for &ExprArith {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let lhs = Operand(&self.lhs);
        let rhs = Operand(&self.rhs);

        match self.op {
            ArithOp::Mod
                if matches!(
                    f.dialect().family(),
                    Family::Oracle | Family::Db2 | Family::Firebird | Family::Derby
                ) =>
            {
                fmt!(f, "MOD(" lhs ", " rhs ")");
            }
            op => fmt!(f, lhs " " op.as_str() " " rhs),
        }

        Ok(())
    }
}

impl ToSql for &ExprBit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let dialect = f.dialect();
        let lhs = Operand(&self.lhs);

        if matches!(self.op, BitOp::Nand | BitOp::Nor | BitOp::Xnor) {
            return expanded(self, f);
        }

        match dialect.family() {
            Family::Derby => return Err(f.unsupported("bitwise operators")),
            Family::Oracle => match (self.op, self.rhs.as_deref()) {
                (BitOp::And, Some(rhs)) => fmt!(f, "BITAND(" lhs ", " Operand(rhs) ")"),
                (BitOp::Or, Some(rhs)) => {
                    // a | b = a + b - (a & b)
                    let rhs = Operand(rhs);
                    fmt!(f, "(" lhs " + " rhs " - BITAND(" lhs ", " rhs "))");
                }
                _ => return expanded(self, f),
            },
            family => {
                if let Some(functions) = bit_functions(family) {
                    let Some(name) = functions(self.op) else {
                        return expanded(self, f);
                    };

                    let args = Comma(std::iter::once(&*self.lhs).chain(self.rhs.as_deref()));
                    fmt!(f, name "(" args ")");
                } else {
                    let Some(op) = bit_operator(dialect, self.op) else {
                        return expanded(self, f);
                    };

                    match self.rhs.as_deref() {
                        Some(rhs) => fmt!(f, lhs " " op " " Operand(rhs)),
                        None => fmt!(f, op lhs),
                    }
                }
            }
        }

        Ok(())
    }
}

/// The operator in terms of `&`, `|` and arithmetic.
fn expanded<P: Params>(bit: &ExprBit, f: &mut Formatter<'_, P>) -> Result<()> {
    let expr = bit
        .expand()
        .ok_or_else(|| f.unsupported("bitwise operators"))?;
    expr.to_sql(f)
}

type BitFunctions = fn(BitOp) -> Option<&'static str>;

/// Families that spell bitwise operators as functions.
fn bit_functions(family: Family) -> Option<BitFunctions> {
    let functions: BitFunctions = match family {
        Family::H2 | Family::Hsqldb | Family::Db2 | Family::Hana | Family::Snowflake => |op| match op {
            BitOp::And => Some("BITAND"),
            BitOp::Or => Some("BITOR"),
            BitOp::Xor => Some("BITXOR"),
            BitOp::Not => Some("BITNOT"),
            _ => None,
        },
        Family::Firebird => |op| match op {
            BitOp::And => Some("BIN_AND"),
            BitOp::Or => Some("BIN_OR"),
            BitOp::Xor => Some("BIN_XOR"),
            BitOp::Not => Some("BIN_NOT"),
            BitOp::Shl => Some("BIN_SHL"),
            BitOp::Shr => Some("BIN_SHR"),
            _ => None,
        },
        Family::Trino => |op| match op {
            BitOp::And => Some("bitwise_and"),
            BitOp::Or => Some("bitwise_or"),
            BitOp::Xor => Some("bitwise_xor"),
            BitOp::Not => Some("bitwise_not"),
            BitOp::Shl => Some("bitwise_left_shift"),
            BitOp::Shr => Some("bitwise_right_shift"),
            _ => None,
        },
        Family::ClickHouse => |op| match op {
            BitOp::And => Some("bitAnd"),
            BitOp::Or => Some("bitOr"),
            BitOp::Xor => Some("bitXor"),
            BitOp::Not => Some("bitNot"),
            BitOp::Shl => Some("bitShiftLeft"),
            BitOp::Shr => Some("bitShiftRight"),
            _ => None,
        },
        _ => return None,
    };

    Some(functions)
}

fn bit_operator(dialect: Dialect, op: BitOp) -> Option<&'static str> {
    let family = dialect.family();

    match op {
        BitOp::And => Some("&"),
        BitOp::Or => Some("|"),
        BitOp::Not => Some("~"),
        BitOp::Xor => match family {
            Family::Postgres | Family::YugabyteDb | Family::Redshift => Some("#"),
            Family::Sqlite | Family::DuckDb => None,
            _ => Some("^"),
        },
        BitOp::Shl | BitOp::Shr if matches!(family, Family::SqlServer | Family::Sybase) => None,
        BitOp::Shl => Some("<<"),
        BitOp::Shr => Some(">>"),
        BitOp::Nand | BitOp::Nor | BitOp::Xnor => None,
    }
}

impl ToSql for &ExprCase {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let otherwise = match self {
            ExprCase::Searched {
                branches,
                otherwise,
            } => {
                fmt!(f, "CASE");
                for (condition, then) in branches {
                    fmt!(f, " WHEN " condition " THEN " then);
                }
                otherwise
            }
            ExprCase::Simple {
                operand,
                branches,
                otherwise,
            } => {
                fmt!(f, "CASE " operand);
                for (value, then) in branches {
                    fmt!(f, " WHEN " value " THEN " then);
                }
                otherwise
            }
        };

        if let Some(otherwise) = otherwise.as_deref() {
            fmt!(f, " ELSE " otherwise);
        }

        fmt!(f, " END");
        Ok(())
    }
}

impl ToSql for &ExprSequence {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let dialect = f.dialect();
        let name = Qualified(&self.name);

        if !f.supports(flavor::SEQUENCES) {
            return Err(f.unsupported("sequences"));
        }

        if f.supports(flavor::POSTGRES_LIKE) {
            // The sequence name is passed as a string, so render it on its own
            // and quote the result.
            let function = match self.op {
                SequenceOp::NextVal => "nextval(",
                SequenceOp::CurrVal => "currval(",
            };
            let quoted = f.nested(|f| Qualified(&self.name).to_sql(f))?;

            fmt!(f, function);
            super::value::string(f, &quoted);
            fmt!(f, ")");
            return Ok(());
        }

        match (dialect.family(), self.op) {
            (Family::Oracle, SequenceOp::NextVal) => fmt!(f, name ".nextval"),
            (Family::Oracle, SequenceOp::CurrVal) => fmt!(f, name ".currval"),
            (Family::Firebird, SequenceOp::NextVal) if dialect == Dialect::Firebird2_5 => {
                fmt!(f, "GEN_ID(" name ", 1)")
            }
            (Family::Firebird, SequenceOp::CurrVal) => fmt!(f, "GEN_ID(" name ", 0)"),
            (_, SequenceOp::NextVal) => fmt!(f, "NEXT VALUE FOR " name),
            (Family::H2 | Family::Hsqldb, SequenceOp::CurrVal) => {
                fmt!(f, "CURRENT VALUE FOR " name)
            }
            (Family::Db2 | Family::MariaDb, SequenceOp::CurrVal) => {
                fmt!(f, "PREVIOUS VALUE FOR " name)
            }
            (_, SequenceOp::CurrVal) => return Err(f.unsupported("CURRVAL")),
        }

        Ok(())
    }
}
