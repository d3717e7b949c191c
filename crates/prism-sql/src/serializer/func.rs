use super::{flavor, Comma, Delimited, Formatter, Ident, Params, ToSql};

use prism_core::{
    stmt::{CaseBuilder, Expr, ExprFunc, Func},
    Error, Family, Result,
};

impl ToSql for &ExprFunc {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let dialect = f.dialect();
        let family = dialect.family();

        if self.filter.is_some() && !f.supports(flavor::AGGREGATE_FILTER) {
            if let Some(expanded) = self.expand_filter() {
                return expanded.to_sql(f);
            }
        }

        match &self.func {
            Func::Ceil if matches!(family, Family::SqlServer | Family::Sybase) => {
                call(f, "CEILING", self)
            }
            Func::Ln if matches!(family, Family::SqlServer | Family::Sybase) => {
                call(f, "LOG", self)
            }
            Func::Log => {
                let [base, x] = &self.args[..] else {
                    return Err(arity(self));
                };

                if f.supports(flavor::LOG_WITH_BASE) {
                    call(f, "LOG", self)
                } else if family == Family::SqlServer {
                    fmt!(f, "LOG(" x ", " base ")");
                    Ok(())
                } else {
                    expand(f, self.expand_log())
                }
            }
            Func::Power if f.supports(flavor::NO_POWER) => expand(f, self.expand_power()),
            Func::Sinh | Func::Cosh | Func::Tanh if f.supports(flavor::HYPERBOLIC) => {
                call(f, &upper(self), self)
            }
            Func::Sinh | Func::Cosh | Func::Tanh | Func::Coth => {
                expand(f, self.expand_hyperbolic())
            }
            Func::Least | Func::Greatest => least_greatest(f, self),
            Func::Trim if f.supports(flavor::NO_TRIM) => {
                let [s] = &self.args[..] else {
                    return Err(arity(self));
                };
                fmt!(f, "LTRIM(RTRIM(" s "))");
                Ok(())
            }
            Func::CharLength => {
                let name = match family {
                    Family::SqlServer | Family::Sybase => "LEN",
                    Family::Oracle | Family::Sqlite | Family::Derby | Family::Db2 => "LENGTH",
                    _ => "CHAR_LENGTH",
                };
                call(f, name, self)
            }
            Func::Concat => concat(f, self),
            Func::Substring => substring(f, self),
            Func::Repeat => repeat(f, self),
            Func::Lpad | Func::Rpad => pad(f, self),
            Func::Left | Func::Right => left_right(f, self),
            Func::Position => position(f, self),
            Func::Nvl => {
                let name = match family {
                    Family::Oracle | Family::Db2 => "NVL",
                    Family::SqlServer | Family::Sybase => "ISNULL",
                    Family::MySql | Family::MariaDb | Family::Sqlite => "IFNULL",
                    _ => "COALESCE",
                };
                call(f, name, self)
            }
            Func::Nvl2 if f.supports(flavor::NVL2) => call(f, "NVL2", self),
            Func::Nvl2 => {
                let [value, not_null, null] = &self.args[..] else {
                    return Err(arity(self));
                };

                CaseBuilder::new()
                    .when(value.clone().is_not_null(), not_null.clone())
                    .otherwise(null.clone())
                    .to_sql(f)
            }
            Func::CurrentDate if matches!(family, Family::SqlServer | Family::Sybase) => {
                fmt!(f, "CAST(CURRENT_TIMESTAMP AS DATE)");
                Ok(())
            }
            Func::CurrentDate | Func::CurrentTimestamp => {
                fmt!(f, upper(self));
                Ok(())
            }
            Func::Random => {
                let random = match family {
                    Family::Oracle => "DBMS_RANDOM.VALUE",
                    Family::MySql
                    | Family::MariaDb
                    | Family::SqlServer
                    | Family::Sybase
                    | Family::H2
                    | Family::Hsqldb
                    | Family::Db2
                    | Family::Firebird
                    | Family::Hana => "RAND()",
                    _ => "RANDOM()",
                };
                fmt!(f, random);
                Ok(())
            }
            Func::Custom(name) => {
                fmt!(f, Ident(name));
                arguments(f, self)
            }
            _ => call(f, &upper(self), self),
        }
    }
}

fn upper(func: &ExprFunc) -> String {
    func.func.sql_name().to_uppercase()
}

fn arity(func: &ExprFunc) -> Error {
    Error::invalid_statement(format!(
        "wrong number of arguments to {}: {}",
        func.func.sql_name(),
        func.args.len()
    ))
}

/// `NAME(args)`, with the aggregate modifiers.
fn call<P: Params>(f: &mut Formatter<'_, P>, name: &str, func: &ExprFunc) -> Result<()> {
    fmt!(f, name);
    arguments(f, func)
}

fn arguments<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let distinct = if func.distinct { "DISTINCT " } else { "" };
    fmt!(f, "(" distinct Comma(&func.args) ")");

    if let Some(filter) = func.filter.as_deref() {
        fmt!(f, " FILTER (WHERE " filter ")");
    }

    Ok(())
}

fn expand<P: Params>(f: &mut Formatter<'_, P>, expr: Option<Expr>) -> Result<()> {
    match expr {
        Some(expr) => expr.to_sql(f),
        None => Err(Error::invalid_statement("wrong number of function arguments")),
    }
}

fn least_greatest<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let least = func.func == Func::Least;

    match &func.args[..] {
        [] => Err(arity(func)),
        [only] => only.to_sql(f),
        _ if f.supports(flavor::LEAST_GREATEST) => call(f, &upper(func), func),
        _ => match f.dialect().family() {
            Family::Sqlite => call(f, if least { "MIN" } else { "MAX" }, func),
            Family::Firebird => call(f, if least { "MINVALUE" } else { "MAXVALUE" }, func),
            _ => expand(f, func.expand_least_greatest()),
        },
    }
}

fn concat<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    match f.dialect().family() {
        _ if func.args.len() == 1 => func.args[0].to_sql(f),
        Family::MySql | Family::MariaDb | Family::SqlServer => call(f, "CONCAT", func),
        Family::Sybase => {
            fmt!(f, "(" Delimited(&func.args, " + ") ")");
            Ok(())
        }
        _ => {
            fmt!(f, "(" Delimited(&func.args, " || ") ")");
            Ok(())
        }
    }
}

fn substring<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let (s, from, length) = match &func.args[..] {
        [s, from] => (s, from, None),
        [s, from, length] => (s, from, Some(length)),
        _ => return Err(arity(func)),
    };

    match f.dialect().family() {
        Family::Oracle | Family::Sqlite | Family::Db2 | Family::Derby => {
            call(f, "SUBSTR", func)?;
        }
        Family::SqlServer | Family::Sybase => match length {
            Some(length) => fmt!(f, "SUBSTRING(" s ", " from ", " length ")"),
            None => fmt!(f, "SUBSTRING(" s ", " from ", LEN(" s "))"),
        },
        Family::Postgres | Family::YugabyteDb | Family::Redshift | Family::Firebird => {
            fmt!(f, "SUBSTRING(" s " FROM " from);
            if let Some(length) = length {
                fmt!(f, " FOR " length);
            }
            fmt!(f, ")");
        }
        _ => call(f, "SUBSTRING", func)?,
    }

    Ok(())
}

fn repeat<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let [s, n] = &func.args[..] else {
        return Err(arity(func));
    };

    match f.dialect().family() {
        Family::SqlServer | Family::Sybase => call(f, "REPLICATE", func)?,
        Family::Oracle | Family::Firebird => {
            // RPAD(s, LENGTH(s) * n, s)
            let length = Expr::mul(Expr::func(Func::CharLength, [s]), n);
            Expr::func(Func::Rpad, [s.clone(), length, s.clone()]).to_sql(f)?;
        }
        Family::Sqlite => fmt!(f, "REPLACE(HEX(ZEROBLOB(" n ")), '00', " s ")"),
        Family::Derby => return Err(f.unsupported("REPEAT")),
        _ => call(f, "REPEAT", func)?,
    }

    Ok(())
}

fn pad<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let left = func.func == Func::Lpad;
    let space = Expr::inline(" ");
    let (s, n, c) = match &func.args[..] {
        [s, n] => (s, n, &space),
        [s, n, c] => (s, n, c),
        _ => return Err(arity(func)),
    };

    match f.dialect().family() {
        Family::SqlServer | Family::Sybase => {
            if left {
                fmt!(f, "RIGHT(REPLICATE(" c ", " n ") + " s ", " n ")");
            } else {
                fmt!(f, "LEFT(" s " + REPLICATE(" c ", " n "), " n ")");
            }
        }
        Family::Sqlite if left => {
            zeroblob_padding(f, s, n, c)?;
            fmt!(f, " || " s);
        }
        Family::Sqlite => {
            fmt!(f, s " || ");
            zeroblob_padding(f, s, n, c)?;
        }
        Family::Derby => return Err(f.unsupported("LPAD and RPAD")),
        _ => {
            let name = if left { "LPAD" } else { "RPAD" };
            fmt!(f, name "(" s ", " n ", " c ")");
        }
    }

    Ok(())
}

/// The pad character repeated up to the missing length, built from the hex
/// form of a zero blob.
fn zeroblob_padding<P: Params>(
    f: &mut Formatter<'_, P>,
    s: &Expr,
    n: &Expr,
    c: &Expr,
) -> Result<()> {
    fmt!(f, "SUBSTR(REPLACE(HEX(ZEROBLOB(" n ")), '00', " c "), 1, " n " - LENGTH(" s "))");
    Ok(())
}

fn left_right<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let left = func.func == Func::Left;
    let [s, n] = &func.args[..] else {
        return Err(arity(func));
    };

    match f.dialect().family() {
        Family::Oracle | Family::Sqlite if left => fmt!(f, "SUBSTR(" s ", 1, " n ")"),
        Family::Oracle | Family::Sqlite => fmt!(f, "SUBSTR(" s ", -(" n "))"),
        Family::Derby if left => fmt!(f, "SUBSTR(" s ", 1, " n ")"),
        Family::Derby => fmt!(f, "SUBSTR(" s ", LENGTH(" s ") - " n " + 1)"),
        _ => call(f, if left { "LEFT" } else { "RIGHT" }, func)?,
    }

    Ok(())
}

fn position<P: Params>(f: &mut Formatter<'_, P>, func: &ExprFunc) -> Result<()> {
    let [search, s] = &func.args[..] else {
        return Err(arity(func));
    };

    match f.dialect().family() {
        Family::Oracle | Family::Sqlite => fmt!(f, "INSTR(" s ", " search ")"),
        Family::SqlServer | Family::Sybase => fmt!(f, "CHARINDEX(" search ", " s ")"),
        Family::Derby | Family::Db2 => fmt!(f, "LOCATE(" search ", " s ")"),
        _ => fmt!(f, "POSITION(" search " IN " s ")"),
    }

    Ok(())
}
