use super::{
    flavor,
    params::Named,
    ty::{CastTy, Ty},
    Comma, Formatter, Params, ToSql, TypedValue,
};
use crate::ParamType;

use prism_core::{
    stmt::{DataType, ExprValue, Value},
    Family, Result,
};
use std::fmt::Write;

/// A value rendered as a SQL literal.
pub(super) struct Literal<'a> {
    pub(super) value: &'a Value,
    pub(super) ty: &'a DataType,
}

impl ToSql for &ExprValue {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.inline || self.inline || f.settings().param_type == ParamType::Inlined {
            return Literal {
                value: &self.value,
                ty: &self.ty,
            }
            .to_sql(f);
        }

        let placeholder = f.params.push(TypedValue {
            value: self.value.clone(),
            ty: self.ty.clone(),
            name: self.name.clone(),
        });

        match f.settings().param_type {
            ParamType::Named => {
                let named = Named {
                    placeholder,
                    name: self.name.as_deref(),
                };
                fmt!(f, named);
            }
            _ => fmt!(f, placeholder),
        }

        Ok(())
    }
}

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.value {
            Value::Null => {
                if f.supports(flavor::TYPED_NULLS) && !self.ty.is_unknown() {
                    fmt!(f, "CAST(NULL AS " CastTy(self.ty) ")");
                } else {
                    fmt!(f, "NULL");
                }
            }
            Value::Bool(value) => {
                let literal = match (f.supports(flavor::NO_BOOLEAN_LITERALS), value) {
                    (true, true) => "1",
                    (true, false) => "0",
                    (false, true) => "TRUE",
                    (false, false) => "FALSE",
                };
                fmt!(f, literal);
            }
            Value::I32(value) => write!(f.dst, "{value}")?,
            Value::I64(value) => write!(f.dst, "{value}")?,
            Value::F64(value) => float(f, *value)?,
            Value::Decimal(value) => write!(f.dst, "{value}")?,
            Value::String(value) => string(f, value),
            Value::Bytes(value) => bytes(f, value)?,
            Value::Date(value) => {
                temporal(f, &value.to_string(), "DATE", &DataType::Date)?;
            }
            Value::Time(value) => {
                if f.dialect().family() == Family::Oracle {
                    return Err(f.unsupported("TIME literals"));
                }
                temporal(f, &value.to_string(), "TIME", &DataType::Time)?;
            }
            Value::Timestamp(value) => {
                let function = match f.dialect().family() {
                    Family::Sqlite => "DATETIME",
                    _ => "TIMESTAMP",
                };
                temporal(f, &value.to_string(), function, &DataType::Timestamp)?;
            }
            Value::Uuid(value) => {
                let text = value.to_string();

                match f.dialect().family() {
                    Family::Postgres
                    | Family::YugabyteDb
                    | Family::H2
                    | Family::Hsqldb
                    | Family::DuckDb
                    | Family::SqlServer => {
                        fmt!(f, "CAST(");
                        string(f, &text);
                        fmt!(f, " AS " Ty(&DataType::Uuid) ")");
                    }
                    _ => string(f, &text),
                }
            }
            Value::Array(values) => {
                if !f.supports(flavor::ARRAY_LITERALS) {
                    return Err(f.unsupported("array literals"));
                }

                let element_ty = match self.ty {
                    DataType::Array(element) => &**element,
                    _ => &DataType::Unknown,
                };
                let elements = Comma(values.iter().map(|value| Literal {
                    value,
                    ty: element_ty,
                }));

                fmt!(f, "ARRAY[" elements "]");
            }
        }

        Ok(())
    }
}

fn float<P: Params>(f: &mut Formatter<'_, P>, value: f64) -> Result<()> {
    if value.is_finite() {
        // `{:?}` keeps a decimal point or exponent on whole numbers
        write!(f.dst, "{value:?}")?;
        return Ok(());
    }

    let (text, oracle) = if value.is_nan() {
        ("NaN", "BINARY_DOUBLE_NAN")
    } else if value > 0.0 {
        ("Infinity", "BINARY_DOUBLE_INFINITY")
    } else {
        ("-Infinity", "-BINARY_DOUBLE_INFINITY")
    };

    match f.dialect().family() {
        Family::Postgres
        | Family::YugabyteDb
        | Family::Redshift
        | Family::H2
        | Family::Hsqldb
        | Family::DuckDb => {
            fmt!(f, "CAST('" text "' AS " CastTy(&DataType::Double) ")");
        }
        Family::Oracle => fmt!(f, oracle),
        Family::Sqlite if !value.is_nan() => {
            fmt!(f, if value > 0.0 { "9e999" } else { "-9e999" });
        }
        _ => return Err(f.unsupported("non-finite floating point literals")),
    }

    Ok(())
}

/// A string literal, escaping quotes by doubling them.
pub(super) fn string<P: Params>(f: &mut Formatter<'_, P>, value: &str) {
    let backslashes = f.supports(flavor::BACKSLASH_ESCAPES);

    f.dst.push('\'');
    for c in value.chars() {
        match c {
            '\'' => f.dst.push_str("''"),
            '\\' if backslashes => f.dst.push_str("\\\\"),
            c => f.dst.push(c),
        }
    }
    f.dst.push('\'');
}

fn bytes<P: Params>(f: &mut Formatter<'_, P>, value: &[u8]) -> Result<()> {
    let mut hex = String::with_capacity(value.len() * 2);
    for byte in value {
        write!(hex, "{byte:02X}")?;
    }
    let hex = hex.as_str();

    match f.dialect().family() {
        Family::SqlServer | Family::Sybase => fmt!(f, "0x" hex),
        Family::Oracle => fmt!(f, "HEXTORAW('" hex "')"),
        Family::Postgres | Family::YugabyteDb | Family::Redshift => {
            fmt!(f, "decode('" hex "', 'hex')")
        }
        _ => fmt!(f, "X'" hex "'"),
    }

    Ok(())
}

/// `DATE '..'`, `DATE('..')` or `CAST('..' AS DATE)` depending on the
/// family.
fn temporal<P: Params>(
    f: &mut Formatter<'_, P>,
    text: &str,
    keyword: &str,
    ty: &DataType,
) -> Result<()> {
    match f.dialect().family() {
        Family::SqlServer | Family::Sybase => {
            fmt!(f, "CAST(");
            string(f, text);
            fmt!(f, " AS " CastTy(ty) ")");
        }
        Family::Sqlite | Family::Derby => {
            fmt!(f, keyword "(");
            string(f, text);
            fmt!(f, ")");
        }
        _ => {
            fmt!(f, keyword " ");
            string(f, text);
        }
    }

    Ok(())
}
