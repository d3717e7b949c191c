use super::{flavor, Formatter, ToSql};

use prism_core::{
    stmt::{DataType, Value},
    Family, Result,
};
use std::fmt::Write;

/// Receives bind values as the serializer encounters them.
pub trait Params {
    fn push(&mut self, param: TypedValue) -> Placeholder;
}

/// A bind value with the type it is declared as.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: DataType,

    /// Set for values created with a parameter name
    pub name: Option<String>,
}

/// The 1-based position of a bind value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A placeholder in the named style. Unnamed values are called `p<n>`.
pub(super) struct Named<'a> {
    pub(super) placeholder: Placeholder,
    pub(super) name: Option<&'a str>,
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, param: TypedValue) -> Placeholder {
        self.push(param);
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let dialect = f.dialect();

        if f.supports(flavor::POSTGRES_LIKE) {
            write!(f.dst, "${}", self.0)?;
        } else {
            match dialect.family() {
                Family::Sqlite => write!(f.dst, "?{}", self.0)?,
                Family::Oracle => write!(f.dst, ":{}", self.0)?,
                Family::SqlServer => write!(f.dst, "@p{}", self.0)?,
                _ => f.dst.push('?'),
            }
        }

        Ok(())
    }
}

impl ToSql for Named<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let prefix = if f.supports(flavor::POSTGRES_LIKE) {
            '$'
        } else {
            match f.dialect().family() {
                Family::SqlServer | Family::Sybase => '@',
                _ => ':',
            }
        };

        f.dst.push(prefix);
        match self.name {
            Some(name) => f.dst.push_str(name),
            None => write!(f.dst, "p{}", self.placeholder.0)?,
        }

        Ok(())
    }
}
