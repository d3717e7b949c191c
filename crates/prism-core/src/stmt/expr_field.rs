use super::{DataType, Expr};
use crate::Name;

/// A column reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub name: Name,
    pub ty: DataType,
}

impl Expr {
    pub fn field(name: impl Into<Name>) -> Self {
        ExprField {
            name: name.into(),
            ty: DataType::Unknown,
        }
        .into()
    }

    pub fn typed_field(name: impl Into<Name>, ty: DataType) -> Self {
        ExprField {
            name: name.into(),
            ty,
        }
        .into()
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Expr::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Expr::Field(value)
    }
}
