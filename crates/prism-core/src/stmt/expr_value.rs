use super::{DataType, Expr, Value};

/// A value appearing in an expression.
///
/// Values are bound as parameters unless `inline` is set or the render
/// settings inline every value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprValue {
    pub value: Value,

    /// Declared type; defaults to the value's natural type.
    pub ty: DataType,

    /// Render as a literal rather than a placeholder.
    pub inline: bool,

    /// Parameter name used by the named placeholder style.
    pub name: Option<String>,
}

impl ExprValue {
    pub fn new(value: Value) -> ExprValue {
        let ty = value.data_type();
        ExprValue {
            value,
            ty,
            inline: false,
            name: None,
        }
    }
}

impl Expr {
    /// A bind value.
    pub fn val(value: impl Into<Value>) -> Self {
        ExprValue::new(value.into()).into()
    }

    /// A literal rendered inline regardless of the parameter mode.
    pub fn inline(value: impl Into<Value>) -> Self {
        ExprValue {
            inline: true,
            ..ExprValue::new(value.into())
        }
        .into()
    }

    /// A bind value carrying a parameter name.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprValue {
            name: Some(name.into()),
            ..ExprValue::new(value.into())
        }
        .into()
    }

    /// A bind value with an explicit type, e.g. a typed NULL.
    pub fn typed(value: impl Into<Value>, ty: DataType) -> Self {
        ExprValue {
            ty,
            ..ExprValue::new(value.into())
        }
        .into()
    }
}
