use crate::stmt::DataType;

#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub name: String,
    pub ty: DataType,
    pub nullable: bool,

    /// True when the column has a server-side default.
    pub has_default: bool,
}

impl ColumnMeta {
    pub fn new(name: &str, ty: DataType) -> ColumnMeta {
        ColumnMeta {
            name: name.to_string(),
            ty,
            nullable: true,
            has_default: false,
        }
    }

    pub fn not_null(mut self) -> ColumnMeta {
        self.nullable = false;
        self
    }

    pub fn with_default(mut self) -> ColumnMeta {
        self.has_default = true;
        self
    }
}
