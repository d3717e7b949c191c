use super::{DataType, Expr, Statement};
use crate::{schema::TableMeta, Name};

/// `CREATE TABLE [IF NOT EXISTS] name (columns, PRIMARY KEY (..))`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key columns, if any
    pub primary_key: Vec<Name>,

    pub if_not_exists: bool,
}

/// A column definition
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: Name,
    pub ty: DataType,
    pub not_null: bool,
    pub default: Option<Expr>,
}

impl CreateTable {
    pub fn new(name: impl Into<Name>) -> CreateTable {
        CreateTable {
            name: name.into(),
            columns: vec![],
            primary_key: vec![],
            if_not_exists: false,
        }
    }

    /// The statement that creates a table as described by metadata.
    pub fn from_meta(table: &TableMeta) -> CreateTable {
        CreateTable {
            name: table.name.clone(),
            columns: table
                .columns
                .iter()
                .map(|column| ColumnDef {
                    name: Name::from(column.name.as_str()),
                    ty: column.ty.clone(),
                    not_null: !column.nullable,
                    default: None,
                })
                .collect(),
            primary_key: table
                .primary_key
                .iter()
                .flat_map(|key| &key.columns)
                .map(|column| Name::from(column.as_str()))
                .collect(),
            if_not_exists: false,
        }
    }

    pub fn column(mut self, column: ColumnDef) -> CreateTable {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, columns: &[&str]) -> CreateTable {
        self.primary_key = columns.iter().map(|c| Name::from(*c)).collect();
        self
    }

    pub fn if_not_exists(mut self) -> CreateTable {
        self.if_not_exists = true;
        self
    }
}

impl ColumnDef {
    pub fn new(name: &str, ty: DataType) -> ColumnDef {
        ColumnDef {
            name: Name::from(name),
            ty,
            not_null: false,
            default: None,
        }
    }

    pub fn not_null(mut self) -> ColumnDef {
        self.not_null = true;
        self
    }

    pub fn default(mut self, value: impl Into<Expr>) -> ColumnDef {
        self.default = Some(value.into());
        self
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}
