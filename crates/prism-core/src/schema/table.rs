use super::{ColumnMeta, ForeignKey, Key};
use crate::{stmt::DataType, Name};

/// Metadata describing a database table
#[derive(Debug, Clone)]
pub struct TableMeta {
    /// Name of the table, qualified with its schema once registered.
    pub name: Name,

    /// The table's columns, in declaration order.
    pub columns: Vec<ColumnMeta>,

    pub primary_key: Option<Key>,

    pub unique_keys: Vec<Key>,

    pub foreign_keys: Vec<ForeignKey>,
}

impl TableMeta {
    pub fn new(name: impl Into<Name>) -> TableMeta {
        TableMeta {
            name: name.into(),
            columns: vec![],
            primary_key: None,
            unique_keys: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn column(mut self, name: &str, ty: DataType) -> TableMeta {
        self.columns.push(ColumnMeta::new(name, ty));
        self
    }

    pub fn column_meta(mut self, column: ColumnMeta) -> TableMeta {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, name: &str, columns: &[&str]) -> TableMeta {
        self.primary_key = Some(Key::new(name, columns));
        self
    }

    pub fn unique_key(mut self, name: &str, columns: &[&str]) -> TableMeta {
        self.unique_keys.push(Key::new(name, columns));
        self
    }

    pub fn foreign_key(mut self, key: ForeignKey) -> TableMeta {
        self.foreign_keys.push(key);
        self
    }

    pub fn find_column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// The key identifying a row: the primary key if there is one, else the
    /// first unique key.
    pub fn identifying_key(&self) -> Option<&Key> {
        self.primary_key.as_ref().or(self.unique_keys.first())
    }

    /// Foreign keys of this table that reference `other`.
    pub fn references<'a>(&'a self, other: &'a TableMeta) -> impl Iterator<Item = &'a ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.references.eq_unqualified(&other.name))
    }
}
