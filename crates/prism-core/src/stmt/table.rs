use super::*;
use crate::{schema::TableMeta, Name};

/// A relation appearing in a FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    /// A table or view by name
    Named(TableNamed),

    /// A subquery with an alias
    Derived(TableDerived),

    /// Two relations joined together
    Join(Box<TableJoin>),

    /// `VALUES (..), (..)` table constructor
    Values(TableValues),

    /// An array unnested into rows
    Array(TableArray),

    /// `ROWS FROM (f(..), g(..))`
    RowsFrom(TableRowsFrom),

    /// `LATERAL` derived table
    Lateral(Box<Table>),

    /// The dummy one-row table, rendered per dialect or omitted
    Dual,
}

/// A named table. `fields` holds the known columns, qualified with the alias
/// if there is one and with the table name otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNamed {
    pub name: Name,
    pub alias: Option<Name>,
    columns: Vec<Name>,
    fields: Vec<Name>,
}

impl TableNamed {
    pub fn new(name: impl Into<Name>) -> TableNamed {
        TableNamed {
            name: name.into(),
            alias: None,
            columns: vec![],
            fields: vec![],
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> TableNamed
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(|c| Name::new([c])).collect();
        self.qualify_fields();
        self
    }

    pub fn alias(mut self, alias: impl Into<Name>) -> TableNamed {
        self.alias = Some(alias.into());
        self.qualify_fields();
        self
    }

    /// The name used to qualify this table's columns.
    pub fn reference(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }

    pub fn fields(&self) -> &[Name] {
        &self.fields
    }

    fn qualify_fields(&mut self) {
        let reference = self.reference().clone();
        self.fields = self
            .columns
            .iter()
            .map(|column| reference.append(column))
            .collect();
    }
}

impl Table {
    pub fn named(name: impl Into<Name>) -> Table {
        TableNamed::new(name).into()
    }

    /// A named table whose columns come from metadata.
    pub fn from_meta(meta: &TableMeta) -> Table {
        TableNamed::new(meta.name.clone())
            .columns(meta.columns.iter().map(|column| column.name.clone()))
            .into()
    }

    pub fn derived(select: Select, alias: TableAlias) -> Table {
        TableDerived::new(select, alias).into()
    }

    pub fn values(rows: Vec<Row>, alias: TableAlias) -> Table {
        TableValues::new(rows, alias).into()
    }

    pub fn unnest(elements: Vec<Expr>, alias: TableAlias) -> Table {
        TableArray::new(elements, alias, false).into()
    }

    pub fn unnest_with_ordinality(elements: Vec<Expr>, alias: TableAlias) -> Table {
        TableArray::new(elements, alias, true).into()
    }

    pub fn rows_from(functions: Vec<ExprFunc>, alias: TableAlias) -> Table {
        TableRowsFrom::new(functions, alias).into()
    }

    pub fn lateral(table: impl Into<Table>) -> Table {
        Table::Lateral(Box::new(table.into()))
    }

    /// Columns this relation exposes, qualified with its reference name.
    pub fn fields(&self) -> &[Name] {
        match self {
            Table::Named(table) => table.fields(),
            Table::Derived(table) => &table.fields,
            Table::Join(join) => &join.fields,
            Table::Values(table) => &table.fields,
            Table::Array(table) => &table.fields,
            Table::RowsFrom(table) => &table.fields,
            Table::Lateral(table) => table.fields(),
            Table::Dual => &[],
        }
    }

    /// The name used to qualify columns of this relation, if it has one.
    pub fn reference(&self) -> Option<&Name> {
        match self {
            Table::Named(table) => Some(table.reference()),
            Table::Derived(table) => Some(&table.alias.name),
            Table::Values(table) => Some(&table.alias.name),
            Table::Array(table) => Some(&table.alias.name),
            Table::RowsFrom(table) => Some(&table.alias.name),
            Table::Lateral(table) => table.reference(),
            Table::Join(_) | Table::Dual => None,
        }
    }

    /// Named tables reachable through joins, left to right.
    pub fn named_tables(&self) -> Vec<&TableNamed> {
        match self {
            Table::Named(table) => vec![table],
            Table::Join(join) => {
                let mut tables = join.lhs.named_tables();
                tables.extend(join.rhs.named_tables());
                tables
            }
            Table::Lateral(table) => table.named_tables(),
            _ => vec![],
        }
    }
}

impl From<TableNamed> for Table {
    fn from(value: TableNamed) -> Self {
        Table::Named(value)
    }
}

impl From<TableJoin> for Table {
    fn from(value: TableJoin) -> Self {
        Table::Join(Box::new(value))
    }
}

impl From<&str> for Table {
    fn from(value: &str) -> Self {
        Table::named(value)
    }
}

impl From<Name> for Table {
    fn from(value: Name) -> Self {
        Table::named(value)
    }
}

impl From<&Table> for Table {
    fn from(value: &Table) -> Self {
        value.clone()
    }
}
