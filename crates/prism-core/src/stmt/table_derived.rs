use super::{Expr, ExprFunc, Row, Select, Table};
use crate::Name;

/// `alias` or `alias(c1, c2, ..)`
#[derive(Debug, Clone, PartialEq)]
pub struct TableAlias {
    pub name: Name,
    pub columns: Vec<Name>,
}

/// A subquery in FROM position.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDerived {
    pub select: Box<Select>,
    pub alias: TableAlias,
    pub(super) fields: Vec<Name>,
}

/// `(VALUES (..), (..)) AS alias(c1, ..)`
#[derive(Debug, Clone, PartialEq)]
pub struct TableValues {
    pub rows: Vec<Row>,
    pub alias: TableAlias,
    pub(super) fields: Vec<Name>,
}

/// `UNNEST(array) [WITH ORDINALITY] AS alias(value [, ordinality])`
#[derive(Debug, Clone, PartialEq)]
pub struct TableArray {
    pub elements: Vec<Expr>,
    pub alias: TableAlias,
    pub with_ordinality: bool,
    pub(super) fields: Vec<Name>,
}

/// `ROWS FROM (f(..), ..) AS alias(c1, ..)`
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowsFrom {
    pub functions: Vec<ExprFunc>,
    pub alias: TableAlias,
    pub(super) fields: Vec<Name>,
}

impl TableAlias {
    pub fn new(name: impl Into<Name>) -> TableAlias {
        TableAlias {
            name: name.into(),
            columns: vec![],
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> TableAlias
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(|c| Name::new([c])).collect();
        self
    }

    fn qualify(&self, columns: &[Name]) -> Vec<Name> {
        columns
            .iter()
            .map(|column| self.name.append(column))
            .collect()
    }
}

impl TableDerived {
    pub fn new(select: Select, alias: TableAlias) -> TableDerived {
        let fields = if alias.columns.is_empty() {
            alias.qualify(&select.field_names())
        } else {
            alias.qualify(&alias.columns)
        };

        TableDerived {
            select: Box::new(select),
            alias,
            fields,
        }
    }
}

impl TableValues {
    pub fn new(rows: Vec<Row>, alias: TableAlias) -> TableValues {
        let fields = alias.qualify(&alias.columns);
        TableValues {
            rows,
            alias,
            fields,
        }
    }
}

impl TableArray {
    pub fn new(elements: Vec<Expr>, alias: TableAlias, with_ordinality: bool) -> TableArray {
        let mut array = TableArray {
            elements,
            alias,
            with_ordinality,
            fields: vec![],
        };
        array.fields = array.alias.qualify(&array.column_names());
        array
    }

    /// The value column, then the ordinality column if requested. Missing
    /// names default to `value` and `ordinality`.
    pub fn column_names(&self) -> Vec<Name> {
        let mut columns = self.alias.columns.clone();

        if columns.is_empty() {
            columns.push(Name::from("value"));
        }

        if self.with_ordinality && columns.len() < 2 {
            columns.push(Name::from("ordinality"));
        }

        columns
    }
}

impl TableRowsFrom {
    pub fn new(functions: Vec<ExprFunc>, alias: TableAlias) -> TableRowsFrom {
        let fields = alias.qualify(&alias.columns);
        TableRowsFrom {
            functions,
            alias,
            fields,
        }
    }
}

impl From<TableDerived> for Table {
    fn from(value: TableDerived) -> Self {
        Table::Derived(value)
    }
}

impl From<TableValues> for Table {
    fn from(value: TableValues) -> Self {
        Table::Values(value)
    }
}

impl From<TableArray> for Table {
    fn from(value: TableArray) -> Self {
        Table::Array(value)
    }
}

impl From<TableRowsFrom> for Table {
    fn from(value: TableRowsFrom) -> Self {
        Table::RowsFrom(value)
    }
}
