use super::{condition, flavor, Comma, Formatter, Params, Qualified, ToSql, Unqualified};

use prism_core::{
    stmt::{
        Expr, Row, Select, Table, TableAlias, TableArray, TableDerived, TableNamed, TableRowsFrom,
        TableValues, Value,
    },
    Dialect, Family, Name, Result,
};

impl ToSql for &Table {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Table::Named(table) => table.to_sql(f),
            Table::Derived(table) => table.to_sql(f),
            Table::Join(join) => join.to_sql(f),
            Table::Values(table) => table.to_sql(f),
            Table::Array(table) => table.to_sql(f),
            Table::RowsFrom(table) => table.to_sql(f),
            Table::Lateral(table) => {
                if !f.supports(flavor::LATERAL) {
                    return Err(f.unsupported("LATERAL"));
                }
                fmt!(f, "LATERAL " table);
                Ok(())
            }
            Table::Dual => {
                fmt!(f, dual(f.dialect()));
                Ok(())
            }
        }
    }
}

impl ToSql for &TableNamed {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !f.declare_tables {
            fmt!(f, Qualified(self.reference()));
            return Ok(());
        }

        fmt!(f, Qualified(&self.name));

        if let Some(name) = &self.alias {
            alias(f, name, &[])?;
        }

        Ok(())
    }
}

impl ToSql for &TableDerived {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let columns = &self.alias.columns;

        if columns.is_empty() || f.supports(flavor::DERIVED_COLUMN_LIST) {
            condition::subquery(f, &self.select)?;
            return alias(f, &self.alias.name, columns);
        }

        // (SELECT NULL a, NULL b FROM dual WHERE 1 = 0
        //  UNION ALL SELECT * FROM (q) t) t
        let header = columns
            .iter()
            .fold(Select::new(), |select, column| {
                select.field_as(Expr::inline(Value::Null), column)
            })
            .from(Table::Dual)
            .filter(Expr::inline(1).eq(Expr::inline(0)));

        let body = Select::new().field(Expr::asterisk()).from(Table::derived(
            (*self.select).clone(),
            TableAlias::new(&self.alias.name),
        ));

        condition::subquery(f, &header.union_all(body))?;
        alias(f, &self.alias.name, &[])
    }
}

impl ToSql for &TableValues {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let columns = value_columns(self);

        if self.rows.is_empty() {
            condition::subquery(f, &union_all(&self.rows, &columns))?;
            return alias(f, &self.alias.name, &[]);
        }

        if f.supports(flavor::VALUES_CONSTRUCTOR) {
            fmt!(f, "(VALUES " Comma(&self.rows) ")");
        } else if f.supports(flavor::VALUES_ROW) {
            let rows = self.rows.iter().map(RowConstructor);
            fmt!(f, "(VALUES " Comma(rows) ")");
        } else {
            condition::subquery(f, &union_all(&self.rows, &columns))?;
            return alias(f, &self.alias.name, &[]);
        }

        alias(f, &self.alias.name, &columns)
    }
}

/// `ROW(a, b)`
struct RowConstructor<'a>(&'a Row);

impl ToSql for RowConstructor<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "ROW" self.0);
        Ok(())
    }
}

impl ToSql for &TableArray {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let columns = self.column_names();

        if self.elements.is_empty() || !f.supports(flavor::UNNEST) {
            let rows: Vec<Row> = self
                .elements
                .iter()
                .enumerate()
                .map(|(i, element)| {
                    if self.with_ordinality {
                        Row::new([element.clone(), Expr::inline(i as i64 + 1)])
                    } else {
                        Row::new([element.clone()])
                    }
                })
                .collect();

            condition::subquery(f, &union_all(&rows, &columns))?;
            return alias(f, &self.alias.name, &[]);
        }

        let ordinality = if self.with_ordinality {
            " WITH ORDINALITY"
        } else {
            ""
        };
        fmt!(f, "UNNEST(ARRAY[" Comma(&self.elements) "])" ordinality);
        alias(f, &self.alias.name, &columns)
    }
}

impl ToSql for &TableRowsFrom {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !f.supports(flavor::ROWS_FROM) {
            return Err(f.unsupported("ROWS FROM"));
        }

        fmt!(f, "ROWS FROM (" Comma(&self.functions) ")");
        alias(f, &self.alias.name, &self.alias.columns)
    }
}

/// ` AS name(c1, c2)`. Oracle does not accept `AS` before a table alias.
fn alias<P: Params>(f: &mut Formatter<'_, P>, name: &Name, columns: &[Name]) -> Result<()> {
    let keyword = if f.supports(flavor::TABLE_AS) {
        " "
    } else {
        " AS "
    };
    fmt!(f, keyword Unqualified(name));

    if !columns.is_empty() {
        fmt!(f, "(" Comma(columns.iter().map(Unqualified)) ")");
    }

    Ok(())
}

/// The alias columns, or `c1, c2, ..` sized by the first row.
fn value_columns(table: &TableValues) -> Vec<Name> {
    if !table.alias.columns.is_empty() {
        return table.alias.columns.clone();
    }

    let width = table.rows.first().map_or(0, Row::len);
    (1..=width).map(|i| Name::new([format!("c{i}")])).collect()
}

/// One `SELECT .. FROM dual` per row, combined with `UNION ALL`. The first
/// row names the columns. Without rows, a single row of NULLs filtered out
/// by `WHERE 1 = 0`.
fn union_all(rows: &[Row], columns: &[Name]) -> Select {
    let Some((first, rest)) = rows.split_first() else {
        return columns
            .iter()
            .fold(Select::new(), |select, column| {
                select.field_as(Expr::inline(Value::Null), column)
            })
            .from(Table::Dual)
            .filter(Expr::inline(1).eq(Expr::inline(0)));
    };

    let head = first
        .fields
        .iter()
        .zip(columns)
        .fold(Select::new(), |select, (expr, column)| {
            select.field_as(expr, column)
        })
        .from(Table::Dual);

    rest.iter().fold(head, |select, row| {
        select.union_all(Select::new().fields(&row.fields).from(Table::Dual))
    })
}

/// The dummy one-row table.
pub(super) fn dual(dialect: Dialect) -> &'static str {
    match dialect.family() {
        Family::Oracle | Family::MySql | Family::MariaDb => "DUAL",
        Family::Db2 => "SYSIBM.DUAL",
        Family::Derby => "SYSIBM.SYSDUMMY1",
        Family::Firebird => "RDB$DATABASE",
        Family::Hsqldb => "(VALUES (1)) AS dual(dual)",
        Family::Cubrid => "db_root",
        Family::Hana => "DUMMY",
        _ => "(SELECT 1) AS dual",
    }
}

/// Whether a SELECT without tables must still name the dummy table. MySQL
/// needs it only when there is a WHERE clause.
pub(super) fn dual_required(dialect: Dialect, has_filter: bool) -> bool {
    match dialect.family() {
        Family::Oracle => dialect < Dialect::Oracle23ai,
        Family::Db2
        | Family::Derby
        | Family::Firebird
        | Family::Hsqldb
        | Family::Cubrid
        | Family::Hana => true,
        Family::MySql | Family::MariaDb => has_filter,
        _ => false,
    }
}
