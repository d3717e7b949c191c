use super::{flavor, Comma, Formatter, Params, Qualified, ToSql, Unqualified};

use prism_core::{
    stmt::{Expr, Insert, InsertSource, Row, Select, Table},
    DialectSet, Error, Family, Name, Result,
};
use std::mem;

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        self.validate()?;

        let native_conflict = f.supports(flavor::ON_CONFLICT_DO_NOTHING);
        let ignore = match self.on_conflict_do_nothing {
            true if native_conflict => "",
            true if f.supports(flavor::INSERT_IGNORE) => "IGNORE ",
            true => return Err(f.unsupported("ON CONFLICT DO NOTHING")),
            false => "",
        };

        fmt!(f, "INSERT " ignore "INTO " Qualified(&self.table));

        match &self.source {
            InsertSource::Values(rows) => {
                columns(f, &self.columns)?;
                output(f, &self.returning, "INSERTED")?;
                values(f, rows)?;
            }
            InsertSource::Select(select) => {
                columns(f, &self.columns)?;
                output(f, &self.returning, "INSERTED")?;
                fmt!(f, " ");
                select.to_sql(f)?;
            }
            InsertSource::DefaultValues => default_values(f, self)?,
        }

        if self.on_conflict_do_nothing && native_conflict {
            fmt!(f, " ON CONFLICT DO NOTHING");
        }

        returning(f, &self.returning, flavor::INSERT_RETURNING)
    }
}

fn columns<P: Params>(f: &mut Formatter<'_, P>, columns: &[Name]) -> Result<()> {
    if !columns.is_empty() {
        fmt!(f, " (" Comma(columns.iter().map(Unqualified)) ")");
    }
    Ok(())
}

fn values<P: Params>(f: &mut Formatter<'_, P>, rows: &[Row]) -> Result<()> {
    if rows.len() > 1 && f.supports(flavor::NO_MULTI_ROW_VALUES) {
        // INSERT .. SELECT .. FROM dual UNION ALL SELECT .. FROM dual
        let select = rows
            .iter()
            .map(|row| Select::new().fields(&row.fields).from(Table::Dual))
            .reduce(Select::union_all)
            .unwrap_or_default();

        fmt!(f, " ");
        return select.to_sql(f);
    }

    fmt!(f, " VALUES " Comma(rows));
    Ok(())
}

/// `DEFAULT VALUES`, or a row of `DEFAULT` over the table's columns where
/// the dialect lacks the syntax.
fn default_values<P: Params>(f: &mut Formatter<'_, P>, insert: &Insert) -> Result<()> {
    let family = f.dialect().family();

    if insert.columns.is_empty() {
        if matches!(family, Family::MySql | Family::MariaDb) {
            fmt!(f, " ()");
            output(f, &insert.returning, "INSERTED")?;
            fmt!(f, " VALUES ()");
            return Ok(());
        }

        if f.supports(flavor::DEFAULT_VALUES) {
            output(f, &insert.returning, "INSERTED")?;
            fmt!(f, " DEFAULT VALUES");
            return Ok(());
        }
    }

    let columns: Vec<Name> = if insert.columns.is_empty() {
        f.serializer
            .catalog
            .and_then(|catalog| catalog.table(&insert.table))
            .map(|table| {
                table
                    .columns
                    .iter()
                    .map(|column| Name::from(column.name.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        insert.columns.clone()
    };

    if columns.is_empty() {
        return Err(Error::invalid_statement(format!(
            "DEFAULT VALUES on {} needs the table's columns from the catalog",
            f.dialect()
        )));
    }

    fmt!(f, " (" Comma(columns.iter().map(Unqualified)) ")");
    output(f, &insert.returning, "INSERTED")?;

    let defaults = columns.iter().map(|_| "DEFAULT");
    fmt!(f, " VALUES (" Comma(defaults) ")");
    Ok(())
}

/// SQL Server's `OUTPUT INSERTED.a, ..`, written before the source rows.
pub(super) fn output<P: Params>(
    f: &mut Formatter<'_, P>,
    returning: &[Expr],
    pseudo_table: &str,
) -> Result<()> {
    if returning.is_empty() || !f.supports(flavor::OUTPUT) {
        return Ok(());
    }

    fmt!(f, " OUTPUT ");

    let mut s = "";
    for expr in returning {
        fmt!(f, s);

        match expr {
            Expr::Field(field) => fmt!(f, pseudo_table "." Unqualified(&field.name)),
            Expr::Asterisk(_) => fmt!(f, pseudo_table ".*"),
            expr => unqualified(f, |f| expr.to_sql(f))?,
        }

        s = ", ";
    }

    Ok(())
}

/// `RETURNING a, ..`, or nothing when `OUTPUT` took its place.
pub(super) fn returning<P: Params>(
    f: &mut Formatter<'_, P>,
    returning: &[Expr],
    supported: DialectSet,
) -> Result<()> {
    if returning.is_empty() || f.supports(flavor::OUTPUT) {
        return Ok(());
    }

    if !f.supports(supported) {
        return Err(f.unsupported("RETURNING"));
    }

    f.clause("RETURNING ");
    unqualified(f, |f| Comma(returning).to_sql(f))
}

/// Renders with field references stripped of their qualifier.
pub(super) fn unqualified<P: Params>(
    f: &mut Formatter<'_, P>,
    render: impl FnOnce(&mut Formatter<'_, P>) -> Result<()>,
) -> Result<()> {
    let qualify = mem::replace(&mut f.qualify, false);
    let ret = render(f);
    f.qualify = qualify;
    ret
}
