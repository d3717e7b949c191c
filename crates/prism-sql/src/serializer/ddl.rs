use super::{
    flavor,
    insert::unqualified,
    try_catch::{guarded, Guard},
    ty::Ty,
    Comma, Formatter, Params, Qualified, ToSql, Unqualified,
};

use prism_core::{
    stmt::{
        CreateIndex, CreateSequence, CreateTable, Direction, DropIndex, DropSequence, DropTable,
        Identity, Statement, Truncate,
    },
    Error, Family, Result,
};
use std::mem;

/// DDL takes no bind values; everything is rendered inline.
fn inline<P: Params>(
    f: &mut Formatter<'_, P>,
    render: impl FnOnce(&mut Formatter<'_, P>) -> Result<()>,
) -> Result<()> {
    let inline = mem::replace(&mut f.inline, true);
    let ret = render(f);
    f.inline = inline;
    ret
}

fn if_not_exists(native: bool) -> &'static str {
    if native {
        "IF NOT EXISTS "
    } else {
        ""
    }
}

fn if_exists(native: bool) -> &'static str {
    if native {
        "IF EXISTS "
    } else {
        ""
    }
}

/// Returns `true` when `stmt` renders as a try/catch block emulating an
/// existence check.
pub(super) fn is_guarded<P: Params>(f: &Formatter<'_, P>, stmt: &Statement) -> bool {
    match stmt {
        Statement::CreateTable(stmt) => {
            stmt.if_not_exists && !f.supports(flavor::CREATE_TABLE_IF_NOT_EXISTS)
        }
        Statement::CreateIndex(stmt) => {
            stmt.if_not_exists && !f.supports(flavor::CREATE_INDEX_IF_NOT_EXISTS)
        }
        Statement::CreateSequence(stmt) => {
            stmt.if_not_exists && !f.supports(flavor::CREATE_SEQUENCE_IF_NOT_EXISTS)
        }
        Statement::DropTable(stmt) => stmt.if_exists && !f.supports(flavor::DROP_TABLE_IF_EXISTS),
        Statement::DropIndex(stmt) => stmt.if_exists && !f.supports(flavor::DROP_INDEX_IF_EXISTS),
        Statement::DropSequence(stmt) => {
            stmt.if_exists && !f.supports(flavor::DROP_SEQUENCE_IF_EXISTS)
        }
        _ => false,
    }
}

impl ToSql for &CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.if_not_exists && !f.supports(flavor::CREATE_TABLE_IF_NOT_EXISTS) {
            return guarded(f, Guard::CreateTable, |f| create_table(f, self, false));
        }

        create_table(f, self, self.if_not_exists)
    }
}

fn create_table<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &CreateTable,
    guard: bool,
) -> Result<()> {
    inline(f, |f| {
        fmt!(f, "CREATE TABLE " if_not_exists(guard) Qualified(&stmt.name) " (");

        let mut s = "";
        for column in &stmt.columns {
            fmt!(f, s Unqualified(&column.name) " " Ty(&column.ty));

            if let Some(default) = &column.default {
                fmt!(f, " DEFAULT " default);
            }

            if column.not_null {
                fmt!(f, " NOT NULL");
            }

            s = ", ";
        }

        if !stmt.primary_key.is_empty() {
            let key = stmt.primary_key.iter().map(Unqualified);
            fmt!(f, s "PRIMARY KEY (" Comma(key) ")");
        }

        fmt!(f, ")");
        Ok(())
    })
}

impl ToSql for &DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let cascade = match self.cascade {
            false => "",
            true if f.dialect().family() == Family::Oracle => " CASCADE CONSTRAINTS",
            true if f.supports(flavor::DROP_TABLE_CASCADE) => " CASCADE",
            true => return Err(f.unsupported("DROP TABLE .. CASCADE")),
        };

        if self.if_exists && !f.supports(flavor::DROP_TABLE_IF_EXISTS) {
            guarded(f, Guard::DropTable, |f| drop_table(f, self, cascade, false))
        } else {
            drop_table(f, self, cascade, self.if_exists)
        }
    }
}

fn drop_table<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &DropTable,
    cascade: &str,
    guard: bool,
) -> Result<()> {
    fmt!(f, "DROP TABLE " if_exists(guard) Qualified(&stmt.name) cascade);
    Ok(())
}

impl ToSql for &CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.filter.is_some() && !f.supports(flavor::PARTIAL_INDEX) {
            return Err(f.unsupported("partial indexes"));
        }

        if self.if_not_exists && !f.supports(flavor::CREATE_INDEX_IF_NOT_EXISTS) {
            return guarded(f, Guard::CreateIndex, |f| create_index(f, self, false));
        }

        create_index(f, self, self.if_not_exists)
    }
}

/// An index column with its sort order.
struct IndexColumn<'a>(&'a prism_core::Name, Option<Direction>);

impl ToSql for IndexColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let direction = match self.1 {
            Some(Direction::Asc) => " ASC",
            Some(Direction::Desc) => " DESC",
            None => "",
        };
        fmt!(f, Unqualified(self.0) direction);
        Ok(())
    }
}

fn create_index<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &CreateIndex,
    guard: bool,
) -> Result<()> {
    inline(f, |f| {
        let unique = if stmt.unique { "UNIQUE " } else { "" };
        let columns = stmt
            .columns
            .iter()
            .map(|(column, direction)| IndexColumn(column, *direction));

        fmt!(f, "CREATE " unique "INDEX " if_not_exists(guard) Unqualified(&stmt.name));
        fmt!(f, " ON " Qualified(&stmt.on) " (" Comma(columns) ")");

        if let Some(filter) = &stmt.filter {
            fmt!(f, " WHERE ");
            unqualified(f, |f| filter.to_sql(f))?;
        }

        Ok(())
    })
}

impl ToSql for &DropIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let on = f.supports(flavor::DROP_INDEX_ON);

        if on && self.on.is_none() {
            return Err(Error::invalid_statement(format!(
                "DROP INDEX on {} needs the indexed table",
                f.dialect()
            )));
        }

        if self.if_exists && !f.supports(flavor::DROP_INDEX_IF_EXISTS) {
            guarded(f, Guard::DropIndex, |f| drop_index(f, self, on, false))
        } else {
            drop_index(f, self, on, self.if_exists)
        }
    }
}

fn drop_index<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &DropIndex,
    on: bool,
    guard: bool,
) -> Result<()> {
    fmt!(f, "DROP INDEX " if_exists(guard) Qualified(&stmt.name));

    if let (true, Some(table)) = (on, &stmt.on) {
        fmt!(f, " ON " Qualified(table));
    }

    Ok(())
}

impl ToSql for &Truncate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.supports(flavor::NO_TRUNCATE) {
            if self.identity.is_some() || self.cascade {
                return Err(f.unsupported("TRUNCATE options"));
            }

            fmt!(f, "DELETE FROM " Qualified(&self.table));
            return Ok(());
        }

        fmt!(f, "TRUNCATE TABLE " Qualified(&self.table));

        if f.dialect().family() == Family::Db2 {
            fmt!(f, " IMMEDIATE");
        }

        if let Some(identity) = self.identity {
            if !f.supports(flavor::TRUNCATE_IDENTITY) {
                return Err(f.unsupported("TRUNCATE .. RESTART IDENTITY"));
            }

            match identity {
                Identity::Restart => fmt!(f, " RESTART IDENTITY"),
                Identity::Continue => fmt!(f, " CONTINUE IDENTITY"),
            }
        }

        if self.cascade {
            if !f.supports(flavor::TRUNCATE_CASCADE) {
                return Err(f.unsupported("TRUNCATE .. CASCADE"));
            }
            fmt!(f, " CASCADE");
        }

        Ok(())
    }
}

impl ToSql for &CreateSequence {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !f.supports(flavor::SEQUENCES) {
            return Err(f.unsupported("sequences"));
        }

        if self.if_not_exists && !f.supports(flavor::CREATE_SEQUENCE_IF_NOT_EXISTS) {
            return guarded(f, Guard::CreateSequence, |f| create_sequence(f, self, false));
        }

        create_sequence(f, self, self.if_not_exists)
    }
}

fn create_sequence<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &CreateSequence,
    guard: bool,
) -> Result<()> {
    fmt!(f, "CREATE SEQUENCE " if_not_exists(guard) Qualified(&stmt.name));

    if let Some(n) = stmt.start_with {
        fmt!(f, " START WITH " n);
    }
    if let Some(n) = stmt.increment_by {
        fmt!(f, " INCREMENT BY " n);
    }
    if let Some(n) = stmt.min_value {
        fmt!(f, " MINVALUE " n);
    }
    if let Some(n) = stmt.max_value {
        fmt!(f, " MAXVALUE " n);
    }
    if stmt.cycle {
        fmt!(f, " CYCLE");
    }
    if let Some(n) = stmt.cache {
        fmt!(f, " CACHE " n);
    }

    Ok(())
}

impl ToSql for &DropSequence {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !f.supports(flavor::SEQUENCES) {
            return Err(f.unsupported("sequences"));
        }

        let restrict = if f.dialect().family() == Family::Derby {
            " RESTRICT"
        } else {
            ""
        };
        if self.if_exists && !f.supports(flavor::DROP_SEQUENCE_IF_EXISTS) {
            guarded(f, Guard::DropSequence, |f| drop_sequence(f, self, restrict, false))
        } else {
            drop_sequence(f, self, restrict, self.if_exists)
        }
    }
}

fn drop_sequence<P: Params>(
    f: &mut Formatter<'_, P>,
    stmt: &DropSequence,
    restrict: &str,
    guard: bool,
) -> Result<()> {
    fmt!(f, "DROP SEQUENCE " if_exists(guard) Qualified(&stmt.name) restrict);
    Ok(())
}
