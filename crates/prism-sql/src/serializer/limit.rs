use super::{flavor::LimitStyle, Formatter, Params, ToSql};

use prism_core::{
    stmt::{Limit, Select},
    Family, Result,
};

/// MySQL has no offset-only form; this is the largest row count it accepts.
const MYSQL_MAX_LIMIT: &str = "18446744073709551615";

fn limit_of(select: &Select) -> Option<Limit> {
    select.limit.filter(|limit| !limit.is_empty())
}

/// SQL Server and Sybase put a plain row count right after `SELECT`.
fn uses_top(select: &Select, limit: &Limit) -> bool {
    limit.offset.is_none() && select.set_ops.is_empty()
}

/// The part of the limit written between `SELECT` and the select list:
/// `TOP n` or `FIRST n SKIP m`.
pub(super) fn prefix<P: Params>(f: &mut Formatter<'_, P>, select: &Select) -> Result<()> {
    let Some(limit) = limit_of(select) else {
        return Ok(());
    };

    match LimitStyle::of(f.dialect()) {
        LimitStyle::Top if uses_top(select, &limit) => {
            if let Some(n) = limit.limit {
                fmt!(f, "TOP " n " ");
            }
        }
        LimitStyle::FirstSkip => {
            if !select.set_ops.is_empty() {
                return Err(f.unsupported("FIRST and SKIP on a compound query"));
            }
            if let Some(n) = limit.limit {
                fmt!(f, "FIRST " n " ");
            }
            if let Some(m) = limit.offset {
                fmt!(f, "SKIP " m " ");
            }
        }
        _ => {}
    }

    Ok(())
}

/// The part of the limit written after `ORDER BY`.
pub(super) fn suffix<P: Params>(f: &mut Formatter<'_, P>, select: &Select) -> Result<()> {
    let Some(limit) = limit_of(select) else {
        return Ok(());
    };

    match LimitStyle::of(f.dialect()) {
        LimitStyle::LimitOffset => {
            match (limit.limit, limit.offset) {
                (Some(n), _) => {
                    f.clause("LIMIT ");
                    fmt!(f, n);
                }
                (None, Some(_)) => match f.dialect().family() {
                    Family::MySql | Family::MariaDb => {
                        f.clause("LIMIT ");
                        fmt!(f, MYSQL_MAX_LIMIT);
                    }
                    Family::Sqlite => f.clause("LIMIT -1"),
                    _ => {}
                },
                (None, None) => {}
            }

            if let Some(m) = limit.offset {
                f.clause("OFFSET ");
                fmt!(f, m);
            }
        }
        LimitStyle::FetchFirst => offset_fetch(f, &limit),
        LimitStyle::Top if uses_top(select, &limit) => {}
        LimitStyle::Top => {
            if f.dialect().family() == Family::Sybase {
                return Err(f.unsupported("OFFSET"));
            }

            // OFFSET requires an ORDER BY
            if select.order_by.is_empty() {
                f.clause("ORDER BY (SELECT 0)");
            }

            let limit = Limit {
                offset: Some(limit.offset.unwrap_or(0)),
                ..limit
            };
            offset_fetch(f, &limit);
        }
        LimitStyle::FirstSkip | LimitStyle::Rownum => {}
    }

    Ok(())
}

/// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
fn offset_fetch<P: Params>(f: &mut Formatter<'_, P>, limit: &Limit) {
    if let Some(m) = limit.offset {
        f.clause("OFFSET ");
        f.dst.push_str(&format!("{m} ROWS"));
    }

    if let Some(n) = limit.limit {
        f.clause("FETCH NEXT ");
        f.dst.push_str(&format!("{n} ROWS ONLY"));
    }
}

/// Oracle before 12c filters on `ROWNUM` around the unlimited query.
pub(super) fn rownum<P: Params>(f: &mut Formatter<'_, P>, select: &Select) -> Result<()> {
    let limit = select.limit.unwrap_or_default();
    let inner = Select {
        limit: None,
        ..select.clone()
    };

    match (limit.limit, limit.offset) {
        (Some(n), None) => {
            fmt!(f, "SELECT * FROM (");
            f.subquery(|f| inner.to_sql(f))?;
            fmt!(f, ") q");
            f.clause("WHERE ROWNUM <= ");
            fmt!(f, n);
        }
        (n, offset) => {
            let m = offset.unwrap_or(0);

            fmt!(f, "SELECT * FROM (SELECT q.*, ROWNUM rn FROM (");
            f.subquery(|f| inner.to_sql(f))?;
            fmt!(f, ") q");

            if let Some(n) = n {
                let upper = n.saturating_add(m);
                fmt!(f, " WHERE ROWNUM <= " upper);
            }

            fmt!(f, ")");
            f.clause("WHERE rn > ");
            fmt!(f, m);
        }
    }

    Ok(())
}
