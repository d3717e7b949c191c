use super::{
    flavor,
    insert::{output, returning},
    select, Comma, Formatter, Params, ToSql,
};
use crate::ExecuteWithoutWhere;

use prism_core::{
    stmt::{Condition, Delete, Expr, Limit, OrderByExpr, Row, Select, Table},
    Dialect, Error, Family, Name, Quoted, Result,
};
use std::mem;

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.filter.is_none() {
            without_where("DELETE", f.settings().execute_delete_without_where)?;
        }

        let family = f.dialect().family();
        let using_native = !self.using.is_empty() && f.supports(flavor::DELETE_USING);
        let mysql_using = using_native && matches!(family, Family::MySql | Family::MariaDb);
        let rewrite = (self.limit.is_some() || !self.order_by.is_empty())
            && !f.supports(flavor::DML_LIMIT);

        let mut filter = self.filter.clone();

        if !self.using.is_empty() && !using_native {
            // WHERE EXISTS (SELECT 1 FROM using WHERE cond)
            let mut exists = self
                .using
                .iter()
                .fold(Select::new().field(Expr::inline(1)), Select::from);
            exists.filter = filter.take();
            filter = Some(Condition::exists(exists));
        }

        if rewrite {
            filter = Some(key_in(f, &self.table, filter, &self.order_by, self.limit)?);
        }

        fmt!(f, "DELETE FROM ");

        // MySQL names the target by reference and declares it in USING
        let mut semi_anti = if mysql_using {
            let declare = mem::replace(&mut f.declare_tables, false);
            let ret = self.table.to_sql(&mut *f);
            f.declare_tables = declare;
            ret?;
            vec![]
        } else {
            select::collect_semi_anti(f, |f| self.table.to_sql(f))?
        };

        output(f, &self.returning, "DELETED")?;

        if using_native {
            let tables: Vec<&Table> = if mysql_using {
                std::iter::once(&self.table).chain(&self.using).collect()
            } else {
                self.using.iter().collect()
            };

            f.clause("USING ");
            semi_anti.extend(select::collect_semi_anti(f, |f| {
                fmt!(f, Comma(tables));
                Ok(())
            })?);
        }

        where_clause(f, filter, semi_anti)?;

        if !rewrite {
            select::order_by(f, &self.order_by)?;
            if let Some(n) = self.limit {
                f.clause("LIMIT ");
                fmt!(f, n);
            }
        }

        returning(f, &self.returning, flavor::DELETE_RETURNING)
    }
}

/// `WHERE ..` with collected semi and anti join predicates AND-ed in.
pub(super) fn where_clause<P: Params>(
    f: &mut Formatter<'_, P>,
    filter: Option<Condition>,
    semi_anti: Vec<Condition>,
) -> Result<()> {
    let filter = match (filter, semi_anti.is_empty()) {
        (filter, true) => filter,
        (filter, false) => Some(Condition::and_all(filter.into_iter().chain(semi_anti))),
    };

    if let Some(filter) = filter {
        f.clause("WHERE ");
        filter.to_sql(f)?;
    }

    Ok(())
}

/// Applies the policy for a DELETE or UPDATE without a WHERE clause.
pub(super) fn without_where(kind: &str, policy: ExecuteWithoutWhere) -> Result<()> {
    match policy {
        ExecuteWithoutWhere::Ignore => {}
        ExecuteWithoutWhere::LogDebug => tracing::debug!(kind, "statement has no WHERE clause"),
        ExecuteWithoutWhere::LogInfo => tracing::info!(kind, "statement has no WHERE clause"),
        ExecuteWithoutWhere::LogWarn => tracing::warn!(kind, "statement has no WHERE clause"),
        ExecuteWithoutWhere::Throw => {
            return Err(Error::execution_policy(format!(
                "{kind} without a WHERE clause"
            )))
        }
    }

    Ok(())
}

/// `key IN (SELECT key FROM table WHERE cond ORDER BY .. LIMIT n)`, for
/// dialects that cannot order or limit a DELETE or UPDATE directly.
///
/// The key is the table's primary key from the catalog, else its first
/// unique key, else the dialect's physical row id.
pub(super) fn key_in<P: Params>(
    f: &Formatter<'_, P>,
    table: &Table,
    filter: Option<Condition>,
    order_by: &[OrderByExpr],
    limit: Option<u64>,
) -> Result<Condition> {
    let Table::Named(named) = table else {
        return Err(f.unsupported("ORDER BY and LIMIT on a DELETE or UPDATE of a derived table"));
    };
    let reference = named.reference();

    let meta_key = f
        .serializer
        .catalog
        .and_then(|catalog| catalog.table(&named.name))
        .and_then(|meta| meta.identifying_key());

    let mut key: Vec<Expr> = match meta_key {
        Some(key) => key
            .columns
            .iter()
            .map(|column| Expr::field(reference.append(column.as_str())))
            .collect(),
        None => {
            let Some(row_id) = row_id(f.dialect()) else {
                return Err(f.unsupported("ORDER BY and LIMIT on a DELETE or UPDATE without a key"));
            };
            let row_id = Name::with_quoting([row_id], Quoted::Unquoted);
            vec![Expr::field(reference.append(row_id))]
        }
    };

    let select = Select {
        filter,
        order_by: order_by.to_vec(),
        limit: limit.map(|n| Limit {
            limit: Some(n),
            offset: None,
        }),
        ..Select::new().fields(key.iter()).from(table)
    };

    if key.len() == 1 {
        if let Some(expr) = key.pop() {
            return Ok(expr.in_select(select));
        }
    }

    Ok(Row::new(key).in_select(select))
}

fn row_id(dialect: Dialect) -> Option<&'static str> {
    match dialect.family() {
        Family::Postgres | Family::YugabyteDb => Some("ctid"),
        Family::Oracle => Some("ROWID"),
        Family::Sqlite | Family::DuckDb => Some("rowid"),
        Family::H2 => Some("_ROWID_"),
        Family::Firebird => Some("RDB$DB_KEY"),
        _ => None,
    }
}
