use super::{
    condition, flavor, flavor::LimitStyle, limit, table, Comma, Formatter, Params, ToSql,
    Unqualified,
};

use prism_core::{
    stmt::{
        Condition, Direction, Distinct, Nulls, OrderByExpr, Select, SelectField, SetOp,
        SetOperation, Table, With,
    },
    Family, Result,
};
use std::mem;

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let limited = self.limit.is_some_and(|limit| !limit.is_empty());

        if limited && LimitStyle::of(f.dialect()) == LimitStyle::Rownum {
            return limit::rownum(f, self);
        }

        if self.for_update && f.supports(flavor::NO_FOR_UPDATE) {
            return Err(f.unsupported("FOR UPDATE"));
        }

        if let Some(with) = &self.with {
            with.to_sql(f)?;
            f.clause("");
        }

        body(f, self, true)?;

        for operation in &self.set_ops {
            operation.to_sql(f)?;
        }

        order_by(f, &self.order_by)?;
        limit::suffix(f, self)?;

        if self.for_update {
            f.clause("FOR UPDATE");
        }

        Ok(())
    }
}

/// `SELECT .. FROM .. WHERE .. GROUP BY .. HAVING ..`, without set
/// operations, ordering or limits.
fn body<P: Params>(f: &mut Formatter<'_, P>, select: &Select, first: bool) -> Result<()> {
    fmt!(f, "SELECT ");

    // `SELECT DISTINCT TOP n`, but `SELECT FIRST n SKIP m DISTINCT`
    let top = LimitStyle::of(f.dialect()) == LimitStyle::Top;

    if first && !top {
        limit::prefix(f, select)?;
    }

    match &select.distinct {
        Some(Distinct::All) => fmt!(f, "DISTINCT "),
        Some(Distinct::On(exprs)) => {
            if !f.supports(flavor::DISTINCT_ON) {
                return Err(f.unsupported("DISTINCT ON"));
            }
            fmt!(f, "DISTINCT ON (" Comma(exprs) ") ");
        }
        None => {}
    }

    if first && top {
        limit::prefix(f, select)?;
    }

    if select.fields.is_empty() {
        fmt!(f, "*");
    } else {
        fmt!(f, Comma(&select.fields));
    }

    let semi_anti = from(f, &select.from, select.filter.is_some())?;

    match (&select.filter, semi_anti.is_empty()) {
        (None, true) => {}
        (Some(filter), true) => {
            f.clause("WHERE ");
            filter.to_sql(f)?;
        }
        (filter, false) => {
            let filter = Condition::and_all(filter.iter().cloned().chain(semi_anti));
            f.clause("WHERE ");
            filter.to_sql(f)?;
        }
    }

    if !select.group_by.is_empty() {
        f.clause("GROUP BY ");
        fmt!(f, Comma(&select.group_by));
    }

    if let Some(having) = &select.having {
        f.clause("HAVING ");
        having.to_sql(f)?;
    }

    Ok(())
}

/// Renders a FROM clause, returning the `EXISTS` predicates of any semi and
/// anti joins it absorbed.
///
/// Dummy tables are dropped, and the dialect's DUAL is rendered only when
/// the query would otherwise be invalid.
pub(super) fn from<P: Params>(
    f: &mut Formatter<'_, P>,
    tables: &[Table],
    has_filter: bool,
) -> Result<Vec<Condition>> {
    let tables: Vec<&Table> = tables
        .iter()
        .filter(|table| !matches!(table, Table::Dual))
        .collect();

    if tables.is_empty() {
        let dialect = f.dialect();
        if table::dual_required(dialect, has_filter) {
            f.clause("FROM ");
            fmt!(f, table::dual(dialect));
        }
        return Ok(vec![]);
    }

    f.clause("FROM ");
    collect_semi_anti(f, |f| {
        fmt!(f, Comma(tables));
        Ok(())
    })
}

/// Runs `render` with semi and anti joins collected instead of rendered.
pub(super) fn collect_semi_anti<P: Params>(
    f: &mut Formatter<'_, P>,
    render: impl FnOnce(&mut Formatter<'_, P>) -> Result<()>,
) -> Result<Vec<Condition>> {
    let outer = mem::replace(&mut f.semi_anti, Some(vec![]));
    let ret = render(f);
    let collected = mem::replace(&mut f.semi_anti, outer);
    ret?;
    Ok(collected.unwrap_or_default())
}

impl ToSql for &SelectField {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, self.expr);

        if let (true, Some(alias)) = (f.declare_fields, &self.alias) {
            fmt!(f, " AS " Unqualified(alias));
        }

        Ok(())
    }
}

impl ToSql for &With {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "WITH ");

        if self.recursive && f.supports(flavor::RECURSIVE_KEYWORD) {
            fmt!(f, "RECURSIVE ");
        }

        let mut s = "";
        for cte in &self.ctes {
            fmt!(f, s Unqualified(&cte.name));

            if !cte.columns.is_empty() {
                fmt!(f, "(" Comma(cte.columns.iter().map(Unqualified)) ")");
            }

            fmt!(f, " AS ");
            condition::subquery(f, &cte.select)?;
            s = ", ";
        }

        Ok(())
    }
}

impl ToSql for &SetOperation {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.op != SetOp::Union {
            if f.supports(flavor::NO_INTERSECT_EXCEPT) {
                return Err(f.unsupported("INTERSECT and EXCEPT"));
            }

            if self.all && !f.supports(flavor::INTERSECT_ALL) {
                return Err(f.unsupported("INTERSECT ALL and EXCEPT ALL"));
            }
        }

        let keyword = match self.op {
            SetOp::Union => "UNION",
            SetOp::Intersect => "INTERSECT",
            SetOp::Except if f.dialect().family() == Family::Oracle => "MINUS",
            SetOp::Except => "EXCEPT",
        };

        f.clause(keyword);
        if self.all {
            fmt!(f, " ALL");
        }
        fmt!(f, " ");

        let operand = &self.select;
        let nested = operand.with.is_some()
            || !operand.set_ops.is_empty()
            || !operand.order_by.is_empty()
            || operand.limit.is_some_and(|limit| !limit.is_empty());

        if nested {
            return condition::subquery(f, operand);
        }

        // Column names come from the first operand
        let declare_fields = mem::replace(&mut f.declare_fields, false);
        let ret = body(f, operand, false);
        f.declare_fields = declare_fields;
        ret
    }
}

/// `ORDER BY ..`, nothing when there are no items.
///
/// `NULLS FIRST` and `NULLS LAST` become a leading `CASE` sort key on
/// dialects that cannot spell them.
pub(super) fn order_by<P: Params>(f: &mut Formatter<'_, P>, items: &[OrderByExpr]) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }

    f.clause("ORDER BY ");

    let mut s = "";
    for item in items {
        fmt!(f, s);

        let nulls = match item.nulls {
            Some(nulls) if !f.supports(flavor::NULLS_ORDERING) => {
                let (null, not_null) = match nulls {
                    Nulls::First => ("0", "1"),
                    Nulls::Last => ("1", "0"),
                };
                fmt!(f, "CASE WHEN " item.expr " IS NULL THEN " null " ELSE " not_null " END, ");
                ""
            }
            Some(Nulls::First) => " NULLS FIRST",
            Some(Nulls::Last) => " NULLS LAST",
            None => "",
        };

        let direction = match item.direction {
            Some(Direction::Asc) => " ASC",
            Some(Direction::Desc) => " DESC",
            None => "",
        };

        fmt!(f, item.expr direction nulls);
        s = ", ";
    }

    Ok(())
}
