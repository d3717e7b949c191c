use super::{
    condition,
    delete::{key_in, where_clause, without_where},
    flavor,
    insert::{output, returning},
    select, Comma, Formatter, Params, ToSql, Unqualified,
};

use prism_core::{
    stmt::{Assignment, RowSource, Update},
    Family, Result,
};

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.filter.is_none() {
            without_where("UPDATE", f.settings().execute_update_without_where)?;
        }

        if !self.from.is_empty() && !f.supports(flavor::UPDATE_FROM) {
            return Err(f.unsupported("UPDATE .. FROM"));
        }

        let rewrite = (self.limit.is_some() || !self.order_by.is_empty())
            && !f.supports(flavor::DML_LIMIT);

        let filter = if rewrite {
            Some(key_in(f, &self.table, self.filter.clone(), &self.order_by, self.limit)?)
        } else {
            self.filter.clone()
        };

        fmt!(f, "UPDATE ");
        let mut semi_anti = select::collect_semi_anti(f, |f| self.table.to_sql(f))?;

        f.clause("SET ");
        let mut s = "";
        for assignment in &self.assignments {
            fmt!(f, s);
            assignment.to_sql(f)?;
            s = ", ";
        }

        output(f, &self.returning, "INSERTED")?;

        if !self.from.is_empty() {
            f.clause("FROM ");
            semi_anti.extend(select::collect_semi_anti(f, |f| {
                fmt!(f, Comma(&self.from));
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

        returning(f, &self.returning, flavor::UPDATE_RETURNING)
    }
}

impl ToSql for &Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let native = match self {
            Assignment::Column { .. } => false,
            Assignment::Row { .. } if f.supports(flavor::ROW_ASSIGNMENT) => true,
            // Oracle takes a row only from a subquery
            Assignment::Row {
                value: RowSource::Select(_),
                ..
            } => f.dialect().family() == Family::Oracle,
            Assignment::Row { .. } => false,
        };

        match self {
            Assignment::Row { columns, value } if native => {
                fmt!(f, "(" Comma(columns.iter().map(Unqualified)) ") = ");
                match value {
                    RowSource::Row(row) => row.to_sql(f)?,
                    RowSource::Select(select) => condition::subquery(f, select)?,
                }
            }
            _ => {
                let mut s = "";
                for (column, value) in self.expand()? {
                    fmt!(f, s Unqualified(&column) " = " value);
                    s = ", ";
                }
            }
        }

        Ok(())
    }
}
