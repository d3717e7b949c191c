use super::{flavor, Comma, Formatter, Params, ToSql, Unqualified};

use prism_core::{
    stmt::{Condition, JoinType, Table, TableJoin},
    Result,
};

/// The right-hand side of a join, parenthesized when it is itself a join.
struct Rhs<'a>(&'a Table);

impl ToSql for Rhs<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Table::Join(_) => fmt!(f, "(" self.0 ")"),
            table => table.to_sql(f)?,
        }
        Ok(())
    }
}

impl ToSql for &TableJoin {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let join_type = self.join_type;

        if join_type.is_semi_or_anti() {
            return semi_anti(f, self);
        }

        if join_type.is_apply() {
            return apply(f, self);
        }

        if join_type.is_natural() && !f.supports(flavor::NATURAL_JOIN) {
            let condition = self.natural_condition();

            if condition.is_true() {
                tracing::debug!(
                    lhs = ?self.lhs.reference(),
                    rhs = ?self.rhs.reference(),
                    "natural join sides share no column; joining on an always-true condition"
                );
            }

            return qualified(f, self, join_type.without_natural(), &condition);
        }

        match join_type {
            JoinType::Cross | JoinType::Natural => {
                fmt!(f, self.lhs " " join_type.keyword() " " Rhs(&self.rhs));
                Ok(())
            }
            JoinType::NaturalLeft | JoinType::NaturalRight | JoinType::NaturalFull => {
                check_outer(f, join_type.without_natural())?;
                fmt!(f, self.lhs " " join_type.keyword() " " Rhs(&self.rhs));
                Ok(())
            }
            _ if !self.using.is_empty() => {
                if f.supports(flavor::USING) {
                    check_outer(f, join_type)?;
                    let keyword = keyword(f, join_type);
                    let using = self.using.iter().map(Unqualified);
                    fmt!(f, self.lhs " " keyword " " Rhs(&self.rhs) " USING (" Comma(using) ")");
                    Ok(())
                } else {
                    qualified(f, self, join_type, &self.using_condition())
                }
            }
            _ => {
                let on = self.on.clone().unwrap_or(Condition::True);
                qualified(f, self, join_type, &on)
            }
        }
    }
}

/// `lhs <join> rhs ON condition`
fn qualified<P: Params>(
    f: &mut Formatter<'_, P>,
    join: &TableJoin,
    join_type: JoinType,
    condition: &Condition,
) -> Result<()> {
    check_outer(f, join_type)?;

    let keyword = keyword(f, join_type);
    fmt!(f, join.lhs " " keyword " " Rhs(&join.rhs) " ON " condition);
    Ok(())
}

fn keyword<P: Params>(f: &Formatter<'_, P>, join_type: JoinType) -> &'static str {
    match join_type {
        JoinType::Straight if !f.supports(flavor::STRAIGHT_JOIN) => JoinType::Inner.keyword(),
        join_type => join_type.keyword(),
    }
}

fn check_outer<P: Params>(f: &Formatter<'_, P>, join_type: JoinType) -> Result<()> {
    match join_type {
        JoinType::Full if f.supports(flavor::NO_FULL_JOIN) => Err(f.unsupported("FULL JOIN")),
        JoinType::Right | JoinType::Full if f.supports(flavor::NO_RIGHT_JOIN) => {
            Err(f.unsupported("RIGHT and FULL JOIN"))
        }
        _ => Ok(()),
    }
}

/// Semi and anti joins render natively, or become `EXISTS` predicates
/// collected for the enclosing WHERE clause.
fn semi_anti<P: Params>(f: &mut Formatter<'_, P>, join: &TableJoin) -> Result<()> {
    if f.supports(flavor::SEMI_ANTI_JOIN) {
        return qualified(f, join, join.join_type, &join.condition());
    }

    let Some(collected) = f.semi_anti.as_mut() else {
        return Err(f.unsupported("semi and anti joins outside of a WHERE-capable query"));
    };

    collected.push(join.to_exists());
    join.lhs.to_sql(f)
}

/// `CROSS APPLY` and `OUTER APPLY`, or their `LATERAL` join equivalents.
fn apply<P: Params>(f: &mut Formatter<'_, P>, join: &TableJoin) -> Result<()> {
    let outer = join.join_type == JoinType::OuterApply;

    if f.supports(flavor::APPLY) {
        fmt!(f, join.lhs " " join.join_type.keyword() " " Rhs(&join.rhs));
        return Ok(());
    }

    if !f.supports(flavor::APPLY_AS_LATERAL) {
        return Err(f.unsupported("APPLY"));
    }

    let rhs = match &join.rhs {
        Table::Lateral(table) => &**table,
        table => table,
    };

    if outer {
        let on = &Condition::True;
        fmt!(f, join.lhs " LEFT OUTER JOIN LATERAL " Rhs(rhs) " ON " on);
    } else {
        fmt!(f, join.lhs " CROSS JOIN LATERAL " Rhs(rhs));
    }

    Ok(())
}
