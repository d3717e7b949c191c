use super::{flavor, value, Comma, Formatter, Params, ToSql};

use prism_core::{
    stmt::{
        CondBetween, CondExists, CondInList, CondInSelect, CondIsDistinctFrom, CondLike,
        CondRowBetween, CondRowCompare, CondRowInList, CondRowInSelect, CondRowIsNull, Condition,
        Row, Select,
    },
    Family, Result,
};
use std::mem;

/// An operand of `AND`, `OR` or `XOR`, parenthesized when it binds less
/// tightly than its parent.
struct Operand<'a> {
    condition: &'a Condition,
    parent: &'static str,
}

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Condition::True | Condition::False => {
                let value = self.is_true();
                let literal = match (f.supports(flavor::BOOLEAN_TYPE), value) {
                    (true, true) => "TRUE",
                    (true, false) => "FALSE",
                    (false, true) => "1 = 1",
                    (false, false) => "1 = 0",
                };
                fmt!(f, literal);
            }
            Condition::Compare(cond) => fmt!(f, cond.lhs " " cond.op.as_str() " " cond.rhs),
            Condition::Like(cond) => cond.to_sql(f)?,
            Condition::Between(cond) => cond.to_sql(f)?,
            Condition::InList(cond) => cond.to_sql(f)?,
            Condition::InSelect(cond) => cond.to_sql(f)?,
            Condition::IsNull(cond) => {
                let not = if cond.negate { "NOT " } else { "" };
                fmt!(f, cond.expr " IS " not "NULL");
            }
            Condition::IsDistinctFrom(cond) => cond.to_sql(f)?,
            Condition::RowCompare(cond) => cond.to_sql(f)?,
            Condition::RowInList(cond) => cond.to_sql(f)?,
            Condition::RowInSelect(cond) => cond.to_sql(f)?,
            Condition::RowIsNull(cond) => cond.to_sql(f)?,
            Condition::RowBetween(cond) => cond.to_sql(f)?,
            Condition::Exists(cond) => cond.to_sql(f)?,
            Condition::Not(cond) => operand_of(f, None, |f| {
                fmt!(f, "NOT (" cond ")");
                Ok(())
            })?,
            Condition::And(operands) => junction(f, operands, " AND ", &Condition::True)?,
            Condition::Or(operands) => junction(f, operands, " OR ", &Condition::False)?,
            Condition::Xor(lhs, rhs) => {
                if f.supports(flavor::XOR) {
                    let lhs = Operand {
                        condition: lhs,
                        parent: " XOR ",
                    };
                    let rhs = Operand {
                        condition: rhs,
                        parent: " XOR ",
                    };
                    fmt!(f, lhs " XOR " rhs);
                } else {
                    emulated(f, &Condition::expand_xor(lhs, rhs))?;
                }
            }
            Condition::Field(expr) => {
                if f.supports(flavor::BOOLEAN_TYPE) {
                    fmt!(f, expr);
                } else {
                    fmt!(f, expr " = 1");
                }
            }
        }

        Ok(())
    }
}

fn junction<P: Params>(
    f: &mut Formatter<'_, P>,
    operands: &[Condition],
    separator: &'static str,
    empty: &Condition,
) -> Result<()> {
    match operands {
        [] => empty.to_sql(f),
        [only] => only.to_sql(f),
        _ => {
            let operands = operands.iter().map(|condition| Operand {
                condition,
                parent: separator,
            });
            fmt!(f, super::Delimited(operands, separator));
            Ok(())
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let condition = self.condition;

        if needs_parens(condition, Some(self.parent)) {
            operand_of(f, None, |f| {
                fmt!(f, "(" condition ")");
                Ok(())
            })
        } else {
            operand_of(f, Some(self.parent), |f| condition.to_sql(f))
        }
    }
}

/// Whether `condition` must be parenthesized as an operand of `parent`.
fn needs_parens(condition: &Condition, parent: Option<&str>) -> bool {
    let Some(parent) = parent else {
        return false;
    };

    match condition {
        Condition::And(operands) | Condition::Or(operands) if operands.len() < 2 => false,
        Condition::And(_) => parent != " AND ",
        Condition::Or(_) => parent != " OR ",
        Condition::Xor(..) => true,
        _ => false,
    }
}

/// Runs `render` with `parent` recorded as the junction the condition being
/// rendered is an operand of.
fn operand_of<P: Params>(
    f: &mut Formatter<'_, P>,
    parent: Option<&'static str>,
    render: impl FnOnce(&mut Formatter<'_, P>) -> Result<()>,
) -> Result<()> {
    let outer = mem::replace(&mut f.junction, parent);
    let ret = render(f);
    f.junction = outer;
    ret
}

/// Renders the rewrite of a predicate the dialect cannot spell. A rewrite
/// into `AND`/`OR` takes the place of a single predicate, so it is
/// parenthesized when the enclosing junction binds differently.
fn emulated<P: Params>(f: &mut Formatter<'_, P>, rewrite: &Condition) -> Result<()> {
    if needs_parens(rewrite, f.junction) {
        operand_of(f, None, |f| {
            fmt!(f, "(" rewrite ")");
            Ok(())
        })
    } else {
        rewrite.to_sql(f)
    }
}

impl ToSql for &CondLike {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.ignore_case && !f.supports(flavor::ILIKE) {
            return Condition::Like(self.expand_ignore_case()).to_sql(f);
        }

        let not = if self.negate { "NOT " } else { "" };
        let like = if self.ignore_case { "ILIKE " } else { "LIKE " };
        fmt!(f, self.expr " " not like self.pattern);

        if let Some(escape) = self.escape {
            fmt!(f, " ESCAPE ");
            value::string(f, &escape.to_string());
        }

        Ok(())
    }
}

impl ToSql for &CondBetween {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.symmetric && !f.supports(flavor::BETWEEN_SYMMETRIC) {
            if let Some(expanded) = self.expand_symmetric() {
                return emulated(f, &expanded);
            }
        }

        let not = if self.negate { "NOT " } else { "" };
        let symmetric = if self.symmetric { "SYMMETRIC " } else { "" };
        fmt!(f, self.expr " " not "BETWEEN " symmetric self.low " AND " self.high);
        Ok(())
    }
}

impl ToSql for &CondInList {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let not = if self.negate { "NOT " } else { "" };

        if self.list.is_empty() {
            let empty = if self.negate { "1 = 1" } else { "1 = 0" };
            fmt!(f, empty);
            return Ok(());
        }

        if f.dialect().family() == Family::Oracle && self.list.len() > flavor::IN_LIST_LIMIT {
            let separator = if self.negate { " AND " } else { " OR " };

            fmt!(f, "(");
            let mut s = "";
            for chunk in self.list.chunks(flavor::IN_LIST_LIMIT) {
                fmt!(f, s self.expr " " not "IN (" Comma(chunk) ")");
                s = separator;
            }
            fmt!(f, ")");
            return Ok(());
        }

        fmt!(f, self.expr " " not "IN (" Comma(&self.list) ")");
        Ok(())
    }
}

impl ToSql for &CondInSelect {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let not = if self.negate { "NOT " } else { "" };
        fmt!(f, self.expr " " not "IN ");
        subquery(f, &self.select)
    }
}

impl ToSql for &CondIsDistinctFrom {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (lhs, rhs) = (&self.lhs, &self.rhs);

        if f.supports(flavor::IS_DISTINCT_FROM) {
            let not = if self.negate { "NOT " } else { "" };
            fmt!(f, lhs " IS " not "DISTINCT FROM " rhs);
            return Ok(());
        }

        match f.dialect().family() {
            Family::Sqlite if self.negate => fmt!(f, lhs " IS " rhs),
            Family::Sqlite => fmt!(f, lhs " IS NOT " rhs),
            Family::MySql | Family::MariaDb if self.negate => fmt!(f, lhs " <=> " rhs),
            Family::MySql | Family::MariaDb => fmt!(f, "NOT (" lhs " <=> " rhs ")"),
            _ => emulated(f, &self.expand())?,
        }

        Ok(())
    }
}

impl ToSql for &CondRowCompare {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.supports(flavor::ROW_VALUES) && self.lhs.len() == self.rhs.len() {
            fmt!(f, self.lhs " " self.op.as_str() " " self.rhs);
            Ok(())
        } else {
            emulated(f, &self.expand()?)
        }
    }
}

impl ToSql for &CondRowInList {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.list.is_empty() {
            return Condition::from(self.negate).to_sql(f);
        }

        if f.supports(flavor::ROW_IN) && self.list.iter().all(|row| row.len() == self.row.len()) {
            let not = if self.negate { "NOT " } else { "" };
            fmt!(f, self.row " " not "IN (" Comma(&self.list) ")");
            Ok(())
        } else {
            emulated(f, &self.expand()?)
        }
    }
}

impl ToSql for &CondRowInSelect {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.supports(flavor::ROW_IN) {
            let not = if self.negate { "NOT " } else { "" };
            fmt!(f, self.row " " not "IN ");
            subquery(f, &self.select)
        } else {
            emulated(f, &self.expand()?)
        }
    }
}

impl ToSql for &CondRowIsNull {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.supports(flavor::ROW_IS_NULL) {
            let not = if self.negate { "NOT " } else { "" };
            fmt!(f, self.row " IS " not "NULL");
            Ok(())
        } else {
            emulated(f, &self.expand())
        }
    }
}

impl ToSql for &CondRowBetween {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let native = f.supports(flavor::ROW_BETWEEN)
            && (!self.symmetric || f.supports(flavor::BETWEEN_SYMMETRIC))
            && self.low.len() == self.row.len()
            && self.high.len() == self.row.len();

        if native {
            let not = if self.negate { "NOT " } else { "" };
            let symmetric = if self.symmetric { "SYMMETRIC " } else { "" };
            fmt!(f, self.row " " not "BETWEEN " symmetric self.low " AND " self.high);
            Ok(())
        } else {
            emulated(f, &self.expand()?)
        }
    }
}

impl ToSql for &CondExists {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let not = if self.negate { "NOT " } else { "" };
        fmt!(f, not "EXISTS ");
        subquery(f, &self.select)
    }
}

impl ToSql for &Row {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "(" Comma(&self.fields) ")");
        Ok(())
    }
}

/// `(select)`, one level deeper.
pub(super) fn subquery<P: Params>(f: &mut Formatter<'_, P>, select: &Select) -> Result<()> {
    fmt!(f, "(");
    f.subquery(|f| select.to_sql(f))?;
    fmt!(f, ")");
    Ok(())
}
