use super::{CompareOp, Condition, Expr, Row, Select, Table, TableAlias};
use crate::{Error, Result};

/// `(a, b) <op> (x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondRowCompare {
    pub lhs: Row,
    pub op: CompareOp,
    pub rhs: Row,
}

/// `(a, b) [NOT] IN ((x, y), ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondRowInList {
    pub row: Row,
    pub list: Vec<Row>,
    pub negate: bool,
}

/// `(a, b) [NOT] IN (select)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondRowInSelect {
    pub row: Row,
    pub select: Box<Select>,
    pub negate: bool,
}

/// `(a, b) IS [NOT] NULL`
#[derive(Debug, Clone, PartialEq)]
pub struct CondRowIsNull {
    pub row: Row,
    pub negate: bool,
}

/// `(a, b) [NOT] BETWEEN [SYMMETRIC] (x, y) AND (z, w)`
#[derive(Debug, Clone, PartialEq)]
pub struct CondRowBetween {
    pub row: Row,
    pub low: Row,
    pub high: Row,
    pub negate: bool,
    pub symmetric: bool,
}

fn check_arity(expected: &Row, actual: &Row) -> Result<()> {
    if expected.len() != actual.len() {
        return Err(Error::invalid_statement(format!(
            "row has {} values, expected {}",
            actual.len(),
            expected.len()
        )));
    }
    Ok(())
}

/// Field-by-field form of a row comparison.
///
/// Ordering operators compare lexicographically, e.g. `(a, b, c) >= (x, y, z)`
/// becomes `(a > x) OR (a = x AND b > y) OR (a = x AND b = y AND c >= z)`.
fn expand_compare(lhs: &Row, op: CompareOp, rhs: &Row) -> Condition {
    let eq = |i: usize| lhs.fields[i].clone().eq(rhs.fields[i].clone());
    let n = lhs.len();

    match op {
        CompareOp::Eq => Condition::and_all((0..n).map(eq)),
        CompareOp::Ne => Condition::not(Condition::and_all((0..n).map(eq))),
        _ => Condition::or_any((0..n).map(|i| {
            let op = if i + 1 == n { op } else { op.strict() };
            let last = Condition::compare(lhs.fields[i].clone(), op, rhs.fields[i].clone());
            Condition::and(Condition::and_all((0..i).map(eq)), last)
        })),
    }
}

impl CondRowCompare {
    pub fn expand(&self) -> Result<Condition> {
        check_arity(&self.lhs, &self.rhs)?;
        Ok(expand_compare(&self.lhs, self.op, &self.rhs))
    }
}

impl CondRowInList {
    /// `IN` as an OR of row equalities; `NOT IN` as an AND of row
    /// inequalities.
    pub fn expand(&self) -> Result<Condition> {
        for row in &self.list {
            check_arity(&self.row, row)?;
        }

        Ok(if self.negate {
            Condition::and_all(
                self.list
                    .iter()
                    .map(|row| expand_compare(&self.row, CompareOp::Ne, row)),
            )
        } else {
            Condition::or_any(
                self.list
                    .iter()
                    .map(|row| expand_compare(&self.row, CompareOp::Eq, row)),
            )
        })
    }
}

impl CondRowIsNull {
    /// `(a, b) IS NULL` is `a IS NULL AND b IS NULL`, and
    /// `(a, b) IS NOT NULL` is `a IS NOT NULL AND b IS NOT NULL`. The latter
    /// is not the negation of the former.
    pub fn expand(&self) -> Condition {
        Condition::and_all(self.row.fields.iter().map(|field| {
            if self.negate {
                field.clone().is_not_null()
            } else {
                field.clone().is_null()
            }
        }))
    }
}

impl CondRowBetween {
    /// Two row comparisons, `row >= low AND row <= high`, each expanded field
    /// by field.
    pub fn expand(&self) -> Result<Condition> {
        check_arity(&self.row, &self.low)?;
        check_arity(&self.row, &self.high)?;

        let between = |low: &Row, high: &Row| {
            Condition::and(
                expand_compare(&self.row, CompareOp::Ge, low),
                expand_compare(&self.row, CompareOp::Le, high),
            )
        };

        let mut condition = between(&self.low, &self.high);

        if self.symmetric {
            condition = Condition::or(condition, between(&self.high, &self.low));
        }

        Ok(if self.negate {
            Condition::not(condition)
        } else {
            condition
        })
    }
}

impl CondRowInSelect {
    /// `EXISTS (SELECT 1 FROM (select) AS t(c1, ..) WHERE t.c1 = a AND ..)`
    pub fn expand(&self) -> Result<Condition> {
        if self.select.fields.len() != self.row.len() {
            return Err(Error::invalid_statement(format!(
                "subquery has {} columns, expected {}",
                self.select.fields.len(),
                self.row.len()
            )));
        }

        let columns: Vec<String> = (1..=self.row.len()).map(|i| format!("c{i}")).collect();
        let alias = TableAlias::new("t").columns(columns.iter().map(String::as_str));

        let filter = Condition::and_all(self.row.fields.iter().zip(&columns).map(
            |(field, column)| Expr::field(["t", column.as_str()]).eq(field.clone()),
        ));

        let select = Select::new()
            .field(Expr::inline(1))
            .from(Table::derived((*self.select).clone(), alias))
            .filter(filter);

        Ok(if self.negate {
            Condition::not_exists(select)
        } else {
            Condition::exists(select)
        })
    }
}

impl From<CondRowCompare> for Condition {
    fn from(value: CondRowCompare) -> Self {
        Condition::RowCompare(value)
    }
}

impl From<CondRowInList> for Condition {
    fn from(value: CondRowInList) -> Self {
        Condition::RowInList(value)
    }
}

impl From<CondRowInSelect> for Condition {
    fn from(value: CondRowInSelect) -> Self {
        Condition::RowInSelect(value)
    }
}

impl From<CondRowIsNull> for Condition {
    fn from(value: CondRowIsNull) -> Self {
        Condition::RowIsNull(value)
    }
}

impl From<CondRowBetween> for Condition {
    fn from(value: CondRowBetween) -> Self {
        Condition::RowBetween(value)
    }
}
