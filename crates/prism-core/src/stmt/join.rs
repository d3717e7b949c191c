use super::{Condition, Expr, Select, Table};
use super::TableNamed;
use crate::{Catalog, Error, Name, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    Cross,
    Natural,
    Left,
    Right,
    Full,
    NaturalLeft,
    NaturalRight,
    NaturalFull,
    LeftSemi,
    LeftAnti,
    CrossApply,
    OuterApply,
    Straight,
}

impl JoinType {
    pub fn is_natural(self) -> bool {
        matches!(
            self,
            JoinType::Natural
                | JoinType::NaturalLeft
                | JoinType::NaturalRight
                | JoinType::NaturalFull
        )
    }

    pub fn is_semi_or_anti(self) -> bool {
        matches!(self, JoinType::LeftSemi | JoinType::LeftAnti)
    }

    pub fn is_apply(self) -> bool {
        matches!(self, JoinType::CrossApply | JoinType::OuterApply)
    }

    /// Join types that take an `ON` or `USING` clause.
    pub fn is_qualified(self) -> bool {
        matches!(
            self,
            JoinType::Inner
                | JoinType::Left
                | JoinType::Right
                | JoinType::Full
                | JoinType::LeftSemi
                | JoinType::LeftAnti
                | JoinType::Straight
        )
    }

    /// The non-natural counterpart of a natural join.
    pub fn without_natural(self) -> JoinType {
        match self {
            JoinType::Natural => JoinType::Inner,
            JoinType::NaturalLeft => JoinType::Left,
            JoinType::NaturalRight => JoinType::Right,
            JoinType::NaturalFull => JoinType::Full,
            other => other,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN",
            JoinType::Cross => "CROSS JOIN",
            JoinType::Natural => "NATURAL JOIN",
            JoinType::Left => "LEFT OUTER JOIN",
            JoinType::Right => "RIGHT OUTER JOIN",
            JoinType::Full => "FULL OUTER JOIN",
            JoinType::NaturalLeft => "NATURAL LEFT OUTER JOIN",
            JoinType::NaturalRight => "NATURAL RIGHT OUTER JOIN",
            JoinType::NaturalFull => "NATURAL FULL OUTER JOIN",
            JoinType::LeftSemi => "SEMI JOIN",
            JoinType::LeftAnti => "ANTI JOIN",
            JoinType::CrossApply => "CROSS APPLY",
            JoinType::OuterApply => "OUTER APPLY",
            JoinType::Straight => "STRAIGHT_JOIN",
        }
    }
}

/// A join between two relations.
///
/// The exposed field list is computed when the join is built: both sides
/// concatenated, or only the left side for semi and anti joins.
#[derive(Debug, Clone, PartialEq)]
pub struct TableJoin {
    pub lhs: Table,
    pub rhs: Table,
    pub join_type: JoinType,
    pub on: Option<Condition>,
    pub using: Vec<Name>,
    pub(super) fields: Vec<Name>,
}

impl TableJoin {
    pub fn new(
        lhs: Table,
        rhs: Table,
        join_type: JoinType,
        on: Option<Condition>,
        using: Vec<Name>,
    ) -> TableJoin {
        let mut fields = lhs.fields().to_vec();

        if !join_type.is_semi_or_anti() {
            fields.extend_from_slice(rhs.fields());
        }

        TableJoin {
            lhs,
            rhs,
            join_type,
            on,
            using,
            fields,
        }
    }

    /// Columns both sides share by unqualified name, as `(lhs, rhs)` pairs.
    pub fn common_fields(&self) -> Vec<(&Name, &Name)> {
        self.lhs
            .fields()
            .iter()
            .filter_map(|lhs| {
                self.rhs
                    .fields()
                    .iter()
                    .find(|rhs| lhs.eq_unqualified(rhs))
                    .map(|rhs| (lhs, rhs))
            })
            .collect()
    }

    /// The `ON` condition a natural join stands for: equality over every
    /// common column. `TRUE` when the sides share no column.
    pub fn natural_condition(&self) -> Condition {
        Condition::and_all(
            self.common_fields()
                .into_iter()
                .map(|(lhs, rhs)| Expr::field(lhs).eq(Expr::field(rhs))),
        )
    }

    /// The `ON` condition a `USING` clause stands for.
    pub fn using_condition(&self) -> Condition {
        let resolve = |table: &Table, column: &Name| {
            table
                .fields()
                .iter()
                .find(|field| field.eq_unqualified(column))
                .cloned()
                .or_else(|| table.reference().map(|name| name.append(column)))
                .unwrap_or_else(|| column.clone())
        };

        Condition::and_all(self.using.iter().map(|column| {
            Expr::field(resolve(&self.lhs, column)).eq(Expr::field(resolve(&self.rhs, column)))
        }))
    }

    /// The join condition, whichever way it was given.
    pub fn condition(&self) -> Condition {
        if self.join_type.is_natural() {
            self.natural_condition()
        } else if !self.using.is_empty() {
            self.using_condition()
        } else {
            self.on.clone().unwrap_or(Condition::True)
        }
    }

    /// A semi join as `EXISTS (SELECT 1 FROM rhs WHERE cond)`, an anti join
    /// as `NOT EXISTS (..)`.
    pub fn to_exists(&self) -> Condition {
        let select = Select::new()
            .field(Expr::inline(1))
            .from(self.rhs.clone())
            .filter(self.condition());

        if self.join_type == JoinType::LeftAnti {
            Condition::not_exists(select)
        } else {
            Condition::exists(select)
        }
    }
}

/// First phase of building a qualified join; [`JoinBuilder::build`] yields
/// the immutable [`Table::Join`].
#[derive(Debug, Clone)]
pub struct JoinBuilder {
    lhs: Table,
    rhs: Table,
    join_type: JoinType,
    on: Option<Condition>,
    using: Vec<Name>,
}

impl JoinBuilder {
    pub fn on(mut self, condition: impl Into<Condition>) -> JoinBuilder {
        self.on = Some(match self.on.take() {
            Some(on) => Condition::and(on, condition),
            None => condition.into(),
        });
        self
    }

    pub fn and(self, condition: impl Into<Condition>) -> JoinBuilder {
        self.on(condition)
    }

    pub fn or(mut self, condition: impl Into<Condition>) -> JoinBuilder {
        self.on = Some(match self.on.take() {
            Some(on) => Condition::or(on, condition),
            None => condition.into(),
        });
        self
    }

    pub fn using<I, S>(mut self, columns: I) -> JoinBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.using = columns.into_iter().map(|c| Name::new([c])).collect();
        self
    }

    /// Joins on the single foreign key relating the two sides.
    ///
    /// Foreign keys are searched in both directions between every named table
    /// on the left and the named table on the right. Fails when no key or
    /// more than one key qualifies.
    pub fn on_key(self, catalog: &Catalog) -> Result<JoinBuilder> {
        let Some(rhs) = self.rhs.named_tables().last().copied() else {
            return Err(Error::invalid_statement(
                "ON KEY requires a named table on the right-hand side",
            ));
        };
        let lhs_tables = self.lhs.named_tables();
        let lhs_name = lhs_tables
            .last()
            .map(|table| table.name.clone())
            .unwrap_or_default();

        let Some(rhs_meta) = catalog.table(&rhs.name) else {
            return Err(Error::key_not_found(&lhs_name, &rhs.name));
        };

        // (foreign key name, join condition)
        let mut lhs_to_rhs = vec![];
        let mut rhs_to_lhs = vec![];

        for lhs in &lhs_tables {
            let Some(lhs_meta) = catalog.table(&lhs.name) else {
                continue;
            };

            for fk in lhs_meta.references(rhs_meta) {
                let condition = key_condition(lhs, rhs, &fk.columns, &fk.referenced_columns);
                lhs_to_rhs.push((fk.name.clone(), condition));
            }

            for fk in rhs_meta.references(lhs_meta) {
                let condition = key_condition(rhs, lhs, &fk.columns, &fk.referenced_columns);
                rhs_to_lhs.push((fk.name.clone(), condition));
            }
        }

        match lhs_to_rhs.len() + rhs_to_lhs.len() {
            0 => Err(Error::key_not_found(&lhs_name, &rhs.name)),
            1 => {
                let (_, condition) = lhs_to_rhs
                    .into_iter()
                    .chain(rhs_to_lhs)
                    .next()
                    .ok_or_else(|| Error::key_not_found(&lhs_name, &rhs.name))?;
                Ok(self.on(condition))
            }
            _ => Err(Error::ambiguous_key(
                &lhs_name,
                &rhs.name,
                lhs_to_rhs.into_iter().map(|(name, _)| name).collect(),
                rhs_to_lhs.into_iter().map(|(name, _)| name).collect(),
            )),
        }
    }

    pub fn build(self) -> Table {
        TableJoin::new(self.lhs, self.rhs, self.join_type, self.on, self.using).into()
    }
}

fn key_condition(
    from: &TableNamed,
    to: &TableNamed,
    columns: &[String],
    referenced: &[String],
) -> Condition {
    Condition::and_all(columns.iter().zip(referenced).map(|(column, referenced)| {
        Expr::field(from.reference().append(column.as_str()))
            .eq(Expr::field(to.reference().append(referenced.as_str())))
    }))
}

impl From<JoinBuilder> for Table {
    fn from(value: JoinBuilder) -> Self {
        value.build()
    }
}

impl Table {
    fn qualified_join(self, rhs: impl Into<Table>, join_type: JoinType) -> JoinBuilder {
        JoinBuilder {
            lhs: self,
            rhs: rhs.into(),
            join_type,
            on: None,
            using: vec![],
        }
    }

    fn unqualified_join(self, rhs: impl Into<Table>, join_type: JoinType) -> Table {
        TableJoin::new(self, rhs.into(), join_type, None, vec![]).into()
    }

    pub fn join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::Inner)
    }

    pub fn left_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::Left)
    }

    pub fn right_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::Right)
    }

    pub fn full_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::Full)
    }

    pub fn left_semi_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::LeftSemi)
    }

    pub fn left_anti_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::LeftAnti)
    }

    pub fn straight_join(self, rhs: impl Into<Table>) -> JoinBuilder {
        self.qualified_join(rhs, JoinType::Straight)
    }

    pub fn cross_join(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::Cross)
    }

    pub fn natural_join(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::Natural)
    }

    pub fn natural_left_join(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::NaturalLeft)
    }

    pub fn natural_right_join(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::NaturalRight)
    }

    pub fn natural_full_join(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::NaturalFull)
    }

    pub fn cross_apply(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::CrossApply)
    }

    pub fn outer_apply(self, rhs: impl Into<Table>) -> Table {
        self.unqualified_join(rhs, JoinType::OuterApply)
    }
}
