#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;

mod ident;
use ident::{Ident, Qualified, Unqualified};

mod params;
pub use params::{Params, Placeholder, TypedValue};

// Fragment serializers
mod block;
mod cast;
mod condition;
mod ddl;
mod delete;
mod expr;
mod func;
mod insert;
mod join;
mod limit;
mod select;
mod statement;
mod table;
mod try_catch;
mod ty;
mod update;
mod value;

use crate::Settings;

use prism_core::{stmt::Condition, stmt::Statement, Catalog, Dialect, DialectSet, Error, Result};
use std::mem;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// The dialect handles the differences between SQL engines and supported
    /// features.
    dialect: Dialect,

    settings: Settings,

    /// Metadata used by emulations that need keys or column lists
    catalog: Option<&'a Catalog>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Current query depth, used for indentation
    depth: usize,

    /// Render every value as a literal.
    inline: bool,

    /// Render field references with their qualifier.
    qualify: bool,

    /// Render tables with their alias declaration, `t AS a`, instead of just
    /// the reference.
    declare_tables: bool,

    /// Render select fields with their alias declaration.
    declare_fields: bool,

    /// The `AND`, `OR` or `XOR` separator of the junction whose operand is
    /// being rendered.
    junction: Option<&'static str>,

    /// Number of procedural blocks currently open
    block_depth: usize,

    /// Set while rendering a FROM clause that can absorb semi and anti joins
    /// as WHERE predicates.
    semi_anti: Option<Vec<Condition>>,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: Dialect) -> Serializer<'a> {
        Serializer {
            dialect,
            settings: Settings::default(),
            catalog: None,
        }
    }

    pub fn settings(mut self, settings: Settings) -> Serializer<'a> {
        self.settings = settings;
        self
    }

    pub fn catalog(mut self, catalog: &'a Catalog) -> Serializer<'a> {
        self.catalog = Some(catalog);
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Serialize a statement, pushing its bind values onto `params` in the
    /// order their placeholders appear in the SQL text.
    ///
    /// Statements that would do nothing, such as an UPDATE without
    /// assignments, serialize to an empty string.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let span = tracing::debug_span!("serialize", dialect = %self.dialect, kind = stmt.kind());
        let _enter = span.enter();

        if !stmt.is_executable() {
            tracing::debug!("statement is not executable; rendering nothing");
            return Ok(String::new());
        }

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            depth: 0,
            inline: false,
            qualify: true,
            declare_tables: true,
            declare_fields: true,
            junction: None,
            block_depth: 0,
            semi_anti: None,
        };

        stmt.to_sql(&mut fmt)?;

        tracing::debug!(sql = %ret, "serialized statement");
        Ok(ret)
    }
}

impl<T: Params> Formatter<'_, T> {
    fn dialect(&self) -> Dialect {
        self.serializer.dialect
    }

    fn settings(&self) -> &Settings {
        &self.serializer.settings
    }

    fn supports(&self, set: DialectSet) -> bool {
        set.contains(self.serializer.dialect)
    }

    fn unsupported(&self, feature: &str) -> Error {
        Error::unsupported_feature(self.serializer.dialect, feature)
    }

    /// Starts a new clause: a space, or a new line at the current depth when
    /// rendering formatted SQL.
    fn clause(&mut self, keyword: &str) {
        if self.serializer.settings.render_formatted {
            self.dst.push('\n');
            for _ in 0..self.depth {
                self.dst.push_str(&self.serializer.settings.indentation);
            }
        } else {
            self.dst.push(' ');
        }
        self.dst.push_str(keyword);
    }

    /// Renders into a separate buffer with every value inlined. Used for SQL
    /// that ends up embedded in a string literal or procedural block.
    fn nested(&mut self, render: impl FnOnce(&mut Formatter<'_, T>) -> Result<()>) -> Result<String> {
        let mut dst = String::new();

        let mut nested = Formatter {
            serializer: self.serializer,
            dst: &mut dst,
            params: &mut *self.params,
            depth: 0,
            inline: true,
            qualify: self.qualify,
            declare_tables: true,
            declare_fields: true,
            junction: None,
            block_depth: self.block_depth,
            semi_anti: None,
        };

        render(&mut nested)?;
        Ok(dst)
    }

    /// Renders a subquery one level deeper, with its select fields declared.
    fn subquery(&mut self, render: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.depth += 1;
        let semi_anti = mem::take(&mut self.semi_anti);
        let junction = self.junction.take();
        let declare_fields = mem::replace(&mut self.declare_fields, true);
        let ret = render(self);
        self.declare_fields = declare_fields;
        self.junction = junction;
        self.semi_anti = semi_anti;
        self.depth -= 1;
        ret
    }
}
