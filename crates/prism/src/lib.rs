//! Build SQL statements once, render them for any supported database.
//!
//! ```
//! use prism::prelude::*;
//!
//! let stmt = Select::new()
//!     .field(Expr::field("name"))
//!     .from("users")
//!     .filter(Expr::field("id").eq(1))
//!     .limit(10);
//!
//! let rendered = prism::render(&stmt.into(), Dialect::SqlServer, &Settings::default()).unwrap();
//! assert_eq!(rendered.sql, "SELECT TOP 10 [name] FROM [users] WHERE [id] = @p1");
//! assert_eq!(rendered.params.len(), 1);
//! ```

pub use prism_core::{
    schema, stmt, Catalog, Dialect, DialectSet, Error, Family, IntoError, Name, Result,
};
pub use prism_sql::{
    ExecuteWithoutWhere, ParamType, RenderNameCase, RenderQuotedNames, Serializer, Settings,
    TypedValue,
};

pub mod prelude {
    pub use crate::{Dialect, Rendered, Settings};
    pub use prism_core::stmt::{
        Block, ColumnDef, Condition, CreateIndex, CreateSequence, CreateTable, Cte, DataType,
        Delete, Direction, DropIndex, DropSequence, DropTable, Expr, Insert, Select, Statement,
        Table, TableNamed, Truncate, Update, Value,
    };
}

use prism_core::stmt::Statement;

/// SQL text together with its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub sql: String,
    pub params: Vec<TypedValue>,
}

impl Rendered {
    /// Returns `true` when the statement had nothing to execute.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Render `stmt` for `dialect`.
pub fn render(stmt: &Statement, dialect: Dialect, settings: &Settings) -> Result<Rendered> {
    render_with(Serializer::new(dialect).settings(settings.clone()), stmt)
}

/// Render `stmt` for `dialect`, using `catalog` for emulations that need
/// table metadata, such as primary keys or a table's full column list.
pub fn render_with_catalog(
    stmt: &Statement,
    dialect: Dialect,
    settings: &Settings,
    catalog: &Catalog,
) -> Result<Rendered> {
    render_with(
        Serializer::new(dialect)
            .settings(settings.clone())
            .catalog(catalog),
        stmt,
    )
}

fn render_with(serializer: Serializer<'_>, stmt: &Statement) -> Result<Rendered> {
    let mut params: Vec<TypedValue> = vec![];
    let sql = serializer.serialize(stmt, &mut params)?;

    tracing::trace!(params = params.len(), "rendered statement");

    Ok(Rendered { sql, params })
}
