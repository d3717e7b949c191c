use prism_core::stmt::{Expr, Select, Statement, Table, TableNamed};
use prism_core::{Dialect, Result};
use prism_sql::{RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

fn serialize(dialect: Dialect, stmt: impl Into<Statement>) -> Result<String> {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    };

    let mut params: Vec<TypedValue> = vec![];
    Serializer::new(dialect)
        .settings(settings)
        .serialize(&stmt.into(), &mut params)
}

fn sql(dialect: Dialect, stmt: impl Into<Statement>) -> String {
    serialize(dialect, stmt).unwrap()
}

fn author() -> Table {
    TableNamed::new("author").columns(["id", "name"]).into()
}

fn book() -> Table {
    TableNamed::new("book").columns(["id", "title"]).into()
}

fn on_author() -> prism_core::stmt::Condition {
    Expr::field(["author", "id"]).eq(Expr::field(["book", "author_id"]))
}

#[test]
fn left_join_on() {
    let stmt = Select::new().from(author().left_join(book()).on(on_author()));

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT * FROM author LEFT OUTER JOIN book ON author.id = book.author_id"
    );
}

#[test]
fn natural_join_is_native_or_expanded() {
    let stmt = || Select::new().from(author().natural_join(book()));

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author NATURAL JOIN book"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "SELECT * FROM author JOIN book ON author.id = book.id"
    );
}

#[test]
fn using_is_native_or_expanded() {
    let stmt = || Select::new().from(author().join(book()).using(["id"]));

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author JOIN book USING (id)"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "SELECT * FROM author JOIN book ON author.id = book.id"
    );
}

#[test]
fn full_join_is_unsupported_on_mysql() {
    let stmt = Select::new().from(author().full_join(book()).on(on_author()));

    let err = serialize(Dialect::MySql, stmt).unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn semi_join_becomes_exists() {
    let stmt = || Select::new().from(author().left_semi_join(book()).on(on_author()));

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author WHERE EXISTS (SELECT 1 FROM book WHERE author.id = book.author_id)"
    );
    assert_eq!(
        sql(Dialect::DuckDb, stmt()),
        "SELECT * FROM author SEMI JOIN book ON author.id = book.author_id"
    );
}

#[test]
fn anti_join_is_and_ed_with_the_filter() {
    let stmt = Select::new()
        .from(author().left_anti_join(book()).on(on_author()))
        .filter(Expr::field("name").eq(Expr::inline("x")));

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT * FROM author WHERE name = 'x' AND NOT EXISTS (SELECT 1 FROM book WHERE author.id = book.author_id)"
    );
}

#[test]
fn cross_apply_as_lateral() {
    let stmt = || Select::new().from(author().cross_apply(book()));

    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "SELECT * FROM author CROSS APPLY book"
    );
    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author CROSS JOIN LATERAL book"
    );

    let err = serialize(Dialect::MySql, stmt()).unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn straight_join_outside_mysql() {
    let stmt = || Select::new().from(author().straight_join(book()).on(on_author()));

    assert_eq!(
        sql(Dialect::MySql, stmt()),
        "SELECT * FROM author STRAIGHT_JOIN book ON author.id = book.author_id"
    );
    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author JOIN book ON author.id = book.author_id"
    );
}

#[test]
fn nested_join_on_the_right_is_parenthesized() {
    let rhs: Table = book().cross_join(Table::named("shelf"));
    let stmt = Select::new().from(author().cross_join(rhs));

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT * FROM author CROSS JOIN (book CROSS JOIN shelf)"
    );
}

#[test]
fn aliased_tables() {
    let stmt = Select::new()
        .field(Expr::field(["a", "name"]))
        .from(TableNamed::new("author").alias("a"));

    assert_eq!(
        sql(Dialect::Postgres, stmt.clone()),
        "SELECT a.name FROM author AS a"
    );
    assert_eq!(sql(Dialect::Oracle, stmt), "SELECT a.name FROM author a");
}

#[test]
fn natural_join_without_shared_columns() {
    let tag = || -> Table { TableNamed::new("tag").columns(["label"]).into() };
    let stmt = || Select::new().from(author().natural_join(tag()));

    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "SELECT * FROM author JOIN tag ON 1 = 1"
    );
    assert_eq!(
        sql(Dialect::BigQuery, stmt()),
        "SELECT * FROM author JOIN tag ON TRUE"
    );
    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT * FROM author NATURAL JOIN tag"
    );
}
