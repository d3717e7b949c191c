use prism_core::schema::{Schema, TableMeta};
use prism_core::stmt::{DataType, Delete, Expr, Insert, RowSource, Statement, Update, Value};
use prism_core::{Catalog, Dialect, Result};
use prism_sql::{ExecuteWithoutWhere, RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

fn unquoted() -> Settings {
    Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    }
}

fn serialize(dialect: Dialect, stmt: impl Into<Statement>) -> Result<String> {
    let mut params: Vec<TypedValue> = vec![];
    Serializer::new(dialect)
        .settings(unquoted())
        .serialize(&stmt.into(), &mut params)
}

fn sql(dialect: Dialect, stmt: impl Into<Statement>) -> String {
    serialize(dialect, stmt).unwrap()
}

fn catalog() -> Catalog {
    Catalog::new().schema(
        Schema::new("public").table(
            TableMeta::new("t")
                .column("id", DataType::Integer)
                .column("a", DataType::Integer)
                .primary_key("pk_t", &["id"]),
        ),
    )
}

#[test]
fn insert_values_binds_in_order() {
    let stmt = Insert::new("t")
        .columns(["a", "b"])
        .values([1, 2])
        .values([3, 4]);

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(Dialect::Postgres)
        .settings(unquoted())
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    assert_eq!(sql, "INSERT INTO t (a, b) VALUES ($1, $2), ($3, $4)");

    let values: Vec<Value> = params.into_iter().map(|param| param.value).collect();
    assert_eq!(
        values,
        vec![Value::I32(1), Value::I32(2), Value::I32(3), Value::I32(4)]
    );
}

#[test]
fn multi_row_insert_without_row_constructors() {
    let stmt = Insert::new("t").columns(["a"]).values([1]).values([2]);

    assert_eq!(
        sql(Dialect::Oracle21c, stmt),
        "INSERT INTO t (a) SELECT :1 FROM DUAL UNION ALL SELECT :2 FROM DUAL"
    );
}

#[test]
fn insert_on_conflict_do_nothing() {
    let stmt = || Insert::new("t").columns(["a"]).values([1]).on_conflict_do_nothing();

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "INSERT INTO t (a) VALUES ($1) ON CONFLICT DO NOTHING"
    );
    assert_eq!(
        sql(Dialect::MySql, stmt()),
        "INSERT IGNORE INTO t (a) VALUES (?)"
    );
    assert!(serialize(Dialect::SqlServer, stmt())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn insert_returning() {
    let stmt = || {
        Insert::new("t")
            .columns(["a"])
            .values([1])
            .returning(Expr::field("id"))
    };

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "INSERT INTO t (a) VALUES ($1) RETURNING id"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "INSERT INTO t (a) OUTPUT INSERTED.id VALUES (@p1)"
    );
    assert!(serialize(Dialect::MySql, stmt())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn insert_default_values() {
    let stmt = || Insert::new("t").default_values();

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "INSERT INTO t DEFAULT VALUES"
    );
    assert_eq!(sql(Dialect::MySql, stmt()), "INSERT INTO t () VALUES ()");

    // Oracle needs the column list from the catalog
    assert!(serialize(Dialect::Oracle, stmt())
        .unwrap_err()
        .is_invalid_statement());

    let catalog = catalog();
    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(Dialect::Oracle)
        .settings(unquoted())
        .catalog(&catalog)
        .serialize(&stmt().into(), &mut params)
        .unwrap();
    assert_eq!(sql, "INSERT INTO t (id, a) VALUES (DEFAULT, DEFAULT)");
}

#[test]
fn update_columns_and_rows() {
    let stmt = Update::new("t")
        .set("a", 1)
        .filter(Expr::field("id").eq(2));
    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "UPDATE t SET a = $1 WHERE id = $2"
    );

    let row = || Update::new("t").set_row(&["a", "b"], RowSource::Row([1, 2].into()));
    assert_eq!(
        sql(Dialect::Postgres, row()),
        "UPDATE t SET (a, b) = ($1, $2)"
    );
    assert_eq!(sql(Dialect::MySql, row()), "UPDATE t SET a = ?, b = ?");
}

#[test]
fn update_without_assignments_renders_nothing() {
    assert_eq!(sql(Dialect::Postgres, Update::new("t")), "");
}

#[test]
fn delete_without_where_policy() {
    let settings = Settings {
        execute_delete_without_where: ExecuteWithoutWhere::Throw,
        ..unquoted()
    };

    for &dialect in Dialect::ALL {
        let mut params: Vec<TypedValue> = vec![];
        let err = Serializer::new(dialect)
            .settings(settings.clone())
            .serialize(&Delete::new("t").into(), &mut params)
            .unwrap_err();
        assert!(err.is_execution_policy(), "{dialect:?}: {err}");
    }

    assert_eq!(sql(Dialect::Postgres, Delete::new("t")), "DELETE FROM t");
}

#[test]
fn delete_limit_is_native_on_mysql() {
    let stmt = Delete::new("t").filter(Expr::field("a").eq(1)).limit(5);

    assert_eq!(
        sql(Dialect::MySql, stmt),
        "DELETE FROM t WHERE a = ? LIMIT 5"
    );
}

#[test]
fn delete_limit_through_row_id() {
    let stmt = Delete::new("t").filter(Expr::field("a").eq(1)).limit(5);

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "DELETE FROM t WHERE t.ctid IN (SELECT t.ctid FROM t WHERE a = $1 LIMIT 5)"
    );
}

#[test]
fn delete_limit_through_primary_key() {
    let catalog = catalog();
    let stmt = Delete::new("t").order_by(Expr::field("a")).limit(5);

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(Dialect::Postgres)
        .settings(unquoted())
        .catalog(&catalog)
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    assert_eq!(
        sql,
        "DELETE FROM t WHERE t.id IN (SELECT t.id FROM t ORDER BY a LIMIT 5)"
    );
}

#[test]
fn delete_using() {
    let stmt = || {
        Delete::new("t")
            .using("u")
            .filter(Expr::field(["t", "id"]).eq(Expr::field(["u", "id"])))
    };

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "DELETE FROM t USING u WHERE t.id = u.id"
    );
    assert_eq!(
        sql(Dialect::MySql, stmt()),
        "DELETE FROM t USING t, u WHERE t.id = u.id"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "DELETE FROM t WHERE EXISTS (SELECT 1 FROM u WHERE t.id = u.id)"
    );
}
