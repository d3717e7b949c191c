use prism_core::stmt::{
    ColumnDef, CreateIndex, CreateSequence, CreateTable, DataType, Direction, DropIndex,
    DropSequence, DropTable, Expr, Statement, Truncate,
};
use prism_core::{Dialect, Result};
use prism_sql::{RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

fn serialize(dialect: Dialect, stmt: impl Into<Statement>) -> Result<String> {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    };

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(dialect)
        .settings(settings)
        .serialize(&stmt.into(), &mut params)?;

    assert!(params.is_empty(), "DDL binds no values");
    Ok(sql)
}

fn sql(dialect: Dialect, stmt: impl Into<Statement>) -> String {
    serialize(dialect, stmt).unwrap()
}

#[test]
fn create_table() {
    let stmt = CreateTable::new("t")
        .column(ColumnDef::new("id", DataType::BigInt).not_null())
        .column(ColumnDef::new("name", DataType::VarChar(Some(100))).default("x"))
        .primary_key(&["id"]);

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "CREATE TABLE t (id BIGINT NOT NULL, name VARCHAR(100) DEFAULT 'x', PRIMARY KEY (id))"
    );
}

#[test]
fn create_table_if_not_exists() {
    let stmt = || {
        CreateTable::new("t")
            .column(ColumnDef::new("id", DataType::BigInt).not_null())
            .if_not_exists()
    };

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "CREATE TABLE IF NOT EXISTS t (id BIGINT NOT NULL)"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "BEGIN TRY CREATE TABLE t (id BIGINT NOT NULL) END TRY BEGIN CATCH IF ERROR_NUMBER() != 2714 THROW; END CATCH"
    );
}

#[test]
fn guarded_ddl_escapes_embedded_sql() {
    let stmt = CreateTable::new("t")
        .column(ColumnDef::new("name", DataType::VarChar(Some(10))).default("x"))
        .if_not_exists();

    assert_eq!(
        sql(Dialect::Oracle11g, stmt),
        "BEGIN EXECUTE IMMEDIATE 'CREATE TABLE t (name VARCHAR2(10) DEFAULT ''x'')'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -955 THEN RAISE; END IF; END;"
    );
}

#[test]
fn create_index() {
    let stmt = CreateIndex::new("i", "t")
        .column("a")
        .column_sorted("b", Direction::Desc)
        .unique()
        .filter(Expr::field("a").is_not_null());

    assert_eq!(
        sql(Dialect::Postgres, stmt.clone()),
        "CREATE UNIQUE INDEX i ON t (a, b DESC) WHERE a IS NOT NULL"
    );
    assert!(serialize(Dialect::MySql, stmt)
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn create_index_if_not_exists() {
    let stmt = || CreateIndex::new("i", "t").column("a").if_not_exists();

    assert_eq!(
        sql(Dialect::Sqlite, stmt()),
        "CREATE INDEX IF NOT EXISTS i ON t (a)"
    );
    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "BEGIN TRY CREATE INDEX i ON t (a) END TRY BEGIN CATCH IF ERROR_NUMBER() != 1913 THROW; END CATCH"
    );
    assert_eq!(
        sql(Dialect::Db2, stmt()),
        "BEGIN DECLARE CONTINUE HANDLER FOR SQLSTATE '42710' BEGIN END; EXECUTE IMMEDIATE 'CREATE INDEX i ON t (a)'; END"
    );
    assert!(serialize(Dialect::MySql, stmt())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn drop_table() {
    assert_eq!(
        sql(Dialect::Postgres, DropTable::new("t").if_exists().cascade()),
        "DROP TABLE IF EXISTS t CASCADE"
    );
    assert_eq!(
        sql(Dialect::Oracle, DropTable::new("t").cascade()),
        "DROP TABLE t CASCADE CONSTRAINTS"
    );
    assert_eq!(
        sql(Dialect::Oracle11g, DropTable::new("t").if_exists()),
        "BEGIN EXECUTE IMMEDIATE 'DROP TABLE t'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -942 THEN RAISE; END IF; END;"
    );
    assert_eq!(
        sql(Dialect::Firebird, DropTable::new("t").if_exists()),
        "EXECUTE BLOCK AS BEGIN EXECUTE STATEMENT 'DROP TABLE t'; WHEN SQLCODE -607 DO BEGIN END END"
    );
    assert!(serialize(Dialect::MySql, DropTable::new("t").cascade())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn drop_index() {
    assert_eq!(
        sql(Dialect::Postgres, DropIndex::new("i").if_exists()),
        "DROP INDEX IF EXISTS i"
    );
    assert_eq!(
        sql(Dialect::MySql, DropIndex::new("i").on("t")),
        "DROP INDEX i ON t"
    );
    assert!(serialize(Dialect::MySql, DropIndex::new("i"))
        .unwrap_err()
        .is_invalid_statement());
}

#[test]
fn truncate() {
    assert_eq!(
        sql(
            Dialect::Postgres,
            Truncate::new("t").restart_identity().cascade()
        ),
        "TRUNCATE TABLE t RESTART IDENTITY CASCADE"
    );
    assert_eq!(sql(Dialect::Sqlite, Truncate::new("t")), "DELETE FROM t");
    assert_eq!(
        sql(Dialect::Db2, Truncate::new("t")),
        "TRUNCATE TABLE t IMMEDIATE"
    );
    assert!(serialize(Dialect::MySql, Truncate::new("t").restart_identity())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn sequences() {
    let create = CreateSequence::new("s")
        .start_with(1)
        .increment_by(2)
        .cache(10);
    assert_eq!(
        sql(Dialect::Postgres, create),
        "CREATE SEQUENCE s START WITH 1 INCREMENT BY 2 CACHE 10"
    );

    assert_eq!(
        sql(Dialect::Postgres9_4, CreateSequence::new("s").if_not_exists()),
        "DO $$ BEGIN EXECUTE 'CREATE SEQUENCE s'; EXCEPTION WHEN duplicate_table THEN NULL; END $$"
    );

    assert_eq!(
        sql(Dialect::Derby, DropSequence::new("s")),
        "DROP SEQUENCE s RESTRICT"
    );

    assert!(serialize(Dialect::MySql, CreateSequence::new("s"))
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn guarded_ddl_tag_avoids_the_statement() {
    assert_eq!(
        sql(Dialect::Postgres9_4, CreateSequence::new("s$$").if_not_exists()),
        "DO $prism$ BEGIN EXECUTE 'CREATE SEQUENCE s$$'; EXCEPTION WHEN duplicate_table THEN NULL; END $prism$"
    );
}
