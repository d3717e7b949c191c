use prism_core::stmt::{Block, CreateSequence, Delete, DropTable, Expr, Insert, Truncate, Update};
use prism_core::{Dialect, Result};
use prism_sql::{RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

fn serialize(dialect: Dialect, block: Block) -> Result<String> {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    };

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(dialect)
        .settings(settings)
        .serialize(&block.into(), &mut params)?;

    // Block bodies are rendered with every value inlined
    assert!(params.is_empty());
    Ok(sql)
}

fn sql(dialect: Dialect, block: Block) -> String {
    serialize(dialect, block).unwrap()
}

fn insert() -> Insert {
    Insert::new("t").columns(["a"]).values([1])
}

#[test]
fn anonymous_block_on_postgres() {
    let block = Block::new(vec![
        insert().into(),
        Delete::new("t").filter(Expr::field("a").eq(2)).into(),
    ]);

    assert_eq!(
        sql(Dialect::Postgres, block),
        "DO $$ BEGIN INSERT INTO t (a) VALUES (1); DELETE FROM t WHERE a = 2; END $$"
    );
}

#[test]
fn no_op_statements_are_skipped() {
    let block = Block::new(vec![Update::new("t").into(), insert().into()]);

    assert_eq!(
        sql(Dialect::Oracle, block),
        "BEGIN INSERT INTO t (a) VALUES (1); END;"
    );

    let empty = Block::new(vec![Update::new("t").into()]);
    assert_eq!(sql(Dialect::Oracle, empty), "");
}

#[test]
fn mysql_runs_blocks_as_a_temporary_procedure() {
    let block = Block::new(vec![insert().into()]);
    let name = block.name.clone();

    assert_eq!(
        sql(Dialect::MySql, block.clone()),
        format!(
            "CREATE PROCEDURE {name}() BEGIN INSERT INTO t (a) VALUES (1); END; CALL {name}(); DROP PROCEDURE {name};"
        )
    );

    // The name is fixed when the block is built
    assert_eq!(sql(Dialect::MySql, block.clone()), sql(Dialect::MySql, block));
}

#[test]
fn mariadb_block() {
    let block = Block::new(vec![insert().into()]);

    assert_eq!(
        sql(Dialect::MariaDb, block),
        "BEGIN NOT ATOMIC INSERT INTO t (a) VALUES (1); END"
    );
}

#[test]
fn ddl_runs_as_dynamic_sql() {
    let block = || Block::new(vec![Truncate::new("t").into()]);

    assert_eq!(
        sql(Dialect::Oracle, block()),
        "BEGIN EXECUTE IMMEDIATE 'TRUNCATE TABLE t'; END;"
    );
    assert_eq!(
        sql(Dialect::Db2, block()),
        "BEGIN EXECUTE IMMEDIATE 'TRUNCATE TABLE t IMMEDIATE'; END"
    );
}

#[test]
fn guarded_ddl_inside_a_block() {
    let oracle = Block::new(vec![DropTable::new("t").if_exists().into()]);
    assert_eq!(
        sql(Dialect::Oracle11g, oracle),
        "BEGIN BEGIN EXECUTE IMMEDIATE 'DROP TABLE t'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -942 THEN RAISE; END IF; END; END;"
    );

    let postgres = Block::new(vec![CreateSequence::new("s").if_not_exists().into()]);
    assert_eq!(
        sql(Dialect::Postgres9_4, postgres),
        "DO $$ BEGIN BEGIN EXECUTE 'CREATE SEQUENCE s'; EXCEPTION WHEN duplicate_table THEN NULL; END; END $$"
    );
}

#[test]
fn nested_blocks() {
    let inner = Block::new(vec![insert().into()]);
    let outer = Block::new(vec![inner.into()]);

    assert_eq!(
        sql(Dialect::Oracle, outer),
        "BEGIN BEGIN INSERT INTO t (a) VALUES (1); END; END;"
    );
}

#[test]
fn blocks_are_unsupported_on_sqlite() {
    let block = Block::new(vec![insert().into()]);

    assert!(serialize(Dialect::Sqlite, block)
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn postgres_block_tag_avoids_the_body() {
    let block = Block::new(vec![Insert::new("t").columns(["a"]).values(["x$$y"]).into()]);

    assert_eq!(
        sql(Dialect::Postgres, block),
        "DO $prism$ BEGIN INSERT INTO t (a) VALUES ('x$$y'); END $prism$"
    );

    let block = Block::new(vec![Insert::new("t")
        .columns(["a", "b"])
        .values(["$$", "$prism$"])
        .into()]);

    assert_eq!(
        sql(Dialect::Postgres, block),
        "DO $prism1$ BEGIN INSERT INTO t (a, b) VALUES ('$$', '$prism$'); END $prism1$"
    );
}
