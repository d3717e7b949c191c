use prism_core::stmt::{Cte, Expr, Select, Statement, Table, TableAlias};
use prism_core::Dialect;
use prism_sql::{RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

fn unquoted() -> Settings {
    Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    }
}

fn sql(dialect: Dialect, stmt: impl Into<Statement>) -> String {
    let mut params: Vec<TypedValue> = vec![];
    Serializer::new(dialect)
        .settings(unquoted())
        .serialize(&stmt.into(), &mut params)
        .unwrap()
}

fn select_a() -> Select {
    Select::new().field(Expr::field("a")).from("t")
}

#[test]
fn filter_order_limit_offset() {
    let stmt = select_a()
        .filter(Expr::field("a").eq(1))
        .order_by(Expr::field("a"))
        .limit(10)
        .offset(5);

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT a FROM t WHERE a = $1 ORDER BY a LIMIT 10 OFFSET 5"
    );
}

#[test]
fn sql_server_uses_top_without_offset() {
    assert_eq!(
        sql(Dialect::SqlServer, select_a().limit(10)),
        "SELECT TOP 10 a FROM t"
    );
}

#[test]
fn sql_server_offset_needs_an_order() {
    let ordered = select_a().order_by(Expr::field("a")).limit(10).offset(20);
    assert_eq!(
        sql(Dialect::SqlServer, ordered),
        "SELECT a FROM t ORDER BY a OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );

    let unordered = select_a().limit(10).offset(20);
    assert_eq!(
        sql(Dialect::SqlServer, unordered),
        "SELECT a FROM t ORDER BY (SELECT 0) OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn oracle_11g_filters_on_rownum() {
    assert_eq!(
        sql(Dialect::Oracle11g, select_a().limit(10)),
        "SELECT * FROM (SELECT a FROM t) q WHERE ROWNUM <= 10"
    );

    assert_eq!(
        sql(Dialect::Oracle11g, select_a().limit(10).offset(20)),
        "SELECT * FROM (SELECT q.*, ROWNUM rn FROM (SELECT a FROM t) q WHERE ROWNUM <= 30) WHERE rn > 20"
    );
}

#[test]
fn fetch_first_on_later_oracle() {
    assert_eq!(
        sql(Dialect::Oracle12c, select_a().limit(10).offset(20)),
        "SELECT a FROM t OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn firebird_2_5_uses_first_skip() {
    assert_eq!(
        sql(Dialect::Firebird2_5, select_a().limit(10).offset(20)),
        "SELECT FIRST 10 SKIP 20 a FROM t"
    );
}

#[test]
fn offset_without_limit() {
    assert_eq!(
        sql(Dialect::MySql, select_a().offset(20)),
        "SELECT a FROM t LIMIT 18446744073709551615 OFFSET 20"
    );
    assert_eq!(
        sql(Dialect::Sqlite, select_a().offset(20)),
        "SELECT a FROM t LIMIT -1 OFFSET 20"
    );
    assert_eq!(
        sql(Dialect::Postgres, select_a().offset(20)),
        "SELECT a FROM t OFFSET 20"
    );
}

#[test]
fn dual_only_where_required() {
    let one = || Select::new().field(Expr::inline(1));

    assert_eq!(sql(Dialect::Oracle21c, one()), "SELECT 1 FROM DUAL");
    assert_eq!(sql(Dialect::Oracle23ai, one()), "SELECT 1");
    assert_eq!(sql(Dialect::Postgres, one()), "SELECT 1");
    assert_eq!(sql(Dialect::Db2, one()), "SELECT 1 FROM SYSIBM.DUAL");
    assert_eq!(sql(Dialect::Firebird, one()), "SELECT 1 FROM RDB$DATABASE");
    assert_eq!(sql(Dialect::MySql, one()), "SELECT 1");

    let filtered = one().filter(Expr::inline(1).eq(Expr::inline(1)));
    assert_eq!(
        sql(Dialect::MySql, filtered),
        "SELECT 1 FROM DUAL WHERE 1 = 1"
    );
}

#[test]
fn set_operations() {
    let other = || Select::new().field(Expr::field("b")).from("u");

    assert_eq!(
        sql(Dialect::Postgres, select_a().union_all(other())),
        "SELECT a FROM t UNION ALL SELECT b FROM u"
    );
    assert_eq!(
        sql(Dialect::Oracle, select_a().except(other())),
        "SELECT a FROM t MINUS SELECT b FROM u"
    );
    assert_eq!(
        sql(Dialect::Postgres, select_a().union(other().limit(1))),
        "SELECT a FROM t UNION (SELECT b FROM u LIMIT 1)"
    );
}

#[test]
fn intersect_before_mysql_8_0_31() {
    let stmt = select_a().intersect(Select::new().field(Expr::field("b")).from("u"));
    let mut params: Vec<TypedValue> = vec![];

    let err = Serializer::new(Dialect::MySql5_7)
        .serialize(&stmt.into(), &mut params)
        .unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn nulls_ordering() {
    let stmt = || select_a().order_by(Expr::field("a").desc().nulls_last());

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT a FROM t ORDER BY a DESC NULLS LAST"
    );
    assert_eq!(
        sql(Dialect::MySql, stmt()),
        "SELECT a FROM t ORDER BY CASE WHEN a IS NULL THEN 1 ELSE 0 END, a DESC"
    );
}

#[test]
fn distinct_on() {
    let stmt = || select_a().distinct_on([Expr::field("a")]);

    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT DISTINCT ON (a) a FROM t"
    );

    let mut params: Vec<TypedValue> = vec![];
    let err = Serializer::new(Dialect::MySql)
        .serialize(&stmt().into(), &mut params)
        .unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn common_table_expressions() {
    let cte = || Cte::new("c", select_a());

    assert_eq!(
        sql(Dialect::Postgres, Select::new().with(cte()).from("c")),
        "WITH c AS (SELECT a FROM t) SELECT * FROM c"
    );
    assert_eq!(
        sql(Dialect::Postgres, Select::new().with_recursive(cte()).from("c")),
        "WITH RECURSIVE c AS (SELECT a FROM t) SELECT * FROM c"
    );
    assert_eq!(
        sql(Dialect::SqlServer, Select::new().with_recursive(cte()).from("c")),
        "WITH c AS (SELECT a FROM t) SELECT * FROM c"
    );
}

#[test]
fn identifiers_are_quoted_per_family() {
    let serialize = |dialect| {
        let mut params: Vec<TypedValue> = vec![];
        Serializer::new(dialect)
            .serialize(&select_a().into(), &mut params)
            .unwrap()
    };

    assert_eq!(serialize(Dialect::Postgres), r#"SELECT "a" FROM "t""#);
    assert_eq!(serialize(Dialect::MySql), "SELECT `a` FROM `t`");
    assert_eq!(serialize(Dialect::SqlServer), "SELECT [a] FROM [t]");
}

#[test]
fn formatted_output_puts_clauses_on_new_lines() {
    let settings = Settings {
        render_formatted: true,
        ..unquoted()
    };
    let stmt = select_a().filter(Expr::field("a").eq(1));

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(Dialect::Postgres)
        .settings(settings)
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    assert_eq!(sql, "SELECT a\nFROM t\nWHERE a = $1");
}

#[test]
fn for_update() {
    assert_eq!(
        sql(Dialect::Postgres, select_a().for_update()),
        "SELECT a FROM t FOR UPDATE"
    );

    let mut params: Vec<TypedValue> = vec![];
    let err = Serializer::new(Dialect::SqlServer)
        .serialize(&select_a().for_update().into(), &mut params)
        .unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn distinct_with_a_row_limit() {
    let stmt = || select_a().distinct().limit(5);

    assert_eq!(
        sql(Dialect::SqlServer, stmt()),
        "SELECT DISTINCT TOP 5 a FROM t"
    );
    assert_eq!(sql(Dialect::Sybase, stmt()), "SELECT DISTINCT TOP 5 a FROM t");
    assert_eq!(
        sql(Dialect::Firebird2_5, stmt()),
        "SELECT FIRST 5 DISTINCT a FROM t"
    );
    assert_eq!(
        sql(Dialect::Postgres, stmt()),
        "SELECT DISTINCT a FROM t LIMIT 5"
    );
}

#[test]
fn set_operation_operands_drop_field_aliases() {
    let stmt = Select::new()
        .field_as(Expr::field("a"), "x")
        .from("t")
        .union_all(Select::new().field_as(Expr::field("b"), "y").from("u"));

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT a AS x FROM t UNION ALL SELECT b FROM u"
    );

    // Aliases inside a derived table of a later operand still name its columns
    let derived = Select::new()
        .field(Expr::field("y"))
        .from(Table::derived(
            Select::new().field_as(Expr::field("b"), "y").from("u"),
            TableAlias::new("d"),
        ));
    let stmt = Select::new().field_as(Expr::field("a"), "x").from("t").union_all(derived);

    assert_eq!(
        sql(Dialect::Postgres, stmt),
        "SELECT a AS x FROM t UNION ALL SELECT y FROM (SELECT b AS y FROM u) AS d"
    );
}
