use prism_core::stmt::{Condition, Expr, Row, Select};
use prism_core::Dialect;
use prism_sql::{ParamType, RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

/// Renders `SELECT a FROM t WHERE <condition>` with values inlined and
/// returns the condition.
fn render(dialect: Dialect, condition: impl Into<Condition>) -> String {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        param_type: ParamType::Inlined,
        ..Settings::default()
    };
    let stmt = Select::new()
        .field(Expr::field("a"))
        .from("t")
        .filter(condition);

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(dialect)
        .settings(settings)
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    sql.strip_prefix("SELECT a FROM t WHERE ")
        .unwrap()
        .to_string()
}

fn a() -> Expr {
    Expr::field("a")
}

fn b() -> Expr {
    Expr::field("b")
}

fn ab() -> Row {
    Row::new([a(), b()])
}

#[test]
fn between_symmetric() {
    let between = || a().between_symmetric(10).and(1);
    let not_between = || a().not_between_symmetric(10).and(1);

    assert_eq!(
        render(Dialect::Postgres, between()),
        "a BETWEEN SYMMETRIC 10 AND 1"
    );
    assert_eq!(
        render(Dialect::MySql, between()),
        "a BETWEEN 10 AND 1 OR a BETWEEN 1 AND 10"
    );
    assert_eq!(
        render(Dialect::MySql, not_between()),
        "a NOT BETWEEN 10 AND 1 AND a NOT BETWEEN 1 AND 10"
    );
}

#[test]
fn empty_in_lists() {
    assert_eq!(render(Dialect::Postgres, a().in_list(Vec::<i32>::new())), "1 = 0");
    assert_eq!(
        render(Dialect::Postgres, a().not_in_list(Vec::<i32>::new())),
        "1 = 1"
    );
}

#[test]
fn long_in_lists_are_split_on_oracle() {
    let values: Vec<i32> = (0..1001).collect();

    let first = (0..1000)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    assert_eq!(
        render(Dialect::Oracle, a().in_list(values.clone())),
        format!("(a IN ({first}) OR a IN (1000))")
    );
    assert_eq!(
        render(Dialect::Oracle, a().not_in_list(values.clone())),
        format!("(a NOT IN ({first}) AND a NOT IN (1000))")
    );

    // Other dialects take the list as is
    assert!(render(Dialect::Postgres, a().in_list(values)).starts_with("a IN (0, 1, 2"));
}

#[test]
fn like() {
    assert_eq!(
        render(Dialect::Postgres, a().like("x!%").escape('!')),
        "a LIKE 'x!%' ESCAPE '!'"
    );
    assert_eq!(
        render(Dialect::Postgres, a().like("x%").negate()),
        "a NOT LIKE 'x%'"
    );
}

#[test]
fn case_insensitive_like() {
    let ilike = || a().like("x%").ignore_case();

    assert_eq!(render(Dialect::Postgres, ilike()), "a ILIKE 'x%'");
    assert_eq!(render(Dialect::MySql, ilike()), "LOWER(a) LIKE LOWER('x%')");
}

#[test]
fn is_distinct_from() {
    let distinct = || a().is_distinct_from(b());

    assert_eq!(render(Dialect::Postgres, distinct()), "a IS DISTINCT FROM b");
    assert_eq!(render(Dialect::MySql, distinct()), "NOT (a <=> b)");
    assert_eq!(render(Dialect::Sqlite, distinct()), "a IS NOT b");
    assert_eq!(
        render(Dialect::Oracle, distinct()),
        "CASE WHEN a IS NULL AND b IS NULL THEN 0 WHEN a IS NULL OR b IS NULL THEN 1 \
         WHEN a = b THEN 0 ELSE 1 END = 1"
    );

    let not_distinct = || a().is_not_distinct_from(b());
    assert_eq!(render(Dialect::MySql, not_distinct()), "a <=> b");
    assert_eq!(render(Dialect::Sqlite, not_distinct()), "a IS b");
}

#[test]
fn xor() {
    let xor = || Condition::xor(a().eq(1), b().eq(2));

    assert_eq!(render(Dialect::MySql, xor()), "a = 1 XOR b = 2");
    assert_eq!(
        render(Dialect::Postgres, xor()),
        "(a = 1 OR b = 2) AND NOT (a = 1 AND b = 2)"
    );
}

#[test]
fn nested_junctions_are_parenthesized() {
    let condition = Condition::or(Condition::and(a().eq(1), b().eq(2)), a().eq(3));

    assert_eq!(
        render(Dialect::Postgres, condition),
        "(a = 1 AND b = 2) OR a = 3"
    );
}

#[test]
fn boolean_fields_as_predicates() {
    assert_eq!(render(Dialect::Postgres, Expr::field("flag")), "flag");
    assert_eq!(render(Dialect::SqlServer, Expr::field("flag")), "flag = 1");
}

#[test]
fn row_comparison() {
    let ge = || ab().ge([1, 2]);

    assert_eq!(render(Dialect::Postgres, ge()), "(a, b) >= (1, 2)");
    assert_eq!(
        render(Dialect::SqlServer, ge()),
        "a > 1 OR (a = 1 AND b >= 2)"
    );

    assert_eq!(
        render(Dialect::SqlServer, ab().ne([1, 2])),
        "NOT (a = 1 AND b = 2)"
    );
}

#[test]
fn row_in_list() {
    let rows = || [Row::from([1, 2]), Row::from([3, 4])];

    assert_eq!(
        render(Dialect::Oracle, ab().in_list(rows())),
        "(a, b) IN ((1, 2), (3, 4))"
    );
    assert_eq!(
        render(Dialect::SqlServer, ab().in_list(rows())),
        "(a = 1 AND b = 2) OR (a = 3 AND b = 4)"
    );
}

#[test]
fn row_is_null() {
    assert_eq!(render(Dialect::Postgres, ab().is_null()), "(a, b) IS NULL");
    assert_eq!(render(Dialect::MySql, ab().is_null()), "a IS NULL AND b IS NULL");
    assert_eq!(
        render(Dialect::MySql, ab().is_not_null()),
        "a IS NOT NULL AND b IS NOT NULL"
    );
}

#[test]
fn conditions_as_values() {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        param_type: ParamType::Inlined,
        ..Settings::default()
    };
    let stmt = || Select::new().field(Expr::from(a().eq(1))).from("t");

    let render = |dialect| {
        let mut params: Vec<TypedValue> = vec![];
        Serializer::new(dialect)
            .settings(settings.clone())
            .serialize(&stmt().into(), &mut params)
            .unwrap()
    };

    assert_eq!(render(Dialect::Postgres), "SELECT (a = 1) FROM t");
    assert_eq!(
        render(Dialect::SqlServer),
        "SELECT CASE WHEN a = 1 THEN 1 WHEN NOT (a = 1) THEN 0 END FROM t"
    );
}

fn c() -> Condition {
    Expr::field("c").eq(1)
}

#[test]
fn emulated_predicates_are_parenthesized_under_and() {
    assert_eq!(
        render(Dialect::MySql, Condition::and(c(), a().between_symmetric(10).and(1))),
        "c = 1 AND (a BETWEEN 10 AND 1 OR a BETWEEN 1 AND 10)"
    );
    assert_eq!(
        render(Dialect::SqlServer, Condition::and(c(), ab().ge([1, 2]))),
        "c = 1 AND (a > 1 OR (a = 1 AND b >= 2))"
    );
    assert_eq!(
        render(
            Dialect::SqlServer,
            Condition::and(c(), ab().in_list([Row::from([1, 2]), Row::from([3, 4])]))
        ),
        "c = 1 AND ((a = 1 AND b = 2) OR (a = 3 AND b = 4))"
    );
    assert_eq!(
        render(
            Dialect::Postgres,
            Condition::and(c(), Condition::xor(a().eq(1), b().eq(2)))
        ),
        "c = 1 AND ((a = 1 OR b = 2) AND NOT (a = 1 AND b = 2))"
    );

    // Native forms need no parentheses
    assert_eq!(
        render(Dialect::Postgres, Condition::and(c(), a().between_symmetric(10).and(1))),
        "c = 1 AND a BETWEEN SYMMETRIC 10 AND 1"
    );
}

#[test]
fn emulated_predicates_are_parenthesized_under_or() {
    assert_eq!(
        render(Dialect::MySql, Condition::or(c(), a().not_between_symmetric(10).and(1))),
        "c = 1 OR (a NOT BETWEEN 10 AND 1 AND a NOT BETWEEN 1 AND 10)"
    );
    assert_eq!(
        render(Dialect::MySql, Condition::or(c(), ab().is_null())),
        "c = 1 OR (a IS NULL AND b IS NULL)"
    );

    // An OR rewrite under OR keeps the same meaning without them
    assert_eq!(
        render(Dialect::MySql, Condition::or(c(), a().between_symmetric(10).and(1))),
        "c = 1 OR a BETWEEN 10 AND 1 OR a BETWEEN 1 AND 10"
    );
    assert_eq!(
        render(Dialect::SqlServer, Condition::or(c(), ab().ne([1, 2]))),
        "c = 1 OR NOT (a = 1 AND b = 2)"
    );
}

#[test]
fn emulated_predicates_inside_not() {
    assert_eq!(
        render(
            Dialect::MySql,
            Condition::not(Condition::and(c(), a().between_symmetric(10).and(1)))
        ),
        "NOT (c = 1 AND (a BETWEEN 10 AND 1 OR a BETWEEN 1 AND 10))"
    );
}
