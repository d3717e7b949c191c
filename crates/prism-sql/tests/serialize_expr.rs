use prism_core::stmt::{BitOp, DataType, Expr, ExprFunc, Func, Select};
use prism_core::{Dialect, Result};
use prism_sql::{RenderQuotedNames, Serializer, Settings, TypedValue};

use pretty_assertions::assert_eq;

/// Renders `SELECT <expr> FROM t` and returns the `<expr>` part.
fn try_render(dialect: Dialect, expr: Expr) -> Result<String> {
    let settings = Settings {
        render_quoted_names: RenderQuotedNames::Never,
        ..Settings::default()
    };
    let stmt = Select::new().field(expr).from("t");

    let mut params: Vec<TypedValue> = vec![];
    let sql = Serializer::new(dialect)
        .settings(settings)
        .serialize(&stmt.into(), &mut params)?;

    Ok(sql
        .strip_prefix("SELECT ")
        .and_then(|sql| sql.strip_suffix(" FROM t"))
        .unwrap()
        .to_string())
}

fn render(dialect: Dialect, expr: Expr) -> String {
    try_render(dialect, expr).unwrap()
}

fn a() -> Expr {
    Expr::field("a")
}

fn b() -> Expr {
    Expr::field("b")
}

#[test]
fn numeric_to_string_cast_on_derby() {
    let expr = || Expr::cast(Expr::typed_field("a", DataType::Integer), DataType::VarChar(None));

    assert_eq!(
        render(Dialect::Derby, expr()),
        "TRIM(CAST(CAST(a AS CHAR(38)) AS VARCHAR(32672)))"
    );
    assert_eq!(render(Dialect::Postgres, expr()), "CAST(a AS VARCHAR)");
}

#[test]
fn string_to_double_cast_on_derby() {
    let expr = Expr::cast(Expr::typed_field("s", DataType::VarChar(None)), DataType::Double);

    assert_eq!(
        render(Dialect::Derby, expr),
        "CAST(CAST(s AS DECIMAL) AS DOUBLE)"
    );
}

#[test]
fn cast_type_names() {
    assert_eq!(
        render(Dialect::MySql, Expr::cast(a(), DataType::BigInt)),
        "CAST(a AS SIGNED)"
    );
    assert_eq!(
        render(Dialect::Oracle, Expr::cast(a(), DataType::VarChar(None))),
        "CAST(a AS VARCHAR2(4000))"
    );
    assert_eq!(
        render(Dialect::SqlServer, Expr::cast(a(), DataType::VarChar(None))),
        "CAST(a AS VARCHAR(max))"
    );
    assert_eq!(
        render(Dialect::Sqlite, Expr::cast(a(), DataType::VarChar(Some(10)))),
        "CAST(a AS TEXT)"
    );
}

#[test]
fn numeric_to_boolean_cast() {
    let expr = || Expr::cast(Expr::typed_field("a", DataType::Integer), DataType::Boolean);

    assert_eq!(render(Dialect::Postgres, expr()), "CAST(a AS BOOLEAN)");
    assert_eq!(
        render(Dialect::SqlServer, expr()),
        "CASE WHEN a = 0 THEN 0 WHEN a <> 0 THEN 1 END"
    );
}

#[test]
fn string_to_boolean_cast() {
    let expr = Expr::cast(Expr::typed_field("s", DataType::VarChar(None)), DataType::Boolean);

    assert_eq!(
        render(Dialect::MySql, expr),
        "CASE WHEN LOWER(s) IN ('1', 'y', 'yes', 'true', 'on', 'enabled') THEN TRUE \
         WHEN LOWER(s) IN ('0', 'n', 'no', 'false', 'off', 'disabled') THEN FALSE END"
    );
}

#[test]
fn least_with_many_arguments() {
    let expr = || Expr::least([a(), b(), Expr::field("c")]);

    assert_eq!(render(Dialect::Postgres, expr()), "LEAST(a, b, c)");
    assert_eq!(render(Dialect::Sqlite, expr()), "MIN(a, b, c)");
    assert_eq!(render(Dialect::Firebird, expr()), "MINVALUE(a, b, c)");
    assert_eq!(
        render(Dialect::SqlServer2016, expr()),
        "CASE WHEN a < b THEN CASE WHEN a < c THEN a ELSE c END \
         ELSE CASE WHEN b < c THEN b ELSE c END END"
    );
}

#[test]
fn hyperbolic_functions() {
    let tanh = || Expr::func(Func::Tanh, [a()]);

    assert_eq!(render(Dialect::Oracle, tanh()), "TANH(a)");
    assert_eq!(
        render(Dialect::Sqlite, tanh()),
        "(EXP(2 * a) - 1) / (EXP(2 * a) + 1)"
    );
}

#[test]
fn power_and_log() {
    let power = Expr::func(Func::Power, [a(), b()]);
    assert_eq!(render(Dialect::Derby, power), "EXP(LN(a) * b)");

    let log = || Expr::func(Func::Log, [Expr::inline(10), a()]);
    assert_eq!(render(Dialect::Postgres, log()), "LOG(10, a)");
    assert_eq!(render(Dialect::SqlServer, log()), "LOG(a, 10)");
    assert_eq!(render(Dialect::Sqlite, log()), "LN(a) / LN(10)");

    let bad = Expr::func(Func::Log, [a()]);
    assert!(try_render(Dialect::Postgres, bad)
        .unwrap_err()
        .is_invalid_statement());
}

#[test]
fn aggregate_filter() {
    let count = || -> Expr {
        ExprFunc::new(Func::Count, [Expr::asterisk()])
            .filter(a().gt(Expr::inline(1)))
            .into()
    };
    let sum = ExprFunc::new(Func::Sum, [b()]).filter(a().gt(Expr::inline(1)));

    assert_eq!(
        render(Dialect::Postgres, count()),
        "COUNT(*) FILTER (WHERE a > 1)"
    );
    assert_eq!(
        render(Dialect::MySql, count()),
        "COUNT(CASE WHEN a > 1 THEN 1 END)"
    );
    assert_eq!(
        render(Dialect::MySql, sum.into()),
        "SUM(CASE WHEN a > 1 THEN b END)"
    );
}

#[test]
fn function_spellings() {
    let char_length = || Expr::func(Func::CharLength, [a()]);
    assert_eq!(render(Dialect::Postgres, char_length()), "CHAR_LENGTH(a)");
    assert_eq!(render(Dialect::SqlServer, char_length()), "LEN(a)");
    assert_eq!(render(Dialect::Oracle, char_length()), "LENGTH(a)");

    let nvl = || Expr::func(Func::Nvl, [a(), b()]);
    assert_eq!(render(Dialect::Oracle, nvl()), "NVL(a, b)");
    assert_eq!(render(Dialect::SqlServer, nvl()), "ISNULL(a, b)");
    assert_eq!(render(Dialect::MySql, nvl()), "IFNULL(a, b)");
    assert_eq!(render(Dialect::Postgres, nvl()), "COALESCE(a, b)");

    let concat = || Expr::func(Func::Concat, [a(), b()]);
    assert_eq!(render(Dialect::Postgres, concat()), "(a || b)");
    assert_eq!(render(Dialect::MySql, concat()), "CONCAT(a, b)");

    let position = || Expr::func(Func::Position, [Expr::inline("x"), a()]);
    assert_eq!(render(Dialect::Postgres, position()), "POSITION('x' IN a)");
    assert_eq!(render(Dialect::SqlServer, position()), "CHARINDEX('x', a)");
    assert_eq!(render(Dialect::Oracle, position()), "INSTR(a, 'x')");

    assert_eq!(
        render(Dialect::Oracle, Expr::func(Func::Random, Vec::<Expr>::new())),
        "DBMS_RANDOM.VALUE"
    );
}

#[test]
fn substring() {
    let expr = || Expr::func(Func::Substring, [a(), Expr::inline(2), Expr::inline(3)]);

    assert_eq!(render(Dialect::Postgres, expr()), "SUBSTRING(a FROM 2 FOR 3)");
    assert_eq!(render(Dialect::Oracle, expr()), "SUBSTR(a, 2, 3)");
    assert_eq!(render(Dialect::MySql, expr()), "SUBSTRING(a, 2, 3)");
}

#[test]
fn bitwise_operators() {
    let xor = || Expr::bit(a(), BitOp::Xor, b());
    assert_eq!(render(Dialect::Postgres, xor()), "a # b");
    assert_eq!(render(Dialect::MySql, xor()), "a ^ b");
    assert_eq!(render(Dialect::Sqlite, xor()), "(a | b) - (a & b)");

    assert_eq!(
        render(Dialect::Oracle, Expr::bit(a(), BitOp::And, b())),
        "BITAND(a, b)"
    );
    assert_eq!(render(Dialect::Oracle, Expr::bit_not(a())), "-a - 1");
    assert_eq!(
        render(Dialect::Firebird, Expr::bit(a(), BitOp::Shl, b())),
        "BIN_SHL(a, b)"
    );

    assert!(try_render(Dialect::Derby, xor())
        .unwrap_err()
        .is_unsupported_feature());
}

#[test]
fn modulo() {
    let expr = || Expr::rem(a(), Expr::inline(2));

    assert_eq!(render(Dialect::Postgres, expr()), "a % 2");
    assert_eq!(render(Dialect::Oracle, expr()), "MOD(a, 2)");
}

#[test]
fn sequence_access() {
    let next = || Expr::nextval("s");

    assert_eq!(render(Dialect::Postgres, next()), "nextval('s')");
    assert_eq!(render(Dialect::Oracle, next()), "s.nextval");
    assert_eq!(render(Dialect::SqlServer, next()), "NEXT VALUE FOR s");
    assert_eq!(render(Dialect::Firebird2_5, next()), "GEN_ID(s, 1)");
    assert!(try_render(Dialect::MySql, next())
        .unwrap_err()
        .is_unsupported_feature());
}
