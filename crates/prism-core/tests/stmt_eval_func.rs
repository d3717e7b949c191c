use prism_core::stmt::{BitOp, DataType, Expr, ExprFunc, Func, Value};

fn func(expr: Expr) -> ExprFunc {
    match expr {
        Expr::Func(func) => func,
        other => panic!("expected a function call, got {other:?}"),
    }
}

fn approx(value: Value) -> f64 {
    value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {value:?}"))
}

#[test]
fn least_of_three_expands_to_case_and_evaluates_to_one() {
    let least = func(Expr::least([3, 1, 2]));
    let expanded = least.expand_least_greatest().unwrap();

    assert!(matches!(expanded, Expr::Case(_)));
    assert_eq!(expanded.eval_const().unwrap(), Value::I32(1));
    assert_eq!(Expr::from(least).eval_const().unwrap(), Value::I32(1));
}

#[test]
fn greatest_expansion_matches_native() {
    for args in [[1, 2, 3], [3, 2, 1], [2, 3, 1], [5, 5, 4]] {
        let greatest = func(Expr::greatest(args));
        let expanded = greatest.expand_least_greatest().unwrap();

        assert_eq!(
            expanded.eval_const().unwrap(),
            Expr::from(greatest).eval_const().unwrap(),
            "{args:?}"
        );
    }
}

#[test]
fn least_greatest_single_argument_is_identity() {
    let least = func(Expr::least([7]));
    assert_eq!(least.expand_least_greatest().unwrap(), Expr::val(7));
}

#[test]
fn only_least_and_greatest_expand_to_case() {
    assert!(func(Expr::upper("a")).expand_least_greatest().is_none());
}

#[test]
fn hyperbolic_identities() {
    for f in [Func::Sinh, Func::Cosh, Func::Tanh, Func::Coth] {
        for x in [-1.5, 0.5, 2.0] {
            let call = ExprFunc::new(f.clone(), [x]);
            let expanded = call.expand_hyperbolic().unwrap();

            let native = approx(Expr::from(call).eval_const().unwrap());
            let emulated = approx(expanded.eval_const().unwrap());

            assert!(
                (native - emulated).abs() < 1e-9,
                "{f:?}({x}): {native} vs {emulated}"
            );
        }
    }
}

#[test]
fn power_and_log_identities() {
    let power = ExprFunc::new(Func::Power, [2.0, 10.0]);
    let emulated = approx(power.expand_power().unwrap().eval_const().unwrap());
    assert!((emulated - 1024.0).abs() < 1e-9);

    let log = ExprFunc::new(Func::Log, [2.0, 8.0]);
    let emulated = approx(log.expand_log().unwrap().eval_const().unwrap());
    assert!((emulated - 3.0).abs() < 1e-9);
}

#[test]
fn bitwise_emulation() {
    let xor = Expr::bit(12, BitOp::Xor, 10);
    assert_eq!(xor.eval_const().unwrap().as_i64(), Some(6));

    let not = Expr::bit_not(5);
    assert_eq!(not.eval_const().unwrap().as_i64(), Some(-6));

    let xnor = Expr::bit(12, BitOp::Xnor, 10);
    assert_eq!(xnor.eval_const().unwrap().as_i64(), Some(!(12 ^ 10)));

    let shl = Expr::bit(3, BitOp::Shl, 2);
    assert_eq!(shl.eval_const().unwrap().as_f64(), Some(12.0));
}

#[test]
fn aggregate_filter_moves_into_case() {
    let count = ExprFunc::new(Func::Count, [Expr::asterisk()]).filter(Expr::field("a").gt(1));
    let expanded = count.expand_filter().unwrap();

    assert_eq!(expanded.func, Func::Count);
    assert!(expanded.filter.is_none());
    assert!(matches!(&expanded.args[..], [Expr::Case(_)]));
}

#[test]
fn string_functions() {
    let cases = [
        (Expr::upper("abc"), "ABC"),
        (Expr::func(Func::Lpad, [Expr::val("7"), Expr::val(3), Expr::val("0")]), "007"),
        (Expr::func(Func::Rpad, [Expr::val("ab"), Expr::val(4)]), "ab  "),
        (Expr::func(Func::Substring, [Expr::val("hello"), Expr::val(2), Expr::val(3)]), "ell"),
        (Expr::func(Func::Repeat, [Expr::val("ab"), Expr::val(3)]), "ababab"),
        (Expr::func(Func::Right, [Expr::val("hello"), Expr::val(2)]), "lo"),
    ];

    for (expr, expected) in cases {
        assert_eq!(
            expr.eval_const().unwrap(),
            Value::from(expected),
            "{expr:?}"
        );
    }

    assert_eq!(
        Expr::func(Func::Position, ["l", "hello"]).eval_const().unwrap(),
        Value::I32(3)
    );
}

#[test]
fn null_handling_functions() {
    assert_eq!(
        Expr::coalesce([Expr::null(), Expr::val(2), Expr::val(3)])
            .eval_const()
            .unwrap(),
        Value::I32(2)
    );
    assert_eq!(
        Expr::func(Func::NullIf, [1, 1]).eval_const().unwrap(),
        Value::Null
    );
    assert_eq!(
        Expr::func(Func::Nvl2, [Expr::null(), Expr::val(1), Expr::val(2)])
            .eval_const()
            .unwrap(),
        Value::I32(2)
    );
    assert_eq!(
        Expr::upper(Expr::null()).eval_const().unwrap(),
        Value::Null
    );
}

#[test]
fn arithmetic() {
    assert_eq!(Expr::add(1, 2).eval_const().unwrap(), Value::I32(3));
    assert_eq!(Expr::div(7, 2).eval_const().unwrap(), Value::I32(3));
    assert_eq!(Expr::mul(2, 1.5).eval_const().unwrap(), Value::F64(3.0));
    assert_eq!(Expr::add(1, Expr::null()).eval_const().unwrap(), Value::Null);
    assert!(Expr::div(1, 0).eval_const().is_err());
}

#[test]
fn casts() {
    assert_eq!(
        Expr::cast("42", DataType::Integer).eval_const().unwrap(),
        Value::I64(42)
    );
    assert_eq!(
        Expr::cast("yes", DataType::Boolean).eval_const().unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        Expr::cast("maybe", DataType::Boolean).eval_const().unwrap(),
        Value::Null
    );
    assert_eq!(
        Expr::cast(0, DataType::Boolean).eval_const().unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn aggregates_cannot_be_evaluated() {
    let err = Expr::count_star().eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn unresolved_field_fails() {
    let err = Expr::field("missing").eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}
