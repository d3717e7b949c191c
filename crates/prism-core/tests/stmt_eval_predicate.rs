use prism_core::stmt::{Condition, Expr, Value};

#[test]
fn compare_with_null_is_unknown() {
    assert_eq!(Expr::val(1).eq(Expr::null()).eval_const().unwrap(), None);
    assert_eq!(Expr::null().lt(1).eval_const().unwrap(), None);
}

#[test]
fn compare_across_integer_widths() {
    assert_eq!(Expr::val(1i32).eq(1i64).eval_const().unwrap(), Some(true));
    assert_eq!(Expr::val(2i64).gt(1.5).eval_const().unwrap(), Some(true));
}

#[test]
fn in_list_semantics() {
    assert_eq!(
        Expr::val(2).in_list([1, 2, 3]).eval_const().unwrap(),
        Some(true)
    );
    assert_eq!(
        Expr::val(4).in_list([1, 2, 3]).eval_const().unwrap(),
        Some(false)
    );
    // A NULL in the list makes a non-match unknown.
    assert_eq!(
        Expr::val(4)
            .in_list([Expr::val(1), Expr::null()])
            .eval_const()
            .unwrap(),
        None
    );
    assert_eq!(
        Expr::val(4)
            .not_in_list([Expr::val(1), Expr::null()])
            .eval_const()
            .unwrap(),
        None
    );
}

#[test]
fn empty_in_list_is_false() {
    assert_eq!(
        Expr::val(1)
            .in_list(Vec::<Expr>::new())
            .eval_const()
            .unwrap(),
        Some(false)
    );
    assert_eq!(
        Expr::val(1)
            .not_in_list(Vec::<Expr>::new())
            .eval_const()
            .unwrap(),
        Some(true)
    );
}

#[test]
fn between_is_inclusive() {
    assert_eq!(
        Expr::val(5).between(1).and(5).eval_const().unwrap(),
        Some(true)
    );
    assert_eq!(
        Expr::val(5).between(10).and(1).eval_const().unwrap(),
        Some(false)
    );
}

#[test]
fn between_symmetric_accepts_reversed_bounds() {
    let condition = Expr::val(5).between_symmetric(10).and(1);
    assert_eq!(condition.eval_const().unwrap(), Some(true));

    let Condition::Between(between) = &condition else {
        panic!("expected BETWEEN, got {condition:?}");
    };
    let expanded = between.expand_symmetric().unwrap();
    assert_eq!(expanded.eval_const().unwrap(), Some(true));
}

#[test]
fn not_between_symmetric_expansion_matches() {
    for (value, expected) in [(5, Some(false)), (11, Some(true)), (0, Some(true))] {
        let condition = Expr::val(value).not_between_symmetric(10).and(1);
        let Condition::Between(between) = &condition else {
            panic!("expected BETWEEN, got {condition:?}");
        };

        assert_eq!(condition.eval_const().unwrap(), expected, "{value}");
        assert_eq!(
            between.expand_symmetric().unwrap().eval_const().unwrap(),
            expected,
            "{value}"
        );
    }
}

#[test]
fn plain_between_has_no_symmetric_expansion() {
    let Condition::Between(between) = Expr::val(1).between(0).and(2) else {
        panic!("expected BETWEEN");
    };
    assert!(between.expand_symmetric().is_none());
}

#[test]
fn is_null_and_is_not_null() {
    assert_eq!(Expr::null().is_null().eval_const().unwrap(), Some(true));
    assert_eq!(Expr::val(1).is_null().eval_const().unwrap(), Some(false));
    assert_eq!(Expr::null().is_not_null().eval_const().unwrap(), Some(false));
}

#[test]
fn is_distinct_from_expansion_is_never_unknown() {
    let values = [Expr::val(1), Expr::val(2), Expr::null()];

    for lhs in &values {
        for rhs in &values {
            for negate in [false, true] {
                let condition = if negate {
                    lhs.clone().is_not_distinct_from(rhs.clone())
                } else {
                    lhs.clone().is_distinct_from(rhs.clone())
                };
                let Condition::IsDistinctFrom(cond) = &condition else {
                    panic!("expected IS DISTINCT FROM, got {condition:?}");
                };

                let native = condition.eval_const().unwrap();
                let expanded = cond.expand().eval_const().unwrap();

                assert!(native.is_some());
                assert_eq!(native, expanded, "{lhs:?} / {rhs:?} / negate={negate}");
            }
        }
    }
}

#[test]
fn like_wildcards() {
    let cases = [
        ("hello", "h%", true),
        ("hello", "h_llo", true),
        ("hello", "%ll%", true),
        ("hello", "H%", false),
        ("50%", "50!%", true),
        ("500", "50!%", false),
    ];

    for (value, pattern, expected) in cases {
        let condition: Condition = Expr::val(value).like(pattern).escape('!').into();
        assert_eq!(
            condition.eval_const().unwrap(),
            Some(expected),
            "{value} LIKE {pattern}"
        );
    }
}

#[test]
fn like_ignore_case_and_its_expansion() {
    let like = Expr::val("Hello").like("h%").ignore_case();
    let expanded = like.expand_ignore_case();

    assert_eq!(Condition::from(like).eval_const().unwrap(), Some(true));
    assert_eq!(Condition::from(expanded).eval_const().unwrap(), Some(true));
}

#[test]
fn not_like_with_null_is_unknown() {
    let condition: Condition = Expr::null().like("a%").negate().into();
    assert_eq!(condition.eval_const().unwrap(), None);
}

#[test]
fn boolean_field_as_predicate() {
    let condition = Condition::from(Expr::field("active"));
    assert_eq!(
        condition.eval([("active", Value::Bool(true))]).unwrap(),
        Some(true)
    );
    assert_eq!(condition.eval([("active", Value::Null)]).unwrap(), None);
}

#[test]
fn subqueries_cannot_be_evaluated() {
    let condition = Condition::exists(prism_core::stmt::Select::new().field(1));
    let err = condition.eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}
