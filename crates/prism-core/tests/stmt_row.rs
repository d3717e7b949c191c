use prism_core::stmt::{Condition, Expr, Row, Select};

fn row<const N: usize>(values: [i32; N]) -> Row {
    Row::from(values)
}

#[test]
fn row_equality() {
    assert_eq!(row([1, 2]).eq(row([1, 2])).eval_const().unwrap(), Some(true));
    assert_eq!(row([1, 2]).eq(row([1, 3])).eval_const().unwrap(), Some(false));
    assert_eq!(row([1, 2]).ne(row([1, 3])).eval_const().unwrap(), Some(true));
}

#[test]
fn row_equality_with_null() {
    let lhs = || Row::from([Expr::val(1), Expr::null()]);

    // A known mismatch decides the comparison despite the NULL.
    assert_eq!(lhs().eq(row([2, 1])).eval_const().unwrap(), Some(false));
    assert_eq!(lhs().eq(row([1, 1])).eval_const().unwrap(), None);
    assert_eq!(lhs().ne(row([1, 1])).eval_const().unwrap(), None);
}

#[test]
fn row_ordering_is_lexicographic() {
    let cases = [
        ([1, 2, 3], [1, 2, 4], Some(true)),
        ([1, 2, 3], [1, 2, 3], Some(false)),
        ([1, 3, 0], [1, 2, 9], Some(false)),
        ([0, 9, 9], [1, 0, 0], Some(true)),
    ];

    for (lhs, rhs, expected) in cases {
        assert_eq!(
            row(lhs).lt(row(rhs)).eval_const().unwrap(),
            expected,
            "{lhs:?} < {rhs:?}"
        );
    }

    assert_eq!(
        row([1, 2, 3]).ge(row([1, 2, 3])).eval_const().unwrap(),
        Some(true)
    );
    assert_eq!(
        row([1, 2, 3]).le(row([1, 2, 2])).eval_const().unwrap(),
        Some(false)
    );
}

#[test]
fn row_ordering_expansion_shape() {
    let condition = Row::from([Expr::field("a"), Expr::field("b")]).gt(row([1, 2]));
    let Condition::RowCompare(compare) = &condition else {
        panic!("expected a row comparison, got {condition:?}");
    };

    let expected = Condition::or(
        Expr::field("a").gt(1),
        Condition::and(Expr::field("a").eq(1), Expr::field("b").gt(2)),
    );

    assert_eq!(compare.expand().unwrap(), expected);
}

#[test]
fn row_in_list() {
    let list = || vec![row([1, 2]), row([3, 4])];

    assert_eq!(row([3, 4]).in_list(list()).eval_const().unwrap(), Some(true));
    assert_eq!(row([3, 5]).in_list(list()).eval_const().unwrap(), Some(false));
    assert_eq!(
        row([3, 5]).not_in_list(list()).eval_const().unwrap(),
        Some(true)
    );
}

#[test]
fn row_is_null_is_not_the_negation_of_is_not_null() {
    let mixed = || Row::from([Expr::val(1), Expr::null()]);

    assert_eq!(mixed().is_null().eval_const().unwrap(), Some(false));
    assert_eq!(mixed().is_not_null().eval_const().unwrap(), Some(false));

    let nulls = Row::from([Expr::null(), Expr::null()]);
    assert_eq!(nulls.is_null().eval_const().unwrap(), Some(true));
}

#[test]
fn row_between() {
    assert_eq!(
        row([2, 5]).between(row([1, 9]), row([2, 6])).eval_const().unwrap(),
        Some(true)
    );
    assert_eq!(
        row([2, 7]).between(row([1, 9]), row([2, 6])).eval_const().unwrap(),
        Some(false)
    );
}

#[test]
fn row_arity_mismatch_is_invalid() {
    let err = row([1, 2]).eq(row([1, 2, 3])).eval_const().unwrap_err();
    assert!(err.is_invalid_statement());

    let err = row([1]).in_list(vec![row([1, 2])]).eval_const().unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn row_in_select_expands_to_exists() {
    let select = Select::new()
        .field(Expr::field("x"))
        .field(Expr::field("y"))
        .from("t2");

    let condition = Row::from([Expr::field("a"), Expr::field("b")]).in_select(select);
    let Condition::RowInSelect(in_select) = &condition else {
        panic!("expected row IN (subquery), got {condition:?}");
    };

    let Condition::Exists(exists) = in_select.expand().unwrap() else {
        panic!("expected EXISTS");
    };
    assert!(!exists.negate);
    assert_eq!(
        exists.select.filter,
        Some(Condition::and(
            Expr::field(["t", "c1"]).eq(Expr::field("a")),
            Expr::field(["t", "c2"]).eq(Expr::field("b")),
        ))
    );
}

#[test]
fn row_in_select_checks_column_count() {
    let select = Select::new().field(Expr::field("x")).from("t2");
    let condition = Row::from([Expr::field("a"), Expr::field("b")]).in_select(select);
    let Condition::RowInSelect(in_select) = &condition else {
        panic!("expected row IN (subquery)");
    };

    assert!(in_select.expand().unwrap_err().is_invalid_statement());
}
