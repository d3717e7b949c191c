use prism_core::stmt::{Condition, Expr};

fn or(operands: Vec<Condition>) -> Condition {
    Condition::Or(operands)
}

fn unknown() -> Condition {
    Condition::Field(Expr::null())
}

#[test]
fn or_any_true_is_true() {
    assert_eq!(
        or(vec![false.into(), true.into()]).eval_const().unwrap(),
        Some(true)
    );
}

#[test]
fn or_all_false_is_false() {
    assert_eq!(
        or(vec![false.into(), false.into()]).eval_const().unwrap(),
        Some(false)
    );
}

#[test]
fn or_true_beats_unknown() {
    assert_eq!(
        or(vec![unknown(), true.into()]).eval_const().unwrap(),
        Some(true)
    );
}

#[test]
fn or_false_with_unknown_is_unknown() {
    assert_eq!(
        or(vec![false.into(), unknown()]).eval_const().unwrap(),
        None
    );
}

#[test]
fn or_empty_is_false() {
    assert_eq!(or(vec![]).eval_const().unwrap(), Some(false));
}

#[test]
fn smart_or_drops_false() {
    let a = Expr::field("a").eq(1);
    assert_eq!(Condition::or(Condition::False, a.clone()), a);
    assert_eq!(
        Condition::or_any(Vec::<Condition>::new()),
        Condition::False
    );
}
