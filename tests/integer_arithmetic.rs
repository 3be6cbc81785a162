use nonatomic::{AtomicBase, AtomicInt, AtomicLong};

#[test]
fn get_and_add_returns_value_before_addition() {
    let cell = AtomicInt::new(10);
    assert_eq!(cell.get_and_add(5), 10);
    assert_eq!(cell.value(), 15);
}

#[test]
fn add_and_get_mutates_exactly_once() {
    let cell = AtomicInt::new(10);
    assert_eq!(cell.add_and_get(3), 13);
    assert_eq!(cell.value(), 13);

    let long = AtomicLong::new(10);
    assert_eq!(long.add_and_get(5), 15);
    assert_eq!(long.value(), 15);

    assert_eq!(long.add_and_get(-20), -5);
    assert_eq!(long.value(), -5);
}

#[test]
fn unit_steps_match_their_general_forms() {
    let a = AtomicInt::new(7);
    let b = AtomicInt::new(7);
    assert_eq!(a.increment_and_get(), b.add_and_get(1));
    assert_eq!(a.decrement_and_get(), b.add_and_get(-1));
    assert_eq!(a.get_and_increment(), b.get_and_add(1));
    assert_eq!(a.get_and_decrement(), b.get_and_add(-1));
    assert_eq!(a.value(), b.value());
    assert_eq!(a.value(), 7);
}

#[test]
fn unit_steps_report_the_expected_side_of_the_change() {
    let cell = AtomicLong::new(0);
    assert_eq!(cell.get_and_increment(), 0);
    assert_eq!(cell.increment_and_get(), 2);
    assert_eq!(cell.get_and_decrement(), 2);
    assert_eq!(cell.decrement_and_get(), 0);
}

#[test]
fn subtraction_forms() {
    let cell = AtomicInt::new(20);
    assert_eq!(cell.get_and_sub(5), 20);
    assert_eq!(cell.sub_and_get(5), 10);
    assert_eq!(cell.value(), 10);
}

#[test]
fn arithmetic_wraps_on_overflow() {
    let cell = AtomicInt::new(i32::MAX);
    assert_eq!(cell.increment_and_get(), i32::MIN);

    let long = AtomicLong::new(i64::MIN);
    assert_eq!(long.get_and_decrement(), i64::MIN);
    assert_eq!(long.value(), i64::MAX);
}
