use nonatomic::{AtomicBase, AtomicInt, AtomicRef};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    LazySet(i32),
    CompareAndSet(i32, i32),
    GetAndSet(i32),
    Swap(i32),
    GetAndAdd(i32),
    AddAndGet(i32),
    Increment,
    Decrement,
}

fn operation() -> impl Strategy<Value = Operation> {
    // Small values make compare-and-set hits likely.
    let small = -4..4_i32;
    prop_oneof![
        small.clone().prop_map(Operation::LazySet),
        (small.clone(), any::<i32>()).prop_map(|(e, u)| Operation::CompareAndSet(e, u)),
        any::<i32>().prop_map(Operation::GetAndSet),
        any::<i32>().prop_map(Operation::Swap),
        any::<i32>().prop_map(Operation::GetAndAdd),
        small.prop_map(Operation::AddAndGet),
        Just(Operation::Increment),
        Just(Operation::Decrement),
    ]
}

proptest! {
    #[test]
    fn int_cell_matches_a_plain_variable(
        initial in any::<i32>(),
        ops in proptest::collection::vec(operation(), 1..100),
    ) {
        let cell = AtomicInt::new(initial);
        let mut model = initial;

        for op in ops {
            match op {
                Operation::LazySet(v) => {
                    cell.lazy_set(v);
                    model = v;
                }
                Operation::CompareAndSet(expect, update) => {
                    let hit = model == expect;
                    prop_assert_eq!(cell.compare_and_set(expect, update), hit);
                    if hit {
                        model = update;
                    }
                }
                Operation::GetAndSet(v) => {
                    prop_assert_eq!(cell.get_and_set(v), v);
                    model = v;
                }
                Operation::Swap(v) => {
                    prop_assert_eq!(cell.swap(v), model);
                    model = v;
                }
                Operation::GetAndAdd(n) => {
                    prop_assert_eq!(cell.get_and_add(n), model);
                    model = model.wrapping_add(n);
                }
                Operation::AddAndGet(n) => {
                    model = model.wrapping_add(n);
                    prop_assert_eq!(cell.add_and_get(n), model);
                }
                Operation::Increment => {
                    model = model.wrapping_add(1);
                    prop_assert_eq!(cell.increment_and_get(), model);
                }
                Operation::Decrement => {
                    prop_assert_eq!(cell.get_and_decrement(), model);
                    model = model.wrapping_sub(1);
                }
            }
            prop_assert_eq!(cell.value(), model);
        }
    }

    #[test]
    fn update_and_get_commits_the_function_result(initial in ".{0,16}", suffix in ".{0,4}") {
        let cell = AtomicRef::new(initial.clone());
        let committed = cell.update_and_get(|s| s + &suffix);
        prop_assert_eq!(&committed, &format!("{initial}{suffix}"));
        prop_assert_eq!(cell.value(), committed);
    }
}
