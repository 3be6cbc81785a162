//! Unbounded loops over a cell's value.
//!
//! `loop_forever` is the literal form: it never returns and the callback has to
//! leave by panicking. `loop_until` lets the callback leave by returning
//! `ControlFlow::Break`.

use core::ops::ControlFlow;

use crate::cell::AtomicBase;

/// Calls `action` with the current value, over and over, forever.
///
/// There is no exit condition. The only way out is a panic raised from
/// `action`, which unwinds through this function.
#[inline]
pub fn loop_forever<A, F>(cell: &A, mut action: F) -> !
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value),
{
    loop {
        action(cell.value());
    }
}

/// Calls `action` with the current value until it returns `Break`.
///
/// The value carried by `Break` is returned. Each call observes the value as
/// it is at that moment, including writes made by earlier calls.
///
/// ```
/// use core::ops::ControlFlow;
/// use nonatomic::{atomic, ops, AtomicBase};
///
/// let state = atomic(0_i32);
/// let seen = ops::loop_until(&state, |current| {
///     if current == 3 {
///         return ControlFlow::Break(current * 10);
///     }
///     state.compare_and_set(current, current + 1);
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, 30);
/// ```
#[inline]
pub fn loop_until<A, B, F>(cell: &A, mut action: F) -> B
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> ControlFlow<B>,
{
    let mut iterations: u64 = 0;
    loop {
        iterations = iterations.wrapping_add(1);
        if let ControlFlow::Break(result) = action(cell.value()) {
            finished(iterations);
            return result;
        }
    }
}

#[inline]
fn finished(iterations: u64) {
    #[cfg(feature = "tracing")]
    tracing::debug!(iterations, "loop_until stopped");
    #[cfg(not(feature = "tracing"))]
    let _ = iterations;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{AtomicBoolean, AtomicInt};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn loop_until_observes_each_write() {
        let cell = AtomicInt::new(0);
        let mut seen = Vec::new();
        let last = loop_until(&cell, |v| {
            seen.push(v);
            if v == 4 {
                ControlFlow::Break(v)
            } else {
                cell.lazy_set(v + 1);
                ControlFlow::Continue(())
            }
        });
        assert_eq!(last, 4);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn loop_forever_leaves_only_by_panic() {
        let flag = AtomicBoolean::new(true);
        let mut calls = 0;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            loop_forever(&flag, |v| {
                assert!(v);
                calls += 1;
                if calls == 5 {
                    panic::panic_any(calls);
                }
            })
        }));
        let payload = outcome.expect_err("loop_forever cannot return");
        assert_eq!(payload.downcast_ref::<i32>(), Some(&5));
        assert_eq!(calls, 5);
    }
}
