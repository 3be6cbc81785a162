//! The `AtomicBase` contract shared by every cell.

use core::ops::ControlFlow;

use crate::ops;

/// Atomic-variable shaped access to a single value.
///
/// Implementors are plain holders: every method is an ordinary read or write
/// with no memory ordering and no hardware compare-and-swap. The retry helpers
/// (`update`, `update_and_get`, `loop_until`, ...) are layered on
/// [`compare_and_set`](AtomicBase::compare_and_set) exactly as they would be on
/// a real atomic, so code written against this trait keeps its shape when a
/// hardware backend is substituted.
///
/// The provided methods forward to the free functions in [`crate::ops`].
pub trait AtomicBase {
    /// The value held by the cell.
    ///
    /// Equality must be reflexive (`Eq`): a value that is not equal to itself
    /// could never be committed by `compare_and_set`, and every retry helper
    /// would spin on it.
    type Value: Clone + Eq;

    /// Returns the current value.
    fn value(&self) -> Self::Value;

    /// Replaces the current value unconditionally.
    fn lazy_set(&self, value: Self::Value);

    /// Writes `update` if the current value equals `expect`.
    ///
    /// Returns `true` if the write happened. On `false` the cell is unchanged.
    fn compare_and_set(&self, expect: Self::Value, update: Self::Value) -> bool;

    /// Replaces the current value, returning the previous one.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Replaces the current value and returns **the value just written**.
    ///
    /// Unlike [`swap`](AtomicBase::swap) and the `getAndSet` of hardware
    /// atomics, the previous value is discarded. Callers that need it must use
    /// `swap`.
    #[inline]
    fn get_and_set(&self, value: Self::Value) -> Self::Value {
        let _previous = self.swap(value.clone());
        value
    }

    /// Applies `f` to the current value and commits the result.
    #[inline]
    fn update<F>(&self, f: F)
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        ops::update(self, f);
    }

    /// Applies `f` to the current value, commits the result and returns it.
    #[inline]
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        ops::update_and_get(self, f)
    }

    /// Applies `f` to the current value, commits the result and returns the
    /// value `f` was applied to.
    #[inline]
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        ops::get_and_update(self, f)
    }

    /// Like [`update_and_get`](AtomicBase::update_and_get), but `f` may refuse.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`; the cell is left unchanged.
    #[inline]
    fn try_update<E, F>(&self, f: F) -> Result<Self::Value, E>
    where
        F: FnMut(Self::Value) -> Result<Self::Value, E>,
    {
        ops::try_update(self, f)
    }

    /// Feeds the current value to `action` until it breaks.
    #[inline]
    fn loop_until<B, F>(&self, action: F) -> B
    where
        F: FnMut(Self::Value) -> ControlFlow<B>,
    {
        ops::loop_until(self, action)
    }

    /// Feeds the current value to `action` forever.
    ///
    /// The only way out is a panic raised by `action`.
    #[inline]
    fn loop_forever<F>(&self, action: F) -> !
    where
        F: FnMut(Self::Value),
    {
        ops::loop_forever(self, action)
    }
}
