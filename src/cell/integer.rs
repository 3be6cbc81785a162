//! Integer cells with arithmetic read-modify-write helpers.
//!
//! The arithmetic methods mutate the stored value directly; they are not built
//! on `compare_and_set`. All arithmetic wraps on overflow.

use core::cell::Cell;
use core::fmt;

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

use super::AtomicBase;

/// A plain integer cell with atomic-shaped access.
///
/// # Examples
///
/// ```
/// use nonatomic::{AtomicBase, AtomicInt};
///
/// let hits = AtomicInt::new(10);
/// assert_eq!(hits.get_and_add(5), 10);
/// assert_eq!(hits.value(), 15);
/// assert_eq!(hits.decrement_and_get(), 14);
/// ```
#[repr(transparent)]
pub struct AtomicInteger<N> {
    value: Cell<N>,
}

/// 32-bit integer cell.
pub type AtomicInt = AtomicInteger<i32>;

/// 64-bit integer cell.
pub type AtomicLong = AtomicInteger<i64>;

impl<N> AtomicInteger<N> {
    /// Creates a new integer cell.
    #[inline(always)]
    pub const fn new(value: N) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Consumes the cell, returning the held value.
    #[inline(always)]
    pub fn into_inner(self) -> N {
        self.value.into_inner()
    }

    /// Returns a mutable reference to the held value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut N {
        self.value.get_mut()
    }
}

impl<N: Copy> AtomicInteger<N> {
    #[inline(always)]
    pub(crate) fn load_copy(&self) -> N {
        self.value.get()
    }
}

impl<N: PrimInt + WrappingAdd + WrappingSub> AtomicInteger<N> {
    /// Adds `delta`, returning the value before the addition.
    #[inline(always)]
    pub fn get_and_add(&self, delta: N) -> N {
        let old = self.value.get();
        self.value.set(old.wrapping_add(&delta));
        old
    }

    /// Adds `delta`, returning the value after the addition.
    ///
    /// Computed as `get_and_add(delta) + delta`: the cell is mutated once.
    #[inline(always)]
    pub fn add_and_get(&self, delta: N) -> N {
        self.get_and_add(delta).wrapping_add(&delta)
    }

    /// Subtracts `delta`, returning the value before the subtraction.
    #[inline(always)]
    pub fn get_and_sub(&self, delta: N) -> N {
        let old = self.value.get();
        self.value.set(old.wrapping_sub(&delta));
        old
    }

    /// Subtracts `delta`, returning the value after the subtraction.
    #[inline(always)]
    pub fn sub_and_get(&self, delta: N) -> N {
        self.get_and_sub(delta).wrapping_sub(&delta)
    }

    /// Adds one, returning the new value.
    #[inline(always)]
    pub fn increment_and_get(&self) -> N {
        self.add_and_get(N::one())
    }

    /// Subtracts one, returning the new value.
    #[inline(always)]
    pub fn decrement_and_get(&self) -> N {
        self.sub_and_get(N::one())
    }

    /// Adds one, returning the old value.
    #[inline(always)]
    pub fn get_and_increment(&self) -> N {
        self.get_and_add(N::one())
    }

    /// Subtracts one, returning the old value.
    #[inline(always)]
    pub fn get_and_decrement(&self) -> N {
        self.get_and_sub(N::one())
    }
}

impl<N: PrimInt> AtomicBase for AtomicInteger<N> {
    type Value = N;

    #[inline(always)]
    fn value(&self) -> N {
        self.load_copy()
    }

    #[inline(always)]
    fn lazy_set(&self, value: N) {
        self.value.set(value);
    }

    #[inline(always)]
    fn compare_and_set(&self, expect: N, update: N) -> bool {
        if self.value.get() == expect {
            self.value.set(update);
            true
        } else {
            false
        }
    }

    #[inline(always)]
    fn swap(&self, value: N) -> N {
        self.value.replace(value)
    }
}

impl<N: Default> Default for AtomicInteger<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N> From<N> for AtomicInteger<N> {
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

impl<N: Copy + fmt::Debug> fmt::Debug for AtomicInteger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicInteger").field(&self.load_copy()).finish()
    }
}
