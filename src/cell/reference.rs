//! `AtomicRef<T>` — a cell over an arbitrary value compared with `Eq`.

use core::cell::RefCell;
use core::fmt;

use super::AtomicBase;

/// A cell holding any `T`, with atomic-shaped access.
///
/// Reads hand out clones; the stored value is never borrowed across a call
/// into user code that could write to the same cell.
///
/// Values must be `Eq`. Types whose equality is not reflexive, such as `f64`
/// with its NaN, are rejected because a NaN cell could never pass
/// `compare_and_set` and `update` would retry forever:
///
/// ```compile_fail
/// use nonatomic::{AtomicBase, AtomicRef};
///
/// let cell = AtomicRef::new(f64::NAN);
/// cell.update(|v| v + 1.0);
/// ```
///
/// # Panics
///
/// The `PartialEq` and `Clone` impls of `T` run while the value is borrowed.
/// If either of them writes to this same cell, the write panics.
///
/// # Examples
///
/// ```
/// use nonatomic::{AtomicBase, AtomicRef};
///
/// let name = AtomicRef::new(String::from("idle"));
/// assert!(name.compare_and_set("idle".to_string(), "busy".to_string()));
/// assert!(!name.compare_and_set("idle".to_string(), "done".to_string()));
/// assert_eq!(name.value(), "busy");
/// ```
pub struct AtomicRef<T> {
    inner: RefCell<T>,
}

impl<T> AtomicRef<T> {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            inner: RefCell::new(value),
        }
    }

    /// Consumes the cell, returning the held value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    /// Returns a mutable reference to the held value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    /// Runs `f` against a shared borrow of the held value.
    #[inline(always)]
    pub(crate) fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }
}

impl<T: Clone + Eq> AtomicBase for AtomicRef<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> T {
        self.inner.borrow().clone()
    }

    #[inline]
    fn lazy_set(&self, value: T) {
        // The old value drops after the borrow is released.
        drop(self.inner.replace(value));
    }

    #[inline]
    fn compare_and_set(&self, expect: T, update: T) -> bool {
        let matches = *self.inner.borrow() == expect;
        if matches {
            drop(self.inner.replace(update));
        }
        matches
    }

    #[inline]
    fn swap(&self, value: T) -> T {
        self.inner.replace(value)
    }
}

impl<T: Default> Default for AtomicRef<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for AtomicRef<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(value) => f.debug_tuple("AtomicRef").field(&*value).finish(),
            Err(_) => f.debug_tuple("AtomicRef").field(&"<borrowed>").finish(),
        }
    }
}
