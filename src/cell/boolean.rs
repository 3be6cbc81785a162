//! `AtomicBoolean` — a plain `bool` cell.

use core::cell::Cell;
use core::fmt;

use super::AtomicBase;

/// A plain `bool` cell with atomic-shaped access.
#[repr(transparent)]
pub struct AtomicBoolean {
    value: Cell<bool>,
}

impl AtomicBoolean {
    /// Creates a new boolean cell.
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Consumes the cell, returning the held value.
    #[inline(always)]
    pub fn into_inner(self) -> bool {
        self.value.into_inner()
    }

    /// Returns a mutable reference to the held value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut bool {
        self.value.get_mut()
    }

    #[inline(always)]
    pub(crate) fn load_copy(&self) -> bool {
        self.value.get()
    }
}

impl AtomicBase for AtomicBoolean {
    type Value = bool;

    #[inline(always)]
    fn value(&self) -> bool {
        self.load_copy()
    }

    #[inline(always)]
    fn lazy_set(&self, value: bool) {
        self.value.set(value);
    }

    #[inline(always)]
    fn compare_and_set(&self, expect: bool, update: bool) -> bool {
        if self.value.get() == expect {
            self.value.set(update);
            true
        } else {
            false
        }
    }

    #[inline(always)]
    fn swap(&self, value: bool) -> bool {
        self.value.replace(value)
    }
}

impl Default for AtomicBoolean {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBoolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBoolean").field(&self.load_copy()).finish()
    }
}
