//! Constructor-style factories.

use super::{AtomicBase, AtomicBoolean, AtomicInteger, AtomicRef};

/// Values that have a dedicated cell type.
pub trait IntoAtomic: Sized {
    /// The cell type holding `Self`.
    type Atomic: AtomicBase<Value = Self>;

    /// Wraps `self` in its cell.
    fn into_atomic(self) -> Self::Atomic;
}

impl IntoAtomic for bool {
    type Atomic = AtomicBoolean;

    #[inline(always)]
    fn into_atomic(self) -> AtomicBoolean {
        AtomicBoolean::new(self)
    }
}

macro_rules! impl_into_atomic_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl IntoAtomic for $int {
                type Atomic = AtomicInteger<$int>;

                #[inline(always)]
                fn into_atomic(self) -> AtomicInteger<$int> {
                    AtomicInteger::new(self)
                }
            }
        )*
    };
}

impl_into_atomic_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Creates the cell for a primitive value.
///
/// `i32` yields an [`AtomicInt`](super::AtomicInt), `i64` an
/// [`AtomicLong`](super::AtomicLong) and `bool` an [`AtomicBoolean`].
///
/// ```
/// use nonatomic::{atomic, AtomicBase};
///
/// let ready = atomic(false);
/// assert!(ready.compare_and_set(false, true));
///
/// let total = atomic(7_i64);
/// assert_eq!(total.add_and_get(3), 10);
/// ```
#[inline(always)]
pub fn atomic<T: IntoAtomic>(initial: T) -> T::Atomic {
    initial.into_atomic()
}

/// Creates a reference cell for any comparable value.
#[inline(always)]
pub fn atomic_ref<T: Clone + Eq>(initial: T) -> AtomicRef<T> {
    AtomicRef::new(initial)
}
