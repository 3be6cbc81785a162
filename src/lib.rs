//! # `nonatomic` - Single-Threaded Atomic Stand-Ins
//!
//! Plain mutable cells exposing the API of atomic variables: `value`,
//! `lazy_set`, `compare_and_set`, `get_and_set`, integer arithmetic, and the
//! retry helpers `update`, `update_and_get` and `loop`.
//!
//! ## What this is not
//!
//! Nothing in this crate is atomic. Every operation is an ordinary load or
//! store, read-modify-write sequences are not indivisible, and no memory
//! ordering is implied. The cells are built on `core::cell::Cell` and
//! `core::cell::RefCell`, so they are `!Sync` and the compiler refuses to
//! share them between threads.
//!
//! They exist for code written against an atomic-shaped API that runs on a
//! single thread: fallback builds without hardware atomics and tests.
//!
//! ## Layers
//!
//! 1. **Contract** ([`AtomicBase`]): read, lazy write, compare-and-set, swap.
//! 2. **Cells** ([`AtomicRef`], [`AtomicBoolean`], [`AtomicInt`],
//!    [`AtomicLong`]): concrete holders; integer cells add
//!    `get_and_add`/`add_and_get` and the ±1 shorthands, which mutate
//!    directly rather than through compare-and-set.
//! 3. **Retry helpers** ([`ops`]): `update`, `update_and_get`,
//!    `get_and_update`, `try_update`, `loop_until`, `loop_forever`, all built
//!    on `compare_and_set`.
//!
//! ## `get_and_set` returns the new value
//!
//! [`AtomicBase::get_and_set`] returns the value it wrote, not the one it
//! replaced. Use [`AtomicBase::swap`] for the conventional exchange.
//!
//! ## Example
//!
//! ```rust
//! use nonatomic::{atomic, atomic_ref, AtomicBase};
//!
//! let counter = atomic(5_i32);
//! assert!(counter.compare_and_set(5, 9));
//! assert!(!counter.compare_and_set(5, 1));
//! assert_eq!(counter.value(), 9);
//!
//! assert_eq!(counter.get_and_set(3), 3);
//! assert_eq!(counter.update_and_get(|v| v * 7), 21);
//!
//! let label = atomic_ref(vec!["a"]);
//! label.update(|mut v| {
//!     v.push("b");
//!     v
//! });
//! assert_eq!(label.value(), ["a", "b"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod ops;

pub use cell::{
    atomic, atomic_ref, AtomicBase, AtomicBoolean, AtomicInt, AtomicInteger, AtomicLong, AtomicRef,
    IntoAtomic,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Primitive cells are `repr(transparent)` over `Cell<_>`, so they add nothing.
    assert!(mem::size_of::<AtomicInt>() == mem::size_of::<i32>());
    assert!(mem::align_of::<AtomicInt>() == mem::align_of::<i32>());
    assert!(mem::size_of::<AtomicLong>() == mem::size_of::<i64>());
    assert!(mem::align_of::<AtomicLong>() == mem::align_of::<i64>());
    assert!(mem::size_of::<AtomicBoolean>() == mem::size_of::<bool>());

    // `AtomicRef` carries one borrow flag next to the value.
    assert!(mem::size_of::<AtomicRef<u64>>() <= mem::size_of::<u64>() + mem::size_of::<usize>());
};
