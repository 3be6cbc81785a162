//! Free functions layered on `compare_and_set`.
//!
//! These work with every [`AtomicBase`](crate::AtomicBase) cell and mirror the
//! helpers a hardware-atomic backend offers. They are also reachable as
//! provided methods on the trait.

pub mod functional;
pub mod looping;

pub use functional::{get_and_update, try_update, update, update_and_get};
pub use looping::{loop_forever, loop_until};
