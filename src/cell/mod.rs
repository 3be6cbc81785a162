//! Cell family - plain value holders with an atomic-variable API.
//!
//! The module tree is layered:
//! - `base` defines the [`AtomicBase`] contract every cell implements.
//! - `reference`, `boolean` and `integer` are the concrete cells.
//! - `factory` holds the constructor-style entry points.
//!
//! None of these cells synchronize. They store their value in
//! `core::cell::Cell`/`RefCell` and are therefore `!Sync`.

pub mod base;
pub mod boolean;
pub mod factory;
pub mod integer;
pub mod reference;
mod serialize;

pub use base::AtomicBase;
pub use boolean::AtomicBoolean;
pub use factory::{atomic, atomic_ref, IntoAtomic};
pub use integer::{AtomicInt, AtomicInteger, AtomicLong};
pub use reference::AtomicRef;
