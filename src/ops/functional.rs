//! Retry-until-committed updates layered on `compare_and_set`.
//!
//! Each helper reads the current value, computes a replacement and commits it
//! with `compare_and_set`, starting over if the cell changed in between. On
//! these cells the only thing that can change it in between is the closure
//! itself, so a well-behaved closure commits on the first attempt.

use core::convert::Infallible;

use crate::cell::AtomicBase;

/// Applies `f` to the current value and commits the result.
#[inline]
pub fn update<A, F>(cell: &A, mut f: F)
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> A::Value,
{
    match commit(cell, |current| Ok::<_, Infallible>(f(current))) {
        Ok(_) => {}
        Err(never) => match never {},
    }
}

/// Applies `f` to the current value, commits the result and returns it.
#[inline]
pub fn update_and_get<A, F>(cell: &A, mut f: F) -> A::Value
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> A::Value,
{
    match commit(cell, |current| Ok::<_, Infallible>(f(current))) {
        Ok((_, committed)) => committed,
        Err(never) => match never {},
    }
}

/// Applies `f` to the current value, commits the result and returns the
/// value it replaced.
#[inline]
pub fn get_and_update<A, F>(cell: &A, mut f: F) -> A::Value
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> A::Value,
{
    match commit(cell, |current| Ok::<_, Infallible>(f(current))) {
        Ok((previous, _)) => previous,
        Err(never) => match never {},
    }
}

/// Like [`update_and_get`], but `f` may refuse to produce a value.
///
/// # Errors
///
/// Returns the error from `f` unchanged. Nothing is written in that case.
#[inline]
pub fn try_update<A, E, F>(cell: &A, f: F) -> Result<A::Value, E>
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> Result<A::Value, E>,
{
    commit(cell, f).map(|(_, committed)| committed)
}

/// The retry loop behind every helper above.
///
/// Returns `(observed, committed)` for the attempt that won.
fn commit<A, E, F>(cell: &A, mut f: F) -> Result<(A::Value, A::Value), E>
where
    A: AtomicBase + ?Sized,
    F: FnMut(A::Value) -> Result<A::Value, E>,
{
    let mut attempt: u32 = 0;
    loop {
        let current = cell.value();
        let updated = f(current.clone())?;
        if cell.compare_and_set(current.clone(), updated.clone()) {
            return Ok((current, updated));
        }
        attempt = attempt.wrapping_add(1);
        lost_race(attempt);
    }
}

#[inline]
fn lost_race(attempt: u32) {
    #[cfg(feature = "tracing")]
    tracing::trace!(attempt, "compare_and_set saw a newer value; retrying update");
    #[cfg(not(feature = "tracing"))]
    let _ = attempt;
}
