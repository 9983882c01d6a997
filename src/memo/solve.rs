//! Memoized inversion over a [`CacheCell`].

use super::cell::CacheCell;
use crate::linalg::Invert;

/// Return the inverse of `cell`'s value, computing it at most once.
///
/// - If the cell already holds an inverse, it is returned as-is and a
///   `debug` log notice is emitted; nothing is recomputed or written.
/// - Otherwise `routine.invert(cell.get(), options)` runs, its result is
///   stored in the cell, and a reference to the stored inverse is returned.
///
/// `options` is forwarded to the routine verbatim.
///
/// # Errors
/// Whatever `routine` returns, unchanged. On error the cell is left exactly as
/// it was (no inverse is stored), so calling `solve` again retries the full
/// computation.
///
/// # Concurrency
/// Only `&CacheCell` is needed. If several threads share a cell and call
/// `solve` while it is empty, one computes and stores; the others block until
/// the inverse is available. [`CacheCell::set`] takes `&mut self`, so it can
/// never overlap an in-flight `solve`.
pub fn solve<'c, M, R>(
    cell: &'c CacheCell<M>,
    routine: &R,
    options: &R::Options,
) -> Result<&'c M, R::Error>
where
    R: Invert<M> + ?Sized,
{
    if let Some(inverse) = cell.cached_inverse() {
        log::debug!("returning cached inverse");
        return Ok(inverse);
    }
    cell.inverse_or_try_init(|value| {
        log::trace!("cache miss: computing inverse");
        routine.invert(value, options)
    })
}
