//! CacheCell: a matrix value paired with its lazily computed inverse.
//!
//! The cell owns its value exclusively. Replacing the value through
//! [`CacheCell::set`] always drops the cached inverse, whether or not the new
//! value is numerically equal to the old one: change detection is by
//! replacement, not by comparison. Callers that want to keep the cache must
//! simply not call `set`.
//!
//! # Examples
//! ```rust
//! use matrix_memo::prelude::*;
//!
//! let mut cell = CacheCell::new(faer::mat![[1.0, 3.0], [2.0, 4.0]]);
//! assert!(cell.cached_inverse().is_none());
//!
//! let inv = solve(&cell, &LuInverse, &InvertOptions::default())?.clone();
//! assert_eq!(cell.cached_inverse(), Some(&inv));
//!
//! cell.set(faer::mat![[5.0, 7.0], [6.0, 8.0]]);
//! assert!(cell.cached_inverse().is_none());
//! # Ok::<(), matrix_memo::matrix_error::MatrixError>(())
//! ```

use super::cache::{CacheState, InvalidateCache};
use crate::debug_invariants::DebugInvariants;
use crate::linalg::{Invert, InvertOptions, LuInverse};
use crate::matrix::{self, Matrix};
use crate::matrix_error::MatrixError;
use once_cell::sync::OnceCell;

/// A value together with an optional memoized inverse.
///
/// # Invariants
/// When `inverse` is populated it was computed from (or supplied for) the
/// value currently held; no `set` has happened since.
#[derive(Clone, Debug, Default)]
pub struct CacheCell<M> {
    /// Current value; replaced wholesale, never edited in place.
    value: M,
    /// Memoized inverse of `value`, empty until first computed.
    inverse: OnceCell<M>,
}

impl<M> CacheCell<M> {
    /// Create a cell holding `value` with an empty cache.
    pub fn new(value: M) -> Self {
        Self {
            value,
            inverse: OnceCell::new(),
        }
    }

    /// Replace the held value and invalidate the cached inverse.
    ///
    /// Invalidation is unconditional, even when `value` equals the old one.
    pub fn set(&mut self, value: M) {
        self.value = value;
        InvalidateCache::invalidate_cache(self);
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> &M {
        &self.value
    }

    /// Store `inverse` as the cached inverse of the current value.
    ///
    /// Nothing checks that `inverse` actually inverts [`get`](Self::get);
    /// passing anything else breaks the cell's invariant until the next
    /// [`set`](Self::set). [`solve`](crate::memo::solve) is the intended caller.
    pub fn set_cached_inverse(&mut self, inverse: M) {
        self.inverse = OnceCell::with_value(inverse);
    }

    /// The cached inverse, or `None` if it has not been computed since the
    /// last [`set`](Self::set).
    #[inline]
    pub fn cached_inverse(&self) -> Option<&M> {
        self.inverse.get()
    }

    /// True when an inverse is cached.
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.inverse.get().is_some()
    }

    /// Consume the cell, returning the value and any cached inverse.
    pub fn into_parts(self) -> (M, Option<M>) {
        (self.value, self.inverse.into_inner())
    }

    /// Return the cached inverse, computing and storing it with `compute` if
    /// absent. On `Err` nothing is stored.
    #[inline]
    pub(crate) fn inverse_or_try_init<E>(
        &self,
        compute: impl FnOnce(&M) -> Result<M, E>,
    ) -> Result<&M, E> {
        self.inverse.get_or_try_init(|| compute(&self.value))
    }

    /// Shorthand for [`solve(self, routine, options)`](crate::memo::solve).
    pub fn solve_with<R: Invert<M>>(
        &self,
        routine: &R,
        options: &R::Options,
    ) -> Result<&M, R::Error> {
        super::solve(self, routine, options)
    }
}

impl CacheCell<Matrix> {
    /// Cached inverse using the bundled [`LuInverse`] routine.
    pub fn inverse(&self, options: &InvertOptions) -> Result<&Matrix, MatrixError> {
        self.solve_with(&LuInverse, options)
    }
}

impl<M> From<M> for CacheCell<M> {
    fn from(value: M) -> Self {
        Self::new(value)
    }
}

impl<M> InvalidateCache for CacheCell<M> {
    #[inline]
    fn invalidate_cache(&mut self) {
        if self.inverse.take().is_some() {
            log::trace!("cached inverse invalidated");
        }
    }

    #[inline]
    fn cache_state(&self) -> CacheState {
        if self.is_cached() {
            CacheState::Populated
        } else {
            CacheState::Empty
        }
    }
}

impl DebugInvariants for CacheCell<Matrix> {
    /// Checks that a cached inverse has the value's shape, is finite, and
    /// that the residual `‖A·X − I‖∞` stays within the backward-error bound
    /// `8·n·ε·‖A‖∞·‖X‖∞` (floored at `n·ε`).
    fn validate_invariants(&self) -> Result<(), MatrixError> {
        let Some(inv) = self.cached_inverse() else {
            return Ok(());
        };
        let a = &self.value;
        let (shape, inv_shape) = ((a.nrows(), a.ncols()), (inv.nrows(), inv.ncols()));
        if shape != inv_shape {
            log::warn!("cached inverse shape {inv_shape:?} does not match value shape {shape:?}");
            return Err(MatrixError::StaleInverse(format!(
                "inverse is {inv_shape:?}, value is {shape:?}"
            )));
        }
        if !matrix::all_finite(inv) {
            log::warn!("cached inverse has non-finite entries");
            return Err(MatrixError::StaleInverse(
                "inverse has non-finite entries".into(),
            ));
        }
        let n = a.nrows().max(1) as f64;
        let scale = matrix::norm_inf(a) * matrix::norm_inf(inv);
        let bound = (8.0 * n * f64::EPSILON * scale).max(n * f64::EPSILON);
        let residual = matrix::identity_residual(&(a * inv));
        if residual.is_nan() || residual > bound {
            log::warn!("cached inverse residual {residual:e} exceeds {bound:e}");
            return Err(MatrixError::StaleInverse(format!(
                "value × inverse is off the identity by {residual:e} (bound {bound:e})"
            )));
        }
        Ok(())
    }
}
