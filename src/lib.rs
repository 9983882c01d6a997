#![cfg_attr(docsrs, feature(doc_cfg))]
//! # matrix-memo
//!
//! matrix-memo wraps matrix inversion in a cache. A [`CacheCell`](memo::CacheCell)
//! holds a matrix and, once computed, its inverse; [`solve`](memo::solve)
//! returns the cached inverse or computes and stores it; replacing the matrix
//! with [`CacheCell::set`](memo::CacheCell::set) throws the inverse away.
//!
//! ## Features
//! - Lazy, at-most-once inversion per held value
//! - Unconditional invalidation on replacement (no element-wise comparison)
//! - Pluggable inversion routines through the [`Invert`](linalg::Invert) trait,
//!   with a bundled routine ([`LuInverse`](linalg::LuInverse)) backed by
//!   faer's partially pivoted LU
//! - A lock-guarded [`SharedCacheCell`](memo::SharedCacheCell) for shared mutation
//!
//! ## Errors
//! The cache never fails on its own. `solve` returns exactly what the routine
//! returns; on failure nothing is cached, so a later call retries.
//!
//! ## Logging
//! Diagnostics go through the [`log`] facade: `debug` on a cache hit, `trace`
//! on compute and invalidation. Install any `log` backend to see them.
//!
//! ## Usage
//! ```rust
//! use matrix_memo::matrix;
//! use matrix_memo::prelude::*;
//!
//! let cell = CacheCell::new(matrix::from_rows(vec![vec![1.0, 3.0], vec![2.0, 4.0]])?);
//! let inv = cell.inverse(&InvertOptions::default())?;
//! let expected = matrix::from_rows(vec![vec![-2.0, 1.5], vec![1.0, -0.5]])?;
//! assert!(matrix::approx_eq(inv, &expected, 1e-12));
//! # Ok::<(), matrix_memo::matrix_error::MatrixError>(())
//! ```

pub mod debug_invariants;
pub mod linalg;
pub mod matrix;
pub mod matrix_error;
pub mod memo;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::linalg::{Invert, InvertOptions, LuInverse};
    pub use crate::matrix::Matrix;
    pub use crate::matrix_error::MatrixError;
    pub use crate::memo::{CacheCell, CacheState, InvalidateCache, SharedCacheCell, solve};
}
