//! MatrixError: Unified error type for matrix-memo public APIs
//!
//! Matrix construction and the bundled inversion routine report failures
//! through this type. The cache layer itself never fails;
//! [`solve`](crate::memo::solve) forwards whatever its routine returns.

use thiserror::Error;

/// Unified error type for matrix-memo operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    /// A row passed to [`from_rows`](crate::matrix::from_rows) has a different
    /// length than the first row.
    #[error("Ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Offending row index.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// Flat storage length does not equal `rows * cols`.
    #[error("Data length mismatch: expected {expected} elements, found {found}")]
    DataLength { expected: usize, found: usize },
    /// `rows * cols` does not fit in `usize`.
    #[error("Shape overflow: {rows}x{cols} elements cannot be addressed")]
    ShapeOverflow { rows: usize, cols: usize },
    /// Inversion requires a square matrix.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// No usable inverse: the matrix is singular, non-finite, or its
    /// reciprocal condition number is at or below the configured tolerance.
    #[error("Singular matrix: reciprocal condition number {rcond}")]
    Singular {
        /// `1 / (‖A‖∞ · ‖A⁻¹‖∞)`; `0` for an exactly singular matrix, NaN
        /// when the input contains non-finite entries.
        rcond: f64,
    },
    /// A cached inverse does not belong to the value it is stored next to.
    #[error("Stale cached inverse: {0}")]
    StaleInverse(String),
}
