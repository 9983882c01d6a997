//! Matrix payload stored in a [`CacheCell`](crate::memo::CacheCell).
//!
//! Values are plain [`faer::Mat<f64>`]. This module only adds what the cache
//! needs around them: checked construction from rows or flat storage, a
//! validated serde wire form ([`RowMajor`]), and NaN-aware comparisons.
//!
//! # Examples
//! ```rust
//! use matrix_memo::matrix::{self, Matrix};
//!
//! let a = matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let i = Matrix::identity(2, 2);
//! assert!(matrix::approx_eq(&(&a * &i), &a, 0.0));
//! assert_eq!(a[(1, 0)], 3.0);
//! # Ok::<(), matrix_memo::matrix_error::MatrixError>(())
//! ```

use crate::matrix_error::MatrixError;
use faer::Mat;
use serde::{Deserialize, Serialize};

/// Dense `f64` matrix used throughout the crate.
pub type Matrix = Mat<f64>;

/// Build a matrix from flat row-major storage.
///
/// # Errors
/// * [`MatrixError::ShapeOverflow`] if `rows * cols` does not fit in `usize`.
/// * [`MatrixError::DataLength`] if `data.len() != rows * cols`.
pub fn from_vec(rows: usize, cols: usize, data: &[f64]) -> Result<Matrix, MatrixError> {
    let expected = rows
        .checked_mul(cols)
        .ok_or(MatrixError::ShapeOverflow { rows, cols })?;
    if data.len() != expected {
        return Err(MatrixError::DataLength {
            expected,
            found: data.len(),
        });
    }
    Ok(Mat::from_fn(rows, cols, |r, c| data[r * cols + c]))
}

/// Build a matrix from a vector of rows. An empty outer vector yields 0×0.
///
/// # Errors
/// [`MatrixError::RaggedRows`] if any row differs in length from the first.
pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        return Err(MatrixError::RaggedRows {
            row,
            expected: n_cols,
            found: r.len(),
        });
    }
    Ok(Mat::from_fn(rows.len(), n_cols, |r, c| rows[r][c]))
}

/// Element-wise comparison with absolute tolerance `tol`.
///
/// Different shapes are never equal, and any NaN makes the result `false`.
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.nrows() == b.nrows()
        && a.ncols() == b.ncols()
        && (0..a.nrows()).all(|r| (0..a.ncols()).all(|c| (a[(r, c)] - b[(r, c)]).abs() <= tol))
}

/// Max absolute deviation from the identity; NaN if any entry is NaN.
///
/// Returns `f64::INFINITY` for a non-square matrix.
pub fn identity_residual(m: &Matrix) -> f64 {
    if m.nrows() != m.ncols() {
        return f64::INFINITY;
    }
    let mut worst = 0.0f64;
    for r in 0..m.nrows() {
        for c in 0..m.ncols() {
            let target = if r == c { 1.0 } else { 0.0 };
            let d = (m[(r, c)] - target).abs();
            if d.is_nan() {
                return f64::NAN;
            }
            worst = worst.max(d);
        }
    }
    worst
}

/// True if `m` is square and every entry is within `tol` of the identity.
pub fn is_identity(m: &Matrix, tol: f64) -> bool {
    identity_residual(m) <= tol
}

/// Infinity norm: largest absolute row sum.
pub fn norm_inf(m: &Matrix) -> f64 {
    (0..m.nrows())
        .map(|r| (0..m.ncols()).map(|c| m[(r, c)].abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// True if every entry is finite.
pub fn all_finite(m: &Matrix) -> bool {
    (0..m.nrows()).all(|r| (0..m.ncols()).all(|c| m[(r, c)].is_finite()))
}

/// Row-major wire form of a [`Matrix`]; shape is validated on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRowMajor")]
pub struct RowMajor {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawRowMajor {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawRowMajor> for RowMajor {
    type Error = MatrixError;

    fn try_from(raw: RawRowMajor) -> Result<Self, Self::Error> {
        from_vec(raw.rows, raw.cols, &raw.data)?;
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl RowMajor {
    pub fn to_matrix(&self) -> Matrix {
        Mat::from_fn(self.rows, self.cols, |r, c| self.data[r * self.cols + c])
    }
}

impl From<&Matrix> for RowMajor {
    fn from(m: &Matrix) -> Self {
        let (rows, cols) = (m.nrows(), m.ncols());
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(m[(r, c)]);
            }
        }
        Self { rows, cols, data }
    }
}
