//! [`LuInverse`]: dense inversion through faer's partially pivoted LU.
//!
//! faer does the factorization and the inverse. This wrapper adds the checks
//! the cache relies on: shape, finiteness, and a reciprocal condition number
//! test so that numerically singular input fails instead of caching garbage.
//!
//! # Errors
//! * [`MatrixError::NotSquare`]: the input is not square.
//! * [`MatrixError::Singular`]: the input has non-finite entries, the inverse
//!   is non-finite, or `rcond <= options.tolerance`.

use super::{Invert, InvertOptions};
use crate::matrix::{self, Matrix};
use crate::matrix_error::MatrixError;
use faer::linalg::solvers::DenseSolveCore;

/// Default inversion routine for [`Matrix`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuInverse;

/// `1 / (‖A‖∞ · ‖A⁻¹‖∞)`, the infinity-norm reciprocal condition number.
pub fn reciprocal_condition(a: &Matrix, inverse: &Matrix) -> f64 {
    1.0 / (matrix::norm_inf(a) * matrix::norm_inf(inverse))
}

impl Invert<Matrix> for LuInverse {
    type Options = InvertOptions;
    type Error = MatrixError;

    fn invert(&self, m: &Matrix, options: &InvertOptions) -> Result<Matrix, MatrixError> {
        if m.nrows() != m.ncols() {
            return Err(MatrixError::NotSquare {
                rows: m.nrows(),
                cols: m.ncols(),
            });
        }
        if m.nrows() == 0 {
            return Ok(Matrix::new());
        }
        if !matrix::all_finite(m) {
            return Err(MatrixError::Singular { rcond: f64::NAN });
        }

        let inverse = m.partial_piv_lu().inverse();
        if !matrix::all_finite(&inverse) {
            return Err(MatrixError::Singular { rcond: 0.0 });
        }
        let rcond = reciprocal_condition(m, &inverse);
        if rcond.is_nan() || rcond <= options.tolerance {
            log::debug!("rejecting inverse: rcond {rcond:e} <= {:e}", options.tolerance);
            return Err(MatrixError::Singular { rcond });
        }
        Ok(inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn inverts_2x2_with_row_swap() {
        let a = mat![[1.0, 3.0], [2.0, 4.0]];
        let inv = LuInverse.invert(&a, &InvertOptions::default()).unwrap();
        assert!(matrix::approx_eq(&inv, &mat![[-2.0, 1.5], [1.0, -0.5]], 1e-15));
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let a = mat![[4.0, -2.0, 1.0], [3.0, 6.0, -4.0], [2.0, 1.0, 8.0]];
        let inv = LuInverse.invert(&a, &InvertOptions::default()).unwrap();
        assert!(matrix::is_identity(&(&a * &inv), 1e-12));
        assert!(matrix::is_identity(&(&inv * &a), 1e-12));
    }

    #[test]
    fn exactly_singular_is_rejected() {
        let a = mat![[1.0, 2.0], [2.0, 4.0]];
        let err = LuInverse.invert(&a, &InvertOptions::default()).unwrap_err();
        assert_eq!(err, MatrixError::Singular { rcond: 0.0 });
    }

    #[test]
    fn tolerance_is_an_rcond_threshold() {
        let a = mat![[1e-8, 0.0], [0.0, 1.0]];
        assert!(LuInverse.invert(&a, &InvertOptions::default()).is_ok());
        let strict = InvertOptions::default().with_tolerance(1e-6);
        match LuInverse.invert(&a, &strict) {
            Err(MatrixError::Singular { rcond }) => assert!((rcond - 1e-8).abs() < 1e-20),
            other => panic!("expected Singular, got {other:?}"),
        }
    }

    #[test]
    fn scaling_does_not_change_singularity_verdict() {
        // A well-conditioned matrix with tiny entries is still invertible.
        let a = mat![[1e-20, 0.0], [0.0, 2e-20]];
        let inv = LuInverse.invert(&a, &InvertOptions::default()).unwrap();
        assert!(matrix::is_identity(&(&a * &inv), 1e-12));
    }

    #[test]
    fn non_square_rejected() {
        let a = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            LuInverse.invert(&a, &InvertOptions::default()).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn non_finite_input_is_singular() {
        for bad in [f64::NAN, f64::INFINITY] {
            let a = mat![[bad, 0.0], [0.0, 1.0]];
            assert!(matches!(
                LuInverse.invert(&a, &InvertOptions::default()),
                Err(MatrixError::Singular { rcond }) if rcond.is_nan()
            ));
        }
    }

    #[test]
    fn empty_matrix_inverts_to_itself() {
        let inv = LuInverse.invert(&Matrix::new(), &InvertOptions::default()).unwrap();
        assert_eq!((inv.nrows(), inv.ncols()), (0, 0));
    }

    #[test]
    fn rcond_of_identity_is_one() {
        let i = Matrix::identity(4, 4);
        assert_eq!(reciprocal_condition(&i, &i), 1.0);
    }
}
