//! Inversion routines consumed by the cache.
//!
//! The cache never inverts anything itself; it calls an [`Invert`]
//! implementation and stores whatever comes back. [`LuInverse`] is the
//! bundled routine for [`Matrix`](crate::matrix::Matrix) values and delegates
//! the numerics to faer. Any type satisfying the trait (a wrapper around
//! another library, a closed-form 2×2 inverse, a test double that counts
//! calls) can be used instead.

pub mod lu;

pub use lu::{LuInverse, reciprocal_condition};

use serde::{Deserialize, Serialize};

/// A square-matrix inversion routine.
///
/// `Options` is passed through [`solve`](crate::memo::solve) verbatim and is
/// interpreted only by the routine. `Error` is returned to the caller of
/// `solve` unchanged.
pub trait Invert<M> {
    /// Routine-specific configuration (tolerances, pivoting strategy, …).
    type Options;
    /// Failure reported for invalid or singular input.
    type Error;

    /// Compute the inverse of `m`.
    fn invert(&self, m: &M, options: &Self::Options) -> Result<M, Self::Error>;
}

impl<M, R: Invert<M> + ?Sized> Invert<M> for &R {
    type Options = R::Options;
    type Error = R::Error;

    #[inline]
    fn invert(&self, m: &M, options: &Self::Options) -> Result<M, Self::Error> {
        (**self).invert(m, options)
    }
}

/// Configuration for [`LuInverse`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvertOptions {
    /// Matrices whose reciprocal condition number `1 / (‖A‖∞ · ‖A⁻¹‖∞)` is
    /// `<= tolerance` are reported singular. Scale-invariant.
    pub tolerance: f64,
}

impl InvertOptions {
    pub const DEFAULT_TOLERANCE: f64 = f64::EPSILON;

    /// Builder: set the singularity tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for InvertOptions {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
