//! Consistency checks for cached state.
//!
//! [`validate_invariants`](DebugInvariants::validate_invariants) is always
//! available and returns the first violation. The provided
//! [`debug_assert_invariants`](DebugInvariants::debug_assert_invariants)
//! turns a violation into a panic, but only in debug builds or with the
//! `check-invariants` feature; otherwise it compiles to nothing.

use crate::matrix_error::MatrixError;

pub trait DebugInvariants {
    /// Check the invariants, reporting the first one that does not hold.
    fn validate_invariants(&self) -> Result<(), MatrixError>;

    /// Panic if [`validate_invariants`](Self::validate_invariants) fails.
    #[inline]
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!(
                "invariant violated in {}: {e}",
                std::any::type_name::<Self>()
            );
        }
    }
}
