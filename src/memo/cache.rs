//! Cache state and invalidation shared by every memoizing container in the crate.

/// Whether a memoizing container currently holds its derived value.
///
/// ```text
///   EMPTY ──compute & store──▶ POPULATED
///     ▲                            │
///     └──── set / invalidate ──────┘
/// ```
/// Repeated reads leave `Populated` unchanged. There is no terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheState {
    Empty,
    Populated,
}

/// Anything that memoizes a value derived from its contents (an inverse, a
/// factorization, …) implements this.
pub trait InvalidateCache {
    /// Drop the derived value so the next query recomputes it.
    fn invalidate_cache(&mut self);

    /// Current cache state; never triggers a computation.
    fn cache_state(&self) -> CacheState;
}

impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }

    #[inline]
    fn cache_state(&self) -> CacheState {
        (**self).cache_state()
    }
}
