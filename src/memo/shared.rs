//! SharedCacheCell: a [`CacheCell`] that several threads may both read and
//! replace.
//!
//! A plain `CacheCell` already allows concurrent `solve` through `&self`, but
//! replacing its value needs `&mut`. When the value itself must change while
//! other threads hold the cell, wrap it here. Every operation takes the
//! internal `parking_lot::RwLock`:
//!
//! - [`set`](SharedCacheCell::set) takes the write lock.
//! - [`solve`](SharedCacheCell::solve) serves hits under the read lock and
//!   holds the write lock for the whole check-compute-store sequence on a
//!   miss, so a `set` can never land between reading the value and caching
//!   its inverse.
//! - [`get`](SharedCacheCell::get) and
//!   [`cached_inverse`](SharedCacheCell::cached_inverse) take the read lock
//!   and return clones.

use super::cache::{CacheState, InvalidateCache};
use super::cell::CacheCell;
use crate::linalg::Invert;
use parking_lot::RwLock;

/// Thread-safe wrapper around [`CacheCell`].
#[derive(Debug, Default)]
pub struct SharedCacheCell<M> {
    inner: RwLock<CacheCell<M>>,
}

impl<M> SharedCacheCell<M> {
    pub fn new(value: M) -> Self {
        Self {
            inner: RwLock::new(CacheCell::new(value)),
        }
    }

    /// Replace the value and invalidate the cached inverse.
    pub fn set(&self, value: M) {
        self.inner.write().set(value);
    }

    /// Store `inverse` without validation; see [`CacheCell::set_cached_inverse`].
    pub fn set_cached_inverse(&self, inverse: M) {
        self.inner.write().set_cached_inverse(inverse);
    }

    pub fn cache_state(&self) -> CacheState {
        self.inner.read().cache_state()
    }

    /// Drop the cached inverse without touching the value.
    pub fn invalidate(&self) {
        self.inner.write().invalidate_cache();
    }

    /// Unwrap into the plain single-owner cell.
    pub fn into_inner(self) -> CacheCell<M> {
        self.inner.into_inner()
    }
}

impl<M: Clone> SharedCacheCell<M> {
    /// Clone of the current value.
    pub fn get(&self) -> M {
        self.inner.read().get().clone()
    }

    /// Clone of the cached inverse, if any.
    pub fn cached_inverse(&self) -> Option<M> {
        self.inner.read().cached_inverse().cloned()
    }

    /// Memoized inverse; see [`solve`](super::solve) for the contract.
    ///
    /// A cache hit is served under the read lock. A miss upgrades to the
    /// write lock and re-checks before computing, so two racing threads
    /// compute at most once.
    pub fn solve<R>(&self, routine: &R, options: &R::Options) -> Result<M, R::Error>
    where
        R: Invert<M> + ?Sized,
    {
        if let Some(inverse) = self.inner.read().cached_inverse() {
            log::debug!("returning cached inverse");
            return Ok(inverse.clone());
        }
        let guard = self.inner.write();
        super::solve(&*guard, routine, options).cloned()
    }

    /// Snapshot as an independent single-owner cell (value and cache).
    pub fn snapshot(&self) -> CacheCell<M> {
        self.inner.read().clone()
    }
}

impl<M> From<CacheCell<M>> for SharedCacheCell<M> {
    fn from(cell: CacheCell<M>) -> Self {
        Self {
            inner: RwLock::new(cell),
        }
    }
}
