//! Memoized inversion: [`CacheCell`] stores a value and its inverse,
//! [`solve`] fills the cache on demand.
//!
//! The cache of a cell is either empty or populated (see [`CacheState`]):
//! a successful `solve` populates it, any `set` empties it, and repeated
//! `solve` calls in between are pure reads.

pub mod cache;
pub mod cell;
pub mod shared;
pub mod solve;

pub use cache::{CacheState, InvalidateCache};
pub use cell::CacheCell;
pub use shared::SharedCacheCell;
pub use solve::solve;
