//! Walk through the life of a cached inverse.
//!
//! Cache hits and invalidations are reported through the `log` facade;
//! install a backend to see them alongside the printed output.

use faer::mat;
use matrix_memo::prelude::*;

fn main() -> Result<(), MatrixError> {
    let opts = InvertOptions::default();
    let mut cell = CacheCell::new(mat![[1.0, 3.0], [2.0, 4.0]]);
    println!("value: {:?}", cell.get());
    println!("cached before solve: {:?}", cell.cache_state());

    let inv = solve(&cell, &LuInverse, &opts)?;
    println!("inverse: {inv:?}");
    println!("cached after solve: {:?}", cell.cache_state());

    // Served from the cache.
    let again = solve(&cell, &LuInverse, &opts)?;
    println!("second solve is the same allocation: {}", std::ptr::eq(inv, again));

    cell.set(mat![[5.0, 7.0], [6.0, 8.0]]);
    println!("cached after set: {:?}", cell.cache_state());
    println!("new inverse: {:?}", solve(&cell, &LuInverse, &opts)?);

    cell.set(mat![[1.0, 2.0], [2.0, 4.0]]);
    match solve(&cell, &LuInverse, &opts) {
        Ok(inv) => println!("unexpected inverse: {inv:?}"),
        Err(e) => println!("singular value: {e}; cached: {:?}", cell.cache_state()),
    }
    Ok(())
}
