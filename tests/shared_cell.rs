mod util;

use matrix_memo::matrix::is_identity;
use matrix_memo::prelude::*;
use std::sync::Arc;
use std::thread;
use util::{mat, random_nonsingular};

#[test]
fn readers_see_consistent_inverse_while_writer_replaces_value() {
    let shared = Arc::new(SharedCacheCell::new(random_nonsingular(4, 1)));
    let opts = InvertOptions::default();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..50 {
                    // Value and inverse are read under one lock via a snapshot.
                    let snap = shared.snapshot();
                    if let Some(inv) = snap.cached_inverse() {
                        assert!(is_identity(&(snap.get() * inv), 1e-9));
                    }
                    shared.solve(&LuInverse, &opts).unwrap();
                }
            })
        })
        .collect();

    for seed in 2..20 {
        shared.set(random_nonsingular(4, seed));
    }
    for r in readers {
        r.join().unwrap();
    }

    let inv = shared.solve(&LuInverse, &opts).unwrap();
    assert!(is_identity(&(&shared.get() * &inv), 1e-9));
}

#[test]
fn shared_failure_leaves_cache_empty() {
    let shared = SharedCacheCell::new(mat(&[&[0.0, 0.0], &[0.0, 0.0]]));
    assert!(matches!(
        shared.solve(&LuInverse, &InvertOptions::default()),
        Err(MatrixError::Singular { rcond }) if rcond == 0.0
    ));
    assert_eq!(shared.cache_state(), CacheState::Empty);
    assert_eq!(shared.cached_inverse(), None);
}
