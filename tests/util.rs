#![allow(dead_code)]
use matrix_memo::linalg::{Invert, InvertOptions, LuInverse};
use matrix_memo::matrix::{self, Matrix};
use matrix_memo::matrix_error::MatrixError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;

pub fn mat(rows: &[&[f64]]) -> Matrix {
    matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Strictly diagonally dominant, hence nonsingular, `n × n` matrix.
pub fn random_nonsingular(n: usize, seed: u64) -> Matrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut m = Matrix::zeros(n, n);
    for r in 0..n {
        let mut off_diag = 0.0;
        for c in 0..n {
            if r != c {
                let v: f64 = rng.gen_range(-1.0..1.0);
                m[(r, c)] = v;
                off_diag += v.abs();
            }
        }
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        m[(r, r)] = sign * (off_diag + rng.gen_range(0.5..2.0));
    }
    m
}

/// LU routine that counts how often it runs.
#[derive(Default)]
pub struct CountingLu {
    pub calls: Cell<usize>,
}

impl Invert<Matrix> for CountingLu {
    type Options = InvertOptions;
    type Error = MatrixError;

    fn invert(&self, m: &Matrix, options: &InvertOptions) -> Result<Matrix, MatrixError> {
        self.calls.set(self.calls.get() + 1);
        LuInverse.invert(m, options)
    }
}

/// `n × n` Hilbert matrix, `H[i, j] = 1 / (i + j + 1)`.
pub fn hilbert(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| 1.0 / (i + j + 1) as f64)
}
