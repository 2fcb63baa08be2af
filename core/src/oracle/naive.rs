//! Exhaustive walk of the draw tree.
//!
//! Every draw either repeats one of the `variety` values already seen or
//! hits one of the `N - variety` unseen ones. Walking both branches at every
//! step without merging equal states reproduces the engine's recurrence the
//! slow way: `2^(N-2)` leaves.

use crate::{
    error::{OccupancyError, OccupancyResult},
    oracle::CoverageOracle,
    types::{Alphabet, Step, Variety},
};

/// Largest alphabet the tree walk accepts.
pub const MAX_NAIVE: Alphabet = 24;

/// Outcome counts per variety, unscaled. Sums to `N^(N-1)`.
pub fn naive_counts(n: Alphabet) -> OccupancyResult<Vec<f64>> {
    if n == 0 || n > MAX_NAIVE {
        return Err(OccupancyError::OracleLimit { oracle: "naive", n, max: MAX_NAIVE });
    }
    let mut dist = vec![0.0; n];
    if n == 1 {
        dist[0] = 1.0;
    } else {
        walk(&mut dist, 1.0, 1, 1, n);
    }
    Ok(dist)
}

fn walk(dist: &mut [f64], weight: f64, variety: Variety, step: Step, n: Alphabet) {
    let same = variety as f64;
    let other = (n - variety) as f64;
    if step < n - 1 {
        walk(dist, weight * same, variety, step + 1, n);
        walk(dist, weight * other, variety + 1, step + 1, n);
    } else {
        dist[variety - 1] += weight * same;
        dist[variety] += weight * other;
    }
}

pub struct NaiveRecursion;

impl CoverageOracle for NaiveRecursion {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64> {
        let counts = naive_counts(n)?;
        let (total, weighted) = counts
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(t, w), (i, &c)| (t + c, w + (i + 1) as f64 * c));
        Ok(weighted / total / n as f64)
    }
}
