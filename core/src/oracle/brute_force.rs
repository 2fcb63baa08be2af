//! Direct enumeration of every draw sequence.
//!
//! The first draw is fixed to value 0; the other `N-1` draws run through all
//! `N^(N-1)` combinations like an odometer in base `N`. Each sequence is
//! counted into a histogram by its number of distinct values.

use crate::{
    error::{OccupancyError, OccupancyResult},
    oracle::{bitset::SeenSet, CoverageOracle},
    types::Alphabet,
};

/// Largest alphabet accepted. `12^11` sequences already take hours.
pub const MAX_BRUTE_FORCE: Alphabet = 12;

/// Above this size enumeration is slow enough to warn about.
pub const SLOW_ALPHABET: Alphabet = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// `counts[v]`: sequences with exactly `v+1` distinct values.
    pub counts:    Vec<u64>,
    pub sequences: u64,
}

impl Enumeration {
    /// Expected number of distinct values.
    pub fn expectation(&self) -> f64 {
        let weighted: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as u64 + 1) * c)
            .sum();
        weighted as f64 / self.sequences as f64
    }

    pub fn coverage(&self) -> f64 {
        self.expectation() / self.counts.len() as f64
    }
}

pub fn enumerate(n: Alphabet) -> OccupancyResult<Enumeration> {
    if n == 0 || n > MAX_BRUTE_FORCE {
        return Err(OccupancyError::OracleLimit { oracle: "brute_force", n, max: MAX_BRUTE_FORCE });
    }
    if n > SLOW_ALPHABET {
        log::warn!("Enumerating {n}^{} sequences, this may take a long time", n - 1);
    }

    let sequences = (n as u64).pow(n as u32 - 1);
    let mut digits = vec![0usize; n - 1];
    let mut seen = SeenSet::new(n);
    let mut counts = vec![0u64; n];

    for _ in 0..sequences {
        seen.clear();
        seen.insert(0);
        let distinct = 1 + digits.iter().filter(|&&d| seen.insert(d)).count();
        counts[distinct - 1] += 1;
        advance(&mut digits, n);
    }

    Ok(Enumeration { counts, sequences })
}

/// Little-endian increment in base `base`.
fn advance(digits: &mut [usize], base: usize) {
    for d in digits.iter_mut() {
        if *d == base - 1 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
}

pub struct BruteForce;

impl CoverageOracle for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64> {
        Ok(enumerate(n)?.coverage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_wraps_through_every_combination() {
        let mut digits = vec![0usize; 2];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..9 {
            assert!(seen.insert(digits.clone()));
            advance(&mut digits, 3);
        }
        assert_eq!(digits, vec![0, 0]);
    }

    #[test]
    fn three_symbols() {
        let e = enumerate(3).unwrap();
        assert_eq!(e.counts, vec![1, 6, 2]);
        assert_eq!(e.sequences, 27 / 3);
        assert!((e.expectation() - 19.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn single_symbol_has_one_sequence() {
        let e = enumerate(1).unwrap();
        assert_eq!(e.counts, vec![1]);
        assert_eq!(e.sequences, 1);
        assert_eq!(e.coverage(), 1.0);
    }
}
