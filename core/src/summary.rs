//! Summary statistics over a finished distribution. Pure reductions.

use crate::{
    distribution::Distribution,
    types::{Alphabet, Variety},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub n:                     Alphabet,
    pub first:                 Variety,
    /// Scaled mass inside the band.
    pub total:                 f64,
    /// Expected scaled mass, `(N*scale)^(N-1)` for per-layer rescaling.
    pub norm:                  f64,
    pub relative_error:        f64,
    /// `total` with the scale removed; `N^(N-1)` up to rounding.
    pub outcomes:              f64,
    /// Expected number of distinct values.
    pub expectation:           f64,
    pub normalized_percentage: f64,
    pub scale:                 f64,
}

impl Summary {
    pub fn from_distribution(dist: &Distribution) -> Self {
        let offset = dist.first();
        let (total, weighted) = dist
            .band()
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(total, weighted), (i, &mass)| {
                (total + mass, weighted + (i + offset) as f64 * mass)
            });
        let n = dist.alphabet();
        let norm = dist.norm();
        let expectation = weighted / total;
        Self {
            n,
            first: dist.first(),
            total,
            norm,
            relative_error: (total - norm).abs() / total,
            outcomes: total / dist.scale().unscale_divisor(dist.applied_power()),
            expectation,
            normalized_percentage: 100.0 * expectation / n as f64,
            scale: dist.scale().value(),
        }
    }

    /// Expected fraction of the alphabet that shows up.
    pub fn coverage(&self) -> f64 {
        self.expectation / self.n as f64
    }
}
