//! The distribution engine.
//!
//! The distribution after `k` draws is a triangular DP table flattened into
//! one vector of `N` cells that is rewritten in place once per layer:
//!
//! ```text
//! new[v] = s * (old[v-1] * (N - v) + old[v] * (v + 1))
//! ```
//!
//! `old[v-1] * (N - v)` is "v distinct so far, draw a new value",
//! `old[v] * (v + 1)` is "v+1 distinct so far, draw a seen value", and `s`
//! is the rescale multiplier for the layer. Cells are rewritten in increasing
//! index order. Writing `new[v]` destroys `old[v]`, which the next cell still
//! needs, so `old[v]` is read into a one-lookahead carry before the write.
//!
//! RULES:
//!   - Cells below `start - 1` are exactly zero at every layer.
//!   - `start` and `lastvar` are re-read from the data every layer.
//!   - The band tracker only skips arithmetic; it never changes a result.

use crate::{
    config::{EngineConfig, ZeroPolicy},
    distribution::Distribution,
    error::{OccupancyError, OccupancyResult},
    scale::ScaleFactor,
    types::{Alphabet, Mass, Step},
};

/// Populated cells at the end of a layer: `[start - 1, lastvar]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start:   usize,
    pub lastvar: usize,
}

impl Band {
    fn initial() -> Self {
        Self { start: 1, lastvar: 1 }
    }
}

/// Told about the band after every layer. Cannot touch the vector.
pub trait LayerObserver {
    fn on_layer(&mut self, step: Step, band: Band);
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl LayerObserver for NoopObserver {
    fn on_layer(&mut self, _step: Step, _band: Band) {}
}

/// Keeps every band the engine reports, in layer order.
#[derive(Debug, Default)]
pub struct BandRecorder {
    pub layers: Vec<(Step, Band)>,
}

impl LayerObserver for BandRecorder {
    fn on_layer(&mut self, step: Step, band: Band) {
        self.layers.push((step, band));
    }
}

pub struct DistributionEngine {
    config: EngineConfig,
}

impl DistributionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute and self-check the distribution for alphabet size `n`.
    pub fn run(&self, n: Alphabet) -> OccupancyResult<Distribution> {
        self.run_observed(n, &mut NoopObserver)
    }

    pub fn run_observed(
        &self,
        n: Alphabet,
        observer: &mut dyn LayerObserver,
    ) -> OccupancyResult<Distribution> {
        let dist = self.compute(n, observer)?;
        dist.verify(self.config.tolerance)?;
        log::debug!(
            "N={n}: band {}..={} total={:e} norm={:e} rel_err={:e}",
            dist.first(),
            dist.last() + 1,
            dist.total(),
            dist.norm(),
            dist.relative_error()
        );
        Ok(dist)
    }

    /// Run all layers without the total-mass check.
    pub fn compute(
        &self,
        n: Alphabet,
        observer: &mut dyn LayerObserver,
    ) -> OccupancyResult<Distribution> {
        if n == 0 || n > self.config.max_alphabet {
            return Err(OccupancyError::InvalidAlphabet { n, max: self.config.max_alphabet });
        }

        let mut cells = allocate(n)?;
        cells[0] = 1.0;
        let scale = ScaleFactor::new(n, self.config.batch_rescale);
        let layers = n - 1;

        let mut kernel = LayerKernel {
            dist:            &mut cells,
            n,
            zero:            self.config.zero_policy,
            force_even_band: self.config.force_even_band,
            band:            Band::initial(),
        };

        for step in 1..=layers {
            let s = scale.multiplier(step);
            if self.config.split_loop {
                kernel.split_layer(step, s);
            } else {
                kernel.full_layer(step, s);
            }
            let band = kernel.band;
            if self.config.progress_interval > 0 && step % self.config.progress_interval == 0 {
                log::info!("Layer {step} ({} .. {})", band.start, band.lastvar);
            }
            observer.on_layer(step, band);
        }

        let Band { start, lastvar } = kernel.band;
        // A single-cell vector never ran a layer; its band is cell 0.
        let last = lastvar.min(n - 1);
        Ok(Distribution::new(cells, start, last, scale, layers))
    }
}

fn allocate(n: Alphabet) -> OccupancyResult<Vec<Mass>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(n)
        .map_err(|_| OccupancyError::AllocationFailed { n })?;
    cells.resize(n, 0.0);
    Ok(cells)
}

/// Per-run state of the recurrence.
struct LayerKernel<'a> {
    dist:            &'a mut [Mass],
    n:               Alphabet,
    zero:            ZeroPolicy,
    force_even_band: bool,
    band:            Band,
}

impl LayerKernel<'_> {
    /// Band-tracked layer: scan the bottom edge, run branch-free through the
    /// known band, then run zero-checked up to `step`.
    fn split_layer(&mut self, step: Step, s: f64) {
        let n = self.n;
        let zero = self.zero;
        let dist = &mut *self.dist;
        let mut var = self.band.start;
        let mut carry = dist[var - 1];

        // Bottom cells that fell to zero stay zero; clear what they left.
        while var <= step && zero.is_zero(carry) {
            dist[var - 1] = 0.0;
            carry = dist[var];
            var += 1;
        }
        // old[var-2] is zero here, so only the "seen value" branch feeds it.
        dist[var - 1] = s * (carry * var as f64);
        self.band.start = if self.force_even_band && var > 1 { var - var % 2 } else { var };

        while var <= self.band.lastvar {
            let below = carry;
            carry = dist[var];
            dist[var] = s * (below * (n - var) as f64 + carry * (var + 1) as f64);
            var += 1;
        }

        while var <= step {
            let below = carry;
            carry = dist[var];
            if zero.is_zero(below) {
                dist[var] = 0.0;
                break;
            }
            dist[var] = s * (below * (n - var) as f64 + carry * (var + 1) as f64);
            var += 1;
        }

        self.band.lastvar = if self.force_even_band && var < step {
            var - 1 + var % 2
        } else {
            var - 1
        };
    }

    /// Untracked layer over every reachable cell.
    fn full_layer(&mut self, step: Step, s: f64) {
        let n = self.n;
        let dist = &mut *self.dist;
        let mut carry = dist[0];
        dist[0] = s * (carry * 1.0);
        for var in 1..=step {
            let below = carry;
            carry = dist[var];
            dist[var] = s * (below * (n - var) as f64 + carry * (var + 1) as f64);
        }
        self.band = Band { start: 1, lastvar: step };
    }
}
