//! Rescaling of the distribution between layers.
//!
//! Each layer multiplies the total mass by `N`. Left alone the vector would
//! overflow after a few hundred layers, so every layer is also multiplied by
//! `scale = N^((N-3)/(1-N))`. With that choice `N * scale = N^(2/(N-1))` and
//! the scaled total after all `N-1` layers is exactly `N^2`.

use crate::types::{Alphabet, Step};

/// Layers covered by one batched rescale.
pub const BATCH: Step = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    n:      Alphabet,
    scale:  f64,
    scale8: f64,
    batch:  bool,
}

impl ScaleFactor {
    /// `N = 0` and `N = 1` run no layers; their factor is 1.
    pub fn new(n: Alphabet, batch: bool) -> Self {
        let scale = if n <= 1 {
            1.0
        } else {
            let nf = n as f64;
            nf.powf((nf - 3.0) / (1.0 - nf))
        };
        Self { n, scale, scale8: scale.powi(BATCH as i32), batch }
    }

    pub fn value(&self) -> f64 {
        self.scale
    }

    /// Multiplier applied to every cell written during layer `step`.
    pub fn multiplier(&self, step: Step) -> f64 {
        if !self.batch {
            self.scale
        } else if step % BATCH == 0 {
            self.scale8
        } else {
            1.0
        }
    }

    /// Power of `scale` accumulated after running `layers` layers.
    pub fn applied_power(&self, layers: Step) -> usize {
        if self.batch {
            layers - layers % BATCH
        } else {
            layers
        }
    }

    /// Expected scaled total after `layers` layers that carried `power`
    /// factors of `scale`: `(N*scale)^power * N^(layers-power)`.
    pub fn norm(&self, layers: Step, power: usize) -> f64 {
        let nf = self.n as f64;
        (nf * self.scale).powf(power as f64) * nf.powf((layers - power) as f64)
    }

    /// Divisor turning scaled cells back into outcome counts.
    /// Underflows to zero for large `N`; meaningful for small alphabets only.
    pub fn unscale_divisor(&self, power: usize) -> f64 {
        self.scale.powf(power as f64)
    }
}
