//! The engine's output: the scaled distribution vector and its band.

use crate::{
    error::{OccupancyError, OccupancyResult},
    scale::ScaleFactor,
    summary::Summary,
    types::{Alphabet, Mass, Step, Variety},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    n:             Alphabet,
    cells:         Vec<Mass>,
    /// Smallest variety with mass (1-based).
    first:         Variety,
    /// Highest 0-based index the band tracker considered populated.
    last:          usize,
    scale:         ScaleFactor,
    layers:        Step,
    applied_power: usize,
}

impl Distribution {
    pub(crate) fn new(
        cells: Vec<Mass>,
        first: Variety,
        last: usize,
        scale: ScaleFactor,
        layers: Step,
    ) -> Self {
        Self {
            n: cells.len(),
            applied_power: scale.applied_power(layers),
            cells,
            first,
            last,
            scale,
            layers,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.n
    }

    pub fn cells(&self) -> &[Mass] {
        &self.cells
    }

    pub fn first(&self) -> Variety {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn scale(&self) -> &ScaleFactor {
        &self.scale
    }

    pub fn layers(&self) -> Step {
        self.layers
    }

    pub fn applied_power(&self) -> usize {
        self.applied_power
    }

    /// Cells from `first - 1` to the end.
    pub fn band(&self) -> &[Mass] {
        &self.cells[self.first - 1..]
    }

    /// Sum of the mass inside the band.
    pub fn total(&self) -> f64 {
        self.band().iter().sum()
    }

    /// Expected scaled total, derived independently of the vector.
    pub fn norm(&self) -> f64 {
        self.scale.norm(self.layers, self.applied_power)
    }

    pub fn relative_error(&self) -> f64 {
        let total = self.total();
        (total - self.norm()).abs() / total
    }

    /// Compare the summed mass against the closed-form total.
    pub fn verify(&self, tolerance: f64) -> OccupancyResult<()> {
        let total = self.total();
        let expected = self.norm();
        let relative_error = (total - expected).abs() / total;
        // NaN and infinity fail too.
        if !(relative_error <= tolerance) {
            return Err(OccupancyError::Divergence {
                total,
                expected,
                relative_error,
                tolerance,
            });
        }
        Ok(())
    }

    /// Per-cell probabilities `dist[v] / norm`.
    pub fn probabilities(&self) -> Vec<f64> {
        let inv = 1.0 / self.norm();
        self.cells.iter().map(|&c| c * inv).collect()
    }

    /// Probability of seeing exactly `varieties` distinct values.
    pub fn probability_of(&self, varieties: Variety) -> f64 {
        if varieties == 0 || varieties > self.n {
            return 0.0;
        }
        self.cells[varieties - 1] / self.norm()
    }

    /// Cells with the scale factor removed: outcome counts out of `N^(N-1)`.
    /// Only meaningful while `scale^power` is representable (small `N`).
    pub fn unscaled(&self) -> Vec<f64> {
        let divisor = self.scale.unscale_divisor(self.applied_power);
        self.cells.iter().map(|&c| c / divisor).collect()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_distribution(self)
    }
}
