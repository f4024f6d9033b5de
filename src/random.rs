//! Pseudo-random source used by the move generator and the acceptance test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two draws the annealer needs.
///
/// Any [`rand::Rng`] is a `RandomSource`. Tests can supply a scripted
/// implementation to force specific moves.
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.random_range(low..=high)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a seeded generator. Equal seeds give equal runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays fixed draws, for forcing specific moves in tests.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    ints: std::collections::VecDeque<i64>,
    units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(ints: &[i64], units: &[f64]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    /// Next scripted integer clamped into range; `low` once exhausted.
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.ints.pop_front().unwrap_or(low).clamp(low, high)
    }

    /// Next scripted float; `0.0` once exhausted.
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
