//! The overlap-minimization problem and its solve entry points.

use super::moves::propose_move;
use crate::error::{Axis, ConfigError, InputError};
use crate::geometry::{total_intersection_area, Field, Rect};
use crate::random::RandomSource;
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner, Termination};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Largest worst-case total overlap a problem may have: `2^53`, the
/// last integer range `f64` represents exactly.
pub const MAX_TOTAL_AREA: i64 = 1 << 53;

/// A validated set of rectangles to place inside a field.
///
/// Construction rejects inputs the move generator cannot handle, so a
/// `PlacementProblem` can always be annealed.
#[derive(Debug, Clone)]
pub struct PlacementProblem {
    field: Field,
    rects: Vec<Rect>,
}

impl PlacementProblem {
    /// Validates the field and rectangles.
    ///
    /// Every rectangle must be normalized (`x1 <= x2`, `y2 <= y1`), fit the
    /// field in size, and start inside it. The worst-case total overlap,
    /// every pair covering the whole field, must not exceed
    /// [`MAX_TOTAL_AREA`]. An empty rectangle list is allowed.
    pub fn new(field: Field, rects: Vec<Rect>) -> Result<Self, InputError> {
        if field.width <= 0 || field.height <= 0 {
            return Err(InputError::NonPositiveField {
                width: field.width,
                height: field.height,
            });
        }
        let count = rects.len() as i64;
        let fits = count
            .checked_mul(count.saturating_sub(1))
            .map(|twice_pairs| (twice_pairs / 2).max(1))
            .and_then(|pairs| field.width.checked_mul(field.height)?.checked_mul(pairs))
            .is_some_and(|total| total <= MAX_TOTAL_AREA);
        if !fits {
            return Err(InputError::AreaTooLarge {
                width: field.width,
                height: field.height,
                count: rects.len(),
            });
        }
        for (index, rect) in rects.iter().enumerate() {
            if !rect.is_normalized() {
                return Err(InputError::InvertedRectangle { index, rect: *rect });
            }
            if rect.width() > field.width {
                return Err(InputError::DegenerateMoveRange {
                    index,
                    axis: Axis::X,
                    extent: rect.width(),
                    limit: field.width,
                });
            }
            if rect.height() > field.height {
                return Err(InputError::DegenerateMoveRange {
                    index,
                    axis: Axis::Y,
                    extent: rect.height(),
                    limit: field.height,
                });
            }
            if !field.contains(rect) {
                return Err(InputError::OutsideField { index, rect: *rect });
            }
        }
        Ok(Self { field, rects })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The starting layout.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Total pairwise overlap of the starting layout.
    pub fn initial_intersection_area(&self) -> i64 {
        total_intersection_area(&self.rects)
    }

    /// Anneals the layout.
    pub fn solve(&self, config: &SaConfig) -> Result<PlacementResult, ConfigError> {
        self.solve_with_cancel(config, None)
    }

    /// Anneals the layout, stopping early if `cancel` is set.
    pub fn solve_with_cancel(
        &self,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<PlacementResult, ConfigError> {
        log::debug!(
            "placing {} rectangles in a {}x{} field",
            self.rects.len(),
            self.field.width,
            self.field.height
        );
        SaRunner::run_with_cancel(self, config, cancel).map(PlacementResult::from)
    }

    /// Anneals the layout drawing from `rng`. `config.seed` is ignored.
    pub fn solve_with_rng<R: RandomSource>(
        &self,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<PlacementResult, ConfigError> {
        SaRunner::run_with_rng(self, config, rng, None).map(PlacementResult::from)
    }
}

impl SaProblem for PlacementProblem {
    type Solution = Vec<Rect>;

    fn initial_solution(&self) -> Vec<Rect> {
        self.rects.clone()
    }

    fn cost(&self, rects: &Vec<Rect>) -> f64 {
        total_intersection_area(rects) as f64
    }

    fn neighbor<R: RandomSource>(&self, rects: &Vec<Rect>, rng: &mut R) -> Vec<Rect> {
        propose_move(rects, &self.field, rng)
    }

    fn target_cost(&self) -> Option<f64> {
        Some(0.0)
    }
}

/// Outcome of annealing a [`PlacementProblem`].
#[derive(Debug, Clone)]
pub struct PlacementResult {
    /// Best layout found, in input order.
    pub rectangles: Vec<Rect>,

    /// Total pairwise overlap of `rectangles`.
    pub intersection_area: i64,

    /// Candidate layouts evaluated.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best overlap area sampled during the run.
    pub area_history: Vec<i64>,
}

impl From<SaResult<Vec<Rect>>> for PlacementResult {
    fn from(result: SaResult<Vec<Rect>>) -> Self {
        // Recomputed from the layout rather than trusting the float cost.
        let intersection_area = total_intersection_area(&result.best);
        Self {
            rectangles: result.best,
            intersection_area,
            iterations: result.iterations,
            final_temperature: result.final_temperature,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
            termination: result.termination,
            area_history: result
                .cost_history
                .iter()
                .map(|&cost| cost.round() as i64)
                .collect(),
        }
    }
}
