//! Neighbor move: redraw every rectangle at a random in-bounds position.

use crate::geometry::{Field, Rect};
use crate::random::RandomSource;

/// Repositions every rectangle independently to a uniformly random location
/// inside `field`, keeping its size.
///
/// The horizontal shift is drawn from `[-x1, width - x2]` and the vertical
/// shift from `[-y2, height - y1]`, so each output rectangle lies in the
/// field whatever its current position. This is a full redraw, not a small
/// perturbation.
///
/// Every rectangle must be normalized and fit the field in size;
/// [`PlacementProblem::new`](super::PlacementProblem::new) checks this.
pub fn propose_move<R: RandomSource>(rects: &[Rect], field: &Field, rng: &mut R) -> Vec<Rect> {
    rects
        .iter()
        .map(|rect| {
            let dx = rng.int_inclusive(-rect.x1, field.width - rect.x2);
            let dy = rng.int_inclusive(-rect.y2, field.height - rect.y1);
            rect.translated(dx, dy)
        })
        .collect()
}
