//! Rectangle placement as an annealing problem.
//!
//! Energy is the total pairwise overlap area of the layout; a layout with
//! no overlap is optimal and ends the run as soon as one is drawn.

mod moves;
mod problem;

pub use moves::propose_move;
pub use problem::{PlacementProblem, PlacementResult, MAX_TOTAL_AREA};
