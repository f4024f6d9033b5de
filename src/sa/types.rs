//! Core trait for Simulated Annealing.

use crate::random::RandomSource;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, the acceptance
/// criterion, cooling, and best-so-far tracking.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// The solution the run starts from.
    fn initial_solution(&self) -> Self::Solution;

    /// Computes the cost (energy) of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a candidate from the current solution.
    ///
    /// Returns a new value; the current solution is never mutated, so the
    /// runner's current and best solutions cannot alias.
    fn neighbor<R: RandomSource>(&self, solution: &Self::Solution, rng: &mut R)
        -> Self::Solution;

    /// A cost that cannot be improved upon.
    ///
    /// When a solution reaches it the run stops at once. `None` (the
    /// default) disables the early exit.
    fn target_cost(&self) -> Option<f64> {
        None
    }

    /// Called at the start of every iteration with the temperature that
    /// iteration runs at.
    fn on_temperature_change(
        &self,
        _temperature: f64,
        _iteration: usize,
        _best: &Self::Solution,
        _current: &Self::Solution,
    ) {
    }
}
