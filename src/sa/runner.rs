//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use crate::random::{create_rng, RandomSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The temperature dropped to or below the stopping temperature.
    Cooled,
    /// A candidate reached the target cost and was returned as-is.
    TargetReached,
    /// The initial solution already met the target cost; no iterations ran.
    InitialTarget,
    /// Cancelled externally; the best solution so far is returned.
    Cancelled,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best cost sampled every `history_interval` iterations.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The token is checked at the top of every iteration.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing from the supplied random source.
    ///
    /// `config.seed` is ignored; the caller owns the randomness.
    pub fn run_with_rng<P: SaProblem, R: RandomSource>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        config.validate()?;

        let target = problem.target_cost();
        let reaches_target = |cost: f64| target.is_some_and(|t| cost <= t);

        let mut current = problem.initial_solution();
        let mut current_cost = problem.cost(&current);

        if reaches_target(current_cost) {
            log::info!("SA skipped: initial solution already at target cost {current_cost}");
            return Ok(SaResult {
                best: current,
                best_cost: current_cost,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                termination: Termination::InitialTarget,
                cost_history: vec![current_cost],
            });
        }

        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut termination = Termination::Cooled;

        let mut cost_history = vec![best_cost];

        log::debug!(
            "SA start: cost={current_cost}, T0={}, rate={}, T_stop={}, planned_iterations={}",
            config.initial_temperature,
            config.cooling_rate,
            config.stopping_temperature,
            config.planned_iterations()
        );

        while temperature > config.stopping_temperature {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }

            problem.on_temperature_change(temperature, iterations, &best, &current);

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);
            iterations += 1;

            // Returned as the answer without passing through acceptance or
            // best-so-far bookkeeping.
            if reaches_target(candidate_cost) {
                log::info!(
                    "SA reached target cost {candidate_cost} after {iterations} iterations at T={temperature:.4}"
                );
                return Ok(SaResult {
                    best: candidate,
                    best_cost: candidate_cost,
                    iterations,
                    final_temperature: temperature,
                    accepted_moves,
                    improving_moves,
                    termination: Termination::TargetReached,
                    cost_history,
                });
            }

            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let threshold = rng.unit();
            let accept = delta < 0.0 || (-delta / temperature).exp() >= threshold;

            log::trace!(
                "SA iteration {iterations}: T={temperature:.4}, candidate={candidate_cost}, delta={delta}, accept={accept}"
            );

            if accept {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_cost = candidate_cost;
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                log::debug!("SA new best {best_cost} at iteration {iterations}");
            }

            if config.history_interval > 0 && iterations % config.history_interval == 0 {
                cost_history.push(best_cost);
            }

            temperature *= config.cooling_rate;

            // Only reachable with subnormal stopping temperatures.
            if temperature <= 0.0 {
                log::warn!("SA temperature underflowed after {iterations} iterations");
                break;
            }
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        log::info!(
            "SA finished ({termination:?}): best={best_cost}, iterations={iterations}, accepted={accepted_moves}, T={temperature:.4}"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
            cost_history,
        })
    }
}
