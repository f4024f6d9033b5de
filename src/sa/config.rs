//! SA configuration.

use crate::error::ConfigError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Simulated Annealing run.
///
/// One candidate move is evaluated per temperature step, and the
/// temperature decays geometrically: `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use rect_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_stopping_temperature(0.5)
///     .with_cooling_rate(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves early on.
    pub initial_temperature: f64,

    /// Multiplicative decay factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The run stops once the temperature is at or below this value.
    pub stopping_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Record the best energy every this many iterations. 0 disables sampling.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 500.0,
            cooling_rate: 0.99,
            stopping_temperature: 1.0,
            seed: None,
            history_interval: 100,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons also reject NaN.
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveInitialTemperature(
                self.initial_temperature,
            ));
        }
        if !(self.stopping_temperature > 0.0) {
            return Err(ConfigError::NonPositiveStoppingTemperature(
                self.stopping_temperature,
            ));
        }
        if self.stopping_temperature >= self.initial_temperature {
            return Err(ConfigError::StoppingNotBelowInitial {
                initial: self.initial_temperature,
                stopping: self.stopping_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRateOutOfRange(self.cooling_rate));
        }
        Ok(())
    }

    /// Number of cooling steps from the initial to the stopping temperature:
    /// `ceil(ln(stopping / initial) / ln(cooling_rate))`.
    ///
    /// A run that never reaches its target cost performs this many iterations,
    /// give or take one step of floating-point rounding.
    pub fn planned_iterations(&self) -> usize {
        let ratio = self.stopping_temperature / self.initial_temperature;
        let steps = (ratio.ln() / self.cooling_rate.ln()).ceil();
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }
}
