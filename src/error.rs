//! Error types for configuration and input validation.
//!
//! The annealing loop itself never fails once started; every error here is
//! a precondition violation reported before a run begins.

use crate::geometry::Rect;
use thiserror::Error;

/// Invalid annealing tunables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive, got {0}")]
    NonPositiveInitialTemperature(f64),

    #[error("stopping_temperature must be positive, got {0}")]
    NonPositiveStoppingTemperature(f64),

    #[error("stopping_temperature ({stopping}) must be less than initial_temperature ({initial})")]
    StoppingNotBelowInitial { initial: f64, stopping: f64 },

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRateOutOfRange(f64),
}

/// Axis along which a rectangle is shifted by the move generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Invalid field, rectangle, or driver input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("rectangle count must be positive, got {0}")]
    NonPositiveCount(i64),

    #[error("field dimensions must be positive, got {width}x{height}")]
    NonPositiveField { width: i64, height: i64 },

    #[error("missing value: expected {0}")]
    MissingValue(String),

    #[error("invalid integer {token:?} for {what}")]
    InvalidInteger { what: String, token: String },

    #[error("unexpected trailing input starting at {0:?}")]
    TrailingInput(String),

    #[error("rectangle {index} has inverted corners {rect}; expected x1 <= x2 and y2 <= y1")]
    InvertedRectangle { index: usize, rect: Rect },

    #[error("rectangle {index} at {rect} does not lie inside the field")]
    OutsideField { index: usize, rect: Rect },

    #[error("a {width}x{height} field with {count} rectangles can exceed the largest representable total overlap")]
    AreaTooLarge {
        width: i64,
        height: i64,
        count: usize,
    },

    #[error("rectangle {index} has {axis} extent {extent}, which exceeds the field limit {limit}")]
    DegenerateMoveRange {
        index: usize,
        axis: Axis,
        extent: i64,
        limit: i64,
    },
}
