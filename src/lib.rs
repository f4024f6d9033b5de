//! Overlap-minimizing rectangle placement via simulated annealing.
//!
//! Places a fixed set of axis-aligned rectangles inside a bounded field
//! so that the total pairwise overlap area is as small as possible.
//!
//! - **Geometry**: overlap area of two rectangles and total pairwise
//!   intersection area of a layout.
//! - **Move generator**: redraws every rectangle at a uniformly random
//!   in-bounds position.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling, best-so-far tracking, and an early exit once a
//!   zero-overlap layout is found.
//! - **Input**: parsing and validation of the `k n m (x1 y1 x2 y2)*`
//!   token stream consumed by the command-line driver.
//!
//! # Example
//!
//! ```
//! use rect_anneal::geometry::{Field, Rect};
//! use rect_anneal::placement::PlacementProblem;
//! use rect_anneal::sa::SaConfig;
//!
//! let field = Field::new(6, 6);
//! let rects = vec![Rect::new(2, 3, 4, 1), Rect::new(3, 4, 5, 2)];
//! let problem = PlacementProblem::new(field, rects).unwrap();
//!
//! let result = problem.solve(&SaConfig::default().with_seed(7)).unwrap();
//! assert_eq!(result.rectangles.len(), 2);
//! assert!(result.intersection_area <= 1);
//! ```

pub mod error;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod random;
pub mod sa;

pub use error::{ConfigError, InputError};
