//! Simulation core: grid storage, edge topology, transition rules and the
//! board controller that owns the live state.

pub mod board;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod topology;

pub use board::{Board, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
pub use grid::Grid;
pub use patterns::{Pattern, PATTERNS};
pub use rules::{count_live_neighbors, next_generation, RuleSet};
pub use topology::Topology;

use thiserror::Error;

/// Errors produced by the simulation core. Everything else in the engine is
/// a total function over valid inputs.
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("cell density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
