//! Errors raised while loading data from outside the simulation
//!
//! The simulation itself never fails; only config and level documents can.

use thiserror::Error;

/// Invalid game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Malformed level grid
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}
