//! Error types for board parsing, move application, loading and configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

/// Serialized board could not be parsed (invalid format)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Wrong number of cells
    #[error("invalid board format: expected 25 cells, found {0}")]
    InvalidLength(usize),

    /// A cell token outside of `B`, `W`, `E`
    #[error("invalid board format: token {token:?} at cell {index} is not one of B, W, E")]
    InvalidToken { index: usize, token: char },
}

/// Reasons a placement is not a legal move.
///
/// These never escape as hard failures: callers treat any of them as
/// "not a legal move here".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("position {0} is already occupied")]
    OccupiedCell(Pos),

    #[error("placing at {0} captures nothing")]
    NoCapture(Pos),
}

/// Board file could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read board file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Rejected game configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero-depth search returns the current board and the game never advances
    #[error("search depth must be at least 1")]
    ZeroDepth,
}
