//! Game rules for 5x5 Reversi
//!
//! This module implements:
//! - The capture rule (eight-direction flip scan)
//! - The outcome rule (full board, or scoring by counts)

pub mod flip;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{flip_mask, has_capture, DIRECTIONS};
pub use outcome::{check_winner, outcome_by_count, Outcome};
