//! Evaluation module for 5x5 Reversi
//!
//! Scores are always from Black's point of view: Black maximizes, White
//! minimizes.

pub mod heuristic;
pub mod score;

pub use heuristic::{edge_score, evaluate, material_score};
pub use score::Score;
