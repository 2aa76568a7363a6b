//! Search module for 5x5 Reversi
//!
//! Contains the exhaustive minimax search used to pick every move.

pub mod minimax;

pub use minimax::{minimax, SearchResult, SearchStats, Searcher};
