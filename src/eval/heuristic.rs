//! Heuristic evaluation function for Reversi board positions
//!
//! A board is scored on two terms:
//! - Material: token-count difference
//! - Edge control: difference in tokens held on the outer ring
//!
//! Decided boards short-circuit to the terminal scores in [`Score`].

use crate::board::{Board, Color};
use crate::rules::Outcome;

use super::score::Score;

/// Evaluate the board from Black's perspective.
///
/// Returns:
/// - `Score::WIN` / `Score::LOSS` on a full board won by Black / White
/// - `Score::DRAW` on a full tied board
/// - otherwise `material_score + edge_score`
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Some(Outcome::Winner(Color::Black)) => Score::WIN,
        Some(Outcome::Winner(Color::White)) => Score::LOSS,
        Some(Outcome::Draw) => Score::DRAW,
        None => material_score(board) + edge_score(board),
    }
}

/// Token-count difference, Black minus White
#[inline]
pub fn material_score(board: &Board) -> i32 {
    let diff = board.token_count(Color::Black) as i32 - board.token_count(Color::White) as i32;
    diff * Score::MATERIAL_WEIGHT
}

/// Edge-token difference, Black minus White
#[inline]
pub fn edge_score(board: &Board) -> i32 {
    let diff = board.edge_token_count(Color::Black) as i32
        - board.edge_token_count(Color::White) as i32;
    diff * Score::EDGE_WEIGHT
}
