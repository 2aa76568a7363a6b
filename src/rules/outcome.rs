//! Game outcome rules
//!
//! The game is decided once every cell is occupied: the color holding more
//! tokens wins. With 25 cells a full board can never be tied, but a game
//! that ends early because neither side can move is scored on the current
//! counts and may be.

use std::fmt;

use crate::board::{Board, Color};

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    /// Outcome from token counts: strictly more tokens wins, equal is a draw
    pub fn from_counts(black: u32, white: u32) -> Outcome {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Winning color, `None` on a draw
    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(color),
            Outcome::Draw => None,
        }
    }

    /// Single-character report: `B`, `W`, or `D` for a draw
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Outcome::Winner(color) => color.to_char(),
            Outcome::Draw => 'D',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{color} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Outcome of a finished board, `None` while any cell is still empty
pub fn check_winner(board: &Board) -> Option<Outcome> {
    if board.is_full() {
        Some(outcome_by_count(board))
    } else {
        None
    }
}

/// Outcome from the current counts, regardless of empty cells
#[inline]
pub fn outcome_by_count(board: &Board) -> Outcome {
    Outcome::from_counts(board.token_count(Color::Black), board.token_count(Color::White))
}
