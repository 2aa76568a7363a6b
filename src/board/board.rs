//! Board structure with cached token counts

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Color, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{BoardError, MoveError};
use crate::rules::{self, Outcome};

/// Game board.
///
/// A board is a value: every move produces a new `Board` and the board a
/// move was applied to is left untouched. `black_count` and `white_count`
/// always equal the number of cells holding each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    black_count: u32,
    white_count: u32,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            black_count: 0,
            white_count: 0,
        }
    }

    /// Parse the 25-character row-major serialization (`B`, `W`, `E`).
    pub fn from_serialized(text: &str) -> Result<Self, BoardError> {
        let len = text.chars().count();
        if len != TOTAL_CELLS {
            return Err(BoardError::InvalidLength(len));
        }

        let mut board = Self::new();
        for (index, token) in text.chars().enumerate() {
            let cell = Cell::from_char(token).ok_or(BoardError::InvalidToken { index, token })?;
            board.set(Pos::from_index(index), cell);
        }
        board.black_count = board.black.count();
        board.white_count = board.white.count();
        board.debug_check_counts();
        Ok(board)
    }

    /// Row-major 25-character serialization, inverse of `from_serialized`
    pub fn serialize(&self) -> String {
        Pos::all().map(|pos| self.get(pos).to_char()).collect()
    }

    /// Get cell state at an on-board position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(pos.is_on_board(), "position {pos} is off the board");
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// True for an on-board cell holding no token; off-board is never empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        pos.is_on_board() && !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell without touching the counters
    #[inline]
    fn set(&mut self, pos: Pos, cell: Cell) {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
    }

    /// Bitboard of a color's tokens
    #[inline]
    pub fn tokens(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Bitboard of the empty cells
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Cached token count for a color
    #[inline]
    pub fn token_count(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_count,
            Color::White => self.white_count,
        }
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.black_count - self.white_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Tokens of `color` on the outer ring, each border cell counted once
    pub fn edge_token_count(&self, color: Color) -> u32 {
        self.tokens(color).iter_ones().filter(|pos| pos.is_edge()).count() as u32
    }

    /// Outcome once every cell is occupied, `None` while the game is on
    #[inline]
    pub fn winner(&self) -> Option<Outcome> {
        rules::check_winner(self)
    }

    /// Outcome from the current counts, used when neither side can move
    #[inline]
    pub fn outcome_by_count(&self) -> Outcome {
        rules::outcome_by_count(self)
    }

    /// Place `color` at `pos` on a copy of this board.
    ///
    /// Returns the new board and the number of rival tokens flipped (the
    /// placed token is not counted). `self` is never modified.
    pub fn apply_move(&self, pos: Pos, color: Color) -> Result<(Board, u32), MoveError> {
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.is_empty_at(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }

        let flips = rules::flip_mask(self, pos, color);
        if flips.is_empty() {
            return Err(MoveError::NoCapture(pos));
        }
        let flipped = flips.count();

        let mut next = *self;
        match color {
            Color::Black => {
                next.black |= flips;
                next.black.set(pos);
                next.white = next.white & !flips;
                next.black_count += flipped + 1;
                next.white_count -= flipped;
            }
            Color::White => {
                next.white |= flips;
                next.white.set(pos);
                next.black = next.black & !flips;
                next.white_count += flipped + 1;
                next.black_count -= flipped;
            }
        }
        next.debug_check_counts();

        Ok((next, flipped))
    }

    /// Legal placements for `color`, row-major
    pub fn legal_moves(&self, color: Color) -> Vec<Pos> {
        self.empty_cells()
            .iter_ones()
            .filter(|&pos| rules::has_capture(self, pos, color))
            .collect()
    }

    /// Check if `color` has at least one legal placement
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.empty_cells()
            .iter_ones()
            .any(|pos| rules::has_capture(self, pos, color))
    }

    /// Boards reachable by one legal placement of `color`, in row-major
    /// order of the placed cell. Empty when `color` cannot move.
    pub fn legal_successors(&self, color: Color) -> Vec<Board> {
        self.empty_cells()
            .iter_ones()
            .filter_map(|pos| self.apply_move(pos, color).ok())
            .map(|(board, _)| board)
            .collect()
    }

    #[inline]
    fn debug_check_counts(&self) {
        debug_assert_eq!(self.black_count, self.black.count());
        debug_assert_eq!(self.white_count, self.white.count());
        debug_assert!((self.black & self.white).is_empty());
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_serialized(s)
    }
}

/// Grid rendering: one row per line, cells separated by `|`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str("|")?;
                }
                let pos = Pos::new(row as u8, col as u8);
                write!(f, "{}", self.get(pos).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
