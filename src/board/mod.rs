//! Board representation for 5x5 Reversi

pub mod bitboard;
pub mod board;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Token colors. Black moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the rival color
    #[inline]
    pub fn rival(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Serialized token for this color
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Parse a serialized token (`B`, `W` or `E`)
    #[inline]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'B' => Some(Cell::Black),
            'W' => Some(Cell::White),
            'E' => Some(Cell::Empty),
            _ => None,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Empty => 'E',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Position on the board.
///
/// A `Pos` may lie off the board; `Board::apply_move` rejects those with
/// `MoveError::OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` when off the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// True for cells on the outer ring
    #[inline]
    pub fn is_edge(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// All board positions in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
