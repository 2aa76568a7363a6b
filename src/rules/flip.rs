//! Capture rule for Reversi
//!
//! Placing a token captures every run of rival tokens that lies between the
//! placed cell and another token of the placing color, along any of the
//! eight directions. An empty cell or the board edge before the closing
//! token voids that direction.

use crate::board::{Bitboard, Board, Cell, Color, Pos};

/// Direction vectors (row delta, column delta)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // N
    (1, 0),   // S
    (0, 1),   // E
    (0, -1),  // W
    (-1, 1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (1, -1),  // SW
];

/// Cells captured along a single direction, empty if the run is not closed.
fn flips_in_direction(board: &Board, pos: Pos, color: Color, dr: i32, dc: i32) -> Bitboard {
    let own = Cell::from(color);
    let rival = Cell::from(color.rival());
    let mut run = Bitboard::new();

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while let Some(p) = Pos::checked(r, c) {
        match board.get(p) {
            cell if cell == rival => run.set(p),
            // Closing token: an empty run (own token adjacent) captures nothing
            cell if cell == own => return run,
            _ => return Bitboard::new(),
        }
        r += dr;
        c += dc;
    }

    // Ran off the edge
    Bitboard::new()
}

/// Every cell that would flip if `color` were placed at `pos`.
///
/// Read-only: the board is never modified. `pos` must be on the board; the
/// occupancy of `pos` itself is not checked here.
pub fn flip_mask(board: &Board, pos: Pos, color: Color) -> Bitboard {
    let mut mask = Bitboard::new();
    for &(dr, dc) in &DIRECTIONS {
        mask |= flips_in_direction(board, pos, color, dr, dc);
    }
    mask
}

/// Check if placing `color` at `pos` captures at least one token.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !flips_in_direction(board, pos, color, dr, dc).is_empty())
}
