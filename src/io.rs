//! Board file loading and outcome file writing

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::board::Board;
use crate::error::{BoardError, LoadError};
use crate::rules::Outcome;

/// Parse board text that may be split across lines.
///
/// Only line terminators are dropped; the joined text must be exactly the
/// 25-character serialization.
pub fn parse_board_text(text: &str) -> Result<Board, BoardError> {
    let joined: String = text.lines().collect();
    Board::from_serialized(&joined)
}

/// Load a board from a text file
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = parse_board_text(&text)?;
    debug!(path = %path.display(), board = %board.serialize(), "board loaded");
    Ok(board)
}

/// Write the single outcome character (`B`, `W` or `D`)
pub fn write_outcome(path: impl AsRef<Path>, outcome: Outcome) -> std::io::Result<()> {
    fs::write(path, outcome.to_char().to_string())
}
