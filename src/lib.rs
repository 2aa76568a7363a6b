//! 5x5 Reversi engine with exhaustive minimax search
//!
//! Reversi/Othello rules on a fixed 5x5 board:
//! - Black (`B`) and White (`W`) alternate placing tokens on empty cells
//! - A placement must flank at least one run of rival tokens, which flip
//! - A side with no legal placement passes
//! - The game ends when the board is full; the majority color wins
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and cached counts
//! - [`rules`]: Capture rule and game outcome
//! - [`eval`]: Static evaluation from Black's perspective
//! - [`search`]: Full-width minimax
//! - [`game`]: Self-play driver
//! - [`io`]: Board file loading and outcome writing
//!
//! # Quick Start
//!
//! ```
//! use reversi::{minimax, Board, Color};
//!
//! let board: Board = "EEEEEEEEEEEEBWEEEWBEEEEEE".parse().unwrap();
//!
//! // Black to move, one ply ahead
//! if let Some(result) = minimax(&board, 1, true) {
//!     assert_eq!(result.board.token_count(Color::Black), 4);
//!     print!("{}", result.board);
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod io;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError, LoadError, MoveError};
pub use eval::evaluate;
pub use game::{EndReason, Game, GameReport, Turn};
pub use rules::Outcome;
pub use search::{minimax, SearchResult, Searcher};
