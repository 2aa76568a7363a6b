//! Game driver: the engine playing both colors until the game ends
//!
//! Each turn runs one minimax search for the side to move. When the search
//! finds no move the side passes and the board stays as it is. The game
//! ends when the board is full, or when neither side can move any more
//! (scored on the current counts).
//!
//! # Example
//!
//! ```
//! use reversi::{Board, Game, GameConfig};
//!
//! let board: Board = "EEEEEEEEEEEEBWEEEWBEEEEEE".parse().unwrap();
//! let report = Game::new(board, GameConfig::with_depth(1)).unwrap().run();
//! println!("{} after {} plies", report.outcome, report.plies);
//! ```

use tracing::{debug, info};

use crate::board::{Board, Color};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::rules::Outcome;
use crate::search::Searcher;

/// Why the game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every cell is occupied
    BoardFull,
    /// Neither side can move, or both sides passed in a row
    NoMovesLeft,
}

/// Summary of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    pub board: Board,
    /// Moves actually placed
    pub plies: u32,
    /// Turns where the side to move could not move
    pub passes: u32,
    pub reason: EndReason,
}

/// Result of a single driver step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Moved { color: Color, board: Board, score: i32 },
    Passed { color: Color },
    Finished(GameReport),
}

/// Self-play game state
pub struct Game {
    board: Board,
    to_move: Color,
    depth: u32,
    searcher: Searcher,
    consecutive_passes: u32,
    plies: u32,
    passes: u32,
}

impl Game {
    /// Start a game from `board` with validated settings
    pub fn new(board: Board, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board,
            to_move: config.first_to_move,
            depth: config.depth,
            searcher: Searcher::new(),
            consecutive_passes: 0,
            plies: 0,
            passes: 0,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose turn it is
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Final report if the game is over
    pub fn result(&self) -> Option<GameReport> {
        if let Some(outcome) = self.board.winner() {
            return Some(self.report(outcome, EndReason::BoardFull));
        }

        let stuck = !self.board.has_legal_move(Color::Black)
            && !self.board.has_legal_move(Color::White);
        if stuck || self.consecutive_passes >= 2 {
            return Some(self.report(self.board.outcome_by_count(), EndReason::NoMovesLeft));
        }

        None
    }

    fn report(&self, outcome: Outcome, reason: EndReason) -> GameReport {
        GameReport {
            outcome,
            board: self.board,
            plies: self.plies,
            passes: self.passes,
            reason,
        }
    }

    /// Play one turn. Once the game is over every call returns the same
    /// `Turn::Finished` report.
    pub fn step(&mut self) -> Turn {
        if let Some(report) = self.result() {
            return Turn::Finished(report);
        }

        let color = self.to_move;
        let turn = match self.searcher.search(&self.board, color, self.depth) {
            Some(result) => {
                self.board = result.board;
                self.plies += 1;
                self.consecutive_passes = 0;
                debug!(%color, score = result.score, board = %self.board.serialize(), "move played");
                Turn::Moved {
                    color,
                    board: result.board,
                    score: result.score,
                }
            }
            None => {
                self.passes += 1;
                self.consecutive_passes += 1;
                debug!(%color, "no move, passing");
                Turn::Passed { color }
            }
        };

        self.to_move = color.rival();
        turn
    }

    /// Play until the game ends
    pub fn run(mut self) -> GameReport {
        loop {
            if let Turn::Finished(report) = self.step() {
                info!(
                    outcome = %report.outcome,
                    reason = ?report.reason,
                    plies = report.plies,
                    passes = report.passes,
                    "game over"
                );
                return report;
            }
        }
    }
}
