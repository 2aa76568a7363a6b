//! Exhaustive minimax search
//!
//! Full-width, depth-limited minimax over board values. Black is the
//! maximizing side and White the minimizing side; leaves are scored with
//! [`evaluate`]. No pruning, no caching: every legal line is visited.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Color};
//! use reversi::search::Searcher;
//!
//! let board: Board = "EEEEEEEEEEEEBWEEEWBEEEEEE".parse().unwrap();
//! let mut searcher = Searcher::new();
//!
//! if let Some(result) = searcher.search(&board, Color::Black, 2) {
//!     println!("score {}\n{}", result.score, result.board);
//! }
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Color};
use crate::eval::evaluate;

/// Chosen board paired with its backed-up score.
///
/// `board` is an immediate successor of the searched position, or the
/// position itself when it was terminal or searched at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub board: Board,
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Static evaluations (terminal or depth-limit positions)
    pub evaluations: u64,
    /// Positions that returned no move
    pub dead_ends: u64,
}

/// Minimax searcher that keeps statistics for its last search.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for `color`, looking `depth` plies ahead.
    ///
    /// Returns `None` when `color` has no move at the root, or when every
    /// legal move leads to a line where some side runs out of moves before
    /// the depth limit.
    pub fn search(&mut self, board: &Board, color: Color, depth: u32) -> Option<SearchResult> {
        self.stats = SearchStats::default();
        let result = self.minimax(board, depth, color == Color::Black);

        debug!(
            %color,
            depth,
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            dead_ends = self.stats.dead_ends,
            score = ?result.map(|r| r.score),
            "search finished"
        );
        result
    }

    /// Recursive minimax.
    ///
    /// Terminal boards and depth-0 boards are returned as-is with their
    /// static score. Otherwise every legal successor of the side to move is
    /// searched; successors with no result are skipped, and ties go to the
    /// later successor in row-major order.
    pub fn minimax(&mut self, node: &Board, depth: u32, maximizing: bool) -> Option<SearchResult> {
        self.stats.nodes += 1;

        if node.winner().is_some() || depth == 0 {
            self.stats.evaluations += 1;
            return Some(SearchResult {
                board: *node,
                score: evaluate(node),
            });
        }

        let color = if maximizing { Color::Black } else { Color::White };
        let children = node.legal_successors(color);
        if children.is_empty() {
            self.stats.dead_ends += 1;
            trace!(%color, depth, "no legal move");
            return None;
        }

        let mut best: Option<SearchResult> = None;
        for child in children {
            let Some(value) = self.minimax(&child, depth - 1, !maximizing) else {
                continue;
            };
            let replace = match best {
                None => true,
                Some(current) if maximizing => value.score >= current.score,
                Some(current) => value.score <= current.score,
            };
            if replace {
                best = Some(SearchResult {
                    board: child,
                    score: value.score,
                });
            }
        }

        if best.is_none() {
            self.stats.dead_ends += 1;
        }
        best
    }
}

/// Minimax with a throwaway [`Searcher`].
#[must_use]
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> Option<SearchResult> {
    Searcher::new().minimax(board, depth, maximizing)
}
