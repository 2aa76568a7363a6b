//! Score constants for Reversi evaluation

/// Evaluation scores, positive favors Black
pub struct Score;

impl Score {
    /// Black has won
    pub const WIN: i32 = i32::MAX;
    /// White has won
    pub const LOSS: i32 = i32::MIN;
    /// Full board with equal counts
    pub const DRAW: i32 = 0;

    /// Weight of the token-count difference
    pub const MATERIAL_WEIGHT: i32 = 1;
    /// Weight of the edge-token difference
    pub const EDGE_WEIGHT: i32 = 1;
}
