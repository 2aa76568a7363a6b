//! Game configuration

use crate::board::Color;
use crate::error::ConfigError;

/// Default minimax depth per turn
pub const DEFAULT_DEPTH: u32 = 3;

/// Settings for a game played by the engine against itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Plies searched per turn, at least 1
    pub depth: u32,
    /// Color making the first move
    pub first_to_move: Color,
}

impl GameConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Reject settings the driver cannot make progress with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            first_to_move: Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.first_to_move, Color::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(GameConfig::with_depth(0).validate(), Err(ConfigError::ZeroDepth));
    }
}
