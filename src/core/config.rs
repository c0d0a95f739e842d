//! Game configuration.
//!
//! Clients describe the game they want with a `GameConfig` and hand it to
//! [`new_game`](crate::engine::new_game):
//!
//! ```
//! use threes_engine::core::GameConfig;
//!
//! let config = GameConfig::default().with_size(5, 4).with_seed(7);
//! assert_eq!(config.initial_tiles(), 12);
//! assert_eq!(config.dimension(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::rng::Prng;
use crate::board::check_dimensions;

/// Board size and seeding for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells.
    pub width: usize,

    /// Board height in cells.
    pub height: usize,

    /// Seed for the generator. `None` draws entropy from [`Prng::fresh`].
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration (4x4, unseeded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Seed the generator for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height).map(|_| ())
    }

    /// Shorter board side; sizes each next-tile batch.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.width.min(self.height)
    }

    /// Tiles placed before the first move.
    #[must_use]
    pub fn initial_tiles(&self) -> usize {
        self.width.saturating_sub(1).saturating_mul(self.height.saturating_sub(1))
    }

    /// Generator for a game built from this configuration.
    #[must_use]
    pub fn rng(&self) -> Prng {
        self.seed.map_or_else(Prng::fresh, Prng::seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (4, 4));
        assert_eq!(config.seed, None);
        assert_eq!(config.initial_tiles(), 9);
        assert_eq!(config.dimension(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        let config = GameConfig::new().with_size(0, 4);
        assert!(matches!(config.validate(), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_overflowing_size() {
        let config = GameConfig::new().with_size(1 << 33, 1 << 33);
        assert!(matches!(config.validate(), Err(GameError::InvalidArgument(_))));
        assert_eq!(config.initial_tiles(), usize::MAX);
    }

    #[test]
    fn test_seeded_rng() {
        let config = GameConfig::new().with_seed(42);
        assert_eq!(config.rng(), Prng::seeded(42));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_size(3, 5).with_seed(9);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
