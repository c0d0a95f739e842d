//! Core engine types: tiles, RNG, errors, configuration, state.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod tile;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use rng::{Draw, Prng};
pub use state::{BoardView, GameState};
pub use tile::{is_valid_tile, validate_tile, QueueEntry, Tile, EMPTY, MAX_TILE, VALID_TILES};
