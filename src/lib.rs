//! # threes-engine
//!
//! A deterministic rules engine for Threes-style tile-merging games.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation takes a `GameState` and returns a
//!    new one. Nothing is mutated in place, so any state can be kept,
//!    compared, or replayed.
//!
//! 2. **Reproducible Randomness**: All randomness flows through `Prng`, a
//!    value type carried inside the state. The same seed and the same moves
//!    always produce the same game.
//!
//! 3. **Any Board Shape**: Width and height are configured per game.
//!    Nothing assumes a 4x4 board.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Board cells and the next-tile queue use
//!   `im-rs`, so cloning a state is O(1).
//!
//! - **Slices**: A move views the board as lines parallel to the direction of
//!   travel, reduces each line, then writes them back.
//!
//! ## Modules
//!
//! - `core`: Tiles, RNG, errors, configuration, state
//! - `board`: Board storage and slice conversion
//! - `rules`: Row reduction, special tiles, scoring
//! - `queue`: The queue of upcoming tiles
//! - `engine`: New games and moves
//! - `sim`: Random playouts

pub mod core;
pub mod board;
pub mod rules;
pub mod queue;
pub mod engine;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BoardView, Draw, GameConfig, GameError, GameState, Prng, QueueEntry, Result, Tile,
    MAX_TILE,
};

pub use crate::board::{Board, Direction};

pub use crate::queue::NextQueue;

pub use crate::rules::{board_score, score_tile, SpecialCandidates};

pub use crate::engine::{apply_move, can_move, is_game_over, legal_moves, new_game, peek_next};

pub use crate::sim::{PlayoutResult, PlayoutStats, PrngStream, RandomPlayout};
