//! Random playouts.
//!
//! Plays games to the end with uniformly random legal moves. Useful for
//! smoke-testing the rules over long games and for benchmarking; it makes
//! no attempt to play well.
//!
//! The move policy draws from its own generator, separate from the game's,
//! so the tiles a game deals are unaffected by how moves are chosen.
//!
//! ```
//! use threes_engine::core::{GameConfig, GameState};
//! use threes_engine::sim::RandomPlayout;
//!
//! let start = GameState::new_game(&GameConfig::new().with_seed(1)).unwrap();
//! let result = RandomPlayout::new(7).run(&start).unwrap();
//!
//! assert!(result.moves > 0);
//! assert_eq!(result.score, result.final_state.score());
//! ```

mod stream;

pub use stream::PrngStream;

use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::Result;
use crate::core::state::GameState;
use crate::core::tile::Tile;

/// Outcome of one playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    /// Moves applied.
    pub moves: u32,
    /// Score of the final board.
    pub score: u64,
    /// Highest tile on the final board.
    pub max_tile: Tile,
    /// The playout stopped because no move was legal.
    pub game_over: bool,
    pub final_state: GameState,
}

/// Random-move player.
#[derive(Clone, Debug)]
pub struct RandomPlayout {
    policy: PrngStream,
    max_moves: Option<u32>,
}

impl RandomPlayout {
    /// Player whose move choices are seeded by `policy_seed`.
    #[must_use]
    pub fn new(policy_seed: u64) -> Self {
        Self {
            policy: PrngStream::seeded(policy_seed),
            max_moves: None,
        }
    }

    /// Stop after this many moves even if the game is not over.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    /// Play from `start` until no move is legal or the move limit is hit.
    pub fn run(&mut self, start: &GameState) -> Result<PlayoutResult> {
        let mut state = start.clone();
        let mut moves = 0;
        let mut game_over = false;

        while self.max_moves.map_or(true, |max| moves < max) {
            let legal = state.legal_moves();
            let Some(&direction) = legal.choose(&mut self.policy) else {
                game_over = true;
                break;
            };
            state = state.apply_move(direction)?;
            moves += 1;
        }

        debug!(moves, score = state.score(), game_over, "playout finished");
        Ok(PlayoutResult {
            moves,
            score: state.score(),
            max_tile: state.board().max_tile(),
            game_over,
            final_state: state,
        })
    }
}

/// Aggregate statistics over many playouts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Playouts recorded.
    pub games: u32,

    /// Moves across all playouts.
    pub total_moves: u64,

    /// Score across all playouts.
    pub total_score: u64,

    /// Best single score.
    pub best_score: u64,

    /// How many playouts ended with each highest tile.
    pub max_tile_counts: FxHashMap<Tile, u32>,
}

impl PlayoutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one playout into the totals.
    pub fn record(&mut self, result: &PlayoutResult) {
        self.games += 1;
        self.total_moves += u64::from(result.moves);
        self.total_score += result.score;
        self.best_score = self.best_score.max(result.score);
        *self.max_tile_counts.entry(result.max_tile).or_insert(0) += 1;
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games)
        }
    }

    #[must_use]
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games)
        }
    }

    /// Fraction of playouts whose highest tile reached at least `tile`.
    #[must_use]
    pub fn reached_rate(&self, tile: Tile) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let reached: u32 = self
            .max_tile_counts
            .iter()
            .filter(|(&max, _)| max >= tile)
            .map(|(_, &count)| count)
            .sum();
        f64::from(reached) / f64::from(self.games)
    }
}
