//! Game engine: starting games and applying moves.
//!
//! Every operation is a pure function from a `GameState` to a new one.
//!
//! ## Example
//!
//! ```
//! use threes_engine::board::Direction;
//! use threes_engine::core::{GameConfig, GameState};
//!
//! let state = GameState::new_game(&GameConfig::new().with_seed(42)).unwrap();
//!
//! let direction = state.legal_moves()[0];
//! let next = state.apply_move(direction).unwrap();
//!
//! // The old state is still intact.
//! assert_eq!(state.board().empty_count(), 7);
//! assert_ne!(next.board(), state.board());
//! ```

mod moves;
mod setup;

pub use moves::{apply_move, can_move, is_game_over, legal_moves, peek_next};
pub use setup::{empty_game, new_game, populate};

use crate::board::Direction;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::state::{BoardView, GameState};
use crate::rules::SpecialCandidates;

impl GameState {
    /// Build and populate a new game. See [`new_game`].
    pub fn new_game(config: &GameConfig) -> Result<Self> {
        new_game(config)
    }

    /// See [`apply_move`].
    pub fn apply_move(&self, direction: Direction) -> Result<Self> {
        apply_move(self, direction)
    }

    /// See [`can_move`].
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        can_move(self, direction)
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        legal_moves(self)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        is_game_over(self)
    }

    /// See [`peek_next`].
    pub fn peek_next(&self) -> Result<SpecialCandidates> {
        peek_next(self)
    }

    /// Projection for renderers.
    pub fn view(&self) -> Result<BoardView> {
        Ok(BoardView {
            width: self.width(),
            height: self.height(),
            cells: self.board().cells().iter().copied().collect(),
            next: self.peek_next()?.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::rng::Prng;
    use crate::core::tile::QueueEntry;
    use crate::queue::NextQueue;

    #[test]
    fn test_view() {
        let state = GameState::from_parts(
            Board::from_cells(2, 2, [0, 1, 2, 3]).unwrap(),
            NextQueue::from_entries([QueueEntry::Tile(2)]).unwrap(),
            Prng::seeded(1),
        );

        let view = state.view().unwrap();

        assert_eq!((view.width, view.height), (2, 2));
        assert_eq!(view.cells, vec![0, 1, 2, 3]);
        assert_eq!(view.next, vec![2]);
    }

    #[test]
    fn test_methods_match_free_functions() {
        let state = GameState::new_game(&GameConfig::new().with_seed(3)).unwrap();

        for direction in Direction::ALL {
            assert_eq!(state.can_move(direction), can_move(&state, direction));
            assert_eq!(state.apply_move(direction), apply_move(&state, direction));
        }
        assert_eq!(state.is_game_over(), is_game_over(&state));
    }
}
