//! Starting a game.

use tracing::{debug, info};

use super::moves::take_next_tile;
use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::state::GameState;
use crate::queue::NextQueue;

/// Build and populate a new game.
///
/// Clears the board, deals the first batch of next tiles, then places
/// `(width - 1) * (height - 1)` tiles at random empty cells.
pub fn new_game(config: &GameConfig) -> Result<GameState> {
    let state = empty_game(config)?;
    let state = populate(&state, config.initial_tiles())?;
    info!(
        width = config.width,
        height = config.height,
        seeded = config.seed.is_some(),
        "new game"
    );
    Ok(state)
}

/// An empty board with the first batch of next tiles dealt.
pub fn empty_game(config: &GameConfig) -> Result<GameState> {
    config.validate()?;
    let board = Board::empty(config.width, config.height)?;
    let refill = NextQueue::new().replenish(config.rng(), config.dimension())?;
    Ok(GameState::from_parts(board, refill.queue, refill.rng))
}

/// Place `count` tiles from the queue, each at a uniformly random empty cell.
///
/// Fails with `BoardFull` if the board fills up first.
pub fn populate(state: &GameState, count: usize) -> Result<GameState> {
    (0..count).try_fold(state.clone(), |state, _| place_initial_tile(&state))
}

fn place_initial_tile(state: &GameState) -> Result<GameState> {
    let empty = state.board().empty_indices();
    if empty.is_empty() {
        return Err(GameError::BoardFull);
    }

    let next = take_next_tile(state.board(), state.queue(), state.rng(), state.dimension())?;
    let draw = next.rng.next_index(empty.len())?;
    let index = empty[draw.value];
    let board = state.board().with_cell(index, next.tile)?;
    let refill = next.queue.replenish(draw.next, state.dimension())?;

    debug!(index, tile = next.tile, "placed starting tile");
    Ok(GameState::from_parts(board, refill.queue, refill.rng))
}
