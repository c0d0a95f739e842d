//! Move orchestration.
//!
//! A move runs in a fixed order, and every generator draw happens at a
//! fixed point in it, so a seeded game always replays identically:
//!
//! 1. Cut the board into slices and reduce each one. No slice changed
//!    means the move is illegal.
//! 2. Take the next tile from the queue. A special entry resolves against
//!    the board *before* the move; if it has no candidates it is dropped
//!    and the following entry is used instead.
//! 3. Pick the slice that receives the tile: free if only one slice moved,
//!    one draw otherwise.
//! 4. Drop the tile on that slice's trailing edge and reassemble.
//! 5. Refill the queue if it ran out.

use smallvec::smallvec;
use tracing::{debug, trace};

use crate::board::{Board, Direction};
use crate::core::error::{GameError, Result};
use crate::core::rng::Prng;
use crate::core::state::GameState;
use crate::core::tile::{QueueEntry, Tile, EMPTY};
use crate::queue::NextQueue;
use crate::rules::{choose_candidate, reduce, special_candidates, SpecialCandidates};

/// Would pushing in `direction` change the board?
#[must_use]
pub fn can_move(state: &GameState, direction: Direction) -> bool {
    state
        .board()
        .to_slices(direction)
        .iter()
        .any(|slice| reduce(slice) != *slice)
}

/// Directions that would change the board, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(state, direction))
        .collect()
}

/// No direction changes the board.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    !Direction::ALL.into_iter().any(|direction| can_move(state, direction))
}

/// Push the board in `direction` and insert the next tile.
///
/// Fails with `IllegalMove` if no slice changes. The input state is left
/// untouched either way.
pub fn apply_move(state: &GameState, direction: Direction) -> Result<GameState> {
    let mut slices = state.board().to_slices(direction);
    let mut moved = Vec::new();
    for (index, slice) in slices.iter_mut().enumerate() {
        let reduced = reduce(slice);
        if reduced != *slice {
            *slice = reduced;
            moved.push(index);
        }
    }
    if moved.is_empty() {
        return Err(GameError::IllegalMove(direction));
    }

    let next = take_next_tile(state.board(), state.queue(), state.rng(), state.dimension())?;

    let (target, rng) = match moved.as_slice() {
        [only] => (*only, next.rng),
        _ => {
            let draw = next.rng.next_index(moved.len())?;
            (moved[draw.value], draw.next)
        }
    };

    match slices[target].last_mut() {
        Some(cell) if *cell == EMPTY => *cell = next.tile,
        _ => {
            return Err(GameError::InternalInconsistency(format!(
                "trailing cell of slice {target} is occupied after moving {direction}"
            )))
        }
    }

    let board = Board::from_slices(&slices, direction, state.width(), state.height())?;
    let refill = next.queue.replenish(rng, state.dimension())?;

    debug!(%direction, moved = moved.len(), target, tile = next.tile, "move applied");
    Ok(GameState::from_parts(board, refill.queue, refill.rng))
}

/// Candidates for the tile the next move will insert.
///
/// A concrete entry yields itself; a special entry yields its candidates
/// against the current board. Nothing is consumed, so this never changes
/// what the next move draws.
pub fn peek_next(state: &GameState) -> Result<SpecialCandidates> {
    Ok(resolve_front(state.board(), state.queue(), state.rng(), state.dimension())?.candidates)
}

/// A concrete tile taken from the queue, plus what is left.
#[derive(Clone, Debug)]
pub(crate) struct NextTile {
    pub tile: Tile,
    pub queue: NextQueue,
    pub rng: Prng,
}

/// Take the next concrete tile, resolving special entries against `board`.
pub(crate) fn take_next_tile(board: &Board, queue: &NextQueue, rng: Prng, dimension: usize) -> Result<NextTile> {
    let front = resolve_front(board, queue, rng, dimension)?;
    let draw = choose_candidate(&front.candidates, front.rng)?.ok_or_else(|| {
        GameError::InternalInconsistency("queue front resolved to no candidates".to_string())
    })?;
    Ok(NextTile {
        tile: draw.value,
        queue: front.queue,
        rng: draw.next,
    })
}

/// First queue entry with at least one candidate, popped.
struct Front {
    candidates: SpecialCandidates,
    queue: NextQueue,
    rng: Prng,
}

fn resolve_front(board: &Board, queue: &NextQueue, rng: Prng, dimension: usize) -> Result<Front> {
    let mut queue = queue.clone();
    let mut rng = rng;
    loop {
        // Refilling here means a special entry left at the end of the queue
        // is always followed by a fresh batch.
        let refill = queue.replenish(rng, dimension)?;
        rng = refill.rng;
        let popped = refill.queue.pop_front().ok_or_else(|| {
            GameError::InternalInconsistency("next-tile queue is empty after replenishing".to_string())
        })?;
        queue = popped.rest;

        let candidates = match popped.entry {
            QueueEntry::Tile(tile) => smallvec![tile],
            QueueEntry::Special => special_candidates(board.max_tile()),
        };
        if !candidates.is_empty() {
            return Ok(Front { candidates, queue, rng });
        }
        trace!(max_tile = board.max_tile(), "special tile has no candidates, skipping");
    }
}
