//! Game state: board, next-tile queue, generator.
//!
//! ## GameState
//!
//! An immutable aggregate. Every engine operation takes a state by
//! reference and returns a new one; the `with_*` constructors build a copy
//! with one field swapped. Clones are cheap because the board and queue
//! are `im` persistent vectors.
//!
//! The score is never stored: [`GameState::score`] recomputes it from the
//! board on every call.
//!
//! ## BoardView
//!
//! Read-only projection handed to renderers.

use serde::{Deserialize, Serialize};

use super::rng::Prng;
use super::tile::Tile;
use crate::board::Board;
use crate::queue::NextQueue;
use crate::rules::board_score;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    queue: NextQueue,
    rng: Prng,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// An empty queue is allowed; it is refilled the first time a tile is
    /// needed.
    #[must_use]
    pub fn from_parts(board: Board, queue: NextQueue, rng: Prng) -> Self {
        Self { board, queue, rng }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    #[must_use]
    pub fn rng(&self) -> Prng {
        self.rng
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Shorter board side; sizes each next-tile batch.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.width().min(self.height())
    }

    /// Copy with the board replaced.
    #[must_use]
    pub fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            queue: self.queue.clone(),
            rng: self.rng,
        }
    }

    /// Copy with the queue replaced.
    #[must_use]
    pub fn with_queue(&self, queue: NextQueue) -> Self {
        Self {
            board: self.board.clone(),
            queue,
            rng: self.rng,
        }
    }

    /// Copy with the generator replaced.
    #[must_use]
    pub fn with_rng(&self, rng: Prng) -> Self {
        Self {
            board: self.board.clone(),
            queue: self.queue.clone(),
            rng,
        }
    }

    /// Current score, recomputed from the board.
    #[must_use]
    pub fn score(&self) -> u64 {
        board_score(&self.board)
    }
}

/// What a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    /// Row-major cells.
    pub cells: Vec<Tile>,
    /// Candidates for the next inserted tile.
    pub next: Vec<Tile>,
}
