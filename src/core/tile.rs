//! Tile ranks and queue entries.
//!
//! A cell holds `0` (empty), `1`, `2`, or `3·2^k` for `k` in `0..=15`.
//! Ones and twos merge into a three; equal ranks of three or more double.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A tile rank. `0` is an empty cell.
pub type Tile = u32;

/// The empty cell.
pub const EMPTY: Tile = 0;

/// Largest rank a tile can reach.
pub const MAX_TILE: Tile = 98_304;

/// Every valid cell value, ascending.
pub const VALID_TILES: [Tile; 19] = [
    0, 1, 2, 3, 6, 12, 24, 48, 96, 192, 384, 768, 1536, 3072, 6144, 12288, 24576, 49152, 98304,
];

/// Check whether `value` is a recognized tile rank.
#[must_use]
pub fn is_valid_tile(value: Tile) -> bool {
    VALID_TILES.binary_search(&value).is_ok()
}

/// Return `value` if it is a recognized rank, `InvalidTile` otherwise.
pub fn validate_tile(value: Tile) -> Result<Tile> {
    if is_valid_tile(value) {
        Ok(value)
    } else {
        Err(GameError::InvalidTile(value))
    }
}

/// One pending insertion in the next-tile queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueEntry {
    /// A concrete rank.
    Tile(Tile),
    /// Deferred special tile, resolved against the board maximum when
    /// consumed.
    Special,
}

impl QueueEntry {
    /// The concrete rank, if this entry has one.
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            QueueEntry::Tile(tile) => Some(tile),
            QueueEntry::Special => None,
        }
    }

    /// Is this the deferred special sentinel?
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, QueueEntry::Special)
    }
}
