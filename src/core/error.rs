//! Error taxonomy for engine operations.
//!
//! Every failure is terminal at the point of detection: the operation
//! aborts and hands the error back. Nothing is retried internally.

use thiserror::Error;

use super::tile::Tile;
use crate::board::Direction;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors surfaced by board, queue, and move operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinate outside the board.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// No slice changes when pushed in this direction.
    #[error("no tile can move {0}")]
    IllegalMove(Direction),

    /// A tile had to be placed but every cell is occupied.
    #[error("unable to place tile: board is full")]
    BoardFull,

    /// Value is not one of the recognized tile ranks.
    #[error("{0} is not a valid tile rank")]
    InvalidTile(Tile),

    /// An engine invariant was violated.
    #[error("internal invariant violated: {0}")]
    InternalInconsistency(String),

    /// Caller-supplied argument out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidCoordinate { x: 4, y: 0, width: 4, height: 4 };
        assert_eq!(err.to_string(), "coordinate (4, 0) is outside the 4x4 board");

        assert_eq!(GameError::IllegalMove(Direction::Up).to_string(), "no tile can move up");
        assert_eq!(GameError::InvalidTile(5).to_string(), "5 is not a valid tile rank");
    }
}
