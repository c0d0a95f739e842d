//! Scoring.
//!
//! Ones and twos are worth nothing. A three is worth 3 and each doubling
//! of the tile triples its worth, so `3·2^k` scores `3^(k+1)`.

use crate::board::Board;
use crate::core::error::Result;
use crate::core::tile::{validate_tile, Tile};

/// Score a single tile.
///
/// Fails with `InvalidTile` if `tile` is not a recognized rank.
pub fn score_tile(tile: Tile) -> Result<u64> {
    validate_tile(tile).map(score_rank)
}

/// Sum of tile scores over the board.
///
/// A `Board` only ever holds valid ranks, so this cannot fail.
#[must_use]
pub fn board_score(board: &Board) -> u64 {
    board.cells().iter().copied().map(score_rank).sum()
}

/// Score of a rank already known to be valid.
fn score_rank(mut tile: Tile) -> u64 {
    if tile < 3 {
        return 0;
    }
    let mut score = 3;
    while tile > 3 {
        score *= 3;
        tile /= 2;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    #[test]
    fn test_score_tile() {
        assert_eq!(score_tile(0), Ok(0));
        assert_eq!(score_tile(1), Ok(0));
        assert_eq!(score_tile(2), Ok(0));
        assert_eq!(score_tile(3), Ok(3));
        assert_eq!(score_tile(6), Ok(9));
        assert_eq!(score_tile(12), Ok(27));
        assert_eq!(score_tile(3072), Ok(177_147));
        assert_eq!(score_tile(98_304), Ok(3u64.pow(16)));
    }

    #[test]
    fn test_score_tile_invalid() {
        assert_eq!(score_tile(4), Err(GameError::InvalidTile(4)));
        assert_eq!(score_tile(100), Err(GameError::InvalidTile(100)));
    }

    #[test]
    fn test_board_score() {
        let board = Board::from_cells(2, 2, [1, 3, 6, 0]).unwrap();
        assert_eq!(board_score(&board), 12);
        assert_eq!(board_score(&Board::empty(4, 4).unwrap()), 0);
    }
}
