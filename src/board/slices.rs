//! Board ↔ slice transform.
//!
//! Given the board
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! the slices per direction are
//!
//! - Left:  `[[1, 2, 3], [4, 5, 6], [7, 8, 9]]`
//! - Right: `[[3, 2, 1], [6, 5, 4], [9, 8, 7]]`
//! - Up:    `[[1, 4, 7], [2, 5, 8], [3, 6, 9]]`
//! - Down:  `[[7, 4, 1], [8, 5, 2], [9, 6, 3]]`
//!
//! Motion is always toward index 0, so one reduction rule serves every
//! direction.

use super::{check_dimensions, Board, Direction};
use crate::core::error::{GameError, Result};
use crate::core::tile::{validate_tile, Tile, EMPTY};

impl Board {
    /// Cut the board into slices oriented for `direction`.
    #[must_use]
    pub fn to_slices(&self, direction: Direction) -> Vec<Vec<Tile>> {
        let (count, len) = slice_shape(self.width, self.height, direction);
        (0..count)
            .map(|slice| {
                (0..len)
                    .map(|offset| self.cells[cell_index(self.width, len, slice, offset, direction)])
                    .collect()
            })
            .collect()
    }

    /// Reassemble slices produced for `direction` into a board.
    ///
    /// Exact inverse of [`Board::to_slices`].
    pub fn from_slices(slices: &[Vec<Tile>], direction: Direction, width: usize, height: usize) -> Result<Self> {
        let cells_len = check_dimensions(width, height)?;
        let (count, len) = slice_shape(width, height, direction);
        if slices.len() != count || slices.iter().any(|slice| slice.len() != len) {
            return Err(GameError::InvalidArgument(format!(
                "expected {count} slices of length {len} for a {width}x{height} board moving {direction}"
            )));
        }

        let mut cells = vec![EMPTY; cells_len];
        for (slice_index, slice) in slices.iter().enumerate() {
            for (offset, &tile) in slice.iter().enumerate() {
                cells[cell_index(width, len, slice_index, offset, direction)] = validate_tile(tile)?;
            }
        }
        Board::from_cells(width, height, cells)
    }
}

/// Number of slices and length of each.
fn slice_shape(width: usize, height: usize, direction: Direction) -> (usize, usize) {
    if direction.is_horizontal() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Row-major index of `offset` within slice `slice` of length `len`.
fn cell_index(width: usize, len: usize, slice: usize, offset: usize, direction: Direction) -> usize {
    let along = if direction.is_reversed() { len - 1 - offset } else { offset };
    if direction.is_horizontal() {
        along + slice * width
    } else {
        slice + along * width
    }
}
