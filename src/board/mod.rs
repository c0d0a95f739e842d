//! Board grid, move directions, and the slice transform.
//!
//! ## Layout
//!
//! Cells are stored row-major: the tile at `(x, y)` lives at index
//! `x + y * width`. The board is immutable; edits return a new board that
//! shares structure with the old one through `im::Vector`.
//!
//! ## Slices
//!
//! Pushing tiles in any direction is the same operation on a different
//! view of the grid. `Board::to_slices` cuts the board into one 1-D slice
//! per row or column, oriented so index 0 is the edge the tiles travel
//! toward, and `Board::from_slices` puts them back:
//!
//! ```
//! use threes_engine::board::{Board, Direction};
//!
//! let board = Board::from_cells(3, 3, [1, 2, 3, 3, 2, 1, 0, 0, 6]).unwrap();
//!
//! let slices = board.to_slices(Direction::Down);
//! assert_eq!(slices[0], vec![0, 3, 1]);
//!
//! let rebuilt = Board::from_slices(&slices, Direction::Down, 3, 3).unwrap();
//! assert_eq!(rebuilt, board);
//! ```

mod slices;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::tile::{validate_tile, Tile, EMPTY};

/// Direction tiles are pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Do slices run along rows?
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Is the leading edge at the high end of the row/column?
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Fixed-size grid of tile ranks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vector<Tile>,
}

impl Board {
    /// Create an empty board.
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        let count = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: std::iter::repeat(EMPTY).take(count).collect(),
        })
    }

    /// Create a board from row-major cells.
    ///
    /// Fails with `InvalidArgument` if the cell count is not
    /// `width * height`, and `InvalidTile` on an unrecognized rank.
    pub fn from_cells(width: usize, height: usize, cells: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let count = check_dimensions(width, height)?;
        let cells = cells
            .into_iter()
            .map(validate_tile)
            .collect::<Result<Vector<Tile>>>()?;
        if cells.len() != count {
            return Err(GameError::InvalidArgument(format!(
                "{width}x{height} board needs {count} cells, got {}",
                cells.len()
            )));
        }
        Ok(Self { width, height, cells })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &Vector<Tile> {
        &self.cells
    }

    /// Map `(x, y)` to a row-major index.
    pub fn coordinate(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(GameError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    /// Tile at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Tile> {
        let index = self.coordinate(x, y)?;
        Ok(self.cells[index])
    }

    /// Copy of this board with one cell replaced.
    pub fn with_cell(&self, index: usize, tile: Tile) -> Result<Self> {
        if index >= self.cells.len() {
            return Err(GameError::InvalidArgument(format!(
                "cell index {index} out of range for {} cells",
                self.cells.len()
            )));
        }
        let tile = validate_tile(tile)?;
        Ok(Self {
            width: self.width,
            height: self.height,
            cells: self.cells.update(index, tile),
        })
    }

    /// Highest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == EMPTY).count()
    }

    /// Indices of empty cells in row-major order.
    #[must_use]
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile == EMPTY)
            .map(|(index, _)| index)
            .collect()
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != EMPTY)
    }
}

/// Unchecked wire shape; deserialized boards go through `from_cells`.
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::from_cells(raw.width, raw.height, raw.cells)
    }
}

/// Cell count of a `width` x `height` board.
///
/// Fails with `InvalidArgument` if either side is zero or the count
/// overflows `usize`.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidArgument(format!(
            "board dimensions must be positive, got {width}x{height}"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        GameError::InvalidArgument(format!("{width}x{height} board has too many cells"))
    })
}
