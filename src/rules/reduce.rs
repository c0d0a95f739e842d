//! Single-merge row reduction.

use crate::core::tile::{Tile, EMPTY, MAX_TILE};

/// Can a tile of rank `from` move onto a neighbour of rank `to`?
///
/// - An empty source never moves.
/// - Anything moves into an empty cell.
/// - A one and a two merge into a three.
/// - Equal ranks of three or more double, up to [`MAX_TILE`].
#[must_use]
pub fn can_combine(from: Tile, to: Tile) -> bool {
    if from == EMPTY {
        return false;
    }
    if to == EMPTY {
        return true;
    }
    if from + to == 3 {
        return true;
    }
    from == to && from >= 3 && from < MAX_TILE
}

/// Push one slice toward index 0.
///
/// Finds the first adjacent pair where the trailing tile can combine into
/// the leading one, merges it, shifts everything behind it forward, and
/// fills the vacated trailing cell with `0`. At most one merge happens; a
/// slice with no such pair comes back unchanged.
#[must_use]
pub fn reduce(slice: &[Tile]) -> Vec<Tile> {
    let merge_at = slice
        .windows(2)
        .position(|pair| can_combine(pair[1], pair[0]));

    let Some(i) = merge_at else {
        return slice.to_vec();
    };

    let mut reduced = Vec::with_capacity(slice.len());
    reduced.extend_from_slice(&slice[..i]);
    reduced.push(slice[i] + slice[i + 1]);
    reduced.extend_from_slice(&slice[i + 2..]);
    reduced.push(EMPTY);
    reduced
}
