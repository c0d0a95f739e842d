//! Deferred special tiles.
//!
//! A special entry in the queue becomes a high tile chosen from the board's
//! current maximum `M`: up to three candidates `M/8, M/16, M/32`, never
//! below 6. With 48 on the board the only candidate is 6; with 384 it is
//! one of 48, 24, or 12.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::error::Result;
use crate::core::rng::{Draw, Prng};
use crate::core::tile::Tile;

/// Candidate list for a special tile. Never longer than three.
pub type SpecialCandidates = SmallVec<[Tile; 3]>;

/// Candidates for a special tile given the board maximum, highest first.
#[must_use]
pub fn special_candidates(max_tile: Tile) -> SpecialCandidates {
    let mut candidates = SpecialCandidates::new();
    let mut max = max_tile;
    while candidates.len() < 3 && max > 24 {
        candidates.push(max / 8);
        max /= 2;
    }
    candidates
}

/// Pick one of the candidates for the next tile.
///
/// `None` when there are no candidates. A single candidate is returned
/// without touching the generator; several cost one draw.
pub fn choose_candidate(candidates: &[Tile], rng: Prng) -> Result<Option<Draw<Tile>>> {
    match candidates {
        [] => Ok(None),
        [only] => Ok(Some(Draw { value: *only, next: rng })),
        _ => {
            let draw = rng.next_index(candidates.len())?;
            trace!(?candidates, chosen = candidates[draw.value], "candidate drawn");
            Ok(Some(draw.map(|index| candidates[index])))
        }
    }
}
