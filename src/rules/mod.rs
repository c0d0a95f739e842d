//! Pure tile rules: row reduction, special-tile resolution, scoring.
//!
//! Nothing here knows about queues or game states; the move engine
//! composes these into full moves.

pub mod reduce;
pub mod score;
pub mod special;

pub use reduce::{can_combine, reduce};
pub use score::{board_score, score_tile};
pub use special::{choose_candidate, special_candidates, SpecialCandidates};
