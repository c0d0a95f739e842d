//! Upcoming-tile queue and its replenishment.
//!
//! ## Batches
//!
//! When the queue runs dry a new batch is dealt: `dimension` copies each of
//! 1, 2 and 3 (where `dimension` is the shorter board side), plus one
//! deferred special entry half of the time, shuffled.
//!
//! ## Determinism
//!
//! The shuffle is `java.util.Collections.shuffle` driven by a temporary
//! generator seeded from the game generator. Afterwards the game generator
//! is stepped once per swap the shuffle made, so the global draw count stays
//! the same as if the shuffle had drawn from it directly.
//!
//! ```
//! use threes_engine::core::Prng;
//! use threes_engine::queue::NextQueue;
//!
//! let refill = NextQueue::new().replenish(Prng::seeded(1), 4).unwrap();
//! assert!(refill.queue.len() == 12 || refill.queue.len() == 13);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::{GameError, Result};
use crate::core::rng::Prng;
use crate::core::tile::{validate_tile, QueueEntry, EMPTY};

/// Ordered pending insertions. Front is consumed first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQueue")]
pub struct NextQueue {
    entries: Vector<QueueEntry>,
}

/// Result of [`NextQueue::replenish`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replenished {
    pub queue: NextQueue,
    pub rng: Prng,
}

/// Result of [`NextQueue::pop_front`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popped {
    pub entry: QueueEntry,
    pub rest: NextQueue,
}

impl NextQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue holding `entries` in order, front first.
    ///
    /// Fails with `InvalidTile` if a concrete entry is empty or not a
    /// recognized rank.
    pub fn from_entries(entries: impl IntoIterator<Item = QueueEntry>) -> Result<Self> {
        let entries = entries
            .into_iter()
            .map(check_entry)
            .collect::<Result<Vector<QueueEntry>>>()?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry that will be consumed next.
    #[must_use]
    pub fn front(&self) -> Option<QueueEntry> {
        self.entries.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = QueueEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Split off the front entry. `None` when empty.
    #[must_use]
    pub fn pop_front(&self) -> Option<Popped> {
        let mut rest = self.entries.clone();
        let entry = rest.pop_front()?;
        Some(Popped {
            entry,
            rest: Self { entries: rest },
        })
    }

    /// Deal a new batch if the queue is empty; otherwise hand it back as is.
    pub fn replenish(&self, rng: Prng, dimension: usize) -> Result<Replenished> {
        if !self.is_empty() {
            return Ok(Replenished { queue: self.clone(), rng });
        }

        let mut batch: Vec<QueueEntry> = (0..dimension)
            .flat_map(|_| [1, 2, 3].map(QueueEntry::Tile))
            .collect();

        let coin = rng.next_int_bounded(2)?;
        if coin.value == 1 {
            batch.push(QueueEntry::Special);
        }

        shuffle(&mut batch, Prng::seeded(coin.next.internal_state()))?;

        let rng = (1..batch.len()).fold(coin.next, |rng, _| rng.advance());
        trace!(len = batch.len(), special = coin.value == 1, "dealt next-tile batch");

        Ok(Replenished {
            queue: Self { entries: batch.into_iter().collect() },
            rng,
        })
    }
}

/// Unchecked wire shape; deserialized queues go through `from_entries`.
#[derive(Deserialize)]
struct RawQueue {
    entries: Vec<QueueEntry>,
}

impl TryFrom<RawQueue> for NextQueue {
    type Error = GameError;

    fn try_from(raw: RawQueue) -> Result<Self> {
        NextQueue::from_entries(raw.entries)
    }
}

fn check_entry(entry: QueueEntry) -> Result<QueueEntry> {
    match entry {
        QueueEntry::Tile(EMPTY) => Err(GameError::InvalidTile(EMPTY)),
        QueueEntry::Tile(tile) => validate_tile(tile).map(QueueEntry::Tile),
        QueueEntry::Special => Ok(entry),
    }
}

/// `java.util.Collections.shuffle` over a random-access list.
fn shuffle<T>(items: &mut [T], mut rng: Prng) -> Result<()> {
    for i in (2..=items.len()).rev() {
        let draw = rng.next_index(i)?;
        items.swap(i - 1, draw.value);
        rng = draw.next;
    }
    Ok(())
}
