//! Immutable, seed-threaded pseudo-random source.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Immutable**: Every draw returns the value *and* the next generator
//! - **Compatible**: Bit-for-bit the 48-bit LCG of `java.util.Random`, so
//!   fixtures keyed to a seed stay valid across implementations
//! - **Serializable**: The whole generator is one 48-bit integer
//!
//! ## Threading the state
//!
//! ```
//! use threes_engine::core::Prng;
//!
//! let rng = Prng::seeded(42);
//!
//! let first = rng.next_int();
//! let second = first.next.next_int();
//! assert_eq!(first.value, -1170105035);
//! assert_eq!(second.value, 234785527);
//!
//! // Drawing from the old state again repeats the old value.
//! assert_eq!(rng.next_int().value, first.value);
//! ```
//!
//! Reusing a state is always a caller bug: the generator cannot detect it.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::{GameError, Result};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 1.0 / 2^53
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// L'Ecuyer, "Tables of Linear Congruential Generators of Different Sizes
/// and Good Lattice Structure", 1999.
const UNIQUIFIER_MULTIPLIER: u64 = 181_783_497_276_652_981;

/// Process-wide entropy mixer for [`Prng::fresh`].
///
/// Starts at a fixed constant when the process loads and is only ever
/// advanced by compare-and-swap, so concurrent unseeded constructions each
/// observe a distinct value. Never reset.
static SEED_UNIQUIFIER: AtomicU64 = AtomicU64::new(8_682_522_807_148_012);

/// Result of a single draw: the value and the generator to use next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Draw<T> {
    /// The drawn value.
    pub value: T,
    /// Generator state after the draw. Thread this into the next call.
    pub next: Prng,
}

impl<T> Draw<T> {
    /// Transform the drawn value, keeping the generator.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Draw<U> {
        Draw {
            value: f(self.value),
            next: self.next,
        }
    }
}

/// Deterministic pseudo-random generator.
///
/// A value type holding a 48-bit linear-congruential state. Nothing here
/// mutates: each operation hands back a [`Draw`] carrying the successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prng {
    state: u64,
}

impl Prng {
    /// Create a generator from a caller-chosen seed.
    ///
    /// The seed is scrambled first, exactly as `new java.util.Random(seed)`.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Rebuild a generator from a previously observed [`internal_state`].
    ///
    /// No scrambling is applied.
    ///
    /// [`internal_state`]: Prng::internal_state
    #[must_use]
    pub const fn from_internal_state(state: u64) -> Self {
        Self { state: state & MASK }
    }

    /// Create an unseeded generator.
    ///
    /// Mixes the process-wide seed uniquifier with the wall clock. Not
    /// reproducible; use [`Prng::seeded`] whenever a sequence must replay.
    #[must_use]
    pub fn fresh() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::from_internal_state(next_uniquifier() ^ nanos)
    }

    /// The raw 48-bit state, for checkpointing.
    #[must_use]
    pub const fn internal_state(self) -> u64 {
        self.state
    }

    /// Step the generator once, discarding the value.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self {
            state: self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK,
        }
    }

    /// Draw the top `bits` bits of the next state.
    ///
    /// `bits` is clamped to `1..=32`.
    #[must_use]
    pub fn draw(self, bits: u32) -> Draw<u32> {
        let bits = bits.clamp(1, 32);
        let next = self.advance();
        Draw {
            value: (next.state >> (48 - bits)) as u32,
            next,
        }
    }

    /// Uniform `i32` over the whole range.
    #[must_use]
    pub fn next_int(self) -> Draw<i32> {
        self.draw(32).map(|v| v as i32)
    }

    /// Uniform `i32` in `0..bound`.
    ///
    /// Powers of two take the high bits of one draw; other bounds
    /// rejection-sample so every residue is equally likely.
    pub fn next_int_bounded(self, bound: i32) -> Result<Draw<i32>> {
        if bound <= 0 {
            return Err(GameError::InvalidArgument(format!(
                "bound must be positive, got {bound}"
            )));
        }

        let mut draw = self.draw(31).map(|v| v as i32);
        let m = bound - 1;
        if bound & m == 0 {
            let value = ((i64::from(bound) * i64::from(draw.value)) >> 31) as i32;
            return Ok(Draw { value, next: draw.next });
        }

        loop {
            let u = draw.value;
            let r = u % bound;
            // Overflow past i32::MAX marks the biased tail of the range.
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return Ok(Draw { value: r, next: draw.next });
            }
            draw = draw.next.draw(31).map(|v| v as i32);
        }
    }

    /// Uniform index into a collection of `len` items.
    pub fn next_index(self, len: usize) -> Result<Draw<usize>> {
        let bound = i32::try_from(len).map_err(|_| {
            GameError::InvalidArgument(format!("index range {len} exceeds i32::MAX"))
        })?;
        Ok(self.next_int_bounded(bound)?.map(|v| v as usize))
    }

    /// Uniform `i64`, composed from two 32-bit draws.
    #[must_use]
    pub fn next_long(self) -> Draw<i64> {
        let high = self.draw(32);
        let low = high.next.draw(32);
        let value = (i64::from(high.value as i32) << 32).wrapping_add(i64::from(low.value as i32));
        Draw { value, next: low.next }
    }

    /// Fair coin.
    #[must_use]
    pub fn next_bool(self) -> Draw<bool> {
        self.draw(1).map(|v| v != 0)
    }

    /// Uniform `f32` in `[0, 1)` with 24 bits of precision.
    #[must_use]
    pub fn next_float(self) -> Draw<f32> {
        self.draw(24).map(|v| v as f32 / (1u32 << 24) as f32)
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[must_use]
    pub fn next_double(self) -> Draw<f64> {
        let high = self.draw(26);
        let low = high.next.draw(27);
        let bits = (u64::from(high.value) << 27) + u64::from(low.value);
        Draw {
            value: bits as f64 * DOUBLE_UNIT,
            next: low.next,
        }
    }
}

fn next_uniquifier() -> u64 {
    let step = |current: u64| Some(current.wrapping_mul(UNIQUIFIER_MULTIPLIER));
    let previous = match SEED_UNIQUIFIER.fetch_update(Ordering::Relaxed, Ordering::Relaxed, step) {
        Ok(previous) | Err(previous) => previous,
    };
    previous.wrapping_mul(UNIQUIFIER_MULTIPLIER)
}
