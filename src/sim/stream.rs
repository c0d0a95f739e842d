//! `rand::RngCore` over the immutable generator.

use rand::RngCore;

use crate::core::rng::Prng;

/// Mutable cursor over a [`Prng`] so it can drive `rand` APIs.
///
/// Each call draws from the current state and moves the cursor forward.
#[derive(Clone, Debug)]
pub struct PrngStream {
    rng: Prng,
}

impl PrngStream {
    #[must_use]
    pub fn new(rng: Prng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Prng::seeded(seed))
    }

    /// Generator the next draw will use.
    #[must_use]
    pub fn prng(&self) -> Prng {
        self.rng
    }
}

impl RngCore for PrngStream {
    fn next_u32(&mut self) -> u32 {
        let draw = self.rng.draw(32);
        self.rng = draw.next;
        draw.value
    }

    fn next_u64(&mut self) -> u64 {
        let draw = self.rng.next_long();
        self.rng = draw.next;
        draw.value as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
