//! Deterministic Park-Miller ("minimal standard") random number generator.
//!
//! All noise in the backend flows through this module. The generator is
//! seeded with a fixed constant so that every run with the same configuration
//! produces the same samples.

use rand::{Error, RngCore, SeedableRng};

/// Park-Miller modulus, 2^31 - 1.
pub const MODULUS: u32 = 0x7FFF_FFFF;

/// Park-Miller multiplier.
pub const MULTIPLIER: u32 = 16_807;

/// Seed used by the noise generators.
pub const DEFAULT_SEED: u32 = 1;

/// Lehmer generator over the prime field 2^31 - 1.
///
/// Every output lies in `[1, MODULUS - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lehmer31 {
    state: u32,
}

impl Lehmer31 {
    /// Creates a generator. Seeds outside `[1, MODULUS - 1]` are folded into it.
    pub fn new(seed: u32) -> Self {
        let state = seed % MODULUS;
        Self {
            state: if state == 0 { DEFAULT_SEED } else { state },
        }
    }

    /// Advances the generator and returns the new 31-bit state.
    pub fn next_raw(&mut self) -> u32 {
        // Carta's method: 16807 * seed split into 16-bit halves, no 64-bit divide.
        let mut lo = MULTIPLIER * (self.state & 0xFFFF);
        let hi = MULTIPLIER * (self.state >> 16);
        lo += (hi & 0x7FFF) << 16;
        lo += hi >> 15;
        if lo > MODULUS {
            lo -= MODULUS;
        }
        self.state = lo;
        lo
    }
}

impl Default for Lehmer31 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lehmer31 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_raw() as u64;
        let lo = self.next_raw() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lehmer31 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Creates the generator used by the noise waveforms.
pub fn create_rng() -> Lehmer31 {
    Lehmer31::default()
}
