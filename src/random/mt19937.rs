//! 32-bit Mersenne Twister PRNG (MT19937).
//!
//! Implements the reference MT19937 generator with both the single-word
//! (`init_genrand`) and array (`init_by_array`) seeding routines, producing
//! the same stream as the legacy `RandomState` of scientific Python for a
//! given integer seed.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::RandomStateError;

/// Number of 32-bit words in the state vector.
pub const STATE_LEN: usize = 624;

const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Base seed used by the array initializer.
const ARRAY_BASE_SEED: u32 = 19_650_218;

/// 32-bit Mersenne Twister PRNG with period 2^19937-1.
///
/// For a fixed seed given to [`with_seed`](Self::with_seed) or
/// [`from_key`](Self::from_key) the output sequence is fully deterministic.
#[derive(Clone)]
pub struct Mt19937 {
    key: [u32; STATE_LEN],
    pos: usize,
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("pos", &self.pos).finish()
    }
}

impl Mt19937 {
    /// Creates a generator seeded with a single 32-bit word.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_state::random::mt19937::Mt19937;
    ///
    /// let mut mt = Mt19937::with_seed(5489);
    /// assert_eq!(mt.next_u32(), 3499211612);
    /// ```
    pub fn with_seed(seed: u32) -> Self {
        let mut key = [0u32; STATE_LEN];
        key[0] = seed;
        for i in 1..STATE_LEN {
            let prev = key[i - 1];
            key[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Mt19937 {
            key,
            pos: STATE_LEN,
        }
    }

    /// Creates a generator seeded with an array of 32-bit words.
    ///
    /// # Errors
    /// Returns [`RandomStateError::EmptySeedKey`] if `init_key` is empty.
    pub fn from_key(init_key: &[u32]) -> Result<Self, RandomStateError> {
        if init_key.is_empty() {
            return Err(RandomStateError::EmptySeedKey);
        }
        let mut mt = Self::with_seed(ARRAY_BASE_SEED);
        let key = &mut mt.key;
        let mut i = 1usize;
        let mut j = 0usize;

        for _ in 0..STATE_LEN.max(init_key.len()) {
            let prev = key[i - 1];
            key[i] = (key[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(init_key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_LEN {
                key[0] = key[STATE_LEN - 1];
                i = 1;
            }
            if j >= init_key.len() {
                j = 0;
            }
        }
        for _ in 0..STATE_LEN - 1 {
            let prev = key[i - 1];
            key[i] = (key[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_LEN {
                key[0] = key[STATE_LEN - 1];
                i = 1;
            }
        }
        // MSB is 1, assuring a non-zero initial state
        key[0] = UPPER_MASK;
        mt.pos = STATE_LEN;
        Ok(mt)
    }

    /// Creates a generator from a full state vector of OS entropy.
    ///
    /// # Errors
    /// Returns [`RandomStateError::Entropy`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RandomStateError> {
        let mut bytes = [0u8; STATE_LEN * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| RandomStateError::Entropy(e.to_string()))?;
        let words: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::from_key(&words)
    }

    /// Rebuilds a generator from a raw state vector and read position.
    ///
    /// `pos` is clamped to [`STATE_LEN`], which forces a regeneration on the
    /// next draw.
    pub fn from_state(key: [u32; STATE_LEN], pos: usize) -> Self {
        Mt19937 {
            key,
            pos: pos.min(STATE_LEN),
        }
    }

    /// Returns a copy of the state vector and the current read position.
    pub fn state(&self) -> ([u32; STATE_LEN], usize) {
        (self.key, self.pos)
    }

    /// Regenerates the whole state block.
    fn twist(&mut self) {
        for i in 0..STATE_LEN {
            let y = (self.key[i] & UPPER_MASK) | (self.key[(i + 1) % STATE_LEN] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.key[i] = self.key[(i + M) % STATE_LEN] ^ (y >> 1) ^ mag;
        }
        self.pos = 0;
    }

    /// Generates the next tempered 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        if self.pos >= STATE_LEN {
            self.twist();
        }
        let mut y = self.key[self.pos];
        self.pos += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }

    /// Generates a double in `[0, 1)` with 53-bit resolution.
    ///
    /// Consumes two 32-bit outputs: `((a >> 5) * 2^26 + (b >> 6)) / 2^53`.
    pub fn next_double(&mut self) -> f64 {
        let a = self.next_u32() >> 5;
        let b = self.next_u32() >> 6;
        (a as f64 * 67_108_864.0 + b as f64) / 9_007_199_254_740_992.0
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = Mt19937::next_u32(self) as u64;
        let lo = Mt19937::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Mt19937::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
