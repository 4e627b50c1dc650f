//! Injectable randomness
//!
//! The only nondeterministic block is random-direction; its choice flows
//! through this seam so tests can replay fixed sequences and hosts can
//! seed runs reproducibly.

use uuid::Uuid;

/// Source of random words for block decisions
pub trait RandomSource {
    /// Returns the next random word
    fn next_u32(&mut self) -> u32;

    /// Picks a uniform index into a non-empty slice of `len` items
    ///
    /// The modulo bias is negligible for the tiny candidate sets (at most
    /// four directions) this machine draws from.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u32() as usize) % len
    }
}

/// Seeded xorshift64* generator
///
/// Deterministic: the same seed yields the same sequence. Statistical
/// quality is ample for picking among four directions.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Creates a generator from an explicit seed
    ///
    /// A zero seed is remapped to a fixed non-zero constant; xorshift
    /// state must never be zero.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Creates a generator seeded from fresh entropy
    pub fn from_entropy() -> Self {
        Self::from_seed(Uuid::new_v4().as_u128() as u64)
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }
}

/// Replays a fixed sequence of words, then repeats the last one
///
/// Test helper: lets a scenario force the random-direction block down a
/// known path.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source replaying the given words in order
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_u32(&mut self) -> u32 {
        let value = self
            .values
            .get(self.cursor)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0);
        if self.cursor < self.values.len() {
            self.cursor += 1;
        }
        value
    }
}
