//! Seeded random source with deterministic child derivation
//!
//! Every generation run owns its own source. Partitioned runs derive one
//! child per partition from the root seed, so a partition's randomness
//! depends only on the root seed and its index.
//!
//! Output is backed by `rand`'s `StdRng`, so a seed reproduces the same maze
//! only within the pinned `rand` release.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Signed seed accepted from callers
pub type Seed = i64;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: Seed,
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// Seed this source was created from
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Uniform integer in `[low, high)`
    ///
    /// An empty range yields `low`.
    pub fn next(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..high)
    }

    /// Uniform index in `[0, len)`, or 0 when `len` is 0
    ///
    /// Samples through `i64` so results match on 32- and 64-bit targets.
    pub fn index(&mut self, len: usize) -> usize {
        let high = i64::try_from(len).unwrap_or(i64::MAX);
        self.next(0, high) as usize
    }

    /// Independent source derived from this source's seed and `index`
    ///
    /// Depends only on the seed, never on how much of this source has been
    /// consumed.
    pub fn derive_child(&self, index: u64) -> Self {
        Self::new(mix_seed(self.seed, index) as Seed)
    }
}

/// Fresh 32-bit signed seed drawn from OS entropy
///
/// For the command-line layer; the engine always takes explicit seeds.
pub fn entropy_seed() -> Seed {
    Seed::from(rand::random::<i32>())
}

// SplitMix64 finaliser over the seed and a gamma-scaled stream index
const fn mix_seed(seed: Seed, index: u64) -> u64 {
    let mut z = (seed as u64) ^ index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
