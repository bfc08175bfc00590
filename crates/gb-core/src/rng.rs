//! RNG wrapper for grid synthesis.
//!
//! A run with `Some(seed)` always produces the same sequence of draws, so a
//! generated grid can be reproduced exactly.  Without a seed the generator is
//! initialised from OS entropy.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Single-threaded RNG used by the grid generator.
pub struct GridRng(SmallRng);

impl GridRng {
    /// Deterministic RNG for a fixed seed.
    pub fn new(seed: u64) -> Self {
        GridRng(SmallRng::seed_from_u64(seed))
    }

    /// Entropy-seeded RNG.
    pub fn from_entropy() -> Self {
        GridRng(SmallRng::from_entropy())
    }

    /// Build from an optional seed: `Some` is deterministic, `None` uses entropy.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => GridRng::new(s),
            None    => GridRng::from_entropy(),
        }
    }

    /// Choose a uniformly random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
