//! Seeded RNG wrapper for reproducible graph generation.
//!
//! Random edge generation draws from a `GraphRng` rather than a thread-local
//! generator, so the same seed always produces the same topology.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG used by edge-generation strategies.
pub struct GraphRng(SmallRng);

impl GraphRng {
    pub fn new(seed: u64) -> Self {
        GraphRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniformly pick an index in `0..len`.  Returns `None` if `len == 0`.
    #[inline]
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
