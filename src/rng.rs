//! # RandomNumberGenerator
//!
//! Every stochastic step of the search (initial genes, tournament draws,
//! crossover cuts, mutation gates and replacement alleles) pulls from a
//! `RandomNumberGenerator` handed in by the caller. Seeding it makes a whole
//! run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genassign::rng::RandomNumberGenerator;
//!
//! let mut first = RandomNumberGenerator::from_seed(7);
//! let mut second = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(first.gen_index(100), second.gen_index(100));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws an index uniformly from `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    /// Returns `true` with the given probability.
    ///
    /// `probability` must lie in `[0, 1]`; option validation guarantees this
    /// for every probability the search uses.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..1000 {
            assert!(rng.gen_index(5) < 5);
            assert!(rng.gen_index_inclusive(5) <= 5);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!((0..100).all(|_| rng.chance(1.0)));
        assert!((0..100).all(|_| !rng.chance(0.0)));
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1: Vec<usize> = (0..5).map(|_| rng1.gen_index(1000)).collect();
        let nums2: Vec<usize> = (0..5).map(|_| rng2.gen_index(1000)).collect();

        assert_eq!(nums1, nums2);
    }
}
