//! # Crossover
//!
//! ## Example
//!
//! ```rust
//! use genassign::individual::Individual;
//! use genassign::operators::TwoPointCrossover;
//!
//! let mut first = Individual::new(vec![0, 0, 0, 0, 0]);
//! let mut second = Individual::new(vec![1, 1, 1, 1, 1]);
//!
//! TwoPointCrossover::exchange_segment(&mut first, &mut second, 1, 3);
//!
//! assert_eq!(first.genes(), &[0, 1, 1, 0, 0]);
//! assert_eq!(second.genes(), &[1, 0, 0, 1, 1]);
//! ```

use std::fmt::Debug;

use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Recombines two individuals in place.
pub trait CrossoverOperator: Debug + Send + Sync {
    /// Mixes the genes of `first` and `second`. Individuals whose genes change
    /// lose their cached fitness.
    fn crossover(
        &self,
        first: &mut Individual,
        second: &mut Individual,
        rng: &mut RandomNumberGenerator,
    );
}

/// Two-point crossover: the genes between two random cut points are swapped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Draws two distinct cut points `0 <= p1 < p2 <= len`, uniformly over all
    /// such pairs. Returns `None` for an empty vector.
    pub fn cut_points(len: usize, rng: &mut RandomNumberGenerator) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }

        let p1 = rng.gen_index_inclusive(len);
        let mut p2 = rng.gen_index(len);
        if p2 >= p1 {
            p2 += 1;
        }

        Some((p1.min(p2), p1.max(p2)))
    }

    /// Swaps genes `p1..p2` between the two individuals.
    ///
    /// Afterwards `first[k]` holds the old `second[k]` for `p1 <= k < p2` and is
    /// untouched elsewhere, and symmetrically for `second`.
    pub fn exchange_segment(first: &mut Individual, second: &mut Individual, p1: usize, p2: usize) {
        debug_assert_eq!(first.len(), second.len());

        let end = p2.min(first.len()).min(second.len());
        for idx in p1..end {
            let from_first = first.gene(idx);
            let from_second = second.gene(idx);
            first.set_gene(idx, from_second);
            second.set_gene(idx, from_first);
        }
    }
}

impl CrossoverOperator for TwoPointCrossover {
    fn crossover(
        &self,
        first: &mut Individual,
        second: &mut Individual,
        rng: &mut RandomNumberGenerator,
    ) {
        let len = first.len().min(second.len());
        if let Some((p1, p2)) = Self::cut_points(len, rng) {
            Self::exchange_segment(first, second, p1, p2);
        }
    }
}
