//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for turning
//! a mating pool into the offspring of the next generation.
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, individual::Individual,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// The `BreedStrategy` trait defines the interface for strategies responsible for breeding
/// new individuals based on a mating pool and evolution options.
pub trait BreedStrategy: Debug + Send + Sync {
    /// Breeds offspring from the mating pool.
    ///
    /// ## Parameters
    ///
    /// - `mating_pool`: The selected parents. They are consumed and varied in place.
    /// - `num_alleles`: The number of resources; every gene stays within `0..num_alleles`.
    /// - `evol_options`: The evolution options holding the crossover and mutation probabilities.
    /// - `rng`: The random number generator driving every variation decision.
    ///
    /// ## Returns
    ///
    /// The offspring, as many as there were parents. Offspring whose genes
    /// changed come back unevaluated.
    ///
    /// ## Errors
    ///
    /// This method fails if the mating pool is empty.
    fn breed(
        &self,
        mating_pool: Vec<Individual>,
        num_alleles: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use ordinary::OrdinaryStrategy;
