use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from an evaluated population based
/// on their penalties; a lower penalty is always better.
///
/// # Examples
///
/// ```
/// use genassign::individual::Individual;
/// use genassign::rng::RandomNumberGenerator;
/// use genassign::selection::{ElitistSelection, SelectionStrategy};
///
/// let mut population = vec![
///     Individual::new(vec![0, 0]),
///     Individual::new(vec![0, 1]),
///     Individual::new(vec![1, 1]),
/// ];
/// for (individual, penalty) in population.iter_mut().zip([50.0, 0.0, 100.0]) {
///     individual.set_fitness(penalty);
/// }
///
/// let mut rng = RandomNumberGenerator::new();
/// let selected = ElitistSelection::new().select(&population, 2, &mut rng).unwrap();
///
/// assert_eq!(selected[0].genes(), &[0, 1]);
/// assert_eq!(selected[1].genes(), &[0, 0]);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - An individual has not been evaluated since its genes last changed
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

/// Reads the fitness of every individual, failing on the first stale one.
pub(crate) fn collect_fitness(population: &[Individual]) -> Result<Vec<f64>> {
    population
        .iter()
        .enumerate()
        .map(|(idx, individual)| individual.require_fitness(idx))
        .collect()
}
