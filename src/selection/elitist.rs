use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collect_fitness, SelectionStrategy};

/// A selection strategy that selects the best individuals based on penalty.
///
/// This strategy orders individuals by ascending penalty and selects the top N.
/// The sort is stable, so individuals with equal penalties keep their
/// population order. No individual is selected twice; asking for more than
/// the population holds returns the whole population, best first.
///
/// The evolution loop uses it to carry elites into the next generation.
///
/// # Examples
///
/// ```
/// use genassign::individual::Individual;
/// use genassign::rng::RandomNumberGenerator;
/// use genassign::selection::{ElitistSelection, SelectionStrategy};
///
/// let mut population: Vec<Individual> = (0..3).map(|g| Individual::new(vec![g])).collect();
/// for (individual, penalty) in population.iter_mut().zip([0.5, 0.8, 0.3]) {
///     individual.set_fitness(penalty);
/// }
///
/// let mut rng = RandomNumberGenerator::new();
/// let selected = ElitistSelection::new().select(&population, 5, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 3);
/// assert_eq!(selected[0].gene(0), 2);
/// assert_eq!(selected[1].gene(0), 0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let fitness = collect_fitness(population)?;

        let mut indices: Vec<usize> = (0..population.len()).collect();
        indices.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

        Ok(indices
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
