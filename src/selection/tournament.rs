use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collect_fitness, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` individuals uniformly at random,
/// with replacement, and keeps the one with the lowest penalty. This is
/// repeated once per individual to select, so the same individual can be
/// selected many times.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use genassign::individual::Individual;
/// use genassign::rng::RandomNumberGenerator;
/// use genassign::selection::{SelectionStrategy, TournamentSelection};
///
/// let mut population: Vec<Individual> = (0..5).map(|g| Individual::new(vec![g])).collect();
/// for (idx, individual) in population.iter_mut().enumerate() {
///     individual.set_fitness(idx as f64 * 10.0);
/// }
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let selection = TournamentSelection::new(3).unwrap();
/// let mating_pool = selection.select(&population, 5, &mut rng).unwrap();
///
/// assert_eq!(mating_pool.len(), 5);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// The first participant drawn wins ties.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.gen_index(fitness.len());

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(fitness.len());
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let fitness = collect_fitness(population)?;

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(&fitness, rng)].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(penalties: &[f64]) -> Vec<Individual> {
        penalties
            .iter()
            .enumerate()
            .map(|(idx, &penalty)| {
                let mut individual = Individual::new(vec![idx]);
                individual.set_fitness(penalty);
                individual
            })
            .collect()
    }

    #[test]
    fn test_tournament_selection() {
        let population = population(&[50.0, 80.0, 30.0, 90.0, 10.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, 3, &mut rng).unwrap();

        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_selection_with_replacement() {
        let population = population(&[5.0, 8.0, 3.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = TournamentSelection::default()
            .select(&population, 10, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|individual| individual.is_evaluated()));
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let population = population(&[0.0, 100.0]);
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selected = TournamentSelection::new(1)
            .unwrap()
            .select(&population, 1000, &mut rng)
            .unwrap();
        let worst_picked = selected.iter().filter(|i| i.gene(0) == 1).count();

        // The worse individual still wins about half of the one-person tournaments
        assert!(worst_picked > 400 && worst_picked < 600);
    }

    #[test]
    fn test_larger_tournaments_favor_lower_penalty() {
        let population = population(&[40.0, 30.0, 20.0, 10.0, 0.0]);
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selected = TournamentSelection::new(10)
            .unwrap()
            .select(&population, 200, &mut rng)
            .unwrap();
        let best_picked = selected.iter().filter(|i| i.gene(0) == 4).count();

        // The best is missed only if none of ten draws hit it: (4/5)^10 ~ 0.11
        assert!(best_picked > 150);
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = TournamentSelection::default().select(&[], 3, &mut rng);

        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }

    #[test]
    fn test_tournament_selection_stale_fitness() {
        let mut population = population(&[1.0, 2.0]);
        population[1].set_gene(0, 9);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = TournamentSelection::default().select(&population, 1, &mut rng);

        assert_eq!(result, Err(GeneticError::StaleFitness(1)));
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0).is_err());
    }

    #[test]
    fn test_run_tournament_single_candidate() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let selection = TournamentSelection::new(3).unwrap();

        assert_eq!(selection.run_tournament(&[7.0], &mut rng), 0);
    }
}
