//! # OrdinaryStrategy
//!
//! The `OrdinaryStrategy` struct represents the classic generational variation step:
//! consecutive members of the mating pool are paired up and recombined with the
//! crossover probability, then every offspring is mutated with the mutation probability.
use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    individual::Individual,
    operators::{CrossoverOperator, MutationOperator, TwoPointCrossover, UniformIntMutation},
    rng::RandomNumberGenerator,
};

/// # OrdinaryStrategy
///
/// Composes a crossover operator and a mutation operator. Pairs are formed from
/// positions `(0, 1)`, `(2, 3)` and so on; an odd last member is never crossed
/// but can still be mutated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OrdinaryStrategy<C = TwoPointCrossover, M = UniformIntMutation> {
    crossover: C,
    mutation: M,
}

impl<C, M> OrdinaryStrategy<C, M>
where
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Creates a new `OrdinaryStrategy` from the given operators.
    pub fn new(crossover: C, mutation: M) -> Self {
        Self {
            crossover,
            mutation,
        }
    }

    pub fn crossover(&self) -> &C {
        &self.crossover
    }

    pub fn mutation(&self) -> &M {
        &self.mutation
    }
}

impl<C, M> BreedStrategy for OrdinaryStrategy<C, M>
where
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Varies the mating pool in place.
    ///
    /// Every random decision is drawn from `rng` in a fixed order, so the
    /// offspring are fully determined by the pool and the generator state.
    fn breed(
        &self,
        mut mating_pool: Vec<Individual>,
        num_alleles: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if mating_pool.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let crossover_probability = evol_options.get_crossover_probability();
        for pair in mating_pool.chunks_exact_mut(2) {
            if rng.chance(crossover_probability) {
                let (first, second) = pair.split_at_mut(1);
                self.crossover.crossover(&mut first[0], &mut second[0], rng);
            }
        }

        let mutation_probability = evol_options.get_mutation_probability();
        for individual in mating_pool.iter_mut() {
            if rng.chance(mutation_probability) {
                self.mutation.mutate(individual, num_alleles, rng);
            }
        }

        Ok(mating_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(crossover_probability: f64, mutation_probability: f64) -> EvolutionOptions {
        EvolutionOptions::builder()
            .crossover_probability(crossover_probability)
            .mutation_probability(mutation_probability)
            .build()
            .unwrap()
    }

    fn evaluated_pool(genes: &[Vec<usize>]) -> Vec<Individual> {
        genes
            .iter()
            .map(|g| {
                let mut individual = Individual::new(g.clone());
                individual.set_fitness(1.0);
                individual
            })
            .collect()
    }

    #[test]
    fn test_breed_keeps_size_and_range() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let strategy = OrdinaryStrategy::new(
            TwoPointCrossover::new(),
            UniformIntMutation::new(0.5).unwrap(),
        );
        let pool: Vec<Individual> = (0..9)
            .map(|_| Individual::random(12, 4, &mut rng))
            .collect();

        let offspring = strategy
            .breed(pool, 4, &options(1.0, 1.0), &mut rng)
            .unwrap();

        assert_eq!(offspring.len(), 9);
        for individual in &offspring {
            assert_eq!(individual.len(), 12);
            assert!(individual.genes().iter().all(|&g| g < 4));
        }
    }

    #[test]
    fn test_breed_without_variation_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let strategy = OrdinaryStrategy::<TwoPointCrossover, UniformIntMutation>::default();
        let pool = evaluated_pool(&[vec![0, 0, 0], vec![1, 1, 1], vec![2, 2, 2]]);

        let offspring = strategy
            .breed(pool.clone(), 3, &options(0.0, 0.0), &mut rng)
            .unwrap();

        assert_eq!(offspring, pool);
    }

    #[test]
    fn test_breed_crosses_consecutive_pairs() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let strategy = OrdinaryStrategy::new(
            TwoPointCrossover::new(),
            UniformIntMutation::new(0.0).unwrap(),
        );
        let pool = evaluated_pool(&[vec![0; 6], vec![1; 6], vec![2; 6], vec![3; 6], vec![4; 6]]);

        let offspring = strategy
            .breed(pool, 5, &options(1.0, 0.0), &mut rng)
            .unwrap();

        // Genes only travel within a pair
        assert!(offspring[0].genes().iter().all(|&g| g <= 1));
        assert!(offspring[1].genes().iter().all(|&g| g <= 1));
        assert!(offspring[2].genes().iter().all(|&g| g == 2 || g == 3));
        assert!(offspring[3].genes().iter().all(|&g| g == 2 || g == 3));
        assert!(!offspring[0].is_evaluated());
        assert!(!offspring[3].is_evaluated());

        // The odd member is left alone
        assert_eq!(offspring[4].genes(), &[4; 6]);
        assert!(offspring[4].is_evaluated());
    }

    #[test]
    fn test_breed_is_reproducible() {
        let strategy = OrdinaryStrategy::<TwoPointCrossover, UniformIntMutation>::default();
        let run = |seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let pool: Vec<Individual> =
                (0..10).map(|_| Individual::random(8, 3, &mut rng)).collect();
            strategy
                .breed(pool, 3, &EvolutionOptions::default(), &mut rng)
                .unwrap()
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_breed_empty_pool() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let strategy = OrdinaryStrategy::<TwoPointCrossover, UniformIntMutation>::default();

        let result = strategy.breed(Vec::new(), 2, &EvolutionOptions::default(), &mut rng);

        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }
}
