//! # EvolutionLauncher
//!
//! Runs the generational loop: a random initial population is evaluated, then
//! each generation keeps the elites, fills the rest through tournament
//! selection and breeding, and evaluates whatever came back stale. The best
//! individual seen in any generation is reported, whether or not it survived.
//!
//! ## Example
//!
//! ```rust
//! use genassign::evaluation::{PenaltyEvaluator, PenaltyWeights};
//! use genassign::evolution::{EvolutionLauncher, EvolutionOptions, TerminationReason};
//! use genassign::problem::{Problem, Resource, Task};
//! use genassign::rng::RandomNumberGenerator;
//!
//! let problem = Problem::new(
//!     vec![Task::new("A", 10.0), Task::new("B", 10.0), Task::new("A", 10.0)],
//!     vec![Resource::new(["A"], 100.0), Resource::new(["B"], 100.0)],
//! )
//! .unwrap();
//! let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .num_generations(40)
//!     .build()
//!     .unwrap();
//! let launcher = EvolutionLauncher::from_options(evaluator, &options).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = launcher.evolve(&options, &mut rng).unwrap();
//!
//! assert_eq!(result.best.genes(), &[0, 1, 0]);
//! assert_eq!(result.score, 0.0);
//! assert_eq!(result.termination, TerminationReason::Completed);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{
    options::{EvolutionOptions, LogLevel},
    stats::GenerationStats,
};
use crate::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    error::{GeneticError, OptionExt, Result},
    evaluation::Evaluator,
    individual::Individual,
    operators::{TwoPointCrossover, UniformIntMutation},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy, TournamentSelection},
};

/// Why a search stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// All configured generations ran.
    Completed,
    /// The best penalty did not improve for `stagnation_limit` generations.
    Stagnated,
    /// The best penalty reached `target_fitness`.
    TargetReached,
    /// `time_limit` elapsed.
    DeadlineReached,
    /// The cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            TerminationReason::Completed => "completed all generations",
            TerminationReason::Stagnated => "stagnated",
            TerminationReason::TargetReached => "reached target fitness",
            TerminationReason::DeadlineReached => "reached time limit",
            TerminationReason::Cancelled => "cancelled",
        };
        f.write_str(reason)
    }
}

/// Represents the outcome of a search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The lowest-penalty individual seen in any generation.
    pub best: Individual,
    /// The penalty of `best`.
    pub score: f64,
    /// Number of completed generations, not counting the initial population.
    pub generations: usize,
    pub termination: TerminationReason,
    /// Statistics for the initial population followed by one entry per generation.
    pub history: Vec<GenerationStats>,
    /// The final population, fully evaluated.
    pub population: Vec<Individual>,
}

impl EvolutionResult {
    /// The resource index chosen for each task.
    pub fn assignment(&self) -> &[usize] {
        self.best.genes()
    }
}

/// The options baked into the operators by [`EvolutionLauncher::from_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct OperatorSettings {
    tournament_size: usize,
    gene_mutation_rate: f64,
}

impl OperatorSettings {
    fn from_options(options: &EvolutionOptions) -> Self {
        Self {
            tournament_size: options.get_tournament_size(),
            gene_mutation_rate: options.get_gene_mutation_rate(),
        }
    }
}

/// Manages the search using a specified evaluator, selection strategy and breeding strategy.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<E, S = TournamentSelection, B = OrdinaryStrategy> {
    evaluator: E,
    selection_strategy: S,
    breed_strategy: B,
    cancel: Option<Arc<AtomicBool>>,
    operator_settings: Option<OperatorSettings>,
}

impl<E, S, B> EvolutionLauncher<E, S, B>
where
    E: Evaluator,
    S: SelectionStrategy,
    B: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - Scores gene vectors; it also fixes their length and allele range.
    /// * `selection_strategy` - Builds the mating pool each generation.
    /// * `breed_strategy` - Turns the mating pool into offspring.
    pub fn new(evaluator: E, selection_strategy: S, breed_strategy: B) -> Self {
        Self {
            evaluator,
            selection_strategy,
            breed_strategy,
            cancel: None,
            operator_settings: None,
        }
    }

    /// Lets another thread stop the search by setting `flag`.
    ///
    /// The flag is polled before every generation; a running generation is
    /// always finished.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Runs the search.
    ///
    /// The `tournament_size` and `gene_mutation_rate` options are only read by
    /// [`EvolutionLauncher::from_options`]; every other option applies here. A
    /// launcher built that way logs a warning when `options` disagrees with
    /// the values its operators were built from.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The evaluator reports genes but no alleles
    /// - The evaluator produces a non-finite score
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let num_genes = self.evaluator.gene_count();
        let num_alleles = self.evaluator.allele_count();
        if num_alleles == 0 && num_genes > 0 {
            return Err(GeneticError::Configuration(
                "Cannot assign tasks without any resources".to_string(),
            ));
        }

        if let Some(built) = self.mismatched_operator_settings(options) {
            warn!(
                built_tournament_size = built.tournament_size,
                built_gene_mutation_rate = built.gene_mutation_rate,
                tournament_size = options.get_tournament_size(),
                gene_mutation_rate = options.get_gene_mutation_rate(),
                "operator options differ from the built ones; keeping the built operators"
            );
        }

        let started = Instant::now();
        let log_level = options.get_log_level();
        let population_size = options.get_population_size();

        debug!(
            population_size,
            num_generations = options.get_num_generations(),
            num_genes,
            num_alleles,
            "starting assignment search"
        );

        let mut population: Vec<Individual> = (0..population_size)
            .map(|_| Individual::random(num_genes, num_alleles, rng))
            .collect();
        let evaluations = self.evaluate_stale(&mut population, options)?;

        let mut best = best_of(&population)?.clone();
        let mut score = best.require_fitness(0)?;
        let mut history = vec![GenerationStats::from_population(0, evaluations, &population)?];
        self.log_generation(log_level, &history[0], score, &population);

        let mut generation = 0;
        let mut stagnant = 0;
        let termination = loop {
            if let Some(reason) = self.stop_reason(options, generation, stagnant, score, started) {
                break reason;
            }
            generation += 1;

            let elite_count = options.get_elite_count();
            let mut next = if elite_count > 0 {
                ElitistSelection::new().select(&population, elite_count, rng)?
            } else {
                Vec::with_capacity(population_size)
            };

            let num_offspring = population_size - next.len();
            if num_offspring > 0 {
                let mating_pool = self
                    .selection_strategy
                    .select(&population, num_offspring, rng)?;
                next.extend(
                    self.breed_strategy
                        .breed(mating_pool, num_alleles, options, rng)?,
                );
            }

            population = next;
            let evaluations = self.evaluate_stale(&mut population, options)?;
            let stats = GenerationStats::from_population(generation, evaluations, &population)?;

            let generation_best = best_of(&population)?;
            let generation_score = generation_best.require_fitness(0)?;
            if generation_score < score {
                best = generation_best.clone();
                score = generation_score;
                stagnant = 0;
            } else {
                stagnant += 1;
            }

            self.log_generation(log_level, &stats, score, &population);
            history.push(stats);
        };

        debug!(
            generations = generation,
            best = score,
            termination = %termination,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "assignment search finished"
        );

        Ok(EvolutionResult {
            best,
            score,
            generations: generation,
            termination,
            history,
            population,
        })
    }

    /// The settings the operators were built with, if `options` asks for others.
    fn mismatched_operator_settings(
        &self,
        options: &EvolutionOptions,
    ) -> Option<OperatorSettings> {
        self.operator_settings
            .filter(|built| *built != OperatorSettings::from_options(options))
    }

    fn stop_reason(
        &self,
        options: &EvolutionOptions,
        generation: usize,
        stagnant: usize,
        score: f64,
        started: Instant,
    ) -> Option<TerminationReason> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Some(TerminationReason::Cancelled);
        }

        if options.get_target_fitness().is_some_and(|target| score <= target) {
            return Some(TerminationReason::TargetReached);
        }

        if options
            .get_stagnation_limit()
            .is_some_and(|limit| stagnant >= limit)
        {
            return Some(TerminationReason::Stagnated);
        }

        if options
            .get_time_limit()
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Some(TerminationReason::DeadlineReached);
        }

        if generation >= options.get_num_generations() {
            return Some(TerminationReason::Completed);
        }

        None
    }

    /// Scores every individual without a fitness and returns how many there were.
    ///
    /// Switches to rayon once the count reaches the parallel threshold.
    fn evaluate_stale(
        &self,
        population: &mut [Individual],
        options: &EvolutionOptions,
    ) -> Result<usize> {
        let stale = population.iter().filter(|i| !i.is_evaluated()).count();

        if stale >= options.get_parallel_threshold() {
            population
                .par_iter_mut()
                .filter(|individual| !individual.is_evaluated())
                .try_for_each(|individual| self.score_individual(individual))?;
        } else {
            population
                .iter_mut()
                .filter(|individual| !individual.is_evaluated())
                .try_for_each(|individual| self.score_individual(individual))?;
        }

        Ok(stale)
    }

    fn score_individual(&self, individual: &mut Individual) -> Result<()> {
        let score = self.evaluator.evaluate(individual.genes());

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }

        individual.set_fitness(score);
        Ok(())
    }

    fn log_generation(
        &self,
        log_level: LogLevel,
        stats: &GenerationStats,
        best: f64,
        population: &[Individual],
    ) {
        match log_level {
            LogLevel::Minimal => info!(
                generation = stats.generation,
                best,
                min = stats.min,
                "generation complete"
            ),
            LogLevel::Verbose => {
                info!(
                    generation = stats.generation,
                    evaluations = stats.evaluations,
                    best,
                    min = stats.min,
                    max = stats.max,
                    mean = stats.mean,
                    std_dev = stats.std_dev,
                    "generation complete"
                );
                for (idx, individual) in population.iter().enumerate() {
                    debug!(
                        generation = stats.generation,
                        individual = idx,
                        genes = ?individual.genes(),
                        fitness = ?individual.fitness(),
                        "individual"
                    );
                }
            }
            LogLevel::None => {}
        }
    }
}

impl<E: Evaluator> EvolutionLauncher<E, TournamentSelection, OrdinaryStrategy> {
    /// Creates a launcher with tournament selection, two-point crossover and
    /// uniform mutation, configured from `options`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid.
    pub fn from_options(evaluator: E, options: &EvolutionOptions) -> Result<Self> {
        options.validate()?;

        let selection_strategy = TournamentSelection::new(options.get_tournament_size())?;
        let breed_strategy = OrdinaryStrategy::new(
            TwoPointCrossover::new(),
            UniformIntMutation::new(options.get_gene_mutation_rate())?,
        );

        let mut launcher = Self::new(evaluator, selection_strategy, breed_strategy);
        launcher.operator_settings = Some(OperatorSettings::from_options(options));
        Ok(launcher)
    }
}

/// Returns the lowest-penalty individual; the first one wins ties.
fn best_of(population: &[Individual]) -> Result<&Individual> {
    let mut best: Option<(&Individual, f64)> = None;

    for (idx, individual) in population.iter().enumerate() {
        let fitness = individual.require_fitness(idx)?;
        if best.map_or(true, |(_, best_fitness)| fitness < best_fitness) {
            best = Some((individual, fitness));
        }
    }

    best.map(|(individual, _)| individual)
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
}
