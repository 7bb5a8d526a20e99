//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration options for an assignment
//! search. It includes parameters such as the population size, the number of generations,
//! the variation probabilities, elitism, the optional early-stop conditions and the
//! logging level.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use genassign::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(200)
//!     .num_generations(150)
//!     .elite_count(2)
//!     .stagnation_limit(30)
//!     .time_limit(Duration::from_secs(5))
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(custom_options.get_population_size(), 200);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_generations(), 40);
//! ```
//!
//! ## Defaults
//!
//! | option                  | default |
//! |-------------------------|---------|
//! | `population_size`       | 50      |
//! | `num_generations`       | 40      |
//! | `crossover_probability` | 0.7     |
//! | `mutation_probability`  | 0.2     |
//! | `gene_mutation_rate`    | 0.1     |
//! | `tournament_size`       | 3       |
//! | `elite_count`           | 0       |
//! | `stagnation_limit`      | none    |
//! | `target_fitness`        | none    |
//! | `time_limit`            | none    |
//! | `log_level`             | `None`  |
//! | `parallel_threshold`    | 1000    |

use std::time::Duration;

use crate::error::{GeneticError, Result};

/// How much the search reports through `tracing`.
///
/// - `Verbose`: per-generation statistics plus a `debug!` event per individual.
/// - `Minimal`: one `info!` event per generation.
/// - `None`: only `debug!` events at the start and end of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    gene_mutation_rate: f64,
    tournament_size: usize,
    elite_count: usize,
    stagnation_limit: Option<usize>,
    target_fitness: Option<f64>,
    time_limit: Option<Duration>,
    log_level: LogLevel,
    /// Minimum number of stale individuals to evaluate in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    /// Probability that a pair in the mating pool is recombined.
    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    /// Probability that an offspring is handed to the mutation operator.
    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Probability that the mutation operator redraws any single gene.
    pub fn get_gene_mutation_rate(&self) -> f64 {
        self.gene_mutation_rate
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Number of best individuals copied unchanged into the next generation.
    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    /// Generations without a best-so-far improvement before the search stops.
    pub fn get_stagnation_limit(&self) -> Option<usize> {
        self.stagnation_limit
    }

    /// Penalty at or below which the search stops.
    pub fn get_target_fitness(&self) -> Option<f64> {
        self.target_fitness
    }

    pub fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum number of stale individuals to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks every option against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first invalid option.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        for (name, value) in [
            ("Crossover probability", self.crossover_probability),
            ("Mutation probability", self.mutation_probability),
            ("Per-gene mutation rate", self.gene_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if self.elite_count > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elite count ({}) exceeds population size ({})",
                self.elite_count, self.population_size
            )));
        }

        if self.stagnation_limit == Some(0) {
            return Err(GeneticError::Configuration(
                "Stagnation limit must be at least 1 generation".to_string(),
            ));
        }

        if let Some(target) = self.target_fitness {
            if !target.is_finite() {
                return Err(GeneticError::Configuration(format!(
                    "Target fitness must be finite, got {}",
                    target
                )));
            }
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset options keep their defaults; `build` validates the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genassign::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .parallel_threshold(500)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(EvolutionOptions::builder().population_size(0).build().is_err());
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_generations: 40,
            crossover_probability: 0.7,
            mutation_probability: 0.2,
            gene_mutation_rate: 0.1,
            tournament_size: 3,
            elite_count: 0,
            stagnation_limit: None,
            target_fitness: None,
            time_limit: None,
            log_level: LogLevel::None,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    options: EvolutionOptions,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.options.population_size = value;
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.options.num_generations = value;
        self
    }

    /// Sets the crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.options.crossover_probability = value;
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.options.mutation_probability = value;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn gene_mutation_rate(mut self, value: f64) -> Self {
        self.options.gene_mutation_rate = value;
        self
    }

    /// Sets the tournament size.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.options.tournament_size = value;
        self
    }

    /// Sets the number of elites.
    pub fn elite_count(mut self, value: usize) -> Self {
        self.options.elite_count = value;
        self
    }

    /// Stops the search after `value` generations without improvement.
    pub fn stagnation_limit(mut self, value: usize) -> Self {
        self.options.stagnation_limit = Some(value);
        self
    }

    /// Stops the search once the best penalty drops to `value` or below.
    pub fn target_fitness(mut self, value: f64) -> Self {
        self.options.target_fitness = Some(value);
        self
    }

    /// Stops the search once `value` has elapsed.
    pub fn time_limit(mut self, value: Duration) -> Self {
        self.options.time_limit = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.options.log_level = value;
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.options.parallel_threshold = value;
        self
    }

    /// Builds the `EvolutionOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if any option is out of range.
    pub fn build(self) -> Result<EvolutionOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
