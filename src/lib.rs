//! # genassign
//!
//! Assigns interdependent tasks to skilled, capacity-limited resources with a
//! genetic algorithm. An assignment is a vector holding one resource index per
//! task; its fitness is a weighted penalty for skill mismatches, dependent
//! tasks sharing a resource, and hours beyond capacity. Lower is better and
//! zero is ideal.
//!
//! ```rust
//! use genassign::{
//!     AssignmentReport, EvolutionLauncher, EvolutionOptions, PenaltyEvaluator, PenaltyWeights,
//!     Problem, RandomNumberGenerator, Resource, Task,
//! };
//!
//! let problem = Problem::new(
//!     vec![
//!         Task::new("frontend", 20.0),
//!         Task::new("backend", 30.0),
//!         Task::new("frontend", 15.0).with_dependencies([0]),
//!     ],
//!     vec![
//!         Resource::new(["frontend"], 40.0),
//!         Resource::new(["backend"], 35.0),
//!         Resource::new(["frontend", "backend"], 45.0),
//!     ],
//! )?;
//! let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default())?;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(40)
//!     .num_generations(40)
//!     .build()?;
//! let launcher = EvolutionLauncher::from_options(&evaluator, &options)?;
//! let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(7))?;
//!
//! let report = AssignmentReport::new(&evaluator, result.assignment())?;
//! assert_eq!(report.total_penalty(), result.score);
//! println!("{}", report);
//! # Ok::<(), genassign::GeneticError>(())
//! ```

pub mod breeding;
pub mod caching;
pub mod constraints;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod individual;
pub mod operators;
pub mod problem;
pub mod report;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use breeding::{BreedStrategy, OrdinaryStrategy};
pub use caching::{CacheType, CachingEvaluator};
pub use error::{GeneticError, OptionExt, Result};
pub use evaluation::{Evaluator, PenaltyBreakdown, PenaltyEvaluator, PenaltyWeights};
pub use evolution::{
    EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult,
    GenerationStats, LogLevel, TerminationReason,
};
pub use individual::Individual;
pub use problem::{Problem, ProblemDefinition, Resource, Task};
pub use report::AssignmentReport;
pub use rng::RandomNumberGenerator;
pub use selection::{ElitistSelection, SelectionStrategy, TournamentSelection};
