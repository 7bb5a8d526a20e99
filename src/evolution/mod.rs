pub mod builder;
pub mod launcher;
pub mod options;
pub mod stats;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionResult, TerminationReason};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use stats::GenerationStats;
