//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Problem and
//! configuration errors are raised before a search starts; the genetic
//! operators themselves never fail on well-formed input.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genassign::error::{GeneticError, Result};
//!
//! fn checked_population(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(checked_population(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genassign::error::{GeneticError, OptionExt};
//!
//! fn lowest_penalty(penalties: &[f64]) -> genassign::error::Result<f64> {
//!     penalties
//!         .iter()
//!         .copied()
//!         .min_by(f64::total_cmp)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest_penalty(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running an assignment search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// The task/resource tables are malformed.
    #[error("Invalid problem definition: {0}")]
    InvalidProblem(String),

    /// An assignment vector does not fit the problem it is read against.
    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// An individual's fitness was requested after its genes changed and
    /// before it was evaluated again.
    #[error("Stale fitness: individual {0} has not been evaluated since its last change")]
    StaleFitness(usize),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for assignment search operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
