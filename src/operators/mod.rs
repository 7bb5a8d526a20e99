//! # Genetic Operators
//!
//! Recombination and mutation on gene vectors. Operators only move resource
//! indices around; they never look at tasks, skills or capacities, and every
//! vector they produce keeps its length and stays within `0..num_alleles`.

pub mod crossover;
pub mod mutation;

pub use crossover::{CrossoverOperator, TwoPointCrossover};
pub use mutation::{MutationOperator, UniformIntMutation};
