//! # GenerationStats
//!
//! Summary of the penalties in one generation's population, recorded by the
//! launcher for the initial population (generation 0) and after every
//! generation.

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    /// Number of individuals scored during this generation.
    pub evaluations: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl GenerationStats {
    /// Summarizes the penalties of `population`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty population and `StaleFitness`
    /// if any individual is unevaluated.
    pub fn from_population(
        generation: usize,
        evaluations: usize,
        population: &[Individual],
    ) -> Result<Self> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for (idx, individual) in population.iter().enumerate() {
            let fitness = individual.require_fitness(idx)?;
            min = min.min(fitness);
            max = max.max(fitness);
            sum += fitness;
        }

        let count = population.len() as f64;
        let mean = sum / count;
        // Second pass over the deviations, exact for large penalties
        let variance = population
            .iter()
            .filter_map(Individual::fitness)
            .map(|fitness| (fitness - mean).powi(2))
            .sum::<f64>()
            / count;

        Ok(Self {
            generation,
            evaluations,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gen {:>4} | evals {:>5} | min {:>10.2} | max {:>10.2} | mean {:>10.2} | std {:>10.2}",
            self.generation, self.evaluations, self.min, self.max, self.mean, self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(penalties: &[f64]) -> Vec<Individual> {
        penalties
            .iter()
            .map(|&penalty| {
                let mut individual = Individual::new(vec![0]);
                individual.set_fitness(penalty);
                individual
            })
            .collect()
    }

    #[test]
    fn test_stats() {
        let penalties = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = GenerationStats::from_population(3, 4, &population(&penalties)).unwrap();

        assert_eq!(stats.generation, 3);
        assert_eq!(stats.evaluations, 4);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stats_large_penalties_keep_precision() {
        let penalties: Vec<f64> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|p| 1.0e9 + p)
            .collect();
        let stats = GenerationStats::from_population(0, 8, &population(&penalties)).unwrap();

        assert_eq!(stats.mean, 1.0e9 + 5.0);
        assert!((stats.std_dev - 2.0).abs() < 1e-9, "std {}", stats.std_dev);
    }

    #[test]
    fn test_stats_uniform_population() {
        let stats = GenerationStats::from_population(0, 3, &population(&[100.0; 3])).unwrap();

        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mean, 100.0);
    }

    #[test]
    fn test_stats_errors() {
        assert_eq!(
            GenerationStats::from_population(0, 0, &[]),
            Err(GeneticError::EmptyPopulation)
        );

        let stale = vec![Individual::new(vec![1])];
        assert_eq!(
            GenerationStats::from_population(0, 0, &stale),
            Err(GeneticError::StaleFitness(0))
        );
    }

    #[test]
    fn test_display() {
        let stats = GenerationStats::from_population(12, 50, &population(&[10.0, 30.0])).unwrap();
        let line = stats.to_string();

        assert!(line.starts_with("gen   12"));
        assert!(line.contains("min      10.00"));
    }
}
