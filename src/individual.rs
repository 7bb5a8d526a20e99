//! # Individual
//!
//! An `Individual` is one candidate assignment: gene `i` is the resource index
//! given to task `i`. It also caches its fitness. The cache is cleared by any
//! change to the genes, so a value read through [`Individual::fitness`] always
//! belongs to the current gene vector.
//!
//! ## Example
//!
//! ```rust
//! use genassign::individual::Individual;
//!
//! let mut individual = Individual::new(vec![0, 1, 0]);
//! individual.set_fitness(150.0);
//! assert_eq!(individual.fitness(), Some(150.0));
//!
//! // Writing the same value keeps the fitness
//! individual.set_gene(1, 1);
//! assert!(individual.is_evaluated());
//!
//! // A real change clears it
//! individual.set_gene(1, 0);
//! assert_eq!(individual.fitness(), None);
//! ```

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A gene vector with a lazily computed fitness.
///
/// The fitness is written out but never read back: a deserialized individual
/// starts unevaluated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<usize>,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual from the given genes.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an unevaluated individual with every gene drawn uniformly from
    /// `0..num_alleles`.
    ///
    /// # Panics
    ///
    /// Panics if `num_genes > 0` and `num_alleles == 0`.
    pub fn random(num_genes: usize, num_alleles: usize, rng: &mut RandomNumberGenerator) -> Self {
        let genes = (0..num_genes).map(|_| rng.gen_index(num_alleles)).collect();
        Self::new(genes)
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn gene(&self, idx: usize) -> usize {
        self.genes[idx]
    }

    /// Writes `allele` at position `idx`.
    ///
    /// Returns `true` if the gene changed, in which case the cached fitness is
    /// dropped.
    pub fn set_gene(&mut self, idx: usize, allele: usize) -> bool {
        if self.genes[idx] == allele {
            return false;
        }
        self.genes[idx] = allele;
        self.fitness = None;
        true
    }

    /// The cached fitness, or `None` if the genes changed since it was set.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Like [`Individual::fitness`], but an unevaluated individual is an error.
    ///
    /// `position` is only used to identify the individual in the error.
    pub fn require_fitness(&self, position: usize) -> Result<f64> {
        self.fitness.ok_or(GeneticError::StaleFitness(position))
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    pub fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_individual_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let individual = Individual::random(200, 4, &mut rng);

        assert_eq!(individual.len(), 200);
        assert!(individual.genes().iter().all(|&g| g < 4));
        assert!(!individual.is_evaluated());
    }

    #[test]
    fn test_set_gene_invalidates_only_on_change() {
        let mut individual = Individual::new(vec![2, 2]);
        individual.set_fitness(10.0);

        assert!(!individual.set_gene(0, 2));
        assert_eq!(individual.fitness(), Some(10.0));

        assert!(individual.set_gene(0, 1));
        assert_eq!(individual.fitness(), None);
        assert_eq!(individual.genes(), &[1, 2]);
    }

    #[test]
    fn test_require_fitness() {
        let mut individual = Individual::new(vec![0]);
        assert_eq!(
            individual.require_fitness(4),
            Err(GeneticError::StaleFitness(4))
        );

        individual.set_fitness(0.0);
        assert_eq!(individual.require_fitness(4), Ok(0.0));

        individual.invalidate_fitness();
        assert!(individual.require_fitness(4).is_err());
    }

    #[test]
    fn test_empty_individual() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let individual = Individual::random(0, 0, &mut rng);
        assert!(individual.is_empty());
    }
}
