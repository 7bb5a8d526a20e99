//! # Mutation

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Perturbs an individual in place.
pub trait MutationOperator: Debug + Send + Sync {
    /// Mutates `individual`, drawing replacement genes from `0..num_alleles`.
    ///
    /// Returns the number of genes whose value changed.
    fn mutate(
        &self,
        individual: &mut Individual,
        num_alleles: usize,
        rng: &mut RandomNumberGenerator,
    ) -> usize;
}

/// Redraws each gene independently, with probability `gene_rate`, from a
/// uniform distribution over all alleles. The redrawn value may equal the old
/// one.
///
/// A deserialized value goes through [`UniformIntMutation::new`], so an
/// out-of-range rate is rejected on load.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UniformIntMutationDefinition")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformIntMutation {
    gene_rate: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniformIntMutationDefinition {
    gene_rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UniformIntMutationDefinition> for UniformIntMutation {
    type Error = GeneticError;

    fn try_from(definition: UniformIntMutationDefinition) -> Result<Self> {
        Self::new(definition.gene_rate)
    }
}

impl UniformIntMutation {
    /// # Errors
    ///
    /// Returns an error if `gene_rate` is outside `[0, 1]`.
    pub fn new(gene_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&gene_rate) {
            return Err(GeneticError::Configuration(format!(
                "Per-gene mutation rate must be in [0, 1], got {}",
                gene_rate
            )));
        }

        Ok(Self { gene_rate })
    }

    pub fn gene_rate(&self) -> f64 {
        self.gene_rate
    }
}

impl Default for UniformIntMutation {
    fn default() -> Self {
        Self { gene_rate: 0.1 }
    }
}

impl MutationOperator for UniformIntMutation {
    fn mutate(
        &self,
        individual: &mut Individual,
        num_alleles: usize,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        if num_alleles == 0 {
            return 0;
        }

        let mut changed = 0;
        for idx in 0..individual.len() {
            if rng.chance(self.gene_rate) && individual.set_gene(idx, rng.gen_index(num_alleles)) {
                changed += 1;
            }
        }
        changed
    }
}
