//! # Evaluation
//!
//! The [`Evaluator`] trait maps a gene vector to a penalty: lower is better,
//! zero is ideal. The evolutionary loop only talks to this trait, so the
//! penalty model, caching wrappers and test doubles are interchangeable.

pub mod penalty;

pub use penalty::{PenaltyBreakdown, PenaltyEvaluator, PenaltyWeights};

/// Scores gene vectors for the evolutionary loop.
///
/// `evaluate` must be deterministic and free of side effects that influence
/// later scores; the loop evaluates individuals in parallel and in any order.
pub trait Evaluator: Send + Sync {
    /// Length of every gene vector (the number of tasks).
    fn gene_count(&self) -> usize;

    /// Number of values each gene can take (the number of resources).
    fn allele_count(&self) -> usize;

    /// Returns the penalty of `genes`; lower is better.
    fn evaluate(&self, genes: &[usize]) -> f64;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn gene_count(&self) -> usize {
        (**self).gene_count()
    }

    fn allele_count(&self) -> usize {
        (**self).allele_count()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        (**self).evaluate(genes)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn gene_count(&self) -> usize {
        (**self).gene_count()
    }

    fn allele_count(&self) -> usize {
        (**self).allele_count()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        (**self).evaluate(genes)
    }
}
