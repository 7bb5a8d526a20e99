//! # Penalty Evaluator
//!
//! Scores an assignment as the sum of the skill, dependency and capacity
//! penalties. The default weights make a single skill mismatch (100) cost more
//! than a shared dependency pair (50), which in turn costs as much as five
//! hours of overload (10 per hour).
//!
//! ## Example
//!
//! ```rust
//! use genassign::evaluation::{Evaluator, PenaltyEvaluator, PenaltyWeights};
//! use genassign::problem::{Problem, Resource, Task};
//!
//! let problem = Problem::new(
//!     vec![Task::new("A", 10.0), Task::new("B", 10.0), Task::new("A", 10.0)],
//!     vec![Resource::new(["A"], 100.0), Resource::new(["B"], 100.0)],
//! )
//! .unwrap();
//!
//! let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
//!
//! assert_eq!(evaluator.evaluate(&[0, 1, 0]), 0.0);
//! assert_eq!(evaluator.evaluate(&[0, 0, 0]), 100.0);
//! ```

use crate::constraints::{
    CapacityConstraint, Constraint, ConstraintViolation, DependencyConstraint, SkillConstraint,
};
use crate::error::{GeneticError, Result};
use crate::evaluation::Evaluator;
use crate::problem::Problem;

/// Weights of the three penalty terms.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyWeights {
    /// Added once per task whose resource lacks the required skill.
    pub skill_mismatch: f64,
    /// Added once per (task, dependency) pair sharing a resource.
    pub dependency_chain: f64,
    /// Multiplied by each hour a resource is loaded beyond its capacity.
    pub overcapacity_per_hour: f64,
}

impl PenaltyWeights {
    /// Checks that every weight is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("skill_mismatch", self.skill_mismatch),
            ("dependency_chain", self.dependency_chain),
            ("overcapacity_per_hour", self.overcapacity_per_hour),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(GeneticError::Configuration(format!(
                    "Penalty weight {} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            skill_mismatch: 100.0,
            dependency_chain: 50.0,
            overcapacity_per_hour: 10.0,
        }
    }
}

/// The three penalty terms of one assignment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenaltyBreakdown {
    pub skill_mismatch: f64,
    pub dependency_chain: f64,
    pub overcapacity: f64,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> f64 {
        self.skill_mismatch + self.dependency_chain + self.overcapacity
    }

    /// `true` when every term is zero.
    pub fn is_ideal(&self) -> bool {
        self.total() == 0.0
    }
}

/// Weighted-penalty evaluator over a borrowed [`Problem`].
#[derive(Debug, Clone)]
pub struct PenaltyEvaluator<'p> {
    problem: &'p Problem,
    skill: SkillConstraint,
    dependency: DependencyConstraint,
    capacity: CapacityConstraint,
}

impl<'p> PenaltyEvaluator<'p> {
    /// Creates an evaluator for `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if a weight is negative or not finite.
    pub fn new(problem: &'p Problem, weights: PenaltyWeights) -> Result<Self> {
        weights.validate()?;

        Ok(Self {
            problem,
            skill: SkillConstraint::new(weights.skill_mismatch),
            dependency: DependencyConstraint::new(weights.dependency_chain),
            capacity: CapacityConstraint::new(weights.overcapacity_per_hour),
        })
    }

    pub fn problem(&self) -> &'p Problem {
        self.problem
    }

    pub fn weights(&self) -> PenaltyWeights {
        PenaltyWeights {
            skill_mismatch: self.skill.weight(),
            dependency_chain: self.dependency.weight(),
            overcapacity_per_hour: self.capacity.weight_per_hour(),
        }
    }

    /// Scores each penalty term separately.
    pub fn breakdown(&self, genes: &[usize]) -> PenaltyBreakdown {
        PenaltyBreakdown {
            skill_mismatch: self.skill.penalty(self.problem, genes),
            dependency_chain: self.dependency.penalty(self.problem, genes),
            overcapacity: self.capacity.penalty(self.problem, genes),
        }
    }

    /// Lists every violation behind the penalty of `genes`.
    pub fn violations(&self, genes: &[usize]) -> Vec<ConstraintViolation> {
        let constraints: [&dyn Constraint; 3] = [&self.skill, &self.dependency, &self.capacity];
        constraints
            .iter()
            .flat_map(|constraint| constraint.check(self.problem, genes))
            .collect()
    }
}

impl Evaluator for PenaltyEvaluator<'_> {
    fn gene_count(&self) -> usize {
        self.problem.num_tasks()
    }

    fn allele_count(&self) -> usize {
        self.problem.num_resources()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        self.breakdown(genes).total()
    }
}
