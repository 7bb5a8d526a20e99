//! # Constraints Module
//!
//! Soft constraints over an assignment vector. Each constraint can do two
//! things with a gene vector:
//!
//! - [`Constraint::penalty`] scores it, the cheap path the search uses on every
//!   evaluation;
//! - [`Constraint::check`] explains it as a list of [`ConstraintViolation`]s,
//!   each carrying the penalty it contributes as its severity.
//!
//! The two always agree: the severities returned by `check` sum to the value
//! returned by `penalty`.
//!
//! ## Example
//!
//! ```rust
//! use genassign::constraints::{CapacityConstraint, Constraint};
//! use genassign::problem::{Problem, Resource, Task};
//!
//! let problem = Problem::new(
//!     vec![Task::new("ops", 8.0), Task::new("ops", 8.0)],
//!     vec![Resource::new(["ops"], 10.0)],
//! )
//! .unwrap();
//!
//! let capacity = CapacityConstraint::new(10.0);
//! assert_eq!(capacity.penalty(&problem, &[0, 0]), 60.0);
//!
//! let violations = capacity.check(&problem, &[0, 0]);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].severity(), Some(60.0));
//! ```

use std::fmt::{Debug, Display};

use crate::problem::Problem;

pub mod assignment;

pub use assignment::{CapacityConstraint, DependencyConstraint, SkillConstraint};

/// Represents a violation of a constraint.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    /// The name of the constraint that was violated
    constraint_name: String,
    /// A description of the violation
    description: String,
    /// The penalty this violation adds, if the constraint assigns one
    severity: Option<f64>,
}

impl ConstraintViolation {
    /// Creates a new constraint violation with the given name and description.
    pub fn new<S: Into<String>, D: Into<String>>(constraint_name: S, description: D) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: None,
        }
    }

    /// Creates a new constraint violation with the given name, description, and severity.
    pub fn with_severity<S: Into<String>, D: Into<String>>(
        constraint_name: S,
        description: D,
        severity: f64,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: Some(severity),
        }
    }

    /// Returns the name of the constraint that was violated.
    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }

    /// Returns the description of the violation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the severity of the violation, if specified.
    pub fn severity(&self) -> Option<f64> {
        self.severity
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Constraint '{}' violated: {}{}",
            self.constraint_name(),
            self.description(),
            self.severity()
                .map(|s| format!(" (penalty: {})", s))
                .unwrap_or_default()
        )
    }
}

/// A soft constraint on how tasks are spread over resources.
///
/// Implementations must be pure: the same problem and genes always yield the
/// same violations and penalty, and the penalty is never negative.
pub trait Constraint: Debug + Send + Sync {
    /// Short name used in violation reports.
    fn name(&self) -> &'static str;

    /// Lists every violation `genes` commits against this constraint.
    ///
    /// `genes` must hold one valid resource index per task of `problem`.
    fn check(&self, problem: &Problem, genes: &[usize]) -> Vec<ConstraintViolation>;

    /// The penalty `genes` incurs under this constraint.
    ///
    /// The default implementation scores the output of [`Constraint::check`];
    /// implementations override it with an allocation-free version.
    fn penalty(&self, problem: &Problem, genes: &[usize]) -> f64 {
        self.penalty_score(&self.check(problem, genes))
    }

    /// Sums the severity of all violations, counting a violation without a
    /// severity as 1.
    fn penalty_score(&self, violations: &[ConstraintViolation]) -> f64 {
        violations.iter().map(|v| v.severity.unwrap_or(1.0)).sum()
    }
}
