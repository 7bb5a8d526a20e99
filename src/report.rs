//! # Assignment Report
//!
//! Turns a gene vector back into the terms of the problem: which resource
//! takes which task, how loaded each resource ends up, and what the penalty
//! is made of.
//!
//! ## Example
//!
//! ```rust
//! use genassign::evaluation::{PenaltyEvaluator, PenaltyWeights};
//! use genassign::problem::{Problem, Resource, Task};
//! use genassign::report::AssignmentReport;
//!
//! let problem = Problem::new(
//!     vec![Task::new("A", 10.0), Task::new("B", 10.0)],
//!     vec![
//!         Resource::new(["A"], 100.0).with_name("Developer 0"),
//!         Resource::new(["B"], 100.0).with_name("Developer 1"),
//!     ],
//! )
//! .unwrap();
//! let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
//!
//! let report = AssignmentReport::new(&evaluator, &[0, 1]).unwrap();
//! assert!(report.is_ideal());
//!
//! let text = report.to_string();
//! assert!(text.contains("Task 1 (needs B): Assigned to Developer 1"));
//! ```

use std::fmt;

use crate::constraints::ConstraintViolation;
use crate::error::Result;
use crate::evaluation::{PenaltyBreakdown, PenaltyEvaluator};

/// Where one task went.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TaskAssignment {
    pub task: usize,
    pub task_label: String,
    pub required_skill: String,
    pub resource: usize,
    pub resource_label: String,
    /// Whether the resource has the required skill.
    pub skill_matched: bool,
}

/// How much work one resource ended up with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLoad {
    pub resource: usize,
    pub resource_label: String,
    pub assigned_tasks: Vec<usize>,
    pub assigned_effort: f64,
    pub capacity: f64,
}

impl ResourceLoad {
    /// Hours beyond capacity, zero if the resource is within it.
    pub fn overload(&self) -> f64 {
        (self.assigned_effort - self.capacity).max(0.0)
    }

    /// Assigned effort as a fraction of capacity; `None` for a zero-capacity resource.
    pub fn utilization(&self) -> Option<f64> {
        (self.capacity > 0.0).then(|| self.assigned_effort / self.capacity)
    }
}

/// A readable account of one assignment vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentReport {
    pub assignments: Vec<TaskAssignment>,
    pub loads: Vec<ResourceLoad>,
    pub breakdown: PenaltyBreakdown,
    pub violations: Vec<ConstraintViolation>,
}

impl AssignmentReport {
    /// Builds the report for `genes`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidAssignment` if `genes` does not have one
    /// in-range resource index per task.
    pub fn new(evaluator: &PenaltyEvaluator<'_>, genes: &[usize]) -> Result<Self> {
        let problem = evaluator.problem();
        problem.check_assignment(genes)?;

        let assignments = genes
            .iter()
            .enumerate()
            .map(|(task, &resource)| TaskAssignment {
                task,
                task_label: problem.task_label(task),
                required_skill: problem.task(task).required_skill.clone(),
                resource,
                resource_label: problem.resource_label(resource),
                skill_matched: problem.can_perform(task, resource),
            })
            .collect();

        let loads = problem
            .resource_loads(genes)
            .into_iter()
            .enumerate()
            .map(|(resource, assigned_effort)| ResourceLoad {
                resource,
                resource_label: problem.resource_label(resource),
                assigned_tasks: genes
                    .iter()
                    .enumerate()
                    .filter(|&(_, &r)| r == resource)
                    .map(|(task, _)| task)
                    .collect(),
                assigned_effort,
                capacity: problem.resource(resource).capacity,
            })
            .collect();

        Ok(Self {
            assignments,
            loads,
            breakdown: evaluator.breakdown(genes),
            violations: evaluator.violations(genes),
        })
    }

    pub fn total_penalty(&self) -> f64 {
        self.breakdown.total()
    }

    pub fn is_ideal(&self) -> bool {
        self.breakdown.is_ideal()
    }
}

impl fmt::Display for AssignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best Schedule:")?;
        for assignment in &self.assignments {
            writeln!(
                f,
                "Task {} (needs {}): Assigned to {}",
                assignment.task, assignment.required_skill, assignment.resource_label
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Resource loads:")?;
        for load in &self.loads {
            writeln!(
                f,
                "{}: {}/{} hours, tasks {:?}",
                load.resource_label, load.assigned_effort, load.capacity, load.assigned_tasks
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Penalty: {} (skill mismatch {}, dependency chain {}, overcapacity {})",
            self.breakdown.total(),
            self.breakdown.skill_mismatch,
            self.breakdown.dependency_chain,
            self.breakdown.overcapacity
        )?;
        for violation in &self.violations {
            writeln!(f, "  {}", violation)?;
        }

        Ok(())
    }
}
