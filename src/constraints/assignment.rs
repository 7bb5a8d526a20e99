//! # Assignment Constraints
//!
//! The three penalty rules of a task assignment:
//!
//! - [`SkillConstraint`]: a fixed weight per task given to a resource without
//!   the required skill.
//! - [`DependencyConstraint`]: a fixed weight per (task, dependency) pair that
//!   ends up on the same resource. This pushes dependent work apart so it can
//!   proceed in parallel; it says nothing about execution order.
//! - [`CapacityConstraint`]: a weight per hour of effort above a resource's
//!   capacity, linear and uncapped.

use crate::constraints::{Constraint, ConstraintViolation};
use crate::problem::Problem;

/// Penalizes tasks given to resources that lack the required skill.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SkillConstraint {
    weight: f64,
}

impl SkillConstraint {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn mismatches<'a>(
        problem: &'a Problem,
        genes: &'a [usize],
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        genes
            .iter()
            .enumerate()
            .filter(move |&(task, &resource)| !problem.can_perform(task, resource))
            .map(|(task, &resource)| (task, resource))
    }
}

impl Constraint for SkillConstraint {
    fn name(&self) -> &'static str {
        "SkillMismatch"
    }

    fn check(&self, problem: &Problem, genes: &[usize]) -> Vec<ConstraintViolation> {
        Self::mismatches(problem, genes)
            .map(|(task, resource)| {
                ConstraintViolation::with_severity(
                    self.name(),
                    format!(
                        "task {} needs '{}' but resource {} does not have it",
                        task,
                        problem.task(task).required_skill,
                        resource
                    ),
                    self.weight,
                )
            })
            .collect()
    }

    fn penalty(&self, problem: &Problem, genes: &[usize]) -> f64 {
        Self::mismatches(problem, genes).count() as f64 * self.weight
    }
}

/// Penalizes dependent tasks that share a resource.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyConstraint {
    weight: f64,
}

impl DependencyConstraint {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn shared_pairs<'a>(
        problem: &'a Problem,
        genes: &'a [usize],
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        problem
            .tasks()
            .iter()
            .enumerate()
            .flat_map(move |(task, spec)| {
                spec.dependencies
                    .iter()
                    .filter(move |&&dep| genes[dep] == genes[task])
                    .map(move |&dep| (task, dep))
            })
    }
}

impl Constraint for DependencyConstraint {
    fn name(&self) -> &'static str {
        "DependencyChain"
    }

    fn check(&self, problem: &Problem, genes: &[usize]) -> Vec<ConstraintViolation> {
        Self::shared_pairs(problem, genes)
            .map(|(task, dep)| {
                ConstraintViolation::with_severity(
                    self.name(),
                    format!(
                        "task {} and its dependency {} are both on resource {}",
                        task, dep, genes[task]
                    ),
                    self.weight,
                )
            })
            .collect()
    }

    fn penalty(&self, problem: &Problem, genes: &[usize]) -> f64 {
        Self::shared_pairs(problem, genes).count() as f64 * self.weight
    }
}

/// Penalizes every hour of effort above a resource's capacity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityConstraint {
    weight_per_hour: f64,
}

impl CapacityConstraint {
    pub fn new(weight_per_hour: f64) -> Self {
        Self { weight_per_hour }
    }

    pub fn weight_per_hour(&self) -> f64 {
        self.weight_per_hour
    }
}

impl Constraint for CapacityConstraint {
    fn name(&self) -> &'static str {
        "Overcapacity"
    }

    fn check(&self, problem: &Problem, genes: &[usize]) -> Vec<ConstraintViolation> {
        problem
            .resource_loads(genes)
            .into_iter()
            .zip(problem.resources())
            .enumerate()
            .filter(|(_, (load, resource))| *load > resource.capacity)
            .map(|(idx, (load, resource))| {
                let excess = load - resource.capacity;
                ConstraintViolation::with_severity(
                    self.name(),
                    format!(
                        "resource {} is assigned {} hours against a capacity of {} ({} over)",
                        idx, load, resource.capacity, excess
                    ),
                    excess * self.weight_per_hour,
                )
            })
            .collect()
    }

    fn penalty(&self, problem: &Problem, genes: &[usize]) -> f64 {
        let excess: f64 = problem
            .resource_loads(genes)
            .into_iter()
            .zip(problem.resources())
            .map(|(load, resource)| (load - resource.capacity).max(0.0))
            .sum();
        excess * self.weight_per_hour
    }
}
