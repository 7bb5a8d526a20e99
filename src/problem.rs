//! # Problem Model
//!
//! The immutable description of what is being assigned: tasks, each with a
//! required skill, an effort in hours and a set of dependencies, and
//! resources, each with a skill set and a capacity in hours per period.
//!
//! Task and resource identifiers are their positions in the tables handed to
//! [`Problem::new`]. Construction validates the tables once; the search never
//! mutates them afterwards.
//!
//! ## Example
//!
//! ```rust
//! use genassign::problem::{Problem, Resource, Task};
//!
//! let problem = Problem::new(
//!     vec![
//!         Task::new("frontend", 20.0),
//!         Task::new("frontend", 15.0).with_dependencies([0]),
//!     ],
//!     vec![
//!         Resource::new(["frontend"], 40.0),
//!         Resource::new(["backend"], 35.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(problem.can_perform(1, 0));
//! assert!(!problem.can_perform(1, 1));
//! ```
//!
//! Dependencies only feed the same-resource penalty. Cyclic dependency graphs
//! are accepted as given.

use std::collections::HashSet;

use crate::error::{GeneticError, Result};

/// A unit of work that has to be given to exactly one resource.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Display name; reports fall back to `Task {index}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// The skill tag a resource needs to work on this task.
    pub required_skill: String,
    /// Estimated effort in hours.
    pub effort: f64,
    /// Indices of the tasks this one depends on.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dependencies: Vec<usize>,
}

impl Task {
    pub fn new(required_skill: impl Into<String>, effort: f64) -> Self {
        Self {
            name: None,
            required_skill: required_skill.into(),
            effort,
            dependencies: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = usize>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }
}

/// A worker that can take tasks matching its skills, up to its capacity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Display name; reports fall back to `Resource {index}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Skill tags this resource can perform.
    pub skills: Vec<String>,
    /// Available hours per scheduling period.
    pub capacity: f64,
}

impl Resource {
    pub fn new<I, S>(skills: I, capacity: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            skills: skills.into_iter().map(Into::into).collect(),
            capacity,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// The raw task and resource tables, as supplied by a caller or a file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDefinition {
    pub tasks: Vec<Task>,
    pub resources: Vec<Resource>,
}

/// A validated, read-only assignment problem.
///
/// Besides the tables it keeps a task × resource skill-match matrix so the
/// evaluator never compares skill strings in its hot loop.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProblemDefinition", into = "ProblemDefinition")
)]
#[derive(Debug, Clone)]
pub struct Problem {
    tasks: Vec<Task>,
    resources: Vec<Resource>,
    skill_match: Vec<bool>,
}

impl Problem {
    /// Validates the tables and builds the problem.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidProblem`] if:
    /// - a task's effort is not a finite positive number
    /// - a task's required skill is blank
    /// - a dependency is out of range, points at the task itself, or is repeated
    /// - a resource's capacity is negative or not finite
    /// - there are tasks but no resources to give them to
    pub fn new(tasks: Vec<Task>, resources: Vec<Resource>) -> Result<Self> {
        for (idx, task) in tasks.iter().enumerate() {
            if !task.effort.is_finite() || task.effort <= 0.0 {
                return Err(GeneticError::InvalidProblem(format!(
                    "Task {} has invalid effort {}; effort must be a positive number of hours",
                    idx, task.effort
                )));
            }

            if task.required_skill.trim().is_empty() {
                return Err(GeneticError::InvalidProblem(format!(
                    "Task {} does not name a required skill",
                    idx
                )));
            }

            let mut seen = HashSet::with_capacity(task.dependencies.len());
            for &dep in &task.dependencies {
                if dep >= tasks.len() {
                    return Err(GeneticError::InvalidProblem(format!(
                        "Task {} depends on task {}, but only {} tasks exist",
                        idx,
                        dep,
                        tasks.len()
                    )));
                }
                if dep == idx {
                    return Err(GeneticError::InvalidProblem(format!(
                        "Task {} depends on itself",
                        idx
                    )));
                }
                if !seen.insert(dep) {
                    return Err(GeneticError::InvalidProblem(format!(
                        "Task {} lists dependency {} more than once",
                        idx, dep
                    )));
                }
            }
        }

        for (idx, resource) in resources.iter().enumerate() {
            if !resource.capacity.is_finite() || resource.capacity < 0.0 {
                return Err(GeneticError::InvalidProblem(format!(
                    "Resource {} has invalid capacity {}",
                    idx, resource.capacity
                )));
            }
        }

        if !tasks.is_empty() && resources.is_empty() {
            return Err(GeneticError::InvalidProblem(
                "Tasks were given but no resources to assign them to".to_string(),
            ));
        }

        let skill_match = tasks
            .iter()
            .flat_map(|task| {
                resources
                    .iter()
                    .map(move |resource| resource.has_skill(&task.required_skill))
            })
            .collect();

        Ok(Self {
            tasks,
            resources,
            skill_match,
        })
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// # Panics
    ///
    /// Panics if `idx` is not a task index.
    pub fn task(&self, idx: usize) -> &Task {
        &self.tasks[idx]
    }

    /// # Panics
    ///
    /// Panics if `idx` is not a resource index.
    pub fn resource(&self, idx: usize) -> &Resource {
        &self.resources[idx]
    }

    /// Whether `resource` has the skill `task` requires.
    pub fn can_perform(&self, task: usize, resource: usize) -> bool {
        self.skill_match[task * self.resources.len() + resource]
    }

    /// Total effort assigned to each resource under `genes`.
    pub fn resource_loads(&self, genes: &[usize]) -> Vec<f64> {
        let mut loads = vec![0.0; self.resources.len()];
        for (task, &resource) in self.tasks.iter().zip(genes) {
            loads[resource] += task.effort;
        }
        loads
    }

    /// Checks that `genes` has one entry per task and that every entry names
    /// an existing resource.
    pub fn check_assignment(&self, genes: &[usize]) -> Result<()> {
        if genes.len() != self.tasks.len() {
            return Err(GeneticError::InvalidAssignment(format!(
                "Expected {} genes (one per task), got {}",
                self.tasks.len(),
                genes.len()
            )));
        }

        if let Some((task, &resource)) = genes
            .iter()
            .enumerate()
            .find(|(_, &resource)| resource >= self.resources.len())
        {
            return Err(GeneticError::InvalidAssignment(format!(
                "Task {} is assigned to resource {}, but only {} resources exist",
                task,
                resource,
                self.resources.len()
            )));
        }

        Ok(())
    }

    /// Display name of a task.
    pub fn task_label(&self, idx: usize) -> String {
        self.tasks[idx]
            .name
            .clone()
            .unwrap_or_else(|| format!("Task {}", idx))
    }

    /// Display name of a resource.
    pub fn resource_label(&self, idx: usize) -> String {
        self.resources[idx]
            .name
            .clone()
            .unwrap_or_else(|| format!("Resource {}", idx))
    }
}

impl TryFrom<ProblemDefinition> for Problem {
    type Error = GeneticError;

    fn try_from(definition: ProblemDefinition) -> Result<Self> {
        Self::new(definition.tasks, definition.resources)
    }
}

impl From<Problem> for ProblemDefinition {
    fn from(problem: Problem) -> Self {
        Self {
            tasks: problem.tasks,
            resources: problem.resources,
        }
    }
}
