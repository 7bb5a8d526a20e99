use std::sync::{atomic::AtomicBool, Arc};

use crate::{
    breeding::BreedStrategy,
    error::{GeneticError, Result},
    evaluation::Evaluator,
    selection::SelectionStrategy,
};

use super::EvolutionLauncher;

/// Assembles an [`EvolutionLauncher`] from explicitly chosen parts.
///
/// ```rust
/// use genassign::breeding::OrdinaryStrategy;
/// use genassign::evaluation::{PenaltyEvaluator, PenaltyWeights};
/// use genassign::evolution::EvolutionLauncherBuilder;
/// use genassign::operators::{TwoPointCrossover, UniformIntMutation};
/// use genassign::problem::{Problem, Resource, Task};
/// use genassign::selection::TournamentSelection;
///
/// let problem = Problem::new(
///     vec![Task::new("A", 4.0)],
///     vec![Resource::new(["A"], 8.0)],
/// )
/// .unwrap();
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_evaluator(PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap())
///     .with_selection_strategy(TournamentSelection::new(5).unwrap())
///     .with_breed_strategy(OrdinaryStrategy::new(
///         TwoPointCrossover::new(),
///         UniformIntMutation::new(0.2).unwrap(),
///     ))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct EvolutionLauncherBuilder<E, S, B> {
    evaluator: Option<E>,
    selection_strategy: Option<S>,
    breed_strategy: Option<B>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<E, S, B> EvolutionLauncherBuilder<E, S, B>
where
    E: Evaluator,
    S: SelectionStrategy,
    B: BreedStrategy,
{
    pub fn new() -> Self {
        Self {
            evaluator: None,
            selection_strategy: None,
            breed_strategy: None,
            cancel: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: E) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<E, S, B>> {
        let evaluator = self
            .evaluator
            .ok_or_else(|| GeneticError::Configuration("Evaluator not specified".to_string()))?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let launcher = EvolutionLauncher::new(evaluator, selection_strategy, breed_strategy);

        Ok(match self.cancel {
            Some(flag) => launcher.with_cancellation(flag),
            None => launcher,
        })
    }
}

impl<E, S, B> Default for EvolutionLauncherBuilder<E, S, B>
where
    E: Evaluator,
    S: SelectionStrategy,
    B: BreedStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}
