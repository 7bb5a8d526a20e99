use genassign::{
    caching::{CacheType, CachingEvaluator},
    evaluation::{Evaluator, PenaltyEvaluator, PenaltyWeights},
    evolution::{EvolutionLauncher, EvolutionOptions},
    problem::{Problem, Resource, Task},
    rng::RandomNumberGenerator,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

// Counts every evaluation that reaches the wrapped evaluator
#[derive(Clone)]
struct CountingEvaluator<'p> {
    inner: PenaltyEvaluator<'p>,
    evaluations: Arc<AtomicUsize>,
}

impl<'p> CountingEvaluator<'p> {
    fn new(problem: &'p Problem) -> Self {
        Self {
            inner: PenaltyEvaluator::new(problem, PenaltyWeights::default()).unwrap(),
            evaluations: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn get_evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

impl Evaluator for CountingEvaluator<'_> {
    fn gene_count(&self) -> usize {
        self.inner.gene_count()
    }

    fn allele_count(&self) -> usize {
        self.inner.allele_count()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        self.inner.evaluate(genes)
    }
}

fn problem() -> Problem {
    Problem::new(
        vec![
            Task::new("frontend", 20.0),
            Task::new("frontend", 15.0).with_dependencies([0]),
            Task::new("backend", 30.0),
            Task::new("backend", 25.0).with_dependencies([2]),
            Task::new("QA", 8.0).with_dependencies([1, 3]),
        ],
        vec![
            Resource::new(["frontend"], 40.0),
            Resource::new(["backend"], 35.0),
            Resource::new(["frontend", "backend", "QA"], 45.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_cached_runs_match_uncached_runs() {
    let problem = problem();
    let options = EvolutionOptions::builder()
        .population_size(40)
        .num_generations(30)
        .build()
        .unwrap();

    let plain = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
    let expected = EvolutionLauncher::from_options(&plain, &options)
        .unwrap()
        .evolve(&options, &mut RandomNumberGenerator::from_seed(10))
        .unwrap();

    for cache_type in [CacheType::None, CacheType::Global, CacheType::ThreadLocal] {
        let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default())
            .unwrap()
            .with_cache(cache_type);
        let result = EvolutionLauncher::from_options(evaluator, &options)
            .unwrap()
            .evolve(&options, &mut RandomNumberGenerator::from_seed(10))
            .unwrap();

        assert_eq!(result, expected, "cache type {:?}", cache_type);
    }
}

#[test]
fn test_global_cache_skips_repeated_vectors() {
    let problem = problem();
    let counting = CountingEvaluator::new(&problem);
    let cached = counting.clone().with_global_cache();
    let options = EvolutionOptions::builder()
        .population_size(40)
        .num_generations(30)
        .build()
        .unwrap();

    let result = EvolutionLauncher::from_options(&cached, &options)
        .unwrap()
        .evolve(&options, &mut RandomNumberGenerator::from_seed(10))
        .unwrap();

    let requested: usize = result.history.iter().map(|stats| stats.evaluations).sum();

    // Only distinct vectors reach the inner evaluator
    assert_eq!(counting.get_evaluations(), cached.cache_size());
    assert!(counting.get_evaluations() < requested);
}

#[test]
fn test_thread_local_cache_under_parallel_evaluation() {
    let problem = problem();
    let counting = CountingEvaluator::new(&problem);
    let cached = counting.clone().with_thread_local_cache();
    let options = EvolutionOptions::builder()
        .population_size(64)
        .num_generations(10)
        .parallel_threshold(1)
        .build()
        .unwrap();

    let result = EvolutionLauncher::from_options(&cached, &options)
        .unwrap()
        .evolve(&options, &mut RandomNumberGenerator::from_seed(10))
        .unwrap();

    let requested: usize = result.history.iter().map(|stats| stats.evaluations).sum();
    assert!(counting.get_evaluations() <= requested);
    assert_eq!(
        result.best.fitness(),
        Some(counting.inner.evaluate(result.assignment()))
    );
}
