use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genassign::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    evaluation::{PenaltyEvaluator, PenaltyWeights},
    evolution::{EvolutionLauncher, EvolutionOptions},
    individual::Individual,
    operators::{TwoPointCrossover, UniformIntMutation},
    problem::{Problem, Resource, Task},
    rng::RandomNumberGenerator,
};

fn team_problem(num_tasks: usize) -> Problem {
    let skills = ["frontend", "backend", "full-stack", "QA"];

    let tasks = (0..num_tasks)
        .map(|i| {
            Task::new(skills[i % skills.len()], 8.0 + (i % 5) as f64 * 4.0)
                .with_dependencies(i.checked_sub(2))
        })
        .collect();
    let resources = (0..(num_tasks / 3).max(4))
        .map(|r| {
            Resource::new(
                [skills[r % skills.len()], skills[(r + 1) % skills.len()]],
                40.0,
            )
        })
        .collect();

    Problem::new(tasks, resources).unwrap()
}

fn bench_breeding(c: &mut Criterion) {
    let strategy = OrdinaryStrategy::new(TwoPointCrossover::new(), UniformIntMutation::default());
    let options = EvolutionOptions::default();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("ordinary_breeding");
    for size in [10, 100, 1000].iter() {
        let pool: Vec<Individual> = (0..*size)
            .map(|_| Individual::random(50, 10, &mut rng))
            .collect();

        group.bench_function(&format!("ordinary_breeding_{}", size), |b| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(pool.clone()),
                    10,
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    group.sample_size(10);

    for (num_tasks, population_size, parallel_threshold) in
        [(10, 50, 1000), (100, 200, 1000), (100, 2000, 1000), (100, 2000, usize::MAX)]
    {
        let problem = team_problem(num_tasks);
        let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
        let options = EvolutionOptions::builder()
            .population_size(population_size)
            .num_generations(20)
            .parallel_threshold(parallel_threshold)
            .build()
            .unwrap();
        let launcher = EvolutionLauncher::from_options(&evaluator, &options).unwrap();
        let mode = if parallel_threshold == usize::MAX {
            "sequential"
        } else {
            "default"
        };

        group.bench_function(
            &format!("evolve_{}_tasks_{}_pop_{}", num_tasks, population_size, mode),
            |b| {
                b.iter(|| {
                    let mut rng = RandomNumberGenerator::from_seed(7);
                    let result = launcher.evolve(black_box(&options), &mut rng);
                    assert!(result.is_ok());
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_breeding, bench_evolve);
criterion_main!(benches);
