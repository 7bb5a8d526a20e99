#![cfg(feature = "serde")]

use genassign::{
    breeding::OrdinaryStrategy,
    evaluation::{PenaltyEvaluator, PenaltyWeights},
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel},
    individual::Individual,
    operators::UniformIntMutation,
    problem::Problem,
    report::AssignmentReport,
    rng::RandomNumberGenerator,
};

const TEAM: &str = r#"{
    "tasks": [
        { "name": "T1", "required_skill": "frontend", "effort": 20 },
        { "name": "T2", "required_skill": "frontend", "effort": 15, "dependencies": [0] },
        { "name": "T3", "required_skill": "backend", "effort": 30 },
        { "name": "T4", "required_skill": "backend", "effort": 25, "dependencies": [2] }
    ],
    "resources": [
        { "name": "Developer 0", "skills": ["frontend"], "capacity": 40 },
        { "name": "Developer 1", "skills": ["backend"], "capacity": 35 },
        { "name": "Developer 2", "skills": ["frontend", "backend"], "capacity": 45 }
    ]
}"#;

#[test]
fn test_problem_from_json() {
    let problem: Problem = serde_json::from_str(TEAM).unwrap();

    assert_eq!(problem.num_tasks(), 4);
    assert_eq!(problem.num_resources(), 3);
    assert_eq!(problem.task(1).dependencies, vec![0]);
    assert!(problem.task(0).dependencies.is_empty());
    assert!(problem.can_perform(3, 2));
    assert!(!problem.can_perform(3, 0));
}

#[test]
fn test_invalid_problem_json_is_rejected() {
    let self_dependent = r#"{
        "tasks": [{ "required_skill": "A", "effort": 1, "dependencies": [0] }],
        "resources": [{ "skills": ["A"], "capacity": 1 }]
    }"#;

    let result: Result<Problem, _> = serde_json::from_str(self_dependent);
    let err = result.unwrap_err().to_string();

    assert!(err.contains("Invalid problem definition"));
}

#[test]
fn test_problem_json_roundtrip_keeps_skill_table() {
    let problem: Problem = serde_json::from_str(TEAM).unwrap();
    let json = serde_json::to_string(&problem).unwrap();
    let restored: Problem = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.tasks(), problem.tasks());
    assert_eq!(restored.resources(), problem.resources());
    assert!(!json.contains("skill_match"));
}

#[test]
fn test_options_and_results_serialize() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(10)
        .log_level(LogLevel::Minimal)
        .build()
        .unwrap();
    let json = serde_json::to_string(&options).unwrap();
    let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);

    let problem: Problem = serde_json::from_str(TEAM).unwrap();
    let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default()).unwrap();
    let result = EvolutionLauncher::from_options(&evaluator, &options)
        .unwrap()
        .evolve(&options, &mut RandomNumberGenerator::from_seed(1))
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: EvolutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.best.genes(), result.best.genes());
    assert_eq!(restored.score, result.score);
    assert!(!restored.best.is_evaluated());
    assert_eq!(restored.termination, result.termination);
    assert_eq!(restored.history.len(), result.history.len());

    let report = AssignmentReport::new(&evaluator, result.assignment()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["assignments"].as_array().unwrap().len(), 4);
}

#[test]
fn test_mutation_rate_is_validated_on_load() {
    let mutation: UniformIntMutation = serde_json::from_str(r#"{"gene_rate":0.25}"#).unwrap();
    assert_eq!(mutation.gene_rate(), 0.25);

    for invalid in [r#"{"gene_rate":1.5}"#, r#"{"gene_rate":-0.1}"#] {
        let result: Result<UniformIntMutation, _> = serde_json::from_str(invalid);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Per-gene mutation rate"), "{}", err);
    }

    let strategy: Result<OrdinaryStrategy, _> =
        serde_json::from_str(r#"{"crossover":null,"mutation":{"gene_rate":1.5}}"#);
    assert!(strategy.is_err());

    let default_strategy: OrdinaryStrategy = OrdinaryStrategy::default();
    let json = serde_json::to_string(&default_strategy).unwrap();
    let strategy: OrdinaryStrategy = serde_json::from_str(&json).unwrap();
    assert_eq!(strategy.mutation().gene_rate(), 0.1);
}

#[test]
fn test_individual_loads_unevaluated() {
    let mut individual = Individual::new(vec![2, 0, 1]);
    individual.set_fitness(150.0);

    let json = serde_json::to_string(&individual).unwrap();
    assert!(json.contains("150"));

    let restored: Individual = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.genes(), &[2, 0, 1]);
    assert_eq!(restored.fitness(), None);

    let edited: Individual = serde_json::from_str(r#"{"genes":[0,0],"fitness":0.0}"#).unwrap();
    assert!(!edited.is_evaluated());
}
