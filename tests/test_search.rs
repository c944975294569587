use std::sync::{Arc, Mutex};
use std::time::Duration;

use genword::{
    candidate::Candidate,
    error::GeneticError,
    evolution::{
        DegenerateSelectionPolicy, EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult,
        ExhaustionReason, LogLevel,
    },
    rng::RandomNumberGenerator,
    target::{Dictionary, DictionaryTarget, FnTarget, RandomTarget, Target, TargetSupplier},
};

fn options(word_length: usize, population_size: usize, threshold: usize) -> EvolutionOptions {
    EvolutionOptions::builder()
        .word_length(word_length)
        .population_size(population_size)
        .selection_threshold(threshold)
        .log_level(LogLevel::None)
        .build()
        .unwrap()
}

#[test]
fn test_dictionary_word_in_seed_is_found_at_generation_zero() {
    let mut dictionary = Dictionary::new();
    dictionary.insert(3, "cat").unwrap();
    let launcher = EvolutionLauncherBuilder::new()
        .with_dictionary(dictionary)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let seed = vec![Candidate::new("dog").unwrap(), Candidate::new("cat").unwrap()];

    let result = launcher
        .evolve_from(&options(3, 10, 1), seed, &mut rng)
        .unwrap();

    match result {
        EvolutionResult::Solved {
            solution,
            generation,
        } => {
            assert_eq!(solution.value(), "cat");
            assert_eq!(solution.score(), 3);
            assert!(solution.is_solution());
            assert_eq!(generation, 0);
        }
        other => panic!("Expected a solution, got {:?}", other),
    }
}

#[test]
fn test_random_four_letter_target_is_found_or_budget_reported() {
    let drawn: Arc<Mutex<Option<Target>>> = Arc::new(Mutex::new(None));
    let recorder = Arc::clone(&drawn);
    let launcher = EvolutionLauncherBuilder::new()
        .with_target_supplier(FnTarget(
            move |length: usize, rng: &mut RandomNumberGenerator| {
                let target = Target::random(length, rng);
                *recorder.lock().unwrap() = Some(target.clone());
                Ok::<_, GeneticError>(target)
            },
        ))
        .build();
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let mut options = options(4, 10, 1);
    options.set_max_generations(20_000);

    let result = launcher.evolve(&options, &mut rng).unwrap();
    let target = drawn.lock().unwrap().clone().unwrap();
    assert_eq!(target.len(), 4);

    match result {
        EvolutionResult::Solved { solution, .. } => assert_eq!(solution.value(), target.as_str()),
        EvolutionResult::Exhausted {
            best,
            generations,
            reason,
        } => {
            assert_eq!(generations, 20_000);
            assert_eq!(reason, ExhaustionReason::Generations);
            assert!(best.score() < 4);
        }
    }
}

#[test]
fn test_seeded_target_is_the_first_draw() {
    let recorded: Arc<Mutex<Option<Target>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&recorded);
    let launcher = EvolutionLauncherBuilder::new()
        .with_target_supplier(FnTarget(
            move |length: usize, rng: &mut RandomNumberGenerator| {
                let target = DictionaryTarget::default().supply(length, rng)?;
                *sink.lock().unwrap() = Some(target.clone());
                Ok::<_, GeneticError>(target)
            },
        ))
        .build();
    let mut rng = RandomNumberGenerator::from_seed(77);
    let mut options = options(4, 10, 1);
    options.set_max_generations(5);

    launcher.evolve(&options, &mut rng).unwrap();

    let expected = Target::random(4, &mut RandomNumberGenerator::from_seed(77));
    let recorded = recorded.lock().unwrap().clone().expect("supplier was not called");
    assert_eq!(recorded, expected);
}

#[test]
fn test_unreachable_threshold_keeps_population_size() {
    let launcher = EvolutionLauncherBuilder::new()
        .with_target_supplier(RandomTarget)
        .build();
    let target = Target::new("wxyz", 4).unwrap();
    let words = [
        "abcd", "efgh", "ijkl", "mnop", "qrst", "abce", "efgi", "ijkm", "mnoq", "qrsu",
    ];

    for policy in [
        DegenerateSelectionPolicy::RelaxThreshold,
        DegenerateSelectionPolicy::Backfill,
    ] {
        let options = EvolutionOptions::builder()
            .word_length(4)
            .population_size(10)
            .selection_threshold(4)
            .degenerate_policy(policy)
            .log_level(LogLevel::None)
            .build()
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut population: Vec<Candidate> =
            words.iter().map(|w| Candidate::new(w).unwrap()).collect();

        launcher.evaluate(&options, &target, &mut population).unwrap();
        assert!(population.iter().all(|c| c.score() < 4));

        let next = launcher
            .next_generation(&options, &mut population, 0, &mut rng)
            .unwrap();
        assert_eq!(next.len(), 10, "policy {:?}", policy);
        assert!(next.iter().all(|c| c.len() == 4));
    }
}

#[test]
fn test_population_size_is_constant_across_generations() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let target = Target::new("house", 5).unwrap();
    let options = options(5, 13, 2);
    let mut rng = RandomNumberGenerator::from_seed(8);
    let mut population: Vec<Candidate> = (0..13)
        .map(|_| Candidate::new(&Target::random(5, &mut rng).to_string()).unwrap())
        .collect();

    for generation in 0..50 {
        launcher.evaluate(&options, &target, &mut population).unwrap();
        population = launcher
            .next_generation(&options, &mut population, generation, &mut rng)
            .unwrap();
        assert_eq!(population.len(), 13);
    }
}

#[test]
fn test_short_words_terminate() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let mut options = options(2, 20, 1);
    options.set_max_generations(500);

    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = launcher.evolve(&options, &mut rng).unwrap();
        if let EvolutionResult::Exhausted { generations, .. } = result {
            assert_eq!(generations, 500);
        }
    }
}

#[test]
fn test_time_budget_stops_hopeless_search() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let options = EvolutionOptions::builder()
        .word_length(30)
        .population_size(8)
        .selection_threshold(30)
        .degenerate_policy(DegenerateSelectionPolicy::Backfill)
        .max_generations(usize::MAX)
        .time_budget(Duration::from_millis(50))
        .log_level(LogLevel::None)
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(13);

    match launcher.evolve(&options, &mut rng).unwrap() {
        EvolutionResult::Exhausted { best, reason, .. } => {
            assert_eq!(reason, ExhaustionReason::Time);
            assert_eq!(best.len(), 30);
        }
        other => panic!("Expected exhaustion, got {:?}", other),
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let mut options = options(5, 30, 1);
    options.set_max_generations(300);

    let first = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();
    let second = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let sequential = options(6, 64, 2);
    let parallel = EvolutionOptions::builder()
        .word_length(6)
        .population_size(64)
        .selection_threshold(2)
        .parallel_threshold(1)
        .max_generations(sequential.get_max_generations())
        .log_level(LogLevel::None)
        .build()
        .unwrap();

    let first = launcher
        .evolve(&sequential, &mut RandomNumberGenerator::from_seed(31))
        .unwrap();
    let second = launcher
        .evolve(&parallel, &mut RandomNumberGenerator::from_seed(31))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_options_fail_before_search() {
    let launcher = EvolutionLauncherBuilder::new().build();
    let mut rng = RandomNumberGenerator::new();

    let result = launcher.evolve(&EvolutionOptions::new(0, 10, 0), &mut rng);
    match result {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Word length")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_target_with_wrong_length_is_rejected() {
    let launcher = EvolutionLauncherBuilder::new()
        .with_target_supplier(FnTarget(|_: usize, _: &mut RandomNumberGenerator| {
            Target::new("toolong", 7)
        }))
        .build();
    let mut rng = RandomNumberGenerator::new();

    assert!(matches!(
        launcher.evolve(&options(3, 5, 1), &mut rng),
        Err(GeneticError::InvalidGenomeLength {
            expected: 3,
            actual: 7
        })
    ));
}
