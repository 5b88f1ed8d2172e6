use super::*;
use assert_approx_eq::assert_approx_eq;
use basic_strategies::{PatternStrategy, ProbabilityStrategy};
use markov_strategies::MarkovChainStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_core::Outcome;
use rps_core::Symbol::*;

fn constants(symbols: &[Symbol]) -> Vec<Box<dyn Strategy>> {
    symbols
        .iter()
        .map(|&s| Box::new(ProbabilityStrategy::constant(format!("{s}"), s)) as Box<dyn Strategy>)
        .collect()
}

fn play_round(ensemble: &mut EnsembleStrategy, round: u32, opponent: Symbol, rng: &mut StdRng) -> Symbol {
    let own = ensemble.next_move(round, rng).unwrap();
    ensemble.record_round(round, own, opponent).unwrap();
    own
}

#[test]
fn normalize_sums_to_one() {
    let probabilities = normalize([0.25, 0.5, 0.125]);
    assert_approx_eq!(probabilities.iter().sum::<f64>(), 1.0, 1e-9);
    assert_approx_eq!(probabilities[1], 0.5 / 0.875, 1e-9);
}

#[test]
fn normalize_zero_total_is_undetermined() {
    assert_eq!(normalize([0.0; 3]), [UNDETERMINED_PROBABILITY; 3]);
}

#[test]
fn most_likely_breaks_ties_in_enumeration_order() {
    assert_eq!(most_likely(&[0.5, 0.5, 0.5]), Rock);
    assert_eq!(most_likely(&[0.2, 0.4, 0.4]), Paper);
    assert_eq!(most_likely(&[0.1, 0.2, 0.7]), Scissors);
}

#[test]
fn score_guesses_accumulates_per_symbol() {
    let fresh = StrategyConfidence {
        strategy: 0.5,
        symbol: [0.5; 3],
    };
    let sure = StrategyConfidence {
        strategy: 1.0,
        symbol: [0.0, 1.0, 0.0],
    };
    let scores = score_guesses(&[(Rock, fresh), (Paper, sure), (Rock, fresh)]);
    assert_eq!(scores, [0.5, 1.0, 0.0]);
}

#[test]
fn deterministic_ensemble_follows_winning_strategy() {
    let mut rng = StdRng::seed_from_u64(71);
    let mut ensemble = EnsembleStrategy::new("Ensemble", constants(&[Rock, Paper]), true).unwrap();

    // No evidence yet: equal scores resolve to Rock
    assert_eq!(play_round(&mut ensemble, 0, Rock, &mut rng), Rock);

    // Rock tied, Paper won: only Paper carries weight now
    assert_eq!(play_round(&mut ensemble, 1, Rock, &mut rng), Paper);
    let probabilities = ensemble.symbol_probabilities();
    assert_approx_eq!(probabilities[Paper.idx()], 1.0, 1e-9);
    assert_approx_eq!(probabilities.iter().sum::<f64>(), 1.0, 1e-9);
}

#[test]
fn deterministic_selection_is_stable() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ensemble =
            EnsembleStrategy::new("Ensemble", constants(&[Rock, Paper, Scissors]), true).unwrap();
        (0..20)
            .map(|round| play_round(&mut ensemble, round, Scissors, &mut rng))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(1), run(2));
}

#[test]
fn stochastic_ensemble_only_plays_supported_symbols() {
    let mut rng = StdRng::seed_from_u64(72);
    let mut ensemble = EnsembleStrategy::new("Ensemble", constants(&[Paper]), false).unwrap();
    for round in 0..50 {
        assert_eq!(play_round(&mut ensemble, round, Rock, &mut rng), Paper);
    }
}

#[test]
fn sub_strategies_see_their_own_guesses() {
    let mut rng = StdRng::seed_from_u64(73);
    let mut ensemble = EnsembleStrategy::new("Ensemble", constants(&[Rock, Scissors]), true).unwrap();
    for round in 0..4 {
        play_round(&mut ensemble, round, Paper, &mut rng);
    }

    let records = ensemble.records();
    assert_eq!(records[0].count(Outcome::Lose, Rock), 4);
    assert_eq!(records[0].count(Outcome::Win, Rock), 0);
    assert_eq!(records[1].count(Outcome::Win, Scissors), 4);
    assert_eq!(records[1].confidence().strategy, 1.0);
    assert_eq!(records[0].confidence().strategy, 0.0);
}

#[test]
fn markov_sub_strategy_is_trained_through_the_ensemble() {
    let mut rng = StdRng::seed_from_u64(74);
    let markov: Box<dyn Strategy> = Box::new(MarkovChainStrategy::new("1-Markov", 1).unwrap());
    let mut ensemble = EnsembleStrategy::new("Ensemble", vec![markov], true).unwrap();
    for round in 0..10 {
        play_round(&mut ensemble, round, Scissors, &mut rng);
    }
    assert_eq!(ensemble.next_move(10, &mut rng).unwrap(), Rock);
}

#[test]
fn recording_without_a_guess_is_fatal() {
    let mut ensemble = EnsembleStrategy::new("Ensemble", constants(&[Rock]), true).unwrap();
    let err = ensemble.record_round(0, Rock, Rock).unwrap_err();
    assert_eq!(
        err,
        Error::MissingGuess {
            name: "Ensemble".to_string(),
            round: 0,
            index: 0,
        }
    );
}

#[test]
fn recording_twice_is_fatal() {
    let mut rng = StdRng::seed_from_u64(75);
    let mut ensemble = EnsembleStrategy::new("Ensemble", constants(&[Rock]), true).unwrap();
    play_round(&mut ensemble, 0, Rock, &mut rng);
    assert!(ensemble.record_round(0, Rock, Rock).is_err());
}

#[test]
fn reset_clears_records_and_sub_strategies() {
    let mut rng = StdRng::seed_from_u64(76);
    let pattern: Box<dyn Strategy> =
        Box::new(PatternStrategy::new("PS", vec![Paper, Scissors]).unwrap());
    let mut ensemble = EnsembleStrategy::new("Ensemble", vec![pattern], true).unwrap();
    play_round(&mut ensemble, 0, Rock, &mut rng);

    ensemble.reset();
    assert_eq!(ensemble.records()[0].confidence().strategy, 0.5);
    assert_eq!(ensemble.symbol_probabilities(), [UNDETERMINED_PROBABILITY; 3]);
    // The pattern rewound, so the first guess is Paper again
    assert_eq!(ensemble.next_move(0, &mut rng).unwrap(), Paper);
}

#[test]
fn empty_ensemble_is_rejected() {
    let err = EnsembleStrategy::new("Empty", Vec::new(), true).err().unwrap();
    assert_eq!(err, Error::EmptyEnsemble("Empty".to_string()));
}
