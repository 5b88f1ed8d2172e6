use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn constant_strategy_always_plays_its_symbol() {
    let mut rng = StdRng::seed_from_u64(11);
    for symbol in Symbol::ALL {
        let mut player = ProbabilityStrategy::constant("Constant", symbol);
        for round in 0..100 {
            assert_eq!(player.next_move(round, &mut rng).unwrap(), symbol);
            player
                .record_round(round, symbol, symbol.beats())
                .unwrap();
        }
    }
}

#[test]
fn random_strategy_plays_every_symbol() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut player = ProbabilityStrategy::random("Random");
    let mut counts = [0u32; 3];
    for round in 0..300 {
        counts[player.next_move(round, &mut rng).unwrap().idx()] += 1;
    }
    assert!(counts.iter().all(|&c| c > 50), "{counts:?}");
}

#[test]
fn weighted_strategy_respects_zero_weight() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut player =
        ProbabilityStrategy::new("Weighted", [(Symbol::Rock, 0.25), (Symbol::Paper, 0.75)])
            .unwrap();
    for round in 0..200 {
        assert_ne!(player.next_move(round, &mut rng).unwrap(), Symbol::Scissors);
    }
}

#[test]
fn map_outside_tolerance_fails_at_construction() {
    let err = ProbabilityStrategy::new(
        "Bad",
        [(Symbol::Rock, 0.5), (Symbol::Paper, 0.27), (Symbol::Scissors, 0.2)],
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidProbabilityMap { .. }));
}

#[test]
fn map_within_tolerance_is_accepted() {
    let third = 1.0 / 3.0;
    assert!(ProbabilityStrategy::new(
        "Thirds",
        [(Symbol::Rock, third), (Symbol::Paper, third), (Symbol::Scissors, third + 5e-7)],
    )
    .is_ok());
}

#[test]
fn negative_weight_is_rejected() {
    let err = ProbabilityStrategy::new("Neg", [(Symbol::Rock, 1.5), (Symbol::Paper, -0.5)])
        .unwrap_err();
    assert!(matches!(err, Error::NegativeProbability { symbol: Symbol::Paper, .. }));
}

#[test]
fn repeated_symbols_are_merged() {
    let player =
        ProbabilityStrategy::new("Merged", [(Symbol::Rock, 0.5), (Symbol::Rock, 0.5)]).unwrap();
    assert_eq!(player.weights(), &[(Symbol::Rock, 1.0)]);
}
