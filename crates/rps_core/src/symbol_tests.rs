use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_beats_table() {
    assert_eq!(Symbol::Rock.beats(), Symbol::Paper);
    assert_eq!(Symbol::Paper.beats(), Symbol::Scissors);
    assert_eq!(Symbol::Scissors.beats(), Symbol::Rock);
}

#[test]
fn test_beats_and_beaten_by_are_inverse() {
    for s in Symbol::ALL {
        assert_eq!(s.beaten_by().beats(), s);
        assert_eq!(s.beats().beaten_by(), s);
    }
}

#[test]
fn test_compare_canonical_table() {
    use Outcome::*;
    use Symbol::*;
    let table = [
        (Rock, Rock, Tie),
        (Rock, Paper, Lose),
        (Rock, Scissors, Win),
        (Paper, Rock, Win),
        (Paper, Paper, Tie),
        (Paper, Scissors, Lose),
        (Scissors, Rock, Lose),
        (Scissors, Paper, Win),
        (Scissors, Scissors, Tie),
    ];
    for (a, b, expected) in table {
        assert_eq!(compare(a, b), expected, "{a} vs {b}");
    }
}

#[test]
fn test_compare_is_complementary() {
    for a in Symbol::ALL {
        for b in Symbol::ALL {
            assert_eq!(compare(a, b), compare(b, a).reverse());
            assert_eq!(compare(a, b) == Outcome::Tie, a == b);
        }
    }
}

#[test]
fn test_random_symbol_covers_all() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 3];
    for _ in 0..100 {
        seen[random_symbol(&mut rng).idx()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_parse_symbol() {
    assert_eq!("R".parse::<Symbol>().unwrap(), Symbol::Rock);
    assert_eq!("paper".parse::<Symbol>().unwrap(), Symbol::Paper);
    assert_eq!("Scissors".parse::<Symbol>().unwrap(), Symbol::Scissors);
    assert!("lizard".parse::<Symbol>().is_err());
}

#[test]
fn test_outcome_score() {
    assert_eq!(Outcome::Win.score(), 1);
    assert_eq!(Outcome::Tie.score(), 0);
    assert_eq!(Outcome::Lose.score(), -1);
}
