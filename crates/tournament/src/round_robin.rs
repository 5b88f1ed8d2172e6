//! Round-robin scheduling: every unordered pair of the roster plays one match

use std::collections::HashSet;

use rand::RngCore;
use rps_core::{pair_indices, pair_mut, Error, Result, Strategy};
use tracing::info;

use crate::match_runner::Match;
use crate::results::{TournamentResults, TournamentSettings};

/// Play every pairing of `strategies` once, in roster order.
///
/// Strategy names must be unique across the roster, otherwise the standings
/// would merge different players.
pub fn run_round_robin(
    name: &str,
    strategies: &mut [Box<dyn Strategy>],
    settings: TournamentSettings,
    rng: &mut dyn RngCore,
) -> Result<TournamentResults> {
    let mut seen = HashSet::new();
    for strategy in strategies.iter() {
        if !seen.insert(strategy.name()) {
            return Err(Error::DuplicateName(strategy.name().to_string()));
        }
    }

    let participants = strategies.iter().map(|s| s.name().to_string()).collect();
    let rounds = settings.rounds_per_match;
    let mut results = TournamentResults::new(name, participants, settings);

    for (i, j) in pair_indices(strategies.len()) {
        let (player1, player2) = pair_mut(strategies, i, j);
        let scores = Match::with_rounds(player1.as_mut(), player2.as_mut(), rounds)?.play(rng)?;
        info!(
            player1 = player1.name(),
            player2 = player2.name(),
            score = scores[player1.name()].score(),
            "match complete"
        );
        results.add_match(player1.name(), player2.name(), &scores);
    }

    Ok(results)
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;
