//! Match runner for playing rounds between two strategies

use std::collections::HashMap;

use rand::RngCore;
use rps_core::{compare, Error, Outcome, Result, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Number of rounds played when a match is created without an explicit count
pub const DEFAULT_ROUNDS: u32 = 1000;

/// Outcome counts for one player over a match (or several)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl OutcomeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
            Outcome::Tie => self.ties,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Score from this player's perspective (1 for win, 0.5 for tie, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / total
    }

    /// The same counts seen from the opponent's side
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            ties: self.ties,
        }
    }

    pub fn merge(&mut self, other: &OutcomeCounts) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }
}

/// Outcome counts of a finished match, keyed by player name
pub type MatchScores = HashMap<String, OutcomeCounts>;

/// A pairing of two strategies over a fixed number of rounds.
///
/// The match keeps no results of its own; every call to [`Match::play`]
/// resets both players and returns fresh counts.
pub struct Match<'a> {
    player1: &'a mut dyn Strategy,
    player2: &'a mut dyn Strategy,
    rounds: u32,
}

impl<'a> Match<'a> {
    /// Create a match of [`DEFAULT_ROUNDS`] rounds
    pub fn new(player1: &'a mut dyn Strategy, player2: &'a mut dyn Strategy) -> Result<Self> {
        Self::with_rounds(player1, player2, DEFAULT_ROUNDS)
    }

    /// Create a match of `rounds` rounds. Players must have distinct names.
    pub fn with_rounds(
        player1: &'a mut dyn Strategy,
        player2: &'a mut dyn Strategy,
        rounds: u32,
    ) -> Result<Self> {
        if player1.name() == player2.name() {
            return Err(Error::DuplicateName(player1.name().to_string()));
        }
        Ok(Self {
            player1,
            player2,
            rounds,
        })
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Play every round and return the scores for both players by name
    pub fn play(&mut self, rng: &mut dyn RngCore) -> Result<MatchScores> {
        self.player1.reset();
        self.player2.reset();
        debug!(
            player1 = self.player1.name(),
            player2 = self.player2.name(),
            rounds = self.rounds,
            "starting match"
        );

        let mut p1_scores = OutcomeCounts::new();
        let mut p2_scores = OutcomeCounts::new();

        for round in 0..self.rounds {
            let move1 = self.player1.next_move(round, rng)?;
            let move2 = self.player2.next_move(round, rng)?;
            self.player1.record_round(round, move1, move2)?;
            self.player2.record_round(round, move2, move1)?;

            let outcome1 = compare(move1, move2);
            let outcome2 = compare(move2, move1);
            trace!(round, %move1, %move2, %outcome1, "round played");

            p1_scores.record(outcome1);
            p2_scores.record(outcome2);
        }

        debug!(
            player1 = self.player1.name(),
            wins = p1_scores.wins,
            losses = p1_scores.losses,
            ties = p1_scores.ties,
            "match finished"
        );

        let mut scores = MatchScores::with_capacity(2);
        scores.insert(self.player1.name().to_string(), p1_scores);
        scores.insert(self.player2.name().to_string(), p2_scores);
        Ok(scores)
    }
}

/// Quick utility to play a single match between two strategies
pub fn quick_match(
    player1: &mut dyn Strategy,
    player2: &mut dyn Strategy,
    rounds: u32,
    rng: &mut dyn RngCore,
) -> Result<MatchScores> {
    Match::with_rounds(player1, player2, rounds)?.play(rng)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
