//! Tournament results and reporting

use serde::{Deserialize, Serialize};

use crate::match_runner::{MatchScores, OutcomeCounts};
use crate::standings::Standings;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating strategies, in roster order
    pub participants: Vec<String>,
    /// One entry per pairing, in the order they were played
    pub matches: Vec<MatchEntry>,
    /// Settings used
    pub settings: TournamentSettings,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub player1: String,
    pub player2: String,
    /// Counts from player1's perspective
    pub result1: OutcomeCounts,
    /// Counts from player2's perspective
    pub result2: OutcomeCounts,
}

impl MatchEntry {
    pub fn scores(&self) -> MatchScores {
        MatchScores::from([
            (self.player1.clone(), self.result1),
            (self.player2.clone(), self.result2),
        ])
    }
}

/// Settings recorded alongside the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub rounds_per_match: u32,
    pub seed: Option<u64>,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, settings: TournamentSettings) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            settings,
        }
    }

    /// Add a match result. Players missing from `scores` count as having played nothing.
    pub fn add_match(&mut self, player1: &str, player2: &str, scores: &MatchScores) {
        self.matches.push(MatchEntry {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result1: scores.get(player1).copied().unwrap_or_default(),
            result2: scores.get(player2).copied().unwrap_or_default(),
        });
    }

    /// Per-strategy totals over all matches
    pub fn standings(&self) -> Standings {
        let mut standings = Standings::new();
        for entry in &self.matches {
            standings.record_match(&entry.scores());
        }
        standings
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report: one block per match, then the leaderboard
    pub fn generate_report(&self) -> String {
        let width = self.participants.iter().map(String::len).max().unwrap_or(0);
        let digits = digits(self.settings.rounds_per_match);

        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Rounds per match: {}\n\n",
            self.settings.rounds_per_match
        ));

        for entry in &self.matches {
            report.push_str(&format!("*** {} vs {} ***\n", entry.player1, entry.player2));
            for (name, counts) in [(&entry.player1, &entry.result1), (&entry.player2, &entry.result2)] {
                report.push_str(&format!(
                    "\t{:width$}: Wins: {:>digits$} Losses: {:>digits$} Ties: {:>digits$}\n",
                    name, counts.wins, counts.losses, counts.ties
                ));
            }
        }

        report.push('\n');
        report.push_str(&self.standings().render());
        report
    }
}

fn digits(n: u32) -> usize {
    n.max(1).ilog10() as usize + 1
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
