//! Per-strategy totals aggregated over every match of a tournament

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::match_runner::{MatchScores, OutcomeCounts};

/// Running totals for one strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyTotals {
    /// Number of matches played
    pub matches: u32,
    /// Outcome counts summed over every round of every match
    pub outcomes: OutcomeCounts,
}

/// Aggregated statistics for every strategy that played
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    pub totals: HashMap<String, StrategyTotals>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the scores of one match into the totals
    pub fn record_match(&mut self, scores: &MatchScores) {
        for (name, counts) in scores {
            let totals = self.totals.entry(name.clone()).or_default();
            totals.matches += 1;
            totals.outcomes.merge(counts);
        }
    }

    pub fn get(&self, name: &str) -> Option<&StrategyTotals> {
        self.totals.get(name)
    }

    /// Strategies sorted by score (best first), ties broken by name
    pub fn leaderboard(&self) -> Vec<(String, StrategyTotals)> {
        let mut entries: Vec<_> = self
            .totals
            .iter()
            .map(|(name, totals)| (name.clone(), *totals))
            .collect();
        entries.sort_by(|a, b| {
            b.1.outcomes
                .score()
                .partial_cmp(&a.1.outcomes.score())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries
    }

    /// Render the leaderboard as a text table
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Strategy Leaderboard ===\n");
        out.push_str(&format!(
            "{:<30} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
            "Strategy", "Score", "Matches", "Wins", "Losses", "Ties"
        ));
        out.push_str(&"-".repeat(76));
        out.push('\n');
        for (name, totals) in self.leaderboard() {
            out.push_str(&format!(
                "{:<30} {:>7.1}% {:>8} {:>8} {:>8} {:>8}\n",
                name,
                totals.outcomes.score() * 100.0,
                totals.matches,
                totals.outcomes.wins,
                totals.outcomes.losses,
                totals.outcomes.ties
            ));
        }
        out
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
