use rand::RngCore;
use rps_core::{random_symbol, Result, Strategy, Symbol};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How a [`PreviousMoveStrategy`] responds to the opponent's last symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Play the symbol that would have beaten the opponent's last move
    BeatPrevious,
    /// Play the symbol the opponent's last move would have beaten
    BeatenByPrevious,
}

impl Reaction {
    pub fn apply(self, previous: Symbol) -> Symbol {
        match self {
            Reaction::BeatPrevious => previous.beats(),
            Reaction::BeatenByPrevious => previous.beaten_by(),
        }
    }
}

/// A strategy whose move is a fixed function of the opponent's previous move.
#[derive(Debug, Clone)]
pub struct PreviousMoveStrategy {
    name: String,
    reaction: Reaction,
    previous: Option<Symbol>,
}

impl PreviousMoveStrategy {
    pub fn new(name: impl Into<String>, reaction: Reaction) -> Self {
        Self {
            name: name.into(),
            reaction,
            previous: None,
        }
    }

    pub fn beat_previous(name: impl Into<String>) -> Self {
        Self::new(name, Reaction::BeatPrevious)
    }

    pub fn beaten_by_previous(name: impl Into<String>) -> Self {
        Self::new(name, Reaction::BeatenByPrevious)
    }
}

impl Strategy for PreviousMoveStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.previous = None;
    }

    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        Ok(match self.previous {
            Some(previous) => self.reaction.apply(previous),
            None => {
                trace!(strategy = %self.name, round = round_number, "no previous move, playing randomly");
                random_symbol(rng)
            }
        })
    }

    fn record_round(&mut self, _round_number: u32, _own: Symbol, opponent: Symbol) -> Result<()> {
        self.previous = Some(opponent);
        Ok(())
    }
}

#[cfg(test)]
#[path = "previous_move_tests.rs"]
mod previous_move_tests;
