use rand::RngCore;
use rps_core::{Error, Result, Strategy, Symbol};

/// Plays a fixed sequence of symbols over and over.
///
/// The position advances on every call to `next_move`, independent of the
/// round number, so the cycle restarts only on `reset`.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    name: String,
    pattern: Vec<Symbol>,
    position: usize,
}

impl PatternStrategy {
    pub fn new(name: impl Into<String>, pattern: Vec<Symbol>) -> Result<Self> {
        let name = name.into();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern(name));
        }
        Ok(Self {
            name,
            pattern,
            position: 0,
        })
    }

    pub fn pattern(&self) -> &[Symbol] {
        &self.pattern
    }
}

impl Strategy for PatternStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.position = 0;
    }

    fn next_move(&mut self, _round_number: u32, _rng: &mut dyn RngCore) -> Result<Symbol> {
        let symbol = self.pattern[self.position];
        self.position = (self.position + 1) % self.pattern.len();
        Ok(symbol)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod pattern_tests;
