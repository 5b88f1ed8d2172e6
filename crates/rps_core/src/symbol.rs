use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Rock,
    Paper,
    Scissors,
}

impl Symbol {
    /// Every symbol in enumeration order. Ties between symbols resolve in this order.
    pub const ALL: [Symbol; 3] = [Symbol::Rock, Symbol::Paper, Symbol::Scissors];

    /// The symbol that defeats `self`.
    pub fn beats(self) -> Symbol {
        match self {
            Symbol::Rock => Symbol::Paper,
            Symbol::Paper => Symbol::Scissors,
            Symbol::Scissors => Symbol::Rock,
        }
    }

    /// The symbol that `self` defeats.
    pub fn beaten_by(self) -> Symbol {
        match self {
            Symbol::Rock => Symbol::Scissors,
            Symbol::Paper => Symbol::Rock,
            Symbol::Scissors => Symbol::Paper,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Symbol::Rock => 0,
            Symbol::Paper => 1,
            Symbol::Scissors => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Symbol::Rock => 'R',
            Symbol::Paper => 'P',
            Symbol::Scissors => 'S',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Symbol::Rock),
            "p" | "paper" => Ok(Symbol::Paper),
            "s" | "scissors" => Ok(Symbol::Scissors),
            _ => Err(Error::UnknownSymbol(s.to_string())),
        }
    }
}

/// Result of a round from the acting player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Tie, Outcome::Lose];

    /// The same round seen from the other player's side.
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Tie => Outcome::Tie,
            Outcome::Lose => Outcome::Win,
        }
    }

    pub fn score(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Tie => 0,
            Outcome::Lose => -1,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Outcome::Win => 0,
            Outcome::Tie => 1,
            Outcome::Lose => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Tie => "tie",
            Outcome::Lose => "lose",
        };
        f.write_str(s)
    }
}

/// Outcome of playing `a` against `b`, from the point of view of `a`.
pub fn compare(a: Symbol, b: Symbol) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a == b.beats() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Uniformly random symbol drawn from `rng`.
pub fn random_symbol(rng: &mut dyn RngCore) -> Symbol {
    Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())]
}

#[cfg(test)]
#[path = "symbol_tests.rs"]
mod symbol_tests;
