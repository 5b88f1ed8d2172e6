//! Roster configuration: which strategies enter a tournament and how they are built

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use basic_strategies::{PatternStrategy, PreviousMoveStrategy, ProbabilityStrategy, Reaction};
use ensemble_strategy::EnsembleStrategy;
use markov_strategies::{DoubleMarkovChainStrategy, MarkovChainStrategy};
use rps_core::{Strategy, Symbol};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::match_runner::DEFAULT_ROUNDS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Strategy(#[from] rps_core::Error),
}

/// One roster entry. The `kind` field selects the strategy variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Random {
        name: String,
    },
    Constant {
        name: String,
        symbol: Symbol,
    },
    /// Symbol names (`rock`, `paper`, `scissors`) mapped to probabilities
    Weighted {
        name: String,
        weights: BTreeMap<String, f64>,
    },
    Pattern {
        name: String,
        pattern: Vec<Symbol>,
    },
    BeatPrevious {
        name: String,
    },
    BeatenByPrevious {
        name: String,
    },
    Markov {
        name: String,
        chain_length: usize,
    },
    DoubleMarkov {
        name: String,
        chain_length: usize,
    },
    Ensemble {
        name: String,
        #[serde(default)]
        deterministic: bool,
        strategies: Vec<StrategyConfig>,
    },
}

impl StrategyConfig {
    pub fn name(&self) -> &str {
        match self {
            StrategyConfig::Random { name }
            | StrategyConfig::Constant { name, .. }
            | StrategyConfig::Weighted { name, .. }
            | StrategyConfig::Pattern { name, .. }
            | StrategyConfig::BeatPrevious { name }
            | StrategyConfig::BeatenByPrevious { name }
            | StrategyConfig::Markov { name, .. }
            | StrategyConfig::DoubleMarkov { name, .. }
            | StrategyConfig::Ensemble { name, .. } => name,
        }
    }

    /// Construct the strategy, surfacing configuration faults
    pub fn build(&self) -> rps_core::Result<Box<dyn Strategy>> {
        let strategy: Box<dyn Strategy> = match self {
            StrategyConfig::Random { name } => Box::new(ProbabilityStrategy::random(name.as_str())),
            StrategyConfig::Constant { name, symbol } => {
                Box::new(ProbabilityStrategy::constant(name.as_str(), *symbol))
            }
            StrategyConfig::Weighted { name, weights } => {
                let weights = weights
                    .iter()
                    .map(|(symbol, weight)| symbol.parse::<Symbol>().map(|s| (s, *weight)))
                    .collect::<rps_core::Result<Vec<_>>>()?;
                Box::new(ProbabilityStrategy::new(name.as_str(), weights)?)
            }
            StrategyConfig::Pattern { name, pattern } => {
                Box::new(PatternStrategy::new(name.as_str(), pattern.clone())?)
            }
            StrategyConfig::BeatPrevious { name } => {
                Box::new(PreviousMoveStrategy::new(name.as_str(), Reaction::BeatPrevious))
            }
            StrategyConfig::BeatenByPrevious { name } => {
                Box::new(PreviousMoveStrategy::new(name.as_str(), Reaction::BeatenByPrevious))
            }
            StrategyConfig::Markov { name, chain_length } => {
                Box::new(MarkovChainStrategy::new(name.as_str(), *chain_length)?)
            }
            StrategyConfig::DoubleMarkov { name, chain_length } => {
                Box::new(DoubleMarkovChainStrategy::new(name.as_str(), *chain_length)?)
            }
            StrategyConfig::Ensemble {
                name,
                deterministic,
                strategies,
            } => {
                let subs = strategies
                    .iter()
                    .map(StrategyConfig::build)
                    .collect::<rps_core::Result<Vec<_>>>()?;
                Box::new(EnsembleStrategy::new(name.as_str(), subs, *deterministic)?)
            }
        };
        Ok(strategy)
    }
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_rounds")]
    pub rounds_per_match: u32,
    /// Seed for the shared random source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub strategies: Vec<StrategyConfig>,
}

fn default_name() -> String {
    "Round robin".to_string()
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rounds_per_match: DEFAULT_ROUNDS,
            seed: None,
            strategies: default_roster(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn find(&self, name: &str) -> Option<&StrategyConfig> {
        self.strategies.iter().find(|s| s.name() == name)
    }

    /// Build every roster entry in order
    pub fn build_roster(&self) -> rps_core::Result<Vec<Box<dyn Strategy>>> {
        self.strategies.iter().map(StrategyConfig::build).collect()
    }
}

/// The stock roster: baselines, patterns, Markov players of length 1-3 and two ensembles
pub fn default_roster() -> Vec<StrategyConfig> {
    use rps_core::Symbol::*;

    let mut roster = vec![
        StrategyConfig::Random {
            name: "RandomPlayer".to_string(),
        },
        StrategyConfig::Constant {
            name: "RockPlayer".to_string(),
            symbol: Rock,
        },
        StrategyConfig::Constant {
            name: "PaperPlayer".to_string(),
            symbol: Paper,
        },
        StrategyConfig::Constant {
            name: "ScissorsPlayer".to_string(),
            symbol: Scissors,
        },
        StrategyConfig::Pattern {
            name: "RPPlayer".to_string(),
            pattern: vec![Rock, Paper],
        },
        StrategyConfig::Pattern {
            name: "RPSPlayer".to_string(),
            pattern: vec![Rock, Paper, Scissors],
        },
        StrategyConfig::BeatPrevious {
            name: "BeatPreviousPlayer".to_string(),
        },
        StrategyConfig::BeatenByPrevious {
            name: "BeatenByPreviousPlayer".to_string(),
        },
    ];

    for k in 1..=3 {
        roster.push(StrategyConfig::Markov {
            name: format!("{k}-MarkovChainPlayer"),
            chain_length: k,
        });
    }
    for k in 1..=3 {
        roster.push(StrategyConfig::DoubleMarkov {
            name: format!("{k}-DoubleMarkovChainPlayer"),
            chain_length: k,
        });
    }

    for deterministic in [true, false] {
        let label = if deterministic { "Deterministic" } else { "Stochastic" };
        roster.push(StrategyConfig::Ensemble {
            name: format!("{label}EnsemblePlayer"),
            deterministic,
            strategies: ensemble_members(),
        });
    }

    roster
}

fn ensemble_members() -> Vec<StrategyConfig> {
    let mut members = vec![
        StrategyConfig::BeatPrevious {
            name: "BeatPrevious".to_string(),
        },
        StrategyConfig::BeatenByPrevious {
            name: "BeatenByPrevious".to_string(),
        },
    ];
    for k in 1..=3 {
        members.push(StrategyConfig::Markov {
            name: format!("{k}-Markov"),
            chain_length: k,
        });
        members.push(StrategyConfig::DoubleMarkov {
            name: format!("{k}-DoubleMarkov"),
            chain_length: k,
        });
    }
    members
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
