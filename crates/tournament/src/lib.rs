//! Tournament Runner for rock-paper-scissors strategies
//!
//! This crate provides infrastructure for:
//! - Playing matches between two strategies and scoring every round
//! - Running round-robin tournaments over a configured roster
//! - Aggregating per-strategy standings and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Round robin over the stock roster
//! cargo run -p tournament -- run --rounds 1000 --seed 42
//!
//! # Single match between two roster entries
//! cargo run -p tournament -- match 2-MarkovChainPlayer RPSPlayer
//! ```

mod config;
mod match_runner;
mod results;
mod round_robin;
mod standings;

pub use config::*;
pub use match_runner::*;
pub use results::*;
pub use round_robin::*;
pub use standings::*;
