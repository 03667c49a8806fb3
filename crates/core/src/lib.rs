//! Core types for the leaderboard ranking engine.

pub type Level = u64;
pub type PopulationCount = usize;

/// Divisor applied to a population to size the bulk top set.
pub const DECILE: usize = 10;

/// Number of players in the top decile of a population of `population`, rounded up.
pub fn top_count(population: usize) -> usize {
    population.div_ceil(DECILE)
}

#[derive(thiserror::Error, Debug)]
pub enum RankError {
    #[error("no more players remaining in the stream")]
    StreamExhausted,
    #[error("reporting interval must be a positive integer")]
    ZeroInterval,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed player record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub mod heap;
pub mod player;
pub mod result;

pub use player::Player;
pub use result::{Cutoffs, RankingResult};
