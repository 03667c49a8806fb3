use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::{Level, Player, PopulationCount};

/// Population-count milestone -> minimum level needed to stay on the leaderboard.
pub type Cutoffs = BTreeMap<PopulationCount, Level>;

/// Terminal report of a single ranking call.
///
/// `top` is always ascending. `cutoffs` is only populated by streaming
/// rankings. `elapsed_ms` covers selection and sorting, never the time spent
/// pulling players from a source.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingResult {
    top: Vec<Player>,
    cutoffs: Cutoffs,
    elapsed_ms: f64,
}

impl RankingResult {
    pub fn new(top: Vec<Player>, cutoffs: Cutoffs, elapsed: Duration) -> Self {
        debug_assert!(top.windows(2).all(|w| w[0] <= w[1]), "top must be ascending");
        Self {
            top,
            cutoffs,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// Result of a bulk ranking, which never records cutoffs.
    pub fn offline(top: Vec<Player>, elapsed: Duration) -> Self {
        Self::new(top, Cutoffs::new(), elapsed)
    }

    pub fn top(&self) -> &[Player] {
        &self.top
    }

    pub fn cutoffs(&self) -> &Cutoffs {
        &self.cutoffs
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Lowest level still on the leaderboard, if any player made it.
    pub fn min_level(&self) -> Option<Level> {
        self.top.first().map(|p| p.level)
    }
}
