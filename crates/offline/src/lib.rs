//! Bulk top-decile selection over a fully materialized population.
//!
//! Both rankers take ownership of the population, move the top decile into
//! the result and hand every other player back as the `remainder`, in
//! whatever order selection left it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use lb_core::{Player, RankingResult};

pub mod heap_select;
pub mod partition;

pub use heap_select::{heap_rank, select_top_by_heap};
pub use partition::{partition_rank, partition_rank_with, select_top_by_partition};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineConfig {
    /// Seed for quickselect pivots. `None` draws one from the OS.
    pub pivot_seed: Option<u64>,
}

impl OfflineConfig {
    pub fn pivot_rng(&self) -> StdRng {
        match self.pivot_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// A bulk ranking together with the players that did not make the cut.
#[derive(Debug, Clone)]
pub struct OfflineRanking {
    pub result: RankingResult,
    pub remainder: Vec<Player>,
}

impl OfflineRanking {
    pub fn into_result(self) -> RankingResult {
        self.result
    }
}
