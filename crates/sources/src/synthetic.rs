use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use lb_core::{Level, Player, RankError};

use crate::VectorPlayerStream;

const ROSTER: [&str; 8] = [
    "WYLDER", "GUARDIAN", "IRONEYE", "DUCHESS", "RAIDER", "REVENANT", "RECLUSE", "EXECUTOR",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub population: usize,
    pub min_level: Level,
    pub max_level: Level,
    /// Draw every level at most once; the level range must be at least as large as the population.
    pub distinct_levels: bool,
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            population: 1_000,
            min_level: 1,
            max_level: 2_000,
            distinct_levels: false,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> Result<(), RankError> {
        if self.min_level > self.max_level {
            return Err(RankError::Config(format!(
                "min_level {} exceeds max_level {}",
                self.min_level, self.max_level
            )));
        }
        if self.distinct_levels {
            self.distinct_span()?;
        }
        Ok(())
    }

    /// Number of levels in `[min_level, max_level]`, which must fit in a
    /// `usize` and cover the population when levels are drawn without repeats.
    fn distinct_span(&self) -> Result<usize, RankError> {
        let span = (self.max_level - self.min_level)
            .checked_add(1)
            .and_then(|span| usize::try_from(span).ok())
            .ok_or_else(|| {
                RankError::Config(format!(
                    "level range [{}, {}] is too wide to draw distinct levels from",
                    self.min_level, self.max_level
                ))
            })?;
        if span < self.population {
            return Err(RankError::Config(format!(
                "cannot draw {} distinct levels from [{}, {}]",
                self.population, self.min_level, self.max_level
            )));
        }
        Ok(span)
    }
}

/// Seeded generator of random populations.
pub struct SyntheticPlayers {
    cfg: SyntheticConfig,
    rng: StdRng,
    /// Level count to sample offsets from; set only for distinct draws.
    distinct_span: Option<usize>,
}

impl SyntheticPlayers {
    pub fn new(cfg: SyntheticConfig) -> Result<Self, RankError> {
        cfg.validate()?;
        let distinct_span = if cfg.distinct_levels {
            Some(cfg.distinct_span()?)
        } else {
            None
        };
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { cfg, rng, distinct_span })
    }

    pub fn generate(&mut self) -> Vec<Player> {
        let population = self.cfg.population;
        let levels: Vec<Level> = if let Some(span) = self.distinct_span {
            rand::seq::index::sample(&mut self.rng, span, population)
                .into_iter()
                .map(|offset| self.cfg.min_level + offset as Level)
                .collect()
        } else {
            (0..population)
                .map(|_| self.rng.gen_range(self.cfg.min_level..=self.cfg.max_level))
                .collect()
        };

        debug!(population, distinct = self.cfg.distinct_levels, "generated synthetic population");
        levels
            .into_iter()
            .enumerate()
            .map(|(i, level)| Player::new(format!("{}-{:06}", ROSTER[i % ROSTER.len()], i), level))
            .collect()
    }

    pub fn stream(&mut self) -> VectorPlayerStream {
        VectorPlayerStream::new(self.generate())
    }
}
