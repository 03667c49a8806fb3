//! Streaming top-K ranking with periodic cutoff reporting.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lb_core::{RankError, RankingResult};
use lb_runtime::{MetricsRegistry, Stopwatch};
use lb_sources::PlayerStream;

pub mod tracker;

pub use tracker::StreamingTopKTracker;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineConfig {
    /// Leaderboard size, and how many players are read between cutoffs.
    pub reporting_interval: usize,
}

impl Default for OnlineConfig {
    fn default() -> Self {
        Self { reporting_interval: 50 }
    }
}

impl OnlineConfig {
    pub fn validate(&self) -> Result<usize, RankError> {
        if self.reporting_interval == 0 {
            return Err(RankError::ZeroInterval);
        }
        Ok(self.reporting_interval)
    }
}

pub struct OnlineRanker {
    cfg: OnlineConfig,
    metrics: Option<MetricsRegistry>,
}

impl OnlineRanker {
    pub fn new(cfg: OnlineConfig) -> Self {
        Self { cfg, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: MetricsRegistry) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Drains `stream`, keeping the best `reporting_interval` players.
    ///
    /// The reported elapsed time excludes every call into the source. The
    /// interval is validated before the stream is touched.
    pub fn rank_incoming<S>(&self, stream: &mut S) -> Result<RankingResult, RankError>
    where
        S: PlayerStream + ?Sized,
    {
        let mut tracker = StreamingTopKTracker::new(self.cfg.validate()?)?;
        let mut watch = Stopwatch::start();

        while watch.excluding(|| stream.remaining()) > 0 {
            let player = watch.excluding(|| stream.next_player())?;
            tracker.observe(player);
        }

        let consumed = tracker.consumed();
        let replacements = tracker.replacements();
        let (top, cutoffs) = tracker.finish();
        watch.pause();
        let elapsed = watch.elapsed();

        if let Some(metrics) = &self.metrics {
            metrics.inc_players_consumed(consumed as u64);
            metrics.inc_leader_replacements(replacements);
            metrics.inc_cutoffs_recorded(cutoffs.len() as u64);
            metrics.record_leader_set_peak(top.len() as u64);
            metrics.inc_rankings_completed(1);
        }

        debug!(
            consumed,
            replacements,
            leaders = top.len(),
            cutoffs = cutoffs.len(),
            ?elapsed,
            "stream ranked"
        );
        Ok(RankingResult::new(top, cutoffs, elapsed))
    }
}

/// Drains `stream` and ranks its best `interval` players, recording a cutoff
/// every `interval` players and once more at the end of the stream.
pub fn rank_incoming<S>(stream: &mut S, interval: usize) -> Result<RankingResult, RankError>
where
    S: PlayerStream + ?Sized,
{
    OnlineRanker::new(OnlineConfig { reporting_interval: interval }).rank_incoming(stream)
}
