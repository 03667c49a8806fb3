use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    players_consumed: AtomicU64,
    leader_replacements: AtomicU64,
    cutoffs_recorded: AtomicU64,
    rankings_completed: AtomicU64,
    leader_set_peak: AtomicU64,
}

impl MetricsRegistry {
    pub fn inc_players_consumed(&self, delta: u64) {
        self.inner.players_consumed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_leader_replacements(&self, delta: u64) {
        self.inner.leader_replacements.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_cutoffs_recorded(&self, delta: u64) {
        self.inner.cutoffs_recorded.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_rankings_completed(&self, delta: u64) {
        self.inner.rankings_completed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn record_leader_set_peak(&self, size: u64) {
        self.inner.leader_set_peak.fetch_max(size, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            players_consumed: self.inner.players_consumed.load(Ordering::Relaxed),
            leader_replacements: self.inner.leader_replacements.load(Ordering::Relaxed),
            cutoffs_recorded: self.inner.cutoffs_recorded.load(Ordering::Relaxed),
            rankings_completed: self.inner.rankings_completed.load(Ordering::Relaxed),
            leader_set_peak: self.inner.leader_set_peak.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub players_consumed: u64,
    pub leader_replacements: u64,
    pub cutoffs_recorded: u64,
    pub rankings_completed: u64,
    pub leader_set_peak: u64,
}

impl MetricsSnapshot {
    pub fn to_json_line(&self, label: &str, elapsed: Option<Duration>) -> String {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            label: &'a str,
            #[serde(flatten)]
            counters: &'a MetricsSnapshot,
            elapsed_ms: Option<f64>,
        }

        let payload = Snapshot {
            label,
            counters: self,
            elapsed_ms: elapsed.map(|d| d.as_secs_f64() * 1000.0),
        };
        serde_json::to_string(&payload).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Wall-clock accumulator that can be paused around work that must not be timed.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    pub fn paused() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }

    /// Runs `f` with the clock paused.
    pub fn excluding<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let was_running = self.is_running();
        self.pause();
        let out = f();
        if was_running {
            self.resume();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn registry_clones_share_counters() {
        let metrics = MetricsRegistry::default();
        let handle = metrics.clone();
        handle.inc_players_consumed(132);
        handle.inc_cutoffs_recorded(3);
        metrics.record_leader_set_peak(50);
        metrics.record_leader_set_peak(20);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.players_consumed, 132);
        assert_eq!(snapshot.cutoffs_recorded, 3);
        assert_eq!(snapshot.leader_set_peak, 50);
    }

    #[test]
    fn json_line_flattens_counters() {
        let metrics = MetricsRegistry::default();
        metrics.inc_rankings_completed(1);
        let line = metrics.snapshot().to_json_line("online", None);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["label"], "online");
        assert_eq!(value["rankings_completed"], 1);
        assert!(value["elapsed_ms"].is_null());
    }

    #[test]
    fn paused_time_is_not_counted() {
        let mut watch = Stopwatch::paused();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(watch.elapsed(), Duration::ZERO);

        watch.resume();
        let slept = watch.excluding(|| {
            thread::sleep(Duration::from_millis(20));
            7
        });
        assert_eq!(slept, 7);
        assert!(watch.is_running());
        watch.pause();
        assert!(watch.elapsed() < Duration::from_millis(20));
    }
}
