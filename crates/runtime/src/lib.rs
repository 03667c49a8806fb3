//! Runtime support shared by the rankers and the demo binaries.

use tracing::Level;

pub mod metrics;

pub use metrics::{MetricsRegistry, MetricsSnapshot, Stopwatch};

/// Installs a fmt subscriber honouring `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_max_level(Level::INFO)
        .try_init();
}
