use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lb_demos::{DemoConfig, PopulationSource};
use lb_online::OnlineRanker;
use lb_runtime::{init_tracing, MetricsRegistry};

/// Streams a population through the leaderboard and prints its cutoffs.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    population: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Leaderboard size and cutoff reporting interval.
    #[arg(long)]
    interval: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("online_demo starting");

    let mut cfg = DemoConfig::load(args.config.as_deref())?;
    if let Some(population) = args.population {
        cfg.synthetic.population = population;
    }
    if let Some(seed) = args.seed {
        cfg.synthetic.seed = Some(seed);
    }
    if let Some(interval) = args.interval {
        cfg.online.reporting_interval = interval;
    }

    let mut stream = PopulationSource::new(args.input, cfg.synthetic.clone()).open()?;
    let metrics = MetricsRegistry::default();
    let ranker = OnlineRanker::new(cfg.online.clone()).with_metrics(metrics.clone());
    let result = ranker.rank_incoming(stream.as_mut())?;

    for (milestone, level) in result.cutoffs() {
        info!(milestone, level, "cutoff");
    }
    if let (Some(lowest), Some(highest)) = (result.top().first(), result.top().last()) {
        info!(%lowest, %highest, leaders = result.top().len(), "leaderboard");
    }

    let elapsed = std::time::Duration::from_secs_f64(result.elapsed_ms() / 1000.0);
    println!("{}", serde_json::to_string(result.cutoffs())?);
    println!("{}", metrics.snapshot().to_json_line("online", Some(elapsed)));
    Ok(())
}
