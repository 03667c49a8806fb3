use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use lb_demos::{DemoConfig, PopulationSource};
use lb_offline::{heap_rank, partition_rank_with};
use lb_runtime::init_tracing;

/// Ranks the top decile of a population with both bulk selectors.
#[derive(Parser, Debug)]
struct Args {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON-lines file of players; a synthetic population is generated when absent.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    population: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct Summary {
    population: usize,
    top: usize,
    min_level: Option<u64>,
    max_level: Option<u64>,
    partition_ms: f64,
    heap_ms: f64,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("offline_demo starting");

    let mut cfg = DemoConfig::load(args.config.as_deref())?;
    if let Some(population) = args.population {
        cfg.synthetic.population = population;
    }
    if let Some(seed) = args.seed {
        cfg.synthetic.seed = Some(seed);
        cfg.offline.pivot_seed = Some(seed);
    }

    let players = PopulationSource::new(args.input, cfg.synthetic.clone()).load_all()?;
    let population = players.len();
    info!(population, "population loaded");

    let by_partition = partition_rank_with(players.clone(), &cfg.offline).into_result();
    let by_heap = heap_rank(players).into_result();
    ensure!(
        by_partition.top() == by_heap.top(),
        "partition and heap rankers disagree"
    );

    let summary = Summary {
        population,
        top: by_heap.top().len(),
        min_level: by_heap.min_level(),
        max_level: by_heap.top().last().map(|p| p.level),
        partition_ms: by_partition.elapsed_ms(),
        heap_ms: by_heap.elapsed_ms(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
