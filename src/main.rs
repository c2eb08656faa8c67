mod cli;

use anyhow::Context;
use case_reader::{CaseAggregationEngine, CaseReaderConfig, CaseStatistics};
use clap::Parser;
use cli::Cli;
use log::info;
use std::time::Instant;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = CaseReaderConfig::from_env().context("Invalid case reader configuration")?;
    if let Some(path) = cli.path {
        config.data_path = path;
    }
    config.show_progress = !cli.json;

    let start = Instant::now();
    let engine = CaseAggregationEngine::init(config).context("Could not load case data")?;
    let stats = CaseStatistics::calculate(engine);
    info!(
        "Aggregated {} cases across {} zones in {:?}",
        stats.total_cases,
        stats.zone_count(),
        start.elapsed()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.generate_summary());
    }

    Ok(())
}
