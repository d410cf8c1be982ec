//! io_bound - sequential vs threaded HTTP requests

use anyhow::{Context, Result};
use clap::Parser;
use parbench::bench;
use parbench::config::{setup_logging, FetchBenchConfig, IoArgs};
use tracing::error;

fn run(args: &IoArgs) -> Result<()> {
    let config = FetchBenchConfig::from(args);
    bench::run_fetch(&config)
        .with_context(|| format!("Fetch benchmark against {} failed", config.url))?;

    Ok(())
}

fn main() {
    let args = IoArgs::parse();
    // No subscriber yet, so tracing output would be dropped
    if let Err(e) = setup_logging(&args.log) {
        eprintln!("Error: failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
