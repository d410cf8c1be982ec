//! compute_bound - single-threaded vs distributed prime enumeration

use anyhow::{Context, Result};
use clap::Parser;
use parbench::bench;
use parbench::config::{setup_logging, ComputeArgs, PrimeBenchConfig};
use tracing::error;

fn run(args: &ComputeArgs) -> Result<()> {
    let config = PrimeBenchConfig::from(args);
    bench::run_primes(&config).context("Prime benchmark failed")?;

    Ok(())
}

fn main() {
    let args = ComputeArgs::parse();
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
