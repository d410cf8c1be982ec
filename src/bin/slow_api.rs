//! slow_api - delayed JSON endpoint for the io_bound benchmark

use anyhow::{Context, Result};
use clap::Parser;
use parbench::config::{setup_logging, SlowApiArgs};
use parbench::slow_api::{self, SlowApiConfig};
use tracing::error;

fn run(args: &SlowApiArgs) -> Result<()> {
    slow_api::run(args.addr, SlowApiConfig::from(args))
        .with_context(|| format!("Slow API on {} failed", args.addr))
}

fn main() {
    let args = SlowApiArgs::parse();
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
