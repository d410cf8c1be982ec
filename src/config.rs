//! Command-line arguments and benchmark configuration
//!
//! Every flag defaults to the constant the benchmarks were originally
//! hard-wired to, so running a binary with no arguments reproduces the
//! fixed behaviour.

use crate::fetch::DEFAULT_URL;
use crate::parallel::ParallelConfig;
use crate::primes::partition::{Range, DEFAULT_MIN_CHUNK};
use crate::slow_api::{SlowApiConfig, DEFAULT_ADDR};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Logging verbosity shared by all binaries
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    pub fn level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Install the global `tracing` subscriber
pub fn setup_logging(args: &LogArgs) -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.level())
        .with_target(false)
        .with_thread_names(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

/// Sequential vs distributed prime enumeration
#[derive(Parser, Debug, Clone)]
#[command(name = "compute_bound")]
#[command(version, about, long_about = None)]
pub struct ComputeArgs {
    /// First integer checked (inclusive)
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub start: i64,

    /// Last integer checked (exclusive)
    #[arg(long, default_value_t = 1_000_000, allow_hyphen_values = true)]
    pub end: i64,

    /// Worker threads for the distributed run (0 = one per CPU)
    #[arg(short = 'w', long, default_value_t = 4)]
    pub workers: usize,

    /// Minimum integers per chunk
    #[arg(long, default_value_t = DEFAULT_MIN_CHUNK)]
    pub min_chunk: u64,

    /// Skip the distributed run
    #[arg(long)]
    pub sequential_only: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Sequential vs threaded HTTP requests
#[derive(Parser, Debug, Clone)]
#[command(name = "io_bound")]
#[command(version, about, long_about = None)]
pub struct IoArgs {
    /// Endpoint requested
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of requests per run
    #[arg(short = 'n', long, default_value_t = 4)]
    pub requests: usize,

    /// Worker threads for the concurrent run (0 = one per CPU)
    #[arg(short = 't', long, default_value_t = 4)]
    pub threads: usize,

    /// Skip the concurrent run
    #[arg(long)]
    pub sequential_only: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Local JSON endpoint that answers after a fixed delay
#[derive(Parser, Debug, Clone)]
#[command(name = "slow_api")]
#[command(version, about, long_about = None)]
pub struct SlowApiArgs {
    /// Listen address
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Delay before each response, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Value of the `message` field
    #[arg(long, default_value = "Hello from the slow API!")]
    pub message: String,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Settings for one run of the prime benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeBenchConfig {
    pub range: Range,
    pub workers: usize,
    pub min_chunk: u64,
    pub sequential_only: bool,
}

impl Default for PrimeBenchConfig {
    fn default() -> Self {
        Self {
            range: Range::new(1, 1_000_000),
            workers: 4,
            min_chunk: DEFAULT_MIN_CHUNK,
            sequential_only: false,
        }
    }
}

impl From<&ComputeArgs> for PrimeBenchConfig {
    fn from(args: &ComputeArgs) -> Self {
        Self {
            range: Range::new(args.start, args.end),
            workers: resolve_workers(args.workers),
            min_chunk: args.min_chunk,
            sequential_only: args.sequential_only,
        }
    }
}

/// Settings for one run of the fetch benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchBenchConfig {
    pub url: String,
    pub requests: usize,
    pub threads: usize,
    pub sequential_only: bool,
}

impl Default for FetchBenchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            requests: 4,
            threads: 4,
            sequential_only: false,
        }
    }
}

impl From<&IoArgs> for FetchBenchConfig {
    fn from(args: &IoArgs) -> Self {
        Self {
            url: args.url.clone(),
            requests: args.requests,
            threads: resolve_workers(args.threads),
            sequential_only: args.sequential_only,
        }
    }
}

impl From<&SlowApiArgs> for SlowApiConfig {
    fn from(args: &SlowApiArgs) -> Self {
        Self {
            delay: Duration::from_millis(args.delay_ms),
            message: args.message.clone(),
        }
    }
}

/// `0` stands for one worker per CPU
fn resolve_workers(requested: usize) -> usize {
    ParallelConfig::with_workers(requested).max_parallelism
}
