//! Benchmark drivers: run a workload sequentially and in parallel, then report
//!
//! Report lines go to stdout with `println!`; progress and diagnostics go
//! through `tracing`.

use crate::config::{FetchBenchConfig, PrimeBenchConfig};
use crate::error::Result;
use crate::fetch::{self, FetchResult};
use crate::primes;
use crate::timing::{format_elapsed, timed, Comparison};
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of the prime benchmark
#[derive(Debug, Clone)]
pub struct PrimeReport {
    pub primes_found: usize,
    pub sequential: Duration,
    /// `None` in sequential-only mode
    pub comparison: Option<Comparison>,
}

/// Outcome of the fetch benchmark
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub sequential_results: Vec<FetchResult>,
    pub parallel_results: Option<Vec<FetchResult>>,
    pub sequential: Duration,
    pub comparison: Option<Comparison>,
}

impl FetchReport {
    /// Number of sentinel results across both runs
    pub fn failures(&self) -> usize {
        self.sequential_results
            .iter()
            .chain(self.parallel_results.iter().flatten())
            .filter(|r| r.is_error())
            .count()
    }
}

/// Enumerate primes single-threaded and then across the worker pool
pub fn run_primes(config: &PrimeBenchConfig) -> Result<PrimeReport> {
    info!(range = %config.range, workers = config.workers, "prime benchmark");

    let (single, sequential) =
        timed(|| primes::find_primes_single(config.range.start, config.range.end));
    println!("{}", format_elapsed("Single process", sequential));

    let comparison = if config.sequential_only {
        None
    } else {
        let (distributed, parallel) = timed(|| {
            primes::find_primes_chunked(config.range, config.workers, config.min_chunk)
        });
        let distributed = distributed?;
        println!("{}", format_elapsed("Distributed", parallel));

        if distributed != single {
            warn!(
                single = single.len(),
                distributed = distributed.len(),
                "sequential and distributed results differ"
            );
        }

        let comparison = Comparison::new(sequential, parallel);
        println!("{}", comparison);
        Some(comparison)
    };

    println!("Found {} primes", single.len());

    Ok(PrimeReport {
        primes_found: single.len(),
        sequential,
        comparison,
    })
}

/// Issue the configured requests one by one and then over a thread pool
pub fn run_fetch(config: &FetchBenchConfig) -> Result<FetchReport> {
    let client = fetch::build_client()?;

    println!("\nMaking {} sequential requests...", config.requests);
    let (sequential_results, sequential) =
        timed(|| fetch::fetch_multiple_single(&client, &config.url, config.requests));
    println!("{}", format_elapsed("Single-threaded", sequential));

    let (parallel_results, comparison) = if config.sequential_only {
        (None, None)
    } else {
        println!("\nMaking {} concurrent requests...", config.requests);
        let (results, parallel) = timed(|| {
            fetch::fetch_multiple_threaded(&client, &config.url, config.requests, config.threads)
        });
        let results = results?;
        println!("{}", format_elapsed("Multi-threaded", parallel));

        let comparison = Comparison::new(sequential, parallel);
        println!("\n{}", comparison);
        (Some(results), Some(comparison))
    };

    let report = FetchReport {
        sequential_results,
        parallel_results,
        sequential,
        comparison,
    };
    if report.failures() > 0 {
        warn!("{} request(s) failed", report.failures());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::partition::Range;

    #[test]
    fn test_run_primes_small_range() {
        let config = PrimeBenchConfig {
            range: Range::new(1, 5000),
            workers: 2,
            ..Default::default()
        };
        let report = run_primes(&config).unwrap();
        assert_eq!(report.primes_found, 669);
        assert!(report.comparison.is_some());
    }

    #[test]
    fn test_run_primes_sequential_only() {
        let config = PrimeBenchConfig {
            range: Range::new(1, 20),
            sequential_only: true,
            ..Default::default()
        };
        let report = run_primes(&config).unwrap();
        assert_eq!(report.primes_found, 8);
        assert!(report.comparison.is_none());
    }

    #[test]
    fn test_fetch_report_counts_failures() {
        let report = FetchReport {
            sequential_results: vec![FetchResult::ok(200, "a"), FetchResult::error("x")],
            parallel_results: Some(vec![FetchResult::error("y")]),
            sequential: Duration::ZERO,
            comparison: None,
        };
        assert_eq!(report.failures(), 2);
    }
}
