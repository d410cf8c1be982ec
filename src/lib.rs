//! # parbench - Sequential vs Parallel Execution Benchmarks
//!
//! Two small workloads that show where a worker pool pays off:
//!
//! - **Compute-bound**: enumerate primes in an integer range, either on one
//!   thread or split into chunks across a pool of worker threads.
//! - **I/O-bound**: repeat an HTTP GET against a slow local endpoint, either
//!   one request at a time or fanned out over a thread pool.
//!
//! Each workload has a sequential driver, a fan-out driver built on
//! [`parallel::parallel_map`], and a timing harness in [`bench`] that prints
//! elapsed seconds and the speedup ratio.
//!
//! ## Quick Start
//!
//! ```rust
//! use parbench::primes::{find_primes_distributed, find_primes_single};
//! use parbench::primes::partition::Range;
//!
//! # fn main() -> parbench::Result<()> {
//! assert_eq!(find_primes_single(1, 20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
//!
//! let distributed = find_primes_distributed(Range::new(1, 10_000), 4)?;
//! assert_eq!(distributed, find_primes_single(1, 10_000));
//! # Ok(())
//! # }
//! ```
//!
//! ## Binaries
//!
//! - `compute_bound` - single vs distributed prime enumeration
//! - `io_bound` - sequential vs threaded requests to `http://localhost:5001`
//! - `slow_api` - the delayed JSON endpoint `io_bound` talks to
//!
//! All three run with no arguments; flags only override the defaults.
//!
//! ## Error Handling
//!
//! Library calls return [`Result`], failing only for invalid arguments,
//! pool construction, or server socket errors. Failed HTTP requests are not
//! errors: they come back as [`fetch::FetchResult`] with status `-1`.
//! Panics inside a compute worker propagate to the caller.

pub mod bench;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parallel;
pub mod primes;
pub mod slow_api;
pub mod timing;

// Re-export main types
pub use error::{Error, Result};
pub use fetch::FetchResult;
pub use parallel::{parallel_map, ParallelConfig};
pub use primes::partition::Range;
pub use timing::Comparison;
