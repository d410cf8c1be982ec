//! Parallel executor for benchmark workloads
//!
//! Uses Rayon for work-stealing parallelism with a bounded, per-batch pool.

use crate::error::{Error, Result};
use rayon::prelude::*;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of parallel tasks (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Pool limited to `workers` threads; `0` means one per CPU
    pub fn with_workers(workers: usize) -> Self {
        if workers == 0 {
            Self::default()
        } else {
            Self {
                max_parallelism: workers,
            }
        }
    }
}

/// Parallel map operation over a slice of inputs
///
/// # Arguments
/// * `items` - Inputs to process
/// * `mapper` - Function to apply to each item (must be thread-safe)
/// * `config` - Parallel execution configuration
///
/// # Returns
/// * `Ok(Vec<U>)` - One result per input, in input order
/// * `Err(Error)` - The worker pool could not be built
///
/// A panic inside `mapper` is not caught: it unwinds out of this call and
/// the rest of the batch is abandoned. The pool lives only for the duration
/// of the call.
///
/// # Performance
/// - Sequential: N items × T seconds = N×T total time
/// - Parallel: N items × T seconds / workers ≈ (N×T)/workers total time
///
/// # Example
/// ```
/// use parbench::parallel::{parallel_map, ParallelConfig};
///
/// let squares = parallel_map(&[1, 2, 3], |n| n * n, &ParallelConfig::with_workers(2)).unwrap();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn parallel_map<T, U, F>(items: &[T], mapper: F, config: &ParallelConfig) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    if config.max_parallelism == 0 {
        return Err(Error::invalid_argument(
            "max_parallelism",
            "must be at least 1",
        ));
    }

    // Empty input fast path
    if items.is_empty() {
        return Ok(Vec::new());
    }

    // Single item - no parallelism needed
    if items.len() == 1 {
        return Ok(vec![mapper(&items[0])]);
    }

    let threads = config.max_parallelism.min(items.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("parbench-worker-{}", i))
        .build()?;

    tracing::debug!(threads, items = items.len(), "dispatching batch");

    // Indexed iterator keeps results in input order
    Ok(pool.install(|| items.par_iter().map(&mapper).collect()))
}
