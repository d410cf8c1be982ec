//! Compute-bound workload: prime enumeration
//!
//! [`find_primes_single`] walks the range on the calling thread;
//! [`find_primes_distributed`] partitions it and fans the chunks out over a
//! worker pool, flattening the per-chunk results back in chunk order.

pub mod partition;

use crate::error::Result;
use crate::parallel::{parallel_map, ParallelConfig};
use partition::{partition, Range, DEFAULT_MIN_CHUNK};

/// Trial-division primality test
///
/// Divides by every integer from 2 up to `isqrt(n)`. Inputs below 2 are
/// never prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: i64 = 2;
    // `i <= n / i` instead of `i * i <= n` to stay clear of overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// All primes in `[start, end)`, ascending
pub fn find_primes_single(start: i64, end: i64) -> Vec<i64> {
    (start..end).filter(|&n| is_prime(n)).collect()
}

/// All primes in `range`, computed on a pool of `workers` threads
///
/// Uses [`DEFAULT_MIN_CHUNK`] as the minimum chunk size.
pub fn find_primes_distributed(range: Range, workers: usize) -> Result<Vec<i64>> {
    find_primes_chunked(range, workers, DEFAULT_MIN_CHUNK)
}

/// All primes in `range`, split into chunks of at least `min_chunk`
pub fn find_primes_chunked(range: Range, workers: usize, min_chunk: u64) -> Result<Vec<i64>> {
    let chunks = partition(range, workers, min_chunk)?;
    tracing::debug!(%range, workers, chunks = chunks.len(), "partitioned range");

    let per_chunk = parallel_map(
        &chunks,
        |chunk| find_primes_single(chunk.start, chunk.end),
        &ParallelConfig::with_workers(workers),
    )?;

    Ok(per_chunk.into_iter().flatten().collect())
}
