//! Range partitioning into worker-sized chunks

use crate::error::{Error, Result};
use std::fmt;

/// Smallest chunk handed to a worker unless the range itself is shorter
pub const DEFAULT_MIN_CHUNK: u64 = 1000;

/// Half-open integer interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive lower bound
    pub start: i64,
    /// Exclusive upper bound
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of integers covered; zero when `start >= end`
    pub fn len(&self) -> u64 {
        if self.end > self.start {
            self.end.abs_diff(self.start)
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<(i64, i64)> for Range {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Size of each chunk when splitting `range` across `workers`
///
/// The per-worker share is rounded up so that at most `workers` chunks are
/// produced, then raised to `min_chunk`.
pub fn chunk_size(range: Range, workers: usize, min_chunk: u64) -> u64 {
    let workers = workers.max(1) as u64;
    let share = range.len().div_ceil(workers);
    share.max(min_chunk)
}

/// Split `range` into contiguous, non-overlapping chunks
///
/// Every chunk has [`chunk_size`] elements except possibly the last one,
/// which takes whatever remains. The chunks, in order, cover `range`
/// exactly.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `workers` or `min_chunk` is zero.
///
/// # Example
/// ```
/// use parbench::primes::partition::{partition, Range};
///
/// let chunks = partition(Range::new(0, 2500), 4, 1000).unwrap();
/// assert_eq!(
///     chunks,
///     vec![Range::new(0, 1000), Range::new(1000, 2000), Range::new(2000, 2500)]
/// );
/// ```
pub fn partition(range: Range, workers: usize, min_chunk: u64) -> Result<Vec<Range>> {
    if workers == 0 {
        return Err(Error::invalid_argument("workers", "must be at least 1"));
    }
    if min_chunk == 0 {
        return Err(Error::invalid_argument("min_chunk", "must be at least 1"));
    }

    let size = chunk_size(range, workers, min_chunk);
    let mut chunks = Vec::new();

    let mut current = range.start;
    while current < range.end {
        // Saturate: `current + size` may exceed i64::MAX near the top of the domain
        let next = current.saturating_add_unsigned(size).min(range.end);
        chunks.push(Range::new(current, next));
        current = next;
    }

    Ok(chunks)
}
