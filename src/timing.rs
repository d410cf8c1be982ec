//! Wall-clock timing and sequential/parallel comparison

use std::fmt;
use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall-clock time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Elapsed times of the sequential and parallel runs of one workload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub sequential: Duration,
    pub parallel: Duration,
}

impl Comparison {
    pub fn new(sequential: Duration, parallel: Duration) -> Self {
        Self {
            sequential,
            parallel,
        }
    }

    /// Ratio of sequential to parallel time
    ///
    /// Infinite when the parallel run was too fast to measure.
    pub fn speedup(&self) -> f64 {
        let parallel = self.parallel.as_secs_f64();
        if parallel == 0.0 {
            return f64::INFINITY;
        }
        self.sequential.as_secs_f64() / parallel
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speedup: {:.2}x", self.speedup())
    }
}

/// `"<label> took: 1.23 seconds"`
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    format!("{} took: {:.2} seconds", label, elapsed.as_secs_f64())
}
