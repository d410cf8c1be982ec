//! Parallel execution support
//!
//! Provides an order-preserving parallel map over a bounded worker pool.

mod executor;

pub use executor::{parallel_map, ParallelConfig};
