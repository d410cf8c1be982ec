//! Property-based tests for primality, partitioning and the prime drivers
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The trial-division test agrees with a sieve on small inputs
//! 2. Partitioning always reconstructs the input range exactly
//! 3. Sequential and distributed drivers find the same primes

use parbench::primes::partition::{chunk_size, partition, Range};
use parbench::primes::{find_primes_chunked, find_primes_single, is_prime};
use proptest::prelude::*;

const SIEVE_LIMIT: usize = 10_000;

/// Reference primality table for `0..SIEVE_LIMIT`
fn sieve() -> Vec<bool> {
    let mut table = vec![true; SIEVE_LIMIT];
    table[0] = false;
    table[1] = false;
    let mut i = 2;
    while i * i < SIEVE_LIMIT {
        if table[i] {
            let mut j = i * i;
            while j < SIEVE_LIMIT {
                table[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    table
}

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Ranges with bounds anywhere in a window around zero, possibly empty
fn small_range() -> impl Strategy<Value = Range> {
    (-5_000i64..50_000, 0i64..20_000).prop_map(|(start, len)| Range::new(start, start + len))
}

/// Arbitrary i64 ranges, including reversed and extreme bounds
fn any_range() -> impl Strategy<Value = Range> {
    (any::<i64>(), any::<i64>()).prop_map(|(a, b)| Range::new(a, b))
}

// =============================================================================
// PRIMALITY
// =============================================================================

#[test]
fn test_is_prime_matches_sieve() {
    let table = sieve();
    for (n, &expected) in table.iter().enumerate() {
        assert_eq!(is_prime(n as i64), expected, "mismatch at {}", n);
    }
}

proptest! {
    #[test]
    fn prop_below_two_never_prime(n in i64::MIN..2) {
        prop_assert!(!is_prime(n));
    }

    #[test]
    fn prop_products_are_composite(a in 2i64..50_000, b in 2i64..50_000) {
        prop_assert!(!is_prime(a * b));
    }

    #[test]
    fn prop_primes_have_no_small_divisor(n in 2i64..1_000_000) {
        if is_prime(n) {
            for d in 2..n.min(1_000) {
                if d * d > n {
                    break;
                }
                prop_assert_ne!(n % d, 0);
            }
        }
    }
}

// =============================================================================
// PARTITIONING
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_reconstructs_range(
        range in small_range(),
        workers in 1usize..64,
        min_chunk in 1u64..5_000,
    ) {
        let chunks = partition(range, workers, min_chunk).unwrap();

        if range.is_empty() {
            prop_assert!(chunks.is_empty());
        } else {
            prop_assert_eq!(chunks.first().unwrap().start, range.start);
            prop_assert_eq!(chunks.last().unwrap().end, range.end);
            for pair in chunks.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            let total: u64 = chunks.iter().map(Range::len).sum();
            prop_assert_eq!(total, range.len());
        }
    }

    #[test]
    fn prop_partition_chunk_sizes(
        range in small_range(),
        workers in 1usize..64,
        min_chunk in 1u64..5_000,
    ) {
        let chunks = partition(range, workers, min_chunk).unwrap();
        let size = chunk_size(range, workers, min_chunk);

        prop_assert!(size >= min_chunk);
        prop_assert!(chunks.len() <= workers);
        if let Some((last, rest)) = chunks.split_last() {
            for chunk in rest {
                prop_assert_eq!(chunk.len(), size);
            }
            prop_assert!(last.len() >= 1 && last.len() <= size);
        }
    }

    #[test]
    fn prop_partition_never_panics(
        range in any_range(),
        workers in 1usize..8,
    ) {
        // Huge ranges produce at most `workers` chunks, so this stays cheap
        let chunks = partition(range, workers, u64::MAX / 4).unwrap();
        prop_assert!(chunks.len() <= workers.max(4) + 1);
        let total: u64 = chunks.iter().map(Range::len).sum();
        prop_assert_eq!(total, range.len());
    }
}

// =============================================================================
// DRIVERS
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_distributed_matches_single(
        range in small_range(),
        workers in 1usize..8,
        min_chunk in 1u64..3_000,
    ) {
        let single = find_primes_single(range.start, range.end);
        let distributed = find_primes_chunked(range, workers, min_chunk).unwrap();
        prop_assert_eq!(single, distributed);
    }
}

#[test]
fn test_find_primes_single_example() {
    assert_eq!(find_primes_single(1, 20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
}

#[test]
fn test_partition_example() {
    assert_eq!(
        partition(Range::new(0, 2500), 4, 1000).unwrap(),
        vec![
            Range::new(0, 1000),
            Range::new(1000, 2000),
            Range::new(2000, 2500)
        ]
    );
}
