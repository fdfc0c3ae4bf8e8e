//! Batch planning
//!
//! Computes how many sequential rounds of `parallelism` concurrent fetches
//! are needed to cover a run's item limit.

use crate::limit::INFINITE;

/// A resolved batch plan for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// Max items per fetch (the configured batch size, passed through)
    pub size: u64,
    /// Number of sequential rounds needed so that every worker, across all
    /// rounds, covers the full limit
    pub count: u64,
}

impl Batch {
    /// Plan the batches for a run.
    ///
    /// `count = ceil((limit / batch_size) / parallelism)`, computed in
    /// floating point and rounded up. `batch_size` and `parallelism` must be
    /// at least 1; configuration validation enforces this before planning.
    ///
    /// An [`INFINITE`] limit yields an effectively unbounded count; such runs
    /// end only through a stop request or cancellation.
    pub fn plan(batch_size: u64, limit: u64, parallelism: usize) -> Self {
        let count = if limit == INFINITE {
            INFINITE
        } else {
            ((limit as f64 / batch_size as f64) / parallelism as f64).ceil() as u64
        };

        Self {
            size: batch_size,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10, 100, 1 => 10; "limit 100 batch 10")]
    #[test_case(12, 100, 1 => 9; "limit 100 batch 12")]
    #[test_case(10, 101, 1 => 11; "limit 101 batch 10")]
    #[test_case(23, 97, 1 => 5; "limit 97 batch 23")]
    #[test_case(10, 100, 10 => 1; "parallelism covers limit in one round")]
    #[test_case(1, 100, 100 => 1; "single item per worker")]
    #[test_case(12, 100, 8 => 2; "uneven split rounds up")]
    #[test_case(10, 1, 1 => 1; "limit below batch size")]
    fn test_batch_count(batch_size: u64, limit: u64, parallelism: usize) -> u64 {
        Batch::plan(batch_size, limit, parallelism).count
    }

    #[test]
    fn test_batch_size_passthrough() {
        let batch = Batch::plan(25, 1000, 4);
        assert_eq!(batch.size, 25);
    }

    #[test]
    fn test_infinite_limit_is_unbounded() {
        let batch = Batch::plan(10, INFINITE, 4);
        assert_eq!(batch.count, INFINITE);
    }
}
