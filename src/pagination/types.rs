//! Pagination trait
//!
//! Defines the addressing contract implemented by all strategies.

/// Core trait for pagination strategies
///
/// Both operations are pure functions of their inputs and must be safe to
/// call concurrently from many workers with different `worker_number` values
/// for the same batch round.
pub trait Pagination: Send + Sync {
    /// Compute the start index for a worker's fetch.
    ///
    /// `batch_start` is `parallelism * batch_index`; `worker_number` is the
    /// worker's slot within the round, in `[0, parallelism)`.
    fn start_index(&self, batch_start: u64, worker_number: u64, batch_size: u64) -> u64;

    /// Compute how many items the fetch at `start` should request.
    ///
    /// Never returns a value past the limit; clamps to zero once `start`
    /// exceeds it.
    fn fetch_count(&self, limit: u64, start: u64, batch_size: u64) -> u64;
}
