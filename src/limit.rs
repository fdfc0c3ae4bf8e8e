//! Run limiters
//!
//! A [`Limiter`] resolves the total number of logical items a run should
//! cover. It is invoked exactly once, when a walk starts, so a limiter may
//! perform a lookup (e.g. a count query) whose result holds for the whole run.

use std::sync::Arc;

/// Sentinel limit for unbounded runs
pub const INFINITE: u64 = u64::MAX;

/// Resolves the total item count for one run; evaluated once at walk start
pub type Limiter = Arc<dyn Fn() -> u64 + Send + Sync>;

/// A limiter for unbounded runs; the walk ends only via stop or cancellation
pub fn infinite() -> Limiter {
    Arc::new(|| INFINITE)
}

/// A limiter that always resolves to a fixed item count
pub fn constant(limit: u64) -> Limiter {
    Arc::new(move || limit)
}
