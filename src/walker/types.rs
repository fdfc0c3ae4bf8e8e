//! Walker types and seams
//!
//! Defines the caller-supplied collaborator traits ([`Source`], [`Sink`]),
//! their closure adapters, the shared stop handle, and the failure ledger.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Source / Sink
// ============================================================================

/// Fetches one page of a logical sequence.
///
/// `start` is interpreted by the configured pagination strategy: a page
/// number under offset addressing, an absolute item offset under cursor
/// addressing. Errors are non-fatal to the run; they are recorded in the
/// failure ledger and `T::default()` is still forwarded to the sink.
#[async_trait]
pub trait Source<T: Send>: Send + Sync {
    /// Fetch the page at `start` with up to `fetch_count` items
    async fn fetch(&self, start: u64, fetch_count: u64) -> Result<T>;
}

/// Consumes one fetched page.
///
/// Calling [`StopHandle::stop`] requests the run to wind down after
/// in-flight work drains. Errors are non-fatal to the run; they are recorded
/// in the failure ledger with the originating task's coordinates.
#[async_trait]
pub trait Sink<T: Send>: Send + Sync {
    /// Consume one fetched page
    async fn consume(&self, page: T, stop: StopHandle) -> Result<()>;
}

/// Adapter turning a plain function into a [`Source`]
pub struct FnSource<F> {
    fetch: F,
}

impl<F> FnSource<F> {
    /// Wrap a `(start, fetch_count) -> Result<T>` function
    pub fn new<T>(fetch: F) -> Self
    where
        F: Fn(u64, u64) -> Result<T> + Send + Sync,
    {
        Self { fetch }
    }
}

#[async_trait]
impl<F, T> Source<T> for FnSource<F>
where
    F: Fn(u64, u64) -> Result<T> + Send + Sync,
    T: Send + 'static,
{
    async fn fetch(&self, start: u64, fetch_count: u64) -> Result<T> {
        (self.fetch)(start, fetch_count)
    }
}

/// Adapter turning a plain function into a [`Sink`]
pub struct FnSink<F> {
    consume: F,
}

impl<F> FnSink<F> {
    /// Wrap a `(page, stop) -> Result<()>` function
    pub fn new<T>(consume: F) -> Self
    where
        F: Fn(T, StopHandle) -> Result<()> + Send + Sync,
    {
        Self { consume }
    }
}

#[async_trait]
impl<F, T> Sink<T> for FnSink<F>
where
    F: Fn(T, StopHandle) -> Result<()> + Send + Sync,
    T: Send + 'static,
{
    async fn consume(&self, page: T, stop: StopHandle) -> Result<()> {
        (self.consume)(page, stop)
    }
}

// ============================================================================
// Stop handle
// ============================================================================

/// Cooperative stop request shared by all workers of one walker.
///
/// Once set, no further tasks are dispatched; already-dispatched tasks run
/// to completion. Cloning yields another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Create a fresh, unset stop handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run to wind down after in-flight work drains
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Failure ledger
// ============================================================================

/// One failed fetch or consume attempt
#[derive(Debug, Clone)]
pub struct FailedTask {
    /// Start index of the failing task
    pub start: u64,
    /// Requested item count of the failing task
    pub fetch_count: u64,
    /// The recorded cause
    pub error: Arc<Error>,
}

/// Thread-safe, append-only accumulation of failed tasks for one run.
///
/// Fetch and consume tasks fail concurrently on different workers, so the
/// ledger is lock-guarded. Entry order follows completion, not dispatch.
#[derive(Debug, Clone, Default)]
pub struct FailureLedger {
    entries: Arc<Mutex<Vec<FailedTask>>>,
}

impl FailureLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failed task
    pub fn record(&self, start: u64, fetch_count: u64, error: Error) {
        let task = FailedTask {
            start,
            fetch_count,
            error: Arc::new(error),
        };
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(task);
    }

    /// Snapshot the recorded failures
    pub fn snapshot(&self) -> Vec<FailedTask> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded failures
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Check whether any failure was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
