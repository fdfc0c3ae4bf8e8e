//! Walker engine
//!
//! Drives a whole run: resolves the limit, plans batches, dispatches fetch
//! tasks onto a bounded fetch stage, pipes each result into a bounded
//! consume stage, tracks failures, and honors cooperative stop and external
//! cancellation.
//!
//! # Overview
//!
//! The dispatch loop runs on the calling task and suspends at two points:
//! the rate limiter and fetch-permit acquisition (back-pressure against slow
//! sources). The consume stage holds twice the fetch stage's capacity so
//! results never queue unboundedly behind a slow sink. [`Walker::walk`]
//! resolves only after both stages drain.

mod types;

pub use types::{FailedTask, FailureLedger, FnSink, FnSource, Sink, Source, StopHandle};

use crate::batch::Batch;
use crate::config::WalkerConfig;
use crate::rate_limit::RateLimiter;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// Concurrent pagination engine, polymorphic over one payload type per run.
///
/// `T: Default` backs the forward-on-fetch-error contract: when a fetch
/// fails, the failure is recorded and `T::default()` is still handed to the
/// sink, keeping a single accounting path for every dispatched task.
pub struct Walker<T> {
    source: Arc<dyn Source<T>>,
    sink: Arc<dyn Sink<T>>,
    config: WalkerConfig,
    stop: StopHandle,
    failed: FailureLedger,
}

impl<T> Walker<T>
where
    T: Default + Send + 'static,
{
    /// Create a walker with the given collaborators and config
    pub fn new(
        source: impl Source<T> + 'static,
        sink: impl Sink<T> + 'static,
        config: WalkerConfig,
    ) -> Self {
        Self {
            source: Arc::new(source),
            sink: Arc::new(sink),
            config,
            stop: StopHandle::new(),
            failed: FailureLedger::new(),
        }
    }

    /// Create a walker with the default config
    pub fn with_defaults(source: impl Source<T> + 'static, sink: impl Sink<T> + 'static) -> Self {
        Self::new(source, sink, WalkerConfig::default())
    }

    /// Walk the configured sequence to completion.
    ///
    /// Resolves the limit once, then dispatches one fetch per worker slot
    /// per batch round. Returns only after every dispatched fetch and
    /// consume has finished, whether the run exhausted its batches, was
    /// stopped, or was cancelled. Never reports a run-level error; read
    /// [`Walker::failed_tasks`] afterwards.
    pub async fn walk(&self) {
        let limit = (self.config.limiter)();
        let batch = Batch::plan(self.config.max_batch_size, limit, self.config.parallelism);
        let rate_limiter = RateLimiter::new(self.config.rate_limit);
        let cancel = self.config.cancel.clone();

        let fetch_permits = Arc::new(Semaphore::new(self.config.parallelism));
        let consume_permits = Arc::new(Semaphore::new(self.config.parallelism * 2));
        let fetch_tasks = TaskTracker::new();
        let consume_tasks = TaskTracker::new();

        debug!(
            limit,
            batch_size = batch.size,
            batch_count = batch.count,
            parallelism = self.config.parallelism,
            "starting walk"
        );

        'dispatch: for batch_index in 0..batch.count {
            let batch_start = self.config.parallelism as u64 * batch_index;

            for worker_number in 0..self.config.parallelism as u64 {
                // Pacing comes first so stop latency stays bounded by one
                // rate-limit interval.
                tokio::select! {
                    () = rate_limiter.take() => {}
                    () = cancel.cancelled() => break 'dispatch,
                }

                if self.stop.is_stopped() || cancel.is_cancelled() {
                    break 'dispatch;
                }

                let start =
                    self.config
                        .pagination
                        .start_index(batch_start, worker_number, batch.size);
                let fetch_count = self.config.pagination.fetch_count(limit, start, batch.size);

                // A cursor run exhausts cleanly at the tail.
                if fetch_count == 0 {
                    continue;
                }

                // Zero-queue submission: acquiring the permit blocks the
                // dispatch loop until a fetch slot frees up.
                let permit = tokio::select! {
                    permit = Arc::clone(&fetch_permits).acquire_owned() => match permit {
                        Ok(permit) => permit,
                        Err(_) => break 'dispatch,
                    },
                    () = cancel.cancelled() => break 'dispatch,
                };

                let source = Arc::clone(&self.source);
                let sink = Arc::clone(&self.sink);
                let stop = self.stop.clone();
                let failed = self.failed.clone();
                let consume_permits = Arc::clone(&consume_permits);
                let consume_tasks = consume_tasks.clone();

                fetch_tasks.spawn(async move {
                    let _fetch_slot = permit;

                    let page = match source.fetch(start, fetch_count).await {
                        Ok(page) => page,
                        Err(err) => {
                            warn!(start, fetch_count, error = %err, "fetch failed");
                            failed.record(start, fetch_count, err);
                            T::default()
                        }
                    };

                    let Ok(consume_slot) = consume_permits.acquire_owned().await else {
                        return;
                    };

                    consume_tasks.spawn(async move {
                        let _consume_slot = consume_slot;
                        if let Err(err) = sink.consume(page, stop).await {
                            warn!(start, fetch_count, error = %err, "consume failed");
                            failed.record(start, fetch_count, err);
                        }
                    });
                });
            }
        }

        // Drain the fetch stage first; every consume spawn happens inside a
        // fetch task, so the consume tracker is complete once fetches are.
        fetch_tasks.close();
        fetch_tasks.wait().await;
        consume_tasks.close();
        consume_tasks.wait().await;

        debug!(
            failed = self.failed.len(),
            stopped = self.stop.is_stopped(),
            "walk complete"
        );
    }

    /// Request cooperative stop; in-flight tasks still run to completion
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Check whether stop was requested, by the sink or externally
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Snapshot of the failures recorded during the run.
    ///
    /// Meaningful once [`Walker::walk`] has returned; entry order follows
    /// completion, not dispatch.
    pub fn failed_tasks(&self) -> Vec<FailedTask> {
        self.failed.snapshot()
    }
}
