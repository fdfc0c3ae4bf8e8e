//! # pagewalk
//!
//! A generic, concurrent pagination engine: give it a "fetch a page starting
//! at index X with count N" operation and a "consume a fetched page"
//! operation, and it walks a bounded or unbounded logical sequence in
//! parallel. Batch math, worker parallelism, pagination addressing, rate
//! limiting, cooperative stop, and failure accounting are all handled.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::{limit, CursorPagination, FnSink, FnSource, Walker, WalkerConfig};
//!
//! #[tokio::main]
//! async fn main() -> pagewalk::Result<()> {
//!     let source = FnSource::new(|start, count| Ok(load_rows(start, count)?));
//!     let sink = FnSink::new(|rows: Vec<Row>, stop| {
//!         if rows.is_empty() {
//!             stop.stop();
//!         }
//!         process(rows)
//!     });
//!
//!     let config = WalkerConfig::builder()
//!         .max_batch_size(100)
//!         .parallelism(8)
//!         .pagination(CursorPagination)
//!         .limiter(limit::infinite())
//!         .build()?;
//!
//!     let walker = Walker::new(source, sink, config);
//!     walker.walk().await;
//!
//!     for failed in walker.failed_tasks() {
//!         eprintln!("range {}+{} failed: {}", failed.start, failed.fetch_count, failed.error);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Walker::walk()                          │
//! │  limiter() → limit    Batch::plan → rounds    rate limit gate  │
//! └───────────────────────────────┬────────────────────────────────┘
//!                                 │ (start, fetch_count) per worker slot
//! ┌──────────────┬────────────────┴───────────────┬────────────────┐
//! │  Pagination  │          Fetch stage           │ Consume stage  │
//! ├──────────────┼────────────────────────────────┼────────────────┤
//! │ Offset       │ capacity = parallelism         │ capacity = 2×  │
//! │ Cursor       │ Source::fetch, ledger on error │ Sink::consume  │
//! └──────────────┴────────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Batch planning
pub mod batch;

/// Run limiters
pub mod limit;

/// Pagination strategies
pub mod pagination;

/// Dispatch rate limiting
pub mod rate_limit;

/// Walker configuration
pub mod config;

/// The walker engine
pub mod walker;

/// HTTP source adapter
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use batch::Batch;
pub use config::{WalkerConfig, WalkerConfigBuilder};
pub use error::{Error, Result};
pub use http::{api_walker, ApiSource};
pub use limit::{Limiter, INFINITE};
pub use pagination::{CursorPagination, OffsetPagination, Pagination};
pub use rate_limit::RateLimit;
pub use walker::{FailedTask, FnSink, FnSource, Sink, Source, StopHandle, Walker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
