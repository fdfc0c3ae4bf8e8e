//! Walker configuration
//!
//! A [`WalkerConfig`] is the resolved set of tunables for one walker:
//! batch size, parallelism, pagination strategy, run limiter, rate limit,
//! and cancellation token. Build one with [`WalkerConfig::builder`];
//! validation rejects values that would break the batch math.

use crate::error::{Error, Result};
use crate::limit::{self, Limiter};
use crate::pagination::{OffsetPagination, Pagination};
use crate::rate_limit::RateLimit;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default max items per fetch
pub const DEFAULT_MAX_BATCH_SIZE: u64 = 10;

/// Resolved configuration for a walker
#[derive(Clone)]
pub struct WalkerConfig {
    /// Max items per fetch
    pub max_batch_size: u64,
    /// Number of concurrent fetch workers; consume workers get twice this
    pub parallelism: usize,
    /// Addressing strategy mapping worker slots to `(start, fetch_count)`
    pub pagination: Arc<dyn Pagination>,
    /// Resolves the run's total item count, once at walk start
    pub limiter: Limiter,
    /// Optional global cap on fetch dispatches per interval
    pub rate_limit: Option<RateLimit>,
    /// External cancellation; makes suspended dispatch return promptly
    pub cancel: CancellationToken,
}

impl WalkerConfig {
    /// Create a new config builder
    pub fn builder() -> WalkerConfigBuilder {
        WalkerConfigBuilder::default()
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            parallelism: num_cpus::get(),
            pagination: Arc::new(OffsetPagination),
            limiter: limit::infinite(),
            rate_limit: None,
            cancel: CancellationToken::new(),
        }
    }
}

impl std::fmt::Debug for WalkerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalkerConfig")
            .field("max_batch_size", &self.max_batch_size)
            .field("parallelism", &self.parallelism)
            .field("rate_limit", &self.rate_limit)
            .finish_non_exhaustive()
    }
}

/// Builder for walker config
#[derive(Default)]
pub struct WalkerConfigBuilder {
    config: WalkerConfig,
}

impl WalkerConfigBuilder {
    /// Set the max items per fetch
    pub fn max_batch_size(mut self, size: u64) -> Self {
        self.config.max_batch_size = size;
        self
    }

    /// Set the number of concurrent fetch workers
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.config.parallelism = parallelism;
        self
    }

    /// Set the pagination strategy
    pub fn pagination(mut self, pagination: impl Pagination + 'static) -> Self {
        self.config.pagination = Arc::new(pagination);
        self
    }

    /// Set the run limiter
    pub fn limiter(mut self, limiter: Limiter) -> Self {
        self.config.limiter = limiter;
        self
    }

    /// Cap fetch dispatches at `count` per `per`
    pub fn rate_limit(mut self, count: u32, per: Duration) -> Self {
        self.config.rate_limit = Some(RateLimit::new(count, per));
        self
    }

    /// Set an external cancellation token
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.config.cancel = token;
        self
    }

    /// Validate and build the config.
    ///
    /// Zero `max_batch_size` or `parallelism` is rejected here so the batch
    /// math never sees a zero divisor.
    pub fn build(self) -> Result<WalkerConfig> {
        if self.config.max_batch_size == 0 {
            return Err(Error::invalid_config(
                "max_batch_size",
                "must be at least 1",
            ));
        }
        if self.config.parallelism == 0 {
            return Err(Error::invalid_config("parallelism", "must be at least 1"));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::CursorPagination;

    #[test]
    fn test_default_config() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_batch_size, DEFAULT_MAX_BATCH_SIZE);
        assert_eq!(config.parallelism, num_cpus::get());
        assert!(config.rate_limit.is_none());
        assert_eq!((config.limiter)(), crate::limit::INFINITE);
        assert!(!config.cancel.is_cancelled());
    }

    #[test]
    fn test_builder_overrides() {
        let config = WalkerConfig::builder()
            .max_batch_size(25)
            .parallelism(4)
            .pagination(CursorPagination)
            .limiter(crate::limit::constant(100))
            .rate_limit(50, Duration::from_secs(1))
            .build()
            .unwrap();

        assert_eq!(config.max_batch_size, 25);
        assert_eq!(config.parallelism, 4);
        assert_eq!((config.limiter)(), 100);
        assert_eq!(config.rate_limit, Some(RateLimit::per_second(50)));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let err = WalkerConfig::builder().max_batch_size(0).build().unwrap_err();
        assert!(err.to_string().contains("max_batch_size"));
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let err = WalkerConfig::builder().parallelism(0).build().unwrap_err();
        assert!(err.to_string().contains("parallelism"));
    }
}
