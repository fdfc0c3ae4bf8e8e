//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. The walker paces
//! dispatches evenly: a limit of `count` per `per` spaces permits
//! `per / count` apart with no burst, so stop latency after a rate-limited
//! wait stays bounded by one interval.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the dispatch rate limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum number of fetch dispatches per interval
    pub count: u32,
    /// The interval the count applies to
    pub per: Duration,
}

impl RateLimit {
    /// Create a new rate limit of `count` dispatches per `per`
    pub fn new(count: u32, per: Duration) -> Self {
        Self { count, per }
    }

    /// Create a per-second rate limit
    pub fn per_second(count: u32) -> Self {
        Self {
            count,
            per: Duration::from_secs(1),
        }
    }
}

/// Pacing gate shared by all fetch dispatches of one walker
#[derive(Clone)]
pub enum RateLimiter {
    /// No rate limit configured; `take` never blocks
    Unlimited,
    /// Token bucket paced at one permit per interval
    Governed(Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>),
}

impl RateLimiter {
    /// Create a rate limiter from an optional configuration
    pub fn new(rate_limit: Option<RateLimit>) -> Self {
        match rate_limit {
            None => Self::Unlimited,
            Some(limit) => {
                let count = NonZeroU32::new(limit.count).unwrap_or(NonZeroU32::MIN);
                let interval = limit.per / count.get();
                let quota = Quota::with_period(interval)
                    .unwrap_or_else(|| Quota::per_second(count))
                    .allow_burst(NonZeroU32::MIN);
                Self::Governed(Arc::new(Governor::direct(quota)))
            }
        }
    }

    /// Wait until the next dispatch may proceed
    pub async fn take(&self) {
        match self {
            Self::Unlimited => {}
            Self::Governed(governor) => governor.until_ready().await,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::Unlimited
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => f.write_str("RateLimiter::Unlimited"),
            Self::Governed(_) => f.write_str("RateLimiter::Governed"),
        }
    }
}
