//! HTTP source adapter
//!
//! Wraps a caller-supplied request builder and a `reqwest::Client` into a
//! [`Source`]. The payload is `Option<Response>` so a failed fetch forwards
//! `None` to the sink, per the engine's forward-on-fetch-error contract.

use crate::config::WalkerConfig;
use crate::error::Result;
use crate::walker::{Sink, Source, Walker};
use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// HTTP source built from a request-building function.
///
/// The builder receives the `(start, fetch_count)` pair computed by the
/// pagination strategy and produces one request per fetch.
pub struct ApiSource<F> {
    client: Client,
    request_builder: F,
}

impl<F> ApiSource<F>
where
    F: Fn(u64, u64) -> Result<Request> + Send + Sync,
{
    /// Create an HTTP source from a client and a request builder
    pub fn new(client: Client, request_builder: F) -> Self {
        Self {
            client,
            request_builder,
        }
    }
}

#[async_trait]
impl<F> Source<Option<Response>> for ApiSource<F>
where
    F: Fn(u64, u64) -> Result<Request> + Send + Sync,
{
    async fn fetch(&self, start: u64, fetch_count: u64) -> Result<Option<Response>> {
        let request = (self.request_builder)(start, fetch_count)?;
        let response = self.client.execute(request).await?;
        Ok(Some(response))
    }
}

/// Create a walker over an HTTP API.
///
/// A failed request (builder or transport) shows up in the failure ledger
/// and hands the sink a `None` page.
pub fn api_walker<F, K>(
    client: Client,
    request_builder: F,
    sink: K,
    config: WalkerConfig,
) -> Walker<Option<Response>>
where
    F: Fn(u64, u64) -> Result<Request> + Send + Sync + 'static,
    K: Sink<Option<Response>> + 'static,
{
    Walker::new(ApiSource::new(client, request_builder), sink, config)
}
