//! HTTP search client.
//!
//! This module provides a [`SearchClient`] implementation that issues plain
//! `GET` requests against the log store's search service.

use async_trait::async_trait;
use reqwest::Url;

use crate::{
    ClientConfig, LogRecord, LogSample, QueryParams, SearchClient, SearchError, parse_sample_body,
    parse_search_body,
};

/// Search client backed by `reqwest`.
///
/// No request timeout is configured; a search runs until the transport
/// completes or fails.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpSearchClient {
    /// Create a new HTTP search client.
    pub fn new(config: ClientConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the full request URL for a search with `params`.
    pub fn search_url(&self, params: &QueryParams) -> Result<Url, SearchError> {
        Url::parse_with_params(&self.config.search_endpoint, params.iter())
            .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {e}", self.config.search_endpoint)))
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, SearchError> {
        tracing::debug!(%url, "sending request");

        let response =
            self.client.get(url).send().await.map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

impl Default for HttpSearchClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, params: &QueryParams) -> Result<Vec<LogRecord>, SearchError> {
        let url = self.search_url(params)?;
        let body = self.get_bytes(url).await?;
        parse_search_body(&body)
    }

    async fn sample(&self) -> Result<LogSample, SearchError> {
        let url = Url::parse(&self.config.sample_endpoint).map_err(|e| {
            SearchError::InvalidEndpoint(format!("{}: {e}", self.config.sample_endpoint))
        })?;
        let body = self.get_bytes(url).await?;
        parse_sample_body(&body)
    }
}
