//! Search client trait.

use async_trait::async_trait;

use crate::{LogRecord, LogSample, QueryParams, SearchError};

/// Trait for querying a remote log store.
///
/// Used by the [`SearchController`](crate::SearchController) to run searches
/// against the HTTP service or any other backend.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one search with the given parameters.
    ///
    /// Returns the records in the order the service sent them.
    async fn search(&self, params: &QueryParams) -> Result<Vec<LogRecord>, SearchError>;

    /// Fetch raw sample lines from the store, for diagnostics.
    async fn sample(&self) -> Result<LogSample, SearchError>;
}
