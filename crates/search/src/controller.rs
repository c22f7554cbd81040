//! Search controller.
//!
//! The [`SearchController`] owns the [`SearchState`] and is the only writer of
//! it. Each search is issued with a fresh [`RequestId`]; when several searches
//! are in flight, only the completion carrying the most recent id is applied.

use std::fmt;

use crate::{
    LogRecord, QueryParams, SearchClient, SearchCriteria, SearchError, SearchEvent, SearchState,
};

/// Monotonically increasing identifier of an issued search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// The raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A search that has been started but not yet executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSearch {
    /// Sequence token of this search.
    pub id: RequestId,
    /// Parameters to send.
    pub params: QueryParams,
}

impl PendingSearch {
    /// Runs this search against `client`.
    ///
    /// Never touches controller state, so it can run on another task while the
    /// controller keeps serving the UI.
    pub async fn execute<C>(self, client: &C) -> SearchCompletion
    where
        C: SearchClient + ?Sized,
    {
        let outcome = client.search(&self.params).await;
        SearchCompletion { id: self.id, outcome }
    }
}

/// Result of an executed search, tagged with its request id.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCompletion {
    /// Sequence token of the search that produced this outcome.
    pub id: RequestId,
    /// Records, or the error that ended the search.
    pub outcome: Result<Vec<LogRecord>, SearchError>,
}

/// Owns the search lifecycle.
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    latest: RequestId,
}

impl SearchController {
    /// Create a controller in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search state.
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Id of the most recently issued search.
    pub const fn latest_request(&self) -> RequestId {
        self.latest
    }

    /// Starts a search for `criteria`.
    ///
    /// Enters `Loading` and returns the parameters to send together with a new
    /// request id. Any earlier search still in flight becomes stale.
    pub fn begin(&mut self, criteria: &SearchCriteria) -> PendingSearch {
        self.latest = RequestId(self.latest.0 + 1);
        self.apply(SearchEvent::Submitted);

        let params = criteria.to_params();
        tracing::debug!(request_id = self.latest.0, params = ?params, "search started");
        PendingSearch { id: self.latest, params }
    }

    /// Applies a finished search.
    ///
    /// Returns `false` and leaves the state alone if `completion` belongs to a
    /// search that has since been superseded. Failures are logged here and
    /// surface to the user only as the fixed error message.
    pub fn complete(&mut self, completion: SearchCompletion) -> bool {
        let SearchCompletion { id, outcome } = completion;
        if id != self.latest {
            tracing::debug!(
                request_id = id.0,
                latest = self.latest.0,
                "dropping stale search completion"
            );
            return false;
        }

        let event = match outcome {
            Ok(results) => {
                tracing::info!(request_id = id.0, count = results.len(), "search completed");
                SearchEvent::Succeeded(results)
            }
            Err(e) => {
                tracing::warn!(request_id = id.0, error = %e, "log search failed");
                SearchEvent::Failed
            }
        };
        self.apply(event);
        true
    }

    /// Runs one search to completion and returns the resulting state.
    pub async fn run_search<C>(&mut self, client: &C, criteria: &SearchCriteria) -> &SearchState
    where
        C: SearchClient + ?Sized,
    {
        let pending = self.begin(criteria);
        let completion = pending.execute(client).await;
        self.complete(completion);
        &self.state
    }

    fn apply(&mut self, event: SearchEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::{FETCH_FAILED_MESSAGE, LogLevel, LogSample};

    /// In-memory client returning a fixed outcome and recording what it was asked.
    struct FixedClient {
        outcome: Result<Vec<LogRecord>, SearchError>,
        seen: Mutex<Vec<QueryParams>>,
    }

    impl FixedClient {
        fn new(outcome: Result<Vec<LogRecord>, SearchError>) -> Self {
            Self { outcome, seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl SearchClient for FixedClient {
        async fn search(&self, params: &QueryParams) -> Result<Vec<LogRecord>, SearchError> {
            self.seen.lock().unwrap().push(params.clone());
            self.outcome.clone()
        }

        async fn sample(&self) -> Result<LogSample, SearchError> {
            Ok(LogSample::default())
        }
    }

    fn conn_drop() -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            level: "error".to_string(),
            event: "conn_drop".to_string(),
            data: json!({"code": 504}),
        }
    }

    #[test]
    fn begin_enters_loading_with_fresh_ids() {
        let mut controller = SearchController::new();
        assert_eq!(controller.state(), &SearchState::Idle);

        let first = controller.begin(&SearchCriteria::new("a"));
        assert!(controller.state().is_loading());
        let second = controller.begin(&SearchCriteria::new("b"));

        assert!(second.id > first.id);
        assert_eq!(controller.latest_request(), second.id);
        assert_eq!(second.params.get("q"), Some("b"));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut controller = SearchController::new();
        let older = controller.begin(&SearchCriteria::new("old"));
        let newer = controller.begin(&SearchCriteria::new("new"));

        let applied = controller.complete(SearchCompletion { id: older.id, outcome: Ok(vec![]) });
        assert!(!applied);
        assert!(controller.state().is_loading());

        let applied =
            controller.complete(SearchCompletion { id: newer.id, outcome: Ok(vec![conn_drop()]) });
        assert!(applied);
        assert_eq!(controller.state().results().map(<[_]>::len), Some(1));
    }

    #[test]
    fn late_stale_completion_does_not_overwrite() {
        let mut controller = SearchController::new();
        let older = controller.begin(&SearchCriteria::new("old"));
        let newer = controller.begin(&SearchCriteria::new("new"));

        controller.complete(SearchCompletion { id: newer.id, outcome: Ok(vec![conn_drop()]) });
        controller.complete(SearchCompletion { id: older.id, outcome: Err(SearchError::Status(500)) });

        assert_eq!(controller.state(), &SearchState::Success(vec![conn_drop()]));
    }

    #[tokio::test]
    async fn run_search_success() {
        let client = FixedClient::new(Ok(vec![conn_drop()]));
        let mut controller = SearchController::new();
        let criteria = SearchCriteria::new("timeout").with_level(LogLevel::Error);

        let state = controller.run_search(&client, &criteria).await;

        assert_eq!(state, &SearchState::Success(vec![conn_drop()]));
        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].iter().collect::<Vec<_>>(), vec![("q", "timeout"), ("level", "error")]);
    }

    #[tokio::test]
    async fn run_search_status_failure_replaces_rows() {
        let mut controller = SearchController::new();
        controller.run_search(&FixedClient::new(Ok(vec![conn_drop()])), &SearchCriteria::default()).await;
        assert!(controller.state().results().is_some());

        let failing = FixedClient::new(Err(SearchError::Status(500)));
        let state = controller.run_search(&failing, &SearchCriteria::default()).await;

        assert_eq!(state, &SearchState::Error(FETCH_FAILED_MESSAGE.to_string()));
        assert!(!state.is_loading());
        assert!(state.results().is_none());
    }

    #[tokio::test]
    async fn run_search_fault_uses_fixed_message() {
        let client = FixedClient::new(Err(SearchError::Transport("connection refused".into())));
        let mut controller = SearchController::new();

        let state = controller.run_search(&client, &SearchCriteria::new("x")).await;

        assert_eq!(state.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert!(!state.error_message().unwrap().contains("refused"));
    }

    #[tokio::test]
    async fn retry_after_error_returns_to_loading_then_success() {
        let mut controller = SearchController::new();
        controller
            .run_search(&FixedClient::new(Err(SearchError::Parse("eof".into()))), &SearchCriteria::default())
            .await;

        let pending = controller.begin(&SearchCriteria::default());
        assert!(controller.state().is_loading());

        let completion = pending.execute(&FixedClient::new(Ok(vec![]))).await;
        assert!(controller.complete(completion));
        assert_eq!(controller.state(), &SearchState::Success(vec![]));
    }

    #[test]
    fn request_id_display() {
        let mut controller = SearchController::new();
        let pending = controller.begin(&SearchCriteria::default());
        assert_eq!(pending.id.to_string(), "#1");
        assert_eq!(pending.id.get(), 1);
    }
}
