//! Search error types.

use thiserror::Error;

/// Message shown to the user for every failed search.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch logs. Please try again.";

/// Errors raised while issuing a search or reading its response.
///
/// None of these are shown to the user verbatim; they are logged and collapsed
/// into [`FETCH_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The service answered with a non-success status.
    #[error("Search failed with status {0}")]
    Status(u16),

    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not a valid search response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The service answered successfully but reported an error in the body.
    #[error("Service error: {0}")]
    Service(String),

    /// The configured endpoint is not a usable URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl SearchError {
    /// Returns `true` if the service answered with a failure status.
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    /// Returns `true` if the failure happened while issuing or parsing the request.
    pub const fn is_fault(&self) -> bool {
        !self.is_status()
    }
}
