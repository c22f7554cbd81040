//! Search lifecycle state machine.

use crate::{FETCH_FAILED_MESSAGE, LogRecord};

/// Lifecycle of the current search.
///
/// Exactly one variant is active at a time. The state is replaced, never
/// mutated, and only changes through [`SearchState::transition`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    /// No search has been issued yet.
    #[default]
    Idle,
    /// A search is outstanding.
    Loading,
    /// The latest search returned these records, in received order.
    Success(Vec<LogRecord>),
    /// The latest search failed with a user-facing message.
    Error(String),
}

/// Discrete events that move the search lifecycle forward.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    /// A new search was triggered.
    Submitted,
    /// The outstanding search returned records.
    Succeeded(Vec<LogRecord>),
    /// The outstanding search failed or faulted.
    Failed,
}

impl SearchState {
    /// Returns the state that follows `self` after `event`.
    ///
    /// `Submitted` always enters `Loading`, dropping any previous results or
    /// error. Completions only apply while `Loading`; anywhere else they
    /// leave the state untouched.
    pub fn transition(self, event: SearchEvent) -> Self {
        match (self, event) {
            (_, SearchEvent::Submitted) => Self::Loading,
            (Self::Loading, SearchEvent::Succeeded(results)) => Self::Success(results),
            (Self::Loading, SearchEvent::Failed) => Self::Error(FETCH_FAILED_MESSAGE.to_string()),
            (state, _) => state,
        }
    }

    /// Returns `true` while a search is outstanding.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Records of a successful search, if any.
    pub fn results(&self) -> Option<&[LogRecord]> {
        match self {
            Self::Success(results) => Some(results),
            _ => None,
        }
    }

    /// User-facing error message, if the latest search failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
