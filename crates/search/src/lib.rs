#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/logscope/logscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

/// Search criteria and query parameter building.
///
/// [`SearchCriteria`] holds the user's form; [`SearchCriteria::to_params`]
/// produces the ordered [`QueryParams`] sent to the service.
mod criteria;
pub use criteria::{
    LogLevel, PARAM_END, PARAM_LEVEL, PARAM_QUERY, PARAM_START, QueryParams, SearchCriteria,
};

/// Records and response bodies.
mod record;
pub use record::{ERROR_LEVEL, LogRecord, LogSample, parse_sample_body, parse_search_body};

mod error;
pub use error::{FETCH_FAILED_MESSAGE, SearchError};

/// Search lifecycle state machine.
///
/// [`SearchState`] moves between `Idle`, `Loading`, `Success` and `Error`
/// only through [`SearchState::transition`].
mod state;
pub use state::{SearchEvent, SearchState};

mod config;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_SAMPLE_ENDPOINT, DEFAULT_SEARCH_ENDPOINT};

mod client;
pub use client::SearchClient;

mod http;
pub use http::HttpSearchClient;

/// Sequenced search orchestration.
///
/// The [`SearchController`] issues [`PendingSearch`]es and applies
/// [`SearchCompletion`]s, ignoring completions of superseded requests.
mod controller;
pub use controller::{PendingSearch, RequestId, SearchCompletion, SearchController};
