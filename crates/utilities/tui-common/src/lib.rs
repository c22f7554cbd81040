#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/logscope/logscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

/// Helper functions for formatting data in the TUI.
///
/// The [`truncate_url`], [`format_timestamp`] and [`format_timestamp_in`]
/// functions prepare values for display.
mod helpers;
pub use helpers::{
    INVALID_DATE, format_timestamp, format_timestamp_in, parse_timestamp, truncate_url,
};

/// Best-effort payload formatting.
///
/// [`format_data`] never fails: pretty JSON, then compact JSON, then
/// [`UNSERIALIZABLE_PLACEHOLDER`].
mod format;
pub use format::{UNSERIALIZABLE_PLACEHOLDER, format_data};

/// Projection of the search state into rows.
///
/// The [`project`] function is a pure function of the current
/// `SearchState`; it never touches the network or the terminal.
mod rows;
pub use rows::{
    NO_RESULTS_MESSAGE, ResultRow, ResultView, SEARCH_LABEL, SEARCHING_LABEL, project, project_in,
    search_label, status_banner,
};

/// Rendering utilities for converting result rows to ratatui widgets.
///
/// The [`result_table`] and [`render_results`] functions draw rows in the
/// terminal; [`render_plain`] produces text for stdout.
mod render;
pub use render::{COLUMN_HEADERS, render_plain, render_results, result_table};
