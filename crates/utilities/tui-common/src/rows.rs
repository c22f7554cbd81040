//! Projection of the search state into display rows.

use chrono::{Local, TimeZone};
use logscope_search::{LogRecord, SearchState};

use crate::{format_data, format_timestamp_in};

/// Placeholder shown when there is nothing to list.
pub const NO_RESULTS_MESSAGE: &str = "No logs found. Try adjusting your search criteria.";

/// Label of the search action while idle.
pub const SEARCH_LABEL: &str = "Search";

/// Label of the search action while a request is outstanding.
pub const SEARCHING_LABEL: &str = "Searching...";

/// One table row derived from a [`LogRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    /// Timestamp in the viewer's time zone.
    pub time: String,
    /// Level tag as received.
    pub level: String,
    /// Event label.
    pub event: String,
    /// Formatted payload, possibly spanning several lines.
    pub details: String,
    /// Set for error-level records.
    pub highlighted: bool,
}

impl ResultRow {
    /// Builds the row for `record`, rendering its timestamp in `tz`.
    pub fn from_record_in<Tz>(record: &LogRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: format_timestamp_in(&record.timestamp, tz),
            level: record.level.clone(),
            event: record.event.clone(),
            details: format_data(&record.data),
            highlighted: record.is_error(),
        }
    }

    /// Number of lines the details column needs.
    pub fn height(&self) -> usize {
        self.details.lines().count().max(1)
    }
}

/// What the results area shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    /// One row per record, in received order.
    Rows(Vec<ResultRow>),
    /// Nothing was found (or nothing searched yet).
    Placeholder,
    /// Nothing to list: a search is outstanding or the last one failed.
    Blank,
}

/// Project `state` into a [`ResultView`] using the viewer's local time zone.
pub fn project(state: &SearchState) -> ResultView {
    project_in(state, &Local)
}

/// Project `state` into a [`ResultView`], rendering timestamps in `tz`.
pub fn project_in<Tz>(state: &SearchState, tz: &Tz) -> ResultView
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match state {
        SearchState::Idle => ResultView::Placeholder,
        SearchState::Success(records) if records.is_empty() => ResultView::Placeholder,
        SearchState::Success(records) => {
            ResultView::Rows(records.iter().map(|r| ResultRow::from_record_in(r, tz)).collect())
        }
        SearchState::Loading | SearchState::Error(_) => ResultView::Blank,
    }
}

/// Label for the search action in `state`.
pub const fn search_label(state: &SearchState) -> &'static str {
    if state.is_loading() { SEARCHING_LABEL } else { SEARCH_LABEL }
}

/// Error banner text for `state`, if any.
pub fn status_banner(state: &SearchState) -> Option<&str> {
    state.error_message()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use logscope_search::FETCH_FAILED_MESSAGE;
    use serde_json::json;

    use super::*;

    fn record(level: &str, event: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            level: level.to_string(),
            event: event.to_string(),
            data: json!({"code": 504}),
        }
    }

    #[test]
    fn error_record_row() {
        let state = SearchState::Success(vec![record("error", "conn_drop")]);
        let ResultView::Rows(rows) = project_in(&state, &Utc) else {
            panic!("expected rows");
        };
        assert_eq!(
            rows,
            vec![ResultRow {
                time: "2024-01-01 00:00:00".to_string(),
                level: "error".to_string(),
                event: "conn_drop".to_string(),
                details: "{\n  \"code\": 504\n}".to_string(),
                highlighted: true,
            }]
        );
        assert_eq!(rows[0].height(), 3);
    }

    #[test]
    fn rows_keep_received_order() {
        let state = SearchState::Success(vec![
            record("info", "b"),
            record("error", "a"),
            record("info", "c"),
        ]);
        let ResultView::Rows(rows) = project_in(&state, &Utc) else {
            panic!("expected rows");
        };
        let events: Vec<_> = rows.iter().map(|r| r.event.as_str()).collect();
        assert_eq!(events, vec!["b", "a", "c"]);
        let highlighted: Vec<_> = rows.iter().map(|r| r.highlighted).collect();
        assert_eq!(highlighted, vec![false, true, false]);
    }

    #[test]
    fn highlight_depends_only_on_level() {
        let row = ResultRow::from_record_in(&record("ERROR", "x"), &Utc);
        assert!(!row.highlighted);
    }

    #[test]
    fn empty_success_shows_placeholder() {
        assert_eq!(project(&SearchState::Success(vec![])), ResultView::Placeholder);
    }

    #[test]
    fn idle_shows_placeholder() {
        assert_eq!(project(&SearchState::Idle), ResultView::Placeholder);
    }

    #[test]
    fn loading_and_error_show_nothing() {
        assert_eq!(project(&SearchState::Loading), ResultView::Blank);
        assert_eq!(project(&SearchState::Error(FETCH_FAILED_MESSAGE.into())), ResultView::Blank);
    }

    #[test]
    fn labels_and_banner() {
        assert_eq!(search_label(&SearchState::Loading), "Searching...");
        assert_eq!(search_label(&SearchState::Idle), "Search");
        assert_eq!(status_banner(&SearchState::Idle), None);
        assert_eq!(
            status_banner(&SearchState::Error(FETCH_FAILED_MESSAGE.into())),
            Some("Failed to fetch logs. Please try again.")
        );
    }

    #[test]
    fn scalar_payload_is_single_line() {
        let mut rec = record("info", "tick");
        rec.data = json!(7);
        assert_eq!(ResultRow::from_record_in(&rec, &Utc).height(), 1);
    }
}
