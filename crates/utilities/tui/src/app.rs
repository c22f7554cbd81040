use logscope_search::{
    PendingSearch, SearchCompletion, SearchController, SearchCriteria, SearchState,
};

use crate::UiEvent;

/// Form field that currently receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// Free-text query.
    #[default]
    Query,
    /// Level choice.
    Level,
    /// Range start.
    Start,
    /// Range end.
    End,
}

impl Field {
    /// All fields in focus order.
    pub const ALL: [Self; 4] = [Self::Query, Self::Level, Self::Start, Self::End];

    /// The field after this one, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Query => Self::Level,
            Self::Level => Self::Start,
            Self::Start => Self::End,
            Self::End => Self::Query,
        }
    }

    /// The field before this one, wrapping around.
    pub const fn previous(self) -> Self {
        match self {
            Self::Query => Self::End,
            Self::Level => Self::Query,
            Self::Start => Self::Level,
            Self::End => Self::Start,
        }
    }

    /// Title shown above the field.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Query => "Search",
            Self::Level => "Level",
            Self::Start => "Start Time",
            Self::End => "End Time",
        }
    }
}

/// What the event loop must do after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing.
    None,
    /// Execute this search and report its completion.
    Search(PendingSearch),
    /// Leave the console.
    Quit,
}

/// Application state for the LogScope TUI.
///
/// Holds the search form, the focused field, and the [`SearchController`]
/// that owns the search lifecycle. Key input reaches it as [`UiEvent`]s through
/// [`App::dispatch`]; finished searches arrive through
/// [`App::apply_completion`].
#[derive(Debug)]
pub struct App {
    /// Current form values.
    criteria: SearchCriteria,
    /// Field receiving key input.
    focus: Field,
    /// Search endpoint, shown in the header.
    endpoint: String,
    /// Search lifecycle.
    controller: SearchController,
}

impl App {
    /// Create an app with an empty form talking to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            focus: Field::default(),
            endpoint: endpoint.into(),
            controller: SearchController::new(),
        }
    }

    /// Prefill the form.
    pub fn with_criteria(mut self, criteria: SearchCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Current form values.
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Field receiving key input.
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// Search endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current search state.
    pub const fn state(&self) -> &SearchState {
        self.controller.state()
    }

    /// Text currently held by `field`.
    ///
    /// The level field shows `All` when no level is chosen.
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Query => &self.criteria.query,
            Field::Level => self.criteria.level.as_ref().map_or("All", |level| level.as_str()),
            Field::Start => self.criteria.start_time.as_deref().unwrap_or_default(),
            Field::End => self.criteria.end_time.as_deref().unwrap_or_default(),
        }
    }

    /// Handle one user intent.
    pub fn dispatch(&mut self, event: UiEvent) -> Effect {
        match event {
            UiEvent::QueryChanged(query) => self.criteria.query = query,
            UiEvent::LevelChanged(level) => self.criteria.level = level,
            UiEvent::StartTimeChanged(start) => self.criteria.start_time = Some(start),
            UiEvent::EndTimeChanged(end) => self.criteria.end_time = Some(end),
            UiEvent::FocusNext => self.focus = self.focus.next(),
            UiEvent::FocusPrevious => self.focus = self.focus.previous(),
            UiEvent::SubmitSearch => return Effect::Search(self.controller.begin(&self.criteria)),
            UiEvent::Quit => return Effect::Quit,
        }
        Effect::None
    }

    /// Apply a finished search. Returns `false` if it was superseded.
    pub fn apply_completion(&mut self, completion: SearchCompletion) -> bool {
        self.controller.complete(completion)
    }
}

#[cfg(test)]
mod tests {
    use logscope_search::{
        FETCH_FAILED_MESSAGE, LogLevel, LogRecord, PARAM_END, PARAM_LEVEL, PARAM_START,
        SearchError,
    };
    use rstest::rstest;

    use super::*;

    fn app() -> App {
        App::new("http://localhost:5005/api/search")
    }

    fn submit(app: &mut App) -> PendingSearch {
        match app.dispatch(UiEvent::SubmitSearch) {
            Effect::Search(pending) => pending,
            other => panic!("expected a search, got {other:?}"),
        }
    }

    fn record(event: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            level: "info".to_string(),
            event: event.to_string(),
            data: serde_json::Value::Null,
        }
    }

    #[rstest]
    #[case(Field::Query, Field::Level)]
    #[case(Field::Level, Field::Start)]
    #[case(Field::Start, Field::End)]
    #[case(Field::End, Field::Query)]
    fn focus_order(#[case] from: Field, #[case] to: Field) {
        assert_eq!(from.next(), to);
        assert_eq!(to.previous(), from);
    }

    #[test]
    fn field_edits_touch_one_slot() {
        let mut app = app();
        assert_eq!(app.dispatch(UiEvent::QueryChanged("timeout".into())), Effect::None);
        assert_eq!(app.dispatch(UiEvent::LevelChanged(Some(LogLevel::Error))), Effect::None);
        assert_eq!(app.criteria().query, "timeout");
        assert_eq!(app.criteria().level, Some(LogLevel::Error));
        assert_eq!(app.criteria().start_time, None);

        app.dispatch(UiEvent::StartTimeChanged("2024-01-01T00:00".into()));
        app.dispatch(UiEvent::EndTimeChanged("2024-01-02T00:00".into()));
        assert_eq!(app.field_text(Field::Start), "2024-01-01T00:00");
        assert_eq!(app.field_text(Field::End), "2024-01-02T00:00");
        assert_eq!(app.state(), &SearchState::Idle);
    }

    #[test]
    fn level_field_text() {
        let mut app = app();
        assert_eq!(app.field_text(Field::Level), "All");
        app.dispatch(UiEvent::LevelChanged(Some(LogLevel::Info)));
        assert_eq!(app.field_text(Field::Level), "info");
    }

    #[test]
    fn submit_enters_loading_with_form_params() {
        let mut app = app().with_criteria(SearchCriteria::new("db").with_level(LogLevel::Error));
        let pending = submit(&mut app);
        assert!(app.state().is_loading());
        assert_eq!(pending.params.get("q"), Some("db"));
        assert_eq!(pending.params.get(PARAM_LEVEL), Some("error"));
        assert!(!pending.params.contains_key(PARAM_START));
    }

    #[test]
    fn cleared_time_field_is_not_sent() {
        let mut app = app();
        app.dispatch(UiEvent::StartTimeChanged("2024".into()));
        app.dispatch(UiEvent::StartTimeChanged(String::new()));
        app.dispatch(UiEvent::EndTimeChanged(String::new()));
        let pending = submit(&mut app);
        assert!(!pending.params.contains_key(PARAM_START));
        assert!(!pending.params.contains_key(PARAM_END));
    }

    #[test]
    fn completion_lands_success() {
        let mut app = app();
        let pending = submit(&mut app);
        assert!(app.apply_completion(SearchCompletion {
            id: pending.id,
            outcome: Ok(vec![record("a")]),
        }));
        assert_eq!(app.state(), &SearchState::Success(vec![record("a")]));
    }

    #[test]
    fn failure_shows_fixed_message() {
        let mut app = app();
        let pending = submit(&mut app);
        app.apply_completion(SearchCompletion {
            id: pending.id,
            outcome: Err(SearchError::Status(500)),
        });
        assert_eq!(app.state().error_message(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn superseded_completion_is_ignored() {
        let mut app = app();
        let first = submit(&mut app);
        let second = submit(&mut app);

        assert!(app.apply_completion(SearchCompletion {
            id: second.id,
            outcome: Ok(vec![record("second")]),
        }));
        assert!(!app.apply_completion(SearchCompletion {
            id: first.id,
            outcome: Ok(vec![record("first")]),
        }));
        assert_eq!(app.state(), &SearchState::Success(vec![record("second")]));
    }

    #[test]
    fn quit() {
        assert_eq!(app().dispatch(UiEvent::Quit), Effect::Quit);
    }
}
