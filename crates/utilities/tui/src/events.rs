use logscope_search::{LogLevel, SearchCompletion};

/// Events delivered to the TUI from outside the key loop.
///
/// Searches run as tasks on the tokio runtime and report back through a
/// [`TuiHandle`](crate::TuiHandle) with one of these.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// A search task finished, successfully or not.
    ///
    /// The completion still carries its request id; the app decides whether it
    /// is the latest one.
    SearchFinished(SearchCompletion),
}

/// User intents produced by the key map and handled by
/// [`App::dispatch`](crate::App::dispatch).
///
/// Each variant touches exactly one slot of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New text of the query field.
    QueryChanged(String),
    /// New level choice; `None` means all levels.
    LevelChanged(Option<LogLevel>),
    /// New text of the range start field.
    StartTimeChanged(String),
    /// New text of the range end field.
    EndTimeChanged(String),
    /// Move focus to the next form field.
    FocusNext,
    /// Move focus to the previous form field.
    FocusPrevious,
    /// Run a search with the current form.
    SubmitSearch,
    /// Leave the console.
    Quit,
}
