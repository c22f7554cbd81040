use tokio::sync::mpsc;

use crate::TuiEvent;

/// Handle for sending events to the TUI.
///
/// This handle wraps an unbounded channel sender and is cloned into every
/// search task so the task can report its completion.
///
/// # Example
///
/// ```rust,ignore
/// use logscope_tui::{TuiEvent, create_tui};
///
/// let (tui, handle) = create_tui(app, client, runtime.handle().clone());
///
/// runtime.spawn(async move {
///     let completion = pending.execute(&client).await;
///     handle.send(TuiEvent::SearchFinished(completion));
/// });
/// ```
#[derive(Debug, Clone)]
pub struct TuiHandle {
    /// Unbounded sender for TUI events
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiHandle {
    /// Create a new TUI handle from an unbounded sender.
    ///
    /// This is typically called internally by [`create_tui`](crate::create_tui).
    pub(crate) const fn new(tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the TUI.
    ///
    /// This method never blocks. If the TUI has already exited, the event is
    /// dropped.
    pub fn send(&self, event: TuiEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("tui closed, dropping event");
        }
    }
}
