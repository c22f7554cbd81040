use std::{io, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use logscope_search::{PendingSearch, SearchClient};
use logscope_tui_common::{project, render_results, search_label, status_banner, truncate_url};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::{runtime, sync::mpsc};

use crate::{App, Effect, Field, TuiEvent, TuiHandle, map_key};

/// How long to wait for a key before checking for finished searches.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Longest endpoint shown in the header.
const MAX_ENDPOINT_LEN: usize = 60;

/// Hint drawn in an empty time field.
const TIME_HINT: &str = "YYYY-MM-DDTHH:MM";

/// The LogScope TUI.
///
/// This struct owns the [`App`] and runs the event loop: it reads keys, maps
/// them to [`UiEvent`](crate::UiEvent)s, spawns searches on the tokio runtime,
/// and applies their completions as they come back over the event channel.
///
/// The screen shows, top to bottom:
/// - **Header**: endpoint and the search action label
/// - **Form**: query, level, start and end fields
/// - **Banner**: the error message, when the last search failed
/// - **Results**: the results table or the empty-result placeholder
/// - **Footer**: key hints
///
/// # Example
///
/// ```rust,ignore
/// use logscope_tui::{App, create_tui};
///
/// let (tui, _handle) = create_tui(App::new(endpoint), client, runtime.handle().clone());
///
/// // Blocks until the user quits with Esc
/// tui.run()?;
/// ```
pub struct LogscopeTui {
    /// Application state
    app: App,
    /// Receiver for search completions
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    /// Sender cloned into each search task
    handle: TuiHandle,
    /// Client the searches run against
    client: Arc<dyn SearchClient>,
    /// Runtime the searches run on
    runtime: runtime::Handle,
}

impl std::fmt::Debug for LogscopeTui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogscopeTui").field("app", &self.app).finish_non_exhaustive()
    }
}

impl LogscopeTui {
    /// The application state.
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// Run the TUI - this blocks until the user quits.
    ///
    /// This method enters the main TUI event loop, which:
    /// 1. Sets up the terminal in raw mode
    /// 2. Draws the form and results
    /// 3. Processes keyboard input and search completions
    /// 4. Cleans up and restores the terminal on exit
    ///
    /// The TUI can be exited by pressing Esc or Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or rendering fails.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let mut terminal = ratatui::init();

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        ratatui::restore();

        result
    }

    /// Main event loop - polls for keyboard events and search completions.
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| draw_ui(frame, &self.app))?;

            // Poll for keyboard events (100ms timeout)
            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && let Some(intent) = map_key(&self.app, key)
            {
                match self.app.dispatch(intent) {
                    Effect::None => {}
                    Effect::Search(pending) => self.spawn_search(pending),
                    Effect::Quit => return Ok(()),
                }
            }

            self.drain_events();
        }
    }

    /// Run `pending` on the runtime and report its completion through the handle.
    fn spawn_search(&self, pending: PendingSearch) {
        let client = Arc::clone(&self.client);
        let handle = self.handle.clone();
        self.runtime.spawn(async move {
            let completion = pending.execute(client.as_ref()).await;
            handle.send(TuiEvent::SearchFinished(completion));
        });
    }

    /// Apply every event already waiting on the channel, without blocking.
    ///
    /// Returns the number of events processed.
    pub fn drain_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            process_event(&mut self.app, event);
            processed += 1;
        }
        processed
    }
}

/// Create a TUI and its handle for sending events.
///
/// Searches issued from the TUI run against `client` on `runtime`. The returned
/// handle feeds the same channel those searches report on.
pub fn create_tui(
    app: App,
    client: Arc<dyn SearchClient>,
    runtime: runtime::Handle,
) -> (LogscopeTui, TuiHandle) {
    let (tx, event_rx) = mpsc::unbounded_channel();
    let handle = TuiHandle::new(tx);
    (LogscopeTui { app, event_rx, handle: handle.clone(), client, runtime }, handle)
}

/// Process a TUI event and update the app state.
fn process_event(app: &mut App, event: TuiEvent) {
    match event {
        TuiEvent::SearchFinished(completion) => {
            app.apply_completion(completion);
        }
    }
}

/// Draw the whole screen.
fn draw_ui(frame: &mut Frame<'_>, app: &App) {
    let banner = status_banner(app.state());
    let [header, form, banner_area, results, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(if banner.is_some() { 3 } else { 0 }),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    draw_form(frame, app, form);
    if let Some(message) = banner {
        draw_banner(frame, message, banner_area);
    }
    draw_results(frame, app, results);
    draw_footer(frame, footer);
}

/// Draw the header with the endpoint and search action.
fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let action_color = if state.is_loading() { Color::Yellow } else { Color::Green };

    let line = Line::from(vec![
        Span::styled("Endpoint: ", Style::default().fg(Color::DarkGray)),
        Span::styled(truncate_url(app.endpoint(), MAX_ENDPOINT_LEN), Style::default().fg(Color::White)),
        Span::raw("  |  "),
        Span::styled(format!("[{}]", search_label(state)), Style::default().fg(action_color).bold()),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" LogScope ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(widget, area);
}

/// Draw the search form and place the cursor in the focused text field.
fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let areas = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(14),
        Constraint::Percentage(23),
        Constraint::Percentage(23),
    ])
    .split(area);

    for (field, field_area) in Field::ALL.into_iter().zip(areas.iter().copied()) {
        let focused = app.focus() == field;
        let text = app.field_text(field);

        let content = match field {
            Field::Level => Span::styled(format!("< {text} >"), Style::default().fg(Color::White)),
            Field::Start | Field::End if text.is_empty() => {
                Span::styled(TIME_HINT, Style::default().fg(Color::DarkGray))
            }
            _ => Span::raw(text.to_string()),
        };

        let border = if focused { Color::Yellow } else { Color::DarkGray };
        let widget = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label())),
        );
        frame.render_widget(widget, field_area);

        if focused && field != Field::Level {
            let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
            let x = field_area.x.saturating_add(1).saturating_add(width);
            let max_x = field_area.right().saturating_sub(2);
            frame.set_cursor_position(Position::new(x.min(max_x), field_area.y + 1));
        }
    }
}

/// Draw the error banner.
fn draw_banner(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)))
    .wrap(Wrap { trim: true });

    frame.render_widget(widget, area);
}

/// Draw the results table.
fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match app.state().results() {
        Some(records) => format!(" Results ({}) ", records.len()),
        None => " Results ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));

    render_results(frame, area, &project(app.state()), block);
}

/// Draw the footer with key hints.
fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let footer_line = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Search  "),
        Span::styled("[Ctrl+S/F5]", Style::default().fg(Color::Yellow)),
        Span::raw(" Search  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Level  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);

    let widget = Paragraph::new(footer_line).block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}
