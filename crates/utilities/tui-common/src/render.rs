//! Rendering utilities for converting result rows to ratatui widgets and text.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Text},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{NO_RESULTS_MESSAGE, ResultRow, ResultView};

/// Column titles of the results table.
pub const COLUMN_HEADERS: [&str; 4] = ["TIME", "LEVEL", "EVENT", "DETAILS"];

/// Background of error-level rows.
const ERROR_ROW_BG: Color = Color::Indexed(52);

/// Style of the level badge for a row.
fn level_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::Blue)
    }
}

/// Build the results table for `rows`.
///
/// Each row is as tall as its details column. Error-level rows get a dark red
/// background and a red level badge; other rows get a blue badge.
///
/// # Examples
///
/// ```
/// use logscope_tui_common::result_table;
///
/// let table = result_table(&[]);
/// # let _ = table;
/// ```
pub fn result_table(rows: &[ResultRow]) -> Table<'static> {
    let header = Row::new(COLUMN_HEADERS.map(|title| {
        Cell::from(title).style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD))
    }))
    .bottom_margin(1);

    let body = rows.iter().map(|row| {
        let style =
            if row.highlighted { Style::default().bg(ERROR_ROW_BG) } else { Style::default() };
        Row::new(vec![
            Cell::from(row.time.clone()),
            Cell::from(Span::styled(format!(" {} ", row.level), level_style(row.highlighted))),
            Cell::from(row.event.clone()),
            Cell::from(Text::from(row.details.clone())),
        ])
        .height(u16::try_from(row.height()).unwrap_or(u16::MAX))
        .style(style)
    });

    Table::new(
        body,
        [
            Constraint::Length(19),
            Constraint::Length(9),
            Constraint::Percentage(20),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .column_spacing(2)
}

/// Draw `view` inside `block` on `area`.
///
/// The placeholder is drawn as a centered message below the column headers.
pub fn render_results(frame: &mut Frame<'_>, area: Rect, view: &ResultView, block: Block<'_>) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        ResultView::Rows(rows) => frame.render_widget(result_table(rows), inner),
        ResultView::Placeholder => {
            let [header, body] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
            frame.render_widget(result_table(&[]), header);
            frame.render_widget(
                Paragraph::new(NO_RESULTS_MESSAGE)
                    .centered()
                    .style(Style::default().fg(Color::Gray)),
                body,
            );
        }
        ResultView::Blank => frame.render_widget(result_table(&[]), inner),
    }
}

/// Render `view` as plain text for non-interactive output.
///
/// Error-level rows are prefixed with `!`; details are indented below each row.
///
/// # Examples
///
/// ```
/// use logscope_tui_common::{ResultView, render_plain};
///
/// assert_eq!(
///     render_plain(&ResultView::Placeholder),
///     "No logs found. Try adjusting your search criteria.\n"
/// );
/// ```
pub fn render_plain(view: &ResultView) -> String {
    match view {
        ResultView::Rows(rows) => {
            let mut out = String::new();
            for row in rows {
                let marker = if row.highlighted { '!' } else { ' ' };
                out.push_str(&format!(
                    "{marker} {:<19}  {:<7}  {}\n",
                    row.time, row.level, row.event
                ));
                for line in row.details.lines() {
                    out.push_str(&format!("      {line}\n"));
                }
            }
            out
        }
        ResultView::Placeholder => format!("{NO_RESULTS_MESSAGE}\n"),
        ResultView::Blank => String::new(),
    }
}
