//! Key map from terminal key events to [`UiEvent`]s.
//!
//! | Key                      | Intent                                   |
//! |--------------------------|------------------------------------------|
//! | printable characters     | edit the focused text field              |
//! | `Backspace`              | delete the last character                |
//! | `Enter` (query focused)  | submit search                            |
//! | `Enter` (elsewhere)      | next field                               |
//! | `Ctrl+S`, `F5`           | submit search                            |
//! | `Tab` / `Shift+Tab`      | next / previous field                    |
//! | `Space`, `→` / `←`       | cycle the level choice (level focused)   |
//! | `Esc`, `Ctrl+C`          | quit                                     |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use logscope_search::LogLevel;

use crate::{App, Field, UiEvent};

/// Map `key` to the intent it expresses in the current app, if any.
pub fn map_key(app: &App, key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Some(UiEvent::Quit),
        KeyCode::Char('c') if ctrl => return Some(UiEvent::Quit),
        KeyCode::Char('s') if ctrl => return Some(UiEvent::SubmitSearch),
        KeyCode::F(5) => return Some(UiEvent::SubmitSearch),
        KeyCode::Tab => return Some(UiEvent::FocusNext),
        KeyCode::BackTab => return Some(UiEvent::FocusPrevious),
        KeyCode::Enter if app.focus() == Field::Query => return Some(UiEvent::SubmitSearch),
        KeyCode::Enter => return Some(UiEvent::FocusNext),
        _ => {}
    }

    if app.focus() == Field::Level {
        let level = app.criteria().level.as_ref();
        return match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                Some(UiEvent::LevelChanged(LogLevel::cycle(level)))
            }
            KeyCode::Left => Some(UiEvent::LevelChanged(cycle_back(level))),
            _ => None,
        };
    }

    let mut text = app.field_text(app.focus()).to_string();
    match key.code {
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => text.push(c),
        KeyCode::Backspace => {
            text.pop()?;
        }
        _ => return None,
    }

    match app.focus() {
        Field::Query => Some(UiEvent::QueryChanged(text)),
        Field::Start => Some(UiEvent::StartTimeChanged(text)),
        Field::End => Some(UiEvent::EndTimeChanged(text)),
        Field::Level => None,
    }
}

/// Inverse of [`LogLevel::cycle`].
fn cycle_back(current: Option<&LogLevel>) -> Option<LogLevel> {
    match current {
        None => Some(LogLevel::Error),
        Some(LogLevel::Error) => Some(LogLevel::Info),
        Some(LogLevel::Info) | Some(LogLevel::Other(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use logscope_search::SearchCriteria;
    use rstest::rstest;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn focused(field: Field) -> App {
        let mut app = App::new("http://localhost:5005/api/search")
            .with_criteria(SearchCriteria::new("tim"));
        while app.focus() != field {
            app.dispatch(UiEvent::FocusNext);
        }
        app
    }

    #[test]
    fn typing_extends_query() {
        let app = focused(Field::Query);
        assert_eq!(
            map_key(&app, press(KeyCode::Char('e'))),
            Some(UiEvent::QueryChanged("time".into()))
        );
        assert_eq!(
            map_key(&app, press(KeyCode::Backspace)),
            Some(UiEvent::QueryChanged("ti".into()))
        );
    }

    #[test]
    fn typing_q_is_text_not_quit() {
        let app = focused(Field::Query);
        assert_eq!(
            map_key(&app, press(KeyCode::Char('q'))),
            Some(UiEvent::QueryChanged("timq".into()))
        );
    }

    #[test]
    fn backspace_on_empty_field_does_nothing() {
        let app = focused(Field::Start);
        assert_eq!(map_key(&app, press(KeyCode::Backspace)), None);
    }

    #[test]
    fn typing_edits_time_fields() {
        assert_eq!(
            map_key(&focused(Field::Start), press(KeyCode::Char('2'))),
            Some(UiEvent::StartTimeChanged("2".into()))
        );
        assert_eq!(
            map_key(&focused(Field::End), press(KeyCode::Char('2'))),
            Some(UiEvent::EndTimeChanged("2".into()))
        );
    }

    #[rstest]
    #[case(Field::Query)]
    #[case(Field::Level)]
    #[case(Field::Start)]
    #[case(Field::End)]
    fn explicit_search_action_from_any_field(#[case] field: Field) {
        let app = focused(field);
        assert_eq!(map_key(&app, ctrl('s')), Some(UiEvent::SubmitSearch));
        assert_eq!(map_key(&app, press(KeyCode::F(5))), Some(UiEvent::SubmitSearch));
    }

    #[test]
    fn enter_submits_only_from_query() {
        assert_eq!(
            map_key(&focused(Field::Query), press(KeyCode::Enter)),
            Some(UiEvent::SubmitSearch)
        );
        assert_eq!(map_key(&focused(Field::Start), press(KeyCode::Enter)), Some(UiEvent::FocusNext));
    }

    #[test]
    fn level_cycles_both_ways() {
        let mut app = focused(Field::Level);
        let mut seen = Vec::new();
        for _ in 0..3 {
            let Some(UiEvent::LevelChanged(level)) = map_key(&app, press(KeyCode::Right)) else {
                panic!("expected a level change");
            };
            seen.push(level.clone());
            app.dispatch(UiEvent::LevelChanged(level));
        }
        assert_eq!(seen, vec![Some(LogLevel::Info), Some(LogLevel::Error), None]);

        assert_eq!(
            map_key(&app, press(KeyCode::Left)),
            Some(UiEvent::LevelChanged(Some(LogLevel::Error)))
        );
        assert_eq!(map_key(&app, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn navigation_and_quit() {
        let app = focused(Field::Query);
        assert_eq!(map_key(&app, press(KeyCode::Tab)), Some(UiEvent::FocusNext));
        assert_eq!(map_key(&app, press(KeyCode::BackTab)), Some(UiEvent::FocusPrevious));
        assert_eq!(map_key(&app, press(KeyCode::Esc)), Some(UiEvent::Quit));
        assert_eq!(map_key(&app, ctrl('c')), Some(UiEvent::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        let app = focused(Field::Query);
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(&app, release), None);
    }
}
