//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::PickerEdit => handle_picker_edit_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        // Esc closes an open picker even when focus is back on the rows.
        KeyCode::Esc if app.rows.has_picker() => Action::ConfirmPicker,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => Action::CursorTop,
        KeyCode::Char('G') | KeyCode::End => Action::CursorBottom,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateCursorRow,
        KeyCode::Char('d') => Action::Done,
        KeyCode::Char('r') => Action::RefreshLocale,
        KeyCode::PageUp => Action::ScrollUp(3),
        KeyCode::PageDown => Action::ScrollDown(3),
        _ => Action::None,
    }
}

fn handle_picker_edit_mode(key: KeyEvent) -> Action {
    match key.code {
        // Enter closes the picker, same as tapping its owner row again.
        KeyCode::Enter => Action::ConfirmPicker,
        KeyCode::Esc => Action::LeavePickerEdit,
        KeyCode::Char('h') | KeyCode::Left => Action::PickerFieldPrev,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::PickerFieldNext,
        KeyCode::Char('k') | KeyCode::Up => Action::PickerIncrement,
        KeyCode::Char('j') | KeyCode::Down => Action::PickerDecrement,
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = App::new(Config::default());

        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::ActivateCursorRow
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::CursorDown
        );
    }

    #[test]
    fn test_picker_edit_mode_keys() {
        let mut app = App::new(Config::default());
        app.apply(Action::CursorBottom);
        app.apply(Action::CursorUp); // Start Date row
        app.apply(Action::ActivateCursorRow);
        assert_eq!(app.input_mode, InputMode::PickerEdit);

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Up)),
            Action::PickerIncrement
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Right)),
            Action::PickerFieldNext
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::ConfirmPicker
        );
    }
}
