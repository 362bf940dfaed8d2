//! Hotkey hints and status messages.

use ratatui::{Frame, layout::Rect, style::Style, text::Line};

use crate::app::{App, InputMode};
use crate::tui::theme::*;

/// Render the bottom line: a status message when one is pending, otherwise
/// the hotkeys for the current mode.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.status {
        let color = if status.is_error {
            STATUS_ERROR
        } else {
            TITLE_TEAL
        };
        Line::styled(format!(" {}", status.text), Style::new().fg(color))
    } else {
        let hotkeys = match app.input_mode {
            InputMode::Normal => {
                " j/k move   enter toggle picker   d done   r locale   ? help   q quit"
            }
            InputMode::PickerEdit => {
                " \u{2190}/\u{2192} field   \u{2191}/\u{2193} adjust   enter close   esc back"
            }
            InputMode::Help => " esc close help",
        };
        Line::styled(hotkeys, Style::new().fg(TEXT_DIM))
    };

    frame.render_widget(line, area);
}
