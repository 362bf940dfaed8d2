//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 17u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Rows", Style::new().fg(TITLE_TEAL).bold()));
    for (keys, what) in [
        ("j/k     ", "Move between rows"),
        ("enter   ", "Open/close the row's date picker"),
        ("click   ", "Same as enter on that row"),
        ("d       ", "Log the start date"),
        ("r       ", "Reload the locale date format"),
        ("q       ", "Quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", keys), Style::new().fg(TEXT_WHITE)),
            Span::styled(what, Style::new().fg(TEXT_DIM)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Date Picker",
        Style::new().fg(TITLE_TEAL).bold(),
    ));
    for (keys, what) in [
        ("\u{2190}/\u{2192}     ", "Switch field"),
        ("\u{2191}/\u{2193}     ", "Adjust the focused field"),
        ("enter   ", "Close the picker"),
        ("esc     ", "Back to row navigation"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", keys), Style::new().fg(TEXT_WHITE)),
            Span::styled(what, Style::new().fg(TEXT_DIM)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    // While help is open, any click dismisses it instead of reaching the
    // rows underneath.
    app.interactions.register(
        InteractiveRegion::new(
            "help",
            ClickRegion::new(area.x, area.y, area.width, area.height),
            Action::CloseHelp,
        )
        .with_priority(10),
    );
}
