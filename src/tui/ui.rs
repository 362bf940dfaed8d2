use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
};

use crate::app::{App, InputMode};

use super::components::{render_help_popup, render_row_list, render_status_bar};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Click regions are re-registered by the components below.
    app.interactions.clear();

    // Main vertical layout: title, row list, status line
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Title + spacing
        Constraint::Min(0),    // Row list
        Constraint::Length(1), // Status / hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);

    app.set_viewport_height(main_layout[1].height as usize);
    render_row_list(frame, main_layout[1], app);

    render_status_bar(frame, main_layout[2], app);

    // Help overlays everything else.
    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" sched", Style::new().fg(TITLE_TEAL).bold()),
        Span::styled("it", Style::new().fg(TITLE_SAND).bold()),
        Span::styled("  edit dates in place", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(title, area);
}
