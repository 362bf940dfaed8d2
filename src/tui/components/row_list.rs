//! The form rows, including the expanded picker row.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion, InputMode};
use crate::rows::RowKind;
use crate::tui::theme::*;

use super::date_picker::render_date_picker;

/// Render every visible row and register its click region.
///
/// The controller answers row count, kind, and height; this function only
/// lays the answers out. The click regions registered here are what makes a
/// mouse press land on the same render index the keyboard would activate.
pub fn render_row_list(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    let picker_height = app.config.picker_height();
    let offset = app.scroll_offset;
    let bottom = offset + area.height as usize;

    let mut top = 0usize;
    for render_index in 0..app.rows.row_count() {
        let height = app.rows.row_height(render_index, picker_height) as usize;
        let row_top = top;
        top += height;

        if row_top < offset {
            continue;
        }
        if row_top >= bottom {
            break;
        }

        let y = area.y + (row_top - offset) as u16;
        let visible = (bottom - row_top).min(height) as u16;
        let row_area = Rect::new(area.x, y, area.width, visible);

        if app.rows.row_kind(render_index) == RowKind::Picker {
            render_date_picker(frame, row_area, app);
        } else {
            render_item_row(frame, row_area, app, render_index);
        }

        app.interactions.register_row(
            render_index,
            ClickRegion::new(row_area.x, row_area.y, row_area.width, row_area.height),
        );
    }
}

fn render_item_row(frame: &mut Frame, area: Rect, app: &App, render_index: usize) {
    let item = app.rows.item_at(render_index);
    let kind = app.rows.row_kind(render_index);
    let selected = render_index == app.cursor;

    let cursor = if selected && app.input_mode != InputMode::PickerEdit {
        "> "
    } else {
        "  "
    };

    // The heading row is an indicator, not a choice.
    let title_style = if render_index == 0 {
        Style::new().fg(TEXT_DIM)
    } else if selected {
        Style::new().fg(TEXT_WHITE).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    let mut spans = vec![
        Span::styled(cursor, Style::new().fg(TITLE_TEAL)),
        Span::styled(item.title.clone(), title_style),
    ];

    if kind == RowKind::Date {
        if let Some(date) = item.date {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                app.formatter.format(&date),
                Style::new().fg(DATE_VALUE),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
