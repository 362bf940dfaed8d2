//! The date wheel inside the expanded picker row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::picker::PickerField;
use crate::tui::theme::*;

/// Render the wheel: one span per field, the focused one highlighted.
pub fn render_date_picker(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wheel) = &app.wheel else {
        return;
    };

    let editing = app.input_mode == InputMode::PickerEdit;

    let border_style = if editing {
        Style::new().fg(FIELD_FOCUS)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let value = wheel.value();
    let field_style = |field: PickerField| {
        if editing && wheel.field() == field {
            Style::new()
                .fg(FIELD_FOCUS)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::new().fg(TEXT_WHITE)
        }
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(value.format("%b").to_string(), field_style(PickerField::Month)),
        Span::raw(" "),
        Span::styled(value.format("%d").to_string(), field_style(PickerField::Day)),
        Span::raw(" "),
        Span::styled(value.format("%Y").to_string(), field_style(PickerField::Year)),
        Span::raw("   "),
        Span::styled(value.format("%-I").to_string(), field_style(PickerField::Hour)),
        Span::raw(":"),
        Span::styled(value.format("%M").to_string(), field_style(PickerField::Minute)),
        Span::raw(" "),
        Span::styled(value.format("%p").to_string(), Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    if inner.height >= 2 {
        let hint = Line::styled(
            format!(
                " {}: \u{2191}/\u{2193} adjust  \u{2190}/\u{2192} field  enter close",
                wheel.field().label()
            ),
            Style::new().fg(TEXT_DIM),
        );
        frame.render_widget(
            Paragraph::new(hint),
            Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
        );
    }
}
