use chrono::Local;

use crate::config::Config;
use crate::datetime::{self, DateFormatter};
use crate::events::Action;
use crate::log;
use crate::picker::DateWheel;
use crate::rows::{RowKind, RowList, RowsEdit, START_DATE_ROW};
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,     // Cursor moves over rows, Enter activates
    PickerEdit, // Keys go to the open date wheel
    Help,       // Help popup showing all hotkeys
}

/// A rectangular region of the terminal, used for click hit testing.
#[derive(Debug, Clone, Copy)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Message shown in the status line until the next action.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub config: Config,
    pub rows: RowList,
    /// Present exactly while a picker row is open.
    pub wheel: Option<DateWheel>,
    pub formatter: DateFormatter,
    pub input_mode: InputMode,
    /// Cursor over *render* indices.
    pub cursor: usize,
    /// First visible line of the list area.
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub interactions: InteractionRegistry,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let rows = RowList::new(config.item_titles(), Local::now());
        let formatter = DateFormatter::new(&config);

        Self {
            config,
            rows,
            wheel: None,
            formatter,
            input_mode: InputMode::Normal,
            cursor: 0,
            scroll_offset: 0,
            viewport_height: 20, // Default, updated on render
            interactions: InteractionRegistry::new(),
            status: None,
        }
    }

    /// Apply an action produced by the event handlers.
    pub fn apply(&mut self, action: Action) {
        if action != Action::None {
            // Status messages live until the next input, like the hint
            // they are.
            self.status = None;
        }

        match action {
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,

            Action::CursorUp => {
                self.cursor = self
                    .cursor
                    .checked_sub(1)
                    .unwrap_or(self.rows.row_count() - 1);
                self.ensure_row_visible(self.cursor);
            }
            Action::CursorDown => {
                self.cursor = (self.cursor + 1) % self.rows.row_count();
                self.ensure_row_visible(self.cursor);
            }
            Action::CursorTop => {
                self.cursor = 0;
                self.ensure_row_visible(self.cursor);
            }
            Action::CursorBottom => {
                self.cursor = self.rows.row_count() - 1;
                self.ensure_row_visible(self.cursor);
            }

            Action::ActivateRow(render_index) => self.activate(render_index),
            Action::ActivateCursorRow => self.activate(self.cursor),

            Action::PickerFieldPrev => {
                if let Some(wheel) = &mut self.wheel {
                    wheel.focus_prev();
                }
            }
            Action::PickerFieldNext => {
                if let Some(wheel) = &mut self.wheel {
                    wheel.focus_next();
                }
            }
            Action::PickerIncrement => self.adjust_wheel(DateWheel::increment),
            Action::PickerDecrement => self.adjust_wheel(DateWheel::decrement),

            Action::ConfirmPicker => {
                // Same transition as tapping the owner row again.
                if let Some(position) = self.rows.picker_position() {
                    self.activate(position - 1);
                }
            }
            Action::LeavePickerEdit => self.input_mode = InputMode::Normal,

            Action::ScrollUp(n) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(n);
            }
            Action::ScrollDown(n) => {
                self.scroll_offset = (self.scroll_offset + n).min(self.max_scroll());
            }

            Action::Done => self.done(),
            Action::RefreshLocale => {
                self.formatter.refresh(&self.config);
                log::log("locale refreshed from environment");
                self.set_status("Date format reloaded from locale", false);
            }

            // Quit is handled by the event loop.
            Action::Quit | Action::None => {}
        }
    }

    /// Activate ("tap") the row at a render index.
    fn activate(&mut self, render_index: usize) {
        if render_index >= self.rows.row_count() {
            return; // stale click region, e.g. from a just-closed picker
        }

        match self.rows.row_kind(render_index) {
            RowKind::Plain => {
                // No structural change; just move the selection.
                self.cursor = render_index;
                self.input_mode = InputMode::Normal;
            }
            RowKind::Picker => {
                // Clicking the wheel itself focuses it.
                self.cursor = render_index - 1;
                self.input_mode = InputMode::PickerEdit;
            }
            RowKind::Date => match self.rows.toggle_picker(render_index) {
                Some(RowsEdit::Closed { at }) => {
                    self.wheel = None;
                    self.input_mode = InputMode::Normal;
                    self.cursor = at - 1;
                    log::log_event(&format!("picker closed at render index {}", at));
                    self.clamp_scroll();
                }
                Some(RowsEdit::Opened { at }) => self.picker_opened(at),
                Some(RowsEdit::Moved { closed, opened }) => {
                    log::log_event(&format!(
                        "picker moved from render index {} to {}",
                        closed, opened
                    ));
                    self.picker_opened(opened);
                }
                None => {}
            },
        }
    }

    /// Bookkeeping after a picker row appeared at `opened`.
    fn picker_opened(&mut self, opened: usize) {
        // Synchronize the wheel to the owning row's value.
        let value = self.rows.owner_date().unwrap_or_else(Local::now);
        self.wheel = Some(DateWheel::new(value));
        self.input_mode = InputMode::PickerEdit;
        self.cursor = opened - 1;
        log::log_event(&format!("picker opened at render index {}", opened));
        self.ensure_row_visible(opened);
        self.ensure_row_visible(self.cursor);
    }

    /// Step the wheel and write the new value through to the owning item.
    fn adjust_wheel(&mut self, step: fn(&mut DateWheel)) {
        if let Some(wheel) = &mut self.wheel {
            step(wheel);
            self.rows.set_picker_value(wheel.value());
        }
    }

    /// Log the start row's display string, then its normalized re-parse.
    fn done(&mut self) {
        match self.done_inner() {
            Ok(line) => self.set_status(line, false),
            Err(e) => {
                log::log(&e.to_string());
                self.set_status(e.to_string(), true);
            }
        }
    }

    fn done_inner(&self) -> crate::error::Result<String> {
        let date = self.rows.date_at(START_DATE_ROW).unwrap_or_else(Local::now);
        let title = self.rows.title_at(START_DATE_ROW);
        let display = self.formatter.format_done(&date);
        let line = format!("{}: {}", title, display);
        log::log(&line);

        // The string was produced one line up, so a failure here is a
        // formatter defect, not user input.
        let parsed = datetime::parse_done(&display)?;
        log::log(&parsed.format(datetime::DONE_FORMAT).to_string());

        Ok(line)
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    /// Update viewport height (called from render)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp_scroll();
    }

    /// Total height of all rendered rows in lines.
    pub fn total_lines(&self) -> usize {
        (0..self.rows.row_count())
            .map(|i| self.rows.row_height(i, self.config.picker_height()) as usize)
            .sum()
    }

    /// First line of a rendered row, in list coordinates.
    pub fn line_of_row(&self, render_index: usize) -> usize {
        (0..render_index)
            .map(|i| self.rows.row_height(i, self.config.picker_height()) as usize)
            .sum()
    }

    fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Scroll just enough to bring a row fully into view.
    fn ensure_row_visible(&mut self, render_index: usize) {
        let start = self.line_of_row(render_index);
        let height = self
            .rows
            .row_height(render_index, self.config.picker_height()) as usize;
        let end = start + height;

        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset + self.viewport_height {
            self.scroll_offset = end.saturating_sub(self.viewport_height);
        }
    }
}
