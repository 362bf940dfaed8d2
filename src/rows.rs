//! Row-list controller for the schedule form.
//!
//! Owns the fixed list of items plus the position of the synthetic inline
//! picker row, and answers the questions the renderer asks every frame:
//! how many rows, what kind each one is, and what it shows. All index
//! arithmetic between render space (what is drawn) and logical space (the
//! item list) lives here, so it is testable without any terminal.

use chrono::{DateTime, Local};

/// Logical index of the row holding the start date.
pub const START_DATE_ROW: usize = 4;
/// Logical index of the row holding the end date.
pub const END_DATE_ROW: usize = 5;

/// Number of items in the form. Fixed; only the picker row comes and goes.
pub const ITEM_COUNT: usize = 6;

/// One entry in the form.
#[derive(Debug, Clone)]
pub struct Item {
    pub title: String,
    /// Present only for the start/end date rows.
    pub date: Option<DateTime<Local>>,
}

/// Classification of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A label-only row; activating it never changes the row structure.
    Plain,
    /// A row carrying a date value; activating it toggles the picker.
    Date,
    /// The synthetic expanded row holding the date wheel.
    Picker,
}

/// Structural change produced by [`RowList::toggle_picker`].
///
/// The renderer is immediate-mode, so this is the whole notification: the
/// caller re-seats its cursor and scroll offset from it and the next frame
/// draws the new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsEdit {
    /// A picker row appeared at this render index.
    Opened { at: usize },
    /// The picker row at this render index was removed.
    Closed { at: usize },
    /// The picker moved: removed at `closed` (pre-removal index), inserted
    /// at `opened` (post-removal index).
    Moved { closed: usize, opened: usize },
}

/// Map a render index to a logical item index.
///
/// A picker row open at `picker_position` shifts every row at or below it
/// down by one. The picker row itself has no logical counterpart; callers
/// check [`RowList::row_kind`] before using the result for it.
pub fn logical_index(render_index: usize, picker_position: Option<usize>) -> usize {
    match picker_position {
        Some(p) if p <= render_index => render_index - 1,
        _ => render_index,
    }
}

/// The ordered item list plus the optional picker position.
#[derive(Debug, Clone)]
pub struct RowList {
    items: Vec<Item>,
    /// Render index of the picker row, always owner's render index + 1.
    picker_position: Option<usize>,
}

impl RowList {
    /// Build the standard six-row form. `titles` supplies all six labels in
    /// logical order; the start/end rows get `now` as their initial value.
    pub fn new(titles: [String; ITEM_COUNT], now: DateTime<Local>) -> Self {
        let items = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Item {
                title,
                date: (i == START_DATE_ROW || i == END_DATE_ROW).then_some(now),
            })
            .collect();

        Self {
            items,
            picker_position: None,
        }
    }

    /// Number of rows the renderer should draw.
    pub fn row_count(&self) -> usize {
        if self.picker_position.is_some() {
            self.items.len() + 1
        } else {
            self.items.len()
        }
    }

    pub fn has_picker(&self) -> bool {
        self.picker_position.is_some()
    }

    /// Render index of the open picker row, if any.
    pub fn picker_position(&self) -> Option<usize> {
        self.picker_position
    }

    /// Logical index of the item the open picker edits.
    pub fn owner_logical(&self) -> Option<usize> {
        // The owner sits directly above the picker, so its render index is
        // picker_position - 1, which is below the picker and maps to itself.
        self.picker_position.map(|p| p - 1)
    }

    /// Current value of the item the open picker edits.
    pub fn owner_date(&self) -> Option<DateTime<Local>> {
        self.owner_logical().and_then(|i| self.items[i].date)
    }

    /// Classify a rendered row.
    pub fn row_kind(&self, render_index: usize) -> RowKind {
        debug_assert!(render_index < self.row_count(), "render index out of range");

        if self.picker_position == Some(render_index) {
            return RowKind::Picker;
        }
        match logical_index(render_index, self.picker_position) {
            START_DATE_ROW | END_DATE_ROW => RowKind::Date,
            _ => RowKind::Plain,
        }
    }

    /// The item behind a rendered row. Not meaningful for the picker row.
    pub fn item_at(&self, render_index: usize) -> &Item {
        debug_assert!(
            self.row_kind(render_index) != RowKind::Picker,
            "picker row has no backing item"
        );
        &self.items[logical_index(render_index, self.picker_position)]
    }

    /// Height of a rendered row in terminal lines.
    pub fn row_height(&self, render_index: usize, picker_height: u16) -> u16 {
        if self.row_kind(render_index) == RowKind::Picker {
            picker_height
        } else {
            1
        }
    }

    /// Handle an activation ("tap") of the row at `render_index`.
    ///
    /// Activating anything but a date row is a no-op here. For a date row,
    /// any open picker is removed first, then a new one is inserted below
    /// the tapped row unless the tapped row already owned the removed
    /// picker. Removing first re-bases the insertion target when the old
    /// picker sat above the tapped row, which is why at most one picker row
    /// can ever exist.
    pub fn toggle_picker(&mut self, render_index: usize) -> Option<RowsEdit> {
        debug_assert!(render_index < self.row_count(), "render index out of range");

        if self.row_kind(render_index) != RowKind::Date {
            return None;
        }

        // Was the open picker already pushing the tapped row down?
        let was_below = self.picker_position.is_some_and(|p| p <= render_index);
        // Owner's render index is picker_position - 1, so tapping the owner
        // again means the picker sits directly under the tapped row.
        let toggle_off = self.picker_position == Some(render_index + 1);

        let closed = self.picker_position.take();

        if toggle_off {
            return closed.map(|at| RowsEdit::Closed { at });
        }

        let target_logical = if was_below {
            render_index - 1
        } else {
            render_index
        };
        let opened = target_logical + 1;
        self.picker_position = Some(opened);

        Some(match closed {
            Some(at) => RowsEdit::Moved { closed: at, opened },
            None => RowsEdit::Opened { at: opened },
        })
    }

    /// Title of an item, by logical index.
    pub fn title_at(&self, logical: usize) -> &str {
        &self.items[logical].title
    }

    /// Date value of an item, by logical index.
    pub fn date_at(&self, logical: usize) -> Option<DateTime<Local>> {
        self.items[logical].date
    }

    /// Write a picker value change into the owning item.
    ///
    /// Returns the logical index that was updated, or `None` when no picker
    /// is open (value changes only originate from an open wheel).
    pub fn set_picker_value(&mut self, value: DateTime<Local>) -> Option<usize> {
        let owner = self.owner_logical()?;
        self.items[owner].date = Some(value);
        Some(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn titles() -> [String; ITEM_COUNT] {
        [
            "Select a date row to edit it:".to_string(),
            "(other item 1)".to_string(),
            "(other item 2)".to_string(),
            "(other item 3)".to_string(),
            "Start Date".to_string(),
            "End Date".to_string(),
        ]
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2016, 9, 5, 10, 30, 0).unwrap()
    }

    fn list() -> RowList {
        RowList::new(titles(), now())
    }

    #[test]
    fn test_row_count_tracks_picker() {
        let mut rows = list();
        assert_eq!(rows.row_count(), ITEM_COUNT);

        rows.toggle_picker(START_DATE_ROW);
        assert_eq!(rows.row_count(), ITEM_COUNT + 1);

        rows.toggle_picker(START_DATE_ROW);
        assert_eq!(rows.row_count(), ITEM_COUNT);
    }

    #[test]
    fn test_mapping_shifts_rows_at_or_below_picker() {
        assert_eq!(logical_index(3, None), 3);
        assert_eq!(logical_index(3, Some(5)), 3);
        assert_eq!(logical_index(5, Some(5)), 4);
        assert_eq!(logical_index(6, Some(5)), 5);
    }

    #[test]
    fn test_tapping_start_opens_picker_below_it() {
        let mut rows = list();
        let edit = rows.toggle_picker(4);

        assert_eq!(edit, Some(RowsEdit::Opened { at: 5 }));
        assert_eq!(rows.picker_position(), Some(5));
        assert_eq!(rows.owner_logical(), Some(START_DATE_ROW));
        assert_eq!(rows.row_kind(5), RowKind::Picker);
        assert_eq!(rows.row_count(), 7);
    }

    #[test]
    fn test_tapping_owner_again_closes_picker() {
        let mut rows = list();
        rows.toggle_picker(4);

        let edit = rows.toggle_picker(4);
        assert_eq!(edit, Some(RowsEdit::Closed { at: 5 }));
        assert_eq!(rows.picker_position(), None);
        assert_eq!(rows.row_count(), 6);
    }

    #[test]
    fn test_tapping_other_date_row_rebases_below_open_picker() {
        // Worked example from the form's design: open at Start, then tap
        // End, which the open picker has shifted down to render index 6.
        let mut rows = list();
        rows.toggle_picker(4);
        assert_eq!(rows.row_kind(6), RowKind::Date);

        let edit = rows.toggle_picker(6);
        assert_eq!(edit, Some(RowsEdit::Moved { closed: 5, opened: 6 }));
        assert_eq!(rows.picker_position(), Some(6));
        assert_eq!(rows.owner_logical(), Some(END_DATE_ROW));
        assert_eq!(rows.row_count(), 7);
    }

    #[test]
    fn test_tapping_date_row_above_open_picker_moves_it_up() {
        let mut rows = list();
        rows.toggle_picker(5); // picker under End, at render 6
        assert_eq!(rows.picker_position(), Some(6));

        let edit = rows.toggle_picker(4); // Start is above, unshifted
        assert_eq!(edit, Some(RowsEdit::Moved { closed: 6, opened: 5 }));
        assert_eq!(rows.owner_logical(), Some(START_DATE_ROW));
    }

    #[test]
    fn test_closing_via_shifted_owner_render_index() {
        // Open under End, then tap End again. End itself is not shifted
        // (picker is below it), so the same render index closes it.
        let mut rows = list();
        rows.toggle_picker(5);

        let edit = rows.toggle_picker(5);
        assert_eq!(edit, Some(RowsEdit::Closed { at: 6 }));
        assert!(!rows.has_picker());
    }

    #[test]
    fn test_plain_rows_never_change_structure() {
        let mut rows = list();
        for idx in 0..=3 {
            assert_eq!(rows.toggle_picker(idx), None);
            assert_eq!(rows.row_count(), 6);
        }

        rows.toggle_picker(4);
        for idx in 0..=3 {
            assert_eq!(rows.toggle_picker(idx), None);
            assert_eq!(rows.picker_position(), Some(5));
        }
    }

    #[test]
    fn test_end_row_shifted_below_picker_is_still_a_date_row() {
        // With the picker open above it, the End row renders at
        // END_DATE_ROW + 1. Classification goes through the logical
        // mapping, so no special case for that index is needed.
        let mut rows = list();
        rows.toggle_picker(4);

        assert_eq!(rows.row_kind(6), RowKind::Date);
        assert_eq!(rows.item_at(6).title, "End Date");
        // The rows pushed down by the picker keep their identity too.
        assert_eq!(rows.row_kind(5), RowKind::Picker);
        assert_eq!(rows.row_kind(4), RowKind::Date);
        assert_eq!(rows.row_kind(3), RowKind::Plain);
    }

    #[test]
    fn test_value_change_writes_owner_only() {
        let mut rows = list();
        rows.toggle_picker(4);

        let edited = Local.with_ymd_and_hms(2017, 1, 2, 8, 15, 0).unwrap();
        assert_eq!(rows.set_picker_value(edited), Some(START_DATE_ROW));

        assert_eq!(rows.item_at(4).date, Some(edited));
        assert_eq!(rows.item_at(6).date, Some(now())); // End untouched
        assert_eq!(rows.row_count(), 7); // no structural change
    }

    #[test]
    fn test_value_change_without_picker_is_rejected() {
        let mut rows = list();
        let edited = Local.with_ymd_and_hms(2017, 1, 2, 8, 15, 0).unwrap();
        assert_eq!(rows.set_picker_value(edited), None);
        assert_eq!(rows.item_at(4).date, Some(now()));
    }

    #[test]
    fn test_open_picker_synchronizes_from_owner() {
        let mut rows = list();
        rows.toggle_picker(5);
        assert_eq!(rows.owner_date(), Some(now()));
    }

    #[test]
    fn test_picker_row_is_tall() {
        let mut rows = list();
        rows.toggle_picker(4);

        assert_eq!(rows.row_height(5, 5), 5);
        assert_eq!(rows.row_height(4, 5), 1);
        assert_eq!(rows.row_height(6, 5), 1);
    }

    #[test]
    fn test_full_tap_sequence_from_the_worked_example() {
        let mut rows = list();

        // Tap Start: picker opens at render 5.
        assert_eq!(rows.toggle_picker(4), Some(RowsEdit::Opened { at: 5 }));
        assert_eq!(rows.row_count(), 7);

        // Tap Start again: closed, back to 6 rows.
        assert_eq!(rows.toggle_picker(4), Some(RowsEdit::Closed { at: 5 }));
        assert_eq!(rows.row_count(), 6);

        // Tap Start, then End (shifted to render 6): picker lands at 6.
        rows.toggle_picker(4);
        assert_eq!(rows.toggle_picker(6), Some(RowsEdit::Moved { closed: 5, opened: 6 }));
        assert_eq!(rows.picker_position(), Some(6));
    }
}
