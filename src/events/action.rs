//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Row navigation ===
    /// Move the cursor to the previous rendered row
    CursorUp,
    /// Move the cursor to the next rendered row
    CursorDown,
    /// Move the cursor to the first row
    CursorTop,
    /// Move the cursor to the last row
    CursorBottom,

    // === Row activation ===
    /// Activate ("tap") the row at a render index, e.g. from a mouse click
    ActivateRow(usize),
    /// Activate the row under the cursor
    ActivateCursorRow,

    // === Date wheel ===
    /// Move wheel focus one field left
    PickerFieldPrev,
    /// Move wheel focus one field right
    PickerFieldNext,
    /// Increment the focused wheel field
    PickerIncrement,
    /// Decrement the focused wheel field
    PickerDecrement,
    /// Close the open picker from edit mode (same as re-activating its owner)
    ConfirmPicker,
    /// Leave edit mode, keeping the picker open
    LeavePickerEdit,

    // === Scrolling ===
    /// Scroll the list up by n lines
    ScrollUp(usize),
    /// Scroll the list down by n lines
    ScrollDown(usize),

    // === Misc ===
    /// Log the start row's display string and its normalized re-parse
    Done,
    /// Re-resolve the formatting locale from the environment
    RefreshLocale,

    /// No action to take
    None,
}
