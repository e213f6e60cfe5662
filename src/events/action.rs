//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or tested
//! without a terminal.

use crate::config::PickerKind;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No-op
    None,

    // === Application ===
    /// Quit the application
    Quit,
    /// Show or hide the help popup
    ToggleHelp,
    /// Replace the picker on screen
    OpenPicker(PickerKind),

    // === Column focus ===
    /// Focus the column to the right (wraps)
    FocusNext,
    /// Focus the column to the left (wraps)
    FocusPrev,

    // === Selection ===
    /// Move the focused column by a number of items
    Step(i64),
    /// Mouse wheel notches over a column (positive = down)
    Wheel { column: usize, notches: i32 },
    /// Button pressed over a visible slot of a column
    DragStart { column: usize, slot: usize, row: u16 },
    /// Pointer moved with the button held
    DragMove { row: u16 },
    /// Button released
    DragEnd,

    // === Results ===
    /// Read all columns and store the combined value
    Save,
    /// Put the columns back on their starting values
    Reset,
}
