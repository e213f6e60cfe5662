//! UI components for the TUI.
//!
//! - `sidebar` - Logo, picker tabs and saved values
//! - `picker_modal` - Popup holding the active picker's columns
//! - `wheel` - One scroll column with distance-weighted rows
//! - `help_popup` - Help overlay with shortcuts

mod help_popup;
mod picker_modal;
mod sidebar;
mod wheel;

pub use help_popup::render_help_popup;
pub use picker_modal::render_picker_modal;
pub use sidebar::{render_logo, render_sidebar};
