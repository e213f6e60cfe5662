//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the column widgets during each render. A press starts a
//! drag; a release without movement becomes a tap in `App`.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll(x, y, -1),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll(x, y, 1),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_press(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.drag.is_some() => {
            Action::DragMove { row: y }
        }
        MouseEventKind::Up(MouseButton::Left) if app.drag.is_some() => Action::DragEnd,
        _ => Action::None,
    }
}
