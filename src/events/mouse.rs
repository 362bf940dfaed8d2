//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render. Clicking a row is the
//! pointer equivalent of activating it with Enter.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => Action::ScrollUp(1),
        MouseEventKind::ScrollDown => Action::ScrollDown(1),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        _ => Action::None,
    }
}
