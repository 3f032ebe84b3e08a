use crate::models::{Rect, WindowHandle};
use crate::Notification;
use serde::{Deserialize, Serialize};

/// These are requests from the engine.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// Unmaximize the window, then move and resize its outer frame.
    SetGeometry(WindowHandle, Rect),

    /// Show or hide the window manager's decorations.
    SetDecorated(WindowHandle, bool),

    RaiseAndFocus(WindowHandle),

    /// Makes sure the mouse is over a given window.
    MoveMouseOver(WindowHandle),

    /// Handled by the event loop itself, never sent to the display server.
    Notify(Notification),
}

impl DisplayAction {
    /// The window the action is about.
    pub const fn window(&self) -> Option<WindowHandle> {
        match self {
            Self::SetGeometry(handle, _)
            | Self::SetDecorated(handle, _)
            | Self::RaiseAndFocus(handle)
            | Self::MoveMouseOver(handle) => Some(*handle),
            Self::Notify(_) => None,
        }
    }
}
