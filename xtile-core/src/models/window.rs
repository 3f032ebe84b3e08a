//! Windows as reported by the display server and as seen by a tiling pass.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DesktopId, Rect};

/// Display server window id. Stable for the lifetime of the window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u32);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Everything the engine knows about a client window.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    pub handle: WindowHandle,
    /// The class part of `WM_CLASS`.
    pub name: String,
    pub title: String,
    /// Outer frame, decorations included.
    pub geometry: Rect,
    pub decorated: bool,
    /// Client side decorations (`_GTK_FRAME_EXTENTS` present).
    pub csd: bool,
    pub desktop: DesktopId,
    pub hidden: bool,
    pub modal: bool,
}

impl Window {
    pub fn new(handle: WindowHandle, name: impl Into<String>, desktop: DesktopId) -> Self {
        Self {
            handle,
            name: name.into(),
            decorated: true,
            desktop,
            ..Self::default()
        }
    }

    /// Whether the window could take part in tiling `desktop`, ignore rules aside.
    pub fn is_visible_on(&self, desktop: DesktopId) -> bool {
        self.desktop == desktop && !self.hidden && !self.modal
    }
}

/// A window admitted to a tiling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub name: String,
    pub title: String,
    pub geometry: Rect,
    pub decorated: bool,
    pub insertion_order: u64,
}
