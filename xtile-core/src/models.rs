//! Objects (such as windows and desktops) the engine reasons about.
mod desktop_state;
mod ignore_rule;
mod layout_store;
mod manager;
mod margins;
mod rect;
mod registry;
mod tiler;
mod window;

pub use desktop_state::DesktopState;
pub use ignore_rule::{matches, matches_decoration, IgnoreRule, Pattern};
pub use layout_store::{LayoutStore, SnapshotEntry};
pub use manager::Manager;
pub use margins::Margins;
pub use rect::Rect;
pub use registry::Registry;
pub use tiler::TilerKind;
pub use window::{Window, WindowHandle, WindowInfo};

/// One-based desktop number. EWMH desktop `n` is `DesktopId` `n + 1`.
pub type DesktopId = usize;

/// Windows shown on every desktop (EWMH desktop `0xFFFFFFFF`).
pub const STICKY_DESKTOP: DesktopId = 0;
