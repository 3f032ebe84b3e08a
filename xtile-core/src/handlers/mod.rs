pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod resize_sync_handler;
mod tile_handler;
mod window_handler;

use super::command::{Command, Direction};
use super::config::Config;
use super::models::{DesktopId, Manager, Rect, TilerKind, Window, WindowHandle, WindowInfo};
use super::DisplayEvent;
