//! Settings the engine reads while running. Loading and validation live in the binary crate.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::models::{DesktopId, IgnoreRule, TilerKind};
use crate::{Command, Notification};

/// Initial toggles of a desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopDefaults {
    pub tiler: TilerKind,
    pub tiling: bool,
    pub resize_sync: bool,
    pub decoration: bool,
    pub maximize_when_one_left: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilerDefaults {
    pub max_windows: usize,
    pub master_fraction: f32,
}

/// Occasions on which the user may be notified.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationEvent {
    Start,
    Exit,
    AlreadyRunning,
    StoreCurrentWindowsLayout,
    Resizing(bool),
    Tiling(bool),
    MaximizeWhenOneWindowLeft(bool),
    Decoration(bool),
}

/// A key grabbed on the root window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: Vec<String>,
    /// Hardware keycode, as reported by `xev`.
    pub key: u8,
    pub command: Command,
}

pub trait Config {
    /// Distance under which two edges count as docked.
    fn margin(&self) -> i32;
    fn min_size(&self) -> i32;
    fn step_size(&self) -> i32;
    fn tiling_ignore_rules(&self) -> &[IgnoreRule];
    fn decoration_ignore_rules(&self) -> &[IgnoreRule];
    /// Whether a new window named `name` should postpone tiling.
    fn delays_tiling(&self, name: &str) -> bool;
    fn delay_time_tiling(&self) -> Duration;
    fn desktop_defaults(&self, desktop: DesktopId) -> DesktopDefaults;
    fn tiler_defaults(&self, tiler: TilerKind) -> TilerDefaults;
    fn move_mouse_into_active_window(&self) -> bool;
    /// `None` when notifications are switched off.
    fn notification(&self, event: NotificationEvent) -> Option<Notification>;
    fn keybinds(&self) -> Vec<Keybind>;
    fn active_window_log(&self) -> PathBuf;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Pattern;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub margin: i32,
        pub min_size: i32,
        pub step_size: i32,
        pub tiling_ignore_rules: Vec<IgnoreRule>,
        pub decoration_ignore_rules: Vec<IgnoreRule>,
        pub delay_patterns: Vec<Pattern>,
        pub delay: Duration,
        pub desktop: DesktopDefaults,
        pub max_windows: usize,
        pub notifications: bool,
        pub move_mouse: bool,
        pub log_path: PathBuf,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                margin: 0,
                min_size: 100,
                step_size: 50,
                tiling_ignore_rules: vec![],
                decoration_ignore_rules: vec![],
                delay_patterns: vec![],
                delay: Duration::from_millis(500),
                desktop: DesktopDefaults {
                    tiler: TilerKind::MasterStackVertical,
                    tiling: true,
                    resize_sync: true,
                    decoration: true,
                    maximize_when_one_left: true,
                },
                max_windows: 3,
                notifications: false,
                move_mouse: false,
                log_path: std::env::temp_dir().join("xtile_test.log"),
            }
        }
    }

    impl Config for TestConfig {
        fn margin(&self) -> i32 {
            self.margin
        }
        fn min_size(&self) -> i32 {
            self.min_size
        }
        fn step_size(&self) -> i32 {
            self.step_size
        }
        fn tiling_ignore_rules(&self) -> &[IgnoreRule] {
            &self.tiling_ignore_rules
        }
        fn decoration_ignore_rules(&self) -> &[IgnoreRule] {
            &self.decoration_ignore_rules
        }
        fn delays_tiling(&self, name: &str) -> bool {
            self.delay_patterns.iter().any(|p| p.is_match(name))
        }
        fn delay_time_tiling(&self) -> Duration {
            self.delay
        }
        fn desktop_defaults(&self, _desktop: DesktopId) -> DesktopDefaults {
            self.desktop
        }
        fn tiler_defaults(&self, tiler: TilerKind) -> TilerDefaults {
            TilerDefaults {
                max_windows: if tiler == TilerKind::Maximize {
                    1
                } else {
                    self.max_windows
                },
                master_fraction: 0.5,
            }
        }
        fn move_mouse_into_active_window(&self) -> bool {
            self.move_mouse
        }
        fn notification(&self, event: NotificationEvent) -> Option<Notification> {
            self.notifications.then(|| Notification {
                summary: format!("{event:?}"),
                message: String::new(),
                icon: None,
                duration_ms: 2000,
            })
        }
        fn keybinds(&self) -> Vec<Keybind> {
            vec![]
        }
        fn active_window_log(&self) -> PathBuf {
            self.log_path.clone()
        }
    }
}
