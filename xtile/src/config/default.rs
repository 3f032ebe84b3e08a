use xtile_core::{
    models::{IgnoreRule, TilerKind},
    Command, Direction,
};

use super::{
    Config, DesktopConfig, Keybind, Modifier, NotificationConfig, TilerConfig, TilersConfig,
};

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            tiler: TilerKind::MasterStackVertical,
            tiling: true,
            resize_sync: true,
            decoration: true,
            maximize_when_one_window_left: true,
        }
    }
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            max_windows: 3,
            master_fraction: 0.5,
        }
    }
}

impl Default for TilersConfig {
    fn default() -> Self {
        Self {
            master_stack_vertical: TilerConfig::default(),
            master_stack_horizontal: TilerConfig::default(),
            stack_vertical: TilerConfig::default(),
            stack_horizontal: TilerConfig::default(),
        }
    }
}

/// Keycodes of a US layout.
fn default_keybinds() -> Vec<Keybind> {
    vec![
        // Mod + r => toggle resize sync
        Keybind::new(Command::ToggleResize, 27),
        // Mod + t => toggle tiling
        Keybind::new(Command::ToggleTiling, 28),
        // Mod + Shift + t => toggle both
        Keybind {
            modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
            ..Keybind::new(Command::ToggleResizeAndTiling, 28)
        },
        // Mod + m
        Keybind::new(Command::ToggleMaximizeWhenOneWindowLeft, 58),
        // Mod + d
        Keybind::new(Command::ToggleDecoration, 40),
        // Mod + c
        Keybind::new(Command::CycleWindows, 54),
        // Mod + n
        Keybind::new(Command::CycleTiler, 57),
        // Mod + s
        Keybind::new(Command::SwapWindows, 39),
        // Mod + o
        Keybind::new(Command::StoreCurrentWindowsLayout, 32),
        // Mod + p
        Keybind::new(Command::RecreateWindowsLayout, 33),
        // Mod + 1..5 => select a tiler
        Keybind::new(Command::SetTiler(TilerKind::MasterStackVertical), 10),
        Keybind::new(Command::SetTiler(TilerKind::StackVertical), 11),
        Keybind::new(Command::SetTiler(TilerKind::MasterStackHorizontal), 12),
        Keybind::new(Command::SetTiler(TilerKind::StackHorizontal), 13),
        Keybind::new(Command::SetTiler(TilerKind::Maximize), 14),
        // Mod + = / Mod + -
        Keybind::new(Command::IncreaseMaxNumWindows, 21),
        Keybind::new(Command::DecreaseMaxNumWindows, 20),
        // Mod + Escape
        Keybind::new(Command::Exit, 9),
        // Mod + l
        Keybind::new(Command::LogActiveWindow, 46),
        // Mod + , / Mod + .
        Keybind::new(Command::ShrinkMaster, 59),
        Keybind::new(Command::EnlargeMaster, 60),
        // Mod + arrows
        Keybind::new(Command::FocusDirection(Direction::Left), 113),
        Keybind::new(Command::FocusDirection(Direction::Right), 114),
        Keybind::new(Command::FocusDirection(Direction::Up), 111),
        Keybind::new(Command::FocusDirection(Direction::Down), 116),
        // Mod + Tab
        Keybind::new(Command::FocusPrevious, 23),
    ]
}

impl Default for Config {
    fn default() -> Self {
        // Dialogs and tool windows of common applications.
        let ignore_windows = [
            ("Gimp", None, false),
            ("krusader", Some("^Krusader$"), true),
            ("Xfce4-panel", None, false),
            ("Plank", None, false),
        ]
        .into_iter()
        .filter_map(|(name, title, negate)| IgnoreRule::new(name, title, negate).ok())
        .collect();

        Self {
            log_level: "info".to_owned(),
            margin: 100,
            min_size: 350,
            step_size: 50,
            move_mouse_into_active_window: true,
            delay_tiling_windows_with_names: vec![],
            delay_time_tiling: 0.5,
            ignore_windows,
            ignore_windows_for_decoration: vec![],
            default_desktop: DesktopConfig::default(),
            desktops: vec![],
            tilers: TilersConfig::default(),
            notification: NotificationConfig::default(),
            modkey: Modifier::List(vec!["Control".to_owned(), "Mod4".to_owned()]),
            keybind: default_keybinds(),
            active_window_log: None,
        }
    }
}
