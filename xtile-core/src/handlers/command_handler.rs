use super::{Command, Config, Manager, TilerKind};
use crate::config::NotificationEvent;
use crate::display_servers::DisplayServer;
use crate::models::{DesktopState, SnapshotEntry};
use crate::state::State;
use crate::utils::window_log;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Processes a command and invokes the associated function.
    /// Returns true if changes need to be flushed.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!(?command, id = command.id(), "command");
        process_internal(&mut self.state, command).unwrap_or(false)
    }
}

fn process_internal<C: Config>(state: &mut State<C>, command: &Command) -> Option<bool> {
    match command {
        Command::ToggleResize => Some(toggle_resize(state)),
        Command::ToggleTiling => Some(toggle_tiling(state)),
        Command::ToggleResizeAndTiling => {
            toggle_resize(state);
            Some(toggle_tiling(state))
        }
        Command::ToggleMaximizeWhenOneWindowLeft => toggle_maximize_when_one_left(state),
        Command::ToggleDecoration => toggle_decoration(state),
        Command::CycleWindows => cycle_windows(state),
        Command::CycleTiler => Some(set_tiler(state, None)),
        Command::SwapWindows => swap_windows(state),
        Command::StoreCurrentWindowsLayout => {
            let desktop = state.active_desktop;
            let windows = state.scan(desktop);
            state.layout_store.store(desktop, &windows);
            state.notify(NotificationEvent::StoreCurrentWindowsLayout);
            Some(true)
        }
        Command::RecreateWindowsLayout => recreate_windows_layout(state),
        Command::SetTiler(tiler) => Some(set_tiler(state, Some(*tiler))),
        Command::IncreaseMaxNumWindows => change_max_windows(state, 1),
        Command::DecreaseMaxNumWindows => change_max_windows(state, -1),
        Command::Exit => {
            state.notify(NotificationEvent::Exit);
            state.exit_requested = true;
            Some(true)
        }
        Command::LogActiveWindow => log_active_window(state),
        Command::ShrinkMaster => {
            let step = state.config.step_size();
            change_master(state, -step)
        }
        Command::EnlargeMaster => {
            let step = state.config.step_size();
            change_master(state, step)
        }
        Command::FocusDirection(direction) => state.focus_direction(*direction),
        Command::FocusPrevious => state.focus_previous(),
    }
}

fn toggle_resize<C: Config>(state: &mut State<C>) -> bool {
    let enabled = state.active_state().toggle_resize_sync();
    state.notify(NotificationEvent::Resizing(enabled));
    true
}

fn toggle_tiling<C: Config>(state: &mut State<C>) -> bool {
    let enabled = state.active_state().toggle_tiling();
    state.notify(NotificationEvent::Tiling(enabled));
    if enabled {
        state.tile_if_enabled(state.active_desktop);
    }
    true
}

fn toggle_maximize_when_one_left<C: Config>(state: &mut State<C>) -> Option<bool> {
    let enabled = state.active_state().toggle_maximize_when_one_left();
    state.notify(NotificationEvent::MaximizeWhenOneWindowLeft(enabled));
    state.tile_if_enabled(state.active_desktop);
    Some(true)
}

fn toggle_decoration<C: Config>(state: &mut State<C>) -> Option<bool> {
    let enabled = state.active_state().toggle_decoration();
    let tiled = state.scan(state.active_desktop);
    for window in tiled {
        if state.decoration_toggleable(window.handle) {
            state.set_decorated(window.handle, enabled);
        }
    }
    state.notify(NotificationEvent::Decoration(enabled));
    Some(true)
}

/// Every tiled window takes the place of the next one.
fn cycle_windows<C: Config>(state: &mut State<C>) -> Option<bool> {
    let tiled = state.scan(state.active_desktop);
    if tiled.len() < 2 {
        return None;
    }
    let next = tiled.iter().cycle().skip(1);
    let moves: Vec<_> = tiled
        .iter()
        .zip(next)
        .map(|(window, next)| (window.handle, next.geometry))
        .collect();
    for (handle, geometry) in moves {
        state.set_geometry(handle, geometry);
    }
    Some(true)
}

/// Swaps the focused window with the oldest one.
fn swap_windows<C: Config>(state: &mut State<C>) -> Option<bool> {
    let focused = state.focused?;
    let tiled = state.scan(state.active_desktop);
    let current = tiled.iter().find(|w| w.handle == focused)?;
    let oldest = tiled.iter().min_by_key(|w| w.insertion_order)?;
    if oldest.handle == current.handle {
        return None;
    }
    state.set_geometry(current.handle, oldest.geometry);
    state.set_geometry(oldest.handle, current.geometry);
    if current.decorated != oldest.decorated
        && state.decoration_toggleable(current.handle)
        && state.decoration_toggleable(oldest.handle)
    {
        state.set_decorated(current.handle, oldest.decorated);
        state.set_decorated(oldest.handle, current.decorated);
    }
    Some(true)
}

fn recreate_windows_layout<C: Config>(state: &mut State<C>) -> Option<bool> {
    let desktop = state.active_desktop;
    let present = state.scan(desktop);
    let entries = state.layout_store.restore(desktop, &present);
    if entries.is_empty() {
        return None;
    }
    for SnapshotEntry {
        handle,
        geometry,
        decorated,
    } in entries
    {
        state.set_geometry(handle, geometry);
        let current = state.window(handle).map(|w| w.decorated);
        if current != Some(decorated) && state.decoration_toggleable(handle) {
            state.set_decorated(handle, decorated);
        }
    }
    Some(true)
}

/// Selects `tiler`, or the next one when `None`, and applies it once even with automatic
/// tiling off.
fn set_tiler<C: Config>(state: &mut State<C>, tiler: Option<TilerKind>) -> bool {
    let desktop = state.active_desktop;
    let config = &state.config;
    let desktop_state = state
        .desktops
        .entry(desktop)
        .or_insert_with(|| DesktopState::new(desktop, config));
    let tiler = match tiler {
        Some(tiler) => {
            desktop_state.set_tiler(tiler, config);
            tiler
        }
        None => desktop_state.cycle_tiler(config),
    };
    tracing::debug!(desktop, %tiler, "tiler selected");
    state.tile_logged(desktop)
}

fn change_max_windows<C: Config>(state: &mut State<C>, delta: isize) -> Option<bool> {
    if !state.active_state().change_max_windows(delta) {
        return None;
    }
    Some(state.tile_if_enabled(state.active_desktop))
}

fn change_master<C: Config>(state: &mut State<C>, delta: i32) -> Option<bool> {
    let desktop = state.active_desktop;
    let tiled = state.scan(desktop);
    let usable = state.usable_area(desktop, &tiled);
    let min_size = state.config.min_size();
    let desktop_state = state.active_state();
    let extent = match desktop_state.tiler {
        TilerKind::MasterStackVertical => usable.w,
        TilerKind::MasterStackHorizontal => usable.h,
        _ => return None,
    };
    if !desktop_state.change_master_fraction(delta, extent, min_size) {
        return None;
    }
    Some(state.tile_if_enabled(desktop))
}

fn log_active_window<C: Config>(state: &mut State<C>) -> Option<bool> {
    let window = state.window(state.focused?)?;
    let path = state.config.active_window_log();
    if let Err(err) = window_log::append(&path, &window.name, &window.title) {
        tracing::error!("Unable to write {}: {}", path.display(), err);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Rect, Window, WindowHandle};
    use crate::{DisplayAction, Notification};

    type TestManager = Manager<TestConfig, MockDisplayServer>;

    fn manager_with(config: TestConfig, count: u32) -> TestManager {
        let mut manager = Manager::new(config).unwrap();
        manager.state.work_area = Rect::new(0, 0, 1920, 1080);
        for id in 1..=count {
            let mut window = Window::new(WindowHandle(id), format!("app{id}"), 1);
            let offset = 10 * id as i32;
            window.geometry = Rect::new(1500 + offset, 600 + offset, 400, 400);
            manager.window_created_handler(window);
        }
        manager.state.actions.clear();
        manager
    }

    fn geometry(manager: &TestManager, id: u32) -> Rect {
        manager.state.window(WindowHandle(id)).unwrap().geometry
    }

    #[test]
    fn toggle_commands_are_involutions() {
        let mut manager = manager_with(TestConfig::default(), 2);
        let original = manager.state.desktop_state(1).clone();
        for command in [
            Command::ToggleResize,
            Command::ToggleTiling,
            Command::ToggleResizeAndTiling,
            Command::ToggleMaximizeWhenOneWindowLeft,
            Command::ToggleDecoration,
        ] {
            manager.command_handler(&command);
            manager.command_handler(&command);
            assert_eq!(manager.state.desktop_state(1), &original, "{command:?}");
        }
    }

    #[test]
    fn cycle_tiler_returns_after_five_steps() {
        let mut manager = manager_with(TestConfig::default(), 2);
        let original = manager.state.desktop_state(1).tiler;
        for _ in 0..TilerKind::ALL.len() {
            manager.command_handler(&Command::CycleTiler);
        }
        assert_eq!(manager.state.desktop_state(1).tiler, original);
    }

    #[test]
    fn selecting_a_tiler_tiles_even_when_tiling_is_off() {
        let mut manager = manager_with(TestConfig::default(), 2);
        manager.state.desktop_state(1).tiling_enabled = false;
        manager.command_handler(&Command::SetTiler(TilerKind::StackVertical));
        assert_eq!(geometry(&manager, 1), Rect::new(0, 0, 1920, 540));
        assert_eq!(geometry(&manager, 2), Rect::new(0, 540, 1920, 540));
        assert!(!manager.state.desktop_state(1).tiling_enabled);
    }

    #[test]
    fn increase_max_windows_retiles_all_four() {
        let mut manager = manager_with(TestConfig::default(), 4);
        assert_eq!(manager.state.desktop_state(1).max_windows, 3);
        assert_eq!(geometry(&manager, 4), Rect::new(1540, 640, 400, 400));

        assert!(manager.command_handler(&Command::IncreaseMaxNumWindows));
        assert_eq!(manager.state.desktop_state(1).max_windows, 4);
        assert_eq!(geometry(&manager, 1), Rect::new(0, 0, 960, 1080));
        assert_eq!(geometry(&manager, 2), Rect::new(960, 0, 960, 360));
        assert_eq!(geometry(&manager, 3), Rect::new(960, 360, 960, 360));
        assert_eq!(geometry(&manager, 4), Rect::new(960, 720, 960, 360));
    }

    #[test]
    fn max_windows_never_drops_below_one() {
        let mut manager = manager_with(TestConfig::default(), 2);
        manager.state.desktop_state(1).max_windows = 1;
        assert!(!manager.command_handler(&Command::DecreaseMaxNumWindows));
        assert_eq!(manager.state.desktop_state(1).max_windows, 1);
    }

    #[test]
    fn cycle_windows_rotates_geometries() {
        let mut manager = manager_with(TestConfig::default(), 3);
        let before: Vec<_> = (1..=3).map(|id| geometry(&manager, id)).collect();
        assert!(manager.command_handler(&Command::CycleWindows));
        assert_eq!(geometry(&manager, 1), before[1]);
        assert_eq!(geometry(&manager, 2), before[2]);
        assert_eq!(geometry(&manager, 3), before[0]);
    }

    #[test]
    fn swap_exchanges_focused_and_oldest() {
        let mut manager = manager_with(TestConfig::default(), 3);
        let master = geometry(&manager, 1);
        let bottom = geometry(&manager, 3);
        manager.state.focused = Some(WindowHandle(3));
        assert!(manager.command_handler(&Command::SwapWindows));
        assert_eq!(geometry(&manager, 1), bottom);
        assert_eq!(geometry(&manager, 3), master);

        manager.state.focused = Some(WindowHandle(1));
        manager.state.actions.clear();
        assert!(!manager.command_handler(&Command::SwapWindows));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn store_then_recreate_restores_geometry_and_decoration() {
        let mut manager = manager_with(TestConfig::default(), 2);
        manager.command_handler(&Command::StoreCurrentWindowsLayout);
        let stored: Vec<_> = manager.state.windows.clone();

        manager.command_handler(&Command::ToggleDecoration);
        manager.command_handler(&Command::CycleWindows);
        assert_ne!(manager.state.windows, stored);

        manager.command_handler(&Command::RecreateWindowsLayout);
        assert_eq!(manager.state.windows, stored);
    }

    #[test]
    fn decoration_toggle_skips_client_side_decorated_windows() {
        let mut manager = manager_with(TestConfig::default(), 2);
        manager.state.window_mut(WindowHandle(2)).unwrap().csd = true;
        manager.command_handler(&Command::ToggleDecoration);
        let decorated: Vec<_> = manager
            .state
            .actions
            .iter()
            .filter(|a| matches!(a, DisplayAction::SetDecorated(..)))
            .cloned()
            .collect();
        assert_eq!(
            decorated,
            vec![DisplayAction::SetDecorated(WindowHandle(1), false)]
        );
    }

    #[test]
    fn shrink_master_moves_the_boundary() {
        let mut manager = manager_with(TestConfig::default(), 2);
        assert!(manager.command_handler(&Command::ShrinkMaster));
        assert_eq!(geometry(&manager, 1), Rect::new(0, 0, 910, 1080));
        assert_eq!(geometry(&manager, 2), Rect::new(910, 0, 1010, 1080));
        assert!(manager.command_handler(&Command::EnlargeMaster));
        assert_eq!(geometry(&manager, 1).w, 960);
    }

    #[test]
    fn shrink_master_is_ignored_by_stack_tilers() {
        let mut manager = manager_with(TestConfig::default(), 2);
        manager.command_handler(&Command::SetTiler(TilerKind::StackHorizontal));
        manager.state.actions.clear();
        assert!(!manager.command_handler(&Command::ShrinkMaster));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn focus_commands_raise_and_move_pointer() {
        let config = TestConfig {
            move_mouse: true,
            ..TestConfig::default()
        };
        let mut manager = manager_with(config, 3);
        manager.state.focused = Some(WindowHandle(1));
        assert!(manager.command_handler(&Command::FocusDirection(crate::Direction::Right)));
        assert_eq!(manager.state.focused, Some(WindowHandle(2)));
        assert_eq!(
            Vec::from(manager.state.actions.clone()),
            vec![
                DisplayAction::RaiseAndFocus(WindowHandle(2)),
                DisplayAction::MoveMouseOver(WindowHandle(2)),
            ]
        );

        assert!(manager.command_handler(&Command::FocusPrevious));
        assert_eq!(manager.state.focused, Some(WindowHandle(1)));
        assert!(!manager.command_handler(&Command::FocusDirection(crate::Direction::Left)));
    }

    #[test]
    fn exit_notifies_and_stops() {
        let config = TestConfig {
            notifications: true,
            ..TestConfig::default()
        };
        let mut manager = manager_with(config, 0);
        manager.command_handler(&Command::Exit);
        assert!(manager.state.exit_requested);
        assert!(matches!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::Notify(Notification { .. }))
        ));
    }

    #[test]
    fn log_active_window_appends_a_line() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = TestConfig {
            log_path: file.path().to_path_buf(),
            ..TestConfig::default()
        };
        let mut manager = manager_with(config, 1);
        manager.state.focused = Some(WindowHandle(1));
        manager.command_handler(&Command::LogActiveWindow);
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("]  name: app1,  title: "));
    }
}
