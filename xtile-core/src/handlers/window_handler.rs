use super::{Config, DesktopId, Manager, Window, WindowHandle};
use crate::display_servers::DisplayServer;
use crate::state::State;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a newly discovered window.
    /// Returns true if changes need to be flushed.
    pub fn window_created_handler(&mut self, window: Window) -> bool {
        if self.state.window(window.handle).is_some() {
            return self.window_changed_handler(window);
        }
        let handle = window.handle;
        let desktop = window.desktop;
        let delays_tiling = self.state.config.delays_tiling(&window.name);
        tracing::debug!(
            %handle,
            name = %window.name,
            title = %window.title,
            desktop,
            "window created"
        );
        let dock_desktop = self.state.dock_desktop(desktop);
        let usable_before = self.state.current_usable_area(dock_desktop);
        self.state.windows.push(window);

        if !is_tiled(&mut self.state, desktop, handle) {
            return self
                .state
                .retile_if_area_changed(dock_desktop, usable_before);
        }
        apply_desktop_decoration(&mut self.state, desktop, handle);
        if delays_tiling {
            tracing::debug!(%handle, "postponing tiling");
            self.state.postpone_tiling(desktop);
        } else {
            self.state.tile_if_enabled(desktop);
        }
        true
    }

    /// Process a window whose properties changed. Desktops whose set of tiled windows changed
    /// as a result are re-tiled.
    pub fn window_changed_handler(&mut self, window: Window) -> bool {
        let Some(old) = self.state.window(window.handle).cloned() else {
            return self.window_created_handler(window);
        };
        let mut desktops = vec![
            self.state.dock_desktop(old.desktop),
            self.state.dock_desktop(window.desktop),
        ];
        desktops.dedup();
        let before: Vec<_> = desktops
            .iter()
            .map(|d| {
                let tiled = tiled_handles(&mut self.state, *d);
                (tiled, self.state.current_usable_area(*d))
            })
            .collect();

        if let Some(known) = self.state.window_mut(window.handle) {
            *known = window;
        }

        let mut changed = false;
        for (desktop, (tiled_before, usable_before)) in desktops.into_iter().zip(before) {
            let tiled_after = tiled_handles(&mut self.state, desktop);
            if tiled_after != tiled_before {
                tracing::debug!(desktop, windows = tiled_after.len(), "tiled window count changed");
                if tiled_after.contains(&old.handle) && !tiled_before.contains(&old.handle) {
                    apply_desktop_decoration(&mut self.state, desktop, old.handle);
                }
                self.state.tile_if_enabled(desktop);
                changed = true;
            } else {
                changed |= self.state.retile_if_area_changed(desktop, usable_before);
            }
        }
        changed
    }

    /// Process a window that went away.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        let Some(window) = self.state.remove_window(handle) else {
            return false;
        };
        tracing::debug!(%handle, name = %window.name, "window destroyed");
        self.state.tile_if_enabled(window.desktop);
        true
    }
}

fn tiled_handles<C: Config>(state: &mut State<C>, desktop: DesktopId) -> Vec<WindowHandle> {
    state.scan(desktop).into_iter().map(|w| w.handle).collect()
}

fn is_tiled<C: Config>(state: &mut State<C>, desktop: DesktopId, handle: WindowHandle) -> bool {
    state.scan(desktop).iter().any(|w| w.handle == handle)
}

/// New windows follow the decoration toggle of their desktop.
fn apply_desktop_decoration<C: Config>(
    state: &mut State<C>,
    desktop: DesktopId,
    handle: WindowHandle,
) {
    let decorated = state.desktop_state(desktop).decoration_enabled;
    let current = state.window(handle).map(|w| w.decorated);
    if current != Some(decorated) && state.decoration_toggleable(handle) {
        state.set_decorated(handle, decorated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{IgnoreRule, Pattern, Rect};
    use crate::DisplayAction;

    fn window(id: u32, desktop: DesktopId) -> Window {
        let mut window = Window::new(WindowHandle(id), format!("app{id}"), desktop);
        window.geometry = Rect::new(0, 0, 500, 500);
        window
    }

    fn test_manager(config: TestConfig) -> Manager<TestConfig, MockDisplayServer> {
        let mut manager = Manager::new(config).unwrap();
        manager.state.work_area = Rect::new(0, 0, 1920, 1080);
        manager
    }

    #[test]
    fn new_window_is_tiled() {
        let mut manager = test_manager(TestConfig::default());
        assert!(manager.window_created_handler(window(1, 1)));
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry,
            Rect::new(0, 0, 1920, 1080)
        );
    }

    #[test]
    fn ignored_window_is_never_touched() {
        let config = TestConfig {
            tiling_ignore_rules: vec![IgnoreRule::new("app1", None, false).unwrap()],
            ..TestConfig::default()
        };
        let mut manager = test_manager(config);
        assert!(!manager.window_created_handler(window(1, 1)));
        assert!(manager.state.actions.is_empty());
    }

    fn docking_manager() -> Manager<TestConfig, MockDisplayServer> {
        let config = TestConfig {
            margin: 100,
            tiling_ignore_rules: vec![IgnoreRule::new("panel", None, false).unwrap()],
            ..TestConfig::default()
        };
        let mut manager = test_manager(config);
        manager.window_created_handler(window(1, 1));
        manager.window_created_handler(window(2, 1));
        manager.state.actions.clear();
        manager
    }

    fn panel(geometry: Rect) -> Window {
        let mut panel = Window::new(WindowHandle(9), "panel", 1);
        panel.geometry = geometry;
        panel
    }

    fn master(manager: &Manager<TestConfig, MockDisplayServer>) -> Rect {
        manager.state.window(WindowHandle(1)).unwrap().geometry
    }

    #[test]
    fn new_docked_window_shrinks_the_tiled_area() {
        let mut manager = docking_manager();
        assert!(manager.window_created_handler(panel(Rect::new(0, 0, 300, 1080))));
        assert_eq!(master(&manager), Rect::new(300, 0, 810, 1080));
        assert_eq!(
            manager.state.window(WindowHandle(9)).unwrap().geometry,
            Rect::new(0, 0, 300, 1080)
        );
    }

    #[test]
    fn docked_window_shown_later_shrinks_the_tiled_area() {
        let mut manager = docking_manager();
        let mut hidden = panel(Rect::new(0, 0, 300, 1080));
        hidden.hidden = true;
        assert!(!manager.window_created_handler(hidden.clone()));
        assert_eq!(master(&manager), Rect::new(0, 0, 960, 1080));

        hidden.hidden = false;
        assert!(manager.window_changed_handler(hidden));
        assert_eq!(master(&manager).x, 300);
    }

    #[test]
    fn sticky_dock_shrinks_the_active_desktop() {
        let mut manager = docking_manager();
        let mut sticky = panel(Rect::new(0, 0, 1920, 200));
        sticky.desktop = crate::models::STICKY_DESKTOP;
        assert!(manager.window_created_handler(sticky));
        assert_eq!(master(&manager), Rect::new(0, 200, 960, 880));
    }

    #[test]
    fn delayed_windows_coalesce_into_one_pass() {
        let config = TestConfig {
            delay_patterns: vec![Pattern::new("app").unwrap()],
            ..TestConfig::default()
        };
        let mut manager = test_manager(config);
        manager.window_created_handler(window(1, 1));
        let first = manager.state.pending_tile.unwrap();
        manager.window_created_handler(window(2, 1));
        manager.window_created_handler(window(3, 2));
        assert!(manager.state.pending_tile.unwrap() >= first);
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.state.pending_desktops.len(), 2);

        assert!(manager.state.run_pending_tiling());
        let moved: Vec<_> = manager
            .state
            .actions
            .iter()
            .filter(|a| matches!(a, DisplayAction::SetGeometry(..)))
            .collect();
        assert_eq!(moved.len(), 3);
    }

    #[test]
    fn window_moved_to_another_desktop_retiles_both() {
        let mut manager = test_manager(TestConfig::default());
        manager.window_created_handler(window(1, 1));
        manager.window_created_handler(window(2, 1));
        manager.window_created_handler(window(3, 2));
        manager.state.actions.clear();

        let mut moved = manager.state.window(WindowHandle(2)).unwrap().clone();
        moved.desktop = 2;
        assert!(manager.window_changed_handler(moved));
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry,
            Rect::new(0, 0, 1920, 1080)
        );
        let on_two: Vec<_> = manager
            .state
            .windows
            .iter()
            .filter(|w| w.desktop == 2)
            .map(|w| w.geometry.w)
            .collect();
        assert_eq!(on_two, vec![960, 960]);
    }

    #[test]
    fn destroyed_window_is_forgotten_and_desktop_retiled() {
        let mut manager = test_manager(TestConfig::default());
        manager.window_created_handler(window(1, 1));
        manager.window_created_handler(window(2, 1));
        assert!(manager.window_destroyed_handler(WindowHandle(2)));
        assert!(manager.state.window(WindowHandle(2)).is_none());
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry,
            Rect::new(0, 0, 1920, 1080)
        );
        assert!(!manager.window_destroyed_handler(WindowHandle(2)));
    }

    #[test]
    fn new_window_follows_disabled_decoration() {
        let mut manager = test_manager(TestConfig::default());
        manager.state.desktop_state(1).decoration_enabled = false;
        manager.window_created_handler(window(1, 1));
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::SetDecorated(WindowHandle(1), false)));
        assert!(!manager.state.window(WindowHandle(1)).unwrap().decorated);
    }
}
