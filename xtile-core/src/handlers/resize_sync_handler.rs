use super::{Config, DesktopId, Manager, Rect, TilerKind, WindowHandle};
use crate::display_servers::DisplayServer;
use crate::resize_sync::{compensate, moved_border, SyncParams};
use crate::state::State;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a window whose frame moved or was resized.
    ///
    /// When the user drags one edge of the focused tiled window, docked neighbours follow it.
    ///
    /// An untiled window that moves into or out of a dock re-tiles its desktop instead.
    pub fn geometry_change_handler(&mut self, handle: WindowHandle, geometry: Rect) -> bool {
        let Some((old, desktop)) = self.state.window(handle).map(|w| (w.geometry, w.desktop)) else {
            return false;
        };
        if old == geometry {
            return false;
        }
        let dock_desktop = self.state.dock_desktop(desktop);
        let usable_before = self.state.current_usable_area(dock_desktop);
        if let Some(window) = self.state.window_mut(handle) {
            window.geometry = geometry;
        }

        let tiled = self.state.scan(desktop);
        if !tiled.iter().any(|w| w.handle == handle) {
            return self
                .state
                .retile_if_area_changed(dock_desktop, usable_before);
        }
        if self.state.focused != Some(handle) {
            return false;
        }
        if !self.state.desktop_state(desktop).resize_sync_enabled {
            return false;
        }
        let Some(border) = moved_border(old, geometry) else {
            return false;
        };

        let usable = self.state.usable_area(desktop, &tiled);
        let neighbours: Vec<_> = tiled
            .iter()
            .filter(|w| w.handle != handle)
            .map(|w| (w.handle, w.geometry))
            .collect();
        let params = SyncParams {
            usable,
            margin: self.state.config.margin(),
            min_size: self.state.config.min_size(),
        };
        let moved = compensate(border, old, geometry, &neighbours, &params);
        tracing::trace!(%handle, ?border, neighbours = moved.len(), "synchronizing resize");

        let resized: Vec<Rect> = std::iter::once(geometry)
            .chain(moved.iter().map(|(_, rect)| *rect))
            .collect();
        track_master(&mut self.state, desktop, usable, &resized);

        let changed = !moved.is_empty();
        for (neighbour, rect) in moved {
            self.state.set_geometry(neighbour, rect);
        }
        changed
    }
}

/// Keeps the master fraction in line with a master region the user resized by hand.
fn track_master<C: Config>(
    state: &mut State<C>,
    desktop: DesktopId,
    usable: Rect,
    resized: &[Rect],
) {
    let min_size = state.config.min_size();
    let desktop_state = state.desktop_state(desktop);
    for rect in resized {
        let at_origin = rect.x == usable.x && rect.y == usable.y;
        match desktop_state.tiler {
            TilerKind::MasterStackVertical
                if at_origin && rect.bottom() == usable.bottom() && rect.right() < usable.right() =>
            {
                desktop_state.set_master_extent(rect.w, usable.w, min_size);
                return;
            }
            TilerKind::MasterStackHorizontal
                if at_origin && rect.right() == usable.right() && rect.bottom() < usable.bottom() =>
            {
                desktop_state.set_master_extent(rect.h, usable.h, min_size);
                return;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{IgnoreRule, Window};

    fn tiled_manager() -> Manager<TestConfig, MockDisplayServer> {
        let config = TestConfig {
            margin: 10,
            ..TestConfig::default()
        };
        let mut manager = Manager::new(config).unwrap();
        manager.state.work_area = Rect::new(0, 0, 1920, 1080);
        for id in 1..=3 {
            let mut window = Window::new(WindowHandle(id), "term", 1);
            window.geometry = Rect::new(10 * id as i32, 0, 300, 300);
            manager.window_created_handler(window);
        }
        manager.state.actions.clear();
        manager.state.focused = Some(WindowHandle(1));
        manager
    }

    #[test]
    fn dragging_master_edge_moves_stack_and_keeps_fraction() {
        let mut manager = tiled_manager();
        assert!(manager.geometry_change_handler(WindowHandle(1), Rect::new(0, 0, 1152, 1080)));
        assert_eq!(
            manager.state.window(WindowHandle(2)).unwrap().geometry,
            Rect::new(1152, 0, 768, 540)
        );
        assert_eq!(
            manager.state.window(WindowHandle(3)).unwrap().geometry,
            Rect::new(1152, 540, 768, 540)
        );
        let fraction = manager.state.desktop_state(1).master_fraction;
        assert!((fraction - 0.6).abs() < 1e-6);

        manager.state.actions.clear();
        assert!(!manager.state.tile(1).unwrap());
    }

    #[test]
    fn unfocused_or_disabled_windows_are_not_synchronized() {
        let mut manager = tiled_manager();
        manager.state.focused = Some(WindowHandle(2));
        assert!(!manager.geometry_change_handler(WindowHandle(1), Rect::new(0, 0, 1000, 1080)));

        let mut manager = tiled_manager();
        manager.state.desktop_state(1).resize_sync_enabled = false;
        assert!(!manager.geometry_change_handler(WindowHandle(1), Rect::new(0, 0, 1000, 1080)));
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry,
            Rect::new(0, 0, 1000, 1080)
        );
    }

    #[test]
    fn resized_dock_moves_the_tiled_windows() {
        let config = TestConfig {
            margin: 100,
            tiling_ignore_rules: vec![IgnoreRule::new("panel", None, false).unwrap()],
            ..TestConfig::default()
        };
        let mut manager: Manager<TestConfig, MockDisplayServer> = Manager::new(config).unwrap();
        manager.state.work_area = Rect::new(0, 0, 1920, 1080);
        let mut panel = Window::new(WindowHandle(9), "panel", 1);
        panel.geometry = Rect::new(0, 0, 300, 1080);
        manager.window_created_handler(panel);
        for (id, x) in [(1, 300), (2, 1000)] {
            let mut window = Window::new(WindowHandle(id), "term", 1);
            window.geometry = Rect::new(x, 0, 500, 500);
            manager.window_created_handler(window);
        }
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry.x,
            300
        );

        assert!(manager.geometry_change_handler(WindowHandle(9), Rect::new(0, 0, 400, 1080)));
        assert_eq!(
            manager.state.window(WindowHandle(1)).unwrap().geometry,
            Rect::new(400, 0, 760, 1080)
        );

        manager.state.actions.clear();
        assert!(!manager.geometry_change_handler(WindowHandle(9), Rect::new(0, 0, 400, 1080)));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn moving_a_window_is_not_a_resize() {
        let mut manager = tiled_manager();
        assert!(!manager.geometry_change_handler(WindowHandle(1), Rect::new(50, 50, 960, 1080)));
        assert!(manager.state.actions.is_empty());
    }
}
