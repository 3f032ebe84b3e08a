use super::{Config, Direction, Manager, TilerKind, WindowHandle, WindowInfo};
use crate::display_servers::DisplayServer;
use crate::state::State;
use crate::DisplayAction;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a change of the active window reported by the window manager.
    pub fn focus_change_handler(&mut self, handle: Option<WindowHandle>) -> bool {
        if !self.state.record_focus(handle) {
            return false;
        }
        if let Some(window) = handle.and_then(|h| self.state.window(h)) {
            tracing::debug!(name = %window.name, title = %window.title, "active window changed");
        }
        // The maximize tiler follows the focus.
        let desktop = self.state.active_desktop;
        let desktop_state = self.state.desktop_state(desktop);
        if desktop_state.tiler != TilerKind::Maximize || !desktop_state.tiling_enabled {
            return false;
        }
        let is_tiled = handle.map_or(false, |h| self.state.scan(desktop).iter().any(|w| w.handle == h));
        is_tiled && self.state.tile_if_enabled(desktop)
    }
}

impl<C: Config> State<C> {
    /// Raises and focuses a window, moving the pointer along if configured.
    pub fn focus_window(&mut self, handle: WindowHandle) {
        self.record_focus(Some(handle));
        self.actions.push_back(DisplayAction::RaiseAndFocus(handle));
        if self.config.move_mouse_into_active_window() {
            self.actions.push_back(DisplayAction::MoveMouseOver(handle));
        }
    }

    /// Focuses the tiled window nearest to the focused one in `direction`.
    pub fn focus_direction(&mut self, direction: Direction) -> Option<bool> {
        let focused = self.focused?;
        let tiled = self.scan(self.active_desktop);
        let current = tiled.iter().find(|w| w.handle == focused)?;
        let target = nearest_in_direction(current, &tiled, direction)?;
        self.focus_window(target);
        Some(true)
    }

    /// Focuses the most recently focused other window still tiled on this desktop.
    pub fn focus_previous(&mut self) -> Option<bool> {
        let tiled = self.scan(self.active_desktop);
        let target = self
            .focus_history
            .iter()
            .copied()
            .find(|h| Some(*h) != self.focused && tiled.iter().any(|w| w.handle == *h))?;
        self.focus_window(target);
        Some(true)
    }
}

/// The candidate whose centre lies strictly on the `direction` side of `from`'s centre at the
/// smallest distance. Ties go to the oldest window.
fn nearest_in_direction(
    from: &WindowInfo,
    candidates: &[WindowInfo],
    direction: Direction,
) -> Option<WindowHandle> {
    let (fx, fy) = from.geometry.center();
    candidates
        .iter()
        .filter(|w| w.handle != from.handle)
        .filter(|w| {
            let (cx, cy) = w.geometry.center();
            match direction {
                Direction::Left => cx < fx,
                Direction::Right => cx > fx,
                Direction::Up => cy < fy,
                Direction::Down => cy > fy,
            }
        })
        .min_by_key(|w| {
            let (cx, cy) = w.geometry.center();
            let (dx, dy) = (i64::from(cx - fx), i64::from(cy - fy));
            (dx * dx + dy * dy, w.insertion_order)
        })
        .map(|w| w.handle)
}
