//! Everything the engine remembers between events.
use crate::config::{Config, NotificationEvent};
use crate::models::{
    DesktopId, DesktopState, LayoutStore, Margins, Rect, Registry, Window, WindowHandle,
    WindowInfo, STICKY_DESKTOP,
};
use crate::DisplayAction;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::time::Instant;

/// Number of previously focused windows kept for `FocusPrevious`.
const FOCUS_HISTORY_LEN: usize = 16;

#[derive(Debug)]
pub struct State<C> {
    pub config: C,
    /// Client windows in the order the display server reported them.
    pub windows: Vec<Window>,
    pub desktops: HashMap<DesktopId, DesktopState>,
    pub active_desktop: DesktopId,
    pub work_area: Rect,
    pub focused: Option<WindowHandle>,
    /// Most recent first, `focused` excluded.
    pub focus_history: VecDeque<WindowHandle>,
    pub registry: Registry,
    pub layout_store: LayoutStore,
    pub actions: VecDeque<DisplayAction>,
    /// Deadline of the postponed tiling pass.
    pub pending_tile: Option<Instant>,
    pub pending_desktops: BTreeSet<DesktopId>,
    pub exit_requested: bool,
}

impl<C: Config> State<C> {
    pub(crate) fn new(config: C) -> Self {
        let mut state = Self {
            config,
            windows: Vec::new(),
            desktops: HashMap::new(),
            active_desktop: 1,
            work_area: Rect::default(),
            focused: None,
            focus_history: VecDeque::new(),
            registry: Registry::default(),
            layout_store: LayoutStore::default(),
            actions: VecDeque::new(),
            pending_tile: None,
            pending_desktops: BTreeSet::new(),
            exit_requested: false,
        };
        state.desktop_state(1);
        state
    }

    /// The state of `desktop`, created from the configured defaults on first use.
    pub fn desktop_state(&mut self, desktop: DesktopId) -> &mut DesktopState {
        self.desktops
            .entry(desktop)
            .or_insert_with(|| DesktopState::new(desktop, &self.config))
    }

    pub fn active_state(&mut self) -> &mut DesktopState {
        self.desktop_state(self.active_desktop)
    }

    pub fn window(&self, handle: WindowHandle) -> Option<&Window> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    pub fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }

    /// The windows of `desktop` that take part in tiling. Sticky windows never do.
    pub fn scan(&mut self, desktop: DesktopId) -> Vec<WindowInfo> {
        if desktop == STICKY_DESKTOP {
            return Vec::new();
        }
        self.registry
            .scan(desktop, &self.windows, self.config.tiling_ignore_rules())
    }

    /// The desktop whose usable area a window on `desktop` can dock into.
    pub fn dock_desktop(&self, desktop: DesktopId) -> DesktopId {
        if desktop == STICKY_DESKTOP {
            self.active_desktop
        } else {
            desktop
        }
    }

    /// The work area minus the strips covered by untiled windows docked at its edges.
    pub fn usable_area(&self, desktop: DesktopId, tiled: &[WindowInfo]) -> Rect {
        let docked = self
            .windows
            .iter()
            .filter(|w| w.desktop == desktop || w.desktop == STICKY_DESKTOP)
            .filter(|w| !w.hidden && !tiled.iter().any(|t| t.handle == w.handle))
            .map(|w| w.geometry);
        let margins = Margins::docked(self.work_area, docked, self.config.margin());
        self.work_area.shrink(margins)
    }

    /// Queues a geometry change and remembers it as the window's current geometry.
    pub fn set_geometry(&mut self, handle: WindowHandle, geometry: Rect) {
        if let Some(window) = self.window_mut(handle) {
            window.geometry = geometry;
        }
        self.actions
            .push_back(DisplayAction::SetGeometry(handle, geometry));
    }

    pub fn set_decorated(&mut self, handle: WindowHandle, decorated: bool) {
        if let Some(window) = self.window_mut(handle) {
            window.decorated = decorated;
        }
        self.actions
            .push_back(DisplayAction::SetDecorated(handle, decorated));
    }

    /// Whether the decoration of `handle` may be changed.
    pub fn decoration_toggleable(&self, handle: WindowHandle) -> bool {
        self.window(handle).map_or(false, |w| {
            !crate::models::matches_decoration(self.config.decoration_ignore_rules(), w)
        })
    }

    pub fn notify(&mut self, event: NotificationEvent) {
        if let Some(notification) = self.config.notification(event) {
            self.actions.push_back(DisplayAction::Notify(notification));
        }
    }

    /// Records `handle` as focused, pushing the previous one onto the history.
    pub fn record_focus(&mut self, handle: Option<WindowHandle>) -> bool {
        if self.focused == handle {
            return false;
        }
        if let Some(previous) = self.focused.take() {
            self.focus_history.retain(|h| *h != previous);
            self.focus_history.push_front(previous);
            self.focus_history.truncate(FOCUS_HISTORY_LEN);
        }
        if let Some(handle) = handle {
            self.focus_history.retain(|h| *h != handle);
        }
        self.focused = handle;
        true
    }

    /// Forgets everything about a window that no longer exists.
    pub fn remove_window(&mut self, handle: WindowHandle) -> Option<Window> {
        let index = self.windows.iter().position(|w| w.handle == handle)?;
        let window = self.windows.remove(index);
        self.registry.forget(handle);
        self.focus_history.retain(|h| *h != handle);
        if self.focused == Some(handle) {
            self.focused = None;
        }
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::models::IgnoreRule;

    fn window(id: u32, geometry: Rect) -> Window {
        let mut window = Window::new(WindowHandle(id), format!("app{id}"), 1);
        window.geometry = geometry;
        window
    }

    #[test]
    fn desktops_are_created_lazily() {
        let mut state = State::new(TestConfig::default());
        assert_eq!(state.desktops.len(), 1);
        state.desktop_state(7).tiling_enabled = false;
        assert_eq!(state.desktops.len(), 2);
        assert!(!state.desktop_state(7).tiling_enabled);
    }

    #[test]
    fn docked_ignored_window_shrinks_usable_area() {
        let config = TestConfig {
            margin: 100,
            tiling_ignore_rules: vec![IgnoreRule::new("app9", None, false).unwrap()],
            ..TestConfig::default()
        };
        let mut state = State::new(config);
        state.work_area = Rect::new(0, 0, 1920, 1080);
        state.windows = vec![
            window(1, Rect::new(500, 0, 600, 600)),
            window(9, Rect::new(0, 0, 250, 1080)),
        ];
        let tiled = state.scan(1);
        assert_eq!(tiled.len(), 1);
        assert_eq!(state.usable_area(1, &tiled), Rect::new(250, 0, 1670, 1080));
    }

    #[test]
    fn focus_history_keeps_most_recent_first() {
        let mut state = State::new(TestConfig::default());
        state.record_focus(Some(WindowHandle(1)));
        state.record_focus(Some(WindowHandle(2)));
        state.record_focus(Some(WindowHandle(3)));
        state.record_focus(Some(WindowHandle(1)));
        assert_eq!(
            state.focus_history,
            VecDeque::from(vec![WindowHandle(3), WindowHandle(2)])
        );
        assert!(!state.record_focus(Some(WindowHandle(1))));
    }

    #[test]
    fn removed_window_leaves_no_trace() {
        let mut state = State::new(TestConfig::default());
        state.windows = vec![window(1, Rect::default()), window(2, Rect::default())];
        state.scan(1);
        state.record_focus(Some(WindowHandle(1)));
        state.record_focus(Some(WindowHandle(2)));
        assert!(state.remove_window(WindowHandle(2)).is_some());
        assert_eq!(state.focused, None);
        assert_eq!(state.registry.order(WindowHandle(2)), None);
        assert!(state.remove_window(WindowHandle(2)).is_none());
    }
}
