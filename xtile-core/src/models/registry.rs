use std::collections::HashMap;

use super::{matches, DesktopId, IgnoreRule, Window, WindowHandle, WindowInfo};

/// Remembers which windows were admitted to tiling, and in which order they first appeared.
#[derive(Debug, Default)]
pub struct Registry {
    next_order: u64,
    orders: HashMap<WindowHandle, u64>,
}

impl Registry {
    /// Lists the tileable windows of `desktop`, in the order the display server reported them.
    ///
    /// Hidden and modal windows are skipped, and so are windows matched by `rules` unless they
    /// were admitted by an earlier scan.
    pub fn scan<'a>(
        &mut self,
        desktop: DesktopId,
        windows: impl IntoIterator<Item = &'a Window>,
        rules: &[IgnoreRule],
    ) -> Vec<WindowInfo> {
        let mut found = Vec::new();
        for window in windows {
            if !window.is_visible_on(desktop) {
                continue;
            }
            let admitted = self.orders.contains_key(&window.handle);
            if !admitted && matches(rules, &window.name, &window.title) {
                continue;
            }
            let next_order = &mut self.next_order;
            let insertion_order = *self.orders.entry(window.handle).or_insert_with(|| {
                let order = *next_order;
                *next_order += 1;
                order
            });
            found.push(WindowInfo {
                handle: window.handle,
                name: window.name.clone(),
                title: window.title.clone(),
                geometry: window.geometry,
                decorated: window.decorated,
                insertion_order,
            });
        }
        found
    }

    /// Drops a destroyed window. Its order is never handed out again.
    pub fn forget(&mut self, handle: WindowHandle) {
        self.orders.remove(&handle);
    }

    #[cfg(test)]
    pub fn order(&self, handle: WindowHandle) -> Option<u64> {
        self.orders.get(&handle).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: u32, name: &str, title: &str) -> Window {
        let mut window = Window::new(WindowHandle(id), name, 1);
        window.title = title.to_owned();
        window
    }

    #[test]
    fn scan_skips_hidden_modal_and_foreign_windows() {
        let mut hidden = window(2, "b", "");
        hidden.hidden = true;
        let mut modal = window(3, "c", "");
        modal.modal = true;
        let mut elsewhere = window(4, "d", "");
        elsewhere.desktop = 2;
        let windows = [window(1, "a", ""), hidden, modal, elsewhere];
        let mut registry = Registry::default();
        let found = registry.scan(1, &windows, &[]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].handle, WindowHandle(1));
    }

    #[test]
    fn insertion_order_is_never_reused() {
        let mut registry = Registry::default();
        let first = [window(1, "a", ""), window(2, "b", "")];
        registry.scan(1, &first, &[]);
        registry.forget(WindowHandle(1));
        let second = [window(2, "b", ""), window(3, "c", "")];
        let found = registry.scan(1, &second, &[]);
        assert_eq!(found[0].insertion_order, 1);
        assert_eq!(found[1].insertion_order, 2);
        assert_eq!(registry.order(WindowHandle(1)), None);
    }

    #[test]
    fn admitted_window_survives_title_change() {
        let rules = [IgnoreRule::new("krusader", Some("^Krusader$"), true).unwrap()];
        let mut registry = Registry::default();
        let found = registry.scan(1, &[window(1, "krusader", "Krusader")], &rules);
        assert_eq!(found.len(), 1);
        let found = registry.scan(1, &[window(1, "krusader", "Copying")], &rules);
        assert_eq!(found.len(), 1);
        let found = registry.scan(1, &[window(2, "krusader", "Copying")], &rules);
        assert!(found.is_empty());
    }
}
