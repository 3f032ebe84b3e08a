use std::collections::HashMap;

use super::{DesktopId, Rect, WindowHandle, WindowInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub handle: WindowHandle,
    pub geometry: Rect,
    pub decorated: bool,
}

/// One saved arrangement per desktop.
#[derive(Debug, Default)]
pub struct LayoutStore {
    snapshots: HashMap<DesktopId, Vec<SnapshotEntry>>,
}

impl LayoutStore {
    /// Replaces the snapshot of `desktop`.
    pub fn store(&mut self, desktop: DesktopId, windows: &[WindowInfo]) {
        let entries = windows
            .iter()
            .map(|w| SnapshotEntry {
                handle: w.handle,
                geometry: w.geometry,
                decorated: w.decorated,
            })
            .collect();
        self.snapshots.insert(desktop, entries);
    }

    /// The saved entries of `desktop` whose windows are still `present`, in snapshot order.
    pub fn restore(&self, desktop: DesktopId, present: &[WindowInfo]) -> Vec<SnapshotEntry> {
        let Some(entries) = self.snapshots.get(&desktop) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter(|entry| present.iter().any(|w| w.handle == entry.handle))
            .copied()
            .collect()
    }

    #[cfg(test)]
    pub fn snapshot(&self, desktop: DesktopId) -> Option<&[SnapshotEntry]> {
        self.snapshots.get(&desktop).map(Vec::as_slice)
    }
}
