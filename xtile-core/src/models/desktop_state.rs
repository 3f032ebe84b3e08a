use super::{DesktopId, TilerKind};
use crate::config::Config;
use crate::layouts::LayoutParams;

/// Tiling configuration of a single desktop.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub id: DesktopId,
    pub tiler: TilerKind,
    pub tiling_enabled: bool,
    pub resize_sync_enabled: bool,
    pub decoration_enabled: bool,
    pub maximize_when_one_left: bool,
    pub max_windows: usize,
    pub master_fraction: f32,
}

impl DesktopState {
    pub fn new(id: DesktopId, config: &impl Config) -> Self {
        let defaults = config.desktop_defaults(id);
        let mut state = Self {
            id,
            tiler: defaults.tiler,
            tiling_enabled: defaults.tiling,
            resize_sync_enabled: defaults.resize_sync,
            decoration_enabled: defaults.decoration,
            maximize_when_one_left: defaults.maximize_when_one_left,
            max_windows: 1,
            master_fraction: 0.5,
        };
        state.load_tiler_params(config);
        state
    }

    /// Selects a tiler and reloads its configured parameters.
    pub fn set_tiler(&mut self, tiler: TilerKind, config: &impl Config) {
        self.tiler = tiler;
        self.load_tiler_params(config);
    }

    pub fn cycle_tiler(&mut self, config: &impl Config) -> TilerKind {
        self.set_tiler(self.tiler.next(), config);
        self.tiler
    }

    fn load_tiler_params(&mut self, config: &impl Config) {
        let params = config.tiler_defaults(self.tiler);
        self.max_windows = params.max_windows.max(1);
        self.master_fraction = params.master_fraction;
    }

    pub fn toggle_tiling(&mut self) -> bool {
        self.tiling_enabled = !self.tiling_enabled;
        self.tiling_enabled
    }

    pub fn toggle_resize_sync(&mut self) -> bool {
        self.resize_sync_enabled = !self.resize_sync_enabled;
        self.resize_sync_enabled
    }

    pub fn toggle_decoration(&mut self) -> bool {
        self.decoration_enabled = !self.decoration_enabled;
        self.decoration_enabled
    }

    pub fn toggle_maximize_when_one_left(&mut self) -> bool {
        self.maximize_when_one_left = !self.maximize_when_one_left;
        self.maximize_when_one_left
    }

    /// Returns whether the value changed; it never drops below one.
    pub fn change_max_windows(&mut self, delta: isize) -> bool {
        let wanted = self.max_windows.saturating_add_signed(delta).max(1);
        let changed = wanted != self.max_windows;
        self.max_windows = wanted;
        changed
    }

    /// Moves the master boundary by `delta` pixels of an `extent` wide area, keeping both
    /// regions at least `min_size`. Returns whether the fraction changed.
    pub fn change_master_fraction(&mut self, delta: i32, extent: i32, min_size: i32) -> bool {
        if !self.tiler.is_master() || extent <= 0 {
            return false;
        }
        let wanted = self.master_fraction + delta as f32 / extent as f32;
        self.set_master_fraction(wanted, extent, min_size)
    }

    /// Records a master size chosen by the user dragging its inner edge.
    pub fn set_master_extent(&mut self, master: i32, extent: i32, min_size: i32) -> bool {
        if !self.tiler.is_master() || extent <= 0 {
            return false;
        }
        self.set_master_fraction(master as f32 / extent as f32, extent, min_size)
    }

    fn set_master_fraction(&mut self, wanted: f32, extent: i32, min_size: i32) -> bool {
        if extent < 2 * min_size {
            return false;
        }
        let low = min_size as f32 / extent as f32;
        let high = 1.0 - low;
        let fraction = wanted.clamp(low, high);
        if (fraction - self.master_fraction).abs() <= f32::EPSILON {
            return false;
        }
        self.master_fraction = fraction;
        true
    }

    pub fn layout_params(&self, min_size: i32) -> LayoutParams {
        LayoutParams {
            max_windows: self.max_windows,
            master_fraction: self.master_fraction,
            min_size,
        }
    }
}
