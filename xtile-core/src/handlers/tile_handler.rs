use super::{Config, DesktopId, Rect, TilerKind};
use crate::errors::{Result, XtileError};
use crate::layouts::{layout, tiling_order};
use crate::state::State;
use std::time::Instant;

impl<C: Config> State<C> {
    /// Arranges the tiled windows of `desktop` with its current tiler, whether or not automatic
    /// tiling is enabled there. Returns whether any geometry was queued.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` when a computed rectangle is unusable. Nothing is queued in that case.
    pub fn tile(&mut self, desktop: DesktopId) -> Result<bool> {
        let mut windows = self.scan(desktop);
        if windows.is_empty() {
            return Ok(false);
        }
        let min_size = self.config.min_size();
        let desktop_state = self.desktop_state(desktop).clone();
        let usable = self.usable_area(desktop, &windows);

        let kind = if windows.len() == 1 && desktop_state.tiler != TilerKind::Maximize {
            if !desktop_state.maximize_when_one_left {
                return Ok(false);
            }
            TilerKind::Maximize
        } else {
            desktop_state.tiler
        };

        tiling_order(kind, &mut windows, self.focused);
        let params = desktop_state.layout_params(min_size);
        let rects = validate(layout(kind, windows.len(), usable, &params), min_size)?;

        tracing::debug!(desktop, tiler = %kind, windows = windows.len(), "tiling");
        let mut changed = false;
        for (window, rect) in windows.iter().zip(rects) {
            if window.geometry != rect {
                self.set_geometry(window.handle, rect);
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Tiles `desktop` if automatic tiling is enabled there, or remembers it while a postponed
    /// pass is pending.
    pub fn tile_if_enabled(&mut self, desktop: DesktopId) -> bool {
        if self.pending_tile.is_some() {
            self.pending_desktops.insert(desktop);
            return false;
        }
        if !self.desktop_state(desktop).tiling_enabled {
            return false;
        }
        self.tile_logged(desktop)
    }

    /// Tiles regardless of the desktop's toggles, logging failures.
    pub fn tile_logged(&mut self, desktop: DesktopId) -> bool {
        match self.tile(desktop) {
            Ok(changed) => changed,
            Err(err) => {
                tracing::error!("Tiling desktop {} aborted: {}", desktop, err);
                false
            }
        }
    }

    /// The usable area of `desktop` as its windows stand right now.
    pub fn current_usable_area(&mut self, desktop: DesktopId) -> Rect {
        let tiled = self.scan(desktop);
        self.usable_area(desktop, &tiled)
    }

    /// Re-tiles `desktop` if untiled windows docked at its edges changed the usable area since
    /// `before` was taken.
    pub fn retile_if_area_changed(&mut self, desktop: DesktopId, before: Rect) -> bool {
        let after = self.current_usable_area(desktop);
        if after == before {
            return false;
        }
        tracing::debug!(desktop, ?before, ?after, "usable area changed");
        self.tile_if_enabled(desktop)
    }

    /// (Re)starts the launch delay; `desktop` is tiled once it expires.
    pub fn postpone_tiling(&mut self, desktop: DesktopId) {
        self.pending_tile = Some(Instant::now() + self.config.delay_time_tiling());
        self.pending_desktops.insert(desktop);
    }

    /// Tiles every desktop recorded while the launch delay was running.
    pub fn run_pending_tiling(&mut self) -> bool {
        self.pending_tile = None;
        let desktops = std::mem::take(&mut self.pending_desktops);
        let mut changed = false;
        for desktop in desktops {
            changed |= self.tile_if_enabled(desktop);
        }
        changed
    }
}

/// Refuses a layout holding a rectangle smaller than `min_size`.
fn validate(rects: Vec<Rect>, min_size: i32) -> Result<Vec<Rect>> {
    match rects.iter().find(|r| !r.fits(min_size.max(1))) {
        Some(bad) => Err(XtileError::InvalidGeometry(*bad)),
        None => Ok(rects),
    }
}
