use super::{Config, DisplayEvent, Manager};
use crate::display_servers::DisplayServer;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be flushed.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::WindowCreate(window) => self.window_created_handler(window),
            DisplayEvent::WindowChange(window) => self.window_changed_handler(window),
            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(handle),
            DisplayEvent::GeometryChange(handle, geometry) => {
                self.geometry_change_handler(handle, geometry)
            }
            DisplayEvent::FocusChange(handle) => self.focus_change_handler(handle),

            // Switching desktops only changes which state commands apply to.
            DisplayEvent::DesktopChange(desktop) => {
                if self.state.active_desktop == desktop {
                    return false;
                }
                tracing::debug!(desktop, "active desktop changed");
                self.state.active_desktop = desktop;
                self.state.desktop_state(desktop);
                false
            }

            DisplayEvent::WorkAreaChange(work_area) => {
                if self.state.work_area == work_area {
                    return false;
                }
                tracing::debug!(?work_area, "work area changed");
                self.state.work_area = work_area;
                let desktops: Vec<_> = self.state.desktops.keys().copied().collect();
                let mut changed = false;
                for desktop in desktops {
                    changed |= self.state.tile_if_enabled(desktop);
                }
                changed
            }

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
