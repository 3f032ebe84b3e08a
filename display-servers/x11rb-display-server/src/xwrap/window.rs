//! Clients as seen by the engine.
use x11rb::protocol::xproto;
use xtile_core::{models::WindowHandle, Window};

use crate::error::Result;

use super::XWrap;

impl XWrap {
    /// Reads everything the engine tracks about a client.
    pub fn get_window(&self, window: xproto::Window) -> Result<Window> {
        let states = self.get_window_states_atoms(window)?;
        let mut w = Window::new(
            WindowHandle(window),
            self.get_window_class(window)?,
            self.get_window_desktop(window)?,
        );
        w.title = self.get_window_name(window)?;
        w.geometry = self.get_frame_geometry(window)?;
        w.decorated = self.get_decorated(window)?;
        w.csd = self.get_csd(window)?;
        w.hidden = states.contains(&self.atoms.NetWMStateHidden);
        w.modal = states.contains(&self.atoms.NetWMStateModal);
        Ok(w)
    }

    /// Starts tracking a client listed by the window manager.
    pub fn setup_window(&mut self, window: xproto::Window) -> Result<Window> {
        self.subscribe_to_window_events(window)?;
        let w = self.get_window(window)?;
        self.clients.insert(window);
        tracing::debug!("Tracking {} ({})", w.handle, w.name);
        Ok(w)
    }

    /// Stops tracking a client, returns whether it was tracked.
    pub fn teardown_window(&mut self, window: xproto::Window) -> bool {
        self.clients.remove(&window)
    }
}
