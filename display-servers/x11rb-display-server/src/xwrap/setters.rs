use x11rb::protocol::xproto::{self, PropMode};
use xtile_core::models::Rect;

use crate::error::Result;

use super::XWrap;

/// `_NET_WM_STATE` action removing a state.
const NET_WM_STATE_REMOVE: u32 = 0;
/// Source indication of requests sent by a pager or similar tool.
const SOURCE_PAGER: u32 = 2;
/// `_NET_MOVERESIZE_WINDOW` flags: `NorthWest` gravity, x, y, width and height present.
const MOVERESIZE_FLAGS: u32 = 1 | (0b1111 << 8) | (SOURCE_PAGER << 12);
/// `_MOTIF_WM_HINTS` flag telling the decorations field is set.
const MWM_HINTS_DECORATIONS: u32 = 1 << 1;

impl XWrap {
    // Public functions.

    /// Replaces a window property.
    pub fn replace_property_u32(
        &self,
        window: xproto::Window,
        property: xproto::Atom,
        r#type: xproto::Atom,
        data: &[u32],
    ) -> Result<()> {
        let modified_data: Vec<u8> = data.iter().flat_map(|data| data.to_ne_bytes()).collect();
        xproto::change_property(
            &self.conn,
            PropMode::REPLACE,
            window,
            property,
            r#type,
            32,
            data.len() as u32,
            modified_data.as_slice(),
        )?;
        Ok(())
    }

    /// Asks the window manager to act on a client, the way pagers do.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_client_message(
        &self,
        window: xproto::Window,
        r#type: xproto::Atom,
        data: [u32; 5],
    ) -> Result<()> {
        let event = xproto::ClientMessageEvent::new(32, window, r#type, data);
        xproto::send_event(
            &self.conn,
            false,
            self.root,
            xproto::EventMask::SUBSTRUCTURE_REDIRECT | xproto::EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?;
        Ok(())
    }

    /// Drops the maximized states, the window manager would ignore a new geometry otherwise.
    pub fn unmaximize(&self, window: xproto::Window) -> Result<()> {
        self.send_client_message(
            window,
            self.atoms.NetWMState,
            [
                NET_WM_STATE_REMOVE,
                self.atoms.NetWMStateMaximizedVert,
                self.atoms.NetWMStateMaximizedHorz,
                SOURCE_PAGER,
                0,
            ],
        )
    }

    /// Moves and resizes a client so that its outer frame covers `rect`.
    pub fn move_resize_window(&self, window: xproto::Window, rect: Rect) -> Result<()> {
        let extents = self.get_frame_extents(window)?;
        let width = (rect.w - (extents.left + extents.right) as i32).max(1);
        let height = (rect.h - (extents.top + extents.bottom) as i32).max(1);
        self.unmaximize(window)?;
        self.send_client_message(
            window,
            self.atoms.NetMoveResizeWindow,
            [
                MOVERESIZE_FLAGS,
                rect.x as u32,
                rect.y as u32,
                width as u32,
                height as u32,
            ],
        )
    }

    /// Shows or hides the window manager decorations through `_MOTIF_WM_HINTS`.
    pub fn set_decorated(&self, window: xproto::Window, decorated: bool) -> Result<()> {
        let hints = [MWM_HINTS_DECORATIONS, 0, u32::from(decorated), 0, 0];
        self.replace_property_u32(
            window,
            self.atoms.MotifWMHints,
            self.atoms.MotifWMHints,
            &hints,
        )
    }

    /// Raises and focuses a client through `_NET_ACTIVE_WINDOW`.
    pub fn activate_window(&self, window: xproto::Window) -> Result<()> {
        self.send_client_message(
            window,
            self.atoms.NetActiveWindow,
            [SOURCE_PAGER, x11rb::CURRENT_TIME, 0, 0, 0],
        )
    }

    /// Moves the cursor to the center of `rect`.
    // `XWarpPointer`: https://tronche.com/gui/x/xlib/input/XWarpPointer.html
    pub fn move_cursor_to(&self, rect: Rect) -> Result<()> {
        let (x, y) = rect.center();
        xproto::warp_pointer(
            &self.conn,
            x11rb::NONE,
            self.root,
            0,
            0,
            0,
            0,
            x as i16,
            y as i16,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moveresize_flags_use_northwest_gravity_and_all_fields() {
        assert_eq!(MOVERESIZE_FLAGS, 0x2F01);
    }
}
