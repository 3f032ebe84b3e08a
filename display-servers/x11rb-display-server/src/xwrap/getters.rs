use x11rb::{
    properties::WmClass,
    protocol::xproto::{self, ConnectionExt as _},
};
use xtile_core::models::{DesktopId, Rect, STICKY_DESKTOP};

use crate::error::Result;

use super::{XWrap, MAX_PROPERTY_VALUE_LEN};

/// Left, right, top and bottom border widths added by the window manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameExtents {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl FrameExtents {
    fn from_values(values: &[u32]) -> Self {
        match values {
            [left, right, top, bottom, ..] => Self {
                left: *left,
                right: *right,
                top: *top,
                bottom: *bottom,
            },
            _ => Self::default(),
        }
    }
}

/// `_NET_WM_DESKTOP`/`_NET_CURRENT_DESKTOP` index to desktop id.
pub fn desktop_from_index(index: u32) -> DesktopId {
    if index == u32::MAX {
        STICKY_DESKTOP
    } else {
        index as usize + 1
    }
}

impl XWrap {
    // Public functions.

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xproto::Window {
        self.root
    }

    /// Returns the clients listed by the window manager in `_NET_CLIENT_LIST`.
    pub fn get_client_list(&self) -> Result<Vec<xproto::Window>> {
        self.get_property(
            self.root,
            self.atoms.NetClientList,
            xproto::AtomEnum::WINDOW.into(),
        )
    }

    /// Returns the window in `_NET_ACTIVE_WINDOW`, `None` when nothing has focus.
    pub fn get_active_window(&self) -> Result<Option<xproto::Window>> {
        let prop = self.get_property(
            self.root,
            self.atoms.NetActiveWindow,
            xproto::AtomEnum::WINDOW.into(),
        )?;
        Ok(prop.first().copied().filter(|w| *w != x11rb::NONE))
    }

    pub fn get_current_desktop(&self) -> Result<DesktopId> {
        let prop = self.get_property(
            self.root,
            self.atoms.NetCurrentDesktop,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        Ok(prop.first().map_or(1, |index| desktop_from_index(*index)))
    }

    /// Returns the work area of the current desktop, the whole root window when the window
    /// manager does not publish `_NET_WORKAREA`.
    pub fn get_work_area(&self) -> Result<Rect> {
        let prop = self.get_property(
            self.root,
            self.atoms.NetWorkarea,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        let current = self.get_current_desktop()?.saturating_sub(1);
        let area = prop
            .chunks_exact(4)
            .nth(current)
            .or_else(|| prop.chunks_exact(4).next());
        if let Some([x, y, w, h]) = area {
            return Ok(Rect::new(*x as i32, *y as i32, *w as i32, *h as i32));
        }
        let geo = self.conn.get_geometry(self.root)?.reply()?;
        Ok(Rect::new(0, 0, geo.width.into(), geo.height.into()))
    }

    pub fn get_window_desktop(&self, window: xproto::Window) -> Result<DesktopId> {
        let prop = self.get_property(
            window,
            self.atoms.NetWMDesktop,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        Ok(prop.first().map_or(STICKY_DESKTOP, |index| desktop_from_index(*index)))
    }

    /// Returns the class part of `WM_CLASS`.
    // `XGetClassHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetClassHint.html
    pub fn get_window_class(&self, window: xproto::Window) -> Result<String> {
        Ok(WmClass::get(&self.conn, window)?
            .reply()?
            .map(|class| String::from_utf8_lossy(class.class()).into_owned())
            .unwrap_or_else(|| "UNKNOWN".to_owned()))
    }

    /// Returns a windows name.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<String> {
        let name = self.get_text_prop(window, self.atoms.NetWMName)?;
        if !name.is_empty() {
            return Ok(name);
        }
        // fallback to legacy name
        self.get_text_prop(window, xproto::AtomEnum::WM_NAME.into())
    }

    /// Returns the atom states of a window.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    pub fn get_window_states_atoms(&self, window: xproto::Window) -> Result<Vec<xproto::Atom>> {
        self.get_property(window, self.atoms.NetWMState, xproto::AtomEnum::ATOM.into())
    }

    pub fn get_frame_extents(&self, window: xproto::Window) -> Result<FrameExtents> {
        let prop = self.get_property(
            window,
            self.atoms.NetFrameExtents,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        Ok(FrameExtents::from_values(&prop))
    }

    /// Returns the outer geometry of a client, window manager decorations included, in root
    /// coordinates.
    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    pub fn get_frame_geometry(&self, window: xproto::Window) -> Result<Rect> {
        let geo = self.conn.get_geometry(window)?.reply()?;
        let origin = self
            .conn
            .translate_coordinates(window, self.root, 0, 0)?
            .reply()?;
        let extents = self.get_frame_extents(window)?;
        Ok(Rect::new(
            i32::from(origin.dst_x) - extents.left as i32,
            i32::from(origin.dst_y) - extents.top as i32,
            i32::from(geo.width) + (extents.left + extents.right) as i32,
            i32::from(geo.height) + (extents.top + extents.bottom) as i32,
        ))
    }

    /// Whether the window manager draws a title bar and border, per `_MOTIF_WM_HINTS`.
    pub fn get_decorated(&self, window: xproto::Window) -> Result<bool> {
        let prop = self.get_property(window, self.atoms.MotifWMHints, self.atoms.MotifWMHints)?;
        Ok(match prop.as_slice() {
            [flags, _, decorations, ..] if flags & 2 != 0 => *decorations != 0,
            _ => true,
        })
    }

    /// Whether the client draws its own decorations.
    pub fn get_csd(&self, window: xproto::Window) -> Result<bool> {
        let prop = self.get_property(
            window,
            self.atoms.GtkFrameExtents,
            xproto::AtomEnum::CARDINAL.into(),
        )?;
        Ok(!prop.is_empty())
    }

    // Internal functions.

    /// Returns a 32 bit property of a window, empty when it is unset.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property(
        &self,
        window: xproto::Window,
        property: xproto::Atom,
        r#type: xproto::Atom,
    ) -> Result<Vec<u32>> {
        let res = xproto::get_property(
            &self.conn,
            false,
            window,
            property,
            r#type,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        let rt = match res.value32() {
            Some(props) => props.collect(),
            None => vec![],
        };
        Ok(rt)
    }

    /// Returns a text property for a window.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xproto::Window, atom: xproto::Atom) -> Result<String> {
        let prop = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            xproto::AtomEnum::ANY,
            0,
            MAX_PROPERTY_VALUE_LEN,
        )?
        .reply()?;
        Ok(String::from_utf8_lossy(&prop.value).into_owned())
    }
}
