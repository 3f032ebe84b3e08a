//! x11rb backend for xtile.
//!
//! xtile is not a window manager: every request goes through the running EWMH window manager
//! as client messages, the same way pagers and docks talk to it.

use std::{future::Future, pin::Pin};

use xtile_core::{
    errors::XtileError,
    models::{Rect, WindowHandle},
    Config, DisplayAction, DisplayEvent, DisplayServer,
};

use crate::xwrap::XWrap;
use error::Result;

mod error;
mod event_translate;
mod xatom;
mod xwrap;

pub struct X11rbDisplayServer {
    xw: XWrap,
    initial_events: Vec<DisplayEvent>,
}

impl DisplayServer for X11rbDisplayServer {
    fn new(config: &impl Config) -> xtile_core::errors::Result<Self> {
        let mut xwrap = XWrap::new()?;
        xwrap.init(config)?;

        let mut instance = Self {
            xw: xwrap,
            initial_events: Vec::new(),
        };
        instance.initial_events = instance.initial_events()?;
        // The initial events are handed out on the first wakeup.
        instance.xw.task_notify.notify_one();

        Ok(instance)
    }

    fn get_next_events(&mut self) -> xtile_core::errors::Result<Vec<DisplayEvent>> {
        let mut events = std::mem::take(&mut self.initial_events);

        while let Some(ev) = self.xw.poll_next_event()? {
            events.append(&mut event_translate::translate(ev, &mut self.xw)?);
        }

        Ok(events)
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        let (handle, res) = match act {
            DisplayAction::SetGeometry(h, rect) => (h, from_set_geometry(xw, h, rect)),
            DisplayAction::SetDecorated(h, decorated) => (h, xw.set_decorated(h.0, decorated)),
            DisplayAction::RaiseAndFocus(h) => (h, xw.activate_window(h.0)),
            DisplayAction::MoveMouseOver(h) => (h, from_move_mouse_over(xw, h)),
            DisplayAction::Notify(_) => return None,
        };
        // Replies may have pulled events off the socket.
        xw.task_notify.notify_one();
        match res {
            Ok(()) => None,
            Err(e) if e.is_bad_window() => {
                tracing::debug!("Window {} vanished", handle);
                xw.teardown_window(handle.0);
                Some(DisplayEvent::WindowDestroy(handle))
            }
            Err(e) => {
                tracing::error!(window = %handle, error = %e, "Error when processing a display action.");
                None
            }
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&mut self) {
        if let Err(e) = self.xw.flush() {
            tracing::error!(error = ?e, "Error when flushing the connection.");
        }
    }
}

impl X11rbDisplayServer {
    /// The state at startup: current desktop, work area, every client and the focused window.
    fn initial_events(&mut self) -> Result<Vec<DisplayEvent>> {
        let mut events = vec![DisplayEvent::DesktopChange(self.xw.get_current_desktop()?)];
        events.append(&mut event_translate::work_area_change(&mut self.xw)?);
        events.append(&mut event_translate::sync_client_list(&mut self.xw)?);
        let focused = self.xw.get_active_window()?.map(WindowHandle);
        events.push(DisplayEvent::FocusChange(focused));
        tracing::debug!("{} initial events", events.len());
        Ok(events)
    }
}

// Display actions.
fn from_set_geometry(xw: &XWrap, handle: WindowHandle, rect: Rect) -> Result<()> {
    if rect.w <= 0 || rect.h <= 0 {
        tracing::warn!("{}", XtileError::GeometryRejected(handle));
        return Ok(());
    }
    xw.move_resize_window(handle.0, rect)
}

fn from_move_mouse_over(xw: &XWrap, handle: WindowHandle) -> Result<()> {
    let frame = xw.get_frame_geometry(handle.0)?;
    xw.move_cursor_to(frame)
}
