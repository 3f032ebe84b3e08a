use x11rb::protocol::{xproto, Event};
use xtile_core::{models::WindowHandle, DisplayEvent};

use crate::error::Result;
use crate::xwrap::XWrap;

mod client_message;
mod property_notify;

pub(crate) use property_notify::{sync_client_list, work_area_change};

/// Translate events from x11rb to xtile's `DisplayEvent`s.
///
/// Errors about windows that vanished in between are logged and dropped, a broken connection is
/// returned.
pub(crate) fn translate(event: Event, xw: &mut XWrap) -> Result<Vec<DisplayEvent>> {
    let res = match &event {
        Event::PropertyNotify(e) => property_notify::from_event(*e, xw),
        Event::ClientMessage(e) => client_message::from_event(e, xw),
        Event::ConfigureNotify(e) => from_configure_notify(*e, xw),
        Event::DestroyNotify(e) => Ok(from_destroy_notify(*e, xw)),
        Event::KeyPress(e) => Ok(from_key_press(*e, xw)),
        _ => return Ok(vec![]),
    };
    match res {
        Ok(events) => Ok(events),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            if e.is_bad_window() {
                tracing::debug!("Window vanished while processing {:?}", event);
            } else {
                tracing::error!(
                    "An error occured when processing the event {:?}: {}",
                    event,
                    e
                );
            }
            Ok(vec![])
        }
    }
}

fn from_configure_notify(
    event: xproto::ConfigureNotifyEvent,
    xw: &XWrap,
) -> Result<Vec<DisplayEvent>> {
    if !xw.clients.contains(&event.window) {
        return Ok(vec![]);
    }
    let geometry = xw.get_frame_geometry(event.window)?;
    Ok(vec![DisplayEvent::GeometryChange(
        WindowHandle(event.window),
        geometry,
    )])
}

fn from_destroy_notify(event: xproto::DestroyNotifyEvent, xw: &mut XWrap) -> Vec<DisplayEvent> {
    if xw.teardown_window(event.window) {
        return vec![DisplayEvent::WindowDestroy(WindowHandle(event.window))];
    }
    vec![]
}

fn from_key_press(event: xproto::KeyPressEvent, xw: &XWrap) -> Vec<DisplayEvent> {
    match xw.command_for_key(event.detail, u16::from(event.state)) {
        Some(command) => {
            tracing::debug!("Hotkey {} pressed: {}", event.detail, command.name());
            vec![DisplayEvent::SendCommand(command)]
        }
        None => vec![],
    }
}
