use std::collections::HashSet;

use x11rb::protocol::xproto;
use xtile_core::{models::WindowHandle, DisplayEvent};

use crate::xwrap::XWrap;

use crate::error::Result;

pub(crate) fn from_event(
    event: xproto::PropertyNotifyEvent,
    xw: &mut XWrap,
) -> Result<Vec<DisplayEvent>> {
    if event.window == xw.get_default_root() {
        return from_root_property(event.atom, xw);
    }
    if !xw.clients.contains(&event.window) || !xw.atoms.client_watched().contains(&event.atom) {
        return Ok(vec![]);
    }
    tracing::trace!("PropertyNotify: {} : {:?}", event.window, event.atom);
    Ok(vec![DisplayEvent::WindowChange(xw.get_window(event.window)?)])
}

fn from_root_property(atom: xproto::Atom, xw: &mut XWrap) -> Result<Vec<DisplayEvent>> {
    if atom == xw.atoms.NetClientList {
        return sync_client_list(xw);
    }
    if atom == xw.atoms.NetActiveWindow {
        let focused = xw.get_active_window()?.map(WindowHandle);
        return Ok(vec![DisplayEvent::FocusChange(focused)]);
    }
    if atom == xw.atoms.NetCurrentDesktop {
        let mut events = vec![DisplayEvent::DesktopChange(xw.get_current_desktop()?)];
        events.extend(work_area_change(xw)?);
        return Ok(events);
    }
    if atom == xw.atoms.NetWorkarea {
        return work_area_change(xw);
    }
    Ok(vec![])
}

/// Diffs `_NET_CLIENT_LIST` against the clients seen so far.
pub(crate) fn sync_client_list(xw: &mut XWrap) -> Result<Vec<DisplayEvent>> {
    let listed = xw.get_client_list()?;
    let listed_set: HashSet<xproto::Window> = listed.iter().copied().collect();
    let mut events = vec![];

    let mut gone: Vec<xproto::Window> = xw
        .clients
        .iter()
        .filter(|w| !listed_set.contains(*w))
        .copied()
        .collect();
    gone.sort_unstable();
    for window in gone {
        xw.teardown_window(window);
        events.push(DisplayEvent::WindowDestroy(WindowHandle(window)));
    }

    for window in listed {
        if xw.clients.contains(&window) {
            continue;
        }
        match xw.setup_window(window) {
            Ok(w) => events.push(DisplayEvent::WindowCreate(w)),
            Err(e) if e.is_bad_window() => {
                tracing::debug!("Client {} vanished before setup", window);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(events)
}

/// A `WorkAreaChange` when the usable area differs from the last one reported.
pub(crate) fn work_area_change(xw: &mut XWrap) -> Result<Vec<DisplayEvent>> {
    let area = xw.get_work_area()?;
    if area == xw.work_area {
        return Ok(vec![]);
    }
    xw.work_area = area;
    Ok(vec![DisplayEvent::WorkAreaChange(area)])
}
