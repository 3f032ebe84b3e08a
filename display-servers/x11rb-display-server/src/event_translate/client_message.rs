use x11rb::protocol::xproto;
use xtile_core::{Command, DisplayEvent};

use crate::xwrap::XWrap;

use crate::error::Result;

/// Remote control requests arrive as a `_XTILE_REMOTE` message on the root window carrying the
/// command id in its first field.
pub(crate) fn from_event(
    event: &xproto::ClientMessageEvent,
    xw: &XWrap,
) -> Result<Vec<DisplayEvent>> {
    if event.window != xw.get_default_root() || event.type_ != xw.atoms.XtileRemote {
        return Ok(vec![]);
    }
    let id = event.data.as_data32()[0];
    match Command::from_id(id) {
        Some(command) => {
            tracing::debug!("Remote command {}: {}", id, command.name());
            Ok(vec![DisplayEvent::SendCommand(command)])
        }
        None => {
            tracing::warn!("Ignoring unknown remote command id {}", id);
            Ok(vec![])
        }
    }
}
