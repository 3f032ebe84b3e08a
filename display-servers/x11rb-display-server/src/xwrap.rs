use std::{collections::HashSet, os::fd::AsRawFd, sync::Arc, time::Duration};

use tokio::sync::{oneshot, Notify};
use x11rb::{
    connection::Connection,
    protocol::xproto,
    rust_connection::RustConnection,
    wrapper::ConnectionExt,
};
use xtile_core::{config::Keybind, models::Rect, Command, Config};

use crate::xatom::AtomCollection;

use crate::error::Result;

mod getters;
mod keys;
mod setters;
mod window;

pub(crate) use keys::KeyGrab;

const MAX_PROPERTY_VALUE_LEN: u32 = 4096;

#[inline]
pub fn root_event_mask() -> xproto::EventMask {
    xproto::EventMask::PROPERTY_CHANGE | xproto::EventMask::SUBSTRUCTURE_NOTIFY
}

#[inline]
pub fn client_event_mask() -> xproto::EventMask {
    xproto::EventMask::PROPERTY_CHANGE | xproto::EventMask::STRUCTURE_NOTIFY
}

/// Contains Xserver information and origins.
pub(crate) struct XWrap {
    conn: RustConnection,
    root: xproto::Window,
    pub atoms: AtomCollection,

    /// Clients last seen in `_NET_CLIENT_LIST`.
    pub clients: HashSet<xproto::Window>,
    pub work_area: Rect,
    pub key_grabs: Vec<KeyGrab>,

    _task_guard: oneshot::Receiver<()>,
    pub task_notify: Arc<Notify>,
}

impl XWrap {
    /// Connects to the display named by `$DISPLAY` and starts watching its socket.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Result<Self> {
        const SERVER: mio::Token = mio::Token(0);
        let (conn, display) = x11rb::connect(None)?;

        let fd = conn.stream().as_raw_fd();

        let (guard, _task_guard) = oneshot::channel::<()>();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let mut poll = mio::Poll::new().map_err(x11rb::errors::ConnectionError::IoError)?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry()
            .register(
                &mut mio::unix::SourceFd(&fd),
                SERVER,
                mio::Interest::READABLE,
            )
            .map_err(x11rb::errors::ConnectionError::IoError)?;
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                tracing::info!("x11rb socket closed");
                return;
            }

            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                tracing::warn!("x11rb socket poll failed with {:?}", err);
                continue;
            }

            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = AtomCollection::new(&conn)?.reply()?;
        let root = conn.setup().roots[display].root;

        Ok(Self {
            conn,
            root,
            atoms,

            clients: HashSet::new(),
            work_area: Rect::default(),
            key_grabs: vec![],

            _task_guard,
            task_notify,
        })
    }

    pub fn init(&mut self, config: &impl Config) -> Result<()> {
        self.subscribe_to_event(self.root, root_event_mask())?;
        self.grab_keys(&config.keybinds())?;
        self.sync()?;
        Ok(())
    }

    /// Grabs every configured key combination on the root window.
    pub fn grab_keys(&mut self, keybinds: &[Keybind]) -> Result<()> {
        xproto::ungrab_key(
            &self.conn,
            xproto::Grab::ANY,
            self.root,
            xproto::ModMask::ANY,
        )?;
        self.key_grabs.clear();
        for keybind in keybinds {
            let grab = KeyGrab::new(keybind);
            for modifiers in grab.variants() {
                xproto::grab_key(
                    &self.conn,
                    true,
                    self.root,
                    modifiers,
                    grab.keycode,
                    xproto::GrabMode::ASYNC,
                    xproto::GrabMode::ASYNC,
                )?;
            }
            tracing::debug!("Grabbed key {} for {}", grab.keycode, grab.command.name());
            self.key_grabs.push(grab);
        }
        Ok(())
    }

    /// The command bound to a pressed key, if any.
    pub fn command_for_key(&self, keycode: xproto::Keycode, state: u16) -> Option<Command> {
        self.key_grabs
            .iter()
            .find(|grab| grab.matches(keycode, state))
            .map(|grab| grab.command)
    }

    /// Subscribe to an event of a window.
    pub fn subscribe_to_event(
        &self,
        window: xproto::Window,
        mask: xproto::EventMask,
    ) -> Result<()> {
        let attrs = xproto::ChangeWindowAttributesAux {
            event_mask: Some(mask),
            ..Default::default()
        };
        xproto::change_window_attributes(&self.conn, window, &attrs)?;
        Ok(())
    }

    /// Subscribe to the wanted events of a client.
    pub fn subscribe_to_window_events(&self, window: xproto::Window) -> Result<()> {
        self.subscribe_to_event(window, client_event_mask())
    }

    /// Returns the next queued event without blocking.
    pub fn poll_next_event(&self) -> Result<Option<x11rb::protocol::Event>> {
        Ok(self.conn.poll_for_event()?)
    }

    /// Flush and sync the xserver.
    pub fn sync(&self) -> Result<()> {
        self.conn.sync()?;
        Ok(())
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}
