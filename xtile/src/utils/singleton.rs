//! Makes sure only one daemon runs per user session.
use std::io;
use std::os::linux::net::SocketAddrExt;
use std::os::unix::net::{SocketAddr, UnixListener};

const LOCK_NAME: &[u8] = b"xtile_lock";

/// Held for the lifetime of the daemon. The kernel drops the abstract socket name when the
/// process exits, so a crashed daemon never leaves a stale lock behind.
#[derive(Debug)]
pub struct InstanceLock {
    _listener: UnixListener,
}

impl InstanceLock {
    /// # Errors
    ///
    /// `AddrInUse` when another instance holds the lock.
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_named(LOCK_NAME)
    }

    fn acquire_named(name: &[u8]) -> io::Result<Self> {
        let addr = SocketAddr::from_abstract_name(name)?;
        let listener = UnixListener::bind_addr(&addr)?;
        Ok(Self {
            _listener: listener,
        })
    }
}
