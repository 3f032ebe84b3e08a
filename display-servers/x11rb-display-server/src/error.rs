//! Error handling and reporting for this backend

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::ErrorKind;
use xtile_core::errors::XtileError;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Unable to reach the X server: {0}")]
    ConnectError(#[from] ConnectError),

    // Errors from x11rb
    #[error("Connection error occured: {0}")]
    ConnectionError(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    ReplyError(#[from] ReplyError),

    #[error("Unable to parse reply: {0}")]
    ReplyOrIdError(#[from] ReplyOrIdError),
}

impl Error {
    /// The request named a window that no longer exists.
    pub fn is_bad_window(&self) -> bool {
        match self {
            Self::ReplyError(ReplyError::X11Error(e))
            | Self::ReplyOrIdError(ReplyOrIdError::X11Error(e)) => {
                matches!(e.error_kind, ErrorKind::Window | ErrorKind::Drawable)
            }
            _ => false,
        }
    }

    /// The connection itself is gone, nothing further can be sent or received.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConnectError(_)
                | Self::ConnectionError(_)
                | Self::ReplyError(ReplyError::ConnectionError(_))
                | Self::ReplyOrIdError(ReplyOrIdError::ConnectionError(_))
        )
    }
}

impl From<Error> for XtileError {
    fn from(err: Error) -> Self {
        XtileError::CollaboratorUnavailable(err.to_string())
    }
}
