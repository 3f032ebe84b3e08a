use thiserror::Error;

use crate::models::{Rect, WindowHandle};

pub type Result<T> = std::result::Result<T, XtileError>;

#[derive(Debug, Error)]
pub enum XtileError {
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),
    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
    #[error("Display server unavailable: {0}")]
    CollaboratorUnavailable(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Geometry rejected for window {0:?}")]
    GeometryRejected(WindowHandle),
    #[error("Computed an invalid geometry: {0:?}")]
    InvalidGeometry(Rect),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
}
