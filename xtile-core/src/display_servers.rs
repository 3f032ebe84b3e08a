#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The connection to the windowing system.
pub trait DisplayServer: Sized {
    /// Connects, grabs the configured keys and queues the initial state as events: current
    /// desktop, work area, every existing client and the focused window.
    ///
    /// # Errors
    ///
    /// `CollaboratorUnavailable` when the display cannot be reached.
    fn new(config: &impl Config) -> Result<Self>;

    /// # Errors
    ///
    /// `CollaboratorUnavailable` once the connection is lost.
    fn get_next_events(&mut self) -> Result<Vec<DisplayEvent>>;

    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&mut self);
}
