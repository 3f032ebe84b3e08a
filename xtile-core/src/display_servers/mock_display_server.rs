use super::Config;
use super::DisplayEvent;
use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::WindowHandle;

/// Records every action it is asked to execute.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer {
    pub events: Vec<DisplayEvent>,
    pub executed: Vec<DisplayAction>,
    /// Requests for these windows are refused as if the windows were gone.
    pub vanished: Vec<WindowHandle>,
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self::default())
    }

    fn get_next_events(&mut self) -> Result<Vec<DisplayEvent>> {
        Ok(std::mem::take(&mut self.events))
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        if let Some(handle) = act.window().filter(|h| self.vanished.contains(h)) {
            return Some(DisplayEvent::WindowDestroy(handle));
        }
        self.executed.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::pending())
    }

    fn flush(&mut self) {}
}
