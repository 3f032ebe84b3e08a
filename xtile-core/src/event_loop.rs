use crate::config::{Config, NotificationEvent};
use crate::errors::Result;
use crate::utils::helpers::runtime_file;
use crate::{CommandPipe, DisplayAction, DisplayEvent, DisplayServer, Manager};
use std::time::Instant;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Runs until an `Exit` command arrives.
    ///
    /// # Errors
    ///
    /// Fails when the command pipe cannot be created or the display connection is lost.
    pub async fn start_event_loop(mut self) -> Result<()> {
        let file_name = CommandPipe::pipe_name();
        let pipe_file = runtime_file(&file_name)?;
        let mut command_pipe = CommandPipe::new(pipe_file).await?;

        self.state.notify(NotificationEvent::Start);

        //main event loop
        let mut event_buffer = vec![];
        loop {
            self.execute_actions(&mut event_buffer);
            if self.state.exit_requested {
                self.display_server.flush();
                break;
            }
            self.display_server.flush();

            let pending_tile = self.state.pending_tile;
            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events()?);
                    continue;
                }
                () = deadline(pending_tile), if pending_tile.is_some() && event_buffer.is_empty() => {
                    self.state.run_pending_tiling();
                }
                Some(cmd) = command_pipe.read_command(), if event_buffer.is_empty() => {
                    self.command_handler(&cmd);
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                    }
                }
            }
        }
        tracing::info!("Exiting event loop");
        Ok(())
    }

    /// Drains the action queue. Notifications are sent from here, everything else goes to the
    /// display server; events it reports back are handled on the next turn.
    fn execute_actions(&mut self, event_buffer: &mut Vec<DisplayEvent>) {
        while let Some(act) = self.state.actions.pop_front() {
            match act {
                DisplayAction::Notify(notification) => notification.send(),
                act => {
                    if let Some(event) = self.display_server.execute_action(act) {
                        event_buffer.push(event);
                    }
                }
            }
        }
    }
}

async fn deadline(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => futures::future::pending().await,
    }
}
