use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State<C>,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// Connects to the display server and sets up the initial state.
    ///
    /// # Errors
    ///
    /// Fails with `CollaboratorUnavailable` when the display server cannot be reached.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        Ok(Self {
            state: State::new(config),
            display_server,
        })
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test() -> Self {
        Self::new(crate::config::tests::TestConfig::default()).expect("mock display server")
    }
}
