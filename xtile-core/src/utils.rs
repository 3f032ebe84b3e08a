//! Runtime plumbing shared by the engine and the binaries.
pub mod command_pipe;
pub mod helpers;
pub mod notification;
pub mod window_log;
