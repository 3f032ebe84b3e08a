//! Configuration, logging and process plumbing for the `xtile` binaries.
mod config;
pub mod utils;

pub use config::*;
