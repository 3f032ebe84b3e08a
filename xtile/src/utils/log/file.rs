use std::path::PathBuf;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "xtile.log";

fn log_dir() -> std::io::Result<PathBuf> {
    let dir = BaseDirectories::with_prefix("xtile")
        .map_err(std::io::Error::other)?
        .get_cache_home();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Non-blocking writer rolling daily under `$XDG_CACHE_HOME/xtile/`.
pub fn writer() -> std::io::Result<(NonBlocking, WorkerGuard)> {
    let appender = tracing_appender::rolling::daily(log_dir()?, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
