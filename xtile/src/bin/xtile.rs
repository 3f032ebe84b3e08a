use anyhow::{bail, Context, Result};
use clap::{arg, command, value_parser};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use x11rb_display_server::X11rbDisplayServer;
use xtile::utils::{crash_log, singleton::InstanceLock};
use xtile_core::{config::NotificationEvent, Manager};

fn main() -> Result<()> {
    let matches = command!("xtile")
        .about("Auto-tiles windows of EWMH compliant window managers")
        .help_template(xtile::utils::get_help_template())
        .args(&[
            arg!(-v --verbose ... "Raises the log level, twice for trace output."),
            arg!(-c --config <FILE> "Sets the configuration file to use.")
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let config = xtile::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let _log_guard =
        xtile::utils::log::setup_logging(&config.log_level, matches.get_count("verbose"));
    tracing::info!("xtile {} booting...", env!("CARGO_PKG_VERSION"));

    let rt = tokio::runtime::Runtime::new().context("couldn't init the tokio runtime")?;
    let _rt_guard = rt.enter();

    let _lock = match InstanceLock::acquire() {
        Ok(lock) => lock,
        Err(err) => {
            if let Some(notification) = config.notification.build(NotificationEvent::AlreadyRunning)
            {
                notification.send();
            }
            bail!("xtile is already running: {err}");
        }
    };

    let exit_status = panic::catch_unwind(AssertUnwindSafe(|| {
        let manager = Manager::<xtile::Config, X11rbDisplayServer>::new(config)?;
        rt.block_on(manager.start_event_loop())
    }));

    match exit_status {
        Ok(Ok(())) => {
            tracing::info!("Completed");
            Ok(())
        }
        Ok(Err(err)) => {
            tracing::error!("Completed with event loop error: {}", err);
            crash_log::record(&format!("event loop error: {err}"));
            Err(err.into())
        }
        Err(payload) => {
            let message = crash_log::panic_message(payload.as_ref());
            tracing::error!("Completed with panic: {}", message);
            crash_log::record(&format!("panicked: {message}"));
            bail!("xtile panicked: {message}");
        }
    }
}
