use tracing::metadata::LevelFilter;
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "file-log")]
pub mod file;

/// Keeps buffered log writers alive, drop it last.
#[derive(Default)]
pub struct LogGuard {
    #[cfg(feature = "file-log")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Level directive for the verbosity given on the command line, `None` keeps the configured one.
#[must_use]
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Builds the filter from `log_level`. An unparsable level falls back to `info` and the error
/// is handed back so it can be logged once the subscriber is installed.
#[must_use]
pub fn parse_log_level(log_level: &str) -> (EnvFilter, Option<ParseError>) {
    let builder = || EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match builder().parse(log_level) {
        Ok(filter) => (filter, None),
        Err(err) => (builder().parse_lossy(""), Some(err)),
    }
}

/// Installs the global subscriber: stderr always, a log file with the `file-log` feature.
pub fn setup_logging(log_level: &str, verbose: u8) -> LogGuard {
    let level = verbosity_directive(verbose).unwrap_or(log_level);
    let (filter, parse_err) = parse_log_level(level);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let (subscriber, guard) = {
        let (layer, guard) = match file::writer() {
            Ok((writer, guard)) => {
                let layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(err) => {
                eprintln!("Couldn't open the log file: {err}");
                (None, None)
            }
        };
        (subscriber.with(layer), LogGuard { _file: guard })
    };
    #[cfg(not(feature = "file-log"))]
    let guard = LogGuard::default();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("A global logger is already installed");
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log_level {level:?}, using info: {err}");
    }
    guard
}
