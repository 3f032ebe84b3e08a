//! Unexpected failures of the daemon, appended to `$TMPDIR/xtile_crash_<user>.log`.
use std::any::Any;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

#[must_use]
pub fn default_path() -> PathBuf {
    let user = std::env::var("USER").unwrap_or_default();
    std::env::temp_dir().join(format!("xtile_crash_{user}.log"))
}

fn format_entry(now: DateTime<Local>, message: &str) -> String {
    format!("[{}]  {message}", now.format("%x %X"))
}

/// # Errors
///
/// Fails when the file cannot be opened or written.
pub fn append(path: &Path, message: &str) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", format_entry(Local::now(), message))
}

/// Appends `message` to the default crash log. Write failures only reach the regular log.
pub fn record(message: &str) {
    let path = default_path();
    if let Err(err) = append(&path, message) {
        tracing::error!("Couldn't write {}: {}", path.display(), err);
    }
}

/// The text a panic was raised with.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entries_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crash.log");
        append(&path, "event loop error: connection lost").unwrap();
        append(&path, "panicked: index out of bounds").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("]  event loop error: connection lost"));
        assert!(lines[1].ends_with("]  panicked: index out of bounds"));
    }

    #[test]
    fn entry_starts_with_the_time() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 0)
            .single()
            .unwrap();
        let entry = format_entry(now, "boom");
        assert!(entry.starts_with('['));
        assert!(entry.contains("12:30:00"));
        assert!(entry.ends_with("]  boom"));
    }

    #[test]
    fn panic_messages_are_extracted() {
        let payload = std::panic::catch_unwind(|| panic!("static text")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static text");
        let value = 7;
        let payload = std::panic::catch_unwind(|| panic!("formatted {value}")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 7");
    }
}
