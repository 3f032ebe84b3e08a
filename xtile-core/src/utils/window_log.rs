//! Appends the active window's identity to a log file, to help writing ignore rules.
use std::io::Write;
use std::path::Path;

use crate::errors::Result;

/// One line: `[date time]  name: N,  title: T`.
pub fn format_entry(now: chrono::DateTime<chrono::Local>, name: &str, title: &str) -> String {
    format!("[{}]  name: {name},  title: {title}", now.format("%x %X"))
}

/// # Errors
///
/// Fails when the log file cannot be opened or written.
pub fn append(path: &Path, name: &str, title: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", format_entry(chrono::Local::now(), name, title))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_layout() {
        let now = chrono::Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .unwrap();
        assert_eq!(
            format_entry(now, "firefox", "Mozilla Firefox"),
            "[03/09/24 14:05:07]  name: firefox,  title: Mozilla Firefox"
        );
    }

    #[test]
    fn entries_are_appended() {
        let file = tempfile::NamedTempFile::new().unwrap();
        append(file.path(), "a", "first").unwrap();
        append(file.path(), "b", "second").unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("name: a,  title: first"));
        assert!(lines[1].ends_with("name: b,  title: second"));
    }
}
