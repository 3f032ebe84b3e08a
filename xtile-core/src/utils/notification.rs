//! Desktop notifications through `notify-send`.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub summary: String,
    pub message: String,
    pub icon: Option<String>,
    pub duration_ms: u32,
}

impl Notification {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["-t".to_owned(), self.duration_ms.to_string()];
        if let Some(icon) = &self.icon {
            args.push(format!("--icon={icon}"));
        }
        args.push(self.summary.clone());
        args.push(self.message.clone());
        args
    }

    /// Fire and forget; a missing `notify-send` is only logged.
    pub fn send(&self) {
        let spawned = tokio::process::Command::new("notify-send")
            .args(self.args())
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();
        if let Err(err) = spawned {
            tracing::debug!("Unable to send notification: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_follow_notify_send_order() {
        let notification = Notification {
            summary: "xtile".to_owned(),
            message: "Tiling: on".to_owned(),
            icon: Some("/usr/share/icons/tile.png".to_owned()),
            duration_ms: 2000,
        };
        assert_eq!(
            notification.args(),
            vec![
                "-t",
                "2000",
                "--icon=/usr/share/icons/tile.png",
                "xtile",
                "Tiling: on"
            ]
        );
    }

    #[test]
    fn icon_is_optional() {
        let notification = Notification {
            summary: "xtile".to_owned(),
            message: "exit".to_owned(),
            icon: None,
            duration_ms: 500,
        };
        assert_eq!(notification.args(), vec!["-t", "500", "xtile", "exit"]);
    }
}
