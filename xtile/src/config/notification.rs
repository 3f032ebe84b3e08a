use serde::{Deserialize, Serialize};
use xtile_core::{config::NotificationEvent, Notification};

/// Desktop notifications sent through `notify-send`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    pub active: bool,
    pub time_ms: u32,
    pub summary: String,
    /// Icon for every notification, passed as `--icon`.
    pub icon: Option<String>,
    pub on_message: String,
    pub off_message: String,
    pub start_message: String,
    pub exit_message: String,
    pub already_running_message: String,
    pub store_layout_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            active: true,
            time_ms: 2000,
            summary: "xtile".to_owned(),
            icon: None,
            on_message: "on".to_owned(),
            off_message: "off".to_owned(),
            start_message: "started".to_owned(),
            exit_message: "exiting".to_owned(),
            already_running_message: "is already running".to_owned(),
            store_layout_message: "windows layout stored".to_owned(),
        }
    }
}

impl NotificationConfig {
    pub fn build(&self, event: NotificationEvent) -> Option<Notification> {
        if !self.active {
            return None;
        }
        let switch = |on: bool| {
            if on {
                &self.on_message
            } else {
                &self.off_message
            }
        };
        let (summary, message) = match event {
            NotificationEvent::Start => (self.summary.clone(), self.start_message.clone()),
            NotificationEvent::Exit => (self.summary.clone(), self.exit_message.clone()),
            NotificationEvent::AlreadyRunning => {
                (self.summary.clone(), self.already_running_message.clone())
            }
            NotificationEvent::StoreCurrentWindowsLayout => {
                (self.summary.clone(), self.store_layout_message.clone())
            }
            NotificationEvent::Resizing(on) => (format!("{}: resizing", self.summary), switch(on).clone()),
            NotificationEvent::Tiling(on) => (format!("{}: tiling", self.summary), switch(on).clone()),
            NotificationEvent::MaximizeWhenOneWindowLeft(on) => (
                format!("{}: maximize when one window left", self.summary),
                switch(on).clone(),
            ),
            NotificationEvent::Decoration(on) => {
                (format!("{}: decoration", self.summary), switch(on).clone())
            }
        };
        Some(Notification {
            summary,
            message,
            icon: self.icon.clone(),
            duration_ms: self.time_ms,
        })
    }
}
