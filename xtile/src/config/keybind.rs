use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use xtile_core::Command;

/// A hotkey grabbed on the root window.
///
/// `command` is either the name of a command or its numeric id, see `xtile-command --list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: String,
    /// Defaults to the global `modkey`.
    #[serde(default)]
    pub modifier: Option<Modifier>,
    /// Hardware keycode.
    pub key: u8,
}

impl Keybind {
    pub fn new(command: Command, key: u8) -> Self {
        Self {
            command: command.name().to_owned(),
            modifier: None,
            key,
        }
    }

    /// Resolves the command and replaces `modkey` with the configured modifiers.
    ///
    /// # Errors
    ///
    /// Errors if the command is unknown or the key is not a valid keycode.
    pub fn to_core(&self, modkey: &Modifier) -> Result<xtile_core::config::Keybind> {
        ensure!(self.key >= 8, "keycode {} is below the valid range", self.key);
        let command: Command = self.command.parse()?;
        let modifier = self
            .modifier
            .as_ref()
            .unwrap_or(modkey)
            .into_iter()
            .flat_map(|m| {
                if m == "modkey" {
                    modkey.into_iter().collect()
                } else {
                    vec![m]
                }
            })
            .collect();
        Ok(xtile_core::config::Keybind {
            modifier,
            key: self.key,
            command,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
