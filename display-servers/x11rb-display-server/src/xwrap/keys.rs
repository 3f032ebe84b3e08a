//! Hotkeys grabbed on the root window.
use x11rb::protocol::xproto;
use xtile_core::{config::Keybind, Command};

/// Lock modifiers that must not prevent a hotkey from firing.
const IGNORED: u16 = (1 << 1) | (1 << 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyGrab {
    pub keycode: xproto::Keycode,
    pub modifiers: u16,
    pub command: Command,
}

impl KeyGrab {
    pub fn new(keybind: &Keybind) -> Self {
        Self {
            keycode: keybind.key,
            modifiers: into_modmask(&keybind.modifier),
            command: keybind.command,
        }
    }

    /// The modifier combinations to grab, so that `CapsLock` and `NumLock` are ignored.
    pub fn variants(&self) -> Vec<xproto::ModMask> {
        if self.modifiers == u16::from(xproto::ModMask::ANY) {
            return vec![xproto::ModMask::ANY];
        }
        let lock = u16::from(xproto::ModMask::LOCK);
        let num_lock = u16::from(xproto::ModMask::M2);
        [0, lock, num_lock, lock | num_lock]
            .into_iter()
            .map(|extra| xproto::ModMask::from(self.modifiers | extra))
            .collect()
    }

    pub fn matches(&self, keycode: xproto::Keycode, state: u16) -> bool {
        if keycode != self.keycode {
            return false;
        }
        self.modifiers == u16::from(xproto::ModMask::ANY) || state & !IGNORED == self.modifiers
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> u16 {
    keys.iter().fold(0, |mask, key| mask | into_mod(key))
}

#[must_use]
pub fn into_mod(key: &str) -> u16 {
    let mask = match key {
        "Any" => xproto::ModMask::ANY,
        "Shift" => xproto::ModMask::SHIFT,
        "Control" => xproto::ModMask::CONTROL,
        "Mod1" | "Alt" => xproto::ModMask::M1,
        // NumLock (Mod2) is ignored when matching.
        "Mod3" => xproto::ModMask::M3,
        "Mod4" | "Super" => xproto::ModMask::M4,
        "Mod5" => xproto::ModMask::M5,
        _ => {
            tracing::warn!("Unknown modifier {key}");
            return 0;
        }
    };
    u16::from(mask)
}
