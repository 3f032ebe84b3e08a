use serde::{Deserialize, Serialize};
use std::fmt;

/// The layout algorithms, in cycling order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TilerKind {
    #[default]
    MasterStackVertical,
    MasterStackHorizontal,
    StackHorizontal,
    StackVertical,
    Maximize,
}

impl TilerKind {
    pub const ALL: [Self; 5] = [
        Self::MasterStackVertical,
        Self::MasterStackHorizontal,
        Self::StackHorizontal,
        Self::StackVertical,
        Self::Maximize,
    ];

    /// The next tiler in declaration order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Stable user facing number.
    pub const fn number(self) -> u8 {
        match self {
            Self::MasterStackVertical => 1,
            Self::StackVertical => 2,
            Self::MasterStackHorizontal => 3,
            Self::StackHorizontal => 4,
            Self::Maximize => 5,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::MasterStackVertical),
            2 => Some(Self::StackVertical),
            3 => Some(Self::MasterStackHorizontal),
            4 => Some(Self::StackHorizontal),
            5 => Some(Self::Maximize),
            _ => None,
        }
    }

    pub const fn is_master(self) -> bool {
        matches!(self, Self::MasterStackVertical | Self::MasterStackHorizontal)
    }
}

impl fmt::Display for TilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MasterStackVertical => "master and stack vertically",
            Self::MasterStackHorizontal => "master and stack horizontally",
            Self::StackHorizontal => "stack horizontally",
            Self::StackVertical => "stack vertically",
            Self::Maximize => "maximize",
        };
        f.write_str(name)
    }
}
