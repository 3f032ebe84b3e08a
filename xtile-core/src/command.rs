use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::XtileError;
use crate::models::TilerKind;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Everything that can be asked of the engine by hotkey, client message or command pipe.
///
/// Every command has a stable numeric id; see [`Command::from_id`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleResize,
    ToggleTiling,
    ToggleResizeAndTiling,
    ToggleMaximizeWhenOneWindowLeft,
    ToggleDecoration,
    CycleWindows,
    CycleTiler,
    SwapWindows,
    StoreCurrentWindowsLayout,
    RecreateWindowsLayout,
    SetTiler(TilerKind),
    IncreaseMaxNumWindows,
    DecreaseMaxNumWindows,
    Exit,
    LogActiveWindow,
    ShrinkMaster,
    EnlargeMaster,
    FocusDirection(Direction),
    FocusPrevious,
}

impl Command {
    pub const MAX_ID: u32 = 25;

    pub const fn from_id(id: u32) -> Option<Self> {
        let command = match id {
            0 => Self::ToggleResize,
            1 => Self::ToggleTiling,
            2 => Self::ToggleResizeAndTiling,
            3 => Self::ToggleMaximizeWhenOneWindowLeft,
            4 => Self::ToggleDecoration,
            5 => Self::CycleWindows,
            6 => Self::CycleTiler,
            7 => Self::SwapWindows,
            8 => Self::StoreCurrentWindowsLayout,
            9 => Self::RecreateWindowsLayout,
            10 => Self::SetTiler(TilerKind::MasterStackVertical),
            11 => Self::SetTiler(TilerKind::StackVertical),
            12 => Self::SetTiler(TilerKind::MasterStackHorizontal),
            13 => Self::SetTiler(TilerKind::StackHorizontal),
            14 => Self::SetTiler(TilerKind::Maximize),
            15 => Self::IncreaseMaxNumWindows,
            16 => Self::DecreaseMaxNumWindows,
            17 => Self::Exit,
            18 => Self::LogActiveWindow,
            19 => Self::ShrinkMaster,
            20 => Self::EnlargeMaster,
            21 => Self::FocusDirection(Direction::Left),
            22 => Self::FocusDirection(Direction::Right),
            23 => Self::FocusDirection(Direction::Up),
            24 => Self::FocusDirection(Direction::Down),
            25 => Self::FocusPrevious,
            _ => return None,
        };
        Some(command)
    }

    pub const fn id(self) -> u32 {
        match self {
            Self::ToggleResize => 0,
            Self::ToggleTiling => 1,
            Self::ToggleResizeAndTiling => 2,
            Self::ToggleMaximizeWhenOneWindowLeft => 3,
            Self::ToggleDecoration => 4,
            Self::CycleWindows => 5,
            Self::CycleTiler => 6,
            Self::SwapWindows => 7,
            Self::StoreCurrentWindowsLayout => 8,
            Self::RecreateWindowsLayout => 9,
            Self::SetTiler(kind) => 9 + kind.number() as u32,
            Self::IncreaseMaxNumWindows => 15,
            Self::DecreaseMaxNumWindows => 16,
            Self::Exit => 17,
            Self::LogActiveWindow => 18,
            Self::ShrinkMaster => 19,
            Self::EnlargeMaster => 20,
            Self::FocusDirection(Direction::Left) => 21,
            Self::FocusDirection(Direction::Right) => 22,
            Self::FocusDirection(Direction::Up) => 23,
            Self::FocusDirection(Direction::Down) => 24,
            Self::FocusPrevious => 25,
        }
    }

    /// The name accepted on the command pipe and in keybinds.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToggleResize => "ToggleResize",
            Self::ToggleTiling => "ToggleTiling",
            Self::ToggleResizeAndTiling => "ToggleResizeAndTiling",
            Self::ToggleMaximizeWhenOneWindowLeft => "ToggleMaximizeWhenOneWindowLeft",
            Self::ToggleDecoration => "ToggleDecoration",
            Self::CycleWindows => "CycleWindows",
            Self::CycleTiler => "CycleTiler",
            Self::SwapWindows => "SwapWindows",
            Self::StoreCurrentWindowsLayout => "StoreCurrentWindowsLayout",
            Self::RecreateWindowsLayout => "RecreateWindowsLayout",
            Self::SetTiler(TilerKind::MasterStackVertical) => "TileMasterAndStackVertically",
            Self::SetTiler(TilerKind::StackVertical) => "TileVertically",
            Self::SetTiler(TilerKind::MasterStackHorizontal) => "TileMasterAndStackHorizontally",
            Self::SetTiler(TilerKind::StackHorizontal) => "TileHorizontally",
            Self::SetTiler(TilerKind::Maximize) => "TileMaximize",
            Self::IncreaseMaxNumWindows => "IncreaseMaxNumWindows",
            Self::DecreaseMaxNumWindows => "DecreaseMaxNumWindows",
            Self::Exit => "Exit",
            Self::LogActiveWindow => "LogActiveWindow",
            Self::ShrinkMaster => "ShrinkMaster",
            Self::EnlargeMaster => "EnlargeMaster",
            Self::FocusDirection(Direction::Left) => "FocusLeft",
            Self::FocusDirection(Direction::Right) => "FocusRight",
            Self::FocusDirection(Direction::Up) => "FocusUp",
            Self::FocusDirection(Direction::Down) => "FocusDown",
            Self::FocusPrevious => "FocusPrevious",
        }
    }

    /// Every command, ordered by id.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX_ID).filter_map(Self::from_id)
    }
}

impl FromStr for Command {
    type Err = XtileError;

    /// Accepts either a numeric id or a name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u32>() {
            return Self::from_id(id).ok_or_else(|| XtileError::UnknownCommand(s.to_owned()));
        }
        Self::all()
            .find(|command| command.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| XtileError::UnknownCommand(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for id in 0..=Command::MAX_ID {
            let command = Command::from_id(id).unwrap();
            assert_eq!(command.id(), id);
        }
        assert_eq!(Command::from_id(26), None);
        assert_eq!(Command::all().count(), 26);
    }

    #[test]
    fn tiler_ids_follow_tiler_numbers() {
        assert_eq!(
            Command::from_id(11),
            Some(Command::SetTiler(TilerKind::StackVertical))
        );
        assert_eq!(Command::SetTiler(TilerKind::Maximize).id(), 14);
    }

    #[test]
    fn parses_names_and_ids() {
        assert_eq!("17".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!(
            "tilehorizontally".parse::<Command>().unwrap(),
            Command::SetTiler(TilerKind::StackHorizontal)
        );
        assert_eq!(
            " FocusUp\n".parse::<Command>().unwrap(),
            Command::FocusDirection(Direction::Up)
        );
        assert!("99".parse::<Command>().is_err());
        assert!("Dance".parse::<Command>().is_err());
    }
}
