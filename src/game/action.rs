//! Menu selections
//!
//! A menu selection is a number typed by the player: `1`–`6` pick one of the
//! six transfer [`Action`]s and `0` ends the session.

use thiserror::Error;

/// The six transfer operations, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Reserve,
    UseReserved,
    SwapTopFront,
    Undo,
    InvertAll,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Play,
        Action::Reserve,
        Action::UseReserved,
        Action::SwapTopFront,
        Action::Undo,
        Action::InvertAll,
    ];

    /// Menu number for this action
    pub fn key(self) -> u8 {
        match self {
            Action::Play => 1,
            Action::Reserve => 2,
            Action::UseReserved => 3,
            Action::SwapTopFront => 4,
            Action::Undo => 5,
            Action::InvertAll => 6,
        }
    }

    /// Menu text
    pub fn label(self) -> &'static str {
        match self {
            Action::Play => "Play piece (takes from the queue)",
            Action::Reserve => "Reserve piece (queue -> reserve stack)",
            Action::UseReserved => "Use reserved piece (reserve stack -> queue)",
            Action::SwapTopFront => "Swap reserve top with queue front",
            Action::Undo => "Undo last play (reverts option 1)",
            Action::InvertAll => "Invert queue with stack (swap all contents)",
        }
    }

    /// Compact name for the status bar
    pub fn short_name(self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Reserve => "reserve",
            Action::UseReserved => "use",
            Action::SwapTopFront => "swap",
            Action::Undo => "undo",
            Action::InvertAll => "invert",
        }
    }
}

/// What the player picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Run(Action),
    Exit,
}

/// A menu line that is not a valid selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid input. Try again.")]
    NotANumber,

    #[error("Invalid option.")]
    UnknownOption(i64),
}

impl Selection {
    /// Map a menu number to a selection
    pub fn from_number(number: i64) -> Result<Self, SelectionError> {
        if number == 0 {
            return Ok(Selection::Exit);
        }
        Action::ALL
            .into_iter()
            .find(|action| i64::from(action.key()) == number)
            .map(Selection::Run)
            .ok_or(SelectionError::UnknownOption(number))
    }

    /// Parse one line of menu input
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let number = input
            .trim()
            .parse::<i64>()
            .map_err(|_| SelectionError::NotANumber)?;
        Self::from_number(number)
    }
}
