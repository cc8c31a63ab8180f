use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conductor insulation colors used by the 25-pair code.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
pub enum Color {
    White,
    Red,
    Black,
    Yellow,
    Violet,
    Blue,
    Orange,
    Green,
    Brown,
    SlateGray,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color name is empty")]
    Empty,

    #[error("unknown color name: {0}")]
    UnknownName(String),
}

impl Color {
    pub const ALL: [Color; 10] = [
        Self::White,
        Self::Red,
        Self::Black,
        Self::Yellow,
        Self::Violet,
        Self::Blue,
        Self::Orange,
        Self::Green,
        Self::Brown,
        Self::SlateGray,
    ];

    /// Canonical name used for display and parsing.
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Yellow => "Yellow",
            Self::Violet => "Violet",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Green => "Green",
            Self::Brown => "Brown",
            Self::SlateGray => "SlateGray",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseColorError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColorError::UnknownName(name.to_string()))
    }
}
