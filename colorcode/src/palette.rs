//! Ordered major and minor palettes of the color code.

use crate::color::Color;

/// Two ordered color sets. The position of a color in its set is its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    major: &'static [Color],
    minor: &'static [Color],
}

impl Palette {
    /// The 25-pair telecommunications palette.
    pub const STANDARD: Palette = Palette {
        major: &[
            Color::White,
            Color::Red,
            Color::Black,
            Color::Yellow,
            Color::Violet,
        ],
        minor: &[
            Color::Blue,
            Color::Orange,
            Color::Green,
            Color::Brown,
            Color::SlateGray,
        ],
    };

    pub fn major(&self) -> &'static [Color] {
        self.major
    }

    pub fn minor(&self) -> &'static [Color] {
        self.minor
    }

    /// Highest valid pair number.
    pub fn pair_count(&self) -> u32 {
        (self.major.len() * self.minor.len()) as u32
    }

    pub fn major_index(&self, color: Color) -> Option<usize> {
        self.major.iter().position(|&c| c == color)
    }

    pub fn minor_index(&self, color: Color) -> Option<usize> {
        self.minor.iter().position(|&c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
