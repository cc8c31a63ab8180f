use thiserror::Error;

use crate::pair::ColorPair;

/// Errors returned by the pair number and color pair conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("pair number {value} is outside the allowed range 1..={max}")]
    OutOfRange { value: u32, max: u32 },

    #[error(
        "unknown colors: {pair} ({})",
        unknown_roles(.major_unknown, .minor_unknown)
    )]
    UnknownColors {
        pair: ColorPair,
        major_unknown: bool,
        minor_unknown: bool,
    },
}

fn unknown_roles(major: &bool, minor: &bool) -> &'static str {
    match (*major, *minor) {
        (true, true) => "major and minor not in palette",
        (true, false) => "major not in palette",
        (false, true) => "minor not in palette",
        (false, false) => "no role failed",
    }
}

pub type Result<T> = std::result::Result<T, Error>;
