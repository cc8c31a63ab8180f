//! The 25-pair telecommunications color code.
//!
//! Twisted-pair conductors are identified by a major (primary) color and a
//! minor (tracer) color. This crate maps a 1-based pair number to its
//! [`ColorPair`] and back:
//! - [`PairColorMapper::color_from_pair_number`] for `1..=25` to colors,
//! - [`PairColorMapper::pair_number_from_color`] for colors to a number,
//! - [`format_manual`] for the full reference table.
//!
//! Both conversions are pure and report invalid input through [`Error`].

mod color;
mod error;
mod manual;
mod mapper;
mod pair;
mod palette;

pub use color::{Color, ParseColorError};
pub use error::{Error, Result};
pub use manual::{ManualEntry, ManualOptions, format_manual};
pub use mapper::{
    PairColorMapper, color_from_pair_number, pair_number_from_color,
};
pub use pair::ColorPair;
pub use palette::Palette;
