use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Major and minor color identifying one conductor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub major: Color,
    pub minor: Color,
}

impl ColorPair {
    pub const fn new(major: Color, minor: Color) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MajorColor:{}, MinorColor:{}", self.major, self.minor)
    }
}
