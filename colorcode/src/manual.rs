//! Printable reference table of the color code.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{mapper::PairColorMapper, pair::ColorPair};

/// One row of the reference manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub pair_number: u32,
    pub pair: ColorPair,
}

/// Layout knobs for [`format_manual`].
#[derive(Clone, Debug)]
pub struct ManualOptions {
    /// Text placed between the pair number, major and minor columns.
    pub separator: String,
    /// Emit a column title row before the entries.
    pub header: bool,
}

impl Default for ManualOptions {
    fn default() -> Self {
        Self {
            separator: " | ".to_string(),
            header: true,
        }
    }
}

/// Render every entry of `mapper` as one line of text.
pub fn format_manual(
    mapper: &PairColorMapper<'_>,
    options: &ManualOptions,
) -> String {
    let sep = &options.separator;
    let mut out = String::new();

    if options.header {
        let _ = writeln!(out, "No{sep}Major{sep}Minor");
    }

    for entry in mapper.entries() {
        let _ = writeln!(
            out,
            "{:>2}{sep}{}{sep}{}",
            entry.pair_number, entry.pair.major, entry.pair.minor
        );
    }

    out
}
