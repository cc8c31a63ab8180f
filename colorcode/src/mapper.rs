use log::{debug, trace};

use crate::{
    color::Color,
    error::{Error, Result},
    manual::ManualEntry,
    pair::ColorPair,
    palette::Palette,
};

/// Converts between 1-based pair numbers and color pairs of a [`Palette`].
#[derive(Debug, Clone, Copy)]
pub struct PairColorMapper<'a> {
    palette: &'a Palette,
}

impl<'a> PairColorMapper<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Resolve the color pair labelling `pair_number`.
    ///
    /// Pair numbers run from 1 up to [`Palette::pair_count`]; the major color
    /// changes every `minor().len()` pairs.
    pub fn color_from_pair_number(&self, pair_number: u32) -> Result<ColorPair> {
        let max = self.palette.pair_count();
        if pair_number < 1 || pair_number > max {
            debug!("[rejected pair number] {pair_number}, allowed 1..={max}");
            return Err(Error::OutOfRange {
                value: pair_number,
                max,
            });
        }

        let minor_len = self.palette.minor().len();
        let zero_based = (pair_number - 1) as usize;
        let pair = ColorPair::new(
            self.palette.major()[zero_based / minor_len],
            self.palette.minor()[zero_based % minor_len],
        );

        trace!("pair number {pair_number} -> {pair}");
        Ok(pair)
    }

    /// Resolve the pair number of `pair`.
    ///
    /// Each color must come from its own role's palette; a color taken from
    /// the other role is reported as unknown.
    pub fn pair_number_from_color(&self, pair: ColorPair) -> Result<u32> {
        let major = self.palette.major_index(pair.major);
        let minor = self.palette.minor_index(pair.minor);

        let (Some(major), Some(minor)) = (major, minor) else {
            debug!("[rejected color pair] {pair}");
            return Err(Error::UnknownColors {
                pair,
                major_unknown: major.is_none(),
                minor_unknown: minor.is_none(),
            });
        };

        let pair_number =
            (major * self.palette.minor().len() + minor + 1) as u32;
        trace!("{pair} -> pair number {pair_number}");
        Ok(pair_number)
    }

    /// Every pair of the palette in ascending pair number order.
    pub fn entries(&self) -> impl Iterator<Item = ManualEntry> + 'a {
        let minor = self.palette.minor();
        self.palette
            .major()
            .iter()
            .flat_map(move |&major| {
                minor.iter().map(move |&minor| ColorPair::new(major, minor))
            })
            .zip(1u32..)
            .map(|(pair, pair_number)| ManualEntry { pair_number, pair })
    }
}

impl Default for PairColorMapper<'static> {
    fn default() -> Self {
        Self::new(&Palette::STANDARD)
    }
}

/// [`PairColorMapper::color_from_pair_number`] over [`Palette::STANDARD`].
pub fn color_from_pair_number(pair_number: u32) -> Result<ColorPair> {
    PairColorMapper::default().color_from_pair_number(pair_number)
}

/// [`PairColorMapper::pair_number_from_color`] over [`Palette::STANDARD`].
pub fn pair_number_from_color(major: Color, minor: Color) -> Result<u32> {
    PairColorMapper::default()
        .pair_number_from_color(ColorPair::new(major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_first_and_last_pair_numbers_when_mapping_then_both_succeed() {
        let mapper = PairColorMapper::default();
        assert_eq!(
            mapper.color_from_pair_number(1),
            Ok(ColorPair::new(Color::White, Color::Blue))
        );
        assert_eq!(
            mapper.color_from_pair_number(25),
            Ok(ColorPair::new(Color::Violet, Color::SlateGray))
        );
    }

    #[test]
    fn given_pair_number_outside_range_when_mapping_then_out_of_range() {
        let mapper = PairColorMapper::default();
        assert_eq!(
            mapper.color_from_pair_number(0),
            Err(Error::OutOfRange { value: 0, max: 25 })
        );
        assert_eq!(
            mapper.color_from_pair_number(26),
            Err(Error::OutOfRange { value: 26, max: 25 })
        );
        assert_eq!(
            mapper.color_from_pair_number(u32::MAX),
            Err(Error::OutOfRange {
                value: u32::MAX,
                max: 25
            })
        );
    }

    #[test]
    fn given_minor_color_as_major_when_resolving_then_major_unknown() {
        let err = pair_number_from_color(Color::Blue, Color::Orange)
            .expect_err("blue is not a major color");
        assert_eq!(
            err,
            Error::UnknownColors {
                pair: ColorPair::new(Color::Blue, Color::Orange),
                major_unknown: true,
                minor_unknown: false,
            }
        );
    }

    #[test]
    fn given_major_color_as_minor_when_resolving_then_minor_unknown() {
        let err = pair_number_from_color(Color::Red, Color::Black)
            .expect_err("black is not a minor color");
        assert!(matches!(
            err,
            Error::UnknownColors {
                major_unknown: false,
                minor_unknown: true,
                ..
            }
        ));
    }

    #[test]
    fn given_swapped_roles_when_resolving_then_both_unknown() {
        let err = pair_number_from_color(Color::Blue, Color::White)
            .expect_err("roles are swapped");
        assert!(matches!(
            err,
            Error::UnknownColors {
                major_unknown: true,
                minor_unknown: true,
                ..
            }
        ));
    }

    #[test]
    fn given_every_pair_number_when_round_tripping_then_number_is_preserved() {
        let mapper = PairColorMapper::default();
        for pair_number in 1..=mapper.palette().pair_count() {
            let pair = mapper
                .color_from_pair_number(pair_number)
                .expect("pair number in range");
            assert_eq!(mapper.pair_number_from_color(pair), Ok(pair_number));
        }
    }

    #[test]
    fn given_standard_palette_when_listing_entries_then_order_matches_numbers() {
        let mapper = PairColorMapper::default();
        let entries: Vec<_> = mapper.entries().collect();

        assert_eq!(entries.len(), 25);
        for (idx, entry) in entries.iter().enumerate() {
            assert_eq!(entry.pair_number, idx as u32 + 1);
            assert_eq!(
                mapper.color_from_pair_number(entry.pair_number),
                Ok(entry.pair)
            );
        }
    }
}
