use serde::{Deserialize, Serialize};

use crate::core::RatingValue;
use crate::error::RatingTrendResult;
use crate::render::{Color, ColorPair};

/// Per-rating stroke/fill colors.
///
/// Lookup is a direct index by rating value; values without an entry are a
/// mapping miss rather than a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorTableEntries", into = "ColorTableEntries")]
pub struct ColorTable {
    pairs: [ColorPair; 5],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            pairs: [
                default_one(),
                default_two(),
                default_three(),
                default_four(),
                default_five(),
            ],
        }
    }
}

impl ColorTable {
    #[must_use]
    pub fn new(
        one: ColorPair,
        two: ColorPair,
        three: ColorPair,
        four: ColorPair,
        five: ColorPair,
    ) -> Self {
        Self {
            pairs: [one, two, three, four, five],
        }
    }

    #[must_use]
    pub fn with_pair(mut self, value: RatingValue, pair: ColorPair) -> Self {
        self.pairs[value.index()] = pair;
        self
    }

    #[must_use]
    pub fn get(&self, value: RatingValue) -> ColorPair {
        self.pairs[value.index()]
    }

    /// Looks up an unvalidated rating; `None` for values with no entry.
    #[must_use]
    pub fn lookup(&self, value: i32) -> Option<ColorPair> {
        let index = usize::try_from(value.checked_sub(1)?).ok()?;
        self.pairs.get(index).copied()
    }

    pub fn validate(&self) -> RatingTrendResult<()> {
        for pair in &self.pairs {
            pair.validate()?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct ColorTableEntries {
    #[serde(default = "default_one")]
    one: ColorPair,
    #[serde(default = "default_two")]
    two: ColorPair,
    #[serde(default = "default_three")]
    three: ColorPair,
    #[serde(default = "default_four")]
    four: ColorPair,
    #[serde(default = "default_five")]
    five: ColorPair,
}

impl From<ColorTableEntries> for ColorTable {
    fn from(entries: ColorTableEntries) -> Self {
        Self::new(
            entries.one,
            entries.two,
            entries.three,
            entries.four,
            entries.five,
        )
    }
}

impl From<ColorTable> for ColorTableEntries {
    fn from(table: ColorTable) -> Self {
        let [one, two, three, four, five] = table.pairs;
        Self {
            one,
            two,
            three,
            four,
            five,
        }
    }
}

fn pair(stroke_argb: u32, fill_argb: u32) -> ColorPair {
    ColorPair::new(Color::from_argb(stroke_argb), Color::from_argb(fill_argb))
}

fn default_one() -> ColorPair {
    pair(0xFFD3_2F2F, 0xFFFF_CDD2)
}

fn default_two() -> ColorPair {
    pair(0xFFF5_7C00, 0xFFFF_E0B2)
}

fn default_three() -> ColorPair {
    pair(0xFFFB_C02D, 0xFFFF_F9C4)
}

fn default_four() -> ColorPair {
    pair(0xFF7C_B342, 0xFFDC_EDC8)
}

fn default_five() -> ColorPair {
    pair(0xFF38_8E3C, 0xFFC8_E6C9)
}
