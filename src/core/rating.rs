use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{RatingTrendError, RatingTrendResult};

/// Number of slots a trend row is partitioned into.
pub const MAX_SEQUENCE_LEN: usize = 8;

/// Lowest accepted rating value.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating value.
pub const MAX_RATING: i32 = 5;

/// One validated rating in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);

    pub const ALL: [Self; 5] = [Self::ONE, Self::TWO, Self::THREE, Self::FOUR, Self::FIVE];

    pub fn new(value: i32) -> RatingTrendResult<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(RatingTrendError::InvalidArgument(format!(
                "rating out of range: {value} (expected {MIN_RATING}..={MAX_RATING})"
            )));
        }
        // Range check above keeps the narrowing lossless.
        Ok(Self(value as u8))
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Zero-based position of this value in per-value tables.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<i32> for RatingValue {
    type Error = RatingTrendError;

    fn try_from(value: i32) -> RatingTrendResult<Self> {
        Self::new(value)
    }
}

impl From<RatingValue> for i32 {
    fn from(value: RatingValue) -> Self {
        value.get()
    }
}

/// Ordered, validated run of at most `MAX_SEQUENCE_LEN` ratings.
///
/// Construction either validates every element or fails as a whole; there is
/// no partially built sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct RatingSequence {
    values: SmallVec<[RatingValue; MAX_SEQUENCE_LEN]>,
}

impl RatingSequence {
    pub fn from_slice(ratings: &[i32]) -> RatingTrendResult<Self> {
        if ratings.len() > MAX_SEQUENCE_LEN {
            return Err(RatingTrendError::InvalidArgument(format!(
                "sequence too long: {} ratings (max {MAX_SEQUENCE_LEN})",
                ratings.len()
            )));
        }

        let mut values = SmallVec::new();
        for (index, &rating) in ratings.iter().enumerate() {
            let value = RatingValue::new(rating).map_err(|_| {
                RatingTrendError::InvalidArgument(format!(
                    "rating out of range: {rating} at index {index} \
                     (expected {MIN_RATING}..={MAX_RATING})"
                ))
            })?;
            values.push(value);
        }

        Ok(Self { values })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[RatingValue] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = RatingValue> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().map(RatingValue::get).collect()
    }
}

impl TryFrom<Vec<i32>> for RatingSequence {
    type Error = RatingTrendError;

    fn try_from(ratings: Vec<i32>) -> RatingTrendResult<Self> {
        Self::from_slice(&ratings)
    }
}

impl From<RatingSequence> for Vec<i32> {
    fn from(sequence: RatingSequence) -> Self {
        sequence.to_vec()
    }
}
