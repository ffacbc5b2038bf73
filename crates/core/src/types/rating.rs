//! Review star ratings and their per-product aggregate.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of stars in a full rating.
pub const MAX_STARS: u8 = 5;

/// Errors that can occur when parsing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The key is not an integer.
    #[error("rating key {0:?} is not a number")]
    NotANumber(String),
    /// The key is an integer outside 1..=5.
    #[error("rating {0} is outside 1..=5")]
    OutOfRange(i64),
}

/// A validated 1-5 star rating.
///
/// Cosmic stores ratings as a select-dropdown value whose key is `"1"`
/// through `"5"`. Keys are validated once, when a review is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Number of filled stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Build a rating from a star count.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] unless `stars` is in 1..=5.
    pub const fn from_stars(stars: i64) -> Result<Self, RatingError> {
        match stars {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(RatingError::OutOfRange(other)),
        }
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stars = s
            .trim()
            .parse::<i64>()
            .map_err(|_| RatingError::NotANumber(s.to_owned()))?;
        Self::from_stars(stars)
    }
}

impl TryFrom<String> for Rating {
    type Error = RatingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.stars().to_string()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stars())
    }
}

/// Average rating across a product's reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean star value, 0.0 when there are no reviews.
    pub average: f64,
    /// Number of reviews that contributed.
    pub count: usize,
}

impl RatingSummary {
    /// Summary for a product with no reviews.
    pub const EMPTY: Self = Self {
        average: 0.0,
        count: 0,
    };

    /// Aggregate a list of review ratings.
    ///
    /// A review whose rating failed validation (`None`) still counts as a
    /// review but contributes zero stars.
    #[must_use]
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Option<Rating>>,
    {
        let (sum, count) = ratings.into_iter().fold((0u64, 0usize), |(sum, count), r| {
            (sum + u64::from(r.map_or(0, Rating::stars)), count + 1)
        });

        if count == 0 {
            return Self::EMPTY;
        }

        #[allow(clippy::cast_precision_loss)] // review counts never approach 2^52
        let average = sum as f64 / count as f64;

        Self { average, count }
    }

    /// Star count for display: the average rounded to the nearest integer.
    #[must_use]
    pub fn rounded_stars(&self) -> u8 {
        let rounded = self.average.round().clamp(0.0, f64::from(MAX_STARS));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=5
        let stars = rounded as u8;
        stars
    }
}
