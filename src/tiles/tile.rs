//! Ordered-attribute tiles and the quantized similarity metric
//!
//! A tile is compared position by position. Similarity is the fraction of
//! matching positions, floored to hundredths so that scores are reproducible
//! and directly comparable against configured thresholds.

use crate::io::configuration::SIMILARITY_SCALE;
use crate::io::error::{Result, TesseraError, invalid_state};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, non-empty sequence of attribute values
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<A>", into = "Vec<A>")]
#[serde(bound(serialize = "A: Clone + Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct Tile<A = char> {
    attributes: Vec<A>,
}

impl<A> Tile<A> {
    /// Build a tile from its attributes
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::InvalidState`] if `attributes` is empty
    pub fn new(attributes: Vec<A>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(invalid_state(&"tile has no attributes"));
        }
        Ok(Self { attributes })
    }

    /// Number of attributes, never zero
    pub const fn cardinality(&self) -> usize {
        self.attributes.len()
    }

    /// Attributes in order
    pub fn attributes(&self) -> &[A] {
        &self.attributes
    }
}

impl<A: PartialEq> Tile<A> {
    /// Fraction of positions holding equal attributes, floored to hundredths
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::CardinalityMismatch`] if the tiles differ in length
    pub fn similarity(&self, other: &Self) -> Result<Similarity> {
        if self.cardinality() != other.cardinality() {
            return Err(TesseraError::CardinalityMismatch {
                left: self.cardinality(),
                right: other.cardinality(),
            });
        }

        let matches = self
            .attributes
            .iter()
            .zip(&other.attributes)
            .filter(|(a, b)| a == b)
            .count();

        Ok(Similarity::from_ratio(matches, self.cardinality()))
    }
}

impl Tile<char> {
    /// Split a serialized identity into one attribute per character
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::InvalidState`] if `text` is empty
    pub fn from_serialized(text: &str) -> Result<Self> {
        Self::new(text.chars().collect())
    }
}

impl<A> TryFrom<Vec<A>> for Tile<A> {
    type Error = TesseraError;

    fn try_from(attributes: Vec<A>) -> Result<Self> {
        Self::new(attributes)
    }
}

impl<A> From<Tile<A>> for Vec<A> {
    fn from(tile: Tile<A>) -> Self {
        tile.attributes
    }
}

/// Similarity score quantized to hundredths in `[0.00, 1.00]`
///
/// Stored as an integer count of hundredths, so equality and ordering are
/// exact and a tile is always fully similar to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f32", try_from = "f32")]
pub struct Similarity(u8);

impl Similarity {
    /// No matching attributes
    pub const ZERO: Self = Self(0);
    /// Every attribute matches
    pub const ONE: Self = Self(SIMILARITY_SCALE);

    /// Floor of `matches / total` to the nearest hundredth
    ///
    /// `total` of zero yields [`Similarity::ZERO`]; `matches` above `total` saturates.
    pub fn from_ratio(matches: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let hundredths = matches.min(total) * usize::from(SIMILARITY_SCALE) / total;
        Self(u8::try_from(hundredths).unwrap_or(SIMILARITY_SCALE))
    }

    /// Build a score from a whole number of hundredths, if in range
    pub fn from_hundredths(hundredths: u8) -> Option<Self> {
        (hundredths <= SIMILARITY_SCALE).then_some(Self(hundredths))
    }

    /// Score as a whole number of hundredths
    pub const fn hundredths(self) -> u8 {
        self.0
    }

    /// Score as a single-precision fraction
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / f32::from(SIMILARITY_SCALE)
    }

    /// Score as a double-precision fraction
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(SIMILARITY_SCALE)
    }

    /// Whether the score reaches a threshold given as a fraction
    pub fn meets(self, threshold: f32) -> bool {
        self.as_f32() >= threshold
    }
}

impl From<Similarity> for f32 {
    fn from(score: Similarity) -> Self {
        score.as_f32()
    }
}

impl TryFrom<f32> for Similarity {
    type Error = TesseraError;

    fn try_from(value: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(crate::io::error::invalid_parameter(
                "similarity",
                &value,
                &"must lie within [0.0, 1.0]",
            ));
        }
        // Quantized scores are inexact in f32, take the nearest hundredth
        let hundredths = (value * f32::from(SIMILARITY_SCALE)).round() as u8;
        Ok(Self(hundredths))
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SIMILARITY_SCALE, self.0 % SIMILARITY_SCALE)
    }
}
