//! Closed integer interval along a single axis.

use std::fmt::Display;

use super::error::RangeError;
use crate::numeric::{self, Coord, Volume};

/// Closed lattice range `[min, max]`; both endpoints are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    min: Coord,
    max: Coord,
}

impl Interval {
    /// Creates interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Use [`Interval::try_new`] for untrusted input.
    pub const fn new(min: Coord, max: Coord) -> Self {
        assert!(min <= max, "Interval min must be <= max");
        Self { min, max }
    }

    /// Creates interval `[min, max]`, rejecting inverted bounds.
    pub const fn try_new(min: Coord, max: Coord) -> Result<Self, RangeError> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(RangeError::Inverted { min, max })
        }
    }

    /// Interval holding the single coordinate `at`.
    pub const fn point(at: Coord) -> Self {
        Self { min: at, max: at }
    }

    pub const fn min(&self) -> Coord {
        self.min
    }

    pub const fn max(&self) -> Coord {
        self.max
    }

    /// Number of lattice points in the interval. Always at least 1.
    pub const fn count(&self) -> Volume {
        numeric::span(self.min, self.max)
    }

    /// Returns true if `coord` ∈ `[min, max]`.
    pub const fn contains(&self, coord: Coord) -> bool {
        self.min <= coord && coord <= self.max
    }

    /// Returns true if every point of `other` also lies in `self`.
    pub const fn contains_interval(&self, other: &Interval) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Checks whether the two intervals share at least one point.
    pub const fn intersects(&self, other: &Interval) -> bool {
        self.min <= other.max && self.max >= other.min
    }

    /// Common part of both intervals, or `None` when they are disjoint.
    ///
    /// Endpoints are inclusive, so any non-empty result holds at least one
    /// lattice point; there is no zero-length interval.
    pub const fn intersection(&self, other: &Interval) -> Option<Interval> {
        if !self.intersects(other) {
            return None;
        }
        let min = if self.min > other.min { self.min } else { other.min };
        let max = if self.max < other.max { self.max } else { other.max };
        Some(Interval { min, max })
    }

    /// Smallest interval covering both `self` and `other`.
    pub const fn hull(&self, other: &Interval) -> Interval {
        let min = if self.min < other.min { self.min } else { other.min };
        let max = if self.max > other.max { self.max } else { other.max };
        Interval { min, max }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: Coord,
            max: Coord,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}
