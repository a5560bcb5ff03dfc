//! Axis-aligned cuboids of lattice points.
//!
//! A [`Region`] is the product of three closed [`Interval`]s. Because each
//! axis is closed under intersection, two regions always intersect in at most
//! one region (never a disjoint union), which keeps the ledger arithmetic in
//! [`crate::engine`] down to a single `Option<Region>` per overlap test.

use std::fmt::Display;

use super::error::RangeError;
use super::interval::Interval;
use crate::numeric::{self, Coord, Volume};

/// Closed axis-aligned cuboid of integer lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    x: Interval,
    y: Interval,
    z: Interval,
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

impl Region {
    /// The `[-50, 50]` cube used by the restricted initialization procedure.
    pub const INIT_WINDOW: Region = Region::cube(-50, 50);

    /// Creates a region from per-axis intervals.
    pub const fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Creates a region from raw `(min, max)` bounds on each axis.
    pub const fn from_bounds(
        x: (Coord, Coord),
        y: (Coord, Coord),
        z: (Coord, Coord),
    ) -> Result<Self, RangeError> {
        let x = match Interval::try_new(x.0, x.1) {
            Ok(iv) => iv,
            Err(e) => return Err(e),
        };
        let y = match Interval::try_new(y.0, y.1) {
            Ok(iv) => iv,
            Err(e) => return Err(e),
        };
        let z = match Interval::try_new(z.0, z.1) {
            Ok(iv) => iv,
            Err(e) => return Err(e),
        };
        Ok(Self { x, y, z })
    }

    /// Creates the cube `[min, max]^3`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub const fn cube(min: Coord, max: Coord) -> Self {
        let iv = Interval::new(min, max);
        Self { x: iv, y: iv, z: iv }
    }

    /// Region holding the single point `(x, y, z)`.
    pub const fn point(x: Coord, y: Coord, z: Coord) -> Self {
        Self {
            x: Interval::point(x),
            y: Interval::point(y),
            z: Interval::point(z),
        }
    }

    pub const fn x(&self) -> Interval {
        self.x
    }

    pub const fn y(&self) -> Interval {
        self.y
    }

    pub const fn z(&self) -> Interval {
        self.z
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

impl Region {
    /// Number of lattice points inside the region.
    pub const fn volume(&self) -> Volume {
        numeric::product(self.x.count(), self.y.count(), self.z.count())
    }

    /// Returns true if the point `(x, y, z)` lies inside the region.
    pub const fn contains(&self, x: Coord, y: Coord, z: Coord) -> bool {
        self.x.contains(x) && self.y.contains(y) && self.z.contains(z)
    }

    /// Returns true if `other` lies entirely inside `self`.
    pub const fn contains_region(&self, other: &Region) -> bool {
        self.x.contains_interval(&other.x)
            && self.y.contains_interval(&other.y)
            && self.z.contains_interval(&other.z)
    }

    /// Checks whether the two regions share at least one lattice point.
    pub const fn intersects(&self, other: &Region) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y) && self.z.intersects(&other.z)
    }

    /// The overlapping cuboid, or `None` if any axis is disjoint.
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        Some(Region {
            x: self.x.intersection(&other.x)?,
            y: self.y.intersection(&other.y)?,
            z: self.z.intersection(&other.z)?,
        })
    }

    /// Smallest region enclosing both `self` and `other`.
    pub const fn hull(&self, other: &Region) -> Region {
        Region {
            x: self.x.hull(&other.x),
            y: self.y.hull(&other.y),
            z: self.z.hull(&other.z),
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x={},y={},z={}", self.x, self.y, self.z)
    }
}
