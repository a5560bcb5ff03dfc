//! Integer widths used for lattice coordinates and point counts.
//!
//! Coordinates are stored as [`Coord`] (`i32`) and every count or volume is
//! computed in [`Volume`] (`i128`). An interval spans at most 2^32 points, so
//! the product of three spans is bounded by 2^96 and a single region volume
//! can never overflow. The signed ledger sum stays representable as long as
//! the ledger holds fewer than 2^31 entries, which is far beyond what the
//! quadratic ledger growth allows to fit in memory.

/// A lattice coordinate on one axis.
pub type Coord = i32;

/// A count of lattice points (or a signed sum of such counts).
pub type Volume = i128;

/// Number of lattice points in the closed range `[min, max]`.
///
/// Callers guarantee `min <= max`; the result is then at least 1.
#[inline]
pub const fn span(min: Coord, max: Coord) -> Volume {
    (max as Volume) - (min as Volume) + 1
}

/// Product of three per-axis spans.
#[inline]
pub const fn product(a: Volume, b: Volume, c: Volume) -> Volume {
    a * b * c
}

/// Converts a [`Volume`] into a cell count usable for allocation.
///
/// Returns `None` when the value is negative or does not fit in `usize`.
#[inline]
pub fn to_cells(volume: Volume) -> Option<usize> {
    usize::try_from(volume).ok()
}
