use thiserror::Error;

use crate::numeric::Coord;

/// Errors raised when building geometric primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range {min}..{max}: min must be <= max")]
    Inverted { min: Coord, max: Coord },
}
