//! Lattice geometry: closed integer intervals and the cuboids built from them.

mod error;
mod interval;
mod region;

pub use error::RangeError;
pub use interval::Interval;
pub use region::Region;
