//! lattice-toggle - exact on-counts for toggle instructions over integer cuboids
//!
//! A sequence of `on`/`off` instructions, each covering an axis-aligned box of
//! the 3-D integer lattice, is reduced to the exact number of points left on.
//! The [`VolumeEngine`] does this with an inclusion–exclusion ledger, so the
//! cost depends on how many boxes overlap rather than on how large they are.
//!
//! ```
//! use lattice_toggle::{compute_on_count, parse_instructions};
//!
//! let steps = parse_instructions(
//!     "on x=10..12,y=10..12,z=10..12\n\
//!      on x=11..13,y=11..13,z=11..13\n\
//!      off x=9..11,y=9..11,z=9..11\n\
//!      on x=10..10,y=10..10,z=10..10\n",
//! )
//! .unwrap();
//! assert_eq!(compute_on_count(&steps), 39);
//! ```

pub mod engine;
pub mod geometry;
pub mod grid;
pub mod instruction;
pub mod numeric;

pub use engine::{compute_on_count, compute_on_count_within, VolumeEngine};
pub use geometry::{Interval, RangeError, Region};
pub use grid::{DenseGrid, GridError};
pub use instruction::{parse_instructions, Instruction, ParseError, State};
pub use numeric::{Coord, Volume};
