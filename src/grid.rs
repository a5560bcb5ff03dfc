//! Dense boolean voxel grid.
//!
//! The straightforward way to run the instructions: allocate one cell per
//! lattice point of the bounding region and overwrite cells instruction by
//! instruction. Memory grows with the cube of the coordinate span, so this is
//! only usable for small inputs. It serves as the reference the
//! [`VolumeEngine`](crate::engine::VolumeEngine) is checked against.

use thiserror::Error;

use crate::geometry::Region;
use crate::instruction::Instruction;
use crate::numeric::{self, Coord, Volume};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cannot size a grid from an empty instruction list")]
    Empty,

    #[error("Grid would need {cells} cells, above the limit of {limit}")]
    TooLarge { cells: Volume, limit: usize },

    #[error("Region {region} lies outside grid bounds {bounds}")]
    OutOfBounds { region: Region, bounds: Region },
}

/// One `bool` per lattice point of `bounds`, z-major.
#[derive(Debug, Clone)]
pub struct DenseGrid {
    bounds: Region,
    cells: Vec<bool>,
}

impl DenseGrid {
    /// Upper bound on cells allocated unless overridden (16 Mi cells).
    pub const DEFAULT_CELL_LIMIT: usize = 1 << 24;

    /// Creates an all-off grid over `bounds`.
    pub fn new(bounds: Region, cell_limit: usize) -> Result<Self, GridError> {
        let cells = bounds.volume();
        let len = numeric::to_cells(cells)
            .filter(|&len| len <= cell_limit)
            .ok_or(GridError::TooLarge {
                cells,
                limit: cell_limit,
            })?;
        log::debug!("allocating dense grid over {} ({} cells)", bounds, len);
        Ok(Self {
            bounds,
            cells: vec![false; len],
        })
    }

    /// Creates an all-off grid over the bounding region of `instructions`.
    pub fn for_instructions(instructions: &[Instruction]) -> Result<Self, GridError> {
        Self::with_cell_limit(instructions, Self::DEFAULT_CELL_LIMIT)
    }

    /// Same as [`DenseGrid::for_instructions`] with an explicit cell limit.
    pub fn with_cell_limit(instructions: &[Instruction], cell_limit: usize) -> Result<Self, GridError> {
        let bounds = instructions
            .iter()
            .map(Instruction::region)
            .reduce(|acc, region| acc.hull(&region))
            .ok_or(GridError::Empty)?;
        Self::new(bounds, cell_limit)
    }

    /// Sizes a grid for `instructions`, runs them all, and returns the on-count.
    pub fn count(instructions: &[Instruction]) -> Result<Volume, GridError> {
        let mut grid = Self::for_instructions(instructions)?;
        for instruction in instructions {
            grid.apply(instruction)?;
        }
        Ok(grid.count_on())
    }

    pub fn bounds(&self) -> Region {
        self.bounds
    }

    /// Overwrites every cell of the instruction's region with its state.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), GridError> {
        let region = instruction.region();
        if !self.bounds.contains_region(&region) {
            return Err(GridError::OutOfBounds {
                region,
                bounds: self.bounds,
            });
        }

        let value = instruction.state().is_on();
        let (rx, ry, rz) = (region.x(), region.y(), region.z());
        let run = rz.count() as usize;
        for x in rx.min()..=rx.max() {
            for y in ry.min()..=ry.max() {
                let start = self.index(x, y, rz.min());
                self.cells[start..start + run].fill(value);
            }
        }
        Ok(())
    }

    /// State of a single point, or `None` outside the grid.
    pub fn get(&self, x: Coord, y: Coord, z: Coord) -> Option<bool> {
        self.bounds
            .contains(x, y, z)
            .then(|| self.cells[self.index(x, y, z)])
    }

    /// Number of cells currently on.
    pub fn count_on(&self) -> Volume {
        self.cells.iter().filter(|&&cell| cell).count() as Volume
    }

    /// Flat index of an in-bounds point.
    fn index(&self, x: Coord, y: Coord, z: Coord) -> usize {
        let b = &self.bounds;
        let offset = |c: Coord, min: Coord| (c as i64 - min as i64) as usize;
        let ny = b.y().count() as usize;
        let nz = b.z().count() as usize;
        (offset(x, b.x().min()) * ny + offset(y, b.y().min())) * nz + offset(z, b.z().min())
    }
}
