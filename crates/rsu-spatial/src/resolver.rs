//! Grid cell → real RSU position.

use rsu_core::{CellIndex, Point};

use crate::{Cell, Grid, JunctionSet, SpatialResult};

/// Maps grid cells to offset-corrected junction positions.
///
/// Resolution is a pure function of the grid, the junction set and the
/// cell: the same cell always yields the same point.
#[derive(Copy, Clone)]
pub struct CellResolver<'a> {
    grid:      Grid,
    junctions: &'a JunctionSet,
}

impl<'a> CellResolver<'a> {
    pub fn new(grid: Grid, junctions: &'a JunctionSet) -> Self {
        Self { grid, junctions }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn junctions(&self) -> &'a JunctionSet {
        self.junctions
    }

    /// Cell center → nearest junction → offset correction.
    pub fn resolve(&self, cell: Cell) -> SpatialResult<Point> {
        let junction = self.junctions.nearest(self.grid.center(cell))?;
        Ok(self.junctions.adjust_by_offset(junction))
    }

    /// Like [`resolve`](Self::resolve) for a flat index.
    ///
    /// # Panics
    /// Panics if `idx` is not a valid cell of the grid.
    pub fn resolve_index(&self, idx: CellIndex) -> SpatialResult<Point> {
        self.resolve(self.grid.cell_at(idx))
    }
}
