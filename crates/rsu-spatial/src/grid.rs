//! Uniform square grid over the network's bounding box.
//!
//! # Indexing
//!
//! A cell is `(row, col)` with `row` binning the x axis and `col` binning the
//! y axis.  Flat indices are row-major:
//!
//! ```text
//! index = row * size + col
//! ```
//!
//! Binning clamps to the grid, so points on or outside the bounding box land
//! in the nearest edge cell:
//!
//! ```text
//! row = clamp(floor((x - x_min) / x_step), 0, size - 1)
//! ```

use serde::{Deserialize, Serialize};

use rsu_core::{CellIndex, NetworkConfig, Point};

use crate::{SpatialError, SpatialResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// `size × size` partition of `[x_min, x_max] × [y_min, y_max]`.
///
/// Immutable once constructed; cheap to copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    x_min:  f64,
    y_min:  f64,
    x_step: f64,
    y_step: f64,
    size:   u32,
}

impl Grid {
    /// Build a grid over the given bounds.
    ///
    /// A zero-width axis is accepted; every coordinate on it bins to 0.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, size: u32) -> SpatialResult<Self> {
        if size == 0 {
            return Err(SpatialError::InvalidGrid("grid size must be positive".into()));
        }
        if !(x_max >= x_min && y_max >= y_min) {
            return Err(SpatialError::InvalidGrid(format!(
                "inverted bounds x=[{x_min}, {x_max}] y=[{y_min}, {y_max}]"
            )));
        }
        Ok(Self {
            x_min,
            y_min,
            x_step: (x_max - x_min) / size as f64,
            y_step: (y_max - y_min) / size as f64,
            size,
        })
    }

    /// Grid over the network bounds of `net`.
    pub fn from_network(net: &NetworkConfig, size: u32) -> SpatialResult<Self> {
        Self::new(net.x_min, net.x_max, net.y_min, net.y_max, size)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// `size²`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    #[inline]
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    #[inline]
    pub fn y_step(&self) -> f64 {
        self.y_step
    }

    // ── Binning ───────────────────────────────────────────────────────────

    /// The cell containing `p`, clamped to the grid.
    pub fn cell_of(&self, p: Point) -> Cell {
        Cell::new(
            bin(p.x, self.x_min, self.x_step, self.size),
            bin(p.y, self.y_min, self.y_step, self.size),
        )
    }

    /// Row-major flat index of `cell`.
    #[inline]
    pub fn index(&self, cell: Cell) -> CellIndex {
        debug_assert!(cell.row < self.size && cell.col < self.size);
        CellIndex(cell.row * self.size + cell.col)
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    /// Panics if `idx` is outside `0..cell_count()`; an out-of-range index is
    /// a caller bug, never a data condition.
    #[inline]
    pub fn cell_at(&self, idx: CellIndex) -> Cell {
        assert!(
            idx.index() < self.cell_count(),
            "cell index {} out of range for a {}x{} grid",
            idx.0,
            self.size,
            self.size
        );
        Cell::new(idx.0 / self.size, idx.0 % self.size)
    }

    /// `true` if `(row, col)` lies on the grid.  Accepts signed coordinates
    /// so callers can walk off the edge and test.
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.size;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Geometric center of `cell`.
    pub fn center(&self, cell: Cell) -> Point {
        Point::new(
            self.x_min + (cell.row as f64 + 0.5) * self.x_step,
            self.y_min + (cell.col as f64 + 0.5) * self.y_step,
        )
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Relation between this grid's spacing and an RSU radius.
    pub fn spacing_report(&self, rsu_radius: f64) -> SpacingReport {
        // Side of the square whose diagonal equals the radius.
        let side = (rsu_radius * rsu_radius * 0.5).sqrt();
        let extent_x = self.x_step * self.size as f64;
        let extent_y = self.y_step * self.size as f64;
        SpacingReport {
            diagonal_radius:   (
                (2.0 * self.x_step * self.x_step).sqrt(),
                (2.0 * self.y_step * self.y_step).sqrt(),
            ),
            matching_grid_size: (extent_x / side, extent_y / side),
        }
    }
}

/// Output of [`Grid::spacing_report`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpacingReport {
    /// Radius equal to one cell diagonal, per axis `(x, y)`.
    pub diagonal_radius:    (f64, f64),
    /// Grid size whose cell diagonal equals the radius, per axis `(x, y)`.
    pub matching_grid_size: (f64, f64),
}

#[inline]
fn bin(coord: f64, min: f64, step: f64, size: u32) -> u32 {
    if !(step > 0.0) {
        return 0;
    }
    let i = ((coord - min) / step).floor();
    if !(i > 0.0) {
        // Negative, zero, or NaN.
        0
    } else {
        (i as u64).min(size as u64 - 1) as u32
    }
}
