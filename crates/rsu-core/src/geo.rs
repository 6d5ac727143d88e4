//! Planar coordinate type.
//!
//! Network coordinates are projected metres (SUMO's `x`/`y`), so plain
//! Euclidean geometry in `f64` is exact enough for every distance check the
//! strategies make.

use serde::{Deserialize, Serialize};

/// A point in the network's projected coordinate system, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// when only comparisons are needed.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Translate by `(-dx, -dy)`.
    #[inline]
    pub fn shifted_back(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x - dx, self.y - dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
