//! Network junctions and nearest-junction snapping.
//!
//! # Determinism
//!
//! Junctions are kept sorted by `(x, y)` and [`JunctionSet::nearest`] is a
//! linear scan with a strict `<` comparison, so when two junctions are
//! equidistant the one that sorts first always wins.  A spatial index would
//! be faster but gives no such tie-breaking guarantee.

use rsu_core::{Deployment, Point};

use crate::{SpatialError, SpatialResult};

/// A junction of the road network.
#[derive(Clone, Debug, PartialEq)]
pub struct Junction {
    pub id:   String,
    pub pos:  Point,
    /// Network junction type (`priority`, `traffic_light`, …).  Informational.
    pub kind: String,
}

impl Junction {
    pub fn new(id: impl Into<String>, x: f64, y: f64, kind: impl Into<String>) -> Self {
        Self { id: id.into(), pos: Point::new(x, y), kind: kind.into() }
    }
}

/// The working junction list plus the network's coordinate offset.
#[derive(Clone, Debug, Default)]
pub struct JunctionSet {
    junctions: Vec<Junction>,
    x_offset:  f64,
    y_offset:  f64,
}

impl JunctionSet {
    /// Take ownership of `junctions` and sort them by `(x, y)`.
    pub fn new(mut junctions: Vec<Junction>, x_offset: f64, y_offset: f64) -> Self {
        junctions.sort_by(|a, b| {
            a.pos
                .x
                .total_cmp(&b.pos.x)
                .then_with(|| a.pos.y.total_cmp(&b.pos.y))
        });
        Self { junctions, x_offset, y_offset }
    }

    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// Junctions in `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Junction> + '_ {
        self.junctions.iter()
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x_offset, self.y_offset)
    }

    /// Position of the junction nearest to `center` (raw network coordinates,
    /// not offset-corrected).
    pub fn nearest(&self, center: Point) -> SpatialResult<Point> {
        let mut best: Option<(f64, Point)> = None;
        for j in &self.junctions {
            let d = center.distance_sq(j.pos);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, j.pos)),
            }
        }
        best.map(|(_, p)| p).ok_or(SpatialError::NoJunctionsAvailable)
    }

    /// Apply the network origin correction: `p - (x_offset, y_offset)`.
    #[inline]
    pub fn adjust_by_offset(&self, p: Point) -> Point {
        p.shifted_back(self.x_offset, self.y_offset)
    }

    /// Every junction, offset-corrected, in sorted order.
    pub fn all_adjusted(&self) -> SpatialResult<Deployment> {
        if self.junctions.is_empty() {
            return Err(SpatialError::NoJunctionsAvailable);
        }
        Ok(self.junctions.iter().map(|j| self.adjust_by_offset(j.pos)).collect())
    }
}
