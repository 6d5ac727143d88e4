//! Candidate RSU deployments.

use serde::{Deserialize, Serialize};

use crate::Point;

/// An ordered collection of RSU positions.
///
/// Insertion order is preserved so that the pipeline assigns RSU ids
/// deterministically.  Whether duplicates are allowed is up to the producer:
/// use [`push`](Self::push) to keep them (GA genotypes may collide) or
/// [`insert_unique`](Self::insert_unique) for set semantics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deployment {
    points: Vec<Point>,
}

impl Deployment {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Append `p` unless an identical point is already present.
    ///
    /// Returns `true` if the point was added.
    pub fn insert_unique(&mut self, p: Point) -> bool {
        if self.points.contains(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Deployment {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Deployment {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
