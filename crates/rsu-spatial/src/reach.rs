//! "Is this point within reach of an already placed RSU?"
//!
//! Backed by an R-tree (via `rstar`) so the check stays logarithmic as the
//! number of accepted RSUs grows.

use rstar::RTree;

use rsu_core::Point;

/// Set of accepted RSU positions supporting radius queries.
#[derive(Default)]
pub struct ReachIndex {
    tree: RTree<[f64; 2]>,
}

impl ReachIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn insert(&mut self, p: Point) {
        self.tree.insert([p.x, p.y]);
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// `true` if some accepted point lies at distance `<= radius` from `p`.
    pub fn within_reach(&self, p: Point, radius: f64) -> bool {
        self.tree
            .locate_within_distance([p.x, p.y], radius * radius)
            .next()
            .is_some()
    }
}
