//! Baseline: one RSU on every junction.

use rsu_eval::Evaluator;
use rsu_spatial::JunctionSet;

use crate::{Placement, PlaceResult, PlacementStrategy};

pub struct AllJunctions<'a> {
    junctions: &'a JunctionSet,
}

impl<'a> AllJunctions<'a> {
    pub fn new(junctions: &'a JunctionSet) -> Self {
        Self { junctions }
    }
}

impl PlacementStrategy for AllJunctions<'_> {
    fn name(&self) -> &'static str {
        "all_junctions"
    }

    fn place(&mut self, _evaluator: &mut dyn Evaluator) -> PlaceResult<Placement> {
        Ok(Placement::unscored(self.junctions.all_adjusted()?))
    }
}
