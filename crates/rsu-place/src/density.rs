//! Densest cells first, keeping RSUs more than one radius apart.

use log::debug;

use rsu_core::{Deployment, RunParams};
use rsu_eval::Evaluator;
use rsu_grid::GridModel;
use rsu_spatial::{Cell, CellResolver, JunctionSet, ReachIndex};

use crate::{Placement, PlaceResult, PlacementStrategy};

/// Greedy density ranking with a minimum-separation filter.
///
/// Cells are ranked by occupancy (descending, row-major among equals).  A
/// resolved position is accepted only if it lies strictly farther than
/// `rsu_radius` from every position accepted so far; rejected cells are
/// skipped, never replaced.  Fewer than `num_rsus` picks is a valid outcome.
pub struct DensityBased<'a> {
    model:      &'a GridModel,
    resolver:   CellResolver<'a>,
    num_rsus:   usize,
    rsu_radius: f64,
}

impl<'a> DensityBased<'a> {
    pub fn new(model: &'a GridModel, junctions: &'a JunctionSet, params: &RunParams) -> Self {
        Self {
            model,
            resolver:   CellResolver::new(*model.grid(), junctions),
            num_rsus:   params.num_rsus as usize,
            rsu_radius: params.rsu_radius,
        }
    }

    /// Cells with their occupancy, densest first.
    pub fn ranking(&self) -> Vec<(Cell, u32)> {
        let m = self.model.occupancy();
        let mut ranked: Vec<(Cell, u32)> = self.model.grid().cells().map(|c| (c, m.get(c))).collect();
        // Stable: equal densities keep row-major order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn select(&self) -> PlaceResult<Deployment> {
        let mut deployment = Deployment::with_capacity(self.num_rsus);
        let mut accepted = ReachIndex::new();

        for (cell, density) in self.ranking() {
            if deployment.len() >= self.num_rsus {
                break;
            }
            let point = self.resolver.resolve(cell)?;
            if accepted.within_reach(point, self.rsu_radius) {
                debug!("density: skip {cell} (density {density}), {point} too close");
                continue;
            }
            accepted.insert(point);
            deployment.push(point);
            debug!("density: pick {cell} (density {density}) at {point}");
        }
        Ok(deployment)
    }
}

impl PlacementStrategy for DensityBased<'_> {
    fn name(&self) -> &'static str {
        "density_based"
    }

    fn place(&mut self, _evaluator: &mut dyn Evaluator) -> PlaceResult<Placement> {
        Ok(Placement::unscored(self.select()?))
    }
}
