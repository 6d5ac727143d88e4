//! PMCP-B: greedy flow capture with demand removal.
//!
//! # Algorithm
//!
//! ```text
//! while picked < num_rsus and cells remain:
//!     flows = M                              if nothing picked yet
//!           = projected_flow(c) / -1 (picked) otherwise
//!     pick  = argmax(flows)                  first maximum, row-major
//!     deployment ∪= resolve(pick)
//!     drop every agent seen in pick; rebuild M
//! ```
//!
//! `projected_flow(c)` adds to `M[c]` the flow walked in from each of the
//! four straight directions.  Along a walk the compound factor is
//! multiplied by `P[row, col]` of each reached cell (row and column of the
//! cell, used directly as matrix coordinates) before `M[reached]` is
//! weighted by it.

use log::debug;

use rsu_core::{CellIndex, Deployment, RunParams};
use rsu_eval::Evaluator;
use rsu_grid::{DemandIndex, GridModel, OccupancyMatrix};
use rsu_spatial::{Cell, CellResolver, Grid, JunctionSet};

use crate::{Placement, PlaceResult, PlacementStrategy};

/// Row/column steps of the four propagation directions.
const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flow value given to already picked cells so they never win again.
const PICKED: f64 = -1.0;

pub struct PmcpB<'a> {
    model:     &'a GridModel,
    resolver:  CellResolver<'a>,
    num_rsus:  usize,
    // Working state, reset by `select`.
    occupancy: OccupancyMatrix,
    demand:    DemandIndex,
    picked:    Vec<Cell>,
    is_picked: Vec<bool>,
}

impl<'a> PmcpB<'a> {
    pub fn new(model: &'a GridModel, junctions: &'a JunctionSet, params: &RunParams) -> Self {
        let grid = *model.grid();
        Self {
            model,
            resolver:  CellResolver::new(grid, junctions),
            num_rsus:  params.num_rsus as usize,
            occupancy: model.occupancy().clone(),
            demand:    model.working_demand(),
            picked:    Vec::new(),
            is_picked: vec![false; grid.cell_count()],
        }
    }

    #[inline]
    fn grid(&self) -> &Grid {
        self.model.grid()
    }

    /// Restore the working state to the canonical model.
    pub fn reset(&mut self) {
        self.occupancy = self.model.occupancy().clone();
        self.demand = self.model.working_demand();
        self.picked.clear();
        self.is_picked.iter_mut().for_each(|p| *p = false);
    }

    /// Cells picked so far, in pick order.
    pub fn picked_cells(&self) -> &[Cell] {
        &self.picked
    }

    /// The working `M`, rebuilt after every pick.
    pub fn working_occupancy(&self) -> &OccupancyMatrix {
        &self.occupancy
    }

    /// Agents not yet served by a picked cell.
    pub fn working_demand(&self) -> &DemandIndex {
        &self.demand
    }

    /// `true` while another pick is possible.
    pub fn has_budget(&self) -> bool {
        self.picked.len() < self.num_rsus && self.picked.len() < self.grid().cell_count()
    }

    // ── Flow projection ───────────────────────────────────────────────────

    /// `M[start]` plus the propagated flow from all four directions.
    pub fn projected_flow(&self, start: Cell) -> f64 {
        let own = self.occupancy.get(start) as f64;
        DIRECTIONS
            .iter()
            .map(|&dir| self.propagate_flow(start, dir))
            .fold(own, |acc, f| acc + f)
    }

    /// Walk from `start` in `dir` to the grid edge, accumulating
    /// compound-weighted occupancy.
    fn propagate_flow(&self, start: Cell, (dr, dc): (i64, i64)) -> f64 {
        let grid = self.grid();
        let migration = self.model.migration();
        let mut row = start.row as i64 + dr;
        let mut col = start.col as i64 + dc;
        let mut compound = 1.0;
        let mut flow = 0.0;
        while grid.contains(row, col) {
            let reached = Cell::new(row as u32, col as u32);
            compound *= migration.get(row as usize, col as usize);
            flow += self.occupancy.get(reached) as f64 * compound;
            row += dr;
            col += dc;
        }
        flow
    }

    /// Flow of every cell in row-major order.
    pub fn location_flows(&self) -> Vec<f64> {
        let first = self.picked.is_empty();
        self.grid()
            .cells()
            .enumerate()
            .map(|(i, cell)| {
                if first {
                    self.occupancy.get(cell) as f64
                } else if self.is_picked[i] {
                    PICKED
                } else {
                    self.projected_flow(cell)
                }
            })
            .collect()
    }

    // ── Picking ───────────────────────────────────────────────────────────

    /// Perform one pick.  Returns the picked cell, or `None` when the
    /// budget is exhausted or every cell is taken.
    pub fn pick_next(&mut self, deployment: &mut Deployment) -> PlaceResult<Option<Cell>> {
        if !self.has_budget() {
            return Ok(None);
        }
        let flows = self.location_flows();
        let Some(best) = argmax_unpicked(&flows, &self.is_picked) else {
            return Ok(None);
        };
        let cell = self.grid().cell_at(CellIndex(best as u32));

        let point = self.resolver.resolve(cell)?;
        let added = deployment.insert_unique(point);
        self.is_picked[best] = true;
        self.picked.push(cell);

        let served = self.demand.remove_agents_in(cell);
        self.occupancy = self.demand.occupancy(self.grid().size());

        debug!(
            "pmcp-b: pick {} {cell} flow {:.3} at {point}{}, served {served} agents, {} remain",
            self.picked.len(),
            flows[best],
            if added { "" } else { " (duplicate position)" },
            self.demand.agent_count(),
        );
        Ok(Some(cell))
    }

    /// Run the greedy loop from a fresh working state.
    pub fn select(&mut self) -> PlaceResult<Deployment> {
        self.reset();
        let mut deployment = Deployment::with_capacity(self.num_rsus);
        while self.pick_next(&mut deployment)?.is_some() {}
        Ok(deployment)
    }
}

/// Index of the first maximum among unpicked entries.
fn argmax_unpicked(flows: &[f64], picked: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &f) in flows.iter().enumerate() {
        if picked[i] {
            continue;
        }
        match best {
            Some((_, b)) if f <= b => {}
            _ => best = Some((i, f)),
        }
    }
    best.map(|(i, _)| i)
}

impl PlacementStrategy for PmcpB<'_> {
    fn name(&self) -> &'static str {
        "pmcp_b"
    }

    fn place(&mut self, _evaluator: &mut dyn Evaluator) -> PlaceResult<Placement> {
        Ok(Placement::unscored(self.select()?))
    }
}
