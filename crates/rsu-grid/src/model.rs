//! The grid model and its builder.

use std::path::Path;

use log::{info, warn};
use rustc_hash::FxHashMap;

use rsu_core::{AgentId, Point};
use rsu_spatial::{Cell, Grid};

use crate::{
    load_trace_csv, DemandIndex, MigrationCounts, MigrationMatrix, OccupancyMatrix, Trace,
    TrajectoryRecord,
};

// ── GridModel ─────────────────────────────────────────────────────────────────

/// Occupancy `M`, migration `P` and the visitation index for one grid.
///
/// Read-only once built.  Strategies that need to mutate demand take their
/// own copy with [`working_demand`](Self::working_demand).
#[derive(Clone, Debug)]
pub struct GridModel {
    grid:         Grid,
    occupancy:    OccupancyMatrix,
    migration:    MigrationMatrix,
    demand:       DemandIndex,
    observations: usize,
}

impl GridModel {
    /// All-zero model: no agents, no transitions.
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            occupancy:    OccupancyMatrix::zeros(grid.size()),
            migration:    MigrationMatrix::zeros(grid.cell_count()),
            demand:       DemandIndex::new(),
            observations: 0,
        }
    }

    pub fn from_trace(grid: Grid, trace: &Trace) -> Self {
        let mut builder = GridModelBuilder::new(grid);
        for step in trace.timesteps() {
            builder.observe_timestep(step);
        }
        builder.build()
    }

    /// Load a CSV trace and build the model.
    ///
    /// A missing or malformed trace is logged and yields
    /// [`GridModel::empty`], so strategies still run (on a degenerate
    /// model) instead of aborting the whole sweep.
    pub fn load_or_empty(grid: Grid, path: &Path) -> Self {
        match load_trace_csv(path) {
            Ok(trace) => Self::from_trace(grid, &trace),
            Err(e) => {
                warn!("trace {} unusable ({e}); continuing with an all-zero model", path.display());
                Self::empty(grid)
            }
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `M`.
    #[inline]
    pub fn occupancy(&self) -> &OccupancyMatrix {
        &self.occupancy
    }

    /// `P`.
    #[inline]
    pub fn migration(&self) -> &MigrationMatrix {
        &self.migration
    }

    #[inline]
    pub fn demand(&self) -> &DemandIndex {
        &self.demand
    }

    /// An owned copy of the visitation index for strategies that remove
    /// served agents.
    pub fn working_demand(&self) -> DemandIndex {
        self.demand.clone()
    }

    /// Number of `(timestep, agent)` observations the model was built from.
    pub fn observations(&self) -> usize {
        self.observations
    }
}

// ── GridModelBuilder ──────────────────────────────────────────────────────────

/// Feed observations in trace order, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rsu_core::{AgentId, Point};
/// use rsu_grid::GridModelBuilder;
/// use rsu_spatial::{Cell, Grid};
///
/// let grid = Grid::new(0.0, 10.0, 0.0, 10.0, 2).unwrap();
/// let mut b = GridModelBuilder::new(grid);
/// b.observe(AgentId(0), Point::new(1.0, 1.0));
/// b.observe(AgentId(0), Point::new(9.0, 9.0));
/// let model = b.build();
/// assert_eq!(model.occupancy().get(Cell::new(1, 1)), 1);
/// assert_eq!(model.migration().get(0, 3), 1.0);
/// ```
pub struct GridModelBuilder {
    grid:         Grid,
    demand:       DemandIndex,
    migration:    MigrationCounts,
    last_cell:    FxHashMap<AgentId, Cell>,
    observations: usize,
}

impl GridModelBuilder {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            demand:       DemandIndex::new(),
            migration:    MigrationCounts::new(grid.cell_count()),
            last_cell:    FxHashMap::default(),
            observations: 0,
        }
    }

    /// Record one observation.  Observations of the same agent must arrive
    /// in time order.
    pub fn observe(&mut self, agent: AgentId, pos: Point) {
        let cell = self.grid.cell_of(pos);
        self.demand.record(agent, cell);
        self.observations += 1;

        if let Some(previous) = self.last_cell.insert(agent, cell) {
            if previous != cell {
                self.migration
                    .increment(self.grid.index(previous), self.grid.index(cell));
            }
        }
    }

    /// Record every observation of one timestep.
    pub fn observe_timestep(&mut self, records: &[TrajectoryRecord]) {
        for r in records {
            self.observe(r.agent_id, r.pos());
        }
    }

    pub fn build(self) -> GridModel {
        let transitions = self.migration.transitions();
        let occupancy = self.demand.occupancy(self.grid.size());
        let migration = self.migration.build();

        info!(
            "grid model {}x{}: {} observations, {} agents, {} transitions, {} migration entries",
            self.grid.size(),
            self.grid.size(),
            self.observations,
            self.demand.agent_count(),
            transitions,
            migration.nnz(),
        );

        GridModel {
            grid: self.grid,
            occupancy,
            migration,
            demand: self.demand,
            observations: self.observations,
        }
    }
}
