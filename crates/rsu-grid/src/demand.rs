//! Agent ↔ cell visitation index.
//!
//! Two mirrored maps are kept in lockstep:
//!
//! ```text
//! agent_paths[a] = { cells a visited }
//! cell_agents[c] = { agents seen in c }
//! a ∈ cell_agents[c]  ⇔  c ∈ agent_paths[a]
//! ```
//!
//! Every mutation goes through methods that update both sides, so the
//! invariant holds after any sequence of calls.

use rustc_hash::{FxHashMap, FxHashSet};

use rsu_core::AgentId;
use rsu_spatial::Cell;

use crate::OccupancyMatrix;

#[derive(Clone, Debug, Default)]
pub struct DemandIndex {
    agent_paths: FxHashMap<AgentId, FxHashSet<Cell>>,
    cell_agents: FxHashMap<Cell, FxHashSet<AgentId>>,
}

impl DemandIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `agent` was seen in `cell`.  Repeat visits are no-ops.
    pub fn record(&mut self, agent: AgentId, cell: Cell) {
        self.agent_paths.entry(agent).or_default().insert(cell);
        self.cell_agents.entry(cell).or_default().insert(agent);
    }

    /// Number of agents still present.
    pub fn agent_count(&self) -> usize {
        self.agent_paths.len()
    }

    pub fn contains_agent(&self, agent: AgentId) -> bool {
        self.agent_paths.contains_key(&agent)
    }

    /// Distinct cells visited by `agent`.
    pub fn path(&self, agent: AgentId) -> Option<&FxHashSet<Cell>> {
        self.agent_paths.get(&agent)
    }

    /// Agents seen in `cell`.
    pub fn agents_in(&self, cell: Cell) -> impl Iterator<Item = AgentId> + '_ {
        self.cell_agents.get(&cell).into_iter().flatten().copied()
    }

    /// Remove `agent` from both maps.  Returns `false` if it was absent.
    pub fn remove_agent(&mut self, agent: AgentId) -> bool {
        let Some(path) = self.agent_paths.remove(&agent) else {
            return false;
        };
        for cell in path {
            if let Some(agents) = self.cell_agents.get_mut(&cell) {
                agents.remove(&agent);
                if agents.is_empty() {
                    self.cell_agents.remove(&cell);
                }
            }
        }
        true
    }

    /// Remove every agent that ever visited `cell`.  Returns how many were
    /// removed.
    pub fn remove_agents_in(&mut self, cell: Cell) -> usize {
        let served: Vec<AgentId> = self.agents_in(cell).collect();
        served.into_iter().filter(|&a| self.remove_agent(a)).count()
    }

    /// Recompute `M` from scratch out of the agent paths.
    pub fn occupancy(&self, size: u32) -> OccupancyMatrix {
        OccupancyMatrix::from_cell_sets(size, self.agent_paths.values())
    }

    /// Check the mirror invariant in both directions.
    pub fn is_consistent(&self) -> bool {
        let forward = self.agent_paths.iter().all(|(agent, cells)| {
            cells
                .iter()
                .all(|c| self.cell_agents.get(c).is_some_and(|s| s.contains(agent)))
        });
        let backward = self.cell_agents.iter().all(|(cell, agents)| {
            agents
                .iter()
                .all(|a| self.agent_paths.get(a).is_some_and(|s| s.contains(cell)))
        });
        forward && backward
    }
}
