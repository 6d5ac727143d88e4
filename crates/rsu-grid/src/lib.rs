//! `rsu-grid` — discretizes vehicle trajectories into a spatial flow model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`trace`]     | `TrajectoryRecord`, `Trace`, CSV loading                  |
//! | [`occupancy`] | `OccupancyMatrix` — distinct agents per cell (`M`)        |
//! | [`migration`] | `MigrationCounts`, `MigrationMatrix` — CSR `P`            |
//! | [`demand`]    | `DemandIndex` — agent → cells and cell → agents           |
//! | [`model`]     | `GridModel`, `GridModelBuilder`                           |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                            |
//!
//! # Model summary
//!
//! ```text
//! for each timestep, for each (agent, x, y):
//!     cell = grid.cell_of(x, y)
//!     record agent ∈ cell, cell ∈ agent
//!     if agent's previous cell exists and differs: P[prev, cell] += 1
//! M[cell] = |agents seen in cell|
//! P[row]  = P[row] / Σ P[row]        (zero rows stay zero)
//! ```

pub mod demand;
pub mod error;
pub mod migration;
pub mod model;
pub mod occupancy;
pub mod trace;


pub use demand::DemandIndex;
pub use error::{ModelError, ModelResult};
pub use migration::{MigrationCounts, MigrationMatrix};
pub use model::{GridModel, GridModelBuilder};
pub use occupancy::OccupancyMatrix;
pub use trace::{load_trace_csv, load_trace_reader, Trace, TrajectoryRecord};
