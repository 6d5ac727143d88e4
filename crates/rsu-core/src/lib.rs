//! `rsu-core` — foundational types for the RSU deployment optimizer.
//!
//! This crate is a dependency of every other `rsu-*` crate.  It has no
//! `rsu-*` dependencies and only small external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellIndex`                                |
//! | [`geo`]         | `Point` (planar metres), Euclidean distance           |
//! | [`deployment`]  | `Deployment` — an ordered set of RSU positions        |
//! | [`rng`]         | `SearchRng` (seeded `SmallRng` wrapper)               |
//! | [`config`]      | `DeployConfig`, `RunParams`, `Objective`              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod deployment;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AlgorithmToggles, DeployConfig, GarsudConfig, GeneralConfig, NetworkConfig, Objective,
    OneOrMany, PipelineConfig, RunParams, StageConfig,
};
pub use deployment::Deployment;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{AgentId, CellIndex};
pub use rng::SearchRng;
