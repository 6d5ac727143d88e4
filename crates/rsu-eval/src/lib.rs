//! `rsu-eval` — turns a candidate deployment into `(coverage, avg_distance)`.
//!
//! Strategies only see the [`Evaluator`] trait.  The shipped implementation,
//! [`SimulatorPipeline`], drives an external network simulator:
//!
//! ```text
//! deployment ─▶ deployment.csv ─▶ stage 1 (positions) ─▶ stage 2 (links)
//!            ─▶ stage 3 (simulate) ─▶ link table ─▶ Metrics
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`evaluator`]  | `Evaluator` trait, `Metrics`                          |
//! | [`deployment`] | `write_deployment_csv`, `write_deployment`            |
//! | [`links`]      | `LinkRecord`, link-table reading, `metrics_from_links`|
//! | [`pipeline`]   | `SimulatorPipeline`, `StageReport`                    |
//! | [`error`]      | `EvalError`, `EvalResult<T>`                          |

pub mod deployment;
pub mod error;
pub mod evaluator;
pub mod links;
pub mod pipeline;


pub use deployment::{write_deployment, write_deployment_csv};
pub use error::{EvalError, EvalResult};
pub use evaluator::{Evaluator, Metrics};
pub use links::{metrics_from_links, read_link_table, read_link_table_reader, LinkRecord};
pub use pipeline::{SimulatorPipeline, StageReport};
