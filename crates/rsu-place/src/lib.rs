//! `rsu-place` — RSU placement strategies.
//!
//! Every strategy implements [`PlacementStrategy`] and produces a
//! [`Placement`]; [`run_strategy`] times it, scores it with an
//! [`Evaluator`](rsu_eval::Evaluator) if it did not score itself, and wraps
//! the result in a [`StrategyReport`].
//!
//! # Crate layout
//!
//! | Module              | Contents                                                |
//! |---------------------|---------------------------------------------------------|
//! | [`strategy`]        | `PlacementStrategy`, `Placement`, `StrategyReport`      |
//! | [`all_junctions`]   | `AllJunctions` — every junction gets an RSU              |
//! | [`density`]         | `DensityBased` — densest cells with radius separation   |
//! | [`pmcp`]            | `PmcpB` — greedy flow-capture with demand removal       |
//! | [`ga`]              | `GeneticSearch`, `Fitness`, evaluator/observer traits   |
//! | [`cache`]           | `FitnessCache` — genotype → metrics memo                |
//! | [`garsud`]          | `Garsud` — GA over cell-index genotypes                 |
//! | [`error`]           | `PlaceError`, `PlaceResult<T>`                          |
//!
//! Strategies never mutate the [`GridModel`](rsu_grid::GridModel) they are
//! given; PMCP-B works on its own copy of the demand state.

pub mod all_junctions;
pub mod cache;
pub mod density;
pub mod error;
pub mod ga;
pub mod garsud;
pub mod pmcp;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use all_junctions::AllJunctions;
pub use cache::FitnessCache;
pub use density::DensityBased;
pub use error::{PlaceError, PlaceResult};
pub use ga::{
    Fitness, FitnessEvaluator, GaParams, Generation, GenerationObserver, GeneticSearch, Genotype,
    NoopObserver, SearchOutcome,
};
pub use garsud::{decode, fitness_of, Garsud, GenerationRecord, PipelineFitness};
pub use pmcp::PmcpB;
pub use strategy::{run_strategy, Placement, PlacementStrategy, StrategyReport};
