//! The strategy contract and per-run reports.

use std::time::Instant;

use log::info;
use serde::Serialize;

use rsu_core::{Deployment, RunParams};
use rsu_eval::{Evaluator, Metrics};

use crate::PlaceResult;

/// What a strategy hands back.
#[derive(Clone, Debug)]
pub struct Placement {
    pub deployment: Deployment,
    /// `Some` when the strategy already scored the deployment itself.
    pub metrics:    Option<Metrics>,
}

impl Placement {
    pub fn unscored(deployment: Deployment) -> Self {
        Self { deployment, metrics: None }
    }

    pub fn scored(deployment: Deployment, metrics: Metrics) -> Self {
        Self { deployment, metrics: Some(metrics) }
    }
}

/// A placement algorithm.
///
/// `evaluator` is available to strategies that search over deployments;
/// constructive strategies ignore it and return an unscored placement.
pub trait PlacementStrategy {
    /// Short, stable name used in reports and logs.
    fn name(&self) -> &'static str;

    fn place(&mut self, evaluator: &mut dyn Evaluator) -> PlaceResult<Placement>;
}

/// One strategy's result for one set of run parameters.
#[derive(Clone, Debug, Serialize)]
pub struct StrategyReport {
    pub algorithm:        String,
    pub params:           RunParams,
    pub picked_junctions: Deployment,
    pub coverage:         f64,
    pub avg_distance:     f64,
    /// Wall time of placement plus evaluation.
    pub elapsed_secs:     f64,
}

/// Place, score if needed, and report.
pub fn run_strategy(
    strategy:  &mut dyn PlacementStrategy,
    params:    RunParams,
    evaluator: &mut dyn Evaluator,
) -> PlaceResult<StrategyReport> {
    let started = Instant::now();
    let placement = strategy.place(evaluator)?;
    let metrics = match placement.metrics {
        Some(m) => m,
        None => evaluator.evaluate(&placement.deployment)?,
    };
    let elapsed_secs = started.elapsed().as_secs_f64();

    info!(
        "{} (grid {}, rsus {}, radius {}): {} RSUs, coverage {:.2}%, avg distance {:.2}, {:.2}s",
        strategy.name(),
        params.grid_size,
        params.num_rsus,
        params.rsu_radius,
        placement.deployment.len(),
        metrics.coverage,
        metrics.avg_distance,
        elapsed_secs,
    );

    Ok(StrategyReport {
        algorithm: strategy.name().to_string(),
        params,
        picked_junctions: placement.deployment,
        coverage: metrics.coverage,
        avg_distance: metrics.avg_distance,
        elapsed_secs,
    })
}
