//! The evaluation contract shared by every strategy.

use serde::{Deserialize, Serialize};

use rsu_core::Deployment;

use crate::EvalResult;

/// Measured quality of one deployment.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Share of agent→RSU link records within the RSU radius, in `[0, 100]`.
    pub coverage:     f64,
    /// Mean agent→RSU link distance in metres; NaN when there were no links.
    pub avg_distance: f64,
}

impl Metrics {
    pub fn new(coverage: f64, avg_distance: f64) -> Self {
        Self { coverage, avg_distance }
    }
}

/// An expensive, side-effecting oracle scoring deployments.
///
/// Calls are strictly sequential: `&mut self` rules out overlapping
/// evaluations, and implementations may reuse scratch files between calls.
pub trait Evaluator {
    fn evaluate(&mut self, deployment: &Deployment) -> EvalResult<Metrics>;
}

impl<E: Evaluator + ?Sized> Evaluator for &mut E {
    fn evaluate(&mut self, deployment: &Deployment) -> EvalResult<Metrics> {
        (**self).evaluate(deployment)
    }
}
