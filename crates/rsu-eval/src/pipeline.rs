//! External simulator driver.
//!
//! One evaluation is:
//!
//! 1. write the deployment CSV,
//! 2. delete any link table left over from the previous run,
//! 3. run every configured stage in order,
//! 4. read the link table and reduce it to [`Metrics`].
//!
//! A stage that fails to spawn or exits non-zero is logged and the pipeline
//! carries on; later stages may still produce a usable table.  Only a
//! missing link table is an error.

use std::process::Command;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use rsu_core::{Deployment, PipelineConfig, StageConfig};

use crate::{
    metrics_from_links, read_link_table, write_deployment_csv, EvalError, EvalResult, Evaluator,
    Metrics,
};

/// Outcome of one stage of the most recent evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct StageReport {
    pub name:    String,
    pub success: bool,
    pub elapsed: Duration,
}

/// [`Evaluator`] backed by external simulator processes.
pub struct SimulatorPipeline {
    config:     PipelineConfig,
    rsu_radius: f64,
    runs:       usize,
    last:       Vec<StageReport>,
}

impl SimulatorPipeline {
    pub fn new(config: PipelineConfig, rsu_radius: f64) -> Self {
        Self { config, rsu_radius, runs: 0, last: Vec::new() }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn rsu_radius(&self) -> f64 {
        self.rsu_radius
    }

    /// Number of times the pipeline has been executed.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Per-stage outcomes of the most recent evaluation.
    pub fn last_stages(&self) -> &[StageReport] {
        &self.last
    }

    fn remove_stale_link_table(&self) -> EvalResult<()> {
        match std::fs::remove_file(&self.config.link_table_csv) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn run_stage(&self, stage: &StageConfig) -> StageReport {
        let started = Instant::now();
        let success = match Command::new(&stage.program).args(&stage.args).output() {
            Ok(out) if out.status.success() => true,
            Ok(out) => {
                warn!(
                    "stage '{}' exited with {:?}\nstdout: {}\nstderr: {}",
                    stage.name,
                    out.status.code(),
                    String::from_utf8_lossy(&out.stdout).trim_end(),
                    String::from_utf8_lossy(&out.stderr).trim_end(),
                );
                false
            }
            Err(e) => {
                warn!("stage '{}' could not be started ({}): {e}", stage.name, stage.program.display());
                false
            }
        };
        let elapsed = started.elapsed();
        if self.config.track_execution_time {
            info!("stage '{}' took {:.3}s", stage.name, elapsed.as_secs_f64());
        } else {
            debug!("stage '{}' took {:.3}s", stage.name, elapsed.as_secs_f64());
        }
        StageReport { name: stage.name.clone(), success, elapsed }
    }
}

impl Evaluator for SimulatorPipeline {
    fn evaluate(&mut self, deployment: &Deployment) -> EvalResult<Metrics> {
        self.runs += 1;
        let started = Instant::now();

        write_deployment_csv(&self.config.deployment_csv, deployment, self.config.agent_id_base)?;
        self.remove_stale_link_table()?;

        let reports: Vec<StageReport> =
            self.config.stages.iter().map(|s| self.run_stage(s)).collect();
        self.last = reports;

        let path = &self.config.link_table_csv;
        if !path.exists() {
            return Err(EvalError::PipelineExecutionFailed(format!(
                "no link table at {} after {} stages",
                path.display(),
                self.config.stages.len()
            )));
        }
        let rows = read_link_table(path)?;
        let metrics = metrics_from_links(&rows, self.config.agent_id_base, self.rsu_radius);

        debug!(
            "pipeline run {}: {} RSUs, {} link rows, coverage {:.2}%, avg distance {:.2} ({:.3}s)",
            self.runs,
            deployment.len(),
            rows.len(),
            metrics.coverage,
            metrics.avg_distance,
            started.elapsed().as_secs_f64(),
        );
        Ok(metrics)
    }
}
