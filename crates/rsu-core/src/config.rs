//! Run configuration.
//!
//! One [`DeployConfig`] is deserialized by the application (JSON via
//! `serde_json`), validated once with [`DeployConfig::validate`], and then
//! passed by reference into every strategy constructor.  Nothing in the
//! workspace reads configuration from disk on its own.
//!
//! # Sweeps
//!
//! `grid_size`, `num_rsus` and `rsu_radius` accept either a single value or a
//! list.  [`DeployConfig::sweep`] expands the cartesian product in the order
//! grid size → radius → RSU count (innermost), yielding one [`RunParams`] per
//! simulation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── OneOrMany ─────────────────────────────────────────────────────────────────

/// A configuration value given either as a scalar or as a list of scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    /// All values in declaration order.
    pub fn values(&self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v.clone()],
            OneOrMany::Many(vs) => vs.clone(),
        }
    }
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Deployment-wide parameters (possibly swept).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub grid_size:  OneOrMany<u32>,
    pub num_rsus:   OneOrMany<u32>,
    /// RSU reach in metres.  Used for DensityBased separation and for the
    /// pipeline's coverage threshold.
    pub rsu_radius: OneOrMany<f64>,
}

/// Road-network geometry extracted from the network file ahead of time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub x_min: f64,
    pub x_max: f64,
    #[serde(default)]
    pub y_min: f64,
    pub y_max: f64,
    /// Network origin offset; subtracted from every snapped junction.
    #[serde(default)]
    pub x_offset: f64,
    #[serde(default)]
    pub y_offset: f64,
    /// CSV with header `id,x,y,type`.
    pub junctions_csv: PathBuf,
}

/// Which strategies run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlgorithmToggles {
    #[serde(default)]
    pub all_junctions: bool,
    #[serde(default)]
    pub density_based: bool,
    #[serde(default)]
    pub pmcp_b:        bool,
    #[serde(default)]
    pub garsud:        bool,
}

/// Genetic-search hyperparameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GarsudConfig {
    pub num_generations:       usize,
    pub num_parents_mating:    usize,
    pub sol_per_pop:           usize,
    /// Selected parents copied unchanged into the next generation.
    pub keep_parents:          usize,
    pub optimize_coverage:     bool,
    pub optimize_avg_distance: bool,
    pub seed:                  u64,
}

impl Default for GarsudConfig {
    fn default() -> Self {
        Self {
            num_generations:       20,
            num_parents_mating:    4,
            sol_per_pop:           8,
            keep_parents:          1,
            optimize_coverage:     true,
            optimize_avg_distance: false,
            seed:                  42,
        }
    }
}

impl GarsudConfig {
    /// The objective implied by the two optimization flags.
    pub fn objective(&self) -> CoreResult<Objective> {
        match (self.optimize_coverage, self.optimize_avg_distance) {
            (true, true) => Ok(Objective::Both),
            (true, false) => Ok(Objective::Coverage),
            (false, true) => Ok(Objective::AvgDistance),
            (false, false) => Err(CoreError::Config(
                "garsud: at least one of optimize_coverage / optimize_avg_distance must be set".into(),
            )),
        }
    }
}

/// One external stage of the evaluation pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageConfig {
    pub name:    String,
    pub program: PathBuf,
    #[serde(default)]
    pub args:    Vec<String>,
}

/// External simulator pipeline settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Where the candidate deployment is written before the stages run.
    pub deployment_csv:       PathBuf,
    /// Link table produced by the last stage.
    pub link_table_csv:       PathBuf,
    /// First id assigned to deployed RSUs; trace agents must stay below it.
    #[serde(default = "default_agent_id_base")]
    pub agent_id_base:        u32,
    /// Run in order: prepare positions, prepare links, run simulator.
    #[serde(default)]
    pub stages:               Vec<StageConfig>,
    /// Log per-stage wall time at `info` instead of `debug`.
    #[serde(default)]
    pub track_execution_time: bool,
}

fn default_agent_id_base() -> u32 {
    200_000
}

// ── DeployConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration for one optimizer invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeployConfig {
    pub general:    GeneralConfig,
    pub network:    NetworkConfig,
    /// CSV with header `time_step,agent_id,x,y`.
    pub trace_csv:  PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub algorithms: AlgorithmToggles,
    #[serde(default)]
    pub garsud:     GarsudConfig,
    pub pipeline:   PipelineConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl DeployConfig {
    /// Check every constraint the strategies rely on.
    pub fn validate(&self) -> CoreResult<()> {
        let grid_sizes = self.general.grid_size.values();
        let num_rsus = self.general.num_rsus.values();
        let radii = self.general.rsu_radius.values();

        if grid_sizes.is_empty() || num_rsus.is_empty() || radii.is_empty() {
            return Err(CoreError::Config(
                "general: grid_size, num_rsus and rsu_radius need at least one value".into(),
            ));
        }
        if let Some(g) = grid_sizes.iter().find(|&&g| g == 0) {
            return Err(CoreError::Config(format!("general: grid_size must be positive, got {g}")));
        }
        if num_rsus.contains(&0) {
            return Err(CoreError::Config("general: num_rsus must be positive".into()));
        }
        if let Some(r) = radii.iter().find(|r| !r.is_finite() || **r < 0.0) {
            return Err(CoreError::Config(format!(
                "general: rsu_radius must be finite and non-negative, got {r}"
            )));
        }

        let net = &self.network;
        if net.x_max < net.x_min || net.y_max < net.y_min {
            return Err(CoreError::Config(format!(
                "network: inverted bounds x=[{}, {}] y=[{}, {}]",
                net.x_min, net.x_max, net.y_min, net.y_max
            )));
        }

        if self.algorithms.garsud {
            self.validate_garsud()?;
        }
        Ok(())
    }

    fn validate_garsud(&self) -> CoreResult<()> {
        let ga = &self.garsud;
        ga.objective()?;
        if ga.sol_per_pop < 2 {
            return Err(CoreError::Config(format!(
                "garsud: sol_per_pop must be at least 2, got {}",
                ga.sol_per_pop
            )));
        }
        if ga.num_parents_mating == 0 || ga.num_parents_mating > ga.sol_per_pop {
            return Err(CoreError::Config(format!(
                "garsud: num_parents_mating must be in 1..={}, got {}",
                ga.sol_per_pop, ga.num_parents_mating
            )));
        }
        if ga.keep_parents > ga.num_parents_mating {
            return Err(CoreError::Config(format!(
                "garsud: keep_parents ({}) exceeds num_parents_mating ({})",
                ga.keep_parents, ga.num_parents_mating
            )));
        }
        Ok(())
    }

    /// Expand the swept parameters into one [`RunParams`] per run.
    pub fn sweep(&self) -> Vec<RunParams> {
        let mut runs = Vec::new();
        for grid_size in self.general.grid_size.values() {
            for rsu_radius in self.general.rsu_radius.values() {
                for num_rsus in self.general.num_rsus.values() {
                    runs.push(RunParams { grid_size, num_rsus, rsu_radius });
                }
            }
        }
        runs
    }
}

// ── RunParams ─────────────────────────────────────────────────────────────────

/// The scalar parameters of a single run after sweep expansion.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    pub grid_size:  u32,
    pub num_rsus:   u32,
    pub rsu_radius: f64,
}

impl RunParams {
    /// Number of cells in the grid (`grid_size²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }
}

// ── Objective ─────────────────────────────────────────────────────────────────

/// What the genetic search maximizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Coverage percentage.
    Coverage,
    /// Negated average RSU distance.
    AvgDistance,
    /// `(coverage, -avg_distance)`, compared lexicographically.
    Both,
}
