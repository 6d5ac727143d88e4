//! Sweep execution: one grid model per grid size, every enabled strategy
//! per run.

use anyhow::Result;
use log::{error, info};
use serde::Serialize;

use rsu_core::{DeployConfig, RunParams};
use rsu_eval::SimulatorPipeline;
use rsu_grid::GridModel;
use rsu_place::{
    run_strategy, AllJunctions, DensityBased, Garsud, PlaceResult, PlacementStrategy, PmcpB,
    StrategyReport,
};
use rsu_spatial::{Grid, JunctionSet};

/// One row of `garsud_generations.csv`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationRow {
    pub grid_size:         u32,
    pub num_rsus:          u32,
    pub rsu_radius:        f64,
    pub generation:        usize,
    pub fitness:           f64,
    pub fitness_secondary: Option<f64>,
}

#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub reports:     Vec<StrategyReport>,
    pub generations: Vec<GenerationRow>,
    /// Strategy runs that returned an error.
    pub failures:    usize,
}

impl SweepOutcome {
    fn record(&mut self, name: &str, params: RunParams, result: PlaceResult<StrategyReport>) {
        match result {
            Ok(report) => self.reports.push(report),
            Err(e) => {
                error!(
                    "{name} failed (grid {}, rsus {}, radius {}): {e}",
                    params.grid_size, params.num_rsus, params.rsu_radius
                );
                self.failures += 1;
            }
        }
    }
}

pub fn run_sweep(config: &DeployConfig, junctions: &JunctionSet) -> Result<SweepOutcome> {
    let mut outcome = SweepOutcome::default();
    let mut model: Option<GridModel> = None;

    for params in config.sweep() {
        if model.as_ref().is_none_or(|m| m.grid().size() != params.grid_size) {
            let grid = Grid::from_network(&config.network, params.grid_size)?;
            model = Some(GridModel::load_or_empty(grid, &config.trace_csv));
        }
        let Some(current) = model.as_ref() else { continue };
        let grid = *current.grid();

        let spacing = grid.spacing_report(params.rsu_radius);
        info!(
            "run: grid {g}x{g}, {} RSUs, radius {}; one-cell radius ({:.1}, {:.1}), matching grid size ({:.1}, {:.1})",
            params.num_rsus,
            params.rsu_radius,
            spacing.diagonal_radius.0,
            spacing.diagonal_radius.1,
            spacing.matching_grid_size.0,
            spacing.matching_grid_size.1,
            g = params.grid_size,
        );

        let mut pipeline = SimulatorPipeline::new(config.pipeline.clone(), params.rsu_radius);
        let toggles = &config.algorithms;

        if toggles.all_junctions {
            let mut s = AllJunctions::new(junctions);
            outcome.record(s.name(), params, run_strategy(&mut s, params, &mut pipeline));
        }
        if toggles.density_based {
            let mut s = DensityBased::new(current, junctions, &params);
            outcome.record(s.name(), params, run_strategy(&mut s, params, &mut pipeline));
        }
        if toggles.pmcp_b {
            let mut s = PmcpB::new(current, junctions, &params);
            outcome.record(s.name(), params, run_strategy(&mut s, params, &mut pipeline));
        }
        if toggles.garsud {
            let mut s = Garsud::new(grid, junctions, &params, &config.garsud);
            let result = run_strategy(&mut s, params, &mut pipeline);
            outcome.generations.extend(s.history().iter().map(|r| GenerationRow {
                grid_size:         params.grid_size,
                num_rsus:          params.num_rsus,
                rsu_radius:        params.rsu_radius,
                generation:        r.generation,
                fitness:           r.fitness,
                fitness_secondary: r.fitness_secondary,
            }));
            outcome.record(s.name(), params, result);
        }
        info!("pipeline executed {} times for this run", pipeline.runs());
    }
    Ok(outcome)
}
