//! GARSUD: genetic search over cell-index genotypes.
//!
//! A genotype is `num_rsus` flat cell indices.  Decoding maps every gene to
//! its cell, then through the junction resolver, keeping duplicates.  Each
//! distinct genotype reaches the evaluation pipeline at most once per run;
//! repeats are served from the [`FitnessCache`].

use log::{debug, info};
use serde::Serialize;

use rsu_core::{CellIndex, CoreError, Deployment, GarsudConfig, Objective, RunParams, SearchRng};
use rsu_eval::{Evaluator, Metrics};
use rsu_spatial::{CellResolver, Grid, JunctionSet};

use crate::{
    FitnessCache, Fitness, FitnessEvaluator, GaParams, GenerationObserver, GeneticSearch,
    Placement, PlaceResult, PlacementStrategy,
};

// ── Decoding and scoring ──────────────────────────────────────────────────────

/// Genotype → deployment, one RSU per gene, in gene order.
///
/// # Panics
/// Panics if a gene is not a valid cell index; the search never produces
/// one.
pub fn decode(resolver: &CellResolver<'_>, genotype: &[u32]) -> PlaceResult<Deployment> {
    let cells = resolver.grid().cell_count();
    let mut deployment = Deployment::with_capacity(genotype.len());
    for &gene in genotype {
        assert!((gene as usize) < cells, "gene {gene} outside [0, {cells})");
        deployment.push(resolver.resolve_index(CellIndex(gene))?);
    }
    Ok(deployment)
}

/// The fitness the search maximizes for `metrics`.
pub fn fitness_of(objective: Objective, metrics: Metrics) -> Fitness {
    match objective {
        Objective::Coverage => Fitness::Scalar(metrics.coverage),
        Objective::AvgDistance => Fitness::Scalar(-metrics.avg_distance),
        Objective::Both => Fitness::Pair(metrics.coverage, -metrics.avg_distance),
    }
}

/// Recover reportable metrics from the winning fitness.  A single
/// objective only carries one metric; the other comes from the cache.
fn result_metrics(objective: Objective, fitness: Fitness, cached: Option<Metrics>) -> Metrics {
    match (objective, fitness) {
        (Objective::Both, Fitness::Pair(coverage, neg_distance)) => Metrics::new(coverage, -neg_distance),
        (Objective::Coverage, Fitness::Scalar(coverage)) => {
            Metrics::new(coverage, cached.map_or(f64::NAN, |m| m.avg_distance))
        }
        (Objective::AvgDistance, Fitness::Scalar(neg_distance)) => {
            Metrics::new(cached.map_or(0.0, |m| m.coverage), -neg_distance)
        }
        _ => cached.unwrap_or(Metrics::new(0.0, f64::NAN)),
    }
}

/// [`FitnessEvaluator`] that decodes, consults the cache, and only runs the
/// pipeline on a miss.
pub struct PipelineFitness<'a, E: Evaluator + ?Sized> {
    resolver:  CellResolver<'a>,
    objective: Objective,
    cache:     &'a mut FitnessCache,
    evaluator: &'a mut E,
}

impl<'a, E: Evaluator + ?Sized> PipelineFitness<'a, E> {
    pub fn new(
        resolver:  CellResolver<'a>,
        objective: Objective,
        cache:     &'a mut FitnessCache,
        evaluator: &'a mut E,
    ) -> Self {
        Self { resolver, objective, cache, evaluator }
    }
}

impl<E: Evaluator + ?Sized> FitnessEvaluator for PipelineFitness<'_, E> {
    fn evaluate(&mut self, genotype: &[u32]) -> PlaceResult<Fitness> {
        let resolver = self.resolver;
        let evaluator = &mut *self.evaluator;
        let metrics = self.cache.get_or_try_insert_with(genotype, || -> PlaceResult<Metrics> {
            let deployment = decode(&resolver, genotype)?;
            Ok(evaluator.evaluate(&deployment)?)
        })?;
        Ok(fitness_of(self.objective, metrics))
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// `(generation, best fitness)` row of the results log.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GenerationRecord {
    pub generation:        usize,
    pub fitness:           f64,
    /// Second component of a dual-objective fitness.
    pub fitness_secondary: Option<f64>,
}

impl GenerationRecord {
    pub fn new(generation: usize, fitness: Fitness) -> Self {
        Self { generation, fitness: fitness.primary(), fitness_secondary: fitness.secondary() }
    }
}

struct ProgressLog<'a> {
    resolver: CellResolver<'a>,
    history:  &'a mut Vec<GenerationRecord>,
    latest:   &'a mut Option<Deployment>,
}

impl GenerationObserver for ProgressLog<'_> {
    fn on_generation(&mut self, generation: usize, best: &[u32], fitness: Fitness) -> PlaceResult<()> {
        let deployment = decode(&self.resolver, best)?;
        debug!("garsud generation {generation}: {fitness} with {:?}", deployment.points());
        self.history.push(GenerationRecord::new(generation, fitness));
        *self.latest = Some(deployment);
        Ok(())
    }
}

// ── Garsud ────────────────────────────────────────────────────────────────────

pub struct Garsud<'a> {
    resolver:        CellResolver<'a>,
    num_rsus:        usize,
    config:          GarsudConfig,
    cache:           FitnessCache,
    history:         Vec<GenerationRecord>,
    last_generation: Option<Deployment>,
}

impl<'a> Garsud<'a> {
    pub fn new(grid: Grid, junctions: &'a JunctionSet, params: &RunParams, config: &GarsudConfig) -> Self {
        Self {
            resolver:        CellResolver::new(grid, junctions),
            num_rsus:        params.num_rsus as usize,
            config:          config.clone(),
            cache:           FitnessCache::new(),
            history:         Vec::new(),
            last_generation: None,
        }
    }

    pub fn resolver(&self) -> &CellResolver<'a> {
        &self.resolver
    }

    /// Cache of the most recent run.
    pub fn cache(&self) -> &FitnessCache {
        &self.cache
    }

    /// Pipeline executions in the most recent run.
    pub fn pipeline_calls(&self) -> usize {
        self.cache.misses()
    }

    pub fn cache_hits(&self) -> usize {
        self.cache.hits()
    }

    /// Per-generation best fitness of the most recent run.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Decoded best individual of the final generation of the most recent
    /// run.  `None` before any run or when `num_generations` is 0.
    pub fn last_generation_deployment(&self) -> Option<&Deployment> {
        self.last_generation.as_ref()
    }

    fn ga_params(&self) -> PlaceResult<GaParams> {
        let cells = self.resolver.grid().cell_count();
        let gene_space = u32::try_from(cells)
            .map_err(|_| CoreError::Config(format!("garsud: {cells} cells exceed the gene range")))?;
        Ok(GaParams::from_config(&self.config, self.num_rsus, gene_space))
    }
}

impl PlacementStrategy for Garsud<'_> {
    fn name(&self) -> &'static str {
        "garsud"
    }

    fn place(&mut self, evaluator: &mut dyn Evaluator) -> PlaceResult<Placement> {
        let objective = self.config.objective()?;
        let mut search = GeneticSearch::new(self.ga_params()?, SearchRng::new(self.config.seed))?;
        self.cache = FitnessCache::new();
        self.history.clear();
        self.last_generation = None;

        let outcome = {
            let mut fitness = PipelineFitness::new(self.resolver, objective, &mut self.cache, evaluator);
            let mut progress = ProgressLog {
                resolver: self.resolver,
                history:  &mut self.history,
                latest:   &mut self.last_generation,
            };
            search.run(&mut fitness, &mut progress)?
        };

        let deployment = decode(&self.resolver, &outcome.best)?;
        let metrics = result_metrics(objective, outcome.fitness, self.cache.peek(&outcome.best));
        info!(
            "garsud: best {} after {} generations, {} pipeline runs, {} cache hits",
            outcome.fitness,
            outcome.generations,
            self.pipeline_calls(),
            self.cache_hits(),
        );
        Ok(Placement::scored(deployment, metrics))
    }
}
