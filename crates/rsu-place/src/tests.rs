//! Unit tests for rsu-place.
//!
//! Every test uses a hand-built model, the four-corner junction fixture and
//! an in-process evaluator; nothing spawns the simulator.

#[cfg(test)]
mod helpers {
    use rsu_core::{AgentId, Deployment, GarsudConfig, Point, RunParams};
    use rsu_eval::{EvalError, EvalResult, Evaluator, Metrics};
    use rsu_grid::{GridModel, GridModelBuilder};
    use rsu_spatial::{Grid, Junction, JunctionSet};

    /// `size × size` grid over `[0, 10]²`.
    pub fn grid(size: u32) -> Grid {
        Grid::new(0.0, 10.0, 0.0, 10.0, size).unwrap()
    }

    /// Junctions on the four corners of `[0, 10]²`.
    pub fn corner_junctions() -> JunctionSet {
        JunctionSet::new(
            vec![
                Junction::new("a", 0.0, 0.0, "priority"),
                Junction::new("b", 10.0, 0.0, "priority"),
                Junction::new("c", 0.0, 10.0, "priority"),
                Junction::new("d", 10.0, 10.0, "priority"),
            ],
            0.0,
            0.0,
        )
    }

    pub fn no_junctions() -> JunctionSet {
        JunctionSet::new(vec![], 0.0, 0.0)
    }

    pub fn model(grid: Grid, observations: &[(u32, f64, f64)]) -> GridModel {
        let mut b = GridModelBuilder::new(grid);
        for &(agent, x, y) in observations {
            b.observe(AgentId(agent), Point::new(x, y));
        }
        b.build()
    }

    /// 2×2 model with `M = [[2, 1], [1, 1]]`.
    pub fn two_agent_model() -> GridModel {
        model(grid(2), &[
            (0, 1.0, 1.0),
            (1, 2.0, 2.0),
            (1, 2.0, 8.0),
            (0, 8.0, 8.0),
            (1, 8.0, 2.0),
        ])
    }

    pub fn params(grid_size: u32, num_rsus: u32, rsu_radius: f64) -> RunParams {
        RunParams { grid_size, num_rsus, rsu_radius }
    }

    pub fn ga_config(seed: u64) -> GarsudConfig {
        GarsudConfig {
            num_generations:       5,
            num_parents_mating:    3,
            sol_per_pop:           6,
            keep_parents:          1,
            optimize_coverage:     true,
            optimize_avg_distance: false,
            seed,
        }
    }

    /// Coverage grows with distinct positions; distance is the mean `x + y`.
    pub fn distinct_score(d: &Deployment) -> Metrics {
        let mut distinct: Vec<Point> = Vec::new();
        for p in d.iter() {
            if !distinct.contains(p) {
                distinct.push(*p);
            }
        }
        let avg = if d.is_empty() {
            f64::NAN
        } else {
            d.iter().map(|p| p.x + p.y).sum::<f64>() / d.len() as f64
        };
        Metrics::new(25.0 * distinct.len() as f64, avg)
    }

    /// Deterministic in-process evaluator that counts its invocations.
    pub struct CountingEvaluator {
        pub calls: usize,
        score:     fn(&Deployment) -> Metrics,
    }

    impl CountingEvaluator {
        pub fn new() -> Self {
            Self { calls: 0, score: distinct_score }
        }
    }

    impl Evaluator for CountingEvaluator {
        fn evaluate(&mut self, deployment: &Deployment) -> EvalResult<Metrics> {
            self.calls += 1;
            Ok((self.score)(deployment))
        }
    }

    /// Evaluator whose pipeline never produces output.
    pub struct FailingEvaluator;

    impl Evaluator for FailingEvaluator {
        fn evaluate(&mut self, _deployment: &Deployment) -> EvalResult<Metrics> {
            Err(EvalError::PipelineExecutionFailed("no link table".into()))
        }
    }
}

// ── Strategy plumbing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod all_junctions {
    use rsu_core::Point;
    use rsu_spatial::SpatialError;

    use super::helpers::{corner_junctions, no_junctions, params, CountingEvaluator, FailingEvaluator};
    use crate::{run_strategy, AllJunctions, PlaceError, PlacementStrategy};

    #[test]
    fn every_junction_in_sorted_order() {
        let js = corner_junctions();
        let placement = AllJunctions::new(&js).place(&mut CountingEvaluator::new()).unwrap();
        assert_eq!(
            placement.deployment.points(),
            &[Point::new(0.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
        );
        assert!(placement.metrics.is_none());
    }

    #[test]
    fn empty_junction_list_is_surfaced() {
        let js = no_junctions();
        let err = AllJunctions::new(&js).place(&mut CountingEvaluator::new()).unwrap_err();
        assert!(matches!(err, PlaceError::Spatial(SpatialError::NoJunctionsAvailable)));
    }

    #[test]
    fn run_strategy_scores_once() {
        let js = corner_junctions();
        let mut eval = CountingEvaluator::new();
        let report = run_strategy(&mut AllJunctions::new(&js), params(2, 4, 1.0), &mut eval).unwrap();
        assert_eq!(eval.calls, 1);
        assert_eq!(report.algorithm, "all_junctions");
        assert_eq!(report.coverage, 100.0);
        assert_eq!(report.picked_junctions.len(), 4);
        assert!(report.elapsed_secs >= 0.0);
    }

    #[test]
    fn pipeline_failure_reaches_caller() {
        let js = corner_junctions();
        let err = run_strategy(&mut AllJunctions::new(&js), params(2, 4, 1.0), &mut FailingEvaluator)
            .unwrap_err();
        assert!(matches!(err, PlaceError::Eval(_)));
    }
}

// ── DensityBased ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod density {
    use rsu_core::Point;
    use rsu_spatial::{Cell, SpatialError};

    use super::helpers::{corner_junctions, no_junctions, params, two_agent_model};
    use crate::{DensityBased, PlaceError};

    #[test]
    fn ranking_is_stable_descending() {
        let model = two_agent_model();
        let js = corner_junctions();
        let cells: Vec<Cell> = DensityBased::new(&model, &js, &params(2, 2, 1.0))
            .ranking()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn two_by_two_picks_both() {
        let model = two_agent_model();
        let js = corner_junctions();
        let d = DensityBased::new(&model, &js, &params(2, 2, 1.0)).select().unwrap();
        assert_eq!(d.points(), &[Point::new(0.0, 0.0), Point::new(0.0, 10.0)]);
    }

    #[test]
    fn oversized_radius_yields_single_pick() {
        let model = two_agent_model();
        let js = corner_junctions();
        let d = DensityBased::new(&model, &js, &params(2, 4, 100.0)).select().unwrap();
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn separation_is_strictly_greater_than_radius() {
        let model = two_agent_model();
        let js = corner_junctions();
        let d = DensityBased::new(&model, &js, &params(2, 4, 10.0)).select().unwrap();
        // The two neighbours at exactly 10 m are rejected; the far corner is not.
        assert_eq!(d.points(), &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        for (i, a) in d.iter().enumerate() {
            for b in d.iter().skip(i + 1) {
                assert!(a.distance(*b) > 10.0);
            }
        }
    }

    #[test]
    fn empty_junction_list_is_surfaced() {
        let model = two_agent_model();
        let js = no_junctions();
        let err = DensityBased::new(&model, &js, &params(2, 2, 1.0)).select().unwrap_err();
        assert!(matches!(err, PlaceError::Spatial(SpatialError::NoJunctionsAvailable)));
    }
}

// ── PMCP-B ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pmcp {
    use rsu_core::{Deployment, Point};
    use rsu_spatial::{Cell, Grid, Junction, JunctionSet, SpatialError};

    use super::helpers::{corner_junctions, grid, model, no_junctions, params, two_agent_model};
    use crate::{PlaceError, PmcpB};

    #[test]
    fn single_agent_ties_break_row_major() {
        // One agent visiting (0,1) and (1,0): both cells tie at M = 1.
        let model = model(grid(2), &[(0, 2.0, 8.0), (0, 8.0, 2.0)]);
        let js = corner_junctions();
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 4, 1.0));
        let d = pmcp.select().unwrap();
        assert_eq!(
            pmcp.picked_cells(),
            &[Cell::new(0, 1), Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
        assert_eq!(
            d.points(),
            &[Point::new(0.0, 10.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
        );
    }

    #[test]
    fn picks_are_capped_by_cell_count() {
        let model = two_agent_model();
        let js = JunctionSet::new(vec![Junction::new("only", 5.0, 5.0, "")], 0.0, 0.0);
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 10, 1.0));
        let d = pmcp.select().unwrap();
        assert_eq!(pmcp.picked_cells().len(), 4);
        // Every cell snaps to the same junction; identical points collapse.
        assert_eq!(d.points(), &[Point::new(5.0, 5.0)]);
    }

    #[test]
    fn picks_follow_budget() {
        let model = two_agent_model();
        let js = corner_junctions();
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 2, 1.0));
        pmcp.select().unwrap();
        assert_eq!(pmcp.picked_cells().len(), 2);
        assert_eq!(pmcp.picked_cells()[0], Cell::new(0, 0));
    }

    #[test]
    fn served_agents_leave_and_occupancy_never_grows() {
        let model = two_agent_model();
        let js = corner_junctions();
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 4, 1.0));
        let mut deployment = Deployment::new();

        let mut previous = pmcp.working_occupancy().clone();
        while let Some(cell) = pmcp.pick_next(&mut deployment).unwrap() {
            for agent in model.demand().agents_in(cell) {
                assert!(!pmcp.working_demand().contains_agent(agent));
            }
            assert_eq!(pmcp.working_occupancy().get(cell), 0);
            assert!(pmcp.working_demand().is_consistent());
            let current = pmcp.working_occupancy();
            for (now, before) in current.as_slice().iter().zip(previous.as_slice()) {
                assert!(now <= before);
            }
            previous = current.clone();
        }
        assert_eq!(pmcp.picked_cells().len(), 4);
        // The canonical model is untouched.
        assert_eq!(model.occupancy().to_rows(), vec![vec![2, 1], vec![1, 1]]);
    }

    #[test]
    fn projected_flow_follows_migration() {
        // 3×3 over [0, 30]²; one agent walks (0,0) → (0,1) → (0,2).
        let g = Grid::new(0.0, 30.0, 0.0, 30.0, 3).unwrap();
        let model = model(g, &[(0, 5.0, 5.0), (0, 5.0, 15.0), (0, 5.0, 25.0)]);
        let js = corner_junctions();
        let pmcp = PmcpB::new(&model, &js, &params(3, 1, 1.0));

        assert_eq!(pmcp.projected_flow(Cell::new(0, 0)), 2.0);
        assert_eq!(pmcp.projected_flow(Cell::new(0, 1)), 1.0);
        assert_eq!(pmcp.projected_flow(Cell::new(1, 1)), 1.0);
        assert_eq!(pmcp.projected_flow(Cell::new(2, 2)), 0.0);

        // Before any pick the flows are M itself.
        let flows = pmcp.location_flows();
        assert_eq!(&flows[..4], &[1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn picked_cells_are_marked_negative() {
        let model = two_agent_model();
        let js = corner_junctions();
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 4, 1.0));
        let mut d = Deployment::new();
        pmcp.pick_next(&mut d).unwrap();
        let flows = pmcp.location_flows();
        assert_eq!(flows[0], -1.0);
        assert!(flows[1..].iter().all(|&f| f >= 0.0));
    }

    #[test]
    fn select_restarts_from_canonical_model() {
        let model = two_agent_model();
        let js = corner_junctions();
        let mut pmcp = PmcpB::new(&model, &js, &params(2, 3, 1.0));
        let first = pmcp.select().unwrap();
        let second = pmcp.select().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_junction_list_is_surfaced() {
        let model = two_agent_model();
        let js = no_junctions();
        let err = PmcpB::new(&model, &js, &params(2, 2, 1.0)).select().unwrap_err();
        assert!(matches!(err, PlaceError::Spatial(SpatialError::NoJunctionsAvailable)));
    }
}

// ── Fitness ordering ───────────────────────────────────────────────────────────

#[cfg(test)]
mod fitness {
    use rsu_core::Objective;
    use rsu_eval::Metrics;

    use crate::{fitness_of, Fitness};

    #[test]
    fn pairs_compare_lexicographically() {
        assert!(Fitness::Pair(50.0, -100.0).is_better_than(&Fitness::Pair(40.0, -1.0)));
        assert!(Fitness::Pair(50.0, -10.0).is_better_than(&Fitness::Pair(50.0, -20.0)));
        assert!(!Fitness::Pair(50.0, -10.0).is_better_than(&Fitness::Pair(50.0, -10.0)));
    }

    #[test]
    fn nan_ranks_below_everything() {
        assert!(Fitness::Scalar(-1e300).is_better_than(&Fitness::Scalar(f64::NAN)));
        assert!(Fitness::Pair(0.0, -1e300).is_better_than(&Fitness::Pair(0.0, f64::NAN)));
        assert!(!Fitness::Scalar(f64::NAN).is_better_than(&Fitness::Scalar(f64::NAN)));
    }

    #[test]
    fn objectives_negate_distance() {
        let m = Metrics::new(80.0, 120.0);
        assert_eq!(fitness_of(Objective::Coverage, m), Fitness::Scalar(80.0));
        assert_eq!(fitness_of(Objective::AvgDistance, m), Fitness::Scalar(-120.0));
        assert_eq!(fitness_of(Objective::Both, m), Fitness::Pair(80.0, -120.0));
    }
}

// ── Fitness cache ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use rsu_eval::Metrics;

    use crate::FitnessCache;

    #[test]
    fn computes_once_per_genotype() {
        let mut cache = FitnessCache::new();
        let mut computed = 0;
        for _ in 0..3 {
            let m = cache
                .get_or_try_insert_with(&[1, 2, 3], || {
                    computed += 1;
                    Ok::<_, ()>(Metrics::new(10.0, 5.0))
                })
                .unwrap();
            assert_eq!(m, Metrics::new(10.0, 5.0));
        }
        assert_eq!(computed, 1);
        assert_eq!((cache.hits(), cache.misses(), cache.len()), (2, 1, 1));
    }

    #[test]
    fn failures_are_not_cached() {
        let mut cache = FitnessCache::new();
        assert!(cache.get_or_try_insert_with(&[4], || Err("pipeline down")).is_err());
        assert!(cache.is_empty());
        let m = cache.get_or_try_insert_with(&[4], || Ok::<_, &str>(Metrics::new(1.0, 2.0))).unwrap();
        assert_eq!(m.coverage, 1.0);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut cache = FitnessCache::new();
        for g in [[3u32], [1], [2]] {
            cache.get_or_try_insert_with(&g, || Ok::<_, ()>(Metrics::new(0.0, 0.0))).unwrap();
        }
        let order: Vec<u32> = cache.iter().map(|(g, _)| g[0]).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert!(cache.peek(&[9]).is_none());
    }
}

// ── Genetic search driver ──────────────────────────────────────────────────────

#[cfg(test)]
mod ga {
    use rsu_core::{GarsudConfig, SearchRng};

    use crate::{Fitness, FitnessEvaluator, GaParams, GeneticSearch, NoopObserver, PlaceError, PlaceResult};

    /// Maximize the gene sum; counts evaluations.
    struct SumFitness {
        calls: usize,
    }

    impl FitnessEvaluator for SumFitness {
        fn evaluate(&mut self, genotype: &[u32]) -> PlaceResult<Fitness> {
            self.calls += 1;
            Ok(Fitness::Scalar(genotype.iter().sum::<u32>() as f64))
        }
    }

    fn params(generations: usize) -> GaParams {
        let cfg = GarsudConfig { num_generations: generations, ..GarsudConfig::default() };
        GaParams::from_config(&cfg, 4, 16)
    }

    #[test]
    fn evaluations_per_generation() {
        let p = params(3);
        let mut search = GeneticSearch::new(p.clone(), SearchRng::new(1)).unwrap();
        let mut f = SumFitness { calls: 0 };
        let outcome = search.run(&mut f, &mut NoopObserver).unwrap();
        assert_eq!(f.calls, p.sol_per_pop + 3 * (p.sol_per_pop - p.keep_parents));
        assert_eq!(outcome.generations, 3);
        assert_eq!(outcome.best.len(), 4);
        assert!(outcome.best.iter().all(|&g| g < 16));
    }

    #[test]
    fn same_seed_same_outcome() {
        let run = |seed| {
            let mut search = GeneticSearch::new(params(10), SearchRng::new(seed)).unwrap();
            search.run(&mut SumFitness { calls: 0 }, &mut NoopObserver).unwrap()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn best_never_regresses() {
        let mut short = GeneticSearch::new(params(0), SearchRng::new(5)).unwrap();
        let initial = short.run(&mut SumFitness { calls: 0 }, &mut NoopObserver).unwrap();
        let mut long = GeneticSearch::new(params(15), SearchRng::new(5)).unwrap();
        let evolved = long.run(&mut SumFitness { calls: 0 }, &mut NoopObserver).unwrap();
        // Same seed ⇒ same initial population, so the long run starts from `initial`.
        assert!(!initial.fitness.is_better_than(&evolved.fitness));
    }

    #[test]
    fn kept_parents_carried_over_unchanged() {
        let mut p = params(1);
        p.keep_parents = 2;
        let mut search = GeneticSearch::new(p.clone(), SearchRng::new(21)).unwrap();
        let mut f = SumFitness { calls: 0 };
        let population = search.initial_population();
        let scores: Vec<Fitness> = population.iter().map(|g| f.evaluate(g).unwrap()).collect();
        f.calls = 0;

        let next = search.next_generation(&population, &scores, &mut f).unwrap();
        assert_eq!(next.population.len(), p.sol_per_pop);
        assert_eq!(next.parents.len(), p.num_parents_mating);
        for (k, &parent) in next.parents[..p.keep_parents].iter().enumerate() {
            assert_eq!(next.population[k], population[parent]);
            assert_eq!(next.scores[k], scores[parent]);
        }
        assert_eq!(f.calls, p.sol_per_pop - p.keep_parents);
    }

    #[test]
    fn invalid_parameters_rejected() {
        let mut p = params(1);
        p.keep_parents = p.num_parents_mating + 1;
        assert!(matches!(GeneticSearch::new(p, SearchRng::new(0)), Err(PlaceError::Core(_))));
    }
}

// ── GARSUD ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod garsud {
    use rsu_core::{Objective, Point};
    use rsu_spatial::{CellResolver, SpatialError};

    use super::helpers::{
        corner_junctions, distinct_score, ga_config, grid, no_junctions, params, CountingEvaluator,
    };
    use crate::{decode, FitnessCache, FitnessEvaluator, Garsud, PipelineFitness, PlaceError, PlacementStrategy};

    #[test]
    fn decoding_is_repeatable_and_keeps_duplicates() {
        let js = corner_junctions();
        let r = CellResolver::new(grid(2), &js);
        let a = decode(&r, &[0, 0, 3]).unwrap();
        assert_eq!(a, decode(&r, &[0, 0, 3]).unwrap());
        assert_eq!(a.points(), &[Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_gene_panics() {
        let js = corner_junctions();
        let r = CellResolver::new(grid(2), &js);
        let _ = decode(&r, &[4]);
    }

    #[test]
    fn cache_hit_skips_pipeline() {
        let js = corner_junctions();
        let mut cache = FitnessCache::new();
        let mut eval = CountingEvaluator::new();
        let mut f = PipelineFitness::new(CellResolver::new(grid(2), &js), Objective::Both, &mut cache, &mut eval);
        let first = f.evaluate(&[1, 2]).unwrap();
        let second = f.evaluate(&[1, 2]).unwrap();
        assert_eq!(first, second);
        drop(f);
        assert_eq!(eval.calls, 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn run_is_deterministic_for_a_seed() {
        let js = corner_junctions();
        let run = || {
            let mut g = Garsud::new(grid(2), &js, &params(2, 3, 1.0), &ga_config(11));
            let mut eval = CountingEvaluator::new();
            let placement = g.place(&mut eval).unwrap();
            (placement.deployment, placement.metrics, eval.calls)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn pipeline_runs_once_per_distinct_genotype() {
        let js = corner_junctions();
        let cfg = ga_config(3);
        let mut g = Garsud::new(grid(2), &js, &params(2, 2, 1.0), &cfg);
        let mut eval = CountingEvaluator::new();
        g.place(&mut eval).unwrap();

        assert_eq!(g.pipeline_calls(), eval.calls);
        assert_eq!(g.cache().len(), eval.calls);
        let lookups = cfg.sol_per_pop + cfg.num_generations * (cfg.sol_per_pop - cfg.keep_parents);
        assert_eq!(g.pipeline_calls() + g.cache_hits(), lookups);
        // Two genes over four cells: at most 16 distinct genotypes.
        assert!(eval.calls <= 16);
    }

    #[test]
    fn single_objective_reads_other_metric_from_cache() {
        let js = corner_junctions();
        let mut g = Garsud::new(grid(2), &js, &params(2, 3, 1.0), &ga_config(5));
        let placement = g.place(&mut CountingEvaluator::new()).unwrap();
        let metrics = placement.metrics.unwrap();
        assert_eq!(metrics, distinct_score(&placement.deployment));
        assert_eq!(g.history().len(), 5);
        for record in g.history() {
            assert!(record.fitness <= metrics.coverage);
            assert!(record.fitness_secondary.is_none());
        }
    }

    #[test]
    fn final_generation_deployment_is_kept() {
        let js = corner_junctions();
        let mut g = Garsud::new(grid(2), &js, &params(2, 3, 1.0), &ga_config(7));
        assert!(g.last_generation_deployment().is_none());
        g.place(&mut CountingEvaluator::new()).unwrap();

        let last = g.last_generation_deployment().unwrap();
        assert_eq!(last.len(), 3);
        let record = g.history().last().unwrap();
        assert_eq!(distinct_score(last).coverage, record.fitness);
    }

    #[test]
    fn dual_objective_unnegates_distance() {
        let js = corner_junctions();
        let mut cfg = ga_config(8);
        cfg.optimize_avg_distance = true;
        let mut g = Garsud::new(grid(2), &js, &params(2, 2, 1.0), &cfg);
        let placement = g.place(&mut CountingEvaluator::new()).unwrap();
        let metrics = placement.metrics.unwrap();
        assert_eq!(metrics, distinct_score(&placement.deployment));
        assert!(metrics.avg_distance >= 0.0);
        assert!(g.history().iter().all(|r| r.fitness_secondary.is_some()));
    }

    #[test]
    fn no_objective_is_config_error() {
        let js = corner_junctions();
        let mut cfg = ga_config(1);
        cfg.optimize_coverage = false;
        let mut g = Garsud::new(grid(2), &js, &params(2, 2, 1.0), &cfg);
        assert!(matches!(g.place(&mut CountingEvaluator::new()), Err(PlaceError::Core(_))));
    }

    #[test]
    fn empty_junction_list_is_surfaced() {
        let js = no_junctions();
        let mut g = Garsud::new(grid(2), &js, &params(2, 2, 1.0), &ga_config(1));
        let mut eval = CountingEvaluator::new();
        let err = g.place(&mut eval).unwrap_err();
        assert!(matches!(err, PlaceError::Spatial(SpatialError::NoJunctionsAvailable)));
        assert_eq!(eval.calls, 0);
    }
}
