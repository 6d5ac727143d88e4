//! A small, deterministic genetic-algorithm driver.
//!
//! Integer genotypes of fixed length, genes in `[0, gene_space)`.
//!
//! # Generation step
//!
//! ```text
//! parents   = num_parents_mating tournament winners (size 3)
//! offspring = single-point crossover of (parents[k % n], parents[(k+1) % n])
//!             then random-reset mutation, p = 1 / num_genes per gene
//! next      = parents[..keep_parents] ++ offspring        (sol_per_pop total)
//! ```
//!
//! Fitness is supplied through [`FitnessEvaluator`] and progress reported
//! through [`GenerationObserver`], so the driver knows nothing about grids
//! or pipelines.

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use rsu_core::{CoreError, GarsudConfig, SearchRng};

use crate::PlaceResult;

pub type Genotype = Vec<u32>;

// ── Fitness ───────────────────────────────────────────────────────────────────

/// A fitness value: one objective, or two compared lexicographically.
///
/// NaN components rank below every real value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fitness {
    Scalar(f64),
    Pair(f64, f64),
}

impl Fitness {
    pub fn primary(&self) -> f64 {
        match *self {
            Fitness::Scalar(v) | Fitness::Pair(v, _) => v,
        }
    }

    pub fn secondary(&self) -> Option<f64> {
        match *self {
            Fitness::Scalar(_) => None,
            Fitness::Pair(_, v) => Some(v),
        }
    }

    fn key(&self) -> (f64, f64) {
        (rank(self.primary()), self.secondary().map_or(0.0, rank))
    }

    /// Total order used for every selection decision.
    pub fn total_cmp(&self, other: &Fitness) -> Ordering {
        let (a1, a2) = self.key();
        let (b1, b2) = other.key();
        a1.total_cmp(&b1).then(a2.total_cmp(&b2))
    }

    #[inline]
    pub fn is_better_than(&self, other: &Fitness) -> bool {
        self.total_cmp(other) == Ordering::Greater
    }
}

#[inline]
fn rank(v: f64) -> f64 {
    if v.is_nan() { f64::NEG_INFINITY } else { v }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fitness::Scalar(v) => write!(f, "{v:.4}"),
            Fitness::Pair(a, b) => write!(f, "({a:.4}, {b:.4})"),
        }
    }
}

// ── Callbacks ─────────────────────────────────────────────────────────────────

/// Scores one genotype.  Called once per individual per generation; may
/// be expensive.
pub trait FitnessEvaluator {
    fn evaluate(&mut self, genotype: &[u32]) -> PlaceResult<Fitness>;
}

/// Called after every completed generation.
pub trait GenerationObserver {
    /// `generation` is 1-based.  `best` is the best genotype of that
    /// generation's population.
    fn on_generation(&mut self, _generation: usize, _best: &[u32], _fitness: Fitness) -> PlaceResult<()> {
        Ok(())
    }
}

/// A [`GenerationObserver`] that does nothing.
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

// ── Parameters ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GaParams {
    pub num_generations:      usize,
    pub num_parents_mating:   usize,
    pub sol_per_pop:          usize,
    pub keep_parents:         usize,
    pub num_genes:            usize,
    /// Exclusive upper bound of every gene.
    pub gene_space:           u32,
    pub tournament_size:      usize,
    pub mutation_probability: f64,
}

impl GaParams {
    pub fn from_config(cfg: &GarsudConfig, num_genes: usize, gene_space: u32) -> Self {
        Self {
            num_generations: cfg.num_generations,
            num_parents_mating: cfg.num_parents_mating,
            sol_per_pop: cfg.sol_per_pop,
            keep_parents: cfg.keep_parents,
            num_genes,
            gene_space,
            tournament_size: 3,
            mutation_probability: 1.0 / num_genes.max(1) as f64,
        }
    }

    pub fn validate(&self) -> PlaceResult<()> {
        let fail = |msg: String| -> PlaceResult<()> {
            Err(CoreError::Config(format!("genetic search: {msg}")).into())
        };
        if self.num_genes == 0 || self.gene_space == 0 {
            return fail(format!("empty search space ({} genes over {} values)", self.num_genes, self.gene_space));
        }
        if self.sol_per_pop < 2 {
            return fail(format!("sol_per_pop must be at least 2, got {}", self.sol_per_pop));
        }
        if self.num_parents_mating == 0 || self.num_parents_mating > self.sol_per_pop {
            return fail(format!(
                "num_parents_mating must be in 1..={}, got {}",
                self.sol_per_pop, self.num_parents_mating
            ));
        }
        if self.keep_parents > self.num_parents_mating {
            return fail(format!(
                "keep_parents ({}) exceeds num_parents_mating ({})",
                self.keep_parents, self.num_parents_mating
            ));
        }
        if self.tournament_size == 0 {
            return fail("tournament_size must be positive".into());
        }
        Ok(())
    }
}

// ── GeneticSearch ─────────────────────────────────────────────────────────────

/// Best individual found over the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best:        Genotype,
    pub fitness:     Fitness,
    pub generations: usize,
}

/// One bred generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    pub population: Vec<Genotype>,
    pub scores:     Vec<Fitness>,
    /// Indices into the previous population, in selection order.
    pub parents:    Vec<usize>,
}

pub struct GeneticSearch {
    params: GaParams,
    rng:    SearchRng,
}

impl GeneticSearch {
    pub fn new(params: GaParams, rng: SearchRng) -> PlaceResult<Self> {
        params.validate()?;
        Ok(Self { params, rng })
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// `sol_per_pop` genotypes with uniform genes.
    pub fn initial_population(&mut self) -> Vec<Genotype> {
        (0..self.params.sol_per_pop).map(|_| self.random_genotype()).collect()
    }

    fn random_genotype(&mut self) -> Genotype {
        (0..self.params.num_genes)
            .map(|_| self.rng.gen_range(0..self.params.gene_space))
            .collect()
    }

    /// Evolve for `num_generations` generations and return the best
    /// individual ever evaluated (first seen wins ties).
    pub fn run<F, O>(&mut self, fitness: &mut F, observer: &mut O) -> PlaceResult<SearchOutcome>
    where
        F: FitnessEvaluator + ?Sized,
        O: GenerationObserver + ?Sized,
    {
        let mut population = self.initial_population();
        let mut scores = population
            .iter()
            .map(|g| fitness.evaluate(g))
            .collect::<PlaceResult<Vec<_>>>()?;

        let i = best_index(&scores);
        let mut best = SearchOutcome { best: population[i].clone(), fitness: scores[i], generations: 0 };

        for generation in 1..=self.params.num_generations {
            let step = self.next_generation(&population, &scores, fitness)?;
            population = step.population;
            scores = step.scores;

            let i = best_index(&scores);
            if scores[i].is_better_than(&best.fitness) {
                best.best = population[i].clone();
                best.fitness = scores[i];
            }
            best.generations = generation;
            debug!("generation {generation}: best {} (overall {})", scores[i], best.fitness);
            observer.on_generation(generation, &population[i], scores[i])?;
        }
        Ok(best)
    }

    /// Breed one generation from `population` and its `scores`.
    ///
    /// The first `keep_parents` entries of the result are the first
    /// selected parents, unchanged and with their scores carried over; only
    /// offspring are evaluated.
    pub fn next_generation<F>(
        &mut self,
        population: &[Genotype],
        scores: &[Fitness],
        fitness: &mut F,
    ) -> PlaceResult<Generation>
    where
        F: FitnessEvaluator + ?Sized,
    {
        let parents = self.select_parents(scores);
        let keep = self.params.keep_parents.min(self.params.sol_per_pop);

        let mut next: Vec<Genotype> = Vec::with_capacity(self.params.sol_per_pop);
        let mut next_scores: Vec<Fitness> = Vec::with_capacity(self.params.sol_per_pop);
        for &p in &parents[..keep] {
            next.push(population[p].clone());
            next_scores.push(scores[p]);
        }

        let n = parents.len();
        for k in 0..self.params.sol_per_pop - keep {
            let mut child = self.crossover(&population[parents[k % n]], &population[parents[(k + 1) % n]]);
            self.mutate(&mut child);
            next_scores.push(fitness.evaluate(&child)?);
            next.push(child);
        }

        Ok(Generation { population: next, scores: next_scores, parents })
    }

    /// Indices of `num_parents_mating` tournament winners.
    fn select_parents(&mut self, scores: &[Fitness]) -> Vec<usize> {
        (0..self.params.num_parents_mating)
            .map(|_| self.tournament(scores))
            .collect()
    }

    fn tournament(&mut self, scores: &[Fitness]) -> usize {
        let mut winner = self.rng.index(scores.len());
        for _ in 1..self.params.tournament_size {
            let challenger = self.rng.index(scores.len());
            if scores[challenger].is_better_than(&scores[winner]) {
                winner = challenger;
            }
        }
        winner
    }

    fn crossover(&mut self, a: &[u32], b: &[u32]) -> Genotype {
        let n = a.len();
        let point = if n > 1 { self.rng.gen_range(1..n) } else { n };
        a[..point].iter().chain(&b[point..]).copied().collect()
    }

    fn mutate(&mut self, genotype: &mut [u32]) {
        for gene in genotype.iter_mut() {
            if self.rng.gen_bool(self.params.mutation_probability) {
                *gene = self.rng.gen_range(0..self.params.gene_space);
            }
        }
    }
}

/// Index of the first maximum.
fn best_index(scores: &[Fitness]) -> usize {
    let mut best = 0;
    for (i, s) in scores.iter().enumerate().skip(1) {
        if s.is_better_than(&scores[best]) {
            best = i;
        }
    }
    best
}
