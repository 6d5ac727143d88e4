//! Genotype → metrics memo for the genetic search.
//!
//! The cache is unbounded and never evicts: one run evaluates at most
//! `sol_per_pop · (num_generations + 1)` genotypes.  Entries stay in
//! insertion order for inspection.

use rustc_hash::FxHashMap;

use rsu_eval::Metrics;

use crate::Genotype;

#[derive(Clone, Debug, Default)]
pub struct FitnessCache {
    entries: Vec<(Genotype, Metrics)>,
    index:   FxHashMap<Genotype, usize>,
    hits:    usize,
    misses:  usize,
}

impl FitnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up without touching the hit/miss counters.
    pub fn peek(&self, genotype: &[u32]) -> Option<Metrics> {
        self.index.get(genotype).map(|&i| self.entries[i].1)
    }

    /// Return the cached metrics for `genotype`, or compute, insert and
    /// return them.  `compute` runs at most once per distinct genotype.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        genotype: &[u32],
        compute:  impl FnOnce() -> Result<Metrics, E>,
    ) -> Result<Metrics, E> {
        if let Some(m) = self.peek(genotype) {
            self.hits += 1;
            return Ok(m);
        }
        self.misses += 1;
        let metrics = compute()?;
        self.index.insert(genotype.to_vec(), self.entries.len());
        self.entries.push((genotype.to_vec(), metrics));
        Ok(metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute; includes failed computations.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u32], &Metrics)> + '_ {
        self.entries.iter().map(|(g, m)| (g.as_slice(), m))
    }
}
