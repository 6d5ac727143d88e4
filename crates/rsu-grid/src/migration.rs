//! Sparse migration matrix `P`.
//!
//! # Data layout
//!
//! `P` is `(size²) × (size²)` but very sparse: agents only ever move to a
//! handful of neighbouring cells.  After counting, transitions are frozen into
//! **Compressed Sparse Row (CSR)** form.  The nonzeros of row `r` occupy
//!
//! ```text
//! cols[ row_start[r] .. row_start[r+1] ]      (ascending)
//! vals[ row_start[r] .. row_start[r+1] ]
//! ```
//!
//! so a lookup is a binary search within one row.

use rustc_hash::FxHashMap;

use rsu_core::CellIndex;

// ── MigrationCounts ───────────────────────────────────────────────────────────

/// Raw transition counts accumulated while scanning a trace.
#[derive(Clone, Debug, Default)]
pub struct MigrationCounts {
    dim:    usize,
    counts: FxHashMap<(u32, u32), u32>,
}

impl MigrationCounts {
    pub fn new(dim: usize) -> Self {
        Self { dim, counts: FxHashMap::default() }
    }

    /// Record one observed move `from → to`.
    pub fn increment(&mut self, from: CellIndex, to: CellIndex) {
        debug_assert!(from.index() < self.dim && to.index() < self.dim);
        *self.counts.entry((from.0, to.0)).or_insert(0) += 1;
    }

    /// Total number of transitions recorded.
    pub fn transitions(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// Freeze into CSR and normalize every nonzero row to sum 1.
    pub fn build(self) -> MigrationMatrix {
        let mut entries: Vec<((u32, u32), u32)> = self.counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(key, _)| key);

        let mut row_start = vec![0u32; self.dim + 1];
        for &((from, _), _) in &entries {
            row_start[from as usize + 1] += 1;
        }
        for i in 1..=self.dim {
            row_start[i] += row_start[i - 1];
        }
        debug_assert_eq!(row_start[self.dim] as usize, entries.len());

        let cols: Vec<u32> = entries.iter().map(|&((_, to), _)| to).collect();
        let mut vals: Vec<f64> = entries.iter().map(|&(_, c)| c as f64).collect();

        for r in 0..self.dim {
            let row = &mut vals[row_start[r] as usize..row_start[r + 1] as usize];
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                row.iter_mut().for_each(|v| *v /= sum);
            }
        }

        MigrationMatrix { dim: self.dim, row_start, cols, vals }
    }
}

// ── MigrationMatrix ───────────────────────────────────────────────────────────

/// Row-normalized transition probabilities between cells.  Immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct MigrationMatrix {
    dim:       usize,
    row_start: Vec<u32>,
    cols:      Vec<u32>,
    vals:      Vec<f64>,
}

impl MigrationMatrix {
    /// `dim × dim` matrix with no transitions.
    pub fn zeros(dim: usize) -> Self {
        MigrationCounts::new(dim).build()
    }

    /// Number of rows (and columns): `size²`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored nonzeros.
    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    #[inline]
    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        self.row_start[row] as usize..self.row_start[row + 1] as usize
    }

    /// Entry `(row, col)`; zero when absent or out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.dim {
            return 0.0;
        }
        let range = self.row_range(row);
        match self.cols[range.clone()].binary_search(&(col as u32)) {
            Ok(i) => self.vals[range.start + i],
            Err(_) => 0.0,
        }
    }

    /// Probability of moving from `from` to `to` given a move was observed.
    #[inline]
    pub fn transition(&self, from: CellIndex, to: CellIndex) -> f64 {
        self.get(from.index(), to.index())
    }

    /// Nonzeros of `row` as `(col, value)` in ascending column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = if row < self.dim { self.row_range(row) } else { 0..0 };
        self.cols[range.clone()]
            .iter()
            .zip(&self.vals[range])
            .map(|(&c, &v)| (c as usize, v))
    }

    pub fn row_sum(&self, row: usize) -> f64 {
        self.row(row).map(|(_, v)| v).sum()
    }
}
