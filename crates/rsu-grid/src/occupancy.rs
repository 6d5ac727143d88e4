//! Dense occupancy matrix `M`.

use rsu_spatial::Cell;

/// `size × size` matrix of distinct-agent counts, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMatrix {
    size:   u32,
    counts: Vec<u32>,
}

impl OccupancyMatrix {
    /// All-zero matrix.
    pub fn zeros(size: u32) -> Self {
        Self { size, counts: vec![0; size as usize * size as usize] }
    }

    /// Count, for every cell, how many of the given cell sets contain it.
    ///
    /// Each set is one agent's distinct visited cells, so an agent adds at
    /// most 1 to any cell.
    pub fn from_cell_sets<'a, I, S>(size: u32, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a Cell>,
    {
        let mut m = Self::zeros(size);
        for set in sets {
            for &cell in set {
                let i = m.offset(cell);
                m.counts[i] += 1;
            }
        }
        m
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.size && cell.col < self.size);
        cell.row as usize * self.size as usize + cell.col as usize
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.counts[self.offset(cell)]
    }

    /// Row-major view; index `i` is cell `(i / size, i % size)`.
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// Sum over all cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Nested rows, mainly for assertions and debugging output.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.counts
            .chunks(self.size.max(1) as usize)
            .map(<[u32]>::to_vec)
            .collect()
    }
}
