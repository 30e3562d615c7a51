// grid.rs - Rectangular grid of cells, stored row-major

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use crate::cell::Cell;
use crate::error::{EngineError, EngineResult};

/// An R x C grid with R, C >= 1. The shape never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows  : usize,
    cols  : usize,
    cells : Vec<Cell>,     // rows * cols, row-major
}

impl Grid {
    /// All-`Empty` grid of the given shape.
    ///
    /// Fails with `TooLarge` when `rows * cols` overflows or the buffer
    /// cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> EngineResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyGrid);
        }
        let too_large = || EngineError::TooLarge { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, Cell::Empty);
        Ok(Self { rows, cols, cells })
    }

    /// Builds a grid from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> EngineResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(EngineError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(EngineError::RaggedRow { row: index, expected: cols, found: row.len() });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    /// Deterministic pseudo-random grid. The same seed always yields the same grid.
    pub fn seeded(rows: usize, cols: usize, seed: u32) -> EngineResult<Self> {
        let mut grid = Self::new(rows, cols)?;

        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        let mut state = hasher.finish();

        for cell in &mut grid.cells {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *cell = Cell::ALL[((state >> 33) % Cell::ALL.len() as u64) as usize];
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics if `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        self.cells[row * self.cols + col] = cell;
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Mutable view over a contiguous band of rows.
    pub(crate) fn rows_mut(&mut self, rows: Range<usize>) -> &mut [Cell] {
        &mut self.cells[rows.start * self.cols..rows.end * self.cols]
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Number of non-empty cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rows.hash(&mut hasher);
        self.cols.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}
