//! Grid representation and cell addressing

use super::LifeError;
use itertools::iproduct;
use rand::Rng;
use std::fmt;

/// A fixed-size 2D field of cells, row-major in a flat buffer.
///
/// Dimensions are set at allocation and never change; resizing a board
/// allocates a new `Grid`. The buffer length is always `cols * rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid.
    pub fn new(cols: usize, rows: usize) -> Result<Self, LifeError> {
        if cols == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { cols, rows });
        }
        Ok(Self::allocate(cols, rows))
    }

    /// Allocate without validating. Callers guarantee positive dimensions.
    pub(crate) fn allocate(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        }
    }

    /// Rebuild a grid around a freshly computed cell buffer.
    pub(crate) fn from_parts(cols: usize, rows: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), cols * rows);
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Convert 2D coordinates to the flat buffer index.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Read a cell. Coordinates must be in bounds; neighbor lookups are
    /// pre-validated by the topology resolver.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[self.index(x, y)]
    }

    /// Write a cell in place. Same bounds precondition as [`Grid::get`].
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        debug_assert!(x < self.cols && y < self.rows);
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    /// Set each cell alive independently with probability `density`.
    ///
    /// Densities outside `[0, 1]` are rejected with
    /// [`LifeError::InvalidDensity`] rather than clamped.
    pub fn randomize_in_place<R: Rng>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), LifeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
        Ok(())
    }

    /// Read-only view of the full cell buffer, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Coordinates of all live cells, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(y, x)| self.get(x, y))
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                write!(f, "{}", if self.get(x, y) { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
