//! Stateful board controller owning the live grid

use super::{next_generation, Grid, LifeError, Pattern, RuleSet, Topology};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Dimension clamp applied by [`Board::resize`].
pub const MIN_COLS: usize = 10;
pub const MAX_COLS: usize = 300;
pub const MIN_ROWS: usize = 10;
pub const MAX_ROWS: usize = 200;

/// Owns the authoritative grid and sequences every mutation on it.
///
/// Designed for a single cooperative driver loop: no internal locking, and
/// `step()` is compute-into-new-buffer-then-swap, so the previous
/// generation's buffer is dropped at the swap.
#[derive(Debug)]
pub struct Board {
    grid: Grid,
    topology: Topology,
    rule: RuleSet,
    rng: StdRng,
}

impl Board {
    /// Create an all-dead board with an entropy-seeded RNG.
    pub fn new(cols: usize, rows: usize, topology: Topology) -> Result<Self, LifeError> {
        Self::build(cols, rows, topology, StdRng::from_entropy())
    }

    /// Create an all-dead board whose randomization is reproducible from
    /// `seed`.
    pub fn with_seed(
        cols: usize,
        rows: usize,
        topology: Topology,
        seed: u64,
    ) -> Result<Self, LifeError> {
        Self::build(cols, rows, topology, StdRng::seed_from_u64(seed))
    }

    fn build(
        cols: usize,
        rows: usize,
        topology: Topology,
        rng: StdRng,
    ) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(cols, rows)?,
            topology,
            rule: RuleSet::default(),
            rng,
        })
    }

    /// Advance one generation, replacing the owned grid.
    pub fn step(&mut self) {
        self.grid = next_generation(&self.grid, self.topology, &self.rule);
    }

    /// Invert one cell. Out-of-bounds coordinates are ignored, matching
    /// paint strokes that leave the canvas.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if x < self.grid.cols() && y < self.grid.rows() {
            let value = self.grid.get(x, y);
            self.grid.set(x, y, !value);
        }
    }

    /// Write one cell. Out-of-bounds coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, value: bool) {
        if x < self.grid.cols() && y < self.grid.rows() {
            self.grid.set(x, y, value);
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.grid.fill(false);
    }

    /// Randomize every cell independently at the given live density.
    pub fn randomize(&mut self, density: f64) -> Result<(), LifeError> {
        self.grid.randomize_in_place(density, &mut self.rng)
    }

    /// Replace the grid with a fresh all-dead one at the clamped
    /// dimensions. Prior content is always discarded.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.clamp(MIN_COLS, MAX_COLS);
        let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
        self.grid = Grid::allocate(cols, rows);
    }

    /// Toggle toroidal wrap. Takes effect on the next step; the grid is
    /// untouched.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.topology = Topology::from_wrap(wrap);
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Swap in a different birth/survival table.
    pub fn set_rule(&mut self, rule: RuleSet) {
        self.rule = rule;
    }

    /// Clear the board and stamp a pattern centered on it. Cells that do
    /// not fit are dropped at the edge.
    pub fn stamp(&mut self, pattern: &Pattern) {
        self.clear();
        let (cols, rows) = self.dimensions();
        let dx = cols.saturating_sub(pattern.width()) / 2;
        let dy = rows.saturating_sub(pattern.height()) / 2;
        for &(x, y) in pattern.cells {
            self.set_cell(dx + x, dy + y, true);
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.cols(), self.grid.rows())
    }

    /// Cell state, `false` for out-of-bounds coordinates.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.grid.cols() && y < self.grid.rows() && self.grid.get(x, y)
    }

    /// Read-only row-major view of the full grid, for renderers to iterate.
    pub fn cells(&self) -> &[bool] {
        self.grid.cells()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}
