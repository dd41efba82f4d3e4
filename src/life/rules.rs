//! Transition rules and generation stepping

use super::{Grid, Topology};
use rayon::prelude::*;

/// The 8 Moore-neighborhood offsets around a focal cell.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Birth/survival lookup tables indexed by live-neighbor count.
///
/// The default is Conway's B3/S23. Variants (HighLife and friends) can be
/// built with [`RuleSet::new`] without touching counting or topology code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl RuleSet {
    /// Build a rule set from the neighbor counts that cause birth and
    /// survival. Counts above 8 are ignored.
    pub fn new(birth_counts: &[u8], survival_counts: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in birth_counts {
            if let Some(slot) = birth.get_mut(n as usize) {
                *slot = true;
            }
        }
        for &n in survival_counts {
            if let Some(slot) = survival.get_mut(n as usize) {
                *slot = true;
            }
        }
        Self { birth, survival }
    }

    /// Conway's standard rule: birth at 3 neighbors, survival at 2 or 3.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// Next state of one cell given its current state and live-neighbor
    /// count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        debug_assert!(neighbors <= 8);
        if alive {
            self.survival[neighbors as usize]
        } else {
            self.birth[neighbors as usize]
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

/// Count live Moore neighbors of `(x, y)`, resolving each offset through
/// the topology. Always in `[0, 8]`.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize, topology: Topology) -> u8 {
    let mut count = 0;
    for (dx, dy) in MOORE_OFFSETS {
        let cx = x as isize + dx;
        let cy = y as isize + dy;
        if let Some((nx, ny)) = topology.resolve(cx, cy, grid.cols(), grid.rows()) {
            if grid.get(nx, ny) {
                count += 1;
            }
        }
    }
    count
}

/// Compute generation `t+1` into a fresh buffer of identical dimensions.
///
/// Deterministic in the input grid, topology and rule; rows are fanned out
/// across the rayon pool but the call is synchronous for the caller.
pub fn next_generation(grid: &Grid, topology: Topology, rule: &RuleSet) -> Grid {
    let cells: Vec<bool> = (0..grid.rows())
        .into_par_iter()
        .flat_map(|y| {
            (0..grid.cols()).into_par_iter().map(move |x| {
                let neighbors = count_live_neighbors(grid, x, y, topology);
                rule.next_state(grid.get(x, y), neighbors)
            })
        })
        .collect();

    Grid::from_parts(grid.cols(), grid.rows(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cols: usize, rows: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for &(x, y) in live {
            grid.set(x, y, true);
        }
        grid
    }

    #[test]
    fn test_conway_rule_table() {
        let rule = RuleSet::conway();
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(true, 1));
        assert!(!rule.next_state(true, 4));
        assert!(!rule.next_state(false, 2));
        assert!(!rule.next_state(false, 0));
    }

    #[test]
    fn test_custom_rule_table() {
        // HighLife adds birth at 6.
        let rule = RuleSet::new(&[3, 6], &[2, 3]);
        assert!(rule.next_state(false, 6));
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(true, 6));
        // Counts above 8 are ignored.
        let odd = RuleSet::new(&[9, 200], &[]);
        for n in 0..=8 {
            assert!(!odd.next_state(false, n));
        }
    }

    #[test]
    fn test_neighbor_count_center_and_corner() {
        let ring = grid_with(
            3,
            3,
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2),
            ],
        );
        assert_eq!(count_live_neighbors(&ring, 1, 1, Topology::Clipped), 8);
        // Corner only sees the two live edge cells next to it.
        assert_eq!(count_live_neighbors(&ring, 0, 0, Topology::Clipped), 2);
    }

    #[test]
    fn test_neighbor_count_respects_wrap() {
        // Only (0, 0) alive on a 3x3 board.
        let grid = grid_with(3, 3, &[(0, 0)]);

        // On a torus the far corner is diagonally adjacent to (0, 0).
        assert_eq!(count_live_neighbors(&grid, 2, 2, Topology::Toroidal), 1);
        // With hard edges it is not.
        assert_eq!(count_live_neighbors(&grid, 2, 2, Topology::Clipped), 0);
    }

    #[test]
    fn test_neighbor_count_bounds() {
        let mut full = Grid::new(4, 4).unwrap();
        full.fill(true);
        for y in 0..4 {
            for x in 0..4 {
                for topology in [Topology::Clipped, Topology::Toroidal] {
                    assert!(count_live_neighbors(&full, x, y, topology) <= 8);
                }
            }
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let grid = grid_with(7, 5, &[(3, 2), (4, 2)]);
        let next = next_generation(&grid, Topology::Clipped, &RuleSet::conway());
        assert_eq!(next.cols(), 7);
        assert_eq!(next.rows(), 5);
        assert_eq!(next.cells().len(), grid.cells().len());
    }

    #[test]
    fn test_all_dead_is_a_fixed_point() {
        for topology in [Topology::Clipped, Topology::Toroidal] {
            let grid = Grid::new(6, 6).unwrap();
            let next = next_generation(&grid, topology, &RuleSet::conway());
            assert!(next.is_empty());
        }
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        let next = next_generation(&grid, Topology::Clipped, &RuleSet::conway());
        assert!(next.is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let next = next_generation(&block, Topology::Clipped, &RuleSet::conway());
        assert_eq!(next, block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(1, 1), (2, 1), (3, 1)]);

        let vertical = next_generation(&horizontal, Topology::Clipped, &RuleSet::conway());
        assert_eq!(vertical.live_cells(), vec![(2, 0), (2, 1), (2, 2)]);

        let back = next_generation(&vertical, Topology::Clipped, &RuleSet::conway());
        assert_eq!(back, horizontal);
    }
}
