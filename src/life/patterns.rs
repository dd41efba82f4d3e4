//! Classic seed patterns for the CLI and tests

/// A named pattern, cells as `(x, y)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (2, 2),
            (3, 2),
            (2, 3),
            (3, 3),
        ],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            // Horizontal triples
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            // Vertical triples
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

impl Pattern {
    /// Case-insensitive lookup in the built-in table.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Horizontal extent of the bounding box.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    /// Vertical extent of the bounding box.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::{next_generation, Grid, RuleSet, Topology};

    fn to_grid(pattern: &Pattern, cols: usize, rows: usize) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for &(x, y) in pattern.cells {
            grid.set(x + 1, y + 1, true);
        }
        grid
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(Pattern::by_name("Glider").is_some());
        assert!(Pattern::by_name("PULSAR").is_some());
        assert!(Pattern::by_name("nonesuch").is_none());
    }

    #[test]
    fn test_extents() {
        let glider = Pattern::by_name("glider").unwrap();
        assert_eq!((glider.width(), glider.height()), (3, 3));

        let blinker = Pattern::by_name("blinker").unwrap();
        assert_eq!((blinker.width(), blinker.height()), (3, 1));

        let pulsar = Pattern::by_name("pulsar").unwrap();
        assert_eq!((pulsar.width(), pulsar.height()), (13, 13));
    }

    #[test]
    fn test_toad_has_period_two() {
        let toad = to_grid(Pattern::by_name("toad").unwrap(), 6, 4);
        let rule = RuleSet::conway();

        let step1 = next_generation(&toad, Topology::Clipped, &rule);
        assert_ne!(step1, toad);
        let step2 = next_generation(&step1, Topology::Clipped, &rule);
        assert_eq!(step2, toad);
    }

    #[test]
    fn test_beacon_has_period_two() {
        let beacon = to_grid(Pattern::by_name("beacon").unwrap(), 6, 6);
        let rule = RuleSet::conway();

        let step1 = next_generation(&beacon, Topology::Clipped, &rule);
        let step2 = next_generation(&step1, Topology::Clipped, &rule);
        assert_eq!(step2, beacon);
    }

    #[test]
    fn test_glider_translates() {
        let glider = to_grid(Pattern::by_name("glider").unwrap(), 10, 10);
        let rule = RuleSet::conway();

        // After 4 generations a glider reappears shifted by (1, 1).
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = next_generation(&grid, Topology::Clipped, &rule);
        }

        let shifted: Vec<(usize, usize)> = glider
            .live_cells()
            .into_iter()
            .map(|(x, y)| (x + 1, y + 1))
            .collect();
        assert_eq!(grid.live_cells(), shifted);
    }
}
