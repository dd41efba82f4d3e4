//! Edge topology for neighbor lookups

use serde::{Deserialize, Serialize};

/// How coordinates that fall off the board edge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Hard edges: out-of-bounds neighbors contribute nothing.
    Clipped,
    /// Torus: opposite edges are adjacent.
    Toroidal,
}

impl Topology {
    /// Bridge from the boolean wrap flag the UI layer toggles.
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Topology::Toroidal
        } else {
            Topology::Clipped
        }
    }

    pub fn wraps(self) -> bool {
        self == Topology::Toroidal
    }

    /// Resolve a candidate neighbor coordinate against a `cols` x `rows`
    /// board.
    ///
    /// Toroidal boards wrap each axis independently and always yield a
    /// coordinate; clipped boards yield `None` when either axis is out of
    /// range. Pure in the dimensions and mode, independent of cell contents.
    pub fn resolve(
        self,
        x: isize,
        y: isize,
        cols: usize,
        rows: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Topology::Toroidal => {
                let cols = cols as isize;
                let rows = rows as isize;
                let wx = ((x % cols) + cols) % cols;
                let wy = ((y % rows) + rows) % rows;
                Some((wx as usize, wy as usize))
            }
            Topology::Clipped => {
                if x < 0 || y < 0 || x >= cols as isize || y >= rows as isize {
                    None
                } else {
                    Some((x as usize, y as usize))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_is_identity() {
        for topology in [Topology::Clipped, Topology::Toroidal] {
            assert_eq!(topology.resolve(2, 3, 5, 5), Some((2, 3)));
            assert_eq!(topology.resolve(0, 0, 5, 5), Some((0, 0)));
            assert_eq!(topology.resolve(4, 4, 5, 5), Some((4, 4)));
        }
    }

    #[test]
    fn test_clipped_rejects_out_of_bounds() {
        let t = Topology::Clipped;
        assert_eq!(t.resolve(-1, 0, 5, 5), None);
        assert_eq!(t.resolve(0, -1, 5, 5), None);
        assert_eq!(t.resolve(5, 0, 5, 5), None);
        assert_eq!(t.resolve(0, 5, 5, 5), None);
    }

    #[test]
    fn test_toroidal_wraps_each_axis() {
        let t = Topology::Toroidal;
        assert_eq!(t.resolve(-1, 0, 5, 4), Some((4, 0)));
        assert_eq!(t.resolve(5, 0, 5, 4), Some((0, 0)));
        assert_eq!(t.resolve(0, -1, 5, 4), Some((0, 3)));
        assert_eq!(t.resolve(0, 4, 5, 4), Some((0, 0)));
        assert_eq!(t.resolve(-1, -1, 3, 3), Some((2, 2)));
        // More than one full revolution still lands in range.
        assert_eq!(t.resolve(-7, 11, 3, 3), Some((2, 2)));
    }

    #[test]
    fn test_wrap_flag_bridge() {
        assert_eq!(Topology::from_wrap(true), Topology::Toroidal);
        assert_eq!(Topology::from_wrap(false), Topology::Clipped);
        assert!(Topology::Toroidal.wraps());
        assert!(!Topology::Clipped.wraps());
    }
}
