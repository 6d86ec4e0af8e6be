use std::cmp::Ordering;
use std::fmt;

use itertools::iproduct;

use crate::graph::Weight;

/// Integer grid position: `x` is the column, `y` the line.
///
/// Ordered line by line, then by column, which is reading order for parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 4 orthogonal neighbours, or all 8 surrounding positions with diagonals.
    pub fn neighbours(self, with_diagonals: bool) -> impl Iterator<Item = Coordinate> {
        iproduct!(-1..=1, -1..=1)
            .filter(move |&(dx, dy)| (dx, dy) != (0, 0) && (with_diagonals || dx == 0 || dy == 0))
            .map(move |(dx, dy)| Coordinate::new(self.x + dx, self.y + dy))
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> Weight {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Number of king moves between the two positions.
    pub fn chebyshev_distance(&self, other: &Coordinate) -> Weight {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_neighbours() {
        let mut around: Vec<_> = Coordinate::new(0, 0).neighbours(false).collect();
        around.sort();
        assert_eq!(
            around,
            vec![
                Coordinate::new(0, -1),
                Coordinate::new(-1, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_diagonal_neighbours() {
        let around: Vec<_> = Coordinate::new(5, 5).neighbours(true).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&Coordinate::new(5, 5)));
        assert!(around.contains(&Coordinate::new(4, 6)));
    }

    #[test]
    fn test_distances() {
        let a = Coordinate::new(1, 2);
        let b = Coordinate::new(4, -2);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(a.chebyshev_distance(&b), 4);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn test_reading_order_and_display() {
        assert!(Coordinate::new(9, 0) < Coordinate::new(0, 1));
        assert_eq!(Coordinate::new(3, -1).to_string(), "3,-1");
    }
}
