//! Cell coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::Direction;

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index, grows east)
    pub x: i32,
    /// Y coordinate (row index, grows north)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The adjacent cell one step in `direction`.
    #[inline]
    pub fn step(&self, direction: Direction) -> GridCoord {
        *self + direction.offset()
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [(Direction, GridCoord); 4] {
        Direction::ALL.map(|d| (d, self.step(d)))
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(4, 4);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert_eq!(b.manhattan_distance(&a), 8);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_neighbors_order() {
        let c = GridCoord::new(2, 2);
        let n = c.neighbors_4();
        assert_eq!(n[0], (Direction::North, GridCoord::new(2, 3)));
        assert_eq!(n[1], (Direction::East, GridCoord::new(3, 2)));
        assert_eq!(n[2], (Direction::South, GridCoord::new(2, 1)));
        assert_eq!(n[3], (Direction::West, GridCoord::new(1, 2)));
    }

    #[test]
    fn test_arithmetic() {
        let a = GridCoord::new(3, 1);
        let b = GridCoord::new(1, 1);
        assert_eq!(a - b, GridCoord::new(2, 0));
        assert_eq!(a + b, GridCoord::new(4, 2));
    }
}
