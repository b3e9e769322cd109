//! Cardinal directions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GridCoord;

/// One of the four headings a cell edge or a move can face.
///
/// The discriminant doubles as the index into a [`super::Walls`] array, so the
/// enumeration order N, E, S, W is load-bearing for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// +Y
    North = 0,
    /// +X
    East = 1,
    /// -Y
    South = 2,
    /// -X
    West = 3,
}

impl Direction {
    /// All directions in fixed N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into N, E, S, W arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction facing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Unit step in grid coordinates.
    #[inline]
    pub const fn offset(self) -> GridCoord {
        match self {
            Direction::North => GridCoord::new(0, 1),
            Direction::East => GridCoord::new(1, 0),
            Direction::South => GridCoord::new(0, -1),
            Direction::West => GridCoord::new(-1, 0),
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`.
    ///
    /// Returns `None` for diagonal, multi-cell or zero deltas.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        let delta = to - from;
        Direction::ALL.into_iter().find(|d| d.offset() == delta)
    }

    /// Single-letter label.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
