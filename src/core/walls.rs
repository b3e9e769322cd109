//! Four-sided wall flags for a single cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Direction;
use crate::error::VyuhaError;

/// Wall presence on the four sides of a cell, indexed N, E, S, W.
///
/// This is the only shape a wall observation can take, so a reading with
/// more or fewer than four entries cannot reach the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Walls([bool; 4]);

impl Walls {
    /// No walls on any side.
    pub const NONE: Walls = Walls([false; 4]);

    /// Walls on every side.
    pub const ALL: Walls = Walls([true; 4]);

    /// Create from individual flags.
    #[inline]
    pub const fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Walls([north, east, south, west])
    }

    /// Walls present on exactly the given sides.
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut walls = Walls::NONE;
        for &d in directions {
            walls.set(d, true);
        }
        walls
    }

    /// Whether a wall is present on side `direction`.
    #[inline]
    pub const fn has(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    /// Set the flag for one side.
    #[inline]
    pub fn set(&mut self, direction: Direction, present: bool) {
        self.0[direction.index()] = present;
    }

    /// Iterate `(direction, present)` in N, E, S, W order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, bool)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.has(d)))
    }

    /// Number of sides with a wall.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&w| w).count()
    }
}

impl From<[bool; 4]> for Walls {
    fn from(flags: [bool; 4]) -> Self {
        Walls(flags)
    }
}

impl TryFrom<&[bool]> for Walls {
    type Error = VyuhaError;

    fn try_from(flags: &[bool]) -> Result<Self, Self::Error> {
        let flags: [bool; 4] = flags.try_into().map_err(|_| {
            VyuhaError::Sensor(format!(
                "expected 4 wall flags (N, E, S, W), got {}",
                flags.len()
            ))
        })?;
        Ok(Walls(flags))
    }
}

/// Parses the wall letters present, e.g. `"NE"`, `"sw"`, or `"-"` for none.
impl FromStr for Walls {
    type Err = VyuhaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = Walls::NONE;
        for ch in s.trim().chars() {
            let direction = match ch.to_ascii_uppercase() {
                'N' => Direction::North,
                'E' => Direction::East,
                'S' => Direction::South,
                'W' => Direction::West,
                '-' | '.' | ' ' | ',' => continue,
                other => {
                    return Err(VyuhaError::Sensor(format!(
                        "invalid wall letter '{}' in \"{}\"",
                        other, s
                    )));
                }
            };
            walls.set(direction, true);
        }
        Ok(walls)
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (d, present) in self.iter() {
            if present {
                write!(f, "{}", d.letter())?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}
