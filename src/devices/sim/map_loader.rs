//! Text maze files for the simulator.
//!
//! Uses the common micromouse drawing, north at the top:
//!
//! ```text
//! +---+---+---+
//! |       |   |
//! +   +   +   +
//! |   |       |
//! +---+---+---+
//! ```
//!
//! `---` between corners is a horizontal wall, `|` a vertical one. Missing
//! trailing characters read as open.

use std::path::Path;

use super::SimulatedMaze;
use crate::core::{Direction, GridCoord, Walls};
use crate::error::{Result, VyuhaError};

impl SimulatedMaze {
    /// Load a maze drawing from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_text(&content)
    }

    /// Parse a maze drawing.
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim_end().chars().collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect();

        if lines.len() < 3 || lines.len() % 2 == 0 {
            return Err(VyuhaError::Config(format!(
                "maze drawing needs an odd number (>= 3) of non-empty lines, got {}",
                lines.len()
            )));
        }
        let size = (lines.len() - 1) / 2;
        let expected_width = 4 * size + 1;
        if lines[0].len() != expected_width {
            return Err(VyuhaError::Config(format!(
                "top border of a {}-row maze must be {} characters wide, got {}",
                size,
                expected_width,
                lines[0].len()
            )));
        }

        let at = |line: usize, col: usize| lines[line].get(col).copied().unwrap_or(' ');

        let mut cells = vec![Walls::NONE; size * size];
        for row in 0..size {
            let y = size - 1 - row;
            let cell_line = 2 * row + 1;
            for x in 0..size {
                let col = 4 * x;
                let walls = Walls::new(
                    at(cell_line - 1, col + 1) == '-',
                    at(cell_line, col + 4) == '|',
                    at(cell_line + 1, col + 1) == '-',
                    at(cell_line, col) == '|',
                );
                cells[y * size + x] = walls;
            }
        }

        let maze = SimulatedMaze::from_cells(size, cells)
            .ok_or_else(|| VyuhaError::Config("maze cell count mismatch".to_string()))?;
        let boundary_open = maze.cells().any(|c| {
            c.neighbors_4()
                .iter()
                .any(|&(d, n)| !maze.contains(n) && maze.is_open(c, d))
        });
        if boundary_open {
            return Err(VyuhaError::Config(
                "maze drawing has a gap in its outer boundary".to_string(),
            ));
        }
        Ok(maze)
    }

    /// Render the maze in the same drawing format [`Self::from_text`] reads.
    pub fn to_text(&self) -> String {
        let size = self.size() as i32;
        let mut out = String::new();
        for y in (0..size).rev() {
            for x in 0..size {
                let walls = self.walls_at(GridCoord::new(x, y));
                out.push('+');
                out.push_str(if walls.has(Direction::North) {
                    "---"
                } else {
                    "   "
                });
            }
            out.push_str("+\n");
            for x in 0..size {
                let walls = self.walls_at(GridCoord::new(x, y));
                out.push(if walls.has(Direction::West) {
                    '|'
                } else {
                    ' '
                });
                out.push_str("   ");
            }
            let east = self
                .walls_at(GridCoord::new(size - 1, y))
                .has(Direction::East);
            out.push(if east { '|' } else { ' ' });
            out.push('\n');
        }
        for _ in 0..size {
            out.push_str("+---");
        }
        out.push_str("+\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
+---+---+---+
|       |   |
+   +   +   +
|   |       |
+   +---+   +
|           |
+---+---+---+
";

    #[test]
    fn test_parse_small_maze() {
        let maze = SimulatedMaze::from_text(SMALL).unwrap();
        assert_eq!(maze.size(), 3);
        // Top-left cell is (0, 2)
        assert_eq!(
            maze.walls_at(GridCoord::new(0, 2)),
            Walls::new(true, false, false, true)
        );
        assert!(maze.walls_at(GridCoord::new(1, 2)).has(Direction::East));
        assert!(maze.walls_at(GridCoord::new(0, 1)).has(Direction::East));
        assert!(maze.walls_at(GridCoord::new(1, 0)).has(Direction::North));
        assert!(maze.is_open(GridCoord::new(0, 0), Direction::East));
    }

    #[test]
    fn test_text_round_trip() {
        let maze = SimulatedMaze::generate(5, 11, 2);
        let parsed = SimulatedMaze::from_text(&maze.to_text()).unwrap();
        assert_eq!(parsed, maze);
    }

    #[test]
    fn test_rejects_open_boundary() {
        let broken = SMALL.replacen("|       |   |", "        |   |", 1);
        assert!(SimulatedMaze::from_text(&broken).is_err());
    }

    #[test]
    fn test_rejects_ragged_border() {
        assert!(SimulatedMaze::from_text("+---+--\n|   |\n+---+\n").is_err());
    }
}
