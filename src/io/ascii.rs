//! Plain-text rendering of the navigator's maze knowledge.

use crate::core::{Direction, GridCoord};
use crate::grid::MazeGrid;

/// Render known walls and costs, north row first.
///
/// Each cell shows its cost (`++` above 99) followed by `*` once explored.
/// The robot's cell shows ` @ ` instead.
///
/// ```text
/// +---+---+---+
/// | 2   1   2 |
/// +   +---+   +
/// | 3*  @   1 |
/// +---+---+---+
/// ```
pub fn render_ascii(grid: &MazeGrid, robot: Option<GridCoord>) -> String {
    let size = grid.size() as i32;
    let mut out = String::new();

    for y in (0..size).rev() {
        // North edge of the row
        out.push('+');
        for x in 0..size {
            let wall = grid.known_wall(GridCoord::new(x, y), Direction::North);
            out.push_str(if wall { "---+" } else { "   +" });
        }
        out.push('\n');

        for x in 0..size {
            let coord = GridCoord::new(x, y);
            let west = grid.known_wall(coord, Direction::West);
            out.push(if west { '|' } else { ' ' });
            out.push_str(&cell_label(grid, coord, robot));
        }
        let east = grid.known_wall(GridCoord::new(size - 1, y), Direction::East);
        out.push(if east { '|' } else { ' ' });
        out.push('\n');
    }

    out.push('+');
    for x in 0..size {
        let wall = grid.known_wall(GridCoord::new(x, 0), Direction::South);
        out.push_str(if wall { "---+" } else { "   +" });
    }
    out.push('\n');
    out
}

fn cell_label(grid: &MazeGrid, coord: GridCoord, robot: Option<GridCoord>) -> String {
    if robot == Some(coord) {
        return " @ ".to_string();
    }
    let cost = grid.cost_at(coord);
    let mark = if grid.is_explored(coord) { '*' } else { ' ' };
    if cost > 99 {
        format!("++{}", mark)
    } else {
        format!("{:>2}{}", cost, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Walls;

    #[test]
    fn test_render_open_grid() {
        let grid = MazeGrid::new(3);
        let text = render_ascii(&grid, None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "+   +   +   +");
        assert_eq!(lines[3], "  1   0   1  ");
        assert_eq!(lines[5], "  2   1   2  ");
    }

    #[test]
    fn test_render_walls_robot_and_explored() {
        let mut grid = MazeGrid::new(3);
        grid.record_walls(GridCoord::new(0, 0), Walls::new(false, true, true, true));
        grid.mark_explored(GridCoord::new(0, 1));
        grid.recompute_costs();

        let text = render_ascii(&grid, Some(GridCoord::new(0, 0)));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "+   +   +   +");
        assert_eq!(lines[5], "| @ | 1   2  ");
        assert_eq!(lines[6], "+---+   +   +");
        assert!(lines[3].starts_with("  1*"));
    }

    #[test]
    fn test_large_cost_is_clamped() {
        let grid = MazeGrid::new(101);
        let text = render_ascii(&grid, None);
        assert!(text.lines().nth(1).is_some_and(|l| l.contains("++")));
    }
}
