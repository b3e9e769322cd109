//! Grid storage: known walls, explored flags and costs.

use crate::core::{Direction, GridCoord, Walls};

/// Knowledge about an S×S maze accumulated during a single run.
///
/// Coordinates passed to any accessor must lie inside the grid; an
/// out-of-bounds coordinate is a caller bug and panics.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub(super) size: usize,
    pub(super) goal: GridCoord,
    pub(super) costs: Vec<u32>,
    pub(super) known_walls: Vec<Walls>,
    pub(super) explored: Vec<bool>,
}

impl MazeGrid {
    /// Default maze edge length.
    pub const DEFAULT_SIZE: usize = 9;

    /// Create a grid whose goal is the center cell.
    ///
    /// # Panics
    /// If `size` is even or smaller than 3.
    pub fn new(size: usize) -> Self {
        let center = (size / 2) as i32;
        Self::with_goal(size, GridCoord::new(center, center))
    }

    /// Create a grid with an explicit goal cell.
    ///
    /// # Panics
    /// If `size` is even or smaller than 3, or `goal` is outside the grid.
    pub fn with_goal(size: usize, goal: GridCoord) -> Self {
        assert!(
            size >= 3 && size % 2 == 1,
            "maze size must be odd and at least 3, got {}",
            size
        );
        let cell_count = size * size;
        let mut grid = Self {
            size,
            goal,
            costs: vec![0; cell_count],
            known_walls: vec![Walls::NONE; cell_count],
            explored: vec![false; cell_count],
        };
        assert!(
            grid.contains(goal),
            "goal {} is outside a {}x{} maze",
            goal,
            size,
            size
        );

        // Admissible starting heuristic before any wall is known
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let coord = GridCoord::new(x, y);
                let idx = grid.index(coord);
                grid.costs[idx] = grid.manhattan_to_goal(coord);
            }
        }
        grid
    }

    // === Basic Properties ===

    /// Edge length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Center cell `(S div 2, S div 2)`.
    #[inline]
    pub fn center(&self) -> GridCoord {
        let c = (self.size / 2) as i32;
        GridCoord::new(c, c)
    }

    /// Goal cell the cost field is seeded from.
    #[inline]
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Whether `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        let s = self.size as i32;
        coord.x >= 0 && coord.y >= 0 && coord.x < s && coord.y < s
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    pub(crate) fn index(&self, coord: GridCoord) -> usize {
        assert!(
            self.contains(coord),
            "cell {} is outside a {}x{} maze",
            coord,
            self.size,
            self.size
        );
        coord.y as usize * self.size + coord.x as usize
    }

    /// Iterate all cells in row-major order, south row first.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + use<> {
        let s = self.size as i32;
        (0..s).flat_map(move |y| (0..s).map(move |x| GridCoord::new(x, y)))
    }

    /// Manhattan distance from `coord` to the goal.
    #[inline]
    pub fn manhattan_to_goal(&self, coord: GridCoord) -> u32 {
        coord.manhattan_distance(&self.goal)
    }

    // === Walls ===

    /// Record all four observed sides of `coord`.
    ///
    /// Each side is mirrored onto the neighbouring cell so a wall is stored
    /// once per edge from both sides. Does not recompute costs.
    pub fn record_walls(&mut self, coord: GridCoord, walls: Walls) {
        for (direction, present) in walls.iter() {
            self.record_wall(coord, direction, present);
        }
    }

    /// Record a single side of `coord` and its mirror on the neighbour.
    ///
    /// Boundary sides have no neighbour and are stored on `coord` only.
    pub fn record_wall(&mut self, coord: GridCoord, direction: Direction, present: bool) {
        let idx = self.index(coord);
        self.known_walls[idx].set(direction, present);

        let neighbor = coord.step(direction);
        if self.contains(neighbor) {
            let n_idx = self.index(neighbor);
            self.known_walls[n_idx].set(direction.opposite(), present);
        }
    }

    /// Known walls of `coord`.
    #[inline]
    pub fn known_walls(&self, coord: GridCoord) -> Walls {
        self.known_walls[self.index(coord)]
    }

    /// Whether a wall has been observed on side `direction` of `coord`.
    #[inline]
    pub fn known_wall(&self, coord: GridCoord, direction: Direction) -> bool {
        self.known_walls(coord).has(direction)
    }

    /// In-bounds neighbours of `coord` not separated from it by a known wall.
    ///
    /// Always yielded in N, E, S, W order.
    pub fn neighbors_without_known_wall(
        &self,
        coord: GridCoord,
    ) -> impl Iterator<Item = (Direction, GridCoord)> + '_ {
        let walls = self.known_walls(coord);
        coord
            .neighbors_4()
            .into_iter()
            .filter(move |&(d, n)| !walls.has(d) && self.contains(n))
    }

    // === Exploration ===

    /// Mark a cell as physically visited.
    #[inline]
    pub fn mark_explored(&mut self, coord: GridCoord) {
        let idx = self.index(coord);
        self.explored[idx] = true;
    }

    /// Whether the robot has occupied `coord`.
    #[inline]
    pub fn is_explored(&self, coord: GridCoord) -> bool {
        self.explored[self.index(coord)]
    }

    /// Number of visited cells.
    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&e| e).count()
    }

    // === Costs ===

    /// Current cost estimate of `coord`.
    #[inline]
    pub fn cost_at(&self, coord: GridCoord) -> u32 {
        self.costs[self.index(coord)]
    }

    /// Raw row-major cost field.
    #[inline]
    pub fn costs(&self) -> &[u32] {
        &self.costs
    }
}

impl Default for MazeGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let grid = MazeGrid::new(9);
        assert_eq!(grid.center(), GridCoord::new(4, 4));
        assert_eq!(grid.goal(), grid.center());
        assert_eq!(grid.cost_at(GridCoord::new(4, 4)), 0);
        assert_eq!(grid.cost_at(GridCoord::new(0, 0)), 8);
        assert_eq!(grid.cost_at(GridCoord::new(8, 3)), 5);
        assert_eq!(grid.explored_count(), 0);
        for coord in grid.cells() {
            assert_eq!(grid.known_walls(coord), Walls::NONE);
        }
    }

    #[test]
    #[should_panic(expected = "odd")]
    fn test_even_size_rejected() {
        let _ = MazeGrid::new(8);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_access_panics() {
        let grid = MazeGrid::new(3);
        grid.cost_at(GridCoord::new(3, 0));
    }

    #[test]
    fn test_wall_is_mirrored() {
        let mut grid = MazeGrid::new(5);
        let cell = GridCoord::new(2, 2);
        grid.record_walls(cell, Walls::new(true, false, true, false));

        assert!(grid.known_wall(GridCoord::new(2, 3), Direction::South));
        assert!(grid.known_wall(GridCoord::new(2, 1), Direction::North));
        assert!(!grid.known_wall(GridCoord::new(3, 2), Direction::West));

        // Later open observation from the other side clears the shared edge
        grid.record_wall(GridCoord::new(2, 3), Direction::South, false);
        assert!(!grid.known_wall(cell, Direction::North));
    }

    #[test]
    fn test_boundary_wall_has_no_mirror() {
        let mut grid = MazeGrid::new(3);
        grid.record_walls(GridCoord::new(0, 0), Walls::new(false, false, true, true));
        assert!(grid.known_wall(GridCoord::new(0, 0), Direction::South));
        assert!(grid.known_wall(GridCoord::new(0, 0), Direction::West));
        assert!(!grid.known_wall(GridCoord::new(0, 1), Direction::South));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let mut grid = MazeGrid::new(3);
        let corner: Vec<_> = grid
            .neighbors_without_known_wall(GridCoord::new(0, 0))
            .collect();
        assert_eq!(
            corner,
            vec![
                (Direction::North, GridCoord::new(0, 1)),
                (Direction::East, GridCoord::new(1, 0)),
            ]
        );

        grid.record_wall(GridCoord::new(1, 1), Direction::East, true);
        let center: Vec<_> = grid
            .neighbors_without_known_wall(GridCoord::new(1, 1))
            .map(|(_, c)| c)
            .collect();
        assert_eq!(
            center,
            vec![
                GridCoord::new(1, 2),
                GridCoord::new(1, 0),
                GridCoord::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_explored_tracking() {
        let mut grid = MazeGrid::new(3);
        let cell = GridCoord::new(0, 2);
        assert!(!grid.is_explored(cell));
        grid.mark_explored(cell);
        grid.mark_explored(cell);
        assert!(grid.is_explored(cell));
        assert_eq!(grid.explored_count(), 1);
    }

    #[test]
    fn test_custom_goal_heuristic() {
        let grid = MazeGrid::with_goal(5, GridCoord::new(4, 4));
        assert_eq!(grid.cost_at(GridCoord::new(4, 4)), 0);
        assert_eq!(grid.cost_at(GridCoord::new(0, 0)), 8);
    }
}
