//! Ground-truth maze for simulation.
//!
//! Only the simulated devices read this; the navigator learns walls
//! through [`crate::devices::WallSensor`] like it would on hardware.

use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::core::{Direction, GridCoord, Walls};

/// The actual walls of an S×S maze.
///
/// Walls are stored per cell and kept symmetric; the outer boundary is
/// always walled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedMaze {
    size: usize,
    walls: Vec<Walls>,
}

impl SimulatedMaze {
    /// Maze with every wall present.
    pub fn closed(size: usize) -> Self {
        assert!(size > 0, "maze size must be positive");
        Self {
            size,
            walls: vec![Walls::ALL; size * size],
        }
    }

    /// Maze with only the outer boundary walled.
    pub fn fully_open(size: usize) -> Self {
        let mut maze = Self::closed(size);
        for coord in maze.cells().collect::<Vec<_>>() {
            maze.carve(coord, Direction::North);
            maze.carve(coord, Direction::East);
        }
        maze
    }

    /// Random perfect maze plus `extra_passages` random openings.
    ///
    /// Depth-first carve from (0, 0), picking among unvisited neighbours
    /// (enumerated N, E, S, W) uniformly. The extra passages add loops so
    /// more than one route to the center usually exists. A `seed` of 0
    /// draws from OS entropy.
    pub fn generate(size: usize, seed: u64, extra_passages: usize) -> Self {
        let mut rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };

        let mut maze = Self::closed(size);
        let mut visited = vec![false; size * size];
        let start = GridCoord::new(0, 0);
        visited[maze.index(start)] = true;
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let unvisited: Vec<(Direction, GridCoord)> = current
                .neighbors_4()
                .into_iter()
                .filter(|&(_, n)| maze.contains(n) && !visited[maze.index(n)])
                .collect();

            if unvisited.is_empty() {
                stack.pop();
                continue;
            }

            let (direction, next) = unvisited[rng.gen_range(0..unvisited.len())];
            maze.carve(current, direction);
            visited[maze.index(next)] = true;
            stack.push(next);
        }

        for _ in 0..extra_passages {
            let x = rng.gen_range(0..size) as i32;
            let y = rng.gen_range(0..size) as i32;
            let direction = Direction::ALL[rng.gen_range(0..4)];
            maze.carve(GridCoord::new(x, y), direction);
        }

        tracing::debug!(
            "Generated {}x{} maze (seed {}, {} extra passages)",
            size,
            size,
            seed,
            extra_passages
        );
        maze
    }

    /// Build from explicit per-cell walls (row-major, south row first).
    ///
    /// Returns `None` if the slice length does not match `size * size`.
    pub fn from_cells(size: usize, walls: Vec<Walls>) -> Option<Self> {
        (walls.len() == size * size).then_some(Self { size, walls })
    }

    /// Edge length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies inside the maze.
    pub fn contains(&self, coord: GridCoord) -> bool {
        let s = self.size as i32;
        coord.x >= 0 && coord.y >= 0 && coord.x < s && coord.y < s
    }

    fn index(&self, coord: GridCoord) -> usize {
        assert!(self.contains(coord), "cell {} is outside the maze", coord);
        coord.y as usize * self.size + coord.x as usize
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + use<> {
        let s = self.size as i32;
        (0..s).flat_map(move |y| (0..s).map(move |x| GridCoord::new(x, y)))
    }

    /// True walls around `coord`.
    pub fn walls_at(&self, coord: GridCoord) -> Walls {
        self.walls[self.index(coord)]
    }

    /// Whether the edge on side `direction` of `coord` is open.
    pub fn is_open(&self, coord: GridCoord, direction: Direction) -> bool {
        !self.walls_at(coord).has(direction)
    }

    /// Remove the wall on side `direction` of `coord` from both cells.
    ///
    /// Boundary walls stay; returns whether an edge was opened.
    pub fn carve(&mut self, coord: GridCoord, direction: Direction) -> bool {
        self.set_edge(coord, direction, false)
    }

    /// Put a wall on side `direction` of `coord` in both cells.
    pub fn add_wall(&mut self, coord: GridCoord, direction: Direction) {
        let idx = self.index(coord);
        self.walls[idx].set(direction, true);
        let neighbor = coord.step(direction);
        if self.contains(neighbor) {
            let n_idx = self.index(neighbor);
            self.walls[n_idx].set(direction.opposite(), true);
        }
    }

    fn set_edge(&mut self, coord: GridCoord, direction: Direction, present: bool) -> bool {
        let neighbor = coord.step(direction);
        if !self.contains(neighbor) {
            return false;
        }
        let idx = self.index(coord);
        let n_idx = self.index(neighbor);
        self.walls[idx].set(direction, present);
        self.walls[n_idx].set(direction.opposite(), present);
        true
    }

    /// Number of cells reachable from `from` through open edges.
    pub fn reachable_count(&self, from: GridCoord) -> usize {
        let mut seen = vec![false; self.size * self.size];
        let mut stack = vec![from];
        seen[self.index(from)] = true;
        let mut count = 0;
        while let Some(current) = stack.pop() {
            count += 1;
            for (d, next) in current.neighbors_4() {
                if self.is_open(current, d) && self.contains(next) {
                    let idx = self.index(next);
                    if !seen[idx] {
                        seen[idx] = true;
                        stack.push(next);
                    }
                }
            }
        }
        count
    }
}
