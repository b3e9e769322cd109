//! Test utilities for VyuhaNav.
//!
//! Builders for random wall knowledge, a reference BFS to check the flood
//! fill against, and navigator setups over simulated mazes.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use rand::prelude::*;
use rand::rngs::SmallRng;
use vyuha_nav::devices::sim::{self, SimulatedDrive, SimulatedSensor};
use vyuha_nav::{Direction, GridCoord, MazeGrid, Navigator, NavigatorConfig, SimulatedMaze};

pub type SimNavigator = Navigator<SimulatedSensor, SimulatedDrive>;

/// Grid with each interior edge walled with probability `density`.
pub fn random_known_walls(size: usize, density: f64, seed: u64) -> MazeGrid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = MazeGrid::new(size);
    for coord in grid.cells() {
        for d in [Direction::North, Direction::East] {
            if grid.contains(coord.step(d)) && rng.gen_bool(density) {
                grid.record_wall(coord, d, true);
            }
        }
    }
    grid
}

/// Shortest distance from the goal over edges without a known wall,
/// `None` where unreachable. Indexed `y * size + x`.
pub fn reference_distances(grid: &MazeGrid) -> Vec<Option<u32>> {
    let size = grid.size();
    let idx = |c: GridCoord| c.y as usize * size + c.x as usize;
    let mut dist = vec![None; size * size];
    let mut queue = VecDeque::new();
    dist[idx(grid.goal())] = Some(0);
    queue.push_back(grid.goal());

    while let Some(cell) = queue.pop_front() {
        let here = dist[idx(cell)].unwrap_or(0);
        for d in Direction::ALL {
            let next = cell.step(d);
            if !grid.contains(next) || grid.known_wall(cell, d) {
                continue;
            }
            if dist[idx(next)].is_none() {
                dist[idx(next)] = Some(here + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Navigator over `maze` from `start` towards the center.
pub fn sim_navigator(maze: SimulatedMaze, start: GridCoord, config: NavigatorConfig) -> SimNavigator {
    let grid = MazeGrid::new(maze.size());
    let (sensor, drive) = sim::devices(Arc::new(maze), start);
    Navigator::new(grid, sensor, drive, start, config)
}

/// Step limit that always suffices for a connected maze of `size`.
pub fn generous_limit(size: usize) -> NavigatorConfig {
    NavigatorConfig {
        max_steps: Some(size.pow(4)),
    }
}
