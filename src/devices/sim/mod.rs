//! Simulated maze devices.
//!
//! A shared [`SimulatedMaze`] answers sensor queries and checks every
//! commanded move, so the navigator can be exercised without hardware:
//!
//! ```rust,ignore
//! let maze = Arc::new(SimulatedMaze::generate(9, 42, 4));
//! let (sensor, drive) = sim::devices(maze, GridCoord::new(0, 0));
//! let mut navigator = Navigator::new(MazeGrid::new(9), sensor, drive, start, config);
//! ```

mod map_loader;
mod maze;

pub use maze::SimulatedMaze;

use std::sync::Arc;

use super::{Drive, WallSensor};
use crate::core::{Direction, GridCoord, Walls};
use crate::error::{Result, VyuhaError};

/// Wall sensor that reads the ground-truth maze.
#[derive(Clone, Debug)]
pub struct SimulatedSensor {
    maze: Arc<SimulatedMaze>,
    scans: usize,
}

impl SimulatedSensor {
    /// Create a sensor over `maze`.
    pub fn new(maze: Arc<SimulatedMaze>) -> Self {
        Self { maze, scans: 0 }
    }

    /// Number of scans answered so far.
    pub fn scans(&self) -> usize {
        self.scans
    }
}

impl WallSensor for SimulatedSensor {
    fn scan(&mut self, cell: GridCoord) -> Result<Walls> {
        if !self.maze.contains(cell) {
            return Err(VyuhaError::Sensor(format!(
                "scan requested at {} outside the simulated maze",
                cell
            )));
        }
        self.scans += 1;
        let walls = self.maze.walls_at(cell);
        tracing::trace!("Simulated scan at {}: {}", cell, walls);
        Ok(walls)
    }
}

/// Drive that tracks its own position and refuses to pass through walls.
#[derive(Clone, Debug)]
pub struct SimulatedDrive {
    maze: Arc<SimulatedMaze>,
    position: GridCoord,
    moves: Vec<Direction>,
}

impl SimulatedDrive {
    /// Create a drive starting at `start`.
    pub fn new(maze: Arc<SimulatedMaze>, start: GridCoord) -> Self {
        Self {
            maze,
            position: start,
            moves: Vec::new(),
        }
    }

    /// Where the simulated robot actually is.
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Every move executed, in order.
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }
}

impl Drive for SimulatedDrive {
    fn move_one_cell(&mut self, direction: Direction) -> Result<()> {
        if !self.maze.is_open(self.position, direction) {
            return Err(VyuhaError::Drive(format!(
                "collision: wall on {} side of {}",
                direction, self.position
            )));
        }
        self.position = self.position.step(direction);
        self.moves.push(direction);
        Ok(())
    }
}

/// Sensor and drive pair sharing one maze.
pub fn devices(maze: Arc<SimulatedMaze>, start: GridCoord) -> (SimulatedSensor, SimulatedDrive) {
    (
        SimulatedSensor::new(Arc::clone(&maze)),
        SimulatedDrive::new(maze, start),
    )
}
