//! # VyuhaNav
//!
//! Flood-fill navigation core for a cell-based micromouse maze.
//!
//! ## Overview
//!
//! The robot starts in one cell of an odd-sized square maze and has to reach
//! the goal (the center by default) knowing nothing about the walls. Every
//! step it:
//!
//! 1. **Senses** the four sides of its cell through a [`WallSensor`]
//! 2. **Records** the walls in its [`MazeGrid`], mirrored onto neighbors
//! 3. **Floods** a BFS cost field outward from the goal
//! 4. **Moves** one cell through a [`Drive`], preferring unexplored cells
//!    and then lower cost
//!
//! The run ends with the goal reached or with the robot boxed in.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vyuha_nav::{GridCoord, MazeGrid, Navigator, NavigatorConfig, SimulatedMaze};
//! use vyuha_nav::devices::sim;
//!
//! let maze = Arc::new(SimulatedMaze::generate(9, 42, 4));
//! let start = GridCoord::new(0, 0);
//! let (sensor, drive) = sim::devices(maze, start);
//!
//! let mut navigator = Navigator::new(MazeGrid::new(9), sensor, drive, start,
//!     NavigatorConfig::default());
//! let outcome = navigator.solve()?;
//! println!("{:?} after {} steps", outcome, navigator.steps());
//! ```
//!
//! ## Coordinate System
//!
//! - X: column index, grows east
//! - Y: row index, grows north
//! - `(0, 0)` is the south-west corner

// Cell coordinates, directions, wall sets
pub mod core;

// Known walls, exploration flags, cost field
pub mod grid;

// Sense-plan-act loop
pub mod navigation;

// Sensor and drive collaborators
pub mod devices;

// TOML configuration
pub mod config;

// ASCII and SVG rendering
pub mod io;

pub mod error;

pub use core::{Direction, GridCoord, Walls};
pub use devices::sim::SimulatedMaze;
pub use devices::{Drive, WallSensor};
pub use error::{Result, VyuhaError};
pub use grid::{FloodFillStats, MazeGrid};
pub use navigation::{
    Navigator, NavigatorConfig, NavigationState, RunReport, SolveOutcome, StepOutcome,
};
