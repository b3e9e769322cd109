//! Sense → update → choose → move loop.
//!
//! # Architecture
//!
//! The navigator is device-agnostic. Each [`Navigator::run_step`]:
//!
//! 1. Scans the current cell through a [`crate::devices::WallSensor`]
//! 2. Records the walls in the [`crate::grid::MazeGrid`] and recomputes costs
//! 3. Lists neighbours not behind a known wall (none → [`StepOutcome::Stuck`])
//! 4. Picks a target with [`select_target`]: unexplored cells first, then
//!    lowest cost, ties broken by N, E, S, W order
//! 5. Commands a [`crate::devices::Drive`] and marks the target explored
//!
//! [`Navigator::solve`] repeats steps until the goal or a dead end:
//!
//! ```text
//! Running ──run_step──► Running
//!    │
//!    ├── GoalReached ──► Solved      (terminal)
//!    └── Stuck ────────► Unsolvable  (terminal)
//! ```

mod navigator;
mod policy;
mod state;

pub use navigator::{Navigator, NavigatorConfig};
pub use policy::select_target;
pub use state::{NavigationState, RunReport, SolveOutcome, StepOutcome};
