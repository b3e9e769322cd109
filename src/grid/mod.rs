//! Maze knowledge and the flood-fill cost field.
//!
//! The grid keeps three per-cell layers in row-major `Vec`s:
//!
//! ```text
//! known_walls: [Walls Walls Walls ...]   walls the robot has observed
//! explored:    [bool  bool  bool  ...]   cells the robot has occupied
//! costs:       [u32   u32   u32   ...]   estimated moves to the goal
//! ```
//!
//! ## Cost Model
//!
//! ```text
//! cost(goal) = 0
//! cost(c)    = BFS distance from goal over edges with no known wall
//!            | Manhattan(c, goal)   if the fill never reaches c
//! ```
//!
//! Wall updates and recomputation are separate calls so a batch of four
//! observations costs a single O(S²) fill:
//!
//! ```rust,ignore
//! grid.record_walls(cell, walls);
//! grid.recompute_costs();
//! ```

mod flood_fill;
mod storage;

pub use flood_fill::FloodFillStats;
pub use storage::MazeGrid;
