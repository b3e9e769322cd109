//! Core types shared by the grid, the navigator and the devices.
//!
//! Coordinates follow the maze convention used throughout the crate:
//! - **X-axis**: East (column index grows to the east)
//! - **Y-axis**: North (row index grows to the north)
//! - Cell (0, 0) is the south-west corner of the maze
//!
//! ## Types
//!
//! - [`GridCoord`]: Integer cell indices
//! - [`Direction`]: One of the four cardinal headings, always enumerated N, E, S, W
//! - [`Walls`]: Exactly four wall flags for one cell, in N, E, S, W order

mod direction;
mod point;
mod walls;

pub use direction::Direction;
pub use point::GridCoord;
pub use walls::Walls;
