//! Sensing and actuation collaborators.
//!
//! The navigator never talks to hardware directly. It consumes two traits:
//!
//! - [`WallSensor`]: reports the four walls around a cell (may block)
//! - [`Drive`]: moves the robot exactly one cell in a direction
//!
//! ## Implementations
//!
//! | Module | Sensor | Drive | Use |
//! |--------|--------|-------|-----|
//! | [`sim`] | [`sim::SimulatedSensor`] | [`sim::SimulatedDrive`] | ground-truth maze simulation |
//! | [`console`] | [`console::ConsoleSensor`] | [`console::ConsoleDrive`] | operator answers wall prompts |
//! | [`scripted`] | [`scripted::ScriptedSensor`] | [`scripted::RecordingDrive`] | replays and tests |

pub mod console;
pub mod scripted;
pub mod sim;

use crate::core::{Direction, GridCoord, Walls};
use crate::error::Result;

/// Wall sensing trait for hardware abstraction
pub trait WallSensor {
    /// Report wall presence around `cell` in N, E, S, W order.
    ///
    /// Called with the navigator's current cell. May block until the
    /// hardware (or operator) answers.
    fn scan(&mut self, cell: GridCoord) -> Result<Walls>;
}

/// Actuation trait for hardware abstraction
pub trait Drive {
    /// Move the robot one cell in `direction`.
    ///
    /// Returns once the robot is in the adjacent cell. Arrival is not
    /// re-verified by the caller.
    fn move_one_cell(&mut self, direction: Direction) -> Result<()>;
}

impl<T: WallSensor + ?Sized> WallSensor for &mut T {
    fn scan(&mut self, cell: GridCoord) -> Result<Walls> {
        (**self).scan(cell)
    }
}

impl<T: Drive + ?Sized> Drive for &mut T {
    fn move_one_cell(&mut self, direction: Direction) -> Result<()> {
        (**self).move_one_cell(direction)
    }
}

impl<T: WallSensor + ?Sized> WallSensor for Box<T> {
    fn scan(&mut self, cell: GridCoord) -> Result<Walls> {
        (**self).scan(cell)
    }
}

impl<T: Drive + ?Sized> Drive for Box<T> {
    fn move_one_cell(&mut self, direction: Direction) -> Result<()> {
        (**self).move_one_cell(direction)
    }
}
