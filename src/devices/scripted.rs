//! Scripted devices for replays and tests.

use std::collections::VecDeque;

use super::{Drive, WallSensor};
use crate::core::{Direction, GridCoord, Walls};
use crate::error::{Result, VyuhaError};

/// Sensor that replays a fixed sequence of readings.
///
/// Returns a sensor error once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSensor {
    readings: VecDeque<Walls>,
    queried: Vec<GridCoord>,
}

impl ScriptedSensor {
    /// Sensor that will answer with `readings` in order.
    pub fn new(readings: impl IntoIterator<Item = Walls>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            queried: Vec::new(),
        }
    }

    /// Cells the navigator asked about, in order.
    pub fn queried(&self) -> &[GridCoord] {
        &self.queried
    }

    /// Readings not yet consumed.
    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl WallSensor for ScriptedSensor {
    fn scan(&mut self, cell: GridCoord) -> Result<Walls> {
        self.queried.push(cell);
        self.readings.pop_front().ok_or_else(|| {
            VyuhaError::Sensor(format!("no scripted reading left for {}", cell))
        })
    }
}

/// Drive that only records the commanded directions.
#[derive(Clone, Debug, Default)]
pub struct RecordingDrive {
    moves: Vec<Direction>,
}

impl RecordingDrive {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commanded moves in order.
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }
}

impl Drive for RecordingDrive {
    fn move_one_cell(&mut self, direction: Direction) -> Result<()> {
        self.moves.push(direction);
        Ok(())
    }
}
