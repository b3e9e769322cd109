//! Operator-driven devices.
//!
//! Stands in for a robot without wall sensors: an operator looks at the
//! physical maze and answers one prompt per side, and moves the robot by
//! hand when told to. Each prompt blocks until a valid answer arrives.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use super::{Drive, WallSensor};
use crate::core::{Direction, GridCoord, Walls};
use crate::error::{Result, VyuhaError};

/// Wall sensor that asks an operator about each side.
pub struct ConsoleSensor<R, W> {
    input: R,
    output: W,
}

impl ConsoleSensor<StdinLock<'static>, Stdout> {
    /// Sensor over the process's stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSensor<R, W> {
    /// Sensor over arbitrary input/output streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, cell: GridCoord, direction: Direction) -> Result<bool> {
        let mut line = String::new();
        loop {
            write!(
                self.output,
                "Wall on {} side of {}? [y/n] ",
                direction, cell
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(VyuhaError::Sensor(
                    "operator input closed during scan".to_string(),
                ));
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "w" | "wall" => return Ok(true),
                "n" | "no" | "o" | "open" => return Ok(false),
                other => writeln!(self.output, "Unrecognised answer '{}'", other)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> WallSensor for ConsoleSensor<R, W> {
    fn scan(&mut self, cell: GridCoord) -> Result<Walls> {
        let mut walls = Walls::NONE;
        for direction in Direction::ALL {
            walls.set(direction, self.ask(cell, direction)?);
        }
        Ok(walls)
    }
}

/// Drive that tells the operator where to move the robot.
pub struct ConsoleDrive<W> {
    output: W,
}

impl ConsoleDrive<Stdout> {
    /// Drive writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDrive<W> {
    /// Drive writing to an arbitrary stream.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Drive for ConsoleDrive<W> {
    fn move_one_cell(&mut self, direction: Direction) -> Result<()> {
        writeln!(self.output, "Move one cell {}", direction)?;
        self.output.flush()?;
        Ok(())
    }
}
