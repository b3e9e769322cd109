//! Error types for VyuhaNav

use thiserror::Error;

/// VyuhaNav error type
///
/// Out-of-bounds coordinates are not represented here: they are caller bugs
/// and panic inside [`crate::grid::MazeGrid`].
#[derive(Error, Debug)]
pub enum VyuhaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sensor error: {0}")]
    Sensor(String),

    #[error("Drive error: {0}")]
    Drive(String),

    #[error("Step limit of {0} reached before the goal or a dead end")]
    StepLimit(usize),

    #[error("Run already finished ({0})")]
    RunFinished(&'static str),
}

impl From<toml::de::Error> for VyuhaError {
    fn from(e: toml::de::Error) -> Self {
        VyuhaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VyuhaError>;
