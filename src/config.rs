//! Run configuration shared by the turn engine, the search pool and the display.

use serde::Serialize;
use thiserror::Error;

pub const MIN_BOARD_SIZE: usize = 4;
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Configuration errors. All of them are fatal: no game is created.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Minimum board size is 4, got {size}.")]
    BoardTooSmall { size: usize },
    #[error("Minimum threads is 1.")]
    NoWorkers,
    #[error("Failed to set worker count: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// How the driver renders the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    #[default]
    Normal,
    Silent,
    Colorized,
    /// Only a single timing line at the end.
    Timing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub board_size: usize,
    pub worker_count: usize,
    /// Pause between turns. Consumed by the driver loop, never by the engine.
    pub delay_ms: u64,
    pub display_mode: DisplayMode,
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            worker_count: 1,
            delay_ms: 0,
            display_mode: DisplayMode::Normal,
            animate: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        if self.worker_count < 1 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }
}

pub(crate) fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::BoardTooSmall { size });
    }
    Ok(())
}
