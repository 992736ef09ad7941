//! Configuration errors
//!
//! Winning and losing are session states, not errors, and walking into the
//! edge of the map is reported as a turn event. The only failures the core
//! can produce are a bad setup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("Start ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Start ({x}, {y}) is the goal tile")]
    StartOnGoal { x: usize, y: usize },

    #[error("Player must start with positive hp, got {hp}")]
    PlayerDefeated { hp: i32 },
}
