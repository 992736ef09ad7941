//! Session configuration
//!
//! Dimensions, start cell and seed are fixed at construction. The goal is
//! always the top-right corner and is not configurable.

use crate::error::ConfigError;
use crate::grid::Position;
use crate::stats::Stats;
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Start cell; bottom-left when `None`
    pub start: Option<Position>,
    /// RNG seed; drawn from entropy when `None`
    pub seed: Option<u64>,
    pub player: Stats,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: None,
            seed: None,
            player: Stats::player(),
        }
    }
}

impl GameConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, x: usize, y: usize) -> Self {
        self.start = Some(Position::new(x, y));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_player(mut self, player: Stats) -> Self {
        self.player = player;
        self
    }

    pub fn start_position(&self) -> Position {
        self.start
            .unwrap_or_else(|| Position::new(0, self.height.saturating_sub(1)))
    }

    pub fn goal_position(&self) -> Position {
        Position::new(self.width.saturating_sub(1), 0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        let start = self.start_position();
        if start.x >= self.width || start.y >= self.height {
            return Err(ConfigError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width: self.width,
                height: self.height,
            });
        }

        if start == self.goal_position() {
            return Err(ConfigError::StartOnGoal {
                x: start.x,
                y: start.y,
            });
        }

        if self.player.is_defeated() {
            return Err(ConfigError::PlayerDefeated {
                hp: self.player.hp,
            });
        }

        Ok(())
    }
}
