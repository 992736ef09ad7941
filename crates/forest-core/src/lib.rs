//! forest-core: Core game logic for the forest grid exploration game
//!
//! This crate contains all game logic with no terminal I/O.
//! Randomness is injected through [`RandomSource`] so every branch can be
//! driven from tests.

pub mod combat;
pub mod config;
pub mod direction;
pub mod encounter;
pub mod error;
pub mod grid;
pub mod session;
pub mod stats;
pub mod tile;

mod consts;
mod rng;

pub use combat::CombatOutcome;
pub use config::GameConfig;
pub use consts::*;
pub use direction::Direction;
pub use encounter::Encounter;
pub use error::ConfigError;
pub use grid::{Grid, Position};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use session::{DefeatCause, Session, SessionState, TurnEvent, TurnReport};
pub use stats::Stats;
pub use tile::{Tile, TileKind};
