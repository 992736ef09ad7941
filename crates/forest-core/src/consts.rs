//! Core game constants
//!
//! Glyphs, default grid dimensions, and the fixed stat blocks.

/// Default grid dimensions
pub const DEFAULT_WIDTH: usize = 5;
pub const DEFAULT_HEIGHT: usize = 5;

/// Map glyphs
pub const PLAYER_GLYPH: &str = "🦄";
pub const GOAL_GLYPH: &str = "🌈";
pub const DISCOVERED_GLYPH: &str = "✨";
pub const ITEM_GLYPH: &str = "🗡️";
pub const ENEMY_GLYPH: &str = "🕷️";

/// Decorative glyphs picked at random for untouched background tiles
pub const BACKGROUND_GLYPHS: [&str; 5] = ["🌳", "🌲", "🪵", "🌴", "🪨"];

/// Starting player stat block
pub const PLAYER_NAME: &str = "Althea";
pub const PLAYER_ATTACK: i32 = 10;
pub const PLAYER_DEFENSE: i32 = 5;
pub const PLAYER_HP: i32 = 20;

/// Encounter cut points on a [0, 1) roll: item below the first, enemy below
/// the second, empty otherwise. Rates are 15% / 20% / 65%.
pub const ITEM_THRESHOLD: f64 = 0.15;
pub const ENEMY_THRESHOLD: f64 = 0.35;

/// Width of the line printed between turns
pub const SEPARATOR_WIDTH: usize = 32;
