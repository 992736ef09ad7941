//! Grid tiles
//!
//! Tiles are never mutated. Visiting a cell replaces its tile wholesale.

use strum::{Display, EnumIter};

use crate::rng::RandomSource;
use crate::{BACKGROUND_GLYPHS, DISCOVERED_GLYPH, GOAL_GLYPH, PLAYER_GLYPH};

/// Categories of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TileKind {
    Background,
    Player,
    Goal,
    Discovered,
    Item,
    Enemy,
}

/// A single grid cell: what to draw and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    glyph: &'static str,
    kind: TileKind,
}

impl Tile {
    /// An untouched forest tile with a random decorative glyph.
    pub fn background<R: RandomSource>(rng: &mut R) -> Self {
        let index = rng.rn2(BACKGROUND_GLYPHS.len() as u32) as usize;
        Self::with_glyph(BACKGROUND_GLYPHS[index], TileKind::Background)
    }

    pub const fn with_glyph(glyph: &'static str, kind: TileKind) -> Self {
        Self { glyph, kind }
    }

    pub const fn player() -> Self {
        Self::with_glyph(PLAYER_GLYPH, TileKind::Player)
    }

    pub const fn goal() -> Self {
        Self::with_glyph(GOAL_GLYPH, TileKind::Goal)
    }

    pub const fn discovered() -> Self {
        Self::with_glyph(DISCOVERED_GLYPH, TileKind::Discovered)
    }

    pub const fn glyph(&self) -> &'static str {
        self.glyph
    }

    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn is_discovered(&self) -> bool {
        self.kind == TileKind::Discovered
    }
}

/// Narration for a tile with nothing in it.
pub fn describe_empty<R: RandomSource>(rng: &mut R) -> &'static str {
    let roll = rng.roll();
    if roll < 0.33 {
        "Nothing found"
    } else if roll < 0.66 {
        "Coast is clear"
    } else {
        "The forest is quiet"
    }
}
