//! Encounter generation
//!
//! The first visit to a tile rolls once on a fixed table: a sword, a spider,
//! or nothing.

use core::fmt;

use crate::rng::RandomSource;
use crate::stats::Stats;
use crate::tile::{Tile, TileKind};
use crate::{ENEMY_GLYPH, ENEMY_THRESHOLD, ITEM_GLYPH, ITEM_THRESHOLD};

/// What a newly visited tile turned out to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encounter {
    /// Stat deltas merged into the player on pickup
    Item(Stats),
    /// A static enemy stat block
    Enemy(Stats),
    Empty,
}

impl Encounter {
    /// Roll one encounter. Consumes exactly one draw.
    pub fn generate<R: RandomSource>(rng: &mut R) -> Self {
        let roll = rng.roll();
        let encounter = if roll < ITEM_THRESHOLD {
            Encounter::Item(sword())
        } else if roll < ENEMY_THRESHOLD {
            Encounter::Enemy(spider())
        } else {
            Encounter::Empty
        };
        log::debug!("encounter roll {roll:.3} -> {encounter}");
        encounter
    }

    /// The tile this encounter shows while it is being resolved.
    pub const fn tile(&self) -> Tile {
        match self {
            Encounter::Item(_) => Tile::with_glyph(ITEM_GLYPH, TileKind::Item),
            Encounter::Enemy(_) => Tile::with_glyph(ENEMY_GLYPH, TileKind::Enemy),
            Encounter::Empty => Tile::discovered(),
        }
    }
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encounter::Item(item) => write!(f, "item {}", item.name),
            Encounter::Enemy(enemy) => write!(f, "enemy {}", enemy.name),
            Encounter::Empty => f.write_str("empty"),
        }
    }
}

pub fn sword() -> Stats {
    Stats::new("Sword", 3, 1, 0)
}

pub fn spider() -> Stats {
    Stats::new("Spider", 10, 1, 6)
}
