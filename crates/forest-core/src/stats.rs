//! Actor stats shared by the player, items and enemies
//!
//! For an item the fields are deltas rather than absolute values.

use core::fmt;

use crate::{PLAYER_ATTACK, PLAYER_DEFENSE, PLAYER_HP, PLAYER_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stats {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
}

impl Stats {
    pub fn new(name: impl Into<String>, attack: i32, defense: i32, hp: i32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            hp,
        }
    }

    /// The starting player stat block
    pub fn player() -> Self {
        Self::new(PLAYER_NAME, PLAYER_ATTACK, PLAYER_DEFENSE, PLAYER_HP)
    }

    /// Add another stat block's fields onto this one. The name is kept.
    /// Fields saturate at the `i32` bounds.
    pub fn apply(&mut self, delta: &Stats) {
        self.attack = self.attack.saturating_add(delta.attack);
        self.defense = self.defense.saturating_add(delta.defense);
        self.hp = self.hp.saturating_add(delta.hp);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::player()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: attack {}, defense {}, hp {}",
            self.name, self.attack, self.defense, self.hp
        )
    }
}
