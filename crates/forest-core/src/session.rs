//! Session and turn controller
//!
//! A session owns the grid, the player and the random source. Each call to
//! [`Session::take_turn`] moves the player one cell and resolves whatever is
//! there. Reaching the goal or dropping to 0 hp moves the session into a
//! terminal state and further turns are no-ops. Nothing here exits the
//! process; the caller decides what to do with the final state.

use core::fmt;

use crate::combat::{self, CombatOutcome};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::encounter::Encounter;
use crate::error::ConfigError;
use crate::grid::{Grid, Position};
use crate::rng::{GameRng, RandomSource};
use crate::stats::Stats;
use crate::tile::{self, Tile};
use crate::PLAYER_GLYPH;

/// Why the player lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefeatCause {
    /// The enemy's defense was out of reach; no blows were traded.
    Overpowered { enemy: String },
    /// The player ran out of hp during the fight.
    Slain { enemy: String },
}

impl DefeatCause {
    pub fn enemy(&self) -> &str {
        match self {
            DefeatCause::Overpowered { enemy } | DefeatCause::Slain { enemy } => enemy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    /// Reached the goal tile
    Escaped,
    Defeated(DefeatCause),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::AwaitingInput)
    }
}

/// One line of narration produced while resolving a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The move would leave the grid; nothing changed.
    Blocked(Direction),
    /// Nothing here, either freshly explored or already discovered.
    Quiet(&'static str),
    ItemFound { item: Stats, stats: Stats },
    EnemyAppeared(Stats),
    EnemyDefeated {
        enemy: String,
        damage_taken: i32,
        stats: Stats,
    },
    PlayerDefeated(DefeatCause),
    Escaped,
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Blocked(dir) => write!(f, "Cannot move {dir}"),
            TurnEvent::Quiet(text) => f.write_str(text),
            TurnEvent::ItemFound { item, stats } => write!(
                f,
                "You found a {}! ({:+} attack, {:+} defense, {:+} hp) Your updated stats: {stats}",
                item.name, item.attack, item.defense, item.hp
            ),
            TurnEvent::EnemyAppeared(enemy) => write!(
                f,
                "A {} blocks your path! (attack: {}, defense: {}, hp: {})",
                enemy.name, enemy.attack, enemy.defense, enemy.hp
            ),
            TurnEvent::EnemyDefeated { enemy, stats, .. } => {
                write!(f, "You defeated the {enemy}! Your updated stats: {stats}")
            }
            TurnEvent::PlayerDefeated(cause) => {
                write!(f, "You lose - {} was too powerful!", cause.enemy())
            }
            TurnEvent::Escaped => f.write_str("⭐️ You made it out of the forest! ⭐️"),
        }
    }
}

/// Everything that happened during one turn, plus where the session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<TurnEvent>,
    pub state: SessionState,
}

impl TurnReport {
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

#[derive(Debug)]
pub struct Session<R = GameRng> {
    grid: Grid,
    position: Position,
    player: Stats,
    rng: R,
    /// Generated on entering a fresh tile and consumed within the same turn
    pending: Option<Encounter>,
    state: SessionState,
    turns: u32,
}

impl Session<GameRng> {
    /// Build a session on a ChaCha RNG, seeded from the config if it has one.
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::new(config, rng)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let position = config.start_position();
        let grid = Grid::new(config.width, config.height, position, &mut rng);
        log::info!(
            "new {}x{} forest, {} starts at {position}",
            config.width,
            config.height,
            config.player.name
        );

        Ok(Self {
            grid,
            position,
            player: config.player,
            rng,
            pending: None,
            state: SessionState::AwaitingInput,
            turns: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Stats {
        &self.player
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Moves taken, not counting rejected ones.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// What to draw at `pos`: the player glyph over the player's cell,
    /// otherwise the stored tile.
    pub fn glyph_at(&self, pos: Position) -> Option<&'static str> {
        if pos == self.position {
            return Some(PLAYER_GLYPH);
        }
        self.grid.get(pos).map(Tile::glyph)
    }

    /// Glyph rows from top to bottom, with the player drawn in place.
    pub fn glyph_rows(&self) -> Vec<Vec<&'static str>> {
        self.grid
            .rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        if Position::new(x, y) == self.position {
                            PLAYER_GLYPH
                        } else {
                            tile.glyph()
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Move one cell and resolve the destination.
    pub fn take_turn(&mut self, dir: Direction) -> TurnReport {
        let mut events = Vec::new();
        if self.is_over() {
            return self.report(events);
        }

        let Some(next) = self.grid.step(self.position, dir) else {
            log::trace!("blocked moving {dir} from {}", self.position);
            events.push(TurnEvent::Blocked(dir));
            return self.report(events);
        };

        self.turns += 1;
        self.grid.set(self.position, Tile::discovered());
        log::trace!("turn {}: {} -> {next}", self.turns, self.position);
        self.position = next;

        if next == self.grid.goal() {
            log::info!("{} escaped after {} turns", self.player.name, self.turns);
            self.state = SessionState::Escaped;
            events.push(TurnEvent::Escaped);
            return self.report(events);
        }

        let revisit = self.grid.get(next).is_some_and(Tile::is_discovered);
        if revisit {
            events.push(TurnEvent::Quiet(tile::describe_empty(&mut self.rng)));
            return self.report(events);
        }

        self.pending = Some(Encounter::generate(&mut self.rng));
        self.resolve_pending(&mut events);
        if !self.is_over() {
            self.grid.set(next, Tile::discovered());
        }
        self.report(events)
    }

    fn resolve_pending(&mut self, events: &mut Vec<TurnEvent>) {
        let Some(encounter) = self.pending.take() else {
            return;
        };
        self.grid.set(self.position, encounter.tile());

        match encounter {
            Encounter::Empty => {
                events.push(TurnEvent::Quiet(tile::describe_empty(&mut self.rng)));
            }
            Encounter::Item(item) => {
                self.player.apply(&item);
                events.push(TurnEvent::ItemFound {
                    item,
                    stats: self.player.clone(),
                });
            }
            Encounter::Enemy(enemy) => {
                let outcome = combat::resolve(&self.player, &enemy);
                let name = enemy.name.clone();
                events.push(TurnEvent::EnemyAppeared(enemy));
                self.settle_fight(outcome, name, events);
            }
        }
    }

    fn settle_fight(&mut self, outcome: CombatOutcome, enemy: String, events: &mut Vec<TurnEvent>) {
        match outcome {
            CombatOutcome::Overpowered => {
                self.defeat(DefeatCause::Overpowered { enemy }, events);
            }
            CombatOutcome::PlayerDefeated { damage_taken, .. } => {
                self.player.take_damage(damage_taken);
                self.defeat(DefeatCause::Slain { enemy }, events);
            }
            CombatOutcome::EnemyDefeated { damage_taken, .. } => {
                self.player.take_damage(damage_taken);
                if self.player.is_defeated() {
                    self.defeat(DefeatCause::Slain { enemy }, events);
                } else {
                    events.push(TurnEvent::EnemyDefeated {
                        enemy,
                        damage_taken,
                        stats: self.player.clone(),
                    });
                }
            }
        }
    }

    fn defeat(&mut self, cause: DefeatCause, events: &mut Vec<TurnEvent>) {
        log::info!(
            "{} defeated by {} after {} turns",
            self.player.name,
            cause.enemy(),
            self.turns
        );
        events.push(TurnEvent::PlayerDefeated(cause.clone()));
        self.state = SessionState::Defeated(cause);
    }

    fn report(&self, events: Vec<TurnEvent>) -> TurnReport {
        TurnReport {
            events,
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::tile::TileKind;

    fn session(draws: Vec<f64>, config: GameConfig) -> Session<SequenceRng> {
        Session::new(config, SequenceRng::new(draws)).unwrap()
    }

    #[test]
    fn test_pending_cleared_every_turn() {
        let mut s = session(vec![0.2], GameConfig::new(3, 3));
        s.take_turn(Direction::Right);
        assert!(s.pending.is_none());
        s.take_turn(Direction::Up);
        assert!(s.pending.is_none());
    }

    #[test]
    fn test_blocked_changes_nothing() {
        let mut s = session(vec![0.5], GameConfig::new(3, 3));
        let before = s.rng.consumed();
        let report = s.take_turn(Direction::Left);
        assert_eq!(report.events, vec![TurnEvent::Blocked(Direction::Left)]);
        assert_eq!(report.state, SessionState::AwaitingInput);
        assert_eq!(s.position(), Position::new(0, 2));
        assert_eq!(s.turns(), 0);
        assert_eq!(s.rng.consumed(), before);
    }

    #[test]
    fn test_vacated_cell_becomes_discovered() {
        let mut s = session(vec![0.5], GameConfig::new(3, 3));
        s.take_turn(Direction::Up);
        let start = Position::new(0, 2);
        assert_eq!(s.grid().get(start).map(Tile::kind), Some(TileKind::Discovered));
        assert_eq!(s.glyph_at(s.position()), Some(PLAYER_GLYPH));
    }

    #[test]
    fn test_item_pickup() {
        let mut s = session(vec![0.0], GameConfig::new(3, 3));
        let report = s.take_turn(Direction::Right);
        assert!(matches!(report.events[..], [TurnEvent::ItemFound { .. }]));
        assert_eq!(s.player(), &Stats::new("Althea", 13, 6, 20));
    }

    #[test]
    fn test_enemy_defeated_applies_damage() {
        let mut s = session(vec![0.2], GameConfig::new(3, 3));
        let report = s.take_turn(Direction::Right);
        assert_eq!(report.events.len(), 2);
        assert_eq!(
            report.events[1],
            TurnEvent::EnemyDefeated {
                enemy: "Spider".into(),
                damage_taken: 5,
                stats: Stats::new("Althea", 10, 5, 15),
            }
        );
        assert_eq!(s.player().hp, 15);
        assert!(!s.is_over());
    }

    #[test]
    fn test_overpowered_ends_session() {
        let weak = Stats::new("Althea", 1, 5, 20);
        let mut s = session(vec![0.2], GameConfig::new(3, 3).with_player(weak));
        let report = s.take_turn(Direction::Right);
        let cause = DefeatCause::Overpowered {
            enemy: "Spider".into(),
        };
        assert_eq!(report.state, SessionState::Defeated(cause));
        assert_eq!(s.player().hp, 20);
        assert_eq!(
            report.events.last().map(ToString::to_string).as_deref(),
            Some("You lose - Spider was too powerful!")
        );
    }

    #[test]
    fn test_terminal_session_ignores_turns() {
        let frail = Stats::new("Althea", 10, 5, 5);
        let mut s = session(vec![0.2], GameConfig::new(3, 3).with_player(frail));
        assert!(s.take_turn(Direction::Right).is_terminal());
        let position = s.position();
        let report = s.take_turn(Direction::Right);
        assert!(report.events.is_empty());
        assert_eq!(s.position(), position);
    }

    #[test]
    fn test_glyph_rows_draw_player_over_tile() {
        let s = session(vec![0.5], GameConfig::new(3, 2));
        let rows = s.glyph_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[1][0], PLAYER_GLYPH);
        assert_eq!(rows[0][2], crate::GOAL_GLYPH);
        assert_eq!(rows.concat().iter().filter(|g| **g == PLAYER_GLYPH).count(), 1);
    }

    #[test]
    fn test_item_deltas_keep_their_sign() {
        let event = TurnEvent::ItemFound {
            item: Stats::new("Thorn", 3, 0, -5),
            stats: Stats::new("Althea", 13, 5, 15),
        };
        let text = event.to_string();
        assert!(text.contains("(+3 attack, +0 defense, -5 hp)"), "{text}");
        assert!(!text.contains("+-"));
    }

    #[test]
    fn test_event_text() {
        assert_eq!(
            TurnEvent::Blocked(Direction::Right).to_string(),
            "Cannot move right"
        );
        assert_eq!(
            TurnEvent::Escaped.to_string(),
            "⭐️ You made it out of the forest! ⭐️"
        );
    }
}
