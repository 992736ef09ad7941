//! Combat resolution
//!
//! Player and enemy trade blows simultaneously: every round both sides deal
//! damage computed from the stats as they stood at the start of that round.
//! This is not alternating turns. A round that kills the enemy still costs
//! the player its full hit, and if that hit takes the player to 0 hp the
//! fight is lost.

use crate::stats::Stats;

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The player cannot get through the enemy's defense. No blows are traded.
    Overpowered,
    /// The enemy dropped first. `damage_taken` is still to be applied to the player.
    EnemyDefeated { damage_taken: i32, rounds: u32 },
    /// The player's running hp hit 0 or below.
    PlayerDefeated { damage_taken: i32, rounds: u32 },
}

/// Resolve a fight without touching either stat block.
///
/// The arithmetic is done in closed form on widened integers, so any pair of
/// stat blocks resolves in constant time without overflowing. Damage that
/// would not fit an `i32` is reported as `i32::MAX`.
pub fn resolve(player: &Stats, enemy: &Stats) -> CombatOutcome {
    // Equal attack and defense would never end the fight either.
    if player.attack <= enemy.defense {
        log::debug!(
            "{} (def {}) is out of reach of attack {}",
            enemy.name,
            enemy.defense,
            player.attack
        );
        return CombatOutcome::Overpowered;
    }

    if enemy.hp <= 0 {
        return CombatOutcome::EnemyDefeated {
            damage_taken: 0,
            rounds: 0,
        };
    }

    // Positive after the guard above.
    let dealt = (i64::from(player.attack) - i64::from(enemy.defense)).unsigned_abs();
    let received = (i64::from(enemy.attack) - i64::from(player.defense)).max(0).unsigned_abs();

    let enemy_rounds = u64::from(enemy.hp.unsigned_abs()).div_ceil(dealt);
    // Both sides strike every round, so a player already at 0 hp falls in the first.
    let player_rounds = match (player.hp, received) {
        (hp, _) if hp <= 0 => Some(1),
        (_, 0) => None,
        (hp, received) => Some(u64::from(hp.unsigned_abs()).div_ceil(received)),
    };

    match player_rounds {
        Some(rounds) if rounds <= enemy_rounds => {
            let damage_taken = clamp_damage(received, rounds);
            log::debug!("{} fell to {} after {rounds} rounds", player.name, enemy.name);
            CombatOutcome::PlayerDefeated {
                damage_taken,
                rounds: clamp_rounds(rounds),
            }
        }
        _ => {
            let damage_taken = clamp_damage(received, enemy_rounds);
            log::debug!(
                "{} beat {} in {enemy_rounds} rounds, taking {damage_taken}",
                player.name,
                enemy.name
            );
            CombatOutcome::EnemyDefeated {
                damage_taken,
                rounds: clamp_rounds(enemy_rounds),
            }
        }
    }
}

fn clamp_damage(per_round: u64, rounds: u64) -> i32 {
    i32::try_from(per_round.saturating_mul(rounds)).unwrap_or(i32::MAX)
}

fn clamp_rounds(rounds: u64) -> u32 {
    u32::try_from(rounds).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(attack: i32, defense: i32, hp: i32) -> Stats {
        Stats::new("Althea", attack, defense, hp)
    }

    fn enemy(attack: i32, defense: i32, hp: i32) -> Stats {
        Stats::new("Spider", attack, defense, hp)
    }

    #[test]
    fn test_spider_dies_in_one_round() {
        let outcome = resolve(&player(10, 5, 20), &enemy(10, 1, 6));
        assert_eq!(
            outcome,
            CombatOutcome::EnemyDefeated {
                damage_taken: 5,
                rounds: 1
            }
        );
    }

    #[test]
    fn test_overpowered_without_exchange() {
        let outcome = resolve(&player(10, 5, 20), &enemy(10, 20, 6));
        assert_eq!(outcome, CombatOutcome::Overpowered);
    }

    #[test]
    fn test_equal_attack_and_defense_is_guarded() {
        assert_eq!(
            resolve(&player(10, 5, 20), &enemy(10, 10, 6)),
            CombatOutcome::Overpowered
        );
    }

    #[test]
    fn test_multi_round_fight() {
        // 2 damage a round against 7 hp: four rounds, 3 damage back each.
        let outcome = resolve(&player(3, 2, 20), &enemy(5, 1, 7));
        assert_eq!(
            outcome,
            CombatOutcome::EnemyDefeated {
                damage_taken: 12,
                rounds: 4
            }
        );
    }

    #[test]
    fn test_simultaneous_final_blow_kills_player() {
        // The killing round also brings the player to exactly 0.
        let outcome = resolve(&player(10, 5, 5), &enemy(10, 1, 6));
        assert_eq!(
            outcome,
            CombatOutcome::PlayerDefeated {
                damage_taken: 5,
                rounds: 1
            }
        );
    }

    #[test]
    fn test_player_defeated_mid_fight() {
        let outcome = resolve(&player(2, 0, 10), &enemy(6, 1, 100));
        assert_eq!(
            outcome,
            CombatOutcome::PlayerDefeated {
                damage_taken: 12,
                rounds: 2
            }
        );
    }

    #[test]
    fn test_armor_blocks_all_damage() {
        let outcome = resolve(&player(10, 15, 1), &enemy(10, 1, 30));
        assert_eq!(
            outcome,
            CombatOutcome::EnemyDefeated {
                damage_taken: 0,
                rounds: 4
            }
        );
    }

    #[test]
    fn test_dead_enemy_needs_no_rounds() {
        let outcome = resolve(&player(10, 5, 20), &enemy(10, 1, 0));
        assert_eq!(
            outcome,
            CombatOutcome::EnemyDefeated {
                damage_taken: 0,
                rounds: 0
            }
        );
    }

    #[test]
    fn test_extreme_stats_do_not_overflow() {
        let outcome = resolve(&player(i32::MAX, -10, 5), &enemy(10, -10, 6));
        assert_eq!(
            outcome,
            CombatOutcome::PlayerDefeated {
                damage_taken: 20,
                rounds: 1
            }
        );

        // A one-damage exchange against the largest hp pool still resolves at once.
        let outcome = resolve(&player(1, 0, i32::MAX), &enemy(0, 0, i32::MAX));
        assert_eq!(
            outcome,
            CombatOutcome::EnemyDefeated {
                damage_taken: 0,
                rounds: i32::MAX as u32
            }
        );

        let outcome = resolve(&player(i32::MAX, i32::MIN, 1), &enemy(i32::MAX, i32::MIN, 1));
        assert_eq!(
            outcome,
            CombatOutcome::PlayerDefeated {
                damage_taken: i32::MAX,
                rounds: 1
            }
        );
    }

    #[test]
    fn test_already_fallen_player_loses_first_round() {
        let outcome = resolve(&player(10, 20, 0), &enemy(1, 1, 50));
        assert_eq!(
            outcome,
            CombatOutcome::PlayerDefeated {
                damage_taken: 0,
                rounds: 1
            }
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let p = player(10, 5, 20);
        let e = enemy(10, 1, 6);
        let _ = resolve(&p, &e);
        assert_eq!(p.hp, 20);
        assert_eq!(e.hp, 6);
    }
}
