//! Combat and exploration rules.
//!
//! [`Rules`] carries the tunable probabilities and progression bonuses; the
//! free functions are the pure damage formulas. Nothing here draws random
//! numbers itself: rolls are passed in so each formula can be tested with
//! exact values.

use serde::{Deserialize, Serialize};

/// Span of the player's random damage bonus, `[0, 10)`.
pub const PLAYER_DAMAGE_SPREAD: f64 = 10.0;

/// Span of an enemy's random damage bonus, `[0, 5)`.
pub const ENEMY_DAMAGE_SPREAD: f64 = 5.0;

/// Minimum damage any landed blow deals.
pub const MIN_DAMAGE: i32 = 1;

/// Tunable game constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Chance of an encounter when entering a location with enemies.
    pub encounter_chance: f64,
    /// Chance that a search finds something.
    pub search_chance: f64,
    /// Flee chance before the agility bonus.
    pub flee_base: f64,
    /// Flee chance added per point of agility.
    pub flee_per_agility: f64,
    /// Max health gained on level-up.
    pub level_health_bonus: i32,
    /// Added to every attribute on level-up.
    pub level_stat_bonus: i32,
    /// Fraction of max durability at or below which equipment is badly worn.
    pub worn_ratio: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            encounter_chance: 0.4,
            search_chance: 0.7,
            flee_base: 0.6,
            flee_per_agility: 0.02,
            level_health_bonus: 15,
            level_stat_bonus: 2,
            worn_ratio: 0.2,
        }
    }
}

impl Rules {
    /// Probability of escaping combat. Not capped at 1.
    pub fn flee_chance(&self, agility: i32) -> f64 {
        self.flee_base + f64::from(agility) * self.flee_per_agility
    }
}

/// Damage the player deals in one blow.
///
/// `roll` is the random bonus in `[0, 10)`. The total is floored and never
/// drops below [`MIN_DAMAGE`].
pub fn player_attack_damage(
    strength: i32,
    roll: f64,
    weapon_damage: Option<i32>,
    enemy_defense: i32,
) -> i32 {
    let raw = f64::from(strength) + roll + f64::from(weapon_damage.unwrap_or(0))
        - f64::from(enemy_defense);
    (raw.floor() as i32).max(MIN_DAMAGE)
}

/// Damage an enemy deals in one blow.
///
/// `roll` is the random bonus in `[0, 5)`. Without armor the raw value is
/// only floored; with armor the defense is subtracted and the result kept at
/// [`MIN_DAMAGE`] or more.
pub fn enemy_attack_damage(damage: i32, roll: f64, armor_defense: Option<i32>) -> i32 {
    let raw = f64::from(damage) + roll;
    match armor_defense {
        Some(defense) => ((raw - f64::from(defense)).floor() as i32).max(MIN_DAMAGE),
        None => raw.floor() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_player_damage() {
        assert_eq!(player_attack_damage(9, 0.0, Some(25), 5), 29);
        assert_eq!(player_attack_damage(9, 9.99, Some(25), 5), 38);
    }

    #[test]
    fn test_player_damage_minimum() {
        assert_eq!(player_attack_damage(1, 0.0, None, 40), 1);
    }

    #[test]
    fn test_unarmed_player_damage() {
        assert_eq!(player_attack_damage(6, 3.5, None, 2), 7);
    }

    #[test]
    fn test_enemy_damage_armor() {
        assert_eq!(enemy_attack_damage(10, 4.9, None), 14);
        assert_eq!(enemy_attack_damage(10, 4.9, Some(8)), 6);
        assert_eq!(enemy_attack_damage(10, 0.0, Some(15)), 1);
    }

    #[test]
    fn test_flee_chance() {
        let rules = Rules::default();
        assert_eq!(rules.flee_chance(20), 1.0);
        assert!((rules.flee_chance(7) - 0.74).abs() < 1e-9);
        assert!(rules.flee_chance(30) > 1.0);
    }
}
