//! Battle configuration.
//!
//! Every tunable number the engine uses lives in `BattleConfig`. Defaults
//! reproduce the shipped game; hosts override individual fields through the
//! `with_*` builders or by loading JSON (missing fields keep their defaults).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::Millis;

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    // === Player caps ===
    /// Health cap (and starting health).
    pub max_player_health: u32,
    /// Energy cap.
    pub max_energy: u32,
    /// Armor cap.
    pub max_armor: u32,
    /// Energy at game start.
    pub starting_energy: u32,

    // === Combat ===
    /// Damage dealt to the boss by a correct answer.
    pub basic_attack_damage: u32,
    /// Armor granted by a defense card whose value is zero.
    pub default_defense_value: u32,
    /// Number of cards in the hand.
    pub hand_size: usize,

    // === Rewards ===
    /// Energy gained per correct answer below the combo threshold.
    pub base_energy_gain: u32,
    /// Combo length at which the bonus gain applies.
    pub combo_bonus_threshold: u32,
    /// Energy gained per correct answer at or above the combo threshold.
    pub combo_bonus_energy: u32,
    /// Every `item_drop_interval`-th combo triggers an item drop.
    pub item_drop_interval: u32,

    // === Rage ===
    /// Rage added per incorrect answer.
    pub rage_per_mistake: u32,
    /// Rage at which the monster performs a forced attack.
    pub rage_threshold: u32,
    /// Damage of the forced attack.
    pub monster_attack_damage: u32,
    /// Lockout after an incorrect answer.
    pub stun_duration_ms: Millis,

    // === Timers ===
    /// Countdown per level.
    pub level_time_limit_secs: u32,
    /// Cooldown after a hero skill.
    pub hero_skill_cooldown_secs: u32,
    /// Period of the countdown tick.
    pub tick_interval_ms: Millis,
    /// How long correct-answer feedback stays on screen.
    pub answer_feedback_ms: Millis,
    /// Delay between playing a card and committing its damage.
    pub card_resolution_ms: Millis,

    // === Hero skills ===
    /// Armor granted by the warrior skill.
    pub warrior_skill_armor: u32,
    /// Energy granted by the mage skill.
    pub mage_skill_energy: u32,

    // === Results ===
    /// Score needed for a two-star result.
    pub pass_score: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_player_health: 5,
            max_energy: 10,
            max_armor: 5,
            starting_energy: 0,
            basic_attack_damage: 2,
            default_defense_value: 3,
            hand_size: 4,
            base_energy_gain: 1,
            combo_bonus_threshold: 3,
            combo_bonus_energy: 2,
            item_drop_interval: 5,
            rage_per_mistake: 50,
            rage_threshold: 100,
            monster_attack_damage: 1,
            stun_duration_ms: 1500,
            level_time_limit_secs: 180,
            hero_skill_cooldown_secs: 20,
            tick_interval_ms: 1000,
            answer_feedback_ms: 1000,
            card_resolution_ms: 1200,
            warrior_skill_armor: 3,
            mage_skill_energy: 3,
            pass_score: 3,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break engine invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid("hand_size must be at least 1"));
        }
        if self.max_player_health == 0 {
            return Err(ConfigError::Invalid("max_player_health must be at least 1"));
        }
        if self.rage_threshold == 0 {
            return Err(ConfigError::Invalid("rage_threshold must be at least 1"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be at least 1"));
        }
        Ok(())
    }

    /// Set the starting energy.
    #[must_use]
    pub fn with_starting_energy(mut self, energy: u32) -> Self {
        self.starting_energy = energy;
        self
    }

    /// Set the basic attack damage.
    #[must_use]
    pub fn with_basic_attack_damage(mut self, damage: u32) -> Self {
        self.basic_attack_damage = damage;
        self
    }

    /// Set the level countdown.
    #[must_use]
    pub fn with_level_time_limit(mut self, secs: u32) -> Self {
        self.level_time_limit_secs = secs;
        self
    }

    /// Set the rage added per mistake.
    #[must_use]
    pub fn with_rage_per_mistake(mut self, rage: u32) -> Self {
        self.rage_per_mistake = rage;
        self
    }

    /// Set the health cap.
    #[must_use]
    pub fn with_max_player_health(mut self, health: u32) -> Self {
        self.max_player_health = health;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_game() {
        let config = BattleConfig::default();
        assert_eq!(config.max_player_health, 5);
        assert_eq!(config.max_energy, 10);
        assert_eq!(config.max_armor, 5);
        assert_eq!(config.basic_attack_damage, 2);
        assert_eq!(config.rage_per_mistake, 50);
        assert_eq!(config.level_time_limit_secs, 180);
        assert_eq!(config.hero_skill_cooldown_secs, 20);
        assert_eq!(config.hand_size, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BattleConfig::from_json_str(r#"{ "basic_attack_damage": 7 }"#).unwrap();
        assert_eq!(config.basic_attack_damage, 7);
        assert_eq!(config.max_energy, 10);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            BattleConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let result = BattleConfig::from_json_str(r#"{ "hand_size": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_builders() {
        let config = BattleConfig::new()
            .with_starting_energy(4)
            .with_level_time_limit(30)
            .with_rage_per_mistake(25);

        assert_eq!(config.starting_energy, 4);
        assert_eq!(config.level_time_limit_secs, 30);
        assert_eq!(config.rage_per_mistake, 25);
    }
}
