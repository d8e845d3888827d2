//! Survival and rage.
//!
//! Pure functions that turn an answer into what should happen: combo and
//! energy rewards for correct answers, rage and forced monster attacks for
//! incorrect ones, and armor-first damage mitigation. The session commits
//! the results.

use serde::{Deserialize, Serialize};

use crate::core::BattleConfig;

/// Reward for a correct answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectReward {
    /// Combo after this answer.
    pub combo: u32,
    /// Energy to add. Zero when an item drop replaces the reward.
    pub energy_gain: u32,
    /// The combo reached the bonus threshold.
    pub bonus: bool,
    /// This answer hit a drop milestone.
    pub item_drop: bool,
}

impl CorrectReward {
    /// Feedback text for the energy reward.
    #[must_use]
    pub fn message(&self) -> String {
        if self.bonus {
            format!("Three in a row! Energy +{}", self.energy_gain)
        } else {
            format!("Energy +{}", self.energy_gain)
        }
    }
}

/// Compute the reward for a correct answer given the combo before it.
///
/// Every `item_drop_interval`-th combo is a drop milestone; the drop
/// replaces the energy gain for that answer.
#[must_use]
pub fn reward_correct(combo_before: u32, config: &BattleConfig) -> CorrectReward {
    let combo = combo_before.saturating_add(1);
    let bonus = combo >= config.combo_bonus_threshold;
    let item_drop = config.item_drop_interval > 0 && combo % config.item_drop_interval == 0;

    let energy_gain = if item_drop {
        0
    } else if bonus {
        config.combo_bonus_energy
    } else {
        config.base_energy_gain
    };

    CorrectReward {
        combo,
        energy_gain,
        bonus,
        item_drop,
    }
}

/// Rage after an incorrect answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeOutcome {
    /// Rage after the increment (wrapped to zero on overflow).
    pub rage: u32,
    /// The rage meter overflowed and the monster attacks.
    pub forced_attack: bool,
}

/// Add one mistake's worth of rage.
#[must_use]
pub fn register_mistake(rage_before: u32, config: &BattleConfig) -> MistakeOutcome {
    let rage = rage_before.saturating_add(config.rage_per_mistake);
    if rage >= config.rage_threshold {
        MistakeOutcome {
            rage: 0,
            forced_attack: true,
        }
    } else {
        MistakeOutcome {
            rage,
            forced_attack: false,
        }
    }
}

/// Player vitals after a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mitigation {
    pub armor: u32,
    pub health: u32,
    /// Damage soaked by armor.
    pub absorbed: u32,
    /// Damage that reached health.
    pub health_loss: u32,
}

impl Mitigation {
    /// Check if the hit was lethal.
    #[must_use]
    pub fn is_lethal(&self) -> bool {
        self.health == 0
    }
}

/// Apply `damage` to armor first, then health. Neither goes below zero.
#[must_use]
pub fn absorb_hit(armor: u32, health: u32, damage: u32) -> Mitigation {
    let absorbed = damage.min(armor);
    let overflow = damage - absorbed;
    let health_loss = overflow.min(health);

    Mitigation {
        armor: armor - absorbed,
        health: health - health_loss,
        absorbed,
        health_loss,
    }
}
