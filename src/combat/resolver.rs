//! Combat resolution.
//!
//! Two attack paths exist per player turn. A correct answer is a basic
//! attack: fixed damage, free, element-agnostic. Playing a card costs
//! energy and either damages the boss through the elemental table, heals
//! the player, or adds armor.
//!
//! Everything here computes outcomes from values; nothing mutates a session.

use serde::{Deserialize, Serialize};

use super::element::{resolve, DamageAnalysis};
use crate::cards::{CardDefinition, EffectType, Element};
use crate::core::BattleConfig;

/// Boss health after a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossHit {
    pub damage: u32,
    /// Remaining health, clamped at zero.
    pub remaining: u32,
    pub defeated: bool,
}

/// Apply `damage` to a boss with `monster_health`.
#[must_use]
pub fn strike_boss(monster_health: u32, damage: u32) -> BossHit {
    let remaining = monster_health.saturating_sub(damage);
    BossHit {
        damage,
        remaining,
        defeated: remaining == 0,
    }
}

/// The basic attack granted by a correct answer.
#[must_use]
pub fn basic_attack(monster_health: u32, config: &BattleConfig) -> BossHit {
    strike_boss(monster_health, config.basic_attack_damage)
}

/// Player health and armor with their caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: u32,
    pub max_health: u32,
    pub armor: u32,
    pub max_armor: u32,
}

/// What playing a card does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CardOutcome {
    /// Damage to be committed against the boss.
    Damage(DamageAnalysis),
    /// Health restored; `health` is the capped result.
    Heal { amount: u32, health: u32 },
    /// Armor gained; `armor` is the capped result.
    Defense { amount: u32, armor: u32 },
}

impl CardOutcome {
    /// Feedback text for the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            CardOutcome::Damage(analysis) => format!("{} -{}", analysis.text, analysis.final_damage),
            CardOutcome::Heal { amount, .. } => format!("Restored {amount} health!"),
            CardOutcome::Defense { amount, .. } => format!("Armor +{amount}"),
        }
    }
}

/// Resolve a card against the current boss and player.
///
/// Heal cards with zero value restore 1; defense cards with zero value
/// grant the configured default.
#[must_use]
pub fn resolve_card(
    card: &CardDefinition,
    boss_element: Element,
    vitals: Vitals,
    config: &BattleConfig,
) -> CardOutcome {
    match card.effect {
        EffectType::Damage => CardOutcome::Damage(resolve(card.element, boss_element, card.value)),
        EffectType::Heal => {
            let amount = if card.value == 0 { 1 } else { card.value };
            CardOutcome::Heal {
                amount,
                health: vitals.health.saturating_add(amount).min(vitals.max_health),
            }
        }
        EffectType::Defense => {
            let amount = if card.value == 0 {
                config.default_defense_value
            } else {
                card.value
            };
            CardOutcome::Defense {
                amount,
                armor: vitals.armor.saturating_add(amount).min(vitals.max_armor),
            }
        }
    }
}
