//! Battle events.
//!
//! The engine records what happened as typed events alongside the snapshot.
//! Renderers and sound layers drain them to trigger effects without diffing
//! snapshots.

use serde::Serialize;

use super::stage::Stage;
use crate::cards::{CardId, HandCardId, Role};
use crate::combat::{Effectiveness, ItemDrop};

/// Why a session ended in defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DefeatReason {
    HealthDepleted,
    TimeExpired,
}

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BattleEvent {
    LevelStarted {
        level_index: usize,
        boss_name: String,
        boss_health: u32,
    },
    AnswerCorrect {
        combo: u32,
        energy_gain: u32,
    },
    AnswerWrong {
        rage: u32,
    },
    ItemDropped(ItemDrop),
    CardPlayed {
        hand_card: HandCardId,
        card: CardId,
        cost: u32,
    },
    /// The boss took damage. `effectiveness` is `None` for basic attacks.
    BossDamaged {
        damage: u32,
        effectiveness: Option<Effectiveness>,
        remaining: u32,
    },
    PlayerHealed {
        amount: u32,
        health: u32,
    },
    ArmorGained {
        amount: u32,
        armor: u32,
    },
    /// Rage overflowed and the monster struck.
    MonsterAttacked {
        absorbed: u32,
        health_loss: u32,
    },
    StunEnded,
    HeroSkillUsed {
        role: Role,
    },
    BossDefeated {
        level_index: usize,
    },
    Defeat {
        reason: DefeatReason,
    },
    Victory {
        score: u32,
    },
    StageChanged {
        from: Stage,
        to: Stage,
    },
}
