//! The session snapshot.
//!
//! `Session` is the single aggregate the engine owns. Each applied action
//! builds the next snapshot from the previous one and swaps it in whole;
//! nothing outside the engine ever mutates it. Append-only logs use
//! `im::Vector` so snapshots stay cheap to clone and hand to a renderer.

use im::Vector;
use serde::Serialize;

use super::presentation::Presentation;
use super::scheduler::StrikeId;
use super::stage::Stage;
use crate::cards::{CardDefinition, Hand, Role};
use crate::combat::Effectiveness;
use crate::core::BattleConfig;

/// A played damage card whose hit has not landed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PendingStrike {
    pub id: StrikeId,
    pub damage: u32,
    pub effectiveness: Effectiveness,
    /// Version of the damage text shown when the card was played.
    pub feedback_version: u64,
}

/// Complete session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub stage: Stage,
    pub role: Role,

    // === Progress ===
    pub level_index: usize,
    /// Cursor into `question_order`. Only ever increases.
    pub question_index: usize,
    /// Catalog positions in presentation order, shuffled once per session.
    pub question_order: Vector<usize>,
    pub score: u32,
    pub combo_count: u32,
    /// "category: point" tags, one per correct answer.
    pub knowledge_collected: Vector<String>,

    // === Boss ===
    pub monster_health: u32,
    pub max_monster_health: u32,
    /// Rage meter in `[0, rage_threshold)`.
    pub monster_rage: u32,

    // === Player ===
    pub player_health: u32,
    pub max_player_health: u32,
    pub player_armor: u32,
    pub max_armor: u32,
    pub current_energy: u32,
    pub max_energy: u32,
    /// Seconds until the hero skill is ready.
    pub hero_skill_cooldown: u32,
    pub is_player_stunned: bool,

    // === Cards ===
    pub hand: Hand,
    /// Role-filtered draw pool for the current level.
    pub available_cards: Vec<CardDefinition>,
    /// Card hits waiting to land, in play order.
    pub pending_strikes: Vec<PendingStrike>,

    // === Clock ===
    /// Seconds left on the level clock.
    pub level_time_remaining: u32,

    pub presentation: Presentation,
}

impl Session {
    /// An idle session waiting for a role.
    #[must_use]
    pub fn idle(config: &BattleConfig) -> Self {
        Self {
            stage: Stage::Start,
            role: Role::default(),
            level_index: 0,
            question_index: 0,
            question_order: Vector::new(),
            score: 0,
            combo_count: 0,
            knowledge_collected: Vector::new(),
            monster_health: 0,
            max_monster_health: 0,
            monster_rage: 0,
            player_health: config.max_player_health,
            max_player_health: config.max_player_health,
            player_armor: 0,
            max_armor: config.max_armor,
            current_energy: config.starting_energy.min(config.max_energy),
            max_energy: config.max_energy,
            hero_skill_cooldown: 0,
            is_player_stunned: false,
            hand: Hand::new(),
            available_cards: Vec::new(),
            pending_strikes: Vec::new(),
            level_time_remaining: config.level_time_limit_secs,
            presentation: Presentation::default(),
        }
    }

    /// Catalog position of the current question.
    ///
    /// Wraps around once the order is exhausted. `None` before the order
    /// has been dealt.
    #[must_use]
    pub fn current_question_position(&self) -> Option<usize> {
        if self.question_order.is_empty() {
            return None;
        }
        self.question_order
            .get(self.question_index % self.question_order.len())
            .copied()
    }

    /// Check if the hero skill can fire right now.
    #[must_use]
    pub fn is_skill_ready(&self) -> bool {
        self.stage.is_playing() && self.hero_skill_cooldown == 0 && !self.is_player_stunned
    }

    /// Check if a card of `cost` is affordable.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.current_energy >= cost
    }

    pub(crate) fn gain_energy(&mut self, amount: u32) {
        self.current_energy = self.current_energy.saturating_add(amount).min(self.max_energy);
    }

    pub(crate) fn gain_health(&mut self, amount: u32) {
        self.player_health = self.player_health.saturating_add(amount).min(self.max_player_health);
    }

    pub(crate) fn gain_armor(&mut self, amount: u32) {
        self.player_armor = self.player_armor.saturating_add(amount).min(self.max_armor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_session() {
        let session = Session::idle(&BattleConfig::default());

        assert_eq!(session.stage, Stage::Start);
        assert_eq!(session.player_health, 5);
        assert_eq!(session.current_energy, 0);
        assert_eq!(session.level_time_remaining, 180);
        assert!(session.hand.is_empty());
        assert_eq!(session.current_question_position(), None);
    }

    #[test]
    fn test_question_cursor_wraps() {
        let mut session = Session::idle(&BattleConfig::default());
        session.question_order = Vector::from(vec![2, 0, 1]);

        session.question_index = 1;
        assert_eq!(session.current_question_position(), Some(0));

        session.question_index = 5;
        assert_eq!(session.current_question_position(), Some(1));
    }

    #[test]
    fn test_gains_are_capped() {
        let mut session = Session::idle(&BattleConfig::default());

        session.gain_energy(50);
        session.gain_armor(9);
        session.gain_health(3);

        assert_eq!(session.current_energy, 10);
        assert_eq!(session.player_armor, 5);
        assert_eq!(session.player_health, 5);
    }
}
