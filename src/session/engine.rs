//! The battle engine.
//!
//! `BattleEngine` is the only writer of the `Session`. Every action and
//! every timer firing follows the same discipline:
//!
//! 1. Check preconditions against the committed snapshot. A failed check
//!    returns `ActionResult::Rejected` and changes nothing.
//! 2. Clone the snapshot, apply the pure combat outcomes to the clone.
//! 3. Swap the clone in as the new committed snapshot.
//!
//! Delayed continuations (stun expiry, card hits landing, feedback clears)
//! re-read the committed snapshot when they fire and skip themselves if the
//! stage, level or pending entry they target is gone.
//!
//! ## Example
//!
//! ```
//! use quiz_battle::cards::Role;
//! use quiz_battle::session::{BattleEngine, Stage};
//!
//! let mut engine = BattleEngine::standard(42);
//! assert!(engine.start_game(Role::Mage).is_applied());
//! assert_eq!(engine.session().stage, Stage::Playing);
//! assert_eq!(engine.session().hand.len(), 4);
//!
//! engine.answer_question(true);
//! assert_eq!(engine.session().score, 1);
//!
//! engine.advance_time(1000);
//! assert_eq!(engine.session().level_time_remaining, 179);
//! ```

use tracing::{debug, info};

use super::event::{BattleEvent, DefeatReason};
use super::presentation::Feedback;
use super::result::{star_rating, ResultSummary};
use super::scheduler::{Fired, Scheduler, StrikeId, TimerTask};
use super::stage::Stage;
use super::state::{PendingStrike, Session};
use crate::cards::{CardEconomy, HandCardId, Role};
use crate::catalog::{Catalog, LevelConfig, Question};
use crate::combat::{
    absorb_hit, basic_attack, register_mistake, resolve_card, reward_correct, roll_item_drop, strike_boss,
    CardOutcome, ItemDrop, Vitals,
};
use crate::core::{ActionResult, BattleConfig, GameRng, Millis, RandomSource, Rejection};

/// Drives one player's battle sessions.
pub struct BattleEngine<R = GameRng> {
    config: BattleConfig,
    catalog: Catalog,
    session: Session,
    scheduler: Scheduler,
    economy: CardEconomy,
    rng: R,
    events: Vec<BattleEvent>,
    next_strike: u64,
}

impl BattleEngine<GameRng> {
    /// Create an engine with a seeded RNG.
    #[must_use]
    pub fn new(config: BattleConfig, catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(config, catalog, GameRng::new(seed))
    }

    /// Default rules and the shipped content.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(BattleConfig::default(), Catalog::standard(), seed)
    }
}

impl<R: RandomSource> BattleEngine<R> {
    /// Create an engine drawing randomness from `rng`.
    pub fn with_rng(config: BattleConfig, catalog: Catalog, rng: R) -> Self {
        let session = Session::idle(&config);
        let scheduler = Scheduler::new(config.tick_interval_ms);
        Self {
            config,
            catalog,
            session,
            scheduler,
            economy: CardEconomy::new(),
            rng,
            events: Vec::new(),
            next_strike: 1,
        }
    }

    /// Replace the committed session, e.g. to set up a specific position.
    ///
    /// Pending timers are dropped. The tick runs iff the session is playing.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.scheduler.halt();
        if session.stage.is_playing() {
            self.scheduler.start_ticking();
        }
        self.session = session;
        self
    }

    // === Queries ===

    /// The committed snapshot.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// An owned copy of the committed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    /// Check if the level clock is running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_ticking()
    }

    /// Number of delayed continuations waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// The question to show. Before the first game this is the first
    /// catalog question.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.catalog.question(self.session.current_question_position().unwrap_or(0))
    }

    /// The level being played (or just finished).
    #[must_use]
    pub fn current_level(&self) -> &LevelConfig {
        self.catalog.level(self.session.level_index)
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Summary of a finished session. `None` until RESULT or GAME_OVER.
    #[must_use]
    pub fn result_summary(&self) -> Option<ResultSummary> {
        let session = &self.session;
        let victory = match session.stage {
            Stage::Result => true,
            Stage::GameOver => false,
            _ => return None,
        };
        Some(ResultSummary {
            score: session.score,
            victory,
            stars: star_rating(
                session.score,
                victory,
                self.catalog.questions().len(),
                self.config.pass_score,
            ),
            knowledge: session.knowledge_collected.iter().cloned().collect(),
        })
    }

    // === Actions ===

    /// Begin a new game as `role`. Only valid from START.
    pub fn start_game(&mut self, role: Role) -> ActionResult {
        if self.session.stage != Stage::Start {
            return self.reject("start_game", Rejection::WrongStage(self.session.stage));
        }

        let mut next = Session::idle(&self.config);
        next.role = role;

        let mut order: Vec<usize> = (0..self.catalog.questions().len()).collect();
        self.rng.shuffle(&mut order);
        next.question_order = order.into_iter().collect();

        info!(?role, "game started");
        self.enter_level(&mut next, 0);
        self.commit(next)
    }

    /// Report whether the player answered the current question correctly.
    ///
    /// A correct answer is a basic attack; a wrong one feeds the monster's
    /// rage and stuns the player.
    pub fn answer_question(&mut self, is_correct: bool) -> ActionResult {
        if let Err(reason) = self.require_active() {
            return self.reject("answer_question", reason);
        }

        let mut next = self.session.clone();
        if is_correct {
            self.apply_correct(&mut next);
        } else {
            self.apply_mistake(&mut next);
        }
        self.commit(next)
    }

    /// Grade `option` against the current question and answer with it.
    pub fn answer_option(&mut self, option: &str) -> ActionResult {
        let is_correct = self.current_question().is_correct(option);
        self.answer_question(is_correct)
    }

    /// Play a card from the hand.
    ///
    /// Energy is spent and the hand rotates immediately. Heal and defense
    /// effects apply at once; damage lands after `card_resolution_ms`.
    pub fn play_card(&mut self, id: HandCardId) -> ActionResult {
        if let Err(reason) = self.require_active() {
            return self.reject("play_card", reason);
        }
        let Some(played) = self.session.hand.get(id).cloned() else {
            return self.reject("play_card", Rejection::CardNotInHand(id));
        };
        if !self.session.can_afford(played.cost()) {
            let reason = Rejection::InsufficientEnergy {
                cost: played.cost(),
                available: self.session.current_energy,
            };
            return self.reject("play_card", reason);
        }

        let mut next = self.session.clone();
        if self
            .economy
            .use_card(&mut next.hand, id, &next.available_cards, &mut self.rng)
            .is_none()
        {
            return self.reject("play_card", Rejection::CardNotInHand(id));
        }
        next.current_energy -= played.cost();
        self.events.push(BattleEvent::CardPlayed {
            hand_card: id,
            card: played.card_id(),
            cost: played.cost(),
        });

        let vitals = Vitals {
            health: next.player_health,
            max_health: next.max_player_health,
            armor: next.player_armor,
            max_armor: next.max_armor,
        };
        let boss_element = self.catalog.level(next.level_index).boss_element;
        let outcome = resolve_card(&played.card, boss_element, vitals, &self.config);
        let message = outcome.message();
        debug!(card = %played.card_id(), ?outcome, "card played");

        match outcome {
            CardOutcome::Damage(analysis) => {
                let strike = StrikeId(self.next_strike);
                self.next_strike += 1;

                next.presentation.monster_hit = true;
                let feedback_version = next.presentation.show(Feedback::success(message));
                next.pending_strikes.push(PendingStrike {
                    id: strike,
                    damage: analysis.final_damage,
                    effectiveness: analysis.effectiveness,
                    feedback_version,
                });
                self.scheduler
                    .schedule(self.config.card_resolution_ms, TimerTask::ResolveStrike { strike });
            }
            CardOutcome::Heal { amount, health } => {
                next.player_health = health;
                self.events.push(BattleEvent::PlayerHealed { amount, health });
                self.show_briefly(&mut next, Feedback::success(message), self.config.card_resolution_ms);
            }
            CardOutcome::Defense { amount, armor } => {
                next.player_armor = armor;
                self.events.push(BattleEvent::ArmorGained { amount, armor });
                self.show_briefly(&mut next, Feedback::success(message), self.config.card_resolution_ms);
            }
        }

        self.commit(next)
    }

    /// Fire the role's hero skill.
    ///
    /// Warriors gain armor. Mages gain energy and redraw the whole hand.
    pub fn activate_hero_skill(&mut self) -> ActionResult {
        if let Err(reason) = self.require_active() {
            return self.reject("activate_hero_skill", reason);
        }
        if self.session.hero_skill_cooldown > 0 {
            let reason = Rejection::SkillCoolingDown(self.session.hero_skill_cooldown);
            return self.reject("activate_hero_skill", reason);
        }

        let mut next = self.session.clone();
        next.hero_skill_cooldown = self.config.hero_skill_cooldown_secs;

        let message = match next.role {
            Role::Warrior => {
                next.gain_armor(self.config.warrior_skill_armor);
                format!("Courage Shield! Armor +{}", self.config.warrior_skill_armor)
            }
            Role::Mage => {
                next.gain_energy(self.config.mage_skill_energy);
                next.hand =
                    self.economy
                        .initialize_hand(&next.available_cards, self.config.hand_size, &mut self.rng);
                format!("Mana Burst! Energy +{}", self.config.mage_skill_energy)
            }
        };

        info!(role = ?next.role, "hero skill used");
        self.events.push(BattleEvent::HeroSkillUsed { role: next.role });
        self.show_briefly(&mut next, Feedback::success(message), self.config.answer_feedback_ms);
        self.commit(next)
    }

    /// Leave LEVEL_TRANSITION and start the next level.
    ///
    /// Health, armor, energy, hand and cooldown carry over; the boss, rage,
    /// stun and level clock are reset.
    pub fn advance_to_next_level(&mut self) -> ActionResult {
        if self.session.stage != Stage::LevelTransition {
            return self.reject("advance_to_next_level", Rejection::WrongStage(self.session.stage));
        }

        let mut next = self.session.clone();
        next.question_index += 1;
        let level_index = next.level_index + 1;
        self.enter_level(&mut next, level_index);
        self.commit(next)
    }

    /// Discard the finished session and return to START.
    pub fn restart(&mut self) -> ActionResult {
        if !self.session.stage.is_terminal() {
            return self.reject("restart", Rejection::WrongStage(self.session.stage));
        }

        self.scheduler.halt();
        info!(score = self.session.score, "session restarted");
        let next = Session::idle(&self.config);
        self.commit(next)
    }

    /// Drop every flash and message now, without waiting for their timers.
    pub fn clear_presentation(&mut self) {
        if self.session.presentation.is_clear() {
            return;
        }
        let mut next = self.session.clone();
        next.presentation.clear();
        self.session = next;
    }

    // === Time ===

    /// Advance the virtual clock by `elapsed` ms, firing everything that
    /// falls due in order.
    pub fn advance_time(&mut self, elapsed: Millis) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(fired) = self.scheduler.pop_due(until) {
            match fired {
                Fired::Tick => self.on_tick(),
                Fired::Task(task) => self.on_task(task),
            }
        }
        self.scheduler.settle(until);
    }

    fn on_tick(&mut self) {
        if !self.session.stage.is_playing() {
            debug!(stage = ?self.session.stage, "tick outside play skipped");
            return;
        }

        let mut next = self.session.clone();
        next.hero_skill_cooldown = next.hero_skill_cooldown.saturating_sub(1);
        if next.level_time_remaining <= 1 {
            next.level_time_remaining = 0;
            self.end_in_defeat(&mut next, DefeatReason::TimeExpired);
        } else {
            next.level_time_remaining -= 1;
        }
        self.commit(next);
    }

    fn on_task(&mut self, task: TimerTask) {
        match task {
            TimerTask::ClearFeedback { version } => {
                if self.session.presentation.version() != version {
                    return;
                }
                let mut next = self.session.clone();
                if next.presentation.clear_if_current(version) {
                    self.session = next;
                }
            }
            TimerTask::ResolveStrike { strike } => self.land_strike(strike),
            TimerTask::StunExpiry { level_index, version } => self.expire_stun(level_index, version),
        }
    }

    fn land_strike(&mut self, strike: StrikeId) {
        let current = &self.session;
        let position = current.pending_strikes.iter().position(|p| p.id == strike);
        let Some(position) = position.filter(|_| current.stage.is_playing()) else {
            debug!(?strike, stage = ?current.stage, "superseded strike skipped");
            return;
        };

        let mut next = current.clone();
        let pending = next.pending_strikes.remove(position);
        let hit = strike_boss(next.monster_health, pending.damage);
        next.monster_health = hit.remaining;
        next.presentation.monster_hit = !next.pending_strikes.is_empty();
        next.presentation.clear_if_current(pending.feedback_version);

        self.events.push(BattleEvent::BossDamaged {
            damage: hit.damage,
            effectiveness: Some(pending.effectiveness),
            remaining: hit.remaining,
        });
        if hit.defeated {
            self.defeat_boss(&mut next);
        }
        self.commit(next);
    }

    fn expire_stun(&mut self, level_index: usize, version: u64) {
        let current = &self.session;
        if !current.stage.is_playing() || current.level_index != level_index || !current.is_player_stunned {
            debug!(level = level_index, stage = ?current.stage, "stale stun expiry skipped");
            return;
        }

        let mut next = current.clone();
        next.is_player_stunned = false;
        next.presentation.player_hit = false;
        next.presentation.clear_if_current(version);
        next.question_index += 1;
        self.events.push(BattleEvent::StunEnded);
        self.commit(next);
    }

    // === Outcome application ===

    fn apply_correct(&mut self, next: &mut Session) {
        let reward = reward_correct(next.combo_count, &self.config);
        next.score += 1;
        next.combo_count = reward.combo;
        if let Some(position) = next.current_question_position() {
            next.knowledge_collected
                .push_back(self.catalog.question(position).knowledge_tag());
        }
        next.question_index += 1;
        self.events.push(BattleEvent::AnswerCorrect {
            combo: reward.combo,
            energy_gain: reward.energy_gain,
        });

        let message = if reward.item_drop {
            let drop = roll_item_drop(&mut self.rng);
            self.apply_drop(next, drop);
            drop.message()
        } else {
            next.gain_energy(reward.energy_gain);
            reward.message()
        };

        let hit = basic_attack(next.monster_health, &self.config);
        next.monster_health = hit.remaining;
        self.events.push(BattleEvent::BossDamaged {
            damage: hit.damage,
            effectiveness: None,
            remaining: hit.remaining,
        });

        if hit.defeated {
            self.defeat_boss(next);
        } else {
            self.show_briefly(next, Feedback::success(message), self.config.answer_feedback_ms);
        }
    }

    fn apply_drop(&mut self, next: &mut Session, drop: ItemDrop) {
        match drop {
            ItemDrop::ExtraTime(secs) => {
                next.level_time_remaining = next.level_time_remaining.saturating_add(secs);
            }
            ItemDrop::Energy(energy) => next.gain_energy(energy),
            ItemDrop::Health(health) => next.gain_health(health),
        }
        debug!(?drop, "item dropped");
        self.events.push(BattleEvent::ItemDropped(drop));
    }

    fn apply_mistake(&mut self, next: &mut Session) {
        next.combo_count = 0;
        let mistake = register_mistake(next.monster_rage, &self.config);
        next.monster_rage = mistake.rage;
        self.events.push(BattleEvent::AnswerWrong { rage: mistake.rage });

        next.is_player_stunned = true;
        next.presentation.player_hit = true;

        let message = if mistake.forced_attack {
            let hit = absorb_hit(next.player_armor, next.player_health, self.config.monster_attack_damage);
            next.player_armor = hit.armor;
            next.player_health = hit.health;
            self.events.push(BattleEvent::MonsterAttacked {
                absorbed: hit.absorbed,
                health_loss: hit.health_loss,
            });
            if hit.is_lethal() {
                self.end_in_defeat(next, DefeatReason::HealthDepleted);
                return;
            }
            "The monster is enraged!"
        } else {
            "Wrong answer!"
        };

        let version = next.presentation.show(Feedback::error(message));
        self.scheduler.schedule(
            self.config.stun_duration_ms,
            TimerTask::StunExpiry {
                level_index: next.level_index,
                version,
            },
        );
    }

    // === Stage transitions ===

    fn enter_level(&mut self, next: &mut Session, level_index: usize) {
        let level = self.catalog.level(level_index);
        let boss_name = level.boss_name.clone();
        let boss_health = level.boss_health;

        next.stage = Stage::Playing;
        next.level_index = level_index;
        next.monster_health = boss_health;
        next.max_monster_health = boss_health;
        next.monster_rage = 0;
        next.combo_count = 0;
        next.is_player_stunned = false;
        next.level_time_remaining = self.config.level_time_limit_secs;
        next.pending_strikes.clear();
        next.presentation.clear();

        next.available_cards = self.catalog.cards().pool_for(next.role);
        if next.hand.is_empty() {
            next.hand = self
                .economy
                .initialize_hand(&next.available_cards, self.config.hand_size, &mut self.rng);
        }

        self.scheduler.cancel_all();
        self.scheduler.start_ticking();

        info!(level = level_index, boss = %boss_name, boss_health, "level started");
        self.events.push(BattleEvent::LevelStarted {
            level_index,
            boss_name,
            boss_health,
        });
    }

    fn defeat_boss(&mut self, next: &mut Session) {
        self.halt(next);
        let level_index = next.level_index;
        self.events.push(BattleEvent::BossDefeated { level_index });

        if self.catalog.is_final_level(level_index) {
            next.stage = Stage::Result;
            info!(level = level_index, score = next.score, "final boss defeated");
            self.events.push(BattleEvent::Victory { score: next.score });
        } else {
            next.stage = Stage::LevelTransition;
            info!(level = level_index, "boss defeated");
        }
    }

    fn end_in_defeat(&mut self, next: &mut Session, reason: DefeatReason) {
        self.halt(next);
        next.stage = Stage::GameOver;
        info!(?reason, level = next.level_index, score = next.score, "game over");
        self.events.push(BattleEvent::Defeat { reason });
    }

    /// Stop every timer and drop whatever was waiting on them.
    fn halt(&mut self, next: &mut Session) {
        self.scheduler.halt();
        next.pending_strikes.clear();
        next.presentation.clear();
    }

    // === Helpers ===

    fn require_active(&self) -> Result<(), Rejection> {
        if !self.session.stage.is_playing() {
            return Err(Rejection::WrongStage(self.session.stage));
        }
        if self.session.is_player_stunned {
            return Err(Rejection::Stunned);
        }
        Ok(())
    }

    fn show_briefly(&mut self, next: &mut Session, feedback: Feedback, duration: Millis) {
        let version = next.presentation.show(feedback);
        self.scheduler.schedule(duration, TimerTask::ClearFeedback { version });
    }

    fn reject(&self, action: &'static str, reason: Rejection) -> ActionResult {
        debug!(action, %reason, stage = ?self.session.stage, "action rejected");
        ActionResult::Rejected(reason)
    }

    fn commit(&mut self, next: Session) -> ActionResult {
        let (from, to) = (self.session.stage, next.stage);
        if from != to {
            debug!(?from, ?to, "stage changed");
            self.events.push(BattleEvent::StageChanged { from, to });
        }
        self.session = next;
        ActionResult::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> BattleEngine {
        let mut engine = BattleEngine::standard(9);
        engine.start_game(Role::Warrior);
        engine
    }

    #[test]
    fn test_unknown_strike_is_skipped() {
        let mut engine = playing();
        let before = engine.snapshot();

        engine.on_task(TimerTask::ResolveStrike { strike: StrikeId(99) });
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_stun_expiry_for_other_level_is_skipped() {
        let mut engine = playing();
        engine.answer_question(false);
        let stunned = engine.snapshot();

        engine.on_task(TimerTask::StunExpiry { level_index: 1, version: 0 });
        assert_eq!(engine.session(), &stunned);

        let version = stunned.presentation.version();
        engine.on_task(TimerTask::StunExpiry { level_index: 0, version });
        assert!(!engine.session().is_player_stunned);
        assert!(engine.session().presentation.feedback.is_none());
    }

    #[test]
    fn test_tick_outside_play_is_skipped() {
        let mut engine = BattleEngine::standard(9);
        let before = engine.snapshot();

        engine.on_tick();
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_rejection_records_no_events() {
        let mut engine = playing();
        engine.drain_events();

        engine.advance_to_next_level();
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_stage_changes_are_recorded() {
        let mut engine = BattleEngine::standard(9);
        engine.start_game(Role::Mage);

        assert!(engine.drain_events().contains(&BattleEvent::StageChanged {
            from: Stage::Start,
            to: Stage::Playing,
        }));
    }
}
