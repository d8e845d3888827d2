//! # quiz-battle
//!
//! Battle session engine for an educational quiz card game.
//!
//! A player answers curriculum questions to damage a boss, spends energy on
//! elemental cards from a rotating hand, and has to survive both a level
//! clock and the monster's rage meter across a sequence of levels.
//!
//! ## Design Principles
//!
//! 1. **Total**: Every action has a defined outcome in every stage. Invalid
//!    input is rejected with a reason and changes nothing.
//!
//! 2. **Outcomes, then commit**: Combat rules are pure functions that report
//!    what happened. Only `BattleEngine` applies them, building the next
//!    snapshot and swapping it in whole.
//!
//! 3. **Virtual time**: The host reports elapsed time. The level tick and
//!    every delayed effect run on a deterministic clock, so whole games
//!    replay exactly from a seed.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card definitions, registry, the conveyor hand
//! - `catalog`: Levels, questions, shipped content, high scores
//! - `combat`: Elements, card effects, rage and survival, item drops
//! - `session`: Stages, snapshot, scheduler, events, the engine

pub mod cards;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ActionResult, BattleConfig, GameRng, Millis, RandomSource, Rejection};

pub use crate::cards::{CardDefinition, CardId, EffectType, Element, Hand, HandCard, HandCardId, Role};

pub use crate::catalog::{Catalog, HighScoreStore, InMemoryHighScores, LevelConfig, Question};

pub use crate::combat::{DamageAnalysis, Effectiveness, ItemDrop};

pub use crate::session::{BattleEngine, BattleEvent, Feedback, FeedbackKind, ResultSummary, Session, Stage};
