//! Combat rules.
//!
//! - `element`: Elemental effectiveness table and damage rounding
//! - `resolver`: Basic attacks and card effects
//! - `survival`: Combo rewards, rage, and armor-first mitigation
//! - `drop`: Weighted item drops on combo milestones
//!
//! All functions here report what happened. Only the session engine applies
//! outcomes, which keeps every rule testable without a running session.

mod drop;
mod element;
mod resolver;
mod survival;

pub use drop::{roll_item_drop, ItemDrop, ENERGY_DROP, EXTRA_TIME_SECS, HEALTH_DROP};
pub use element::{is_superior, resolve, DamageAnalysis, Effectiveness};
pub use resolver::{basic_attack, resolve_card, strike_boss, BossHit, CardOutcome, Vitals};
pub use survival::{absorb_hit, register_mistake, reward_correct, CorrectReward, MistakeOutcome, Mitigation};
