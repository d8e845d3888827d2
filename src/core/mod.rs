//! Core engine types: RNG, configuration, errors.
//!
//! These are the pieces every other module leans on. Nothing here knows
//! about cards, questions or stages beyond naming them in rejections.

pub mod config;
pub mod error;
pub mod rng;

pub use config::BattleConfig;
pub use error::{ActionResult, CatalogError, ConfigError, Rejection};
pub use rng::{GameRng, RandomSource, ScriptedRng};

/// Milliseconds on the engine's virtual clock.
pub type Millis = u64;
