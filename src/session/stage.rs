//! Session stages.

use serde::{Deserialize, Serialize};

/// The active stage of a session. Exactly one at a time.
///
/// ```text
/// START -> PLAYING <-> LEVEL_TRANSITION
///            |  \
///            |   -> RESULT     (final boss defeated)
///             ----> GAME_OVER  (health or time exhausted)
/// RESULT | GAME_OVER -> START  (restart only)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Idle, choosing a role.
    #[default]
    Start,
    /// A level is in progress and the clock is running.
    Playing,
    /// Boss defeated, more levels remain.
    LevelTransition,
    /// Health or time ran out.
    GameOver,
    /// Final boss defeated.
    Result,
}

impl Stage {
    /// Check if the session has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::GameOver | Stage::Result)
    }

    /// Check if the level clock should be running.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Stage::Playing)
    }
}
