//! Level configuration.

use serde::{Deserialize, Serialize};

use crate::cards::Element;

/// One boss fight. Levels are played strictly in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based number shown to the player.
    pub level_number: u32,

    /// Stage name (for display).
    pub name: String,

    pub boss_name: String,

    /// Element the boss defends with.
    pub boss_element: Element,

    /// Boss health at level start.
    pub boss_health: u32,
}

impl LevelConfig {
    /// Create a level.
    #[must_use]
    pub fn new(
        level_number: u32,
        name: impl Into<String>,
        boss_name: impl Into<String>,
        boss_element: Element,
        boss_health: u32,
    ) -> Self {
        Self {
            level_number,
            name: name.into(),
            boss_name: boss_name.into(),
            boss_element,
            boss_health,
        }
    }
}
