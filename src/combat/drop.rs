//! Roguelike item drops on combo milestones.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Seconds added by a time drop.
pub const EXTRA_TIME_SECS: u32 = 30;
/// Energy added by an energy drop.
pub const ENERGY_DROP: u32 = 5;
/// Health restored by a health drop.
pub const HEALTH_DROP: u32 = 1;

/// The reward granted by a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemDrop {
    /// More time on the level clock.
    ExtraTime(u32),
    /// Energy, capped at max.
    Energy(u32),
    /// Health, capped at max.
    Health(u32),
}

impl ItemDrop {
    /// Feedback shown instead of the usual energy message.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            ItemDrop::ExtraTime(secs) => format!("Hourglass! +{secs}s"),
            ItemDrop::Energy(energy) => format!("Mana crystal! Energy +{energy}"),
            ItemDrop::Health(health) => format!("Heart! Health +{health}"),
        }
    }
}

/// Weighted outcomes in percent, in cumulative order.
const TABLE: [(u32, ItemDrop); 3] = [
    (40, ItemDrop::ExtraTime(EXTRA_TIME_SECS)),
    (30, ItemDrop::Energy(ENERGY_DROP)),
    (30, ItemDrop::Health(HEALTH_DROP)),
];

/// Roll one drop: 40% time, 30% energy, 30% health.
///
/// A single uniform draw is walked through the cumulative weights.
pub fn roll_item_drop<R: RandomSource + ?Sized>(rng: &mut R) -> ItemDrop {
    let roll = rng.unit();
    let mut cumulative = 0;
    for (percent, drop) in TABLE {
        cumulative += percent;
        if roll < f64::from(cumulative) / 100.0 {
            return drop;
        }
    }
    // Rounding at the top of the range
    TABLE[TABLE.len() - 1].1
}
