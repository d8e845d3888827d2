//! Elemental effectiveness.
//!
//! The table is fixed and one-directional: light beats dark,
//! but dark gets no bonus against light. Only four ordered pairs are
//! super effective:
//!
//! | Attack | Defender |
//! |--------|----------|
//! | water  | fire     |
//! | fire   | nature   |
//! | nature | water    |
//! | light  | dark     |
//!
//! Matching elements resist (half damage). Everything else is neutral.

use serde::{Deserialize, Serialize};

use crate::cards::Element;

/// How the defender took the hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    Normal,
    /// The defender is weak to the attack (x1.5).
    Weak,
    /// The defender resists the attack (x0.5).
    Resist,
}

impl Effectiveness {
    /// Flavor text shown with the damage number.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Effectiveness::Normal => "Hit!",
            Effectiveness::Weak => "Super effective!",
            Effectiveness::Resist => "Not very effective...",
        }
    }
}

/// Result of an elemental damage computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DamageAnalysis {
    pub final_damage: u32,
    pub effectiveness: Effectiveness,
    pub text: &'static str,
}

const SUPERIORITY: [(Element, Element); 4] = [
    (Element::Water, Element::Fire),
    (Element::Fire, Element::Nature),
    (Element::Nature, Element::Water),
    (Element::Light, Element::Dark),
];

/// Check if `attack` is super effective against `defender`.
#[must_use]
pub fn is_superior(attack: Element, defender: Element) -> bool {
    SUPERIORITY.contains(&(attack, defender))
}

/// Compute final damage for an attack of `base_power`.
///
/// `final_damage = ceil(base_power * multiplier)`, computed in integers.
/// Heal-element attacks deal nothing.
#[must_use]
pub fn resolve(attack: Element, defender: Element, base_power: u32) -> DamageAnalysis {
    if attack == Element::Heal {
        return DamageAnalysis {
            final_damage: 0,
            effectiveness: Effectiveness::Normal,
            text: "Restore",
        };
    }

    let (final_damage, effectiveness) = if attack == defender {
        (base_power.div_ceil(2), Effectiveness::Resist)
    } else if is_superior(attack, defender) {
        ((base_power * 3).div_ceil(2), Effectiveness::Weak)
    } else {
        (base_power, Effectiveness::Normal)
    };

    DamageAnalysis {
        final_damage,
        effectiveness,
        text: effectiveness.text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Element; 7] = [
        Element::Physical,
        Element::Fire,
        Element::Water,
        Element::Nature,
        Element::Light,
        Element::Dark,
        Element::Heal,
    ];

    #[test]
    fn test_reference_values() {
        assert_eq!(resolve(Element::Water, Element::Fire, 10).final_damage, 15);
        assert_eq!(resolve(Element::Fire, Element::Fire, 10).final_damage, 5);
        assert_eq!(resolve(Element::Physical, Element::Nature, 7).final_damage, 7);
    }

    #[test]
    fn test_rounding_is_ceiling() {
        assert_eq!(resolve(Element::Fire, Element::Fire, 7).final_damage, 4);
        assert_eq!(resolve(Element::Light, Element::Dark, 15).final_damage, 23);
        assert_eq!(resolve(Element::Nature, Element::Water, 1).final_damage, 2);
    }

    #[test]
    fn test_table_is_not_symmetric() {
        let forward = resolve(Element::Light, Element::Dark, 10);
        let reverse = resolve(Element::Dark, Element::Light, 10);

        assert_eq!(forward.effectiveness, Effectiveness::Weak);
        assert_eq!(reverse.effectiveness, Effectiveness::Normal);
        assert_eq!(reverse.final_damage, 10);
    }

    #[test]
    fn test_exactly_four_superior_pairs() {
        let count = ALL
            .iter()
            .flat_map(|&a| ALL.iter().map(move |&d| (a, d)))
            .filter(|&(a, d)| resolve(a, d, 10).effectiveness == Effectiveness::Weak)
            .count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_heal_never_damages() {
        for defender in ALL {
            let analysis = resolve(Element::Heal, defender, 10);
            assert_eq!(analysis.final_damage, 0);
            assert_eq!(analysis.effectiveness, Effectiveness::Normal);
        }
    }

    #[test]
    fn test_same_element_resists() {
        for element in ALL.into_iter().filter(|e| *e != Element::Heal) {
            assert_eq!(resolve(element, element, 10).effectiveness, Effectiveness::Resist);
        }
    }
}
