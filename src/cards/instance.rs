//! Hand cards - card templates minted into a hand.
//!
//! The same template can sit in a hand twice, so every drawn card gets a
//! session-unique `HandCardId`. Removal always goes by that id.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// Session-unique identifier of a drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandCardId(pub u64);

impl std::fmt::Display for HandCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandCard({})", self.0)
    }
}

/// A card in the player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    /// Unique id minted at draw time.
    pub id: HandCardId,

    /// The template this card was drawn from.
    pub card: CardDefinition,
}

impl HandCard {
    /// Mint a hand card.
    #[must_use]
    pub fn new(id: HandCardId, card: CardDefinition) -> Self {
        Self { id, card }
    }

    /// Id of the underlying template.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    /// Energy cost of the underlying template.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.card.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EffectType, Element};

    #[test]
    fn test_same_template_distinct_ids() {
        let template = CardDefinition::new(CardId::new(1), "Sword", EffectType::Damage, Element::Physical)
            .with_cost(2);
        let a = HandCard::new(HandCardId(1), template.clone());
        let b = HandCard::new(HandCardId(2), template);

        assert_eq!(a.card_id(), b.card_id());
        assert_ne!(a, b);
        assert_eq!(a.cost(), 2);
    }
}
