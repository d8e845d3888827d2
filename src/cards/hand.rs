//! The conveyor hand.
//!
//! The hand has a fixed size. Playing a card removes it and immediately
//! appends one freshly drawn card to the end, so the pool is never
//! exhausted and the hand size never changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardDefinition;
use super::instance::{HandCard, HandCardId};
use crate::core::RandomSource;

/// Ordered hand of cards. Four slots in the shipped game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[HandCard; 4]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Find a card by its hand id.
    #[must_use]
    pub fn get(&self, id: HandCardId) -> Option<&HandCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Check if a card with this id is held.
    #[must_use]
    pub fn contains(&self, id: HandCardId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = &HandCard> {
        self.cards.iter()
    }
}

impl FromIterator<HandCard> for Hand {
    fn from_iter<I: IntoIterator<Item = HandCard>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Draws cards and mints their ids.
///
/// One economy lives for a whole session so that ids never repeat, even
/// across levels and hand redraws.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardEconomy {
    next_id: u64,
}

impl CardEconomy {
    /// Create an economy whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    fn mint(&mut self, card: CardDefinition) -> HandCard {
        let id = HandCardId(self.next_id);
        self.next_id += 1;
        HandCard::new(id, card)
    }

    /// Draw one card uniformly from `pool`. `None` only for an empty pool.
    pub fn draw<R: RandomSource + ?Sized>(
        &mut self,
        pool: &[CardDefinition],
        rng: &mut R,
    ) -> Option<HandCard> {
        let card = rng.choose(pool)?.clone();
        Some(self.mint(card))
    }

    /// Deal a fresh hand of `size` cards.
    ///
    /// Slots are filled from a shuffled copy of the pool, so distinct
    /// templates are dealt while they last. A pool smaller than the hand
    /// tops up the remaining slots with independent draws.
    pub fn initialize_hand<R: RandomSource + ?Sized>(
        &mut self,
        pool: &[CardDefinition],
        size: usize,
        rng: &mut R,
    ) -> Hand {
        let mut deck = pool.to_vec();
        rng.shuffle(&mut deck);

        let mut cards: SmallVec<[HandCard; 4]> = SmallVec::new();
        for card in deck.into_iter().take(size) {
            cards.push(self.mint(card));
        }
        while cards.len() < size {
            match self.draw(pool, rng) {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        Hand { cards }
    }

    /// Remove `id` from the hand and append one fresh draw.
    ///
    /// Returns the removed card. If `id` is not held, or the pool is empty,
    /// the hand is left untouched and `None` is returned.
    pub fn use_card<R: RandomSource + ?Sized>(
        &mut self,
        hand: &mut Hand,
        id: HandCardId,
        pool: &[CardDefinition],
        rng: &mut R,
    ) -> Option<HandCard> {
        let pos = hand.cards.iter().position(|c| c.id == id)?;
        let replacement = self.draw(pool, rng)?;
        let used = hand.cards.remove(pos);
        hand.cards.push(replacement);
        Some(used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, EffectType, Element};
    use crate::core::{GameRng, ScriptedRng};

    fn pool(n: u32) -> Vec<CardDefinition> {
        (1..=n)
            .map(|i| CardDefinition::new(CardId::new(i), format!("Card {i}"), EffectType::Damage, Element::Fire))
            .collect()
    }

    #[test]
    fn test_initialize_hand_distinct_templates() {
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(42);

        let hand = economy.initialize_hand(&pool(10), 4, &mut rng);
        assert_eq!(hand.len(), 4);

        let mut templates: Vec<_> = hand.iter().map(|c| c.card_id()).collect();
        templates.sort();
        templates.dedup();
        assert_eq!(templates.len(), 4);
    }

    #[test]
    fn test_initialize_hand_small_pool_repeats() {
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(42);

        let hand = economy.initialize_hand(&pool(2), 4, &mut rng);
        assert_eq!(hand.len(), 4);

        let mut ids: Vec<_> = hand.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_use_card_conveyor() {
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(7);
        let pool = pool(5);

        let mut hand = economy.initialize_hand(&pool, 4, &mut rng);
        let before: Vec<_> = hand.iter().map(|c| c.id).collect();

        let used = economy.use_card(&mut hand, before[1], &pool, &mut rng).unwrap();
        assert_eq!(used.id, before[1]);
        assert_eq!(hand.len(), 4);

        let after: Vec<_> = hand.iter().map(|c| c.id).collect();
        assert_eq!(&after[..3], &[before[0], before[2], before[3]]);
        assert!(!before.contains(&after[3]));
    }

    #[test]
    fn test_use_card_removes_only_matching_duplicate() {
        let mut economy = CardEconomy::new();
        let single = pool(1);
        let mut rng = ScriptedRng::new();

        let mut hand = economy.initialize_hand(&single, 4, &mut rng);
        let target = hand.cards()[2].id;

        economy.use_card(&mut hand, target, &single, &mut rng).unwrap();
        assert!(!hand.contains(target));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn test_use_missing_card_is_noop() {
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(1);
        let pool = pool(3);

        let mut hand = economy.initialize_hand(&pool, 4, &mut rng);
        let snapshot = hand.clone();

        assert!(economy.use_card(&mut hand, HandCardId(9999), &pool, &mut rng).is_none());
        assert_eq!(hand, snapshot);
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(1);
        assert!(economy.draw(&[], &mut rng).is_none());
        assert!(economy.initialize_hand(&[], 4, &mut rng).is_empty());
    }
}
