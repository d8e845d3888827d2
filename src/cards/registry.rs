//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game in catalog
//! order. Order matters: it decides which card is the fallback when a role
//! has nothing to draw, and it keeps role pools stable between runs.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::definition::{CardDefinition, CardId, Role};
use crate::core::CatalogError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use quiz_battle::cards::{CardDefinition, CardId, CardRegistry, EffectType, Element, Role};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1), "Sword", EffectType::Damage, Element::Physical)
///         .with_roles([Role::Warrior]))
///     .unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Sword");
/// assert_eq!(registry.pool_for(Role::Warrior).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = CardDefinition>) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).and_then(|&i| self.cards.get(i))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The first registered card.
    #[must_use]
    pub fn first(&self) -> Option<&CardDefinition> {
        self.cards.first()
    }

    /// Iterate over all card definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// The draw pool for a role, in catalog order.
    ///
    /// If no card allows the role, the first catalog card stands in so the
    /// hand can always be filled. Empty only for an empty registry.
    #[must_use]
    pub fn pool_for(&self, role: Role) -> Vec<CardDefinition> {
        let pool: Vec<_> = self.cards.iter().filter(|c| c.allows(role)).cloned().collect();
        if pool.is_empty() {
            if let Some(first) = self.first() {
                warn!(?role, fallback = %first.id, "no cards allowed for role, using first catalog card");
                return vec![first.clone()];
            }
        }
        pool
    }
}
