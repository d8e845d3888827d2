//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template.
//! "Fireball" costs 3 energy and deals 10 fire damage; those numbers are part
//! of the definition. A card in someone's hand is a `HandCard`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Elemental affinity of a card or boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Physical,
    Fire,
    Water,
    Nature,
    Light,
    Dark,
    Heal,
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    /// Deal `value` damage to the boss, modified by element.
    Damage,
    /// Restore `value` health.
    Heal,
    /// Gain `value` armor.
    Defense,
}

/// Player persona, fixed for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Physical and fire cards; skill grants armor.
    #[default]
    Warrior,
    /// Elemental magic; skill grants energy and redraws the hand.
    Mage,
}

/// Roles allowed to draw a card. Rarely more than two.
pub type RoleList = SmallVec<[Role; 2]>;

/// Card rarity. Cosmetic for the engine, carried for renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use quiz_battle::cards::{CardDefinition, CardId, EffectType, Element, Role};
///
/// let fireball = CardDefinition::new(CardId::new(3), "Fireball", EffectType::Damage, Element::Fire)
///     .with_value(10)
///     .with_cost(3)
///     .with_roles([Role::Warrior]);
///
/// assert!(fireball.allows(Role::Warrior));
/// assert!(!fireball.allows(Role::Mage));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Damage, heal or armor magnitude.
    #[serde(default)]
    pub value: u32,

    /// Energy cost.
    #[serde(default)]
    pub cost: u32,

    /// What the card does.
    pub effect: EffectType,

    /// Elemental affinity.
    pub element: Element,

    #[serde(default)]
    pub rarity: Rarity,

    /// Roles that may draw this card. `None` means every role.
    #[serde(default)]
    pub allowed_roles: Option<RoleList>,
}

impl CardDefinition {
    /// Create a new card definition with zero value and cost.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, effect: EffectType, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            value: 0,
            cost: 0,
            effect,
            element,
            rarity: Rarity::Common,
            allowed_roles: None,
        }
    }

    /// Set the magnitude.
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Set the energy cost.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Restrict the card to the given roles.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    /// Check whether `role` may draw this card.
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles
            .as_ref()
            .map_or(true, |roles| roles.contains(&role))
    }

    /// Check whether the card can be paid for with `energy`.
    #[must_use]
    pub fn is_affordable(&self, energy: u32) -> bool {
        energy >= self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_unrestricted_card_allows_every_role() {
        let potion = CardDefinition::new(CardId::new(1), "Potion", EffectType::Heal, Element::Heal);
        assert!(potion.allows(Role::Warrior));
        assert!(potion.allows(Role::Mage));
    }

    #[test]
    fn test_affordability() {
        let card = CardDefinition::new(CardId::new(1), "Hammer", EffectType::Damage, Element::Physical)
            .with_cost(4);
        assert!(!card.is_affordable(3));
        assert!(card.is_affordable(4));
        assert!(card.is_affordable(10));
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(CardId::new(2), "Shield", EffectType::Defense, Element::Light)
            .with_value(3)
            .with_cost(3)
            .with_roles([Role::Warrior, Role::Mage]);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_lowercase_wire_names() {
        let json = r#"{ "id": 9, "name": "Gust", "value": 6, "cost": 2,
                        "effect": "damage", "element": "nature", "allowed_roles": ["mage"] }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.element, Element::Nature);
        assert_eq!(card.rarity, Rarity::Common);
        assert!(card.allows(Role::Mage));
        assert!(!card.allows(Role::Warrior));
    }
}
