//! Card system: definitions, registry, hand cards and the conveyor hand.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card template (value, cost, effect, element)
//! - `CardRegistry`: Catalog-ordered lookup and role-filtered draw pools
//! - `HandCard`: A template minted into the hand with a unique id
//! - `Hand` / `CardEconomy`: The fixed-size conveyor hand and its draw rule

pub mod definition;
pub mod hand;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, EffectType, Element, Rarity, Role, RoleList};
pub use hand::{CardEconomy, Hand};
pub use instance::{HandCard, HandCardId};
pub use registry::CardRegistry;
