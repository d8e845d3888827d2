//! Shipped content: three levels, fourteen cards and a sample question bank.

use crate::cards::{CardDefinition, CardId, EffectType, Element, Rarity, Role};

use super::level::LevelConfig;
use super::question::Question;

pub(crate) fn levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new(1, "Misty Forest", "Jelly Slime", Element::Nature, 40),
        LevelConfig::new(2, "Lava Volcano", "Flame Golem", Element::Fire, 80),
        LevelConfig::new(3, "Demon Castle", "Night Dragon", Element::Dark, 150),
    ]
}

fn card(id: u32, name: &str, effect: EffectType, element: Element, value: u32, cost: u32) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, effect, element)
        .with_value(value)
        .with_cost(cost)
}

pub(crate) fn cards() -> Vec<CardDefinition> {
    use EffectType::{Damage, Defense, Heal};
    use Role::{Mage, Warrior};

    vec![
        // Warrior
        card(1, "Hero Sword", Damage, Element::Physical, 6, 2).with_roles([Warrior]),
        card(2, "Holy Shield", Defense, Element::Light, 3, 3)
            .with_rarity(Rarity::Rare)
            .with_roles([Warrior, Mage]),
        card(3, "Fireball", Damage, Element::Fire, 10, 3)
            .with_rarity(Rarity::Rare)
            .with_roles([Warrior]),
        card(4, "Titan Hammer", Damage, Element::Physical, 12, 4)
            .with_rarity(Rarity::Rare)
            .with_roles([Warrior]),
        card(5, "Dragon Breath", Damage, Element::Fire, 20, 6)
            .with_rarity(Rarity::Legendary)
            .with_roles([Warrior]),
        // Mage
        card(6, "Frost Bolt", Damage, Element::Water, 6, 2).with_roles([Mage]),
        card(7, "Gale", Damage, Element::Nature, 6, 2).with_roles([Mage]),
        card(8, "Greater Heal", Heal, Element::Heal, 2, 5)
            .with_rarity(Rarity::Rare)
            .with_roles([Mage]),
        card(9, "Thunderstrike", Damage, Element::Light, 15, 5)
            .with_rarity(Rarity::Legendary)
            .with_roles([Mage]),
        card(10, "Tsunami", Damage, Element::Water, 16, 5)
            .with_rarity(Rarity::Legendary)
            .with_roles([Mage]),
        card(11, "Dark Matter", Damage, Element::Dark, 12, 4)
            .with_rarity(Rarity::Rare)
            .with_roles([Mage]),
        // Shared
        card(12, "Small Potion", Heal, Element::Heal, 1, 3).with_roles([Warrior, Mage]),
        card(13, "Rockslide", Damage, Element::Nature, 8, 3).with_roles([Warrior]),
        card(14, "Meteor Shower", Damage, Element::Light, 8, 3)
            .with_rarity(Rarity::Rare)
            .with_roles([Mage]),
    ]
}

pub(crate) fn questions() -> Vec<Question> {
    vec![
        Question::new(21, "Math", "48 / 8 = ?", ["5", "7", "6", "8"], "6", "Division facts"),
        Question::new(
            22,
            "Math",
            "A rectangle is 10cm long and 6cm wide. What is its perimeter?",
            ["32cm", "20cm", "16cm", "60cm"],
            "32cm",
            "Perimeter",
        ),
        Question::new(23, "Math", "3.8 + 2.5 = ?", ["5.3", "6.3", "4.3", "6.2"], "6.3", "Decimal addition"),
        Question::new(24, "Math", "120 / (3 x 4) = ?", ["10", "5", "15", "20"], "10", "Order of operations"),
        Question::new(25, "Math", "1 hour = ? minutes", ["30", "60", "90", "120"], "60", "Time units"),
        Question::new(26, "Math", "25 x 4 = ?", ["50", "100", "75", "200"], "100", "Mental multiplication"),
        Question::new(41, "English", "What color is the banana?", ["Red", "Blue", "Yellow", "Green"], "Yellow", "Colors"),
        Question::new(43, "English", "There ______ a book on the desk.", ["am", "is", "are", "be"], "is", "There is / there are"),
        Question::new(48, "English", "She ______ to school by bike every day.", ["go", "going", "goes", "went"], "goes", "Third person singular"),
        Question::new(55, "English", "I ______ TV last night.", ["watch", "watches", "watched", "watching"], "watched", "Simple past"),
    ]
}

/// Stand-ins used when a catalog section is empty.
pub(crate) fn fallback_level() -> LevelConfig {
    LevelConfig::new(1, "Training Ground", "Training Dummy", Element::Physical, 10)
}

pub(crate) fn fallback_card() -> CardDefinition {
    card(0, "Strike", EffectType::Damage, Element::Physical, 2, 1)
}

pub(crate) fn fallback_question() -> Question {
    Question::new(0, "Math", "1 + 1 = ?", ["1", "2", "3", "4"], "2", "Addition")
}
