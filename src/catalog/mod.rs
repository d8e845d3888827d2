//! Static content: levels, cards and questions.
//!
//! A `Catalog` is loaded once and never mutated. Construction guarantees
//! every section is non-empty: an empty or misconfigured section is replaced
//! with a deterministic stand-in and a warning is logged, so the engine
//! never has to handle a missing level, card or question.

mod level;
mod question;
mod score;
mod standard;

pub use level::LevelConfig;
pub use question::{Question, QuestionId};
pub use score::{HighScoreStore, InMemoryHighScores};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::{CardDefinition, CardRegistry};
use crate::core::CatalogError;

/// Wire format for catalog JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub levels: Vec<LevelConfig>,
    #[serde(default)]
    pub cards: Vec<CardDefinition>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Immutable game content.
#[derive(Clone, Debug)]
pub struct Catalog {
    levels: Vec<LevelConfig>,
    cards: CardRegistry,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog, substituting stand-ins for empty sections.
    #[must_use]
    pub fn new(levels: Vec<LevelConfig>, cards: CardRegistry, questions: Vec<Question>) -> Self {
        let levels = if levels.is_empty() {
            warn!("level catalog is empty, using fallback level");
            vec![standard::fallback_level()]
        } else {
            levels
        };

        let cards = if cards.is_empty() {
            warn!("card catalog is empty, using fallback card");
            registry_or_empty([standard::fallback_card()])
        } else {
            cards
        };

        let questions = if questions.is_empty() {
            warn!("question catalog is empty, using fallback question");
            vec![standard::fallback_question()]
        } else {
            questions
        };

        Self {
            levels,
            cards,
            questions,
        }
    }

    /// The shipped content.
    #[must_use]
    pub fn standard() -> Self {
        let cards = registry_or_empty(standard::cards());
        Self::new(standard::levels(), cards, standard::questions())
    }

    /// Load content from a `CatalogFile` JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Build from already-parsed content.
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let cards = CardRegistry::from_cards(file.cards)?;
        Ok(Self::new(file.levels, cards, file.questions))
    }

    /// All levels in play order. Never empty.
    #[must_use]
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Level by index, clamped to the last level.
    #[must_use]
    pub fn level(&self, index: usize) -> &LevelConfig {
        let last = self.levels.len() - 1;
        &self.levels[index.min(last)]
    }

    /// Number of levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Check if `index` is the final level.
    #[must_use]
    pub fn is_final_level(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// Card definitions. Never empty.
    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// All questions in catalog order. Never empty.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question by catalog position, clamped to the last question.
    #[must_use]
    pub fn question(&self, position: usize) -> &Question {
        let last = self.questions.len() - 1;
        &self.questions[position.min(last)]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Register built-in cards, logging and discarding the set on a bad id.
fn registry_or_empty(cards: impl IntoIterator<Item = CardDefinition>) -> CardRegistry {
    match CardRegistry::from_cards(cards) {
        Ok(registry) => registry,
        Err(error) => {
            warn!(%error, "built-in cards rejected");
            CardRegistry::new()
        }
    }
}
