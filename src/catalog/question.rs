//! Curriculum questions.

use serde::{Deserialize, Serialize};

/// Question identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

/// A multiple-choice question.
///
/// The engine never grades answers itself; the host compares the chosen
/// option with `is_correct` and reports the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    /// Subject, e.g. "Math".
    pub category: String,

    pub prompt: String,

    pub options: Vec<String>,

    pub correct_answer: String,

    /// Topic recorded in the knowledge log when answered correctly.
    pub knowledge_point: String,
}

impl Question {
    /// Create a question.
    #[must_use]
    pub fn new(
        id: u32,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
        knowledge_point: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId(id),
            category: category.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
            knowledge_point: knowledge_point.into(),
        }
    }

    /// Check an option against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }

    /// The "category: point" tag appended to the knowledge log.
    #[must_use]
    pub fn knowledge_tag(&self) -> String {
        format!("{}: {}", self.category, self.knowledge_point)
    }
}
