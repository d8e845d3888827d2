//! Presentation state.
//!
//! Hit flashes and feedback text are view effects. They ride along in the
//! snapshot so a renderer can draw them, but they never influence rules.
//! Each new message bumps a version; a delayed clear only removes the
//! message it was scheduled for.

use serde::Serialize;

/// Tone of a feedback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// A short message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    /// A success message.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    /// An error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Transient view state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// The boss is flashing from an incoming card hit.
    pub monster_hit: bool,
    /// The player is flashing from a wrong answer.
    pub player_hit: bool,
    pub feedback: Option<Feedback>,
    version: u64,
}

impl Presentation {
    /// Show a message, replacing any current one. Returns its version.
    pub fn show(&mut self, feedback: Feedback) -> u64 {
        self.version += 1;
        self.feedback = Some(feedback);
        self.version
    }

    /// Version of the current message.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Clear the message if it is still the one shown at `version`.
    ///
    /// Returns `true` if something was cleared.
    pub fn clear_if_current(&mut self, version: u64) -> bool {
        if self.version == version && self.feedback.is_some() {
            self.feedback = None;
            true
        } else {
            false
        }
    }

    /// Drop every flash and message.
    pub fn clear(&mut self) {
        self.monster_hit = false;
        self.player_hit = false;
        self.feedback = None;
    }

    /// Check if anything is on screen.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        !self.monster_hit && !self.player_hit && self.feedback.is_none()
    }
}
