//! Error and rejection types.
//!
//! Gameplay is total: actions are either applied or rejected, and a rejection
//! never changes state. Only loading external data can fail.

use thiserror::Error;

use crate::cards::HandCardId;
use crate::session::Stage;

/// Why an action was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The player is locked out after a wrong answer.
    #[error("player is stunned")]
    Stunned,

    /// The card costs more energy than the player has.
    #[error("card costs {cost} energy, only {available} available")]
    InsufficientEnergy { cost: u32, available: u32 },

    /// No card with this id is in the hand.
    #[error("{0} is not in the hand")]
    CardNotInHand(HandCardId),

    /// The action is not valid in the current stage.
    #[error("action not allowed in stage {0:?}")]
    WrongStage(Stage),

    /// The hero skill is still cooling down.
    #[error("hero skill ready in {0}s")]
    SkillCoolingDown(u32),
}

/// Outcome of a player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// The action changed the session.
    Applied,
    /// The action was ignored; the session is unchanged.
    Rejected(Rejection),
}

impl ActionResult {
    /// Check if the action was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionResult::Applied)
    }

    /// Get the rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ActionResult::Applied => None,
            ActionResult::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Rejection> for ActionResult {
    fn from(reason: Rejection) -> Self {
        ActionResult::Rejected(reason)
    }
}

/// Failure to load a `BattleConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Failure to load a content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateCard(crate::cards::CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let reason = Rejection::InsufficientEnergy { cost: 3, available: 2 };
        assert_eq!(reason.to_string(), "card costs 3 energy, only 2 available");
        assert_eq!(Rejection::SkillCoolingDown(7).to_string(), "hero skill ready in 7s");
    }

    #[test]
    fn test_action_result() {
        assert!(ActionResult::Applied.is_applied());
        assert_eq!(ActionResult::Applied.rejection(), None);

        let rejected: ActionResult = Rejection::Stunned.into();
        assert!(!rejected.is_applied());
        assert_eq!(rejected.rejection(), Some(Rejection::Stunned));
    }
}
