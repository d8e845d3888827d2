//! End-of-session summary.

use serde::Serialize;

use crate::catalog::HighScoreStore;

/// What a finished session achieved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub score: u32,
    /// The final boss was defeated.
    pub victory: bool,
    /// Zero to three.
    pub stars: u8,
    /// Knowledge tags collected, in answer order.
    pub knowledge: Vec<String>,
}

impl ResultSummary {
    /// Submit the score to a high-score store. Returns `true` for a new record.
    pub fn record<S: HighScoreStore + ?Sized>(&self, store: &mut S) -> bool {
        store.submit(self.score)
    }
}

/// Star rating for a finished session.
///
/// A defeat earns nothing. Answering as many questions as the catalog holds
/// earns three stars, reaching `pass_score` earns two, anything else one.
#[must_use]
pub fn star_rating(score: u32, victory: bool, question_count: usize, pass_score: u32) -> u8 {
    if !victory {
        return 0;
    }
    let perfect = u32::try_from(question_count).unwrap_or(u32::MAX);
    if score >= perfect {
        3
    } else if score >= pass_score {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryHighScores;

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(50, false, 10, 3), 0);
        assert_eq!(star_rating(10, true, 10, 3), 3);
        assert_eq!(star_rating(12, true, 10, 3), 3);
        assert_eq!(star_rating(3, true, 10, 3), 2);
        assert_eq!(star_rating(2, true, 10, 3), 1);
    }

    #[test]
    fn test_record_high_score() {
        let mut store = InMemoryHighScores::new();
        let summary = ResultSummary {
            score: 7,
            victory: true,
            stars: 2,
            knowledge: Vec::new(),
        };

        assert!(summary.record(&mut store));
        assert!(!summary.record(&mut store));
        assert_eq!(store.best(), 7);
    }
}
