//! High-score persistence seam.
//!
//! Where the best score lives (browser storage, a file, a server) is the
//! host's business. The engine only hands over the final score.

/// Storage for the best score across sessions.
pub trait HighScoreStore {
    /// Best score recorded so far.
    fn best(&self) -> u32;

    /// Record a finished session. Returns `true` for a new record.
    fn submit(&mut self, score: u32) -> bool;
}

/// Process-local high score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InMemoryHighScores {
    best: u32,
}

impl InMemoryHighScores {
    /// Start with no record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryHighScores {
    fn best(&self) -> u32 {
        self.best
    }

    fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_strictly_higher_is_a_record() {
        let mut store = InMemoryHighScores::new();

        assert!(store.submit(3));
        assert!(!store.submit(3));
        assert!(!store.submit(1));
        assert!(store.submit(4));
        assert_eq!(store.best(), 4);
    }
}
