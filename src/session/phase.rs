//! Session phases and terminal outcomes.

use serde::{Deserialize, Serialize};

/// The session state machine.
///
/// A session starts in `Playing` and moves to `Won` when all four groups
/// are solved, or to `Lost` when lives run out. Both terminal phases hold
/// until `reset`, which always returns to `Playing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Commands are accepted and mutate the session.
    Playing,
    /// All four groups solved. Only `reset` acts.
    Won,
    /// Lives exhausted. Only `reset` acts.
    Lost,
}

impl Phase {
    /// Whether the session has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All four groups found.
    Won,
    /// Lives exhausted before the last group.
    Lost,
}

impl Outcome {
    /// One-shot notification text for the presentation layer.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "You win!",
            Outcome::Lost => "You lose!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Won.message(), "You win!");
        assert_eq!(Outcome::Lost.message(), "You lose!");
    }
}
