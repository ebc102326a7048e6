//! Agreement levels for a consensus round.

use serde::{Deserialize, Serialize};

/// How strongly the contributing agents agreed
///
/// Disagreement is a valid terminal state, not an error: `NoConsensus` still
/// carries a chosen payload. Only `None` (every agent failed) leaves the task
/// unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Agreement {
    /// Every successful response agreed
    Unanimous,
    /// A strict majority of successful responses agreed
    Majority,
    /// Responses diverged; the best individual answer was chosen
    NoConsensus,
    /// No successful responses at all
    None,
}

impl Agreement {
    pub fn is_unanimous(&self) -> bool {
        matches!(self, Agreement::Unanimous)
    }

    pub fn is_majority(&self) -> bool {
        matches!(self, Agreement::Majority)
    }

    /// Whether any answer was produced at all.
    pub fn has_answer(&self) -> bool {
        !matches!(self, Agreement::None)
    }
}

impl std::fmt::Display for Agreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Agreement::Unanimous => "unanimous",
            Agreement::Majority => "majority",
            Agreement::NoConsensus => "no-consensus",
            Agreement::None => "none",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Agreement::Unanimous.to_string(), "unanimous");
        assert_eq!(Agreement::NoConsensus.to_string(), "no-consensus");
    }

    #[test]
    fn test_has_answer() {
        assert!(Agreement::Unanimous.has_answer());
        assert!(Agreement::Majority.has_answer());
        assert!(Agreement::NoConsensus.has_answer());
        assert!(!Agreement::None.has_answer());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Agreement::NoConsensus).unwrap();
        assert_eq!(json, "\"no-consensus\"");
    }
}
