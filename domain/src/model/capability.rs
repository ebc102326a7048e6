//! Capability tags describing what kind of task a model can perform.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A capability tag (Value Object)
///
/// Requests declare the capabilities they require; models declare the
/// capabilities they provide. The orchestrator only dispatches a request to
/// agents whose model covers every required tag.
///
/// # Example
///
/// ```
/// use consilium_domain::Capability;
///
/// let cap: Capability = "summarization".parse().unwrap();
/// assert_eq!(cap, Capability::Summarization);
/// assert_eq!(cap.as_str(), "summarization");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// General reasoning and question answering
    Reasoning,
    /// Condensing long input into a short answer
    Summarization,
    /// Pulling structured facts out of free text
    Extraction,
    /// Checking another answer for correctness
    Verification,
    /// Assigning input to one of a set of labels
    Classification,
}

impl Capability {
    /// Get the string identifier for this capability
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Reasoning => "reasoning",
            Capability::Summarization => "summarization",
            Capability::Extraction => "extraction",
            Capability::Verification => "verification",
            Capability::Classification => "classification",
        }
    }

    /// All known capability tags, in canonical order
    pub fn all() -> [Capability; 5] {
        [
            Capability::Reasoning,
            Capability::Summarization,
            Capability::Extraction,
            Capability::Verification,
            Capability::Classification,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reasoning" => Ok(Capability::Reasoning),
            "summarization" => Ok(Capability::Summarization),
            "extraction" => Ok(Capability::Extraction),
            "verification" => Ok(Capability::Verification),
            "classification" => Ok(Capability::Classification),
            other => Err(format!(
                "unknown capability: {}. Valid: reasoning, summarization, extraction, verification, classification",
                other
            )),
        }
    }
}

/// Render a capability set for error messages and logs (canonical order).
pub fn format_capability_set(caps: &BTreeSet<Capability>) -> String {
    caps.iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_roundtrip() {
        for cap in Capability::all() {
            let parsed: Capability = cap.as_str().parse().unwrap();
            assert_eq!(cap, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let cap: Capability = "Extraction".parse().unwrap();
        assert_eq!(cap, Capability::Extraction);
    }

    #[test]
    fn test_unknown_capability_is_rejected() {
        let result: Result<Capability, _> = "telepathy".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_format_capability_set() {
        let caps: BTreeSet<Capability> =
            [Capability::Summarization, Capability::Reasoning].into();
        assert_eq!(format_capability_set(&caps), "reasoning, summarization");
    }
}
