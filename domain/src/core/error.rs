//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant here is a configuration problem: the request asked for
/// something the registered model catalog cannot provide. Agent-level
/// failures (transport errors, timeouts) are not errors at this level;
/// they are represented as failed responses and drive fallback instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no model registered for capabilities [{0}]")]
    NoCapableModels(String),

    #[error("multiple fallback models registered for capability '{0}'")]
    DuplicateFallback(String),

    #[error("model registry is empty")]
    EmptyRegistry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_capable_models_display() {
        let error = DomainError::NoCapableModels("extraction".to_string());
        assert_eq!(
            error.to_string(),
            "no model registered for capabilities [extraction]"
        );
    }

    #[test]
    fn test_duplicate_fallback_display() {
        let error = DomainError::DuplicateFallback("summarization".to_string());
        assert!(error.to_string().contains("summarization"));
    }
}
