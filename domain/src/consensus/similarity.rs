//! Similarity policies - pluggable payload comparison for consensus.
//!
//! The validator's state machine never changes; what counts as "the same
//! answer" is a strategy injected at construction time.

/// Default agreement threshold for [`TokenOverlap`]. A deployment decision;
/// configuration may override it.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Decides whether two response payloads count as the same answer.
pub trait SimilarityPolicy: Send + Sync {
    /// Whether `a` and `b` are semantically equivalent.
    fn agree(&self, a: &str, b: &str) -> bool;

    /// Short name for logs and config echo.
    fn name(&self) -> &'static str;
}

/// Strict equality after trimming surrounding whitespace.
///
/// Appropriate for structured payloads (labels, extracted JSON) where any
/// difference is a real disagreement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl SimilarityPolicy for ExactMatch {
    fn agree(&self, a: &str, b: &str) -> bool {
        a.trim() == b.trim()
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Token-level Jaccard overlap for free-text payloads.
///
/// Two payloads agree when they match exactly (after case folding) or when
/// the Jaccard index of their whitespace-token sets reaches the threshold.
#[derive(Debug, Clone, Copy)]
pub struct TokenOverlap {
    threshold: f64,
}

impl TokenOverlap {
    /// Creates a policy with the given agreement threshold, clamped to
    /// `[0.0, 1.0]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Jaccard index over lowercased whitespace tokens.
    fn jaccard(a: &str, b: &str) -> f64 {
        use std::collections::BTreeSet;

        let tokens_a: BTreeSet<String> =
            a.split_whitespace().map(|t| t.to_lowercase()).collect();
        let tokens_b: BTreeSet<String> =
            b.split_whitespace().map(|t| t.to_lowercase()).collect();

        if tokens_a.is_empty() && tokens_b.is_empty() {
            return 1.0;
        }

        let intersection = tokens_a.intersection(&tokens_b).count();
        let union = tokens_a.union(&tokens_b).count();

        intersection as f64 / union as f64
    }
}

impl Default for TokenOverlap {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl SimilarityPolicy for TokenOverlap {
    fn agree(&self, a: &str, b: &str) -> bool {
        if a.trim().eq_ignore_ascii_case(b.trim()) {
            return true;
        }
        Self::jaccard(a, b) >= self.threshold
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_trims_whitespace() {
        let policy = ExactMatch;
        assert!(policy.agree("answer", "  answer \n"));
        assert!(!policy.agree("answer", "Answer"));
    }

    #[test]
    fn test_token_overlap_exact_short_circuit() {
        let policy = TokenOverlap::new(1.0);
        assert!(policy.agree("The Answer", "the answer"));
    }

    #[test]
    fn test_token_overlap_near_match() {
        let policy = TokenOverlap::new(0.6);
        // 3 of 4 distinct tokens shared: jaccard = 3/5 = 0.6
        assert!(policy.agree("rust is fast safe", "rust is very fast"));
        // Disjoint payloads never agree
        assert!(!policy.agree("apples oranges", "trains planes"));
    }

    #[test]
    fn test_token_overlap_threshold_boundary() {
        // jaccard("a b", "a c") = 1/3
        let lenient = TokenOverlap::new(0.3);
        let strict = TokenOverlap::new(0.5);
        assert!(lenient.agree("a b", "a c"));
        assert!(!strict.agree("a b", "a c"));
    }

    #[test]
    fn test_empty_payloads_agree() {
        let policy = TokenOverlap::default();
        assert!(policy.agree("", ""));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(TokenOverlap::new(2.0).threshold(), 1.0);
        assert_eq!(TokenOverlap::new(-1.0).threshold(), 0.0);
    }
}
