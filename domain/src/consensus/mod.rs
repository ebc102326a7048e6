//! Consensus: reconciling multiple agents' answers into one result.

pub mod agreement;
pub mod similarity;
pub mod validator;

pub use agreement::Agreement;
pub use similarity::{DEFAULT_SIMILARITY_THRESHOLD, ExactMatch, SimilarityPolicy, TokenOverlap};
pub use validator::{ConsensusResult, ConsensusValidator, DEFAULT_DISAGREEMENT_PENALTY};
