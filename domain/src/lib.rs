//! Domain layer for consilium
//!
//! This crate contains the core business logic for multi-agent orchestration:
//! the model catalog, task and response types, and the consensus state machine.
//! It has no dependencies on infrastructure or transport concerns.
//!
//! # Core Concepts
//!
//! ## Registry
//!
//! An immutable catalog of hosted models, each tagged with a role family and a
//! capability set. Lookup is capability-based; at most one model per capability
//! is designated as the fallback.
//!
//! ## Consensus
//!
//! When several agents answer the same task, the [`ConsensusValidator`]
//! reconciles their responses into a single [`ConsensusResult`] carrying an
//! agreement level and a confidence score.

pub mod consensus;
pub mod core;
pub mod model;
pub mod prompt;
pub mod task;

// Re-export commonly used types
pub use consensus::{
    Agreement, ConsensusResult, ConsensusValidator, DEFAULT_DISAGREEMENT_PENALTY,
    DEFAULT_SIMILARITY_THRESHOLD, ExactMatch, SimilarityPolicy, TokenOverlap,
};
pub use crate::core::error::DomainError;
pub use model::{
    capability::Capability,
    info::{ModelId, ModelInfo, ModelPriority, ModelType},
    registry::ModelRegistry,
};
pub use prompt::PromptTemplate;
pub use task::{
    request::{TaskId, TaskKind, TaskRequest},
    response::AgentResponse,
    result::{TaskOutcome, TaskResult},
};
