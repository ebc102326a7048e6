//! Configuration file schema.
//!
//! The file declares the model catalog, the consensus constants, and runtime
//! limits. Everything has a usable default, so a missing file still yields a
//! working setup pointed at a local endpoint.

use consilium_application::OrchestratorConfig;
use consilium_domain::{
    Capability, ConsensusValidator, DEFAULT_DISAGREEMENT_PENALTY, DEFAULT_SIMILARITY_THRESHOLD,
    DomainError, ExactMatch, ModelInfo, ModelRegistry, ModelType, SimilarityPolicy, TokenOverlap,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime limits for the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSection {
    /// Upper bound on concurrent agent dispatch per task
    pub max_fanout: usize,
    /// Per-agent deadline in milliseconds when the request sets none
    pub default_timeout_ms: u64,
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            max_fanout: 4,
            default_timeout_ms: 30_000,
        }
    }
}

/// Which similarity policy the consensus validator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityKind {
    /// Strict equality after trimming
    Exact,
    /// Token-level Jaccard overlap with a threshold
    #[default]
    Token,
}

/// Consensus constants
///
/// The threshold and penalty are deliberately configuration, not code: they
/// are deployment decisions with no single right value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusSection {
    pub similarity: SimilarityKind,
    pub similarity_threshold: f64,
    pub disagreement_penalty: f64,
}

impl Default for ConsensusSection {
    fn default() -> Self {
        Self {
            similarity: SimilarityKind::Token,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            disagreement_penalty: DEFAULT_DISAGREEMENT_PENALTY,
        }
    }
}

/// Inference endpoint location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySection {
    /// Base URL of the hosted inference endpoint
    pub endpoint: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080".to_string(),
        }
    }
}

/// Complete configuration loaded from files, environment, and defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub runtime: RuntimeSection,
    pub consensus: ConsensusSection,
    pub gateway: GatewaySection,
    /// Model catalog, in priority order within each priority class
    pub models: Vec<ModelInfo>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeSection::default(),
            consensus: ConsensusSection::default(),
            gateway: GatewaySection::default(),
            models: default_catalog(),
        }
    }
}

impl FileConfig {
    /// Builds the immutable registry handed to the orchestrator.
    pub fn build_registry(&self) -> Result<ModelRegistry, DomainError> {
        ModelRegistry::new(self.models.clone())
    }

    /// Orchestrator limits derived from the runtime section.
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig::default()
            .with_max_fanout(self.runtime.max_fanout)
            .with_default_timeout(Duration::from_millis(self.runtime.default_timeout_ms))
    }

    /// Consensus validator with the configured policy and constants.
    pub fn consensus_validator(&self) -> ConsensusValidator {
        let policy: Box<dyn SimilarityPolicy> = match self.consensus.similarity {
            SimilarityKind::Exact => Box::new(ExactMatch),
            SimilarityKind::Token => {
                Box::new(TokenOverlap::new(self.consensus.similarity_threshold))
            }
        };
        ConsensusValidator::new(policy, self.consensus.disagreement_penalty)
    }
}

/// Built-in catalog used when no configuration file declares models.
fn default_catalog() -> Vec<ModelInfo> {
    vec![
        ModelInfo::new("claude-sonnet-4.5", ModelType::Reasoning)
            .with_capabilities([Capability::Reasoning, Capability::Summarization]),
        ModelInfo::new("gpt-5.2-codex", ModelType::Reasoning)
            .with_capabilities([Capability::Reasoning, Capability::Classification]),
        ModelInfo::new("gemini-3-pro-preview", ModelType::Verification)
            .with_capabilities([Capability::Verification, Capability::Reasoning]),
        ModelInfo::new("gpt-5-mini", ModelType::Extraction)
            .with_capabilities([Capability::Extraction, Capability::Classification]),
        ModelInfo::new("claude-haiku-4.5", ModelType::Summarization)
            .with_capabilities([
                Capability::Reasoning,
                Capability::Summarization,
                Capability::Extraction,
                Capability::Verification,
                Capability::Classification,
            ])
            .as_fallback(),
    ]
}
