//! Model descriptors - immutable metadata about hosted inference models.

use super::capability::Capability;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a hosted model (Value Object)
///
/// Model ids are opaque strings chosen by the deployment configuration,
/// e.g. `"claude-sonnet-4.5"` or `"gpt-5-mini"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId(String);

impl ModelId {
    /// Creates a ModelId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role family a model belongs to
///
/// The role decides which agent implementation wraps the model; dispatch is
/// by this tag, never by type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// General-purpose reasoning model
    Reasoning,
    /// Structured-output extraction model
    Extraction,
    /// Answer-checking model
    Verification,
    /// Condensation-focused model
    Summarization,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Reasoning => "reasoning",
            ModelType::Extraction => "extraction",
            ModelType::Verification => "verification",
            ModelType::Summarization => "summarization",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reasoning" => Ok(ModelType::Reasoning),
            "extraction" => Ok(ModelType::Extraction),
            "verification" => Ok(ModelType::Verification),
            "summarization" => Ok(ModelType::Summarization),
            other => Err(format!(
                "unknown model type: {}. Valid: reasoning, extraction, verification, summarization",
                other
            )),
        }
    }
}

/// Selection priority within the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelPriority {
    /// Tried first, in registration order
    #[default]
    Primary,
    /// Invoked only after every primary candidate has failed
    Fallback,
}

/// Descriptor for one hosted model (Value Object)
///
/// Loaded into the [`super::registry::ModelRegistry`] at process start and
/// never mutated afterwards.
///
/// # Example
///
/// ```
/// use consilium_domain::{Capability, ModelInfo, ModelType};
///
/// let model = ModelInfo::new("claude-sonnet-4.5", ModelType::Reasoning)
///     .with_capability(Capability::Reasoning)
///     .with_capability(Capability::Summarization);
///
/// assert!(model.supports(&[Capability::Reasoning].into()));
/// assert!(!model.supports(&[Capability::Extraction].into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Identifier of the hosted model
    pub id: ModelId,
    /// Role family, selects the agent implementation
    #[serde(rename = "type")]
    pub model_type: ModelType,
    /// Capability tags this model provides
    pub capabilities: BTreeSet<Capability>,
    /// Primary or fallback
    #[serde(default)]
    pub priority: ModelPriority,
}

impl ModelInfo {
    /// Creates a primary model descriptor with an empty capability set.
    pub fn new(id: impl Into<ModelId>, model_type: ModelType) -> Self {
        Self {
            id: id.into(),
            model_type,
            capabilities: BTreeSet::new(),
            priority: ModelPriority::Primary,
        }
    }

    /// Adds a single capability tag.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Replaces the capability set.
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Marks this model as the fallback for its capabilities.
    pub fn as_fallback(mut self) -> Self {
        self.priority = ModelPriority::Fallback;
        self
    }

    /// Whether this model covers every capability in `required`.
    pub fn supports(&self, required: &BTreeSet<Capability>) -> bool {
        required.is_subset(&self.capabilities)
    }

    /// Whether this model is a fallback candidate.
    pub fn is_fallback(&self) -> bool {
        self.priority == ModelPriority::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let model = ModelInfo::new("gpt-5-mini", ModelType::Extraction)
            .with_capability(Capability::Extraction)
            .with_capability(Capability::Classification);

        assert_eq!(model.id.as_str(), "gpt-5-mini");
        assert_eq!(model.model_type, ModelType::Extraction);
        assert_eq!(model.capabilities.len(), 2);
        assert!(!model.is_fallback());
    }

    #[test]
    fn test_supports_requires_full_coverage() {
        let model = ModelInfo::new("m", ModelType::Reasoning)
            .with_capabilities([Capability::Reasoning, Capability::Summarization]);

        assert!(model.supports(&[Capability::Reasoning].into()));
        assert!(model.supports(&[Capability::Reasoning, Capability::Summarization].into()));
        assert!(!model.supports(&[Capability::Reasoning, Capability::Extraction].into()));
    }

    #[test]
    fn test_empty_requirement_is_always_supported() {
        let model = ModelInfo::new("m", ModelType::Reasoning);
        assert!(model.supports(&BTreeSet::new()));
    }

    #[test]
    fn test_as_fallback() {
        let model = ModelInfo::new("m", ModelType::Reasoning).as_fallback();
        assert!(model.is_fallback());
        assert_eq!(model.priority, ModelPriority::Fallback);
    }

    #[test]
    fn test_model_type_roundtrip() {
        for ty in [
            ModelType::Reasoning,
            ModelType::Extraction,
            ModelType::Verification,
            ModelType::Summarization,
        ] {
            let parsed: ModelType = ty.as_str().parse().unwrap();
            assert_eq!(ty, parsed);
        }
    }
}
