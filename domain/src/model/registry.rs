//! Immutable model registry with capability-based lookup.

use super::capability::{Capability, format_capability_set};
use super::info::{ModelInfo, ModelType};
use crate::core::error::DomainError;
use std::collections::BTreeSet;

/// Static catalog of the hosted models available to the orchestrator.
///
/// Built once at process start from configuration and injected wherever model
/// lookup is needed; there is no ambient global registry. Read-only after
/// construction.
///
/// Lookup returns primary models before the fallback, preserving registration
/// order within each priority class, so the orchestrator's fallback chain is
/// deterministic.
///
/// # Example
///
/// ```
/// use consilium_domain::{Capability, ModelInfo, ModelRegistry, ModelType};
///
/// let registry = ModelRegistry::new(vec![
///     ModelInfo::new("primary", ModelType::Reasoning).with_capability(Capability::Reasoning),
///     ModelInfo::new("spare", ModelType::Reasoning)
///         .with_capability(Capability::Reasoning)
///         .as_fallback(),
/// ])
/// .unwrap();
///
/// let models = registry.models_by_capability(Capability::Reasoning).unwrap();
/// assert_eq!(models[0].id.as_str(), "primary");
/// assert_eq!(models[1].id.as_str(), "spare");
/// ```
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelInfo>,
}

impl ModelRegistry {
    /// Builds a registry, validating that at most one fallback is designated
    /// per capability tag.
    pub fn new(models: Vec<ModelInfo>) -> Result<Self, DomainError> {
        if models.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }

        for capability in Capability::all() {
            let fallbacks = models
                .iter()
                .filter(|m| m.is_fallback() && m.capabilities.contains(&capability))
                .count();
            if fallbacks > 1 {
                return Err(DomainError::DuplicateFallback(
                    capability.as_str().to_string(),
                ));
            }
        }

        Ok(Self { models })
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// All registered models, in registration order.
    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Models providing a single capability, primaries first.
    pub fn models_by_capability(
        &self,
        capability: Capability,
    ) -> Result<Vec<&ModelInfo>, DomainError> {
        self.models_for(&BTreeSet::from([capability]))
    }

    /// Models covering every capability in `required`, primaries first and the
    /// fallback (if any) last.
    ///
    /// Fails with [`DomainError::NoCapableModels`] when no registered model
    /// covers the full set.
    pub fn models_for(
        &self,
        required: &BTreeSet<Capability>,
    ) -> Result<Vec<&ModelInfo>, DomainError> {
        let mut ordered: Vec<&ModelInfo> = self
            .models
            .iter()
            .filter(|m| !m.is_fallback() && m.supports(required))
            .collect();

        ordered.extend(
            self.models
                .iter()
                .filter(|m| m.is_fallback() && m.supports(required)),
        );

        if ordered.is_empty() {
            return Err(DomainError::NoCapableModels(format_capability_set(required)));
        }

        Ok(ordered)
    }

    /// Models of a given role family, in registration order.
    pub fn models_by_type(&self, model_type: ModelType) -> Vec<&ModelInfo> {
        self.models
            .iter()
            .filter(|m| m.model_type == model_type)
            .collect()
    }

    /// The designated fallback model for a capability, if one is registered.
    pub fn fallback_for(&self, capability: Capability) -> Option<&ModelInfo> {
        self.models
            .iter()
            .find(|m| m.is_fallback() && m.capabilities.contains(&capability))
    }
}
