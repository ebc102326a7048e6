//! Application layer for consilium
//!
//! Use cases and ports. The [`Orchestrator`] is the entry point: it resolves
//! capable agents through the injected model registry, fans a task out to one
//! or more of them, and reconciles multi-agent responses through the domain
//! consensus validator. Agents talk to hosted models only through the
//! [`InferenceGateway`] port; adapters live in the infrastructure layer.

pub mod agents;
pub mod config;
pub mod orchestrator;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use agents::{Agent, AgentError, agent_for};
pub use config::OrchestratorConfig;
pub use orchestrator::{Orchestrator, OrchestratorError};
pub use ports::inference_gateway::{
    GatewayError, InferenceGateway, InferenceOptions, InferenceReply,
};
