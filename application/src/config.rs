//! Orchestrator runtime configuration.

use std::time::Duration;

/// Runtime limits for the orchestrator.
///
/// `max_fanout` bounds concurrent agent dispatch for a single task, so a
/// large `target_agent_count` on a request never turns into unbounded
/// parallel calls. `default_timeout` applies per agent invocation whenever a
/// request carries no deadline of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrchestratorConfig {
    /// Upper bound on agents dispatched concurrently for one task
    pub max_fanout: usize,
    /// Per-agent deadline when the request does not set one
    pub default_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_fanout: 4,
            default_timeout: Duration::from_secs(30),
        }
    }
}

impl OrchestratorConfig {
    /// Sets the fan-out bound; at least one agent is always dispatched.
    pub fn with_max_fanout(mut self, max_fanout: usize) -> Self {
        self.max_fanout = max_fanout.max(1);
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }
}
