//! Task request - the immutable unit of work submitted to the orchestrator.

use crate::model::capability::Capability;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Unique identifier for a submitted task.
///
/// Every response produced while answering a task carries this id, which is
/// how the consensus stage knows the responses belong together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a TaskId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique TaskId using a UUID-like format.
    pub fn generate() -> Self {
        Self(uuid_v4())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of work a task asks for
///
/// The kind picks the default capability when the request does not declare an
/// explicit capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Open-ended question answering
    Answer,
    /// Condense the payload into a short summary
    Summarize,
    /// Extract structured facts from the payload
    Extract,
    /// Check a candidate answer embedded in the payload
    Verify,
    /// Label the payload with one of a set of classes
    Classify,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Answer => "answer",
            TaskKind::Summarize => "summarize",
            TaskKind::Extract => "extract",
            TaskKind::Verify => "verify",
            TaskKind::Classify => "classify",
        }
    }

    /// The capability implied by this kind when none is declared.
    pub fn default_capability(&self) -> Capability {
        match self {
            TaskKind::Answer => Capability::Reasoning,
            TaskKind::Summarize => Capability::Summarization,
            TaskKind::Extract => Capability::Extraction,
            TaskKind::Verify => Capability::Verification,
            TaskKind::Classify => Capability::Classification,
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "answer" => Ok(TaskKind::Answer),
            "summarize" => Ok(TaskKind::Summarize),
            "extract" => Ok(TaskKind::Extract),
            "verify" => Ok(TaskKind::Verify),
            "classify" => Ok(TaskKind::Classify),
            other => Err(format!(
                "unknown task kind: {}. Valid: answer, summarize, extract, verify, classify",
                other
            )),
        }
    }
}

/// The unit of work submitted to the orchestrator (Value Object)
///
/// Immutable once created; one request is answered by one or more
/// [`crate::task::response::AgentResponse`]s.
///
/// # Example
///
/// ```
/// use consilium_domain::{Capability, TaskKind, TaskRequest};
/// use std::time::Duration;
///
/// let request = TaskRequest::new(TaskKind::Summarize, "A long article...")
///     .with_agent_count(3)
///     .with_timeout(Duration::from_secs(20));
///
/// assert_eq!(request.agent_count, Some(3));
/// assert!(request.required_capabilities().contains(&Capability::Summarization));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Unique identifier, generated at construction
    pub id: TaskId,
    /// Kind of work
    pub kind: TaskKind,
    /// Free-form input for the agents
    pub payload: String,
    /// Required capability tags; empty means "derive from the kind"
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    /// How many agents to fan out to; `None` or `Some(1)` selects the
    /// single-agent path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_count: Option<usize>,
    /// Per-request deadline for each agent invocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl TaskRequest {
    /// Creates a request with a generated id and no explicit capability set.
    pub fn new(kind: TaskKind, payload: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            kind,
            payload: payload.into(),
            capabilities: BTreeSet::new(),
            agent_count: None,
            timeout: None,
        }
    }

    /// Adds a required capability tag.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Replaces the required capability set.
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Sets the target number of agents for consensus.
    pub fn with_agent_count(mut self, count: usize) -> Self {
        self.agent_count = Some(count);
        self
    }

    /// Sets the per-agent deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The effective capability set: the declared tags, or the kind's default
    /// capability when none were declared.
    pub fn required_capabilities(&self) -> BTreeSet<Capability> {
        if self.capabilities.is_empty() {
            BTreeSet::from([self.kind.default_capability()])
        } else {
            self.capabilities.clone()
        }
    }
}

/// Generate a pseudo-random UUID-like identifier.
///
/// Time-seeded; good enough for correlating logs and responses within one
/// process, not for global uniqueness guarantees.
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    let secs = now.as_secs();
    let nanos = now.subsec_nanos() as u64;
    let mixed =
        (secs ^ nanos.wrapping_mul(0x9e37_79b9_7f4a_7c15)).wrapping_mul(0xff51_afd7_ed55_8ccd);

    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        secs as u32,
        (nanos >> 16) & 0xffff,
        nanos & 0xfff,
        (mixed >> 48) & 0xffff,
        mixed & 0xffff_ffff_ffff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_kind_roundtrip() {
        for kind in [
            TaskKind::Answer,
            TaskKind::Summarize,
            TaskKind::Extract,
            TaskKind::Verify,
            TaskKind::Classify,
        ] {
            let parsed: TaskKind = kind.as_str().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_required_capabilities_defaults_from_kind() {
        let request = TaskRequest::new(TaskKind::Extract, "payload");
        assert_eq!(
            request.required_capabilities(),
            BTreeSet::from([Capability::Extraction])
        );
    }

    #[test]
    fn test_explicit_capabilities_override_kind() {
        let request = TaskRequest::new(TaskKind::Answer, "payload")
            .with_capability(Capability::Verification);
        assert_eq!(
            request.required_capabilities(),
            BTreeSet::from([Capability::Verification])
        );
    }

    #[test]
    fn test_builder() {
        let request = TaskRequest::new(TaskKind::Answer, "why?")
            .with_agent_count(3)
            .with_timeout(Duration::from_millis(500));

        assert_eq!(request.kind, TaskKind::Answer);
        assert_eq!(request.payload, "why?");
        assert_eq!(request.agent_count, Some(3));
        assert_eq!(request.timeout, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_generated_ids_have_uuid_shape() {
        let id = TaskId::generate();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0].len(), 8);
        assert_eq!(parts[4].len(), 12);
    }
}
