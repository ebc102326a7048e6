//! Task types: the unit of work and everything produced while answering it.

pub mod request;
pub mod response;
pub mod result;

pub use request::{TaskId, TaskKind, TaskRequest};
pub use response::AgentResponse;
pub use result::{TaskOutcome, TaskResult};
