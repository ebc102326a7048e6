//! Model catalog: capability tags, model descriptors, and the registry.

pub mod capability;
pub mod info;
pub mod registry;

pub use capability::Capability;
pub use info::{ModelId, ModelInfo, ModelPriority, ModelType};
pub use registry::ModelRegistry;
