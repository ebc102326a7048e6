//! Configuration: file schema and multi-source loading.

pub mod file_config;
pub mod loader;

pub use file_config::{ConsensusSection, FileConfig, GatewaySection, RuntimeSection, SimilarityKind};
pub use loader::ConfigLoader;
