//! Infrastructure layer for consilium
//!
//! Adapters for the application's ports: an HTTP inference gateway over
//! `reqwest` and layered TOML/env configuration over `figment`, including the
//! construction of the immutable model registry from configuration.

pub mod config;
pub mod gateway;

pub use config::{ConfigLoader, FileConfig};
pub use gateway::HttpInferenceGateway;
