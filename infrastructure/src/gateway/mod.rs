//! Inference gateway adapters.

pub mod http;

pub use http::HttpInferenceGateway;
