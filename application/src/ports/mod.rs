//! Ports - interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure layer.

pub mod inference_gateway;
