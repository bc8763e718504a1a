//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - JSON model artifacts behind the inference ports
//! - `http` - Axum routes, handlers, and HTML rendering

pub mod http;
pub mod model;

pub use model::{ArtifactError, ModelArtifacts};
