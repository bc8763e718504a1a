//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Inference Ports
//!
//! - `FeatureScaler` - Pre-fitted normalization of the feature vector
//! - `RiskClassifier` - Pre-trained stroke probability model

mod inference;

pub use inference::{FeatureScaler, InferenceError, RiskClassifier};
