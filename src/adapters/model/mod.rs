//! Model artifact adapters.
//!
//! Implementations of the inference ports backed by JSON artifacts exported
//! from the training pipeline.
//!
//! ## Available Adapters
//!
//! - `StandardScaler` - Per-column standardization (`FeatureScaler`)
//! - `LogisticRegressionClassifier` - Logistic regression (`RiskClassifier`)
//! - `ModelArtifacts` - Startup loader that checks both agree on the schema

mod loader;
mod logistic;
mod scaler;

pub use loader::ModelArtifacts;
pub use logistic::{LogisticRegressionArtifact, LogisticRegressionClassifier};
pub use scaler::{StandardScaler, StandardScalerArtifact};

use thiserror::Error;

use crate::domain::assessment::SchemaError;

/// Errors raised while loading model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {artifact} artifact: {reason}")]
    Shape {
        artifact: &'static str,
        reason: String,
    },

    #[error("Invalid feature schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("{artifact} columns [{actual}] do not match expected [{expected}]")]
    SchemaMismatch {
        artifact: &'static str,
        expected: String,
        actual: String,
    },
}

impl ArtifactError {
    pub(crate) fn shape(artifact: &'static str, reason: impl Into<String>) -> Self {
        ArtifactError::Shape {
            artifact,
            reason: reason.into(),
        }
    }
}
