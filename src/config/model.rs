//! Model artifact configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::FeatureSet;

/// Where the trained artifacts live and how they were trained
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the exported classifier
    #[serde(default = "default_classifier_path")]
    pub classifier_path: String,

    /// Path to the exported scaler; empty disables scaling
    #[serde(default = "default_scaler_path")]
    pub scaler_path: Option<String>,

    /// Column family the artifacts were trained on
    #[serde(default)]
    pub feature_set: FeatureSet,

    /// Start without a model and answer predictions with 500
    #[serde(default = "default_allow_degraded")]
    pub allow_degraded: bool,
}

impl ModelConfig {
    /// Scaler path, if scaling is enabled
    pub fn scaler_path(&self) -> Option<&str> {
        self.scaler_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.classifier_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("model.classifier_path"));
        }
        for path in std::iter::once(self.classifier_path.as_str()).chain(self.scaler_path()) {
            if !path.ends_with(".json") {
                return Err(ValidationError::InvalidArtifactPath(path.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: default_classifier_path(),
            scaler_path: default_scaler_path(),
            feature_set: FeatureSet::default(),
            allow_degraded: default_allow_degraded(),
        }
    }
}

fn default_classifier_path() -> String {
    "artifacts/classifier.json".to_string()
}

fn default_scaler_path() -> Option<String> {
    Some("artifacts/scaler.json".to_string())
}

fn default_allow_degraded() -> bool {
    true
}
