//! Standard scaler loaded from an exported JSON artifact.

use serde::{Deserialize, Serialize};

use super::ArtifactError;
use crate::ports::{FeatureScaler, InferenceError};

/// Exported scaler parameters: `(x - mean) / scale` per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerArtifact {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Per-column standardization fitted by the training pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Validates the artifact's shape and values.
    ///
    /// Columns with zero variance are exported with `scale == 0`; those are
    /// treated as 1 so the transform stays finite.
    pub fn from_artifact(artifact: StandardScalerArtifact) -> Result<Self, ArtifactError> {
        let width = artifact.feature_names.len();
        if width == 0 {
            return Err(ArtifactError::shape("scaler", "no feature columns"));
        }
        if artifact.mean.len() != width || artifact.scale.len() != width {
            return Err(ArtifactError::shape(
                "scaler",
                format!(
                    "{} feature names but {} means and {} scales",
                    width,
                    artifact.mean.len(),
                    artifact.scale.len()
                ),
            ));
        }
        if artifact
            .mean
            .iter()
            .chain(&artifact.scale)
            .any(|v| !v.is_finite())
        {
            return Err(ArtifactError::shape("scaler", "non-finite parameter"));
        }

        let scale = artifact
            .scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();

        Ok(Self {
            feature_names: artifact.feature_names,
            mean: artifact.mean,
            scale,
        })
    }
}

impl FeatureScaler for StandardScaler {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        InferenceError::check_dimension(self.mean.len(), features.len())?;
        let scaled: Vec<f64> = features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite);
        }
        Ok(scaled)
    }
}
