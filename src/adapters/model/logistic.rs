//! Logistic regression classifier loaded from an exported JSON artifact.

use serde::{Deserialize, Serialize};

use super::ArtifactError;
use crate::ports::{InferenceError, RiskClassifier};

/// Exported classifier parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Binary logistic regression: `sigmoid(w · x + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionClassifier {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticRegressionClassifier {
    pub fn from_artifact(artifact: LogisticRegressionArtifact) -> Result<Self, ArtifactError> {
        let width = artifact.feature_names.len();
        if width == 0 {
            return Err(ArtifactError::shape("classifier", "no feature columns"));
        }
        if artifact.coefficients.len() != width {
            return Err(ArtifactError::shape(
                "classifier",
                format!(
                    "{} feature names but {} coefficients",
                    width,
                    artifact.coefficients.len()
                ),
            ));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ArtifactError::shape("classifier", "non-finite parameter"));
        }

        Ok(Self {
            feature_names: artifact.feature_names,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    fn decision_function(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl RiskClassifier for LogisticRegressionClassifier {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64, InferenceError> {
        InferenceError::check_dimension(self.coefficients.len(), features.len())?;
        let z = self.decision_function(features);
        if !z.is_finite() {
            return Err(InferenceError::NonFinite);
        }
        Ok(sigmoid(z))
    }
}
