//! Inference ports for the pre-trained stroke model.
//!
//! The scaler and classifier are produced by an external training pipeline.
//! The domain only needs two operations from them, so both sit behind traits
//! and the artifact format stays an adapter concern.

use thiserror::Error;

/// Pre-fitted normalization applied to a feature vector before inference.
pub trait FeatureScaler: Send + Sync {
    /// Column names the scaler was fitted on, in order.
    fn feature_names(&self) -> &[String];

    /// Returns the normalized copy of `features`.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// Binary classifier estimating stroke probability.
pub trait RiskClassifier: Send + Sync {
    /// Column names the classifier was trained on, in order.
    fn feature_names(&self) -> &[String];

    /// Probability of the positive (stroke) class, in `0.0..=1.0`.
    fn predict_probability(&self, features: &[f64]) -> Result<f64, InferenceError>;
}

/// Errors raised by scaler or classifier invocations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model produced a non-finite value")]
    NonFinite,

    #[error("Model unavailable: {0}")]
    Unavailable(String),
}

impl InferenceError {
    pub fn check_dimension(expected: usize, actual: usize) -> Result<(), Self> {
        if expected != actual {
            return Err(InferenceError::DimensionMismatch { expected, actual });
        }
        Ok(())
    }
}
