//! AssessRiskHandler - Runs one submission through the stroke model.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::adapters::model::ModelArtifacts;
use crate::domain::assessment::{
    AdviceCatalog, FeatureSchema, FeatureVector, RiskAssessment, RiskInput, RiskThresholdTable,
    StrokeProbability,
};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::{FeatureScaler, InferenceError, RiskClassifier};

/// Command carrying the raw submitted fields.
#[derive(Debug, Clone, Default)]
pub struct AssessRiskCommand {
    pub fields: HashMap<String, String>,
}

impl AssessRiskCommand {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// Errors that can occur while assessing a submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Validation(e) => e.code(),
            AssessmentError::Inference(InferenceError::Unavailable(_)) => {
                ErrorCode::ModelUnavailable
            }
            AssessmentError::Inference(_) => ErrorCode::InferenceFailed,
        }
    }
}

/// Handler for risk assessments.
///
/// Holds the read-only model artifacts and lookup tables; cheap to share
/// across concurrent requests behind an `Arc`.
pub struct AssessRiskHandler {
    schema: FeatureSchema,
    scaler: Option<Arc<dyn FeatureScaler>>,
    classifier: Arc<dyn RiskClassifier>,
    thresholds: RiskThresholdTable,
    catalog: AdviceCatalog,
}

impl AssessRiskHandler {
    pub fn new(
        schema: FeatureSchema,
        scaler: Option<Arc<dyn FeatureScaler>>,
        classifier: Arc<dyn RiskClassifier>,
        thresholds: RiskThresholdTable,
        catalog: AdviceCatalog,
    ) -> Self {
        Self {
            schema,
            scaler,
            classifier,
            thresholds,
            catalog,
        }
    }

    /// Builds a handler over loaded artifacts with the standard tables.
    pub fn from_artifacts(artifacts: ModelArtifacts) -> Self {
        Self::new(
            artifacts.schema,
            artifacts.scaler,
            artifacts.classifier,
            RiskThresholdTable::standard(),
            AdviceCatalog::standard(),
        )
    }

    pub fn thresholds(&self) -> &RiskThresholdTable {
        &self.thresholds
    }

    pub fn handle(&self, cmd: AssessRiskCommand) -> Result<RiskAssessment, AssessmentError> {
        // 1. Coerce fields into a validated record
        let input = RiskInput::from_fields(&cmd.fields)?;

        // 2. Lay out columns in training order
        let vector = FeatureVector::assemble(&input, &self.schema)?;

        // 3. Scale, then infer
        let fraction = match &self.scaler {
            Some(scaler) => {
                let scaled = scaler.transform(vector.as_slice())?;
                self.classifier.predict_probability(&scaled)
            }
            None => self.classifier.predict_probability(vector.as_slice()),
        }
        .map_err(|e| {
            warn!(error = %e, "Stroke model inference failed");
            e
        })?;

        let probability = StrokeProbability::from_fraction(fraction)
            .map_err(|_| AssessmentError::Inference(InferenceError::NonFinite))?;

        // 4. Translate into tier and advice
        let assessment =
            RiskAssessment::compose(&input, probability, &self.thresholds, &self.catalog);

        debug!(
            stroke_percentage = assessment.stroke_percentage.rounded(),
            risk_category = %assessment.risk_category,
            diet_band = %assessment.diet_band,
            "Risk assessment completed"
        );

        Ok(assessment)
    }
}
