//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{FeatureSet, RiskAssessment, RiskThresholdTable};
use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Prediction result returned by `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub name: Option<String>,
    pub stroke_percentage: f64,
    pub risk_category: String,
    pub advice: String,
    pub reasons: Vec<String>,
    pub recommended_foods: Vec<String>,
}

impl From<RiskAssessment> for PredictResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            name: assessment.name,
            stroke_percentage: assessment.stroke_percentage.rounded(),
            risk_category: assessment.risk_category,
            advice: assessment.advice,
            reasons: assessment.reasons,
            recommended_foods: assessment.recommended_foods,
        }
    }
}

/// One row of `GET /api/risk-levels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevelResponse {
    pub max_percentage: f64,
    pub risk_category: String,
    pub advice: String,
}

/// Threshold table as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevelsResponse {
    pub levels: Vec<RiskLevelResponse>,
}

impl From<&RiskThresholdTable> for RiskLevelsResponse {
    fn from(table: &RiskThresholdTable) -> Self {
        Self {
            levels: table
                .tiers()
                .iter()
                .map(|tier| RiskLevelResponse {
                    max_percentage: tier.upper_bound,
                    risk_category: tier.label.clone(),
                    advice: tier.advice.clone(),
                })
                .collect(),
        }
    }
}

/// Service health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub feature_set: FeatureSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Standard error response.
///
/// `error` carries the human-readable message; `code` is machine-readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }
}
