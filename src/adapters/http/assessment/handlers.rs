//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to the risk assessment handler.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use tracing::{info, warn};

use crate::adapters::model::{ArtifactError, ModelArtifacts};
use crate::application::handlers::assessment::{
    AssessRiskCommand, AssessRiskHandler, AssessmentError,
};
use crate::config::ModelConfig;
use crate::domain::assessment::{FeatureSet, RiskAssessment, RiskThresholdTable};
use crate::domain::foundation::ErrorCode;
use crate::ports::InferenceError;

use super::dto::{ErrorResponse, HealthResponse, PredictResponse, RiskLevelsResponse};
use super::extract::{RiskForm, RiskFormRejection};
use super::render;

const MODEL_NOT_LOADED: &str = "Model not loaded";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Whether the stroke model is available to serve predictions.
#[derive(Clone)]
pub enum ModelStatus {
    Ready(Arc<AssessRiskHandler>),
    Degraded { reason: String },
}

/// Shared state for assessment endpoints.
///
/// Cloned per request; the handler and table sit behind `Arc`s.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub model: ModelStatus,
    pub feature_set: FeatureSet,
    pub thresholds: Arc<RiskThresholdTable>,
}

impl AssessmentAppState {
    /// State backed by a loaded model.
    pub fn ready(handler: AssessRiskHandler, feature_set: FeatureSet) -> Self {
        let thresholds = Arc::new(handler.thresholds().clone());
        Self {
            model: ModelStatus::Ready(Arc::new(handler)),
            feature_set,
            thresholds,
        }
    }

    /// State used when the model artifacts failed to load.
    pub fn degraded(reason: impl Into<String>, feature_set: FeatureSet) -> Self {
        Self {
            model: ModelStatus::Degraded {
                reason: reason.into(),
            },
            feature_set,
            thresholds: Arc::new(RiskThresholdTable::standard()),
        }
    }

    /// Loads the configured artifacts, falling back to degraded mode when
    /// `allow_degraded` is set.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ArtifactError> {
        match ModelArtifacts::load(config) {
            Ok(artifacts) => {
                info!(
                    classifier = %config.classifier_path,
                    scaler = config.scaler_path().unwrap_or("none"),
                    feature_set = ?config.feature_set,
                    columns = artifacts.schema.len(),
                    "Model artifacts loaded"
                );
                Ok(Self::ready(
                    AssessRiskHandler::from_artifacts(artifacts),
                    config.feature_set,
                ))
            }
            Err(e) if config.allow_degraded => {
                warn!(
                    error = %e,
                    classifier = %config.classifier_path,
                    "Model artifacts failed to load; serving in degraded mode"
                );
                Ok(Self::degraded(e.to_string(), config.feature_set))
            }
            Err(e) => Err(e),
        }
    }

    /// Runs one submission through the model.
    pub fn assess(&self, fields: HashMap<String, String>) -> Result<RiskAssessment, AssessmentError> {
        match &self.model {
            ModelStatus::Ready(handler) => handler.handle(AssessRiskCommand::new(fields)),
            ModelStatus::Degraded { .. } => Err(AssessmentError::Inference(
                InferenceError::Unavailable(MODEL_NOT_LOADED.to_string()),
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Risk form
pub async fn index(State(state): State<AssessmentAppState>) -> Html<String> {
    Html(render::index_page(state.feature_set))
}

/// GET /api/risk-levels - Threshold table
pub async fn risk_levels(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(RiskLevelsResponse::from(state.thresholds.as_ref()))
}

/// GET /health - Model availability
pub async fn health(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    let (status, response) = match &state.model {
        ModelStatus::Ready(_) => (
            StatusCode::OK,
            HealthResponse {
                status: "ok".to_string(),
                model_loaded: true,
                feature_set: state.feature_set,
                reason: None,
            },
        ),
        ModelStatus::Degraded { reason } => (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthResponse {
                status: "degraded".to_string(),
                model_loaded: false,
                feature_set: state.feature_set,
                reason: Some(reason.clone()),
            },
        ),
    };

    (status, Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /predict - Assess risk, JSON response
pub async fn predict(
    State(state): State<AssessmentAppState>,
    form: Result<RiskForm, RiskFormRejection>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let RiskForm(fields) = form?;
    let assessment = state.assess(fields)?;
    Ok(Json(PredictResponse::from(assessment)))
}

/// POST /predict/report - Assess risk, HTML response
pub async fn predict_report(
    State(state): State<AssessmentAppState>,
    form: Result<RiskForm, RiskFormRejection>,
) -> Response {
    let result = form
        .map_err(AssessmentApiError::from)
        .and_then(|RiskForm(fields)| state.assess(fields).map_err(AssessmentApiError::from));

    match result {
        Ok(assessment) => Html(render::report_page(&assessment, Utc::now())).into_response(),
        Err(err) => {
            let (status, error) = err.status_and_body();
            (status, Html(render::error_page(&error.error))).into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts assessment failures to HTTP responses.
#[derive(Debug)]
pub enum AssessmentApiError {
    Assessment(AssessmentError),
    Body(RiskFormRejection),
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        Self::Assessment(err)
    }
}

impl From<RiskFormRejection> for AssessmentApiError {
    fn from(err: RiskFormRejection) -> Self {
        Self::Body(err)
    }
}

impl AssessmentApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::Assessment(err) => handle_assessment_error(err),
            Self::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(rejection.message.clone()),
            ),
        }
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        (status, Json(error)).into_response()
    }
}

/// Maps an assessment failure to its status code and error body.
pub fn handle_assessment_error(err: &AssessmentError) -> (StatusCode, ErrorResponse) {
    match err {
        AssessmentError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(e.code(), e.to_string()).with_field(e.field()),
        ),
        AssessmentError::Inference(InferenceError::Unavailable(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(ErrorCode::ModelUnavailable, MODEL_NOT_LOADED),
        ),
        AssessmentError::Inference(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(ErrorCode::InferenceFailed, err.to_string()),
        ),
    }
}
