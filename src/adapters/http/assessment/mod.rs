//! HTTP adapter for stroke risk assessment.
//!
//! Exposes the assessment pipeline:
//! - `GET /` - Risk form
//! - `POST /predict` - Assess risk, JSON response
//! - `POST /predict/report` - Assess risk, HTML report
//! - `GET /api/risk-levels` - Threshold table
//! - `GET /health` - Model availability

pub mod dto;
pub mod extract;
pub mod handlers;
mod render;
pub mod routes;

pub use dto::*;
pub use extract::{RiskForm, RiskFormRejection};
pub use handlers::{handle_assessment_error, AssessmentApiError, AssessmentAppState, ModelStatus};
pub use routes::assessment_router;
