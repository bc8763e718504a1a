//! Route configuration for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, index, predict, predict_report, risk_levels, AssessmentAppState};

/// Creates the assessment router.
///
/// Routes:
/// - `GET /` - Risk form
/// - `POST /predict` - Assess risk (form or JSON body), JSON response
/// - `POST /predict/report` - Assess risk, HTML report
/// - `GET /api/risk-levels` - Threshold table
/// - `GET /health` - Model availability
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/predict/report", post(predict_report))
        .route("/api/risk-levels", get(risk_levels))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::handlers::assessment::AssessRiskHandler;
    use crate::domain::assessment::{AdviceCatalog, FeatureSet, RiskThresholdTable};
    use crate::ports::{InferenceError, RiskClassifier};

    // ───────────────────────────────────────────────────────────────
    // Mock classifier
    // ───────────────────────────────────────────────────────────────

    struct FixedClassifier {
        names: Vec<String>,
        probability: f64,
    }

    impl RiskClassifier for FixedClassifier {
        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict_probability(&self, features: &[f64]) -> Result<f64, InferenceError> {
            InferenceError::check_dimension(self.names.len(), features.len())?;
            Ok(self.probability)
        }
    }

    fn ready_state(probability: f64) -> AssessmentAppState {
        let schema = FeatureSet::Basic.schema();
        let classifier = FixedClassifier {
            names: schema.names().into_iter().map(String::from).collect(),
            probability,
        };
        let handler = AssessRiskHandler::new(
            schema,
            None,
            Arc::new(classifier),
            RiskThresholdTable::standard(),
            AdviceCatalog::standard(),
        );
        AssessmentAppState::ready(handler, FeatureSet::Basic)
    }

    const FORM: &str = "name=Ada&age=67&sex=female&bmi=27.4&smoking=yes&diabetes=no\
                        &hypertension=yes&atrial_fibrillation=no&previous_stroke=no\
                        &family_history=yes";

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn predict_accepts_form_body() {
        let app = assessment_router().with_state(ready_state(0.234));

        let response = app.oneshot(form_request("/predict", FORM)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["stroke_percentage"], 23.4);
        assert_eq!(json["risk_category"], "🟠 Elevated Risk");
        assert!(json["reasons"].as_array().unwrap().len() >= 4);
        assert!(!json["recommended_foods"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn predict_accepts_json_body() {
        let app = assessment_router().with_state(ready_state(0.05));
        let body = json!({
            "age": 45, "sex": "male", "bmi": 22.0, "smoking": "no", "diabetes": "no",
            "hypertension": "no", "atrial_fibrillation": "no", "previous_stroke": "no",
            "family_history": "no"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["stroke_percentage"], 5.0);
        assert_eq!(json["risk_category"], "🟢 Very Low Risk");
        assert!(json["name"].is_null());
        assert!(json["reasons"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn predict_missing_field_is_bad_request() {
        let app = assessment_router().with_state(ready_state(0.1));

        let response = app
            .oneshot(form_request("/predict", "age=50&sex=male"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MISSING_FIELD");
        assert_eq!(json["field"], "bmi");
        assert!(json["error"].as_str().unwrap().contains("bmi"));
    }

    #[tokio::test]
    async fn predict_malformed_json_is_bad_request() {
        let app = assessment_router().with_state(ready_state(0.1));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn predict_in_degraded_mode_is_internal_error() {
        let state = AssessmentAppState::degraded("classifier.json not found", FeatureSet::Basic);
        let app = assessment_router().with_state(state);

        let response = app.oneshot(form_request("/predict", FORM)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Model not loaded");
    }

    #[tokio::test]
    async fn report_renders_html() {
        let app = assessment_router().with_state(ready_state(0.42));

        let response = app
            .oneshot(form_request("/predict/report", FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.contains("Results for Ada"));
        assert!(html.contains("42.00%"));
        assert!(html.contains("🔴 Critical Risk"));
    }

    #[tokio::test]
    async fn report_errors_render_html_with_status() {
        let app = assessment_router().with_state(ready_state(0.1));

        let response = app
            .oneshot(form_request("/predict/report", "age=old"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("We could not estimate your risk"));
    }

    #[tokio::test]
    async fn index_serves_form() {
        let app = assessment_router().with_state(ready_state(0.1));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<form"));
    }

    #[tokio::test]
    async fn risk_levels_lists_tiers() {
        let app = assessment_router().with_state(ready_state(0.1));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/risk-levels")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["levels"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn health_reports_model_state() {
        let ready = assessment_router()
            .with_state(ready_state(0.1))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ready.status(), StatusCode::OK);
        assert_eq!(body_json(ready).await["status"], "ok");

        let degraded = assessment_router()
            .with_state(AssessmentAppState::degraded("boom", FeatureSet::Engineered))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(degraded.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(degraded).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["model_loaded"], false);
        assert_eq!(json["feature_set"], "engineered");
        assert_eq!(json["reason"], "boom");
    }
}
