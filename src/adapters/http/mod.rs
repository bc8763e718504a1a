//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! this module composes them with the cross-cutting tower layers.

pub mod assessment;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use assessment::assessment_router;
pub use assessment::AssessmentAppState;

/// Builds the full application router.
///
/// Layers, outermost first: request id, tracing, request id propagation,
/// timeout, CORS, gzip compression.
pub fn app_router(state: AssessmentAppState, server: &ServerConfig) -> Router {
    assessment_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(cors_layer(&server.cors_origins_list()))
            .layer(CompressionLayer::new()),
    )
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::domain::assessment::FeatureSet;

    fn degraded_app(cors_origins: Option<&str>) -> Router {
        let server = ServerConfig {
            cors_origins: cors_origins.map(String::from),
            ..Default::default()
        };
        app_router(
            AssessmentAppState::degraded("not loaded", FeatureSet::Basic),
            &server,
        )
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = degraded_app(None)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = degraded_app(None)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn permissive_cors_without_configured_origins() {
        let response = degraded_app(None)
            .oneshot(
                Request::builder()
                    .uri("/api/risk-levels")
                    .header(header::ORIGIN, "https://example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn configured_origins_restrict_cors() {
        let app = degraded_app(Some("https://clinic.example"));

        let allowed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/risk-levels")
                    .header(header::ORIGIN, "https://clinic.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://clinic.example"
        );

        let denied = app
            .oneshot(
                Request::builder()
                    .uri("/api/risk-levels")
                    .header(header::ORIGIN, "https://other.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(!denied
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
