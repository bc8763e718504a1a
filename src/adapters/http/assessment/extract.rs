//! Extractor accepting the risk form as URL-encoded or JSON fields.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::{Map, Value};

use super::dto::ErrorResponse;

/// Submitted fields as an unordered name → value map.
///
/// JSON bodies (`application/json` or any `+json` type) must be a flat
/// object; anything else is parsed as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default)]
pub struct RiskForm(pub HashMap<String, String>);

/// Rejection for bodies that cannot be read as a field map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFormRejection {
    pub message: String,
}

impl IntoResponse for RiskFormRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(self.message)),
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequest<S> for RiskForm
where
    S: Send + Sync,
{
    type Rejection = RiskFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(body) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| RiskFormRejection {
                    message: format!("Invalid JSON body: {}", e.body_text()),
                })?;
            Ok(RiskForm(flatten_json(body)))
        } else {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| RiskFormRejection {
                    message: format!("Invalid form body: {}", e.body_text()),
                })?;
            Ok(RiskForm(fields))
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(is_json_media_type)
        .unwrap_or(false)
}

/// Media types are case-insensitive and may carry parameters.
fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Converts JSON scalars to the strings a form would have carried.
///
/// `null` is treated as absent so it reports as a missing field.
fn flatten_json(body: Map<String, Value>) -> HashMap<String, String> {
    body.into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some((key, value))
        })
        .collect()
}
