use crate::core::error::AppError;
use crate::features::auth::model::StaffCredentials;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Extract the decoded "username:password" pair from a Basic authorization header
pub fn basic_credentials(headers: &HeaderMap) -> Option<String> {
    let encoded = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    String::from_utf8(decoded).ok()
}

fn basic_challenge(realm: &str) -> Response {
    let mut response = (StatusCode::UNAUTHORIZED, Body::from("Unauthorized")).into_response();
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm)) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, value);
    }
    response
}

/// Basic auth gate for the Swagger UI
pub async fn swagger_auth_middleware(
    State(valid_credentials): State<Arc<String>>,
    req: Request,
    next: Next,
) -> Response {
    match basic_credentials(req.headers()) {
        Some(creds) if creds == *valid_credentials => next.run(req).await,
        _ => basic_challenge("Swagger UI"),
    }
}

/// Authenticate staff for the administrative API.
///
/// On success the [`StaffUser`](crate::features::auth::model::StaffUser) is inserted
/// into the request extensions so handlers can pick it up through the
/// `RequireStaff` guard.
pub async fn staff_auth_middleware(
    State(credentials): State<Arc<StaffCredentials>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let supplied = basic_credentials(req.headers())
        .ok_or_else(|| AppError::Unauthorized("Missing staff credentials".to_string()))?;

    let user = credentials
        .authenticate(&supplied)
        .ok_or_else(|| AppError::Unauthorized("Invalid staff credentials".to_string()))?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
