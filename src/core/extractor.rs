use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor for detail routes.
///
/// A segment that does not parse (e.g. a malformed UUID) cannot name any
/// record, so it is reported as `NotFound` in the usual error envelope.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Unmatched path parameter: {}", rejection.body_text());
                Err(AppError::NotFound("Resource not found".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use uuid::Uuid;

    async fn echo(AppPath(id): AppPath<Uuid>) -> String {
        id.to_string()
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items/{id}", get(echo))).unwrap()
    }

    #[tokio::test]
    async fn test_app_path_passes_valid_uuid() {
        let id = Uuid::now_v7();
        let response = server().get(&format!("/items/{}", id)).await;
        response.assert_status_ok();
        response.assert_text(id.to_string());
    }

    #[tokio::test]
    async fn test_app_path_maps_unparseable_segment_to_not_found() {
        let response = server().get("/items/not-a-uuid").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], serde_json::Value::Null);
    }
}
