use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::outbreaks::handlers;
use crate::features::outbreaks::services::OutbreakService;

/// Public read-only outbreak routes
pub fn routes(service: Arc<OutbreakService>) -> Router {
    Router::new()
        .route("/api/outbreaks/", get(handlers::list_outbreaks))
        .route("/api/outbreaks/geojson/", get(handlers::outbreaks_geojson))
        .route(
            "/api/outbreaks/statistics/",
            get(handlers::outbreak_statistics),
        )
        .route("/api/outbreaks/{id}/", get(handlers::get_outbreak))
        .with_state(service)
}

/// Staff routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<OutbreakService>) -> Router {
    Router::new()
        .route(
            "/outbreaks",
            get(handlers::admin_list_outbreaks).post(handlers::admin_create_outbreak),
        )
        .route("/outbreaks/actions", get(handlers::admin_outbreak_actions))
        .route(
            "/outbreaks/actions/{action}",
            post(handlers::admin_apply_outbreak_action),
        )
        .route(
            "/outbreaks/{id}",
            get(handlers::admin_get_outbreak)
                .put(handlers::admin_update_outbreak)
                .delete(handlers::admin_delete_outbreak),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_staff_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn public_server() -> TestServer {
        let service = Arc::new(OutbreakService::new(lazy_pool()));
        TestServer::new(routes(service)).unwrap()
    }

    fn admin_server(authenticated: bool) -> TestServer {
        let service = Arc::new(OutbreakService::new(lazy_pool()));
        let router = Router::new().nest("/api/admin", admin_routes(service));
        let router = if authenticated {
            with_staff_auth(router)
        } else {
            router
        };
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_enum_filter_returns_empty_list() {
        let server = public_server();

        let response = server.get("/api/outbreaks/?status=contained").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "count": 0, "results": [] }));
    }

    #[tokio::test]
    async fn test_unknown_region_returns_empty_collection() {
        let server = public_server();

        let response = server.get("/api/outbreaks/geojson/?region=gauteng").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "type": "FeatureCollection", "features": [] }));
    }

    #[tokio::test]
    async fn test_statistics_for_unmatched_filter_are_zero() {
        let server = public_server();

        let response = server.get("/api/outbreaks/statistics/?status=unknown").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["total_outbreaks"], 0);
        assert_eq!(body["total_animals_affected"], 0);
        assert_eq!(body["by_status"], json!([]));
    }

    #[tokio::test]
    async fn test_detail_with_malformed_id_is_not_found() {
        let server = public_server();

        let response = server.get("/api/outbreaks/not-a-uuid/").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_admin_requires_staff() {
        let server = admin_server(false);

        let response = server.get("/api/admin/outbreaks").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_lists_actions() {
        let server = admin_server(true);

        let response = server.get("/api/admin/outbreaks/actions").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"][0]["action"], "mark_verified");
        assert_eq!(body["data"][1]["action"], "mark_cleared");
    }

    #[tokio::test]
    async fn test_admin_unknown_action_is_not_found() {
        let server = admin_server(true);

        let response = server
            .post("/api/admin/outbreaks/actions/delete_everything")
            .json(&json!({ "ids": [uuid::Uuid::now_v7()] }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_action_requires_selection() {
        let server = admin_server(true);

        let response = server
            .post("/api/admin/outbreaks/actions/mark_verified")
            .json(&json!({ "ids": [] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_admin_create_validates_before_writing() {
        let server = admin_server(true);

        let response = server
            .post("/api/admin/outbreaks")
            .json(&json!({
                "title": "",
                "description": "Confirmed FMD in cattle",
                "region": "manzini",
                "latitude": -126.0,
                "longitude": 31.3667,
                "location_name": "Manzini Central Farm"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_create_rejects_unknown_region() {
        let server = admin_server(true);

        let response = server
            .post("/api/admin/outbreaks")
            .json(&json!({
                "title": "Outbreak",
                "description": "Confirmed FMD in cattle",
                "region": "gauteng",
                "latitude": -26.0,
                "longitude": 31.3667,
                "location_name": "Farm"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
