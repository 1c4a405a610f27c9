use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::cordon_lines::handlers;
use crate::features::cordon_lines::services::CordonLineService;

pub fn routes(service: Arc<CordonLineService>) -> Router {
    Router::new()
        .route("/api/cordonlines/", get(handlers::list_cordon_lines))
        .route("/api/cordonlines/geojson/", get(handlers::cordon_lines_geojson))
        .route("/api/cordonlines/{id}/", get(handlers::get_cordon_line))
        .with_state(service)
}

/// Staff routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<CordonLineService>) -> Router {
    Router::new()
        .route(
            "/cordonlines",
            get(handlers::admin_list_cordon_lines).post(handlers::admin_create_cordon_line),
        )
        .route("/cordonlines/actions", get(handlers::admin_cordon_line_actions))
        .route(
            "/cordonlines/actions/{action}",
            post(handlers::admin_apply_cordon_line_action),
        )
        .route(
            "/cordonlines/{id}",
            get(handlers::admin_get_cordon_line)
                .put(handlers::admin_update_cordon_line)
                .delete(handlers::admin_delete_cordon_line),
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

    fn admin_server() -> TestServer {
        let service = Arc::new(CordonLineService::new(lazy_pool()));
        let router = with_staff_auth(Router::new().nest("/api/admin", admin_routes(service)));
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_status_yields_empty_collection() {
        let service = Arc::new(CordonLineService::new(lazy_pool()));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/cordonlines/geojson/?status=permanent").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "type": "FeatureCollection", "features": [] }));

        let response = server.get("/api/cordonlines/?region=nowhere").await;
        response.assert_json(&json!({ "count": 0, "results": [] }));
    }

    #[tokio::test]
    async fn test_detail_with_malformed_id_is_not_found() {
        let service = Arc::new(CordonLineService::new(lazy_pool()));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/cordonlines/northern-line/").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_admin_rejects_single_point_line() {
        let response = admin_server()
            .post("/api/admin/cordonlines")
            .json(&json!({
                "name": "Lubombo Emergency Cordon",
                "region": "lubombo",
                "status": "temporary",
                "coordinates": [{"lat": -26.45, "lng": 32.05}]
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_admin_rejects_out_of_range_vertex() {
        let response = admin_server()
            .post("/api/admin/cordonlines")
            .json(&json!({
                "name": "Lubombo Emergency Cordon",
                "region": "lubombo",
                "coordinates": [{"lat": -26.45, "lng": 32.05}, {"lat": -26.46, "lng": 200.0}]
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_rejects_unknown_action() {
        let response = admin_server()
            .post("/api/admin/cordonlines/actions/extend")
            .json(&json!({ "ids": [uuid::Uuid::now_v7()] }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
