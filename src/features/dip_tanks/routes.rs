use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::dip_tanks::handlers;
use crate::features::dip_tanks::services::DipTankService;

pub fn routes(service: Arc<DipTankService>) -> Router {
    Router::new()
        .route("/api/diptanks/", get(handlers::list_dip_tanks))
        .route("/api/diptanks/geojson/", get(handlers::dip_tanks_geojson))
        .route("/api/diptanks/{id}/", get(handlers::get_dip_tank))
        .with_state(service)
}

/// Staff routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<DipTankService>) -> Router {
    Router::new()
        .route(
            "/diptanks",
            get(handlers::admin_list_dip_tanks).post(handlers::admin_create_dip_tank),
        )
        .route("/diptanks/actions", get(handlers::admin_dip_tank_actions))
        .route(
            "/diptanks/actions/{action}",
            post(handlers::admin_apply_dip_tank_action),
        )
        .route(
            "/diptanks/{id}",
            get(handlers::admin_get_dip_tank)
                .put(handlers::admin_update_dip_tank)
                .delete(handlers::admin_delete_dip_tank),
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

    #[tokio::test]
    async fn test_unknown_region_matches_nothing() {
        let service = Arc::new(DipTankService::new(lazy_pool()));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/diptanks/?region=atlantis&affected=true").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "count": 0, "results": [] }));
    }

    #[tokio::test]
    async fn test_detail_with_malformed_id_is_not_found() {
        let service = Arc::new(DipTankService::new(lazy_pool()));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/diptanks/tank-7/").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_admin_detail_with_malformed_id_is_not_found() {
        let service = Arc::new(DipTankService::new(lazy_pool()));
        let router = with_staff_auth(Router::new().nest("/api/admin", admin_routes(service)));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/admin/diptanks/tank-7").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_rejects_invalid_coordinates() {
        let service = Arc::new(DipTankService::new(lazy_pool()));
        let router = with_staff_auth(Router::new().nest("/api/admin", admin_routes(service)));
        let server = TestServer::new(router).unwrap();

        let response = server
            .post("/api/admin/diptanks")
            .json(&json!({
                "name": "Hhohho Central Dip Tank",
                "region": "hhohho",
                "latitude": -26.3,
                "longitude": 181.0
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_actions_listed() {
        let service = Arc::new(DipTankService::new(lazy_pool()));
        let router = with_staff_auth(Router::new().nest("/api/admin", admin_routes(service)));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/admin/diptanks/actions").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        let codes: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["action"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["mark_affected", "mark_clear", "mark_active"]);
    }
}
