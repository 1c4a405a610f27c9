use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::foot_wash_stations::handlers;
use crate::features::foot_wash_stations::services::FootWashStationService;

pub fn routes(service: Arc<FootWashStationService>) -> Router {
    Router::new()
        .route(
            "/api/footwashstations/",
            get(handlers::list_foot_wash_stations),
        )
        .route(
            "/api/footwashstations/geojson/",
            get(handlers::foot_wash_stations_geojson),
        )
        .route(
            "/api/footwashstations/{id}/",
            get(handlers::get_foot_wash_station),
        )
        .with_state(service)
}

/// Staff routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<FootWashStationService>) -> Router {
    Router::new()
        .route(
            "/footwashstations",
            get(handlers::admin_list_foot_wash_stations)
                .post(handlers::admin_create_foot_wash_station),
        )
        .route(
            "/footwashstations/actions",
            get(handlers::admin_foot_wash_station_actions),
        )
        .route(
            "/footwashstations/actions/{action}",
            post(handlers::admin_apply_foot_wash_station_action),
        )
        .route(
            "/footwashstations/{id}",
            get(handlers::admin_get_foot_wash_station)
                .put(handlers::admin_update_foot_wash_station)
                .delete(handlers::admin_delete_foot_wash_station),
        )
        .with_state(service)
}
