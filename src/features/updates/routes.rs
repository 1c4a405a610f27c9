use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::updates::handlers;
use crate::features::updates::services::UpdateService;

pub fn routes(service: Arc<UpdateService>) -> Router {
    Router::new()
        .route("/api/updates/", get(handlers::list_updates))
        .route("/api/updates/{id}/", get(handlers::get_update))
        .with_state(service)
}

/// Staff routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<UpdateService>) -> Router {
    Router::new()
        .route(
            "/updates",
            get(handlers::admin_list_updates).post(handlers::admin_create_update),
        )
        .route("/updates/actions", get(handlers::admin_update_actions))
        .route(
            "/updates/actions/{action}",
            post(handlers::admin_apply_update_action),
        )
        .route(
            "/updates/{id}",
            get(handlers::admin_get_update)
                .put(handlers::admin_replace_update)
                .delete(handlers::admin_delete_update),
        )
        .with_state(service)
}
