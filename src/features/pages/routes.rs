use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pages::handlers;
use crate::features::pages::services::PageService;

pub fn routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/about/", get(handlers::about_page))
        .route("/updates/", get(handlers::updates_page))
        .route("/control-measures/", get(handlers::control_measures_page))
        .route("/contact/", get(handlers::contact_page))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cordon_lines::CordonLineService;
    use crate::features::outbreaks::OutbreakService;
    use crate::features::updates::UpdateService;
    use crate::shared::test_helpers::lazy_pool;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let pool = lazy_pool();
        let service = Arc::new(PageService::new(
            Arc::new(OutbreakService::new(pool.clone())),
            Arc::new(UpdateService::new(pool.clone())),
            Arc::new(CordonLineService::new(pool)),
        ));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_about_page() {
        let response = server().get("/about/").await;
        response.assert_status_ok();
        assert!(response.text().contains("About Foot-and-Mouth Disease"));
        assert!(response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_contact_page() {
        let response = server().get("/contact/").await;
        response.assert_status_ok();
        assert!(response.text().contains("<html"));
    }
}
