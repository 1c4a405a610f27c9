mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::admin::{routes as admin_routes, AdminServices};
use crate::features::auth::StaffCredentials;
use crate::features::cordon_lines::{routes as cordon_lines_routes, CordonLineService};
use crate::features::dip_tanks::{routes as dip_tanks_routes, DipTankService};
use crate::features::foot_wash_stations::{
    routes as foot_wash_stations_routes, FootWashStationService,
};
use crate::features::outbreaks::{routes as outbreaks_routes, OutbreakService};
use crate::features::pages::{routes as pages_routes, PageService};
use crate::features::updates::{routes as updates_routes, UpdateService};
use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    if config.app.seed_sample_data {
        database::seed_sample_data(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Seeding sample data failed: {}", e))?;
        tracing::info!("Sample data loaded");
    }

    let outbreak_service = Arc::new(OutbreakService::new(pool.clone()));
    let dip_tank_service = Arc::new(DipTankService::new(pool.clone()));
    let cordon_line_service = Arc::new(CordonLineService::new(pool.clone()));
    let foot_wash_station_service = Arc::new(FootWashStationService::new(pool.clone()));
    let update_service = Arc::new(UpdateService::new(pool.clone()));
    let page_service = Arc::new(PageService::new(
        Arc::clone(&outbreak_service),
        Arc::clone(&update_service),
        Arc::clone(&cordon_line_service),
    ));
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::swagger_auth_middleware,
            ))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Staff routes are mounted only when a full credential pair is configured
    let admin = match config
        .admin
        .credentials()
        .as_deref()
        .and_then(StaffCredentials::from_pair)
    {
        Some(credentials) => {
            tracing::info!("Admin API enabled at /api/admin");
            let services = AdminServices {
                outbreaks: Arc::clone(&outbreak_service),
                dip_tanks: Arc::clone(&dip_tank_service),
                cordon_lines: Arc::clone(&cordon_line_service),
                foot_wash_stations: Arc::clone(&foot_wash_station_service),
                updates: Arc::clone(&update_service),
            };
            Router::new().nest(
                "/api/admin",
                admin_routes::routes(services).route_layer(from_fn_with_state(
                    Arc::new(credentials),
                    middleware::staff_auth_middleware,
                )),
            )
        }
        None => {
            tracing::warn!("Admin API disabled (ADMIN_USERNAME/ADMIN_PASSWORD not set)");
            Router::new()
        }
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let public_routes = Router::new()
        .merge(outbreaks_routes::routes(outbreak_service))
        .merge(dip_tanks_routes::routes(dip_tank_service))
        .merge(cordon_lines_routes::routes(cordon_line_service))
        .merge(foot_wash_stations_routes::routes(foot_wash_station_service))
        .merge(updates_routes::routes(update_service))
        .merge(pages_routes::routes(page_service));

    let app = Router::new()
        .merge(swagger)
        .merge(admin)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
