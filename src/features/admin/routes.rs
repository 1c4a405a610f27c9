use std::sync::Arc;

use axum::Router;

use crate::features::cordon_lines::{routes as cordon_lines_routes, CordonLineService};
use crate::features::dip_tanks::{routes as dip_tanks_routes, DipTankService};
use crate::features::foot_wash_stations::{
    routes as foot_wash_stations_routes, FootWashStationService,
};
use crate::features::outbreaks::{routes as outbreaks_routes, OutbreakService};
use crate::features::updates::{routes as updates_routes, UpdateService};

/// Services backing the administrative API
#[derive(Clone)]
pub struct AdminServices {
    pub outbreaks: Arc<OutbreakService>,
    pub dip_tanks: Arc<DipTankService>,
    pub cordon_lines: Arc<CordonLineService>,
    pub foot_wash_stations: Arc<FootWashStationService>,
    pub updates: Arc<UpdateService>,
}

/// Create admin routes (every handler requires staff authentication).
///
/// Paths are relative; the caller nests this router under `/api/admin`
/// and layers the staff authentication middleware on top.
pub fn routes(services: AdminServices) -> Router {
    Router::new()
        .merge(outbreaks_routes::admin_routes(services.outbreaks))
        .merge(dip_tanks_routes::admin_routes(services.dip_tanks))
        .merge(cordon_lines_routes::admin_routes(services.cordon_lines))
        .merge(foot_wash_stations_routes::admin_routes(
            services.foot_wash_stations,
        ))
        .merge(updates_routes::admin_routes(services.updates))
}
