use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::dip_tanks::dtos::{
    DipTankDetailDto, DipTankFilters, DipTankListItemDto, DipTankProperties, DipTankQuery,
};
use crate::features::dip_tanks::services::DipTankService;
use crate::shared::geojson::{collect_features, FeatureCollection};
use crate::shared::types::ListResponse;

/// List active dip tanks
#[utoipa::path(
    get,
    path = "/api/diptanks/",
    params(DipTankQuery),
    responses(
        (status = 200, description = "Dip tanks ordered by region and name", body = ListResponse<DipTankListItemDto>)
    ),
    tag = "diptanks"
)]
pub async fn list_dip_tanks(
    State(service): State<Arc<DipTankService>>,
    Query(query): Query<DipTankQuery>,
) -> Result<Json<ListResponse<DipTankListItemDto>>> {
    let tanks = service.list(&DipTankFilters::from(&query)).await?;
    let items: Vec<DipTankListItemDto> = tanks.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

/// Get a single dip tank
#[utoipa::path(
    get,
    path = "/api/diptanks/{id}/",
    params(
        ("id" = Uuid, Path, description = "Dip tank ID")
    ),
    responses(
        (status = 200, description = "Dip tank details", body = DipTankDetailDto),
        (status = 404, description = "Dip tank not found")
    ),
    tag = "diptanks"
)]
pub async fn get_dip_tank(
    State(service): State<Arc<DipTankService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<DipTankDetailDto>> {
    let tank = service.get(id).await?;
    Ok(Json(tank.into()))
}

/// Dip tanks as GeoJSON points carrying a fixed 5 km radius
#[utoipa::path(
    get,
    path = "/api/diptanks/geojson/",
    params(DipTankQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection; properties.radius is always 5000 meters")
    ),
    tag = "diptanks"
)]
pub async fn dip_tanks_geojson(
    State(service): State<Arc<DipTankService>>,
    Query(query): Query<DipTankQuery>,
) -> Result<Json<FeatureCollection<DipTankProperties>>> {
    let tanks = service.list(&DipTankFilters::from(&query)).await?;
    Ok(Json(collect_features(&tanks)))
}
