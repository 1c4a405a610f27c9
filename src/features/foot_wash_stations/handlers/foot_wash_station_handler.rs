use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::foot_wash_stations::dtos::{
    FootWashStationDetailDto, FootWashStationFilters, FootWashStationListItemDto,
    FootWashStationProperties, FootWashStationQuery,
};
use crate::features::foot_wash_stations::services::FootWashStationService;
use crate::shared::geojson::{collect_features, FeatureCollection};
use crate::shared::types::ListResponse;

/// List active foot-wash stations
#[utoipa::path(
    get,
    path = "/api/footwashstations/",
    params(FootWashStationQuery),
    responses(
        (status = 200, description = "Stations ordered by region, road and name", body = ListResponse<FootWashStationListItemDto>)
    ),
    tag = "footwashstations"
)]
pub async fn list_foot_wash_stations(
    State(service): State<Arc<FootWashStationService>>,
    Query(query): Query<FootWashStationQuery>,
) -> Result<Json<ListResponse<FootWashStationListItemDto>>> {
    let stations = service
        .list(&FootWashStationFilters::from(&query))
        .await?;
    let items: Vec<FootWashStationListItemDto> = stations.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/footwashstations/{id}/",
    params(
        ("id" = Uuid, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Station details", body = FootWashStationDetailDto),
        (status = 404, description = "Station not found")
    ),
    tag = "footwashstations"
)]
pub async fn get_foot_wash_station(
    State(service): State<Arc<FootWashStationService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<FootWashStationDetailDto>> {
    let station = service.get(id).await?;
    Ok(Json(station.into()))
}

/// Stations as GeoJSON points
#[utoipa::path(
    get,
    path = "/api/footwashstations/geojson/",
    params(FootWashStationQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection")
    ),
    tag = "footwashstations"
)]
pub async fn foot_wash_stations_geojson(
    State(service): State<Arc<FootWashStationService>>,
    Query(query): Query<FootWashStationQuery>,
) -> Result<Json<FeatureCollection<FootWashStationProperties>>> {
    let stations = service
        .list(&FootWashStationFilters::from(&query))
        .await?;
    Ok(Json(collect_features(&stations)))
}
