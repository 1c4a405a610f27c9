use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::outbreaks::dtos::{
    OutbreakDetailDto, OutbreakFilters, OutbreakListItemDto, OutbreakProperties, OutbreakQuery,
    OutbreakStatisticsDto,
};
use crate::features::outbreaks::services::OutbreakService;
use crate::shared::geojson::{collect_features, FeatureCollection};
use crate::shared::types::ListResponse;

/// List verified, active outbreaks
#[utoipa::path(
    get,
    path = "/api/outbreaks/",
    params(OutbreakQuery),
    responses(
        (status = 200, description = "Outbreaks, most recently reported first", body = ListResponse<OutbreakListItemDto>)
    ),
    tag = "outbreaks"
)]
pub async fn list_outbreaks(
    State(service): State<Arc<OutbreakService>>,
    Query(query): Query<OutbreakQuery>,
) -> Result<Json<ListResponse<OutbreakListItemDto>>> {
    let outbreaks = service.list(&OutbreakFilters::from(&query)).await?;
    let items: Vec<OutbreakListItemDto> = outbreaks.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

/// Get a single outbreak
#[utoipa::path(
    get,
    path = "/api/outbreaks/{id}/",
    params(
        ("id" = Uuid, Path, description = "Outbreak ID")
    ),
    responses(
        (status = 200, description = "Outbreak details", body = OutbreakDetailDto),
        (status = 404, description = "Outbreak not found or not public")
    ),
    tag = "outbreaks"
)]
pub async fn get_outbreak(
    State(service): State<Arc<OutbreakService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<OutbreakDetailDto>> {
    let outbreak = service.get(id).await?;
    Ok(Json(outbreak.into()))
}

/// Outbreaks as a GeoJSON FeatureCollection of points
#[utoipa::path(
    get,
    path = "/api/outbreaks/geojson/",
    params(OutbreakQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection; Point geometry, [longitude, latitude]")
    ),
    tag = "outbreaks"
)]
pub async fn outbreaks_geojson(
    State(service): State<Arc<OutbreakService>>,
    Query(query): Query<OutbreakQuery>,
) -> Result<Json<FeatureCollection<OutbreakProperties>>> {
    let outbreaks = service.list(&OutbreakFilters::from(&query)).await?;
    Ok(Json(collect_features(&outbreaks)))
}

/// Summary statistics over the filtered outbreak set
#[utoipa::path(
    get,
    path = "/api/outbreaks/statistics/",
    params(OutbreakQuery),
    responses(
        (status = 200, description = "Outbreak statistics", body = OutbreakStatisticsDto)
    ),
    tag = "outbreaks"
)]
pub async fn outbreak_statistics(
    State(service): State<Arc<OutbreakService>>,
    Query(query): Query<OutbreakQuery>,
) -> Result<Json<OutbreakStatisticsDto>> {
    let statistics = service.statistics(&OutbreakFilters::from(&query)).await?;
    Ok(Json(statistics))
}
