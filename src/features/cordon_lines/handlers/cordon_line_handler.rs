use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::cordon_lines::dtos::{
    CordonLineDetailDto, CordonLineFilters, CordonLineListItemDto, CordonLineProperties,
    CordonLineQuery,
};
use crate::features::cordon_lines::services::CordonLineService;
use crate::shared::geojson::{collect_features, FeatureCollection};
use crate::shared::types::ListResponse;

/// List active cordon lines
#[utoipa::path(
    get,
    path = "/api/cordonlines/",
    params(CordonLineQuery),
    responses(
        (status = 200, description = "Cordon lines, most recently established first", body = ListResponse<CordonLineListItemDto>)
    ),
    tag = "cordonlines"
)]
pub async fn list_cordon_lines(
    State(service): State<Arc<CordonLineService>>,
    Query(query): Query<CordonLineQuery>,
) -> Result<Json<ListResponse<CordonLineListItemDto>>> {
    let lines = service.list(&CordonLineFilters::from(&query)).await?;
    let items: Vec<CordonLineListItemDto> = lines.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

/// Get a single cordon line with its restrictions and vertices
#[utoipa::path(
    get,
    path = "/api/cordonlines/{id}/",
    params(
        ("id" = Uuid, Path, description = "Cordon line ID")
    ),
    responses(
        (status = 200, description = "Cordon line details", body = CordonLineDetailDto),
        (status = 404, description = "Cordon line not found")
    ),
    tag = "cordonlines"
)]
pub async fn get_cordon_line(
    State(service): State<Arc<CordonLineService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CordonLineDetailDto>> {
    let line = service.get(id).await?;
    Ok(Json(line.into()))
}

#[utoipa::path(
    get,
    path = "/api/cordonlines/geojson/",
    params(CordonLineQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection of LineString features, vertices in stored order")
    ),
    tag = "cordonlines"
)]
pub async fn cordon_lines_geojson(
    State(service): State<Arc<CordonLineService>>,
    Query(query): Query<CordonLineQuery>,
) -> Result<Json<FeatureCollection<CordonLineProperties>>> {
    let lines = service.list(&CordonLineFilters::from(&query)).await?;
    Ok(Json(collect_features(&lines)))
}
