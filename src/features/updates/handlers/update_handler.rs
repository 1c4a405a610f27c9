use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::updates::dtos::{
    UpdateDetailDto, UpdateFilters, UpdateListItemDto, UpdateQuery,
};
use crate::features::updates::services::UpdateService;
use crate::shared::types::ListResponse;

/// List published updates, newest first
#[utoipa::path(
    get,
    path = "/api/updates/",
    params(UpdateQuery),
    responses(
        (status = 200, description = "Published updates with content previews", body = ListResponse<UpdateListItemDto>)
    ),
    tag = "updates"
)]
pub async fn list_updates(
    State(service): State<Arc<UpdateService>>,
    Query(query): Query<UpdateQuery>,
) -> Result<Json<ListResponse<UpdateListItemDto>>> {
    let updates = service.list(&UpdateFilters::from(&query), None).await?;
    let items: Vec<UpdateListItemDto> = updates.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/updates/{id}/",
    params(
        ("id" = Uuid, Path, description = "Update ID")
    ),
    responses(
        (status = 200, description = "Full update", body = UpdateDetailDto),
        (status = 404, description = "Update not found or unpublished")
    ),
    tag = "updates"
)]
pub async fn get_update(
    State(service): State<Arc<UpdateService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<UpdateDetailDto>> {
    let update = service.get(id).await?;
    Ok(Json(update.into()))
}
