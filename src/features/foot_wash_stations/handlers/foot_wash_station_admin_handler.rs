use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::admin::dtos::{AdminActionDto, BulkActionDto, BulkActionResultDto};
use crate::features::auth::guards::RequireStaff;
use crate::features::foot_wash_stations::dtos::{
    FootWashStationAction, FootWashStationAdminDto, FootWashStationAdminQuery, FootWashStationInputDto,
};
use crate::features::foot_wash_stations::services::FootWashStationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all foot-wash stations
#[utoipa::path(
    get,
    path = "/api/admin/footwashstations",
    params(FootWashStationAdminQuery),
    responses(
        (status = 200, description = "Paginated foot-wash stations", body = ApiResponse<Vec<FootWashStationAdminDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_list_foot_wash_stations(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    Query(query): Query<FootWashStationAdminQuery>,
) -> Result<Json<ApiResponse<Vec<FootWashStationAdminDto>>>> {
    let (stations, total) = service.admin_list(&query).await?;
    let items: Vec<FootWashStationAdminDto> = stations.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/footwashstations/{id}",
    params(
        ("id" = Uuid, Path, description = "Foot-wash station ID")
    ),
    responses(
        (status = 200, description = "Foot-wash station", body = ApiResponse<FootWashStationAdminDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Foot-wash station not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_get_foot_wash_station(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<FootWashStationAdminDto>>> {
    let station = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(station.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/footwashstations",
    request_body = FootWashStationInputDto,
    responses(
        (status = 201, description = "Foot-wash station created", body = ApiResponse<FootWashStationAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_create_foot_wash_station(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    AppJson(dto): AppJson<FootWashStationInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<FootWashStationAdminDto>>)> {
    dto.validate()?;

    let station = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(station.into()),
            Some("Foot-wash station created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/footwashstations/{id}",
    params(
        ("id" = Uuid, Path, description = "Foot-wash station ID")
    ),
    request_body = FootWashStationInputDto,
    responses(
        (status = 200, description = "Foot-wash station updated", body = ApiResponse<FootWashStationAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Foot-wash station not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_update_foot_wash_station(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<FootWashStationInputDto>,
) -> Result<Json<ApiResponse<FootWashStationAdminDto>>> {
    dto.validate()?;

    let station = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(station.into()),
        Some("Foot-wash station updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/footwashstations/{id}",
    params(
        ("id" = Uuid, Path, description = "Foot-wash station ID")
    ),
    responses(
        (status = 200, description = "Foot-wash station deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Foot-wash station not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_delete_foot_wash_station(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Foot-wash station deleted".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/footwashstations/actions",
    responses(
        (status = 200, description = "Available actions", body = ApiResponse<Vec<AdminActionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_foot_wash_station_actions(
    RequireStaff(_user): RequireStaff,
) -> Json<ApiResponse<Vec<AdminActionDto>>> {
    let actions = FootWashStationAction::ALL
        .iter()
        .map(|a| AdminActionDto {
            action: a.as_str(),
            description: a.label(),
        })
        .collect();
    Json(ApiResponse::success(Some(actions), None, None))
}

#[utoipa::path(
    post,
    path = "/api/admin/footwashstations/actions/{action}",
    params(
        ("action" = String, Path, description = "mark_operational or mark_non_operational")
    ),
    request_body = BulkActionDto,
    responses(
        (status = 200, description = "Action applied", body = ApiResponse<BulkActionResultDto>),
        (status = 400, description = "No records selected"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown action")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_apply_foot_wash_station_action(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<FootWashStationService>>,
    Path(action): Path<String>,
    AppJson(dto): AppJson<BulkActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    let action = action
        .parse::<FootWashStationAction>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    dto.validate()?;

    let affected = service.apply_action(action, &dto.ids).await?;

    Ok(Json(ApiResponse::success(
        Some(BulkActionResultDto {
            action: action.to_string(),
            affected,
        }),
        Some(format!("{} foot-wash station(s) updated", affected)),
        None,
    )))
}
