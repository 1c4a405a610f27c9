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
use crate::features::dip_tanks::dtos::{
    DipTankAction, DipTankAdminDto, DipTankAdminQuery, DipTankInputDto,
};
use crate::features::dip_tanks::services::DipTankService;
use crate::shared::types::{ApiResponse, Meta};

/// List all dip tanks
#[utoipa::path(
    get,
    path = "/api/admin/diptanks",
    params(DipTankAdminQuery),
    responses(
        (status = 200, description = "Paginated dip tanks", body = ApiResponse<Vec<DipTankAdminDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_list_dip_tanks(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    Query(query): Query<DipTankAdminQuery>,
) -> Result<Json<ApiResponse<Vec<DipTankAdminDto>>>> {
    let (tanks, total) = service.admin_list(&query).await?;
    let items: Vec<DipTankAdminDto> = tanks.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/diptanks/{id}",
    params(
        ("id" = Uuid, Path, description = "Dip tank ID")
    ),
    responses(
        (status = 200, description = "Dip tank", body = ApiResponse<DipTankAdminDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dip tank not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_get_dip_tank(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<DipTankAdminDto>>> {
    let tank = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(tank.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/diptanks",
    request_body = DipTankInputDto,
    responses(
        (status = 201, description = "Dip tank created", body = ApiResponse<DipTankAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_create_dip_tank(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    AppJson(dto): AppJson<DipTankInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<DipTankAdminDto>>)> {
    dto.validate()?;

    let tank = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(tank.into()),
            Some("Dip tank created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/diptanks/{id}",
    params(
        ("id" = Uuid, Path, description = "Dip tank ID")
    ),
    request_body = DipTankInputDto,
    responses(
        (status = 200, description = "Dip tank updated", body = ApiResponse<DipTankAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dip tank not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_update_dip_tank(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<DipTankInputDto>,
) -> Result<Json<ApiResponse<DipTankAdminDto>>> {
    dto.validate()?;

    let tank = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(tank.into()),
        Some("Dip tank updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/diptanks/{id}",
    params(
        ("id" = Uuid, Path, description = "Dip tank ID")
    ),
    responses(
        (status = 200, description = "Dip tank deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dip tank not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_delete_dip_tank(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Dip tank deleted".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/diptanks/actions",
    responses(
        (status = 200, description = "Available actions", body = ApiResponse<Vec<AdminActionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_dip_tank_actions(
    RequireStaff(_user): RequireStaff,
) -> Json<ApiResponse<Vec<AdminActionDto>>> {
    let actions = DipTankAction::ALL
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
    path = "/api/admin/diptanks/actions/{action}",
    params(
        ("action" = String, Path, description = "mark_affected, mark_clear or mark_active")
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
pub async fn admin_apply_dip_tank_action(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<DipTankService>>,
    Path(action): Path<String>,
    AppJson(dto): AppJson<BulkActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    let action = action
        .parse::<DipTankAction>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    dto.validate()?;

    let affected = service.apply_action(action, &dto.ids).await?;

    Ok(Json(ApiResponse::success(
        Some(BulkActionResultDto {
            action: action.to_string(),
            affected,
        }),
        Some(format!("{} dip tank(s) updated", affected)),
        None,
    )))
}
