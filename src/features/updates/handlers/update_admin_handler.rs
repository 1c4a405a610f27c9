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
use crate::features::updates::dtos::{
    UpdateAction, UpdateAdminDto, UpdateAdminQuery, UpdateInputDto,
};
use crate::features::updates::services::UpdateService;
use crate::shared::types::{ApiResponse, Meta};

/// List all updates
#[utoipa::path(
    get,
    path = "/api/admin/updates",
    params(UpdateAdminQuery),
    responses(
        (status = 200, description = "Paginated updates", body = ApiResponse<Vec<UpdateAdminDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_list_updates(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    Query(query): Query<UpdateAdminQuery>,
) -> Result<Json<ApiResponse<Vec<UpdateAdminDto>>>> {
    let (updates, total) = service.admin_list(&query).await?;
    let items: Vec<UpdateAdminDto> = updates.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/updates/{id}",
    params(
        ("id" = Uuid, Path, description = "Update ID")
    ),
    responses(
        (status = 200, description = "Update", body = ApiResponse<UpdateAdminDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Update not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_get_update(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<UpdateAdminDto>>> {
    let update = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(update.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/updates",
    request_body = UpdateInputDto,
    responses(
        (status = 201, description = "Update created", body = ApiResponse<UpdateAdminDto>),
        (status = 400, description = "Validation error or unknown related outbreak"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_create_update(
    RequireStaff(user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    AppJson(dto): AppJson<UpdateInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<UpdateAdminDto>>)> {
    dto.validate()?;

    let update = service.create(dto).await?;
    tracing::info!("Update {} published by {}", update.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(update.into()),
            Some("Update created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/updates/{id}",
    params(
        ("id" = Uuid, Path, description = "Update ID")
    ),
    request_body = UpdateInputDto,
    responses(
        (status = 200, description = "Update saved", body = ApiResponse<UpdateAdminDto>),
        (status = 400, description = "Validation error or unknown related outbreak"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Update not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_replace_update(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateInputDto>,
) -> Result<Json<ApiResponse<UpdateAdminDto>>> {
    dto.validate()?;

    let update = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(update.into()),
        Some("Update saved".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/updates/{id}",
    params(
        ("id" = Uuid, Path, description = "Update ID")
    ),
    responses(
        (status = 200, description = "Update deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Update not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_delete_update(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Update deleted".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/updates/actions",
    responses(
        (status = 200, description = "Available actions", body = ApiResponse<Vec<AdminActionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_update_actions(
    RequireStaff(_user): RequireStaff,
) -> Json<ApiResponse<Vec<AdminActionDto>>> {
    let actions = UpdateAction::ALL
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
    path = "/api/admin/updates/actions/{action}",
    params(
        ("action" = String, Path, description = "mark_featured or mark_published")
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
pub async fn admin_apply_update_action(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<UpdateService>>,
    Path(action): Path<String>,
    AppJson(dto): AppJson<BulkActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    let action = action
        .parse::<UpdateAction>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    dto.validate()?;

    let affected = service.apply_action(action, &dto.ids).await?;

    Ok(Json(ApiResponse::success(
        Some(BulkActionResultDto {
            action: action.to_string(),
            affected,
        }),
        Some(format!("{} update(s) updated", affected)),
        None,
    )))
}
