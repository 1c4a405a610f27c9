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
use crate::features::outbreaks::dtos::{
    OutbreakAction, OutbreakAdminDto, OutbreakAdminQuery, OutbreakInputDto,
};
use crate::features::outbreaks::services::OutbreakService;
use crate::shared::types::{ApiResponse, Meta};

/// List all outbreaks, including unverified and inactive ones
#[utoipa::path(
    get,
    path = "/api/admin/outbreaks",
    params(OutbreakAdminQuery),
    responses(
        (status = 200, description = "Paginated outbreaks", body = ApiResponse<Vec<OutbreakAdminDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_list_outbreaks(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    Query(query): Query<OutbreakAdminQuery>,
) -> Result<Json<ApiResponse<Vec<OutbreakAdminDto>>>> {
    let (outbreaks, total) = service.admin_list(&query).await?;
    let items: Vec<OutbreakAdminDto> = outbreaks.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get any outbreak by id
#[utoipa::path(
    get,
    path = "/api/admin/outbreaks/{id}",
    params(
        ("id" = Uuid, Path, description = "Outbreak ID")
    ),
    responses(
        (status = 200, description = "Outbreak", body = ApiResponse<OutbreakAdminDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Outbreak not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_get_outbreak(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<OutbreakAdminDto>>> {
    let outbreak = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(outbreak.into()), None, None)))
}

/// Create an outbreak
#[utoipa::path(
    post,
    path = "/api/admin/outbreaks",
    request_body = OutbreakInputDto,
    responses(
        (status = 201, description = "Outbreak created", body = ApiResponse<OutbreakAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_create_outbreak(
    RequireStaff(user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    AppJson(dto): AppJson<OutbreakInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<OutbreakAdminDto>>)> {
    dto.validate()?;
    dto.check_dates()?;

    let outbreak = service.create(dto).await?;
    tracing::info!("Outbreak {} created by {}", outbreak.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(outbreak.into()),
            Some("Outbreak created".to_string()),
            None,
        )),
    ))
}

/// Replace an outbreak
#[utoipa::path(
    put,
    path = "/api/admin/outbreaks/{id}",
    params(
        ("id" = Uuid, Path, description = "Outbreak ID")
    ),
    request_body = OutbreakInputDto,
    responses(
        (status = 200, description = "Outbreak updated", body = ApiResponse<OutbreakAdminDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Outbreak not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_update_outbreak(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<OutbreakInputDto>,
) -> Result<Json<ApiResponse<OutbreakAdminDto>>> {
    dto.validate()?;
    dto.check_dates()?;

    let outbreak = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(outbreak.into()),
        Some("Outbreak updated".to_string()),
        None,
    )))
}

/// Delete an outbreak
#[utoipa::path(
    delete,
    path = "/api/admin/outbreaks/{id}",
    params(
        ("id" = Uuid, Path, description = "Outbreak ID")
    ),
    responses(
        (status = 200, description = "Outbreak deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Outbreak not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_delete_outbreak(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Outbreak deleted".to_string()),
        None,
    )))
}

/// Bulk actions available for outbreaks
#[utoipa::path(
    get,
    path = "/api/admin/outbreaks/actions",
    responses(
        (status = 200, description = "Available actions", body = ApiResponse<Vec<AdminActionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_outbreak_actions(
    RequireStaff(_user): RequireStaff,
) -> Json<ApiResponse<Vec<AdminActionDto>>> {
    let actions = OutbreakAction::ALL
        .iter()
        .map(|a| AdminActionDto {
            action: a.as_str(),
            description: a.label(),
        })
        .collect();
    Json(ApiResponse::success(Some(actions), None, None))
}

/// Apply a bulk action to the selected outbreaks
#[utoipa::path(
    post,
    path = "/api/admin/outbreaks/actions/{action}",
    params(
        ("action" = String, Path, description = "mark_verified or mark_cleared")
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
pub async fn admin_apply_outbreak_action(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<OutbreakService>>,
    Path(action): Path<String>,
    AppJson(dto): AppJson<BulkActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    let action = action
        .parse::<OutbreakAction>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    dto.validate()?;

    let affected = service.apply_action(action, &dto.ids).await?;

    Ok(Json(ApiResponse::success(
        Some(BulkActionResultDto {
            action: action.to_string(),
            affected,
        }),
        Some(format!("{} outbreak(s) updated", affected)),
        None,
    )))
}
