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
use crate::features::cordon_lines::dtos::{
    CordonLineAction, CordonLineAdminDto, CordonLineAdminQuery, CordonLineInputDto,
};
use crate::features::cordon_lines::services::CordonLineService;
use crate::shared::types::{ApiResponse, Meta};

/// List all cordon lines
#[utoipa::path(
    get,
    path = "/api/admin/cordonlines",
    params(CordonLineAdminQuery),
    responses(
        (status = 200, description = "Paginated cordon lines", body = ApiResponse<Vec<CordonLineAdminDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_list_cordon_lines(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    Query(query): Query<CordonLineAdminQuery>,
) -> Result<Json<ApiResponse<Vec<CordonLineAdminDto>>>> {
    let (lines, total) = service.admin_list(&query).await?;
    let items: Vec<CordonLineAdminDto> = lines.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/cordonlines/{id}",
    params(
        ("id" = Uuid, Path, description = "Cordon line ID")
    ),
    responses(
        (status = 200, description = "Cordon line", body = ApiResponse<CordonLineAdminDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Cordon line not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_get_cordon_line(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<CordonLineAdminDto>>> {
    let line = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(line.into()), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/cordonlines",
    request_body = CordonLineInputDto,
    responses(
        (status = 201, description = "Cordon line created", body = ApiResponse<CordonLineAdminDto>),
        (status = 400, description = "Validation error, fewer than two points or expiry before establishment"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_create_cordon_line(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    AppJson(dto): AppJson<CordonLineInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<CordonLineAdminDto>>)> {
    dto.validate()?;

    let line = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(line.into()),
            Some("Cordon line created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/cordonlines/{id}",
    params(
        ("id" = Uuid, Path, description = "Cordon line ID")
    ),
    request_body = CordonLineInputDto,
    responses(
        (status = 200, description = "Cordon line updated", body = ApiResponse<CordonLineAdminDto>),
        (status = 400, description = "Validation error, fewer than two points or expiry before establishment"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Cordon line not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_update_cordon_line(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<CordonLineInputDto>,
) -> Result<Json<ApiResponse<CordonLineAdminDto>>> {
    dto.validate()?;

    let line = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(line.into()),
        Some("Cordon line updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/cordonlines/{id}",
    params(
        ("id" = Uuid, Path, description = "Cordon line ID")
    ),
    responses(
        (status = 200, description = "Cordon line deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Cordon line not found")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_delete_cordon_line(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Cordon line deleted".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/cordonlines/actions",
    responses(
        (status = 200, description = "Available actions", body = ApiResponse<Vec<AdminActionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(("basic_auth" = []))
)]
pub async fn admin_cordon_line_actions(
    RequireStaff(_user): RequireStaff,
) -> Json<ApiResponse<Vec<AdminActionDto>>> {
    let actions = CordonLineAction::ALL
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
    path = "/api/admin/cordonlines/actions/{action}",
    params(
        ("action" = String, Path, description = "mark_active or mark_inactive")
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
pub async fn admin_apply_cordon_line_action(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CordonLineService>>,
    Path(action): Path<String>,
    AppJson(dto): AppJson<BulkActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    let action = action
        .parse::<CordonLineAction>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    dto.validate()?;

    let affected = service.apply_action(action, &dto.ids).await?;

    Ok(Json(ApiResponse::success(
        Some(BulkActionResultDto {
            action: action.to_string(),
            affected,
        }),
        Some(format!("{} cordon line(s) updated", affected)),
        None,
    )))
}
