//! Authorization guards for the administrative API.

use crate::core::error::AppError;
use crate::features::auth::model::StaffUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking that the request was authenticated as staff.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireStaff(user): RequireStaff) { ... }
/// ```
pub struct RequireStaff(pub StaffUser);

impl<S> FromRequestParts<S> for RequireStaff
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<StaffUser>()
            .ok_or_else(|| AppError::Unauthorized("Staff authentication required".to_string()))?;

        if user.username.is_empty() {
            return Err(AppError::Forbidden("Staff access required".to_string()));
        }

        Ok(RequireStaff(user.clone()))
    }
}
