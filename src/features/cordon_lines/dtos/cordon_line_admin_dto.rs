use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::cordon_lines::models::{CordonLine, CordonStatus};
use crate::shared::geo::LatLng;
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::types::PaginationQuery;

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CordonLineAction {
        MarkActive = ("mark_active", "Mark as active"),
        MarkInactive = ("mark_inactive", "Mark as inactive"),
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CordonLineAdminQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Search in name and description
    pub search: Option<String>,
    pub region: Option<Region>,
    pub status: Option<CordonStatus>,
    pub is_active: Option<bool>,
}

impl CordonLineAdminQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.page_size)
    }
}

/// Create or fully replace a cordon line
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CordonLineInputDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub region: Region,
    #[serde(default)]
    pub status: CordonStatus,
    /// Ordered vertices, at least two
    #[validate(length(min = 2, message = "A cordon line needs at least two points"))]
    pub coordinates: Vec<LatLng>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub restrictions: String,
    /// Defaults to now
    pub date_established: Option<DateTime<Utc>>,
    pub date_expires: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl CordonLineInputDto {
    /// Vertex ranges and expiry ordering, checked after field validation
    pub fn check(&self, established: DateTime<Utc>) -> Result<(), AppError> {
        for point in &self.coordinates {
            point.validate()?;
        }
        if let Some(expires) = self.date_expires {
            if expires < established {
                return Err(AppError::Validation(
                    "date_expires must not be before date_established".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CordonLineAdminDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub status: CordonStatus,
    pub status_display: &'static str,
    pub coordinates: Vec<LatLng>,
    pub description: String,
    pub restrictions: String,
    pub date_established: DateTime<Utc>,
    pub date_expires: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CordonLine> for CordonLineAdminDto {
    fn from(c: CordonLine) -> Self {
        Self {
            id: c.id,
            name: c.name,
            region: c.region,
            region_display: c.region.label(),
            status: c.status,
            status_display: c.status.label(),
            coordinates: c.coordinates.0,
            description: c.description,
            restrictions: c.restrictions,
            date_established: c.date_established,
            date_expires: c.date_expires,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
