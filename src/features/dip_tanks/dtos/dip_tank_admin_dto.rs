use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::dip_tanks::models::DipTank;
use crate::shared::geo::to_f64;
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::types::PaginationQuery;

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DipTankAction {
        MarkAffected = ("mark_affected", "Mark as affected area"),
        MarkClear = ("mark_clear", "Mark as clear area"),
        MarkActive = ("mark_active", "Mark as active"),
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DipTankAdminQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Search in name and notes
    pub search: Option<String>,
    pub region: Option<Region>,
    pub is_affected: Option<bool>,
    pub is_active: Option<bool>,
}

impl DipTankAdminQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.page_size)
    }
}

/// Create or fully replace a dip tank
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DipTankInputDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub region: Region,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    #[serde(default)]
    pub is_affected: bool,
    #[validate(range(min = 0, message = "Capacity cannot be negative"))]
    pub capacity: Option<i32>,
    pub last_inspection: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DipTankAdminDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub is_affected: bool,
    pub capacity: Option<i32>,
    pub last_inspection: Option<DateTime<Utc>>,
    pub notes: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DipTank> for DipTankAdminDto {
    fn from(d: DipTank) -> Self {
        Self {
            id: d.id,
            name: d.name,
            region: d.region,
            region_display: d.region.label(),
            latitude: to_f64(d.latitude),
            longitude: to_f64(d.longitude),
            is_affected: d.is_affected,
            capacity: d.capacity,
            last_inspection: d.last_inspection,
            notes: d.notes,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_defaults_and_validation() {
        let dto: DipTankInputDto = serde_json::from_value(json!({
            "name": "Manzini West Dip Tank",
            "region": "manzini",
            "latitude": -26.5,
            "longitude": 31.25
        }))
        .unwrap();
        assert!(!dto.is_affected);
        assert!(dto.is_active);
        assert!(dto.capacity.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let dto: DipTankInputDto = serde_json::from_value(json!({
            "name": "Manzini West Dip Tank",
            "region": "manzini",
            "latitude": -26.5,
            "longitude": 31.25,
            "capacity": -5
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
