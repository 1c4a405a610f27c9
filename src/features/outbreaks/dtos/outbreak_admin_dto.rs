use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::outbreaks::models::{Outbreak, OutbreakStatus};
use crate::shared::geo::to_f64;
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::types::PaginationQuery;

labeled_enum! {
    /// Bulk actions offered on the outbreak admin list
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OutbreakAction {
        MarkVerified = ("mark_verified", "Mark selected outbreaks as verified"),
        MarkCleared = ("mark_cleared", "Mark selected outbreaks as cleared"),
    }
}

/// Query params for the outbreak admin list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OutbreakAdminQuery {
    /// Page number (1-indexed)
    pub page: Option<i64>,
    /// Items per page (max 100)
    pub page_size: Option<i64>,
    /// Search in title, description and location name
    pub search: Option<String>,
    pub region: Option<Region>,
    pub status: Option<OutbreakStatus>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
}

impl OutbreakAdminQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.page_size)
    }
}

/// Create or fully replace an outbreak
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OutbreakInputDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub status: OutbreakStatus,
    pub region: Region,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    #[validate(length(min = 1, max = 200, message = "Location name must be 1-200 characters"))]
    pub location_name: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "Animals affected cannot be negative"))]
    pub animals_affected: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Animals quarantined cannot be negative"))]
    pub animals_quarantined: i32,
    /// Defaults to now
    pub date_reported: Option<DateTime<Utc>>,
    pub date_confirmed: Option<DateTime<Utc>>,
    pub date_cleared: Option<DateTime<Utc>>,
    /// Defaults to "Ministry of Agriculture" when blank
    #[validate(length(max = 200, message = "Source must be at most 200 characters"))]
    pub source: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl OutbreakInputDto {
    /// Cross-field checks not expressible as field validators
    pub fn check_dates(&self) -> Result<(), AppError> {
        if let (Some(confirmed), Some(cleared)) = (self.date_confirmed, self.date_cleared) {
            if confirmed > cleared {
                return Err(AppError::Validation(
                    "date_confirmed must not be after date_cleared".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Full admin view of an outbreak, including hidden rows
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutbreakAdminDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: OutbreakStatus,
    pub status_display: &'static str,
    pub region: Region,
    pub region_display: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub animals_affected: i32,
    pub animals_quarantined: i32,
    pub date_reported: DateTime<Utc>,
    pub date_confirmed: Option<DateTime<Utc>>,
    pub date_cleared: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
    pub is_verified: bool,
    pub is_active: bool,
}

impl From<Outbreak> for OutbreakAdminDto {
    fn from(o: Outbreak) -> Self {
        Self {
            id: o.id,
            title: o.title,
            description: o.description,
            status: o.status,
            status_display: o.status.label(),
            region: o.region,
            region_display: o.region.label(),
            latitude: to_f64(o.latitude),
            longitude: to_f64(o.longitude),
            location_name: o.location_name,
            animals_affected: o.animals_affected,
            animals_quarantined: o.animals_quarantined,
            date_reported: o.date_reported,
            date_confirmed: o.date_confirmed,
            date_cleared: o.date_cleared,
            last_updated: o.last_updated,
            source: o.source,
            is_verified: o.is_verified,
            is_active: o.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn input() -> serde_json::Value {
        json!({
            "title": "Manzini Central Outbreak",
            "description": "Confirmed FMD in cattle",
            "region": "manzini",
            "latitude": -26.4833,
            "longitude": 31.3667,
            "location_name": "Manzini Central Farm"
        })
    }

    #[test]
    fn test_input_defaults() {
        let dto: OutbreakInputDto = serde_json::from_value(input()).unwrap();
        assert_eq!(dto.status, OutbreakStatus::Active);
        assert_eq!(dto.animals_affected, 0);
        assert!(!dto.is_verified);
        assert!(dto.is_active);
        assert!(dto.source.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_input_rejects_unknown_enum_codes() {
        let mut body = input();
        body["region"] = json!("gauteng");
        assert!(serde_json::from_value::<OutbreakInputDto>(body).is_err());

        let mut body = input();
        body["status"] = json!("contained");
        assert!(serde_json::from_value::<OutbreakInputDto>(body).is_err());
    }

    #[test]
    fn test_input_range_validation() {
        let mut body = input();
        body["latitude"] = json!(-95.0);
        body["animals_affected"] = json!(-1);
        let dto: OutbreakInputDto = serde_json::from_value(body).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("animals_affected"));
    }

    #[test]
    fn test_check_dates() {
        let mut dto: OutbreakInputDto = serde_json::from_value(input()).unwrap();
        let now = Utc::now();
        dto.date_confirmed = Some(now);
        dto.date_cleared = Some(now - Duration::days(1));
        assert!(dto.check_dates().is_err());

        dto.date_cleared = Some(now);
        assert!(dto.check_dates().is_ok());

        dto.date_confirmed = None;
        assert!(dto.check_dates().is_ok());
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(
            "mark_cleared".parse::<OutbreakAction>().unwrap(),
            OutbreakAction::MarkCleared
        );
        assert!("delete_selected".parse::<OutbreakAction>().is_err());
    }

    #[test]
    fn test_admin_query_pagination() {
        let query = OutbreakAdminQuery {
            page: Some(2),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(query.pagination().offset(), 10);
        assert_eq!(OutbreakAdminQuery::default().pagination().limit(), 20);
    }
}
