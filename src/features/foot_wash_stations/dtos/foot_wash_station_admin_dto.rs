use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::foot_wash_stations::models::{FootWashStation, RoadType};
use crate::shared::geo::to_f64;
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::validate_contact_phone;

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FootWashStationAction {
        MarkOperational = ("mark_operational", "Mark as operational"),
        MarkNonOperational = ("mark_non_operational", "Mark as non-operational"),
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FootWashStationAdminQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Search in name, road name and instructions
    pub search: Option<String>,
    pub region: Option<Region>,
    pub road_type: Option<RoadType>,
    pub is_operational: Option<bool>,
    pub is_active: Option<bool>,
}

impl FootWashStationAdminQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.page_size)
    }
}

/// Create or fully replace a foot-wash station
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FootWashStationInputDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub region: Region,
    #[validate(length(min = 1, max = 200, message = "Road name must be 1-200 characters"))]
    pub road_name: String,
    #[serde(default)]
    pub road_type: RoadType,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    #[validate(length(min = 1, message = "Instructions are required"))]
    pub instructions: String,
    #[serde(default = "default_operating_hours")]
    #[validate(length(max = 100, message = "Operating hours must be at most 100 characters"))]
    pub operating_hours: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "Contact person must be at most 200 characters"))]
    pub contact_person: String,
    #[serde(default)]
    #[validate(
        length(max = 20, message = "Contact phone must be at most 20 characters"),
        custom(function = "validate_contact_phone")
    )]
    pub contact_phone: String,
    #[serde(default = "default_true")]
    pub is_operational: bool,
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_operating_hours() -> String {
    "24/7".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FootWashStationAdminDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub road_name: String,
    pub road_type: RoadType,
    pub road_type_display: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub instructions: String,
    pub operating_hours: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub is_operational: bool,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FootWashStation> for FootWashStationAdminDto {
    fn from(s: FootWashStation) -> Self {
        Self {
            id: s.id,
            name: s.name,
            region: s.region,
            region_display: s.region.label(),
            road_name: s.road_name,
            road_type: s.road_type,
            road_type_display: s.road_type.label(),
            latitude: to_f64(s.latitude),
            longitude: to_f64(s.longitude),
            instructions: s.instructions,
            operating_hours: s.operating_hours,
            contact_person: s.contact_person,
            contact_phone: s.contact_phone,
            is_operational: s.is_operational,
            last_maintenance: s.last_maintenance,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
