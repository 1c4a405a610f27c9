use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::foot_wash_stations::models::{FootWashStation, RoadType};
use crate::shared::filters::{parse_flag, EnumFilter};
use crate::shared::geo::to_f64;
use crate::shared::region::Region;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FootWashStationQuery {
    pub region: Option<String>,
    /// highway, main_road, secondary_road or border_crossing
    pub road_type: Option<String>,
    /// "true" for operational stations, any other value for closed ones
    pub operational: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FootWashStationFilters {
    pub region: EnumFilter<Region>,
    pub road_type: EnumFilter<RoadType>,
    pub operational: Option<bool>,
}

impl FootWashStationFilters {
    pub fn matches_nothing(&self) -> bool {
        self.region.matches_nothing() || self.road_type.matches_nothing()
    }
}

impl From<&FootWashStationQuery> for FootWashStationFilters {
    fn from(query: &FootWashStationQuery) -> Self {
        Self {
            region: EnumFilter::parse(query.region.as_deref()),
            road_type: EnumFilter::parse(query.road_type.as_deref()),
            operational: parse_flag(query.operational.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FootWashStationListItemDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub road_name: String,
    pub road_type: RoadType,
    pub road_type_display: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub is_operational: bool,
    pub operating_hours: String,
    pub contact_phone: String,
}

impl From<FootWashStation> for FootWashStationListItemDto {
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
            is_operational: s.is_operational,
            operating_hours: s.operating_hours,
            contact_phone: s.contact_phone,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FootWashStationDetailDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub road_name: String,
    pub road_type: RoadType,
    pub road_type_display: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub is_operational: bool,
    pub operating_hours: String,
    pub contact_phone: String,
    pub instructions: String,
    pub contact_person: String,
    pub last_maintenance: Option<DateTime<Utc>>,
}

impl From<FootWashStation> for FootWashStationDetailDto {
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
            is_operational: s.is_operational,
            operating_hours: s.operating_hours,
            contact_phone: s.contact_phone,
            instructions: s.instructions,
            contact_person: s.contact_person,
            last_maintenance: s.last_maintenance,
        }
    }
}

/// GeoJSON properties of a foot-wash station feature
#[derive(Debug, Clone, Serialize)]
pub struct FootWashStationProperties {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub road_name: String,
    pub road_type: RoadType,
    pub road_type_display: &'static str,
    pub instructions: String,
    pub operating_hours: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub is_operational: bool,
    pub last_maintenance: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::foot_wash_stations::models::fixtures::station;

    #[test]
    fn test_filters() {
        let filters = FootWashStationFilters::from(&FootWashStationQuery {
            region: Some("hhohho".to_string()),
            road_type: Some("border_crossing".to_string()),
            operational: Some("false".to_string()),
        });
        assert_eq!(filters.road_type, EnumFilter::Only(RoadType::BorderCrossing));
        assert_eq!(filters.operational, Some(false));
        assert!(!filters.matches_nothing());

        let filters = FootWashStationFilters::from(&FootWashStationQuery {
            road_type: Some("Border Crossing".to_string()),
            ..Default::default()
        });
        assert!(filters.matches_nothing());
    }

    #[test]
    fn test_list_item_omits_instructions() {
        let dto = FootWashStationListItemDto::from(station(RoadType::MainRoad, true));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["road_type"], "main_road");
        assert_eq!(json["road_type_display"], "Main Road");
        assert_eq!(json["latitude"], -26.19);
        assert!(json.get("instructions").is_none());
    }
}
