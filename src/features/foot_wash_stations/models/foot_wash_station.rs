use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::foot_wash_stations::dtos::FootWashStationProperties;
use crate::shared::geo;
use crate::shared::geojson::{GeoFeature, Geometry};
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::visibility::PublicVisibility;

labeled_enum! {
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
    )]
    #[sqlx(type_name = "road_type", rename_all = "snake_case")]
    #[serde(rename_all = "snake_case")]
    pub enum RoadType {
        Highway = ("highway", "Highway"),
        MainRoad = ("main_road", "Main Road"),
        SecondaryRoad = ("secondary_road", "Secondary Road"),
        BorderCrossing = ("border_crossing", "Border Crossing"),
    }
}

impl Default for RoadType {
    fn default() -> Self {
        RoadType::MainRoad
    }
}

/// Database model for a foot-wash station
#[derive(Debug, Clone, FromRow)]
pub struct FootWashStation {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub road_name: String,
    pub road_type: RoadType,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Instructions shown to travellers at the station
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

impl PublicVisibility for FootWashStation {
    const TABLE: &'static str = "foot_wash_stations";
    const COLUMNS: &'static str = "id, name, region, road_name, road_type, latitude, longitude, \
        instructions, operating_hours, contact_person, contact_phone, is_operational, \
        last_maintenance, is_active, created_at, updated_at";
    const VISIBLE: &'static str = "is_active = TRUE";
}

impl GeoFeature for FootWashStation {
    type Properties = FootWashStationProperties;

    fn geometry(&self) -> Geometry {
        Geometry::Point {
            coordinates: geo::position(self.latitude, self.longitude),
        }
    }

    fn properties(&self) -> FootWashStationProperties {
        FootWashStationProperties {
            id: self.id,
            name: self.name.clone(),
            region: self.region,
            region_display: self.region.label(),
            road_name: self.road_name.clone(),
            road_type: self.road_type,
            road_type_display: self.road_type.label(),
            instructions: self.instructions.clone(),
            operating_hours: self.operating_hours.clone(),
            contact_person: self.contact_person.clone(),
            contact_phone: self.contact_phone.clone(),
            is_operational: self.is_operational,
            last_maintenance: self.last_maintenance,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::str::FromStr;

    pub fn station(road_type: RoadType, is_operational: bool) -> FootWashStation {
        let now = Utc::now();
        FootWashStation {
            id: Uuid::now_v7(),
            name: "Ngwenya Border Post Station".to_string(),
            region: Region::Hhohho,
            road_name: "MR3 - Ngwenya Border".to_string(),
            road_type,
            latitude: Decimal::from_str("-26.190000").unwrap(),
            longitude: Decimal::from_str("31.010000").unwrap(),
            instructions: "All vehicles must pass through the foot bath".to_string(),
            operating_hours: "24/7".to_string(),
            contact_person: "Station Officer".to_string(),
            contact_phone: "+268 2442 1234".to_string(),
            is_operational,
            last_maintenance: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::station;
    use super::*;

    #[test]
    fn test_road_type_codes() {
        assert_eq!(RoadType::BorderCrossing.as_str(), "border_crossing");
        assert_eq!(RoadType::SecondaryRoad.label(), "Secondary Road");
        assert_eq!("main_road".parse::<RoadType>().unwrap(), RoadType::MainRoad);
        assert!("Main Road".parse::<RoadType>().is_err());
        assert_eq!(
            serde_json::to_value(RoadType::BorderCrossing).unwrap(),
            "border_crossing"
        );
    }

    #[test]
    fn test_feature_is_longitude_first() {
        let feature = station(RoadType::BorderCrossing, true).to_feature();
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"], serde_json::json!([31.01, -26.19]));
        assert_eq!(json["properties"]["road_type_display"], "Border Crossing");
        assert!(json["properties"]["last_maintenance"].is_null());
    }
}
