use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::geo;
use crate::shared::geojson::{GeoFeature, Geometry};
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::visibility::PublicVisibility;

use crate::features::outbreaks::dtos::OutbreakProperties;

labeled_enum! {
    /// Advisory outbreak stage; editors may set any stage at any time
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
    )]
    #[sqlx(type_name = "outbreak_status", rename_all = "lowercase")]
    #[serde(rename_all = "lowercase")]
    pub enum OutbreakStatus {
        Active = ("active", "Active Outbreak"),
        Surveillance = ("surveillance", "Under Surveillance"),
        Cleared = ("cleared", "Cleared/Controlled"),
    }
}

impl Default for OutbreakStatus {
    fn default() -> Self {
        OutbreakStatus::Active
    }
}

/// Database model for an outbreak
#[derive(Debug, Clone, FromRow)]
pub struct Outbreak {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: OutbreakStatus,
    pub region: Region,
    pub latitude: Decimal,
    pub longitude: Decimal,
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

impl PublicVisibility for Outbreak {
    const TABLE: &'static str = "outbreaks";
    const COLUMNS: &'static str = "id, title, description, status, region, latitude, longitude, \
        location_name, animals_affected, animals_quarantined, date_reported, date_confirmed, \
        date_cleared, last_updated, source, is_verified, is_active";
    const VISIBLE: &'static str = "is_active = TRUE AND is_verified = TRUE";
}

impl GeoFeature for Outbreak {
    type Properties = OutbreakProperties;

    fn geometry(&self) -> Geometry {
        Geometry::Point {
            coordinates: geo::position(self.latitude, self.longitude),
        }
    }

    fn properties(&self) -> OutbreakProperties {
        OutbreakProperties {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            status_display: self.status.label(),
            region: self.region,
            region_display: self.region.label(),
            location_name: self.location_name.clone(),
            animals_affected: self.animals_affected,
            animals_quarantined: self.animals_quarantined,
            date_reported: self.date_reported,
            last_updated: self.last_updated,
            source: self.source.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::outbreak;
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_labels() {
        assert_eq!(OutbreakStatus::Active.label(), "Active Outbreak");
        assert_eq!(OutbreakStatus::Surveillance.label(), "Under Surveillance");
        assert_eq!(OutbreakStatus::Cleared.label(), "Cleared/Controlled");
        assert_eq!(
            OutbreakStatus::from_str("surveillance").unwrap(),
            OutbreakStatus::Surveillance
        );
        assert!(OutbreakStatus::from_str("Active").is_err());
    }

    #[test]
    fn test_feature_is_longitude_first() {
        let feature = outbreak(OutbreakStatus::Active, Region::Manzini, 5).to_feature();
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"][0], 31.3667);
        assert_eq!(json["geometry"]["coordinates"][1], -26.4833);
    }

    #[test]
    fn test_feature_properties_carry_labels() {
        let feature = outbreak(OutbreakStatus::Surveillance, Region::Hhohho, 10).to_feature();
        let props = serde_json::to_value(&feature.properties).unwrap();

        assert_eq!(props["status"], "surveillance");
        assert_eq!(props["status_display"], "Under Surveillance");
        assert_eq!(props["region"], "hhohho");
        assert_eq!(props["region_display"], "Hhohho");
        assert_eq!(props["animals_quarantined"], 120);
        assert!(props.get("is_verified").is_none());
    }
}
