use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::dip_tanks::dtos::DipTankProperties;
use crate::shared::constants::DIP_TANK_RADIUS_METERS;
use crate::shared::geo;
use crate::shared::geojson::{GeoFeature, Geometry};
use crate::shared::region::Region;
use crate::shared::visibility::PublicVisibility;

/// Database model for a dip tank
#[derive(Debug, Clone, FromRow)]
pub struct DipTank {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub is_affected: bool,
    /// Number of animals the tank can serve
    pub capacity: Option<i32>,
    pub last_inspection: Option<DateTime<Utc>>,
    pub notes: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicVisibility for DipTank {
    const TABLE: &'static str = "dip_tanks";
    const COLUMNS: &'static str = "id, name, region, latitude, longitude, is_affected, capacity, \
        last_inspection, notes, is_active, created_at, updated_at";
    const VISIBLE: &'static str = "is_active = TRUE";
}

impl GeoFeature for DipTank {
    type Properties = DipTankProperties;

    fn geometry(&self) -> Geometry {
        Geometry::Point {
            coordinates: geo::position(self.latitude, self.longitude),
        }
    }

    fn properties(&self) -> DipTankProperties {
        DipTankProperties {
            id: self.id,
            name: self.name.clone(),
            region: self.region,
            region_display: self.region.label(),
            is_affected: self.is_affected,
            capacity: self.capacity,
            last_inspection: self.last_inspection,
            notes: self.notes.clone(),
            radius: DIP_TANK_RADIUS_METERS,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::str::FromStr;

    pub fn dip_tank(name: &str, region: Region, is_affected: bool) -> DipTank {
        let now = Utc::now();
        DipTank {
            id: Uuid::now_v7(),
            name: name.to_string(),
            region,
            latitude: Decimal::from_str("-26.490000").unwrap(),
            longitude: Decimal::from_str("31.370000").unwrap(),
            is_affected,
            capacity: Some(500),
            last_inspection: None,
            notes: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
