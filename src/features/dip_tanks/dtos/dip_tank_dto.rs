use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::dip_tanks::models::DipTank;
use crate::shared::filters::{parse_flag, EnumFilter};
use crate::shared::geo::to_f64;
use crate::shared::region::Region;

/// Filters accepted by the public list and geojson endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DipTankQuery {
    pub region: Option<String>,
    /// "true" for affected tanks, any other value for clear ones
    pub affected: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DipTankFilters {
    pub region: EnumFilter<Region>,
    pub affected: Option<bool>,
}

impl From<&DipTankQuery> for DipTankFilters {
    fn from(query: &DipTankQuery) -> Self {
        Self {
            region: EnumFilter::parse(query.region.as_deref()),
            affected: parse_flag(query.affected.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DipTankListItemDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub is_affected: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: Option<i32>,
}

impl From<DipTank> for DipTankListItemDto {
    fn from(d: DipTank) -> Self {
        Self {
            id: d.id,
            name: d.name,
            region: d.region,
            region_display: d.region.label(),
            is_affected: d.is_affected,
            latitude: to_f64(d.latitude),
            longitude: to_f64(d.longitude),
            capacity: d.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DipTankDetailDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub is_affected: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: Option<i32>,
    pub last_inspection: Option<DateTime<Utc>>,
    pub notes: String,
}

impl From<DipTank> for DipTankDetailDto {
    fn from(d: DipTank) -> Self {
        Self {
            id: d.id,
            name: d.name,
            region: d.region,
            region_display: d.region.label(),
            is_affected: d.is_affected,
            latitude: to_f64(d.latitude),
            longitude: to_f64(d.longitude),
            capacity: d.capacity,
            last_inspection: d.last_inspection,
            notes: d.notes,
        }
    }
}

/// GeoJSON properties of a dip tank feature
#[derive(Debug, Clone, Serialize)]
pub struct DipTankProperties {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub is_affected: bool,
    pub capacity: Option<i32>,
    pub last_inspection: Option<DateTime<Utc>>,
    pub notes: String,
    /// Map circle radius in meters
    pub radius: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse_flag_leniently() {
        let filters = DipTankFilters::from(&DipTankQuery {
            region: Some("manzini".to_string()),
            affected: Some("TRUE".to_string()),
        });
        assert_eq!(filters.region, EnumFilter::Only(Region::Manzini));
        assert_eq!(filters.affected, Some(true));

        let filters = DipTankFilters::from(&DipTankQuery {
            region: None,
            affected: Some("maybe".to_string()),
        });
        assert_eq!(filters.affected, Some(false));

        assert_eq!(DipTankFilters::from(&DipTankQuery::default()).affected, None);
    }
}
