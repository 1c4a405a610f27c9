use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::outbreaks::models::{Outbreak, OutbreakStatus};
use crate::shared::filters::EnumFilter;
use crate::shared::geo::to_f64;
use crate::shared::region::Region;

// =============================================================================
// QUERY
// =============================================================================

/// Filters accepted by the public list, geojson and statistics endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OutbreakQuery {
    /// active, surveillance or cleared
    pub status: Option<String>,
    /// hhohho, manzini, lubombo or shiselweni
    pub region: Option<String>,
}

/// Parsed public outbreak filters
#[derive(Debug, Clone, Copy, Default)]
pub struct OutbreakFilters {
    pub status: EnumFilter<OutbreakStatus>,
    pub region: EnumFilter<Region>,
}

impl OutbreakFilters {
    pub fn matches_nothing(&self) -> bool {
        self.status.matches_nothing() || self.region.matches_nothing()
    }
}

impl From<&OutbreakQuery> for OutbreakFilters {
    fn from(query: &OutbreakQuery) -> Self {
        Self {
            status: EnumFilter::parse(query.status.as_deref()),
            region: EnumFilter::parse(query.region.as_deref()),
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Outbreak as shown in the public list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutbreakListItemDto {
    pub id: Uuid,
    pub title: String,
    pub status: OutbreakStatus,
    pub status_display: &'static str,
    pub region: Region,
    pub region_display: &'static str,
    pub location_name: String,
    pub animals_affected: i32,
    pub date_reported: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Outbreak> for OutbreakListItemDto {
    fn from(o: Outbreak) -> Self {
        Self {
            id: o.id,
            title: o.title,
            status: o.status,
            status_display: o.status.label(),
            region: o.region,
            region_display: o.region.label(),
            location_name: o.location_name,
            animals_affected: o.animals_affected,
            date_reported: o.date_reported,
            last_updated: o.last_updated,
        }
    }
}

/// Full public view of an outbreak
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutbreakDetailDto {
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
}

impl From<Outbreak> for OutbreakDetailDto {
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
        }
    }
}

/// GeoJSON properties of an outbreak feature
#[derive(Debug, Clone, Serialize)]
pub struct OutbreakProperties {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: OutbreakStatus,
    pub status_display: &'static str,
    pub region: Region,
    pub region_display: &'static str,
    pub location_name: String,
    pub animals_affected: i32,
    pub animals_quarantined: i32,
    pub date_reported: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

// =============================================================================
// STATISTICS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusCountDto {
    pub status: OutbreakStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegionCountDto {
    pub region: Region,
    pub count: i64,
}

/// Summary over a filtered outbreak set
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct OutbreakStatisticsDto {
    pub total_outbreaks: i64,
    pub active_outbreaks: i64,
    pub surveillance_zones: i64,
    pub cleared_outbreaks: i64,
    pub total_animals_affected: i64,
    pub total_animals_quarantined: i64,
    /// Statuses present in the set, in declaration order
    pub by_status: Vec<StatusCountDto>,
    /// Regions present in the set, ordered by region code
    pub by_region: Vec<RegionCountDto>,
}

impl OutbreakStatisticsDto {
    /// Summarize an already-filtered outbreak set
    pub fn summarize(outbreaks: &[Outbreak]) -> Self {
        let count_status = |status: OutbreakStatus| {
            outbreaks.iter().filter(|o| o.status == status).count() as i64
        };

        let by_status = OutbreakStatus::ALL
            .iter()
            .map(|&status| StatusCountDto {
                status,
                count: count_status(status),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        let mut regions: BTreeMap<&'static str, RegionCountDto> = BTreeMap::new();
        for outbreak in outbreaks {
            regions
                .entry(outbreak.region.as_str())
                .or_insert(RegionCountDto {
                    region: outbreak.region,
                    count: 0,
                })
                .count += 1;
        }

        Self {
            total_outbreaks: outbreaks.len() as i64,
            active_outbreaks: count_status(OutbreakStatus::Active),
            surveillance_zones: count_status(OutbreakStatus::Surveillance),
            cleared_outbreaks: count_status(OutbreakStatus::Cleared),
            total_animals_affected: outbreaks.iter().map(|o| i64::from(o.animals_affected)).sum(),
            total_animals_quarantined: outbreaks
                .iter()
                .map(|o| i64::from(o.animals_quarantined))
                .sum(),
            by_status,
            by_region: regions.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::outbreaks::models::fixtures::outbreak;

    #[test]
    fn test_filters_from_query() {
        let filters = OutbreakFilters::from(&OutbreakQuery {
            status: Some("cleared".to_string()),
            region: None,
        });
        assert_eq!(filters.status, EnumFilter::Only(OutbreakStatus::Cleared));
        assert_eq!(filters.region, EnumFilter::Any);
        assert!(!filters.matches_nothing());

        let unknown = OutbreakFilters::from(&OutbreakQuery {
            status: None,
            region: Some("gauteng".to_string()),
        });
        assert!(unknown.matches_nothing());
    }

    #[test]
    fn test_summarize_counts_and_sums() {
        let mut quiet = outbreak(OutbreakStatus::Surveillance, Region::Hhohho, 10);
        quiet.animals_affected = 0;
        quiet.animals_quarantined = 250;

        let set = vec![
            outbreak(OutbreakStatus::Active, Region::Manzini, 5),
            quiet,
            outbreak(OutbreakStatus::Cleared, Region::Lubombo, 90),
            outbreak(OutbreakStatus::Active, Region::Manzini, 3),
        ];
        let stats = OutbreakStatisticsDto::summarize(&set);

        assert_eq!(stats.total_outbreaks, set.len() as i64);
        assert_eq!(stats.active_outbreaks, 2);
        assert_eq!(stats.surveillance_zones, 1);
        assert_eq!(stats.cleared_outbreaks, 1);
        assert_eq!(stats.total_animals_affected, 45 * 3);
        assert_eq!(stats.total_animals_quarantined, 120 * 3 + 250);
    }

    #[test]
    fn test_summarize_group_order() {
        let set = vec![
            outbreak(OutbreakStatus::Cleared, Region::Shiselweni, 1),
            outbreak(OutbreakStatus::Active, Region::Manzini, 2),
            outbreak(OutbreakStatus::Cleared, Region::Hhohho, 3),
            outbreak(OutbreakStatus::Cleared, Region::Lubombo, 4),
        ];
        let stats = OutbreakStatisticsDto::summarize(&set);

        assert_eq!(
            stats.by_status,
            vec![
                StatusCountDto {
                    status: OutbreakStatus::Active,
                    count: 1
                },
                StatusCountDto {
                    status: OutbreakStatus::Cleared,
                    count: 3
                },
            ]
        );
        let regions: Vec<Region> = stats.by_region.iter().map(|r| r.region).collect();
        assert_eq!(
            regions,
            vec![
                Region::Hhohho,
                Region::Lubombo,
                Region::Manzini,
                Region::Shiselweni
            ]
        );
    }

    #[test]
    fn test_summarize_empty_set() {
        let stats = OutbreakStatisticsDto::summarize(&[]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_outbreaks"], 0);
        assert_eq!(json["by_status"], serde_json::json!([]));
        assert_eq!(json["by_region"], serde_json::json!([]));
    }

    #[test]
    fn test_list_item_omits_detail_fields() {
        let dto = OutbreakListItemDto::from(outbreak(OutbreakStatus::Active, Region::Manzini, 1));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status_display"], "Active Outbreak");
        assert!(json.get("description").is_none());
        assert!(json.get("latitude").is_none());
    }

    #[test]
    fn test_detail_emits_float_coordinates_and_null_dates() {
        let dto = OutbreakDetailDto::from(outbreak(OutbreakStatus::Active, Region::Manzini, 1));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["latitude"], -26.4833);
        assert_eq!(json["longitude"], 31.3667);
        assert!(json["date_cleared"].is_null());
        assert!(json.as_object().unwrap().contains_key("date_confirmed"));
    }
}
