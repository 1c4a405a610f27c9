use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::cordon_lines::models::{CordonLine, CordonStatus};
use crate::shared::filters::EnumFilter;
use crate::shared::geo::LatLng;
use crate::shared::region::Region;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CordonLineQuery {
    pub region: Option<String>,
    /// active, inactive or temporary
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CordonLineFilters {
    pub region: EnumFilter<Region>,
    pub status: EnumFilter<CordonStatus>,
}

impl CordonLineFilters {
    /// Lines currently restricting movement
    pub fn active() -> Self {
        Self {
            status: EnumFilter::Only(CordonStatus::Active),
            ..Default::default()
        }
    }

    pub fn matches_nothing(&self) -> bool {
        self.region.matches_nothing() || self.status.matches_nothing()
    }
}

impl From<&CordonLineQuery> for CordonLineFilters {
    fn from(query: &CordonLineQuery) -> Self {
        Self {
            region: EnumFilter::parse(query.region.as_deref()),
            status: EnumFilter::parse(query.status.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CordonLineListItemDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub status: CordonStatus,
    pub status_display: &'static str,
    pub date_established: DateTime<Utc>,
    pub date_expires: Option<DateTime<Utc>>,
    pub description: String,
}

impl From<CordonLine> for CordonLineListItemDto {
    fn from(c: CordonLine) -> Self {
        Self {
            id: c.id,
            name: c.name,
            region: c.region,
            region_display: c.region.label(),
            status: c.status,
            status_display: c.status.label(),
            date_established: c.date_established,
            date_expires: c.date_expires,
            description: c.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CordonLineDetailDto {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub status: CordonStatus,
    pub status_display: &'static str,
    pub date_established: DateTime<Utc>,
    pub date_expires: Option<DateTime<Utc>>,
    pub description: String,
    pub restrictions: String,
    /// Ordered polyline vertices
    pub coordinates: Vec<LatLng>,
}

impl From<CordonLine> for CordonLineDetailDto {
    fn from(c: CordonLine) -> Self {
        Self {
            id: c.id,
            name: c.name,
            region: c.region,
            region_display: c.region.label(),
            status: c.status,
            status_display: c.status.label(),
            date_established: c.date_established,
            date_expires: c.date_expires,
            description: c.description,
            restrictions: c.restrictions,
            coordinates: c.coordinates.0,
        }
    }
}

/// GeoJSON properties of a cordon line feature
#[derive(Debug, Clone, Serialize)]
pub struct CordonLineProperties {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub region_display: &'static str,
    pub status: CordonStatus,
    pub status_display: &'static str,
    pub description: String,
    pub restrictions: String,
    pub date_established: DateTime<Utc>,
    pub date_expires: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cordon_lines::models::fixtures::cordon_line;

    #[test]
    fn test_active_filter() {
        let filters = CordonLineFilters::active();
        assert_eq!(filters.status.value(), Some(CordonStatus::Active));
        assert_eq!(filters.region, EnumFilter::Any);
    }

    #[test]
    fn test_detail_keeps_vertex_order() {
        let dto = CordonLineDetailDto::from(cordon_line(&[(-26.0, 31.0), (-26.2, 31.2), (-26.1, 31.1)]));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json["coordinates"],
            serde_json::json!([
                {"lat": -26.0, "lng": 31.0},
                {"lat": -26.2, "lng": 31.2},
                {"lat": -26.1, "lng": 31.1}
            ])
        );
    }

    #[test]
    fn test_list_item_fields() {
        let dto = CordonLineListItemDto::from(cordon_line(&[(-26.0, 31.0), (-26.2, 31.2)]));
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("restrictions").is_none());
        assert!(json.get("coordinates").is_none());
        assert!(json["date_expires"].is_null());
    }
}
