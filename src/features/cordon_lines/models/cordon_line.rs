use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::cordon_lines::dtos::CordonLineProperties;
use crate::shared::geo::LatLng;
use crate::shared::geojson::{GeoFeature, Geometry};
use crate::shared::labels::labeled_enum;
use crate::shared::region::Region;
use crate::shared::visibility::PublicVisibility;

labeled_enum! {
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
    )]
    #[sqlx(type_name = "cordon_status", rename_all = "lowercase")]
    #[serde(rename_all = "lowercase")]
    pub enum CordonStatus {
        Active = ("active", "Active"),
        Inactive = ("inactive", "Inactive"),
        Temporary = ("temporary", "Temporary"),
    }
}

impl Default for CordonStatus {
    fn default() -> Self {
        CordonStatus::Active
    }
}

/// Database model for a cordon line.
///
/// `coordinates` is the ordered polyline; its order defines the line's
/// direction and is kept as stored.
#[derive(Debug, Clone, FromRow)]
pub struct CordonLine {
    pub id: Uuid,
    pub name: String,
    pub region: Region,
    pub status: CordonStatus,
    pub coordinates: Json<Vec<LatLng>>,
    pub description: String,
    pub restrictions: String,
    pub date_established: DateTime<Utc>,
    pub date_expires: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicVisibility for CordonLine {
    const TABLE: &'static str = "cordon_lines";
    const COLUMNS: &'static str = "id, name, region, status, coordinates, description, \
        restrictions, date_established, date_expires, is_active, created_at, updated_at";
    const VISIBLE: &'static str = "is_active = TRUE";
}

impl GeoFeature for CordonLine {
    type Properties = CordonLineProperties;

    fn geometry(&self) -> Geometry {
        Geometry::LineString {
            coordinates: self.coordinates.iter().map(LatLng::position).collect(),
        }
    }

    fn properties(&self) -> CordonLineProperties {
        CordonLineProperties {
            id: self.id,
            name: self.name.clone(),
            region: self.region,
            region_display: self.region.label(),
            status: self.status,
            status_display: self.status.label(),
            description: self.description.clone(),
            restrictions: self.restrictions.clone(),
            date_established: self.date_established,
            date_expires: self.date_expires,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn cordon_line(points: &[(f64, f64)]) -> CordonLine {
        let now = Utc::now();
        CordonLine {
            id: Uuid::now_v7(),
            name: "Manzini Central Cordon Line".to_string(),
            region: Region::Manzini,
            status: CordonStatus::Active,
            coordinates: Json(
                points
                    .iter()
                    .map(|&(lat, lng)| LatLng { lat, lng })
                    .collect(),
            ),
            description: "Primary cordon line around Manzini Central".to_string(),
            restrictions: "No cattle movement across this line without permits".to_string(),
            date_established: now,
            date_expires: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
