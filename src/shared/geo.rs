use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;

/// Decimal places kept for stored coordinates
const COORDINATE_SCALE: u32 = 6;

/// One stored polyline vertex, persisted as `{"lat": .., "lng": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct LatLng {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lng: f64,
}

impl LatLng {
    /// GeoJSON position: longitude first
    pub fn position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// GeoJSON position for a stored latitude/longitude column pair
pub fn position(latitude: Decimal, longitude: Decimal) -> [f64; 2] {
    [to_f64(longitude), to_f64(latitude)]
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Convert an API coordinate into the stored fixed-precision form
pub fn to_decimal(value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(COORDINATE_SCALE))
        .ok_or_else(|| AppError::Validation(format!("Invalid coordinate value: {}", value)))
}
