//! Foot-wash stations: roadside disinfection points for travellers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/footwashstations/` | No | List active stations (`region`, `road_type`, `operational`) |
//! | GET | `/api/footwashstations/{id}/` | No | Station details |
//! | GET | `/api/footwashstations/geojson/` | No | FeatureCollection for the map |
//! | * | `/api/admin/footwashstations...` | Staff | CRUD and bulk actions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FootWashStationService;
