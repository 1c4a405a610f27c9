//! Dip tanks: livestock treatment sites drawn on the map with a fixed 5 km radius.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/diptanks/` | No | List active tanks (`region`, `affected`) |
//! | GET | `/api/diptanks/{id}/` | No | Tank details |
//! | GET | `/api/diptanks/geojson/` | No | FeatureCollection for the map |
//! | * | `/api/admin/diptanks...` | Staff | CRUD and bulk actions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DipTankService;
