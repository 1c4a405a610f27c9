//! Cordon lines: movement-control boundaries drawn as polylines.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/cordonlines/` | No | List active lines (`region`, `status`) |
//! | GET | `/api/cordonlines/{id}/` | No | Line details with vertices |
//! | GET | `/api/cordonlines/geojson/` | No | LineString FeatureCollection |
//! | * | `/api/admin/cordonlines...` | Staff | CRUD and bulk actions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CordonLineService;
