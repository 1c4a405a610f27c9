//! Outbreak records: public list, detail, map and statistics endpoints plus
//! the staff editor.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/outbreaks/` | No | List visible outbreaks (`status`, `region`) |
//! | GET | `/api/outbreaks/{id}/` | No | Outbreak details |
//! | GET | `/api/outbreaks/geojson/` | No | FeatureCollection for the map |
//! | GET | `/api/outbreaks/statistics/` | No | Counts and sums over the filtered set |
//! | GET/POST | `/api/admin/outbreaks` | Staff | List / create |
//! | GET/PUT/DELETE | `/api/admin/outbreaks/{id}` | Staff | Read / replace / delete |
//! | POST | `/api/admin/outbreaks/actions/{action}` | Staff | `mark_verified`, `mark_cleared` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OutbreakService;
