//! Updates: news, official announcements, control guidelines and alerts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/updates/` | No | Published updates (`type`, `featured`) |
//! | GET | `/api/updates/{id}/` | No | Full update |
//! | * | `/api/admin/updates...` | Staff | CRUD and bulk actions |
//!
//! The HTML pages read featured, recent and guideline updates through
//! [`UpdateService::list`].

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UpdateService;
