//! Server-rendered HTML pages.
//!
//! | Path | Content |
//! |------|---------|
//! | `/` | Outbreak counts, featured updates and the map |
//! | `/about/` | Static |
//! | `/updates/` | Recent published updates |
//! | `/control-measures/` | Guidelines and active cordon lines |
//! | `/contact/` | Static |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PageService;
