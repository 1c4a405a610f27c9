//! Administrative API for staff editors.
//!
//! Every resource exposes the same surface under `/api/admin/<resource>`:
//! paginated listing with search and filters, create, read, full replace,
//! delete, and named bulk actions. The per-resource routers live with their
//! features; this module merges them and owns the shared request bodies.

pub mod dtos;
pub mod routes;

pub use routes::AdminServices;
