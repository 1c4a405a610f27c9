pub mod guards;
pub mod model;

pub use model::StaffCredentials;
